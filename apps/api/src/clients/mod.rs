//! Clients for the two external collaborators: the résumé parser service
//! and the course recommendation service.
//!
//! ARCHITECTURAL RULE: no other module talks to these services directly.
//! Each client is the single point of entry for its boundary and owns the
//! "optional field defaults to empty" normalization for its wire shape.

pub mod courses;
pub mod parser;
