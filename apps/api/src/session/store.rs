use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::profile::CandidateProfile;

struct Session {
    profile: CandidateProfile,
    /// In-flight guard for suspending operations (upload-and-parse, course
    /// lookup). A second such request while one is running is refused
    /// instead of interleaving with it.
    busy: bool,
}

/// In-memory session store. Cheap to clone; all clones share the same map.
///
/// The lock is never held across an await point: handlers take what they
/// need under the lock, release it, perform upstream calls, then re-lock to
/// merge results.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.write().insert(
            id,
            Session {
                profile: CandidateProfile::new(),
                busy: false,
            },
        );
        id
    }

    pub fn get(&self, id: Uuid) -> Result<CandidateProfile, AppError> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .map(|s| s.profile.clone())
            .ok_or_else(|| not_found(id))
    }

    pub fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.write().remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    /// Runs a closure against the session's profile under the write lock.
    pub fn with_profile<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut CandidateProfile) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.write();
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(&mut session.profile))
    }

    /// Marks the session busy for the duration of an upstream call. Refuses
    /// with [`AppError::Busy`] if a call is already in flight. The returned
    /// guard clears the flag on drop, so error paths cannot wedge a session.
    pub fn begin_call(&self, id: Uuid) -> Result<BusyGuard, AppError> {
        let mut sessions = self.write();
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        if session.busy {
            return Err(AppError::Busy);
        }
        session.busy = true;
        Ok(BusyGuard {
            store: self.clone(),
            id,
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Session>> {
        self.inner.write().expect("session store lock poisoned")
    }
}

pub struct BusyGuard {
    store: SessionStore,
    id: Uuid,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Ok(mut sessions) = self.store.inner.write() {
            if let Some(session) = sessions.get_mut(&self.id) {
                session.busy = false;
            }
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
