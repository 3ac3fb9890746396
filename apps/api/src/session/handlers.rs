use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::catalog::Catalog;
use crate::analysis::detect::detect_best_role;
use crate::analysis::gap::compute_missing;
use crate::clients::courses::Course;
use crate::errors::AppError;
use crate::session::profile::CandidateProfile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub skill_count: usize,
    pub project_count: usize,
}

#[derive(Deserialize)]
pub struct AddSkillsRequest {
    /// Comma-separated free text, e.g. "Power BI, Kubernetes".
    pub skills: String,
}

#[derive(Deserialize)]
pub struct SelectRoleRequest {
    /// `null` clears the explicit choice and re-enables auto-detection.
    pub role: Option<String>,
}

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub role: String,
    pub missing_skills: Vec<String>,
    pub courses: Vec<Course>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state
            .catalog
            .roles()
            .iter()
            .map(|r| r.name.clone())
            .collect(),
    })
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.sessions.create();
    info!("Session created: {session_id}");
    (StatusCode::CREATED, Json(SessionCreatedResponse { session_id }))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateProfile>, AppError> {
    Ok(Json(state.sessions.get(id)?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id)?;
    info!("Session ended: {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/resume
///
/// Forwards the uploaded file to the parser service, then replaces the
/// session's skill and project lists wholesale with the parsed result.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (filename, data) = extract_resume_part(multipart).await?;

    // Busy for the duration of the parser call; released on drop.
    let _guard = state.sessions.begin_call(id)?;
    let parsed = state.parser.parse(filename, data).await?;

    let profile = state.sessions.with_profile(id, |p| {
        p.replace_from_parse(parsed.skills, parsed.projects);
        p.clone()
    })?;

    info!(
        "Session {id}: resume parsed ({} skills, {} projects)",
        profile.skills.len(),
        profile.projects.len()
    );

    Ok(Json(UploadResponse {
        skill_count: profile.skills.len(),
        project_count: profile.projects.len(),
        skills: profile.skills,
        projects: profile.projects,
    }))
}

/// POST /api/v1/sessions/:id/skills
pub async fn handle_add_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddSkillsRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile = state.sessions.with_profile(id, |p| {
        p.add_manual_skills(&req.skills);
        p.clone()
    })?;
    Ok(Json(profile))
}

/// PUT /api/v1/sessions/:id/role
pub async fn handle_select_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectRoleRequest>,
) -> Result<Json<CandidateProfile>, AppError> {
    if let Some(role) = &req.role {
        if !state.catalog.contains_role(role) {
            return Err(AppError::Validation(format!("Unknown role: {role}")));
        }
    }
    let profile = state.sessions.with_profile(id, |p| {
        p.selected_role = req.role.clone();
        p.clone()
    })?;
    Ok(Json(profile))
}

/// POST /api/v1/sessions/:id/analysis
///
/// Resolves the role (explicit choice first, auto-detection second),
/// computes the missing-skill list, and fetches course recommendations
/// for it. Refusals are user-input errors, not crashes.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let profile = state.sessions.get(id)?;
    let (role, missing) = resolve_analysis(&state.catalog, &profile)?;

    let _guard = state.sessions.begin_call(id)?;

    // Prior results are cleared before the upstream call, matching the
    // refusal policy: a failed lookup leaves no stale recommendations.
    state.sessions.with_profile(id, |p| p.clear_results())?;
    let payload: Vec<String> = missing.iter().map(|s| s.to_lowercase()).collect();
    let courses = state.courses.recommend(&payload).await?;

    state
        .sessions
        .with_profile(id, |p| p.last_missing = missing.clone())?;

    info!(
        "Session {id}: analyzed as '{role}' ({} missing, {} courses)",
        missing.len(),
        courses.len()
    );

    Ok(Json(AnalysisResponse {
        role,
        missing_skills: missing,
        courses,
    }))
}

/// The pure core of gap analysis: refusal rules, role resolution, and the
/// missing-skill computation. Separated from the handler so the business
/// rules are testable without HTTP or upstream services.
fn resolve_analysis(
    catalog: &Catalog,
    profile: &CandidateProfile,
) -> Result<(String, Vec<String>), AppError> {
    let skills = profile.skill_set();
    if skills.is_empty() {
        return Err(AppError::Validation(
            "Upload resume or add skills first.".to_string(),
        ));
    }

    let role = profile
        .selected_role
        .clone()
        .or_else(|| detect_best_role(catalog, &skills).map(String::from))
        .ok_or_else(|| {
            AppError::Validation("Select a role or upload a resume with clear skills.".to_string())
        })?;

    let missing = compute_missing(catalog, &role, &skills);
    Ok((role, missing))
}

/// Pulls the `resume` file part out of the multipart body.
/// No file part is a user-input error, not a crash.
async fn extract_resume_part(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or("resume").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            return Ok((filename, data));
        }
    }
    Err(AppError::Validation(
        "Choose a resume file first (.pdf/.docx).".to_string(),
    ))
}
