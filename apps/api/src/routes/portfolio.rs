use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{EducationEntry, ExperienceEntry, PersonalInfo};
use crate::models::project::{CategoryFilter, Project};
use crate::models::skill::SkillSet;
use crate::models::PortfolioComplete;
use crate::routes::require_admin;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub category: Option<String>,
    #[serde(default)]
    pub featured_only: bool,
}

#[derive(Serialize)]
pub struct AboutResponse {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
}

#[derive(Deserialize)]
pub struct ImportRequest {
    pub repo_ids: Vec<u64>,
}

/// GET /api/v1/portfolio/personal
pub async fn handle_personal(State(state): State<AppState>) -> Json<PersonalInfo> {
    Json(state.resolver.personal_info().await)
}

/// GET /api/v1/portfolio/education
pub async fn handle_education(State(state): State<AppState>) -> Json<Vec<EducationEntry>> {
    Json(state.resolver.education().await)
}

/// GET /api/v1/portfolio/experience
pub async fn handle_experience(State(state): State<AppState>) -> Json<Vec<ExperienceEntry>> {
    Json(state.resolver.experience().await)
}

/// GET /api/v1/portfolio/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<SkillSet> {
    Json(state.resolver.skills().await)
}

/// GET /api/v1/portfolio/about
pub async fn handle_about(State(state): State<AppState>) -> Json<AboutResponse> {
    let (personal, education) = state.resolver.about().await;
    Json(AboutResponse {
        personal,
        education,
    })
}

/// GET /api/v1/portfolio/projects
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> Json<Vec<Project>> {
    let filter = CategoryFilter::parse(params.category.as_deref());
    Json(state.resolver.projects(&filter, params.featured_only).await)
}

/// GET /api/v1/portfolio/projects/featured
pub async fn handle_featured_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.resolver.featured_projects().await)
}

/// GET /api/v1/portfolio/complete
pub async fn handle_complete(State(state): State<AppState>) -> Json<PortfolioComplete> {
    Json(state.resolver.complete().await)
}

/// POST /api/v1/portfolio/projects/bulk (admin)
pub async fn handle_create_bulk(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(projects): Json<Vec<Project>>,
) -> Result<(StatusCode, Json<Vec<Project>>), AppError> {
    require_admin(&headers, &state.config)?;
    if projects.is_empty() {
        return Err(AppError::Validation("No projects provided".to_string()));
    }
    let created = state.resolver.create_projects_bulk(projects).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/v1/portfolio/projects/import (admin)
pub async fn handle_import(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ImportRequest>,
) -> Result<(StatusCode, Json<Vec<Project>>), AppError> {
    require_admin(&headers, &state.config)?;
    if req.repo_ids.is_empty() {
        return Err(AppError::Validation("Select at least one repository".to_string()));
    }
    let imported = state.resolver.import_github_projects(&req.repo_ids).await?;
    Ok((StatusCode::CREATED, Json(imported)))
}
