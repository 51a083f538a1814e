use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::hypermedia::{self, Collection, Resource};
use crate::jobs::patch::JobPatch;
use crate::models::job::{JobDto, JobRow, NewJob};
use crate::state::AppState;
use crate::store;
use crate::validation;

/// GET /jobs — raw entity projection with links, surrogate keys included.
pub async fn all_jobs(State(state): State<AppState>) -> Result<Json<Collection<JobRow>>, AppError> {
    let rows = store::jobs::list(&state.db).await?;
    let items = rows.into_iter().map(|row| (row.id, row)).collect();
    Ok(Json(hypermedia::job_collection(items)))
}

/// GET /jobs/info — DTO projection of all jobs.
pub async fn all_jobs_info(
    State(state): State<AppState>,
) -> Result<Json<Collection<JobDto>>, AppError> {
    let rows = store::jobs::list_detailed(&state.db).await?;
    let items = rows.into_iter().map(|row| (row.id, JobDto::from(row))).collect();
    Ok(Json(hypermedia::job_collection(items)))
}

/// GET /jobs/{id}/info — single job DTO; 404 if absent.
pub async fn single_job_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Resource<JobDto>>, AppError> {
    let row = store::jobs::find_detailed(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job with id {id}")))?;
    Ok(Json(hypermedia::job_resource(id, JobDto::from(row))))
}

/// GET /jobs/{title} — jobs whose title contains the substring.
/// An empty result set is a valid empty collection.
pub async fn jobs_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Collection<JobDto>>, AppError> {
    let rows = store::jobs::search_by_title(&state.db, &title).await?;
    let items = rows.into_iter().map(|row| (row.id, JobDto::from(row))).collect();
    Ok(Json(hypermedia::job_collection(items)))
}

/// GET /jobs/byrecruiter/{name} — jobs whose recruiter name contains the
/// substring.
pub async fn jobs_by_recruiter(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Collection<JobDto>>, AppError> {
    let rows = store::jobs::search_by_recruiter_name(&state.db, &name).await?;
    let items = rows.into_iter().map(|row| (row.id, JobDto::from(row))).collect();
    Ok(Json(hypermedia::job_collection(items)))
}

/// GET /jobs/bycompany/{name} — jobs whose company name contains the
/// substring.
pub async fn jobs_by_company(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Collection<JobDto>>, AppError> {
    let rows = store::jobs::search_by_company_name(&state.db, &name).await?;
    let items = rows.into_iter().map(|row| (row.id, JobDto::from(row))).collect();
    Ok(Json(hypermedia::job_collection(items)))
}

/// POST /jobs — creates a job from an embedded company (by name) and
/// recruiter (by name+email).
///
/// Resolution policy: reuse the company/recruiter when the natural key
/// matches, create otherwise, then (re)establish the association — the
/// association write is idempotent, so this holds even when both already
/// existed and were already linked. Validation runs before any persistence.
pub async fn create_job(
    State(state): State<AppState>,
    Json(new_job): Json<NewJob>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_title(&new_job.title).map_err(AppError::Validation)?;
    validation::validate_salary(&new_job.salary).map_err(AppError::Validation)?;

    let company = store::companies::resolve_or_create(&state.db, &new_job.company.name).await?;

    let recruiter =
        match store::recruiters::find_by_email(&state.db, &new_job.recruiter.email).await? {
            Some(existing) => existing,
            None => {
                store::recruiters::insert(
                    &state.db,
                    &new_job.recruiter.name,
                    &new_job.recruiter.email,
                )
                .await?
            }
        };

    store::associations::associate(&state.db, company.id, recruiter.id).await?;

    let id = store::jobs::insert(
        &state.db,
        &new_job.title,
        &new_job.salary,
        &new_job.location,
        company.id,
        recruiter.id,
    )
    .await?;

    tracing::info!("Created job {id} at company {}", company.name);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/jobs/{id}"))],
    ))
}

/// PUT /jobs/{id} — partial update from a field map. Recognized fields:
/// title, salary, location; unknown keys and non-string values are ignored.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<Map<String, Value>>,
) -> Result<Json<Resource<JobDto>>, AppError> {
    if store::jobs::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Job with id {id}")));
    }

    let patch = JobPatch::from_map(&request);
    if !patch.is_empty() {
        store::jobs::apply_patch(&state.db, id, &patch).await?;
    }

    let row = store::jobs::find_detailed(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job with id {id}")))?;
    Ok(Json(hypermedia::job_resource(id, JobDto::from(row))))
}

/// DELETE /jobs/{id} — 404 if absent; removes the single row only.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !store::jobs::exists(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Job with id {id}")));
    }
    store::jobs::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
