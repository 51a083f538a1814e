use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::hypermedia::{self, Collection, Resource};
use crate::models::recruiter::{NewRecruiter, RecruiterDto, RecruiterRow};
use crate::recruiters::patch::RecruiterPatch;
use crate::state::AppState;
use crate::store;
use crate::validation;

async fn to_dto(pool: &PgPool, row: RecruiterRow) -> Result<(i64, RecruiterDto), AppError> {
    let id = row.id;
    let companies = store::recruiters::company_names_for(pool, id).await?;
    let jobs = store::recruiters::job_titles_for(pool, id).await?;
    Ok((id, RecruiterDto::new(row, companies, jobs)))
}

/// GET /recruiters — raw entity projection with links.
pub async fn all_recruiters(
    State(state): State<AppState>,
) -> Result<Json<Collection<RecruiterRow>>, AppError> {
    let rows = store::recruiters::list(&state.db).await?;
    let items = rows.into_iter().map(|row| (row.id, row)).collect();
    Ok(Json(hypermedia::recruiter_collection(items)))
}

/// GET /recruiters/info — DTO projection of all recruiters.
pub async fn all_recruiters_info(
    State(state): State<AppState>,
) -> Result<Json<Collection<RecruiterDto>>, AppError> {
    let rows = store::recruiters::list(&state.db).await?;
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        items.push(to_dto(&state.db, row).await?);
    }
    Ok(Json(hypermedia::recruiter_collection(items)))
}

/// GET /recruiters/{id}/info — single recruiter DTO; 404 if absent.
pub async fn single_recruiter_info(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Resource<RecruiterDto>>, AppError> {
    let row = store::recruiters::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recruiter with id {id}")))?;
    let (id, dto) = to_dto(&state.db, row).await?;
    Ok(Json(hypermedia::recruiter_resource(id, dto)))
}

/// GET /recruiters/bycompany/{name} — recruiters whose associated company
/// names contain the substring.
pub async fn recruiters_by_company(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Collection<RecruiterDto>>, AppError> {
    let rows = store::recruiters::search_by_company_name(&state.db, &name).await?;
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        items.push(to_dto(&state.db, row).await?);
    }
    Ok(Json(hypermedia::recruiter_collection(items)))
}

/// Business-rule conflict check shared by the two create paths: a recruiter
/// email may only exist once, enforced before persistence, not by the schema.
async fn ensure_email_free(pool: &PgPool, email: &str) -> Result<(), AppError> {
    if store::recruiters::find_by_email(pool, email).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Recruiter with email {email} already exists."
        )));
    }
    Ok(())
}

/// POST /recruiters — manual creation; 400 on bad email, 409 on duplicate.
pub async fn create_recruiter(
    State(state): State<AppState>,
    Json(new_recruiter): Json<NewRecruiter>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_email(&new_recruiter.email).map_err(AppError::Validation)?;
    ensure_email_free(&state.db, &new_recruiter.email).await?;

    let saved =
        store::recruiters::insert(&state.db, &new_recruiter.name, &new_recruiter.email).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/recruiters/{}", saved.id))],
    ))
}

/// POST /recruiters/randomUser — creation from an externally fetched
/// identity. The fetch runs on a worker task and is awaited under a bounded
/// timeout; the same conflict check as manual creation applies.
pub async fn create_random_recruiter(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let identity = state.random_user.fetch_identity_bounded().await?;
    tracing::info!("Fetched random identity: {}", identity.email);

    ensure_email_free(&state.db, &identity.email).await?;

    let saved =
        store::recruiters::insert(&state.db, &identity.full_name, &identity.email).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/recruiters/{}/info", saved.id))],
    ))
}

/// PUT /recruiters/{id} — partial update from a field map. Recognized
/// fields: name, email; unknown keys and non-string values are ignored.
pub async fn update_recruiter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<Map<String, Value>>,
) -> Result<Json<Resource<RecruiterDto>>, AppError> {
    if store::recruiters::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Recruiter with id {id}")));
    }

    let patch = RecruiterPatch::from_map(&request);
    if !patch.is_empty() {
        store::recruiters::apply_patch(&state.db, id, &patch).await?;
    }

    let row = store::recruiters::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recruiter with id {id}")))?;
    let (id, dto) = to_dto(&state.db, row).await?;
    Ok(Json(hypermedia::recruiter_resource(id, dto)))
}

/// DELETE /recruiters/{id} — detaches the recruiter from every company and
/// deletes it; jobs referencing it go with it via the schema cascade.
pub async fn delete_recruiter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if store::recruiters::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Recruiter with id {id}")));
    }
    store::recruiters::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
