use sqlx::PgPool;

use crate::jobs::patch::JobPatch;
use crate::models::job::{JobDetailRow, JobRow};

const DETAIL_SELECT: &str = "
    SELECT j.id, j.title, j.salary, j.location,
           c.name AS company_name,
           r.name AS recruiter_name, r.email AS recruiter_email
    FROM jobs j
    JOIN companies c ON c.id = j.company_id
    JOIN recruiters r ON r.id = j.recruiter_id";

pub async fn list(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT id, title, salary, location, company_id, recruiter_id FROM jobs ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_detailed(pool: &PgPool) -> Result<Vec<JobDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, JobDetailRow>(&format!("{DETAIL_SELECT} ORDER BY j.id"))
        .fetch_all(pool)
        .await
}

pub async fn find_detailed(pool: &PgPool, id: i64) -> Result<Option<JobDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, JobDetailRow>(&format!("{DETAIL_SELECT} WHERE j.id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT id, title, salary, location, company_id, recruiter_id FROM jobs WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

// Substring containment, case-sensitive (LIKE), matching the repository
// lookups of the persisted entities by partial field value.

pub async fn search_by_title(pool: &PgPool, title: &str) -> Result<Vec<JobDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, JobDetailRow>(&format!(
        "{DETAIL_SELECT} WHERE j.title LIKE '%' || $1 || '%' ORDER BY j.id"
    ))
    .bind(title)
    .fetch_all(pool)
    .await
}

pub async fn search_by_recruiter_name(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<JobDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, JobDetailRow>(&format!(
        "{DETAIL_SELECT} WHERE r.name LIKE '%' || $1 || '%' ORDER BY j.id"
    ))
    .bind(name)
    .fetch_all(pool)
    .await
}

pub async fn search_by_company_name(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<JobDetailRow>, sqlx::Error> {
    sqlx::query_as::<_, JobDetailRow>(&format!(
        "{DETAIL_SELECT} WHERE c.name LIKE '%' || $1 || '%' ORDER BY j.id"
    ))
    .bind(name)
    .fetch_all(pool)
    .await
}

pub async fn insert(
    pool: &PgPool,
    title: &str,
    salary: &str,
    location: &str,
    company_id: i64,
    recruiter_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO jobs (title, salary, location, company_id, recruiter_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(title)
    .bind(salary)
    .bind(location)
    .bind(company_id)
    .bind(recruiter_id)
    .fetch_one(pool)
    .await
}

/// Applies a partial update. Absent patch fields keep their stored value.
pub async fn apply_patch(pool: &PgPool, id: i64, patch: &JobPatch) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE jobs
         SET title = COALESCE($2, title),
             salary = COALESCE($3, salary),
             location = COALESCE($4, location)
         WHERE id = $1",
    )
    .bind(id)
    .bind(patch.title.as_deref())
    .bind(patch.salary.as_deref())
    .bind(patch.location.as_deref())
    .execute(pool)
    .await?;
    Ok(())
}

/// Removes the single job row. No cascading side effects.
pub async fn delete(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
