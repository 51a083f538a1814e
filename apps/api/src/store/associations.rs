//! Company <-> Recruiter association management.
//!
//! The relation is symmetric by construction: one row in `company_recruiter`
//! is both "recruiter in company's set" and "company in recruiter's set", so
//! the two sides cannot drift apart. Both operations are idempotent.

use sqlx::PgPool;

/// Associates a company with a recruiter. Adding an already-present pair is
/// a no-op.
pub async fn associate(
    pool: &PgPool,
    company_id: i64,
    recruiter_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO company_recruiter (company_id, recruiter_id) VALUES ($1, $2)
         ON CONFLICT DO NOTHING",
    )
    .bind(company_id)
    .bind(recruiter_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Removes an association. Removing an absent pair is a no-op.
pub async fn dissociate(
    pool: &PgPool,
    company_id: i64,
    recruiter_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM company_recruiter WHERE company_id = $1 AND recruiter_id = $2")
        .bind(company_id)
        .bind(recruiter_id)
        .execute(pool)
        .await?;
    Ok(())
}
