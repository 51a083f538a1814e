use sqlx::PgPool;

use crate::models::recruiter::RecruiterRow;
use crate::recruiters::patch::RecruiterPatch;

pub async fn list(pool: &PgPool) -> Result<Vec<RecruiterRow>, sqlx::Error> {
    sqlx::query_as::<_, RecruiterRow>("SELECT id, name, email FROM recruiters ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<RecruiterRow>, sqlx::Error> {
    sqlx::query_as::<_, RecruiterRow>("SELECT id, name, email FROM recruiters WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Lookup by the recruiter's natural key, the email. Exact match.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<RecruiterRow>, sqlx::Error> {
    sqlx::query_as::<_, RecruiterRow>("SELECT id, name, email FROM recruiters WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Recruiters whose associated company names contain the given substring.
pub async fn search_by_company_name(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<RecruiterRow>, sqlx::Error> {
    sqlx::query_as::<_, RecruiterRow>(
        "SELECT DISTINCT r.id, r.name, r.email
         FROM recruiters r
         JOIN company_recruiter cr ON cr.recruiter_id = r.id
         JOIN companies c ON c.id = cr.company_id
         WHERE c.name LIKE '%' || $1 || '%'
         ORDER BY r.id",
    )
    .bind(name)
    .fetch_all(pool)
    .await
}

pub async fn insert(pool: &PgPool, name: &str, email: &str) -> Result<RecruiterRow, sqlx::Error> {
    sqlx::query_as::<_, RecruiterRow>(
        "INSERT INTO recruiters (name, email) VALUES ($1, $2) RETURNING id, name, email",
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await
}

/// Applies a partial update. Absent patch fields keep their stored value.
pub async fn apply_patch(
    pool: &PgPool,
    id: i64,
    patch: &RecruiterPatch,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE recruiters
         SET name = COALESCE($2, name),
             email = COALESCE($3, email)
         WHERE id = $1",
    )
    .bind(id)
    .bind(patch.name.as_deref())
    .bind(patch.email.as_deref())
    .execute(pool)
    .await?;
    Ok(())
}

/// Deletes a recruiter as one atomic unit: detaches it from every company's
/// recruiter set, then removes the row. Jobs referencing the recruiter are
/// removed by the schema's ON DELETE CASCADE, not a manual loop.
pub async fn delete(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM company_recruiter WHERE recruiter_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM recruiters WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await
}

/// Names of the companies associated with a recruiter, for DTO projection.
pub async fn company_names_for(pool: &PgPool, recruiter_id: i64) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT c.name
         FROM companies c
         JOIN company_recruiter cr ON cr.company_id = c.id
         WHERE cr.recruiter_id = $1
         ORDER BY c.name",
    )
    .bind(recruiter_id)
    .fetch_all(pool)
    .await
}

/// Titles of the jobs owned by a recruiter, for DTO projection.
pub async fn job_titles_for(pool: &PgPool, recruiter_id: i64) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT title FROM jobs WHERE recruiter_id = $1 ORDER BY id")
        .bind(recruiter_id)
        .fetch_all(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{associations, companies, jobs};

    #[sqlx::test]
    async fn delete_detaches_companies_and_cascades_jobs(pool: PgPool) -> sqlx::Result<()> {
        let company = companies::insert(&pool, "Twitter").await?;
        let recruiter = insert(&pool, "Paul Pogba", "paul@x.com").await?;
        associations::associate(&pool, company.id, recruiter.id).await?;
        jobs::insert(&pool, "Java Developer", "15K", "Tel-Aviv", company.id, recruiter.id).await?;
        jobs::insert(&pool, "CPP Developer", "12K", "Holon", company.id, recruiter.id).await?;

        delete(&pool, recruiter.id).await?;

        assert!(find_by_id(&pool, recruiter.id).await?.is_none());
        // Detached from every company's recruiter set.
        let join_rows: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM company_recruiter WHERE recruiter_id = $1")
                .bind(recruiter.id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(join_rows, 0);
        // Both jobs referencing the recruiter are gone with it.
        assert!(jobs::list(&pool).await?.is_empty());
        // The company itself survives.
        assert!(companies::find_by_name(&pool, "Twitter").await?.is_some());
        Ok(())
    }

    #[sqlx::test]
    async fn find_by_email_is_the_natural_key_lookup(pool: PgPool) -> sqlx::Result<()> {
        let saved = insert(&pool, "Barak Itzhaki", "barak@x.com").await?;
        let found = find_by_email(&pool, "barak@x.com").await?.unwrap();
        assert_eq!(found.id, saved.id);
        assert!(find_by_email(&pool, "other@x.com").await?.is_none());
        Ok(())
    }
}
