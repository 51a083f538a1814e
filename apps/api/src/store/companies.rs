use sqlx::PgPool;

use crate::models::company::CompanyRow;

pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>("SELECT id, name FROM companies WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, name: &str) -> Result<CompanyRow, sqlx::Error> {
    sqlx::query_as::<_, CompanyRow>("INSERT INTO companies (name) VALUES ($1) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await
}

/// Resolve-or-create by the company's natural key, its name.
/// Reuses the existing row when one matches exactly; never duplicates.
pub async fn resolve_or_create(pool: &PgPool, name: &str) -> Result<CompanyRow, sqlx::Error> {
    if let Some(existing) = find_by_name(pool, name).await? {
        return Ok(existing);
    }
    insert(pool, name).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn resolve_or_create_reuses_existing_name(pool: PgPool) -> sqlx::Result<()> {
        let first = resolve_or_create(&pool, "Facebook").await?;
        let second = resolve_or_create(&pool, "Facebook").await?;
        assert_eq!(first.id, second.id);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);
        Ok(())
    }

    #[sqlx::test]
    async fn resolve_or_create_matches_names_exactly(pool: PgPool) -> sqlx::Result<()> {
        let facebook = resolve_or_create(&pool, "Facebook").await?;
        let lowercase = resolve_or_create(&pool, "facebook").await?;
        assert_ne!(facebook.id, lowercase.id);
        Ok(())
    }
}
