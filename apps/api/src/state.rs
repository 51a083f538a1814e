use sqlx::PgPool;

use crate::random_user::RandomUserClient;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub random_user: RandomUserClient,
}
