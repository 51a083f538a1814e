pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as job_handlers;
use crate::recruiters::handlers as recruiter_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job API
        .route(
            "/jobs",
            get(job_handlers::all_jobs).post(job_handlers::create_job),
        )
        .route("/jobs/info", get(job_handlers::all_jobs_info))
        // GET on /jobs/:id is the partial-title search; the path segment is
        // only parsed as an id for PUT and DELETE.
        .route(
            "/jobs/:id",
            get(job_handlers::jobs_by_title)
                .put(job_handlers::update_job)
                .delete(job_handlers::delete_job),
        )
        .route("/jobs/:id/info", get(job_handlers::single_job_info))
        .route(
            "/jobs/byrecruiter/:name",
            get(job_handlers::jobs_by_recruiter),
        )
        .route("/jobs/bycompany/:name", get(job_handlers::jobs_by_company))
        // Recruiter API
        .route(
            "/recruiters",
            get(recruiter_handlers::all_recruiters).post(recruiter_handlers::create_recruiter),
        )
        .route(
            "/recruiters/info",
            get(recruiter_handlers::all_recruiters_info),
        )
        .route(
            "/recruiters/randomUser",
            post(recruiter_handlers::create_random_recruiter),
        )
        .route(
            "/recruiters/bycompany/:name",
            get(recruiter_handlers::recruiters_by_company),
        )
        .route(
            "/recruiters/:id",
            axum::routing::put(recruiter_handlers::update_recruiter)
                .delete(recruiter_handlers::delete_recruiter),
        )
        .route(
            "/recruiters/:id/info",
            get(recruiter_handlers::single_recruiter_info),
        )
        .with_state(state)
}
