pub mod params;
pub mod status;

use axum::{
    routing::{get, post},
    Router,
};

use crate::job_postings::handlers as job_postings;
use crate::positions;
use crate::scratch;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status::status_handler))
        // Job postings
        .route(
            "/api/job-posting",
            get(job_postings::handle_lookup)
                .post(job_postings::handle_analyze)
                .delete(job_postings::handle_delete),
        )
        .route(
            "/api/job-posting/:id",
            get(job_postings::handle_get).delete(job_postings::handle_delete_by_path),
        )
        .route("/api/positions", get(positions::handle_list_positions))
        // Skills preparation
        .route("/api/prepare-skills", post(skills::handle_prepare_skills))
        // Demo CRUD
        .route(
            "/api/test",
            get(scratch::handle_lookup)
                .post(scratch::handle_create)
                .put(scratch::handle_update)
                .delete(scratch::handle_delete),
        )
        .with_state(state)
}
