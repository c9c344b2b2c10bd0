use axum::{Router, routing::get};

use super::handlers::{compute_bmi, compute_bmi_query, get_category, list_categories};

pub fn routes() -> Router {
    Router::new()
        .route("/compute", get(compute_bmi_query).post(compute_bmi))
        .route("/categories", get(list_categories))
        .route("/categories/:index", get(get_category))
}
