pub mod bmi;
pub mod health;

use axum::Router;

pub fn router() -> Router {
    Router::new()
        .nest("/api/bmi", bmi::routes::routes())
        .merge(health::routes())
}
