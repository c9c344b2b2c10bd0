use axum::{
    Json,
    extract::{Path, Query},
    response::{IntoResponse, Response},
};
use bmi::dto::bmi::{CategoryResponse, ComputeBmiRequest, ComputeBmiResponse};
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    post,
    path = "/api/bmi/compute",
    request_body = ComputeBmiRequest,
    responses(
        (status = 200, description = "BMI computed successfully", body = ComputeBmiResponse),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Malformed payload or result out of range")
    ),
    tag = "bmi"
)]
pub async fn compute_bmi(Json(req): Json<ComputeBmiRequest>) -> WebResult<Response> {
    req.validate()?;

    let response = services::compute(&req)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/bmi/compute",
    params(ComputeBmiRequest),
    responses(
        (status = 200, description = "BMI computed successfully", body = ComputeBmiResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "bmi"
)]
pub async fn compute_bmi_query(Query(req): Query<ComputeBmiRequest>) -> WebResult<Response> {
    req.validate()?;

    let response = services::compute(&req)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/bmi/categories",
    responses(
        (status = 200, description = "All BMI categories in ascending order", body = Vec<CategoryResponse>)
    ),
    tag = "bmi"
)]
pub async fn list_categories() -> Response {
    Json(services::list_categories()).into_response()
}

#[utoipa::path(
    get,
    path = "/api/bmi/categories/{index}",
    params(
        ("index" = usize, Path, description = "Position in the category table (0-7)")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "No category at this index")
    ),
    tag = "bmi"
)]
pub async fn get_category(Path(index): Path<usize>) -> WebResult<Response> {
    let category = services::get_category(index).ok_or(WebError::NotFound)?;

    Ok(Json(category).into_response())
}
