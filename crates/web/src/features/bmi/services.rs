use bmi::{
    Category,
    dto::bmi::{CategoryResponse, ComputeBmiRequest, ComputeBmiResponse},
    error::Result,
    services::bmi_computation,
};

/// Compute BMI and category for a validated request
pub fn compute(req: &ComputeBmiRequest) -> Result<ComputeBmiResponse> {
    let result = bmi_computation::compute_bmi(req.weight, req.height, req.unit)?;
    Ok(ComputeBmiResponse::from(result))
}

/// The full category table, in classification order
pub fn list_categories() -> Vec<CategoryResponse> {
    CategoryResponse::table()
}

/// A single category by table index
pub fn get_category(index: usize) -> Option<CategoryResponse> {
    Category::get(index).map(|category| CategoryResponse::new(index, category))
}
