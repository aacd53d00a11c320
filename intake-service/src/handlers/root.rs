use crate::dtos::RootResponse;
use axum::Json;

pub const API_BANNER: &str = "Advocate Firm API";

pub async fn api_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_BANNER.to_string(),
    })
}
