use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /consultations`.
///
/// Missing fields deserialize as empty strings so that validation can report
/// every absent field at once instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateConsultationRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Country code is required"))]
    pub country_code: String,

    #[validate(length(min = 1, message = "Please describe what you are looking for"))]
    pub looking_for: String,
}

/// Body of `POST /messages`. Only the message text is mandatory.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateMessageRequest {
    pub name: Option<String>,
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}
