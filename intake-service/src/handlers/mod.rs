pub mod consultations;
pub mod health;
pub mod messages;
pub mod root;

pub use consultations::{create_consultation, list_consultations};
pub use health::{health_check, readiness_check};
pub use messages::{create_message, list_messages};
pub use root::api_root;
