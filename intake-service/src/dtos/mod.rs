pub mod submissions;

pub use submissions::{CreateConsultationRequest, CreateMessageRequest, RootResponse};
