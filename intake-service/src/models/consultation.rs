use super::{timestamp, Collection, Submission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structured inquiry from a prospective client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub looking_for: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ConsultationRequest {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        country_code: String,
        looking_for: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            country_code,
            looking_for,
            timestamp: timestamp::now(),
        }
    }
}

impl Submission for ConsultationRequest {
    const COLLECTION: Collection = Collection::Consultations;

    fn id(&self) -> &str {
        &self.id
    }
}
