use super::{timestamp, Collection, Submission};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-form contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRequest {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub message: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl MessageRequest {
    pub fn new(name: Option<String>, email: Option<String>, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            message,
            timestamp: timestamp::now(),
        }
    }
}

impl Submission for MessageRequest {
    const COLLECTION: Collection = Collection::Messages;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_sender_serializes_as_null() {
        let msg = MessageRequest::new(None, None, "hello".to_string());
        let json = serde_json::to_value(&msg).unwrap();

        assert!(json["name"].is_null());
        assert!(json["email"].is_null());
        assert_eq!(json["message"], "hello");
        assert!(json["timestamp"].as_str().unwrap().ends_with("+00:00"));
    }

    #[test]
    fn each_message_gets_its_own_id() {
        let a = MessageRequest::new(None, None, "a".to_string());
        let b = MessageRequest::new(None, None, "b".to_string());
        assert_ne!(a.id, b.id);
    }
}
