pub mod consultation;
pub mod message;
pub mod timestamp;

pub use consultation::ConsultationRequest;
pub use message::MessageRequest;

use serde::{de::DeserializeOwned, Serialize};

/// The document collections the service writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Consultations,
    Messages,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Consultations, Collection::Messages];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Consultations => "consultations",
            Collection::Messages => "messages",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A stored submission record and the collection it belongs to.
pub trait Submission: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}
