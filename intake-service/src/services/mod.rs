pub mod database;
pub mod gateway;
pub mod memory;
pub mod store;
pub mod submissions;

pub use database::MongoStore;
pub use gateway::StorageGateway;
pub use memory::InMemoryStore;
pub use store::SubmissionStore;
pub use submissions::SubmissionService;
