//! MongoDB persistence for the query history.

pub mod document;
pub mod settings;
pub mod store;

pub use settings::MongoSettings;
pub use store::MongoRecordStore;
