pub mod error;
pub mod query;
pub mod requests;
pub mod row;
pub mod store;
