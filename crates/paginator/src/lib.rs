pub mod error;
pub mod paginator;
pub mod repository;
pub mod sample;
