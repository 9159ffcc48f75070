pub mod cursor;
pub mod page;
pub mod token;
