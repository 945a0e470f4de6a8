pub mod user_table_service;

pub use user_table_service::*;
