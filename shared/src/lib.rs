pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use config::*;
pub use errors::*;
pub use models::*;
pub use services::*;
