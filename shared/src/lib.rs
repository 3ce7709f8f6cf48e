pub mod constants;
pub mod error;
pub mod types;
pub mod utils;
