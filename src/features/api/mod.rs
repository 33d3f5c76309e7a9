pub mod error_conversions;
pub mod error_responses;
pub mod extract;

pub use extract::ApiJson;
