pub mod api_response;
pub mod lenient;

pub use api_response::ApiEnvelope;
