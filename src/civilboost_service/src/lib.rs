pub mod api_service;
pub mod tracing;

pub use api_service::ApiService;
