#![forbid(unsafe_code)]

pub mod config;
pub mod gateway;
pub mod http;

pub use config::ApiConfig;
pub use gateway::{GatewayError, InMemoryGateway, UniversityGateway};
pub use http::HttpGateway;
