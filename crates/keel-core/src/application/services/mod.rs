//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a model" or "create an application".

pub mod app_service;
pub mod generate_service;

pub use app_service::{AppService, MANIFEST_FILE};
pub use generate_service::{GenerateService, GenerationResult};
