//! Keel Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Keel generators, following a
//! ports and adapters architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             keel-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (GenerateService, AppService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Renderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     keel-adapters (Infrastructure)      │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (GeneratorRequest, Layout, plan, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keel_core::prelude::*;
//!
//! let request = GeneratorRequest::new(GeneratorKind::Model, "user")?;
//! let service = GenerateService::new(renderer, filesystem, Layout::default());
//! let created = service.generate(&request, ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppService, GenerateService, GenerationResult,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        Artifact, GenerationPlan, GeneratorKind, GeneratorRequest, Invocation, Layout,
        RenderContext, ResolvedTarget, parse_invocation, plan,
    };
    pub use crate::error::{KeelError, KeelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
