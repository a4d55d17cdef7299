//! Core domain layer for Keel.
//!
//! Pure generator logic with no I/O. Filesystem access and boilerplate
//! rendering are reached through the ports in the application layer.
//!
//! - **No I/O**: existence checks are injected as predicates
//! - **No external crates** beyond thiserror, serde and tracing
//! - **Immutable values**: requests, targets and plans are Clone + PartialEq

pub mod error;
pub mod generator;
pub mod layout;
pub mod naming;
pub mod plan;
pub mod project_structure;
pub mod render_context;

pub use error::{DomainError, ErrorCategory};
pub use generator::{
    Artifact, GeneratorKind, GeneratorRequest, Invocation, MissingName, parse_invocation,
};
pub use layout::Layout;
pub use naming::{capitalize, validate_identifier};
pub use plan::{GenerationPlan, ResolvedTarget, plan};
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use render_context::RenderContext;
