//! One module per subcommand. Handlers translate parsed arguments into
//! core service calls and render the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod new;
