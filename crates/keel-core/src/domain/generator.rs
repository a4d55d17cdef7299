//! Generator kinds and the requests built from command-line input.

use std::fmt;
use std::str::FromStr;

use crate::domain::{error::DomainError, naming};

/// A sub-generator selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Model,
    Controller,
    Adapter,
    /// Composite: a model and a controller sharing one name.
    Api,
}

impl GeneratorKind {
    pub const ALL: [Self; 4] = [Self::Model, Self::Controller, Self::Adapter, Self::Api];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Adapter => "adapter",
            Self::Api => "api",
        }
    }

    /// Files this generator produces, in write order.
    pub fn artifacts(self) -> &'static [Artifact] {
        match self {
            Self::Model => &[Artifact::Model],
            Self::Controller => &[Artifact::Controller],
            Self::Adapter => &[Artifact::Adapter],
            Self::Api => &[Artifact::Model, Artifact::Controller],
        }
    }

    /// What happens when the generator is invoked without a name.
    ///
    /// `api` falls back to the usage banner; the single-file generators
    /// reject the invocation.
    pub const fn on_missing_name(self) -> MissingName {
        match self {
            Self::Api => MissingName::Usage,
            Self::Model | Self::Controller | Self::Adapter => MissingName::Reject,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| DomainError::UnknownGenerator { name: s.to_string() })
    }
}

/// Response to a generator invoked without a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingName {
    Usage,
    Reject,
}

/// A single boilerplate file kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Model,
    Controller,
    Adapter,
}

impl Artifact {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Controller => "controller",
            Self::Adapter => "adapter",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request to run one generator.
///
/// Immutable once built; the raw name is kept exactly as typed and only
/// transformed when targets are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorRequest {
    kind: GeneratorKind,
    raw_name: String,
}

impl GeneratorRequest {
    /// Build a request, rejecting empty or unsafe names.
    pub fn new(kind: GeneratorKind, raw_name: impl Into<String>) -> Result<Self, DomainError> {
        let raw_name = raw_name.into();
        if raw_name.trim().is_empty() {
            return Err(DomainError::MissingArgument { kind });
        }
        naming::validate_identifier(&raw_name)?;
        Ok(Self { kind, raw_name })
    }

    pub fn kind(&self) -> GeneratorKind {
        self.kind
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }
}

/// Outcome of parsing the tokens after `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the usage banner and exit successfully.
    Usage,
    Generate(GeneratorRequest),
}

/// Turn the optional generator token and optional name into an [`Invocation`].
///
/// | kind    | name    | result                        |
/// |---------|---------|-------------------------------|
/// | none    | -       | `Usage`                       |
/// | `api`   | none    | `Usage`                       |
/// | other   | none    | `Err(MissingArgument)`        |
/// | unknown | -       | `Err(UnknownGenerator)`       |
/// | kind    | name    | `Generate(request)`           |
pub fn parse_invocation(kind: Option<&str>, name: Option<&str>) -> Result<Invocation, DomainError> {
    let Some(kind) = kind else {
        return Ok(Invocation::Usage);
    };
    let kind: GeneratorKind = kind.parse()?;

    match name.filter(|n| !n.trim().is_empty()) {
        Some(name) => GeneratorRequest::new(kind, name).map(Invocation::Generate),
        None => match kind.on_missing_name() {
            MissingName::Usage => Ok(Invocation::Usage),
            MissingName::Reject => Err(DomainError::MissingArgument { kind }),
        },
    }
}
