//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`Layout`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`KEEL_LAYOUT__EXTENSION=ts`, `KEEL_OUTPUT__NO_COLOR=true`)
//! 2. The file given with `--config`
//! 3. `keel.toml` at the application root
//! 4. The global config file (see [`AppConfig::config_path`])
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use keel_core::{application::MANIFEST_FILE, domain::Layout};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files go.
    pub layout: Layout,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for an application rooted at `app_root`.
    pub fn load(config_file: Option<&Path>, app_root: &Path) -> anyhow::Result<Self> {
        Self::load_layers(Some(Self::config_path()), config_file, app_root)
    }

    fn load_layers(
        global_file: Option<PathBuf>,
        config_file: Option<&Path>,
        app_root: &Path,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("encoding defaults")?);

        if let Some(global) = global_file {
            builder = builder.add_source(File::from(global).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            File::from(app_root.join(MANIFEST_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let cfg: Self = builder
            .add_source(
                Environment::with_prefix("KEEL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("configuration has an unexpected shape")?;

        cfg.layout
            .validate()
            .context("invalid [layout] configuration")?;

        Ok(cfg)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.keel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "keel", "keel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".keel.toml"))
    }
}
