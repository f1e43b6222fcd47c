//! The configuration value threaded through inference and printing.
//!
//! Built once from raw command-line choices by [`Settings::resolve`], which
//! rejects every unsupported combination before any input is read.
use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

use crate::decorate::{decorator_for, Decorator, Style};
use crate::dialect::{Dialect, Language};
use crate::error::ConfigError;

/// Where generated declarations go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum OutputMode {
    /// Everything on one stream.
    Stream,
    /// One file per class under `outdir`.
    Files { outdir: PathBuf },
    /// The per-class layout previewed on the stream; nothing is written.
    DryRun { outdir: PathBuf },
}

/// Unvalidated choices, one field per command-line flag.
#[derive(Debug, Clone)]
pub struct RawSettings {
    pub language: String,
    pub pydantic: bool,
    pub optional: bool,
    pub root_name: String,
    pub outdir: Option<PathBuf>,
    pub dry_run: bool,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            language: Language::Python.name().to_string(),
            pydantic: false,
            optional: false,
            root_name: "root".to_string(),
            outdir: None,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub language: Language,
    pub style: Style,
    pub optional: bool,
    pub root_name: String,
    pub output: OutputMode,
}

impl Settings {
    pub fn resolve(raw: &RawSettings) -> Result<Self, ConfigError> {
        let language: Language = raw.language.parse()?;
        let dialect = language.dialect();

        let style = match (language, raw.pydantic) {
            (Language::Python, true) => Style::Pydantic,
            (Language::Python, false) => Style::Dataclass,
            (_, true) => {
                return Err(ConfigError::StyleNotSupported {
                    style: Style::Pydantic.name(),
                    language: language.name(),
                });
            }
            (_, false) => Style::Plain,
        };

        if raw.optional && dialect.optional_style().is_none() {
            return Err(ConfigError::OptionalNotSupported(language.name()));
        }

        if dialect.to_type_name(&raw.root_name).is_empty() {
            return Err(ConfigError::EmptyRootName);
        }

        let output = match (&raw.outdir, raw.dry_run) {
            (Some(outdir), false) => OutputMode::Files { outdir: outdir.clone() },
            (Some(outdir), true) => OutputMode::DryRun { outdir: outdir.clone() },
            (None, dry_run) => {
                if dry_run {
                    warn!("--dry-run only applies together with --outdir; printing to stdout");
                }
                OutputMode::Stream
            }
        };

        Ok(Self {
            language,
            style,
            optional: raw.optional,
            root_name: raw.root_name.clone(),
            output,
        })
    }

    pub fn dialect(&self) -> &'static dyn Dialect { self.language.dialect() }

    pub fn decorator(&self) -> Box<dyn Decorator> {
        let optional = if self.optional { self.dialect().optional_style() } else { None };
        decorator_for(self.style, optional)
    }
}
