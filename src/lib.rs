//! Infer class declarations from a sample JSON document and print them as
//! Python, TypeScript or C# source.
//!
//! The pipeline is `input` → [`inference`] → [`printer`], configured by one
//! [`Settings`] value.
pub mod cli;
pub mod decorate;
pub mod dialect;
pub mod error;
pub mod inference;
pub mod input;
pub mod model;
pub mod naming;
pub mod printer;
pub mod settings;

use std::io::Write;

use serde_json::Value;
use tracing::warn;

pub use error::{Error, Result};
pub use model::TypeModel;
pub use settings::{OutputMode, RawSettings, Settings};

use printer::{printer_for, Renderer};

/// Infer the model for `document` with the configured dialect's naming.
pub fn infer(settings: &Settings, document: &Value) -> Result<TypeModel> {
    let model = inference::infer_model(settings.dialect().names(), &settings.root_name, document)?;
    if model.is_empty() {
        warn!("document has no objects to turn into classes; nothing will be printed");
    }
    Ok(model)
}

/// Infer and print `document`. Stream outputs go to `out`; multi-file output
/// goes to the configured directory.
pub fn generate<W: Write>(settings: &Settings, document: &Value, out: W) -> Result<TypeModel> {
    let model = infer(settings, document)?;
    let decorator = settings.decorator();
    let renderer = Renderer::new(settings.dialect(), decorator.as_ref());
    printer_for(&settings.output, renderer, out).print(&model)?;
    Ok(model)
}

// ---------------------------------- Tests ---------------------------------- //
