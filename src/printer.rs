//! Printers turn a finished [`TypeModel`] into source text.
//!
//! Three strategies share one [`Renderer`]:
//! - [`SingleStreamPrinter`]: every class in one stream, one import block;
//! - [`MultiFilePrinter`]: one file per class, with cross-class imports;
//! - [`DryRunPrinter`]: the multi-file layout written to a stream, each file
//!   preceded by a `## <path>` header.
//!
//! Printers trust the model: a field type naming a class that is not in the
//! model simply gets no import.
pub mod multi;
pub mod single;

use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Write;
use std::iter;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::decorate::Decorator;
use crate::dialect::Dialect;
use crate::error::PrintError;
use crate::model::{file_stem, Fields, TypeModel};
use crate::settings::OutputMode;

pub use multi::{DryRunPrinter, MultiFilePrinter};
pub use single::SingleStreamPrinter;

pub trait ModelPrinter {
    fn print(&mut self, model: &TypeModel) -> Result<(), PrintError>;
}

/// Class name → file stem, in model order.
pub type FileStems<'m> = IndexMap<&'m str, String>;

pub fn file_stems(model: &TypeModel) -> FileStems<'_> {
    model.class_names().map(|class| (class, file_stem(class))).collect()
}

/// The printer for an output mode. Stream-based modes write to `out`.
pub fn printer_for<'a, W: Write + 'a>(output: &OutputMode, renderer: Renderer<'a>, out: W) -> Box<dyn ModelPrinter + 'a> {
    match output {
        OutputMode::Stream => Box::new(SingleStreamPrinter::new(renderer, out)),
        OutputMode::Files { outdir } => Box::new(MultiFilePrinter::new(renderer, outdir.clone())),
        OutputMode::DryRun { outdir } => Box::new(DryRunPrinter::new(renderer, outdir.clone(), out)),
    }
}

/// Dialect layout plus decorator: everything needed to render lines.
#[derive(Clone, Copy)]
pub struct Renderer<'a> {
    dialect: &'a dyn Dialect,
    decorator: &'a dyn Decorator,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, decorator: &'a dyn Decorator) -> Self {
        Self { dialect, decorator }
    }

    pub fn file_path(&self, outdir: &Path, stem: &str) -> PathBuf {
        outdir.join(format!("{stem}.{}", self.dialect.file_extension()))
    }

    /// Decorated header, body delimiters and decorated properties of one class.
    pub fn class_lines<'s>(&'s self, class: &'s str, fields: &'s Fields) -> impl Iterator<Item = String> + 's {
        let dialect = self.dialect;
        let decorator = self.decorator;
        let header = decorator.class_def(dialect.class_header(class));
        let open = dialect.class_open().map(str::to_string);
        let properties = fields
            .iter()
            .flat_map(move |(name, ty)| decorator.property_def(dialect.property_line(name, ty)));
        let close = dialect.class_close().map(str::to_string);
        header.chain(open).chain(properties).chain(close)
    }

    /// The combined stream: one library import block for the whole model, the
    /// decorator imports, then every class separated by the dialect's spacing.
    pub fn stream_lines<'s>(&'s self, model: &'s TypeModel) -> impl Iterator<Item = String> + 's {
        let types: Vec<Cow<'_, str>> = model.field_types().map(|ty| self.decorator.field_type(ty)).collect();
        let typing = self.library_imports(&types);
        let spacing = self.dialect.class_spacing();
        let classes = model.classes().enumerate().flat_map(move |(index, (class, fields))| {
            let gap = if index == 0 { 0 } else { spacing };
            iter::repeat_n(String::new(), gap).chain(self.class_lines(class, fields))
        });
        typing.into_iter().chain(self.decorator.imports()).chain(classes)
    }

    /// Full contents of the file holding `class`, buffered.
    pub fn file_lines(&self, class: &str, fields: &Fields, stems: &FileStems<'_>) -> Vec<String> {
        let mut lines = self.class_imports(class, fields, stems);
        if !lines.is_empty() && self.dialect.blank_after_class_imports() {
            lines.push(String::new());
        }

        let types: Vec<Cow<'_, str>> = fields.values().map(|ty| self.decorator.field_type(ty)).collect();
        lines.extend(self.library_imports(&types));
        lines.extend(self.decorator.imports());
        lines.extend(self.class_lines(class, fields));
        lines
    }

    /// One library import block for the declared (decorated) field types.
    fn library_imports(&self, types: &[Cow<'_, str>]) -> Vec<String> {
        let types: Vec<&str> = types.iter().map(|ty| ty.as_ref()).collect();
        self.dialect.typing_imports(&types)
    }

    /// Imports of other generated classes referenced by `fields`, looking one
    /// generic level deep. Deduplicated, in field order, never importing
    /// `class` itself.
    fn class_imports(&self, class: &str, fields: &Fields, stems: &FileStems<'_>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for ty in fields.values() {
            let referenced = self.dialect.unwrap_generic(ty);
            if referenced == class || !seen.insert(referenced) {
                continue;
            }
            let Some(stem) = stems.get(referenced) else { continue };
            lines.extend(self.dialect.class_import(referenced, stem));
        }
        lines
    }
}

// ------------------------------- Tests ------------------------------------ //
