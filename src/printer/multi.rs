use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info};

use super::{file_stems, ModelPrinter, Renderer};
use crate::error::PrintError;
use crate::model::TypeModel;

/// One file per class under `outdir`, named after the class with its first
/// letter lower-cased. Each file is rendered in full before it is written.
pub struct MultiFilePrinter<'a> {
    renderer: Renderer<'a>,
    outdir: PathBuf,
}

impl<'a> MultiFilePrinter<'a> {
    pub fn new(renderer: Renderer<'a>, outdir: impl Into<PathBuf>) -> Self {
        Self { renderer, outdir: outdir.into() }
    }
}

impl ModelPrinter for MultiFilePrinter<'_> {
    fn print(&mut self, model: &TypeModel) -> Result<(), PrintError> {
        if model.is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.outdir).map_err(|source| PrintError::CreateDir {
            path: self.outdir.clone(),
            source,
        })?;

        let stems = file_stems(model);
        for (class, fields) in model.classes() {
            let stem = &stems[class];
            let path = self.renderer.file_path(&self.outdir, stem);
            let lines = self.renderer.file_lines(class, fields, &stems);

            let mut contents = lines.join("\n");
            contents.push('\n');
            fs::write(&path, contents).map_err(|source| PrintError::WriteFile {
                path: path.clone(),
                source,
            })?;
            info!(class, path = %path.display(), "wrote class file");
        }
        Ok(())
    }
}

/// Multi-file layout previewed on a stream: `## <path>`, the file's lines and
/// a blank line per class. Touches no files.
pub struct DryRunPrinter<'a, W: Write> {
    renderer: Renderer<'a>,
    outdir: PathBuf,
    out: W,
}

impl<'a, W: Write> DryRunPrinter<'a, W> {
    pub fn new(renderer: Renderer<'a>, outdir: impl Into<PathBuf>, out: W) -> Self {
        Self { renderer, outdir: outdir.into(), out }
    }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ModelPrinter for DryRunPrinter<'_, W> {
    fn print(&mut self, model: &TypeModel) -> Result<(), PrintError> {
        let stems = file_stems(model);
        for (class, fields) in model.classes() {
            let path = self.renderer.file_path(&self.outdir, &stems[class]);
            writeln!(self.out, "## {}", path.display())?;
            for line in self.renderer.file_lines(class, fields, &stems) {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;
            debug!(class, path = %path.display(), "previewed class file");
        }
        self.out.flush()?;
        Ok(())
    }
}
