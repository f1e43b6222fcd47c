use std::io::Write;

use tracing::debug;

use super::{ModelPrinter, Renderer};
use crate::error::PrintError;
use crate::model::TypeModel;

/// Writes every class into one stream (stdout in the CLI).
pub struct SingleStreamPrinter<'a, W: Write> {
    renderer: Renderer<'a>,
    out: W,
}

impl<'a, W: Write> SingleStreamPrinter<'a, W> {
    pub fn new(renderer: Renderer<'a>, out: W) -> Self { Self { renderer, out } }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> ModelPrinter for SingleStreamPrinter<'_, W> {
    fn print(&mut self, model: &TypeModel) -> Result<(), PrintError> {
        if model.is_empty() {
            return Ok(());
        }
        let renderer = self.renderer;
        let mut written = 0usize;
        for line in renderer.stream_lines(model) {
            writeln!(self.out, "{line}")?;
            written += 1;
        }
        self.out.flush()?;
        debug!(classes = model.len(), lines = written, "printed single stream");
        Ok(())
    }
}
