//! Writing the rendered output to stdout or a file.
use kpi_common::FragmentError;
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Helper type for emitting rendered text.
pub struct OutputWriter;

impl OutputWriter {
    /// Write `text` followed by a newline to `out`.
    pub fn write_to<W: Write>(out: &mut W, text: &str) -> Result<(), FragmentError> {
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// Write to `path` when given, otherwise to stdout.
    pub fn write(path: Option<&Path>, text: &str) -> Result<(), FragmentError> {
        match path {
            Some(path) => {
                let mut file = File::create(path)?;
                Self::write_to(&mut file, text)?;
                info!("Output written to {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                Self::write_to(&mut stdout.lock(), text)?;
            }
        }
        Ok(())
    }
}
