use std::io::{self, Write};

/// Line-oriented writer that collapses runs of blank lines.
///
/// The "last line was blank" flag is owned here and lives for the whole
/// output stream, so collapsing carries across file boundaries. A line is
/// blank only when it is completely empty; whitespace-only lines pass
/// through untouched.
pub struct LineWriter<W: Write> {
    inner: W,
    last_blank: bool,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            last_blank: false,
        }
    }

    /// Writes one body line. A blank line directly after another blank line
    /// is dropped.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if line.is_empty() {
            if self.last_blank {
                return Ok(());
            }
            self.last_blank = true;
        } else {
            self.last_blank = false;
        }
        writeln!(self.inner, "{line}")
    }

    /// Writes an envelope or banner line outside the collapsing discipline.
    /// The stream is treated as ending on a non-blank line afterwards, so
    /// the next body may open with one blank line.
    pub fn write_verbatim(&mut self, line: &str) -> io::Result<()> {
        self.last_blank = false;
        writeln!(self.inner, "{line}")
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
