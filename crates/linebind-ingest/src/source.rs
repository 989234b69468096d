//! Newline-delimited line sources.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{IngestError, Result};

/// Iterator over the lines of a buffered reader.
///
/// Line terminators (`\n` or `\r\n`) are removed and a UTF-8 byte order mark
/// on the first line is dropped. The first read failure is yielded once and
/// ends the iteration.
pub struct LineSource<R> {
    lines: Lines<R>,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines produced so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl LineSource<BufReader<File>> {
    /// Opens a file as a line source.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        tracing::debug!(path = %path.display(), "Opened line source");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = self.lines.next();
        let Some(line) = next else {
            self.finished = true;
            return None;
        };
        self.line_number += 1;
        match line {
            Ok(line) if self.line_number == 1 => match line.strip_prefix('\u{feff}') {
                Some(stripped) => Some(Ok(stripped.to_string())),
                None => Some(Ok(line)),
            },
            Ok(line) => Some(Ok(line)),
            Err(source) => {
                self.finished = true;
                Some(Err(IngestError::LineRead {
                    line_number: self.line_number,
                    source,
                }))
            }
        }
    }
}
