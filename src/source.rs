use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Read buffer used for files.
const BUFFER_SIZE: usize = 1024 * 1024;

/// One input line with its terminator stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based.
    pub number: usize,
    pub text: String,
}

/// Lazily yields the lines of a reader, numbered from 1.
///
/// Only the trailing `\n` (or `\r\n`) is removed. A terminator at end of
/// input does not produce an extra empty line. Input that is not UTF-8 is
/// reported as an [`io::ErrorKind::InvalidData`] error.
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
}

impl LineSource<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::with_capacity(BUFFER_SIZE, file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Number of lines yielded so far.
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                if text.ends_with('\n') {
                    text.pop();
                    if text.ends_with('\r') {
                        text.pop();
                    }
                }
                self.line_number += 1;
                Some(Ok(RawLine {
                    number: self.line_number,
                    text,
                }))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
