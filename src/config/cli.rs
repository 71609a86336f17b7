use crate::domain::ports::LineSource;
use crate::utils::error::{CheckError, Result};
use std::io::{BufRead, StdinLock};
use std::path::Path;
use std::vec;

/// Lines held in memory, handed out one at a time.
#[derive(Debug)]
pub struct MemorySource {
    lines: vec::IntoIter<String>,
    label: String,
}

impl MemorySource {
    pub fn new(content: &str) -> Self {
        Self::with_label(content, "<memory>")
    }

    pub fn with_label(content: &str, label: &str) -> Self {
        Self {
            lines: split_lines(content).into_iter(),
            label: label.to_string(),
        }
    }
}

impl LineSource for MemorySource {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

/// Split on `\r\n`, `\n` and bare `\r`, like a text-mode file read.
fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

/// A results file, read completely when opened.
#[derive(Debug)]
pub struct FileSource {
    inner: MemorySource,
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = std::fs::read(&path).map_err(|source| CheckError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());

        let content = String::from_utf8_lossy(&data);
        let inner = MemorySource::with_label(&content, &path.display().to_string());
        Ok(Self { inner })
    }
}

impl LineSource for FileSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.inner.next_line()
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}

/// Reads one line per call from a live stream. Bytes that are not UTF-8
/// are replaced rather than rejected; such a line fails to parse later.
pub struct ReaderSource<R: BufRead> {
    reader: R,
    label: String,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, label: &str) -> Self {
        Self {
            reader,
            label: label.to_string(),
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

pub type StdinSource = ReaderSource<StdinLock<'static>>;

impl StdinSource {
    pub fn stdin() -> Self {
        ReaderSource::new(std::io::stdin().lock(), "<stdin>")
    }
}
