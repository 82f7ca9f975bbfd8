// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dataset line source: buffered reading with header skipping.

use crate::errors::{ExecutionError, RecordError};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A numbered line from the dataset. `line_number` is 1-based and counts
/// header lines, so failures can be reported against the actual file.
/// Decoding failures are carried per line rather than aborting the read;
/// the runner applies the failure strategy to them like any other record
/// failure.
pub type SourcedLine = (usize, Result<String, RecordError>);

/// Reads a delimited text dataset line by line, skipping a configured number
/// of header lines before the first record.
pub struct TextLineSource {
    path: PathBuf,
    skip_header_lines: usize,
}

impl TextLineSource {
    pub fn new(path: impl AsRef<Path>, skip_header_lines: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            skip_header_lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all record lines from the file.
    ///
    /// Lines are read as raw bytes and decoded afterwards, so a single
    /// non-UTF-8 line surfaces as `MalformedLine` for that line instead of
    /// failing the whole read. A final line without a trailing newline is
    /// still yielded; the empty tail after a final newline is not.
    pub async fn read_lines(&self) -> Result<Vec<SourcedLine>, ExecutionError> {
        let file = File::open(&self.path).await?;
        let mut reader = BufReader::new(file);

        let mut lines = Vec::new();
        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            let bytes_read = reader.read_until(b'\n', &mut buf).await?;
            if bytes_read == 0 {
                break;
            }
            line_number += 1;

            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            if line_number <= self.skip_header_lines {
                continue;
            }

            let text = String::from_utf8(buf.clone()).map_err(|e| RecordError::MalformedLine {
                reason: e.to_string(),
            });
            lines.push((line_number, text));
        }

        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[tokio::test]
    async fn skips_header_lines_and_numbers_from_file_start() {
        let file = write_temp(b"id|data_iniSE|casos\n1|2016-03-15|5\n2|2016-03-20|3\n");

        let source = TextLineSource::new(file.path(), 1);
        let lines = source.read_lines().await.unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, 2);
        assert_eq!(lines[0].1.as_deref().unwrap(), "1|2016-03-15|5");
        assert_eq!(lines[1].0, 3);
    }

    #[tokio::test]
    async fn yields_final_line_without_trailing_newline() {
        let file = write_temp(b"header\n1|a\n2|b");

        let lines = TextLineSource::new(file.path(), 1)
            .read_lines()
            .await
            .unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].1.as_deref().unwrap(), "2|b");
    }

    #[tokio::test]
    async fn strips_carriage_returns() {
        let file = write_temp(b"header\r\n1|a\r\n");

        let lines = TextLineSource::new(file.path(), 1)
            .read_lines()
            .await
            .unwrap();
        assert_eq!(lines[0].1.as_deref().unwrap(), "1|a");
    }

    #[tokio::test]
    async fn invalid_utf8_line_is_malformed_not_fatal() {
        let file = write_temp(b"header\n1|ok\n\xff\xfe|bad\n2|ok\n");

        let lines = TextLineSource::new(file.path(), 1)
            .read_lines()
            .await
            .unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].1.is_ok());
        assert!(matches!(
            lines[1].1,
            Err(RecordError::MalformedLine { .. })
        ));
        assert!(lines[2].1.is_ok());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = TextLineSource::new("/nonexistent/cases.txt", 1)
            .read_lines()
            .await;
        assert!(matches!(result, Err(ExecutionError::Io(_))));
    }
}
