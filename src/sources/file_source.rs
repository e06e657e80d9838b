use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::sources::{SampleSource, SourceError, SourceReport};

/// UTF-8 text file with one value per line.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> SourceError {
        SourceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SampleSource for FileSource {
    fn label(&self) -> &'static str {
        "file"
    }

    fn read(&mut self, diag: &mut dyn Write) -> Result<SourceReport, SourceError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::Unavailable(self.path.clone()),
            _ => self.io_error(e),
        })?;

        let mut report = SourceReport::default();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.io_error(e))?;
            report.push_line(&line, diag)?;
        }
        debug!(
            path = %self.path.display(),
            parsed = report.values.len(),
            skipped = report.skipped.len(),
            "read sample file"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn file_with(contents: &str) -> NamedTempFile {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(contents.as_bytes()).unwrap();
        tf
    }

    #[test]
    fn skips_unparseable_lines_with_warning() {
        let tf = file_with("1.5\noops\n2.5\n");
        let mut src = FileSource::new(tf.path());
        let mut diag = Vec::new();
        let report = src.read(&mut diag).unwrap();

        assert_eq!(report.values, vec![1.5, 2.5]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, "oops");
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "Line format not recognized: \"oops\", skipped\n"
        );
    }

    #[test]
    fn trims_whitespace_and_crlf() {
        let tf = file_with("  0.25 \r\n0.75\r\n");
        let report = FileSource::new(tf.path()).read(&mut Vec::new()).unwrap();
        assert_eq!(report.values, vec![0.25, 0.75]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn empty_file_gives_empty_report() {
        let tf = file_with("");
        let report = FileSource::new(tf.path()).read(&mut Vec::new()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = FileSource::new(&path).read(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(p) if p == path));
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path()).read(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
