//! Input and output plumbing shared by the loaders and commands.
//!
//! Inputs may be plain text or gzip-compressed (`.gz` / `.bgz`). Outputs are
//! written to a temporary file in the destination directory and renamed into
//! place on [`AtomicOutput::commit`], so a failed run never leaves a partial
//! report or filtered file behind.

use crate::error::SvError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Open a plain or gzip-compressed text input.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>, SvError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SvError::MissingInput {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| SvError::Io {
        msg: format!("Failed to open {}: {}", path.display(), e),
    })?;

    let path_str = path.to_string_lossy();
    if path_str.ends_with(".gz") || path_str.ends_with(".bgz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Name used for an input in error messages.
pub fn source_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().display().to_string()
}

/// Split a flat-file row on tabs or semicolons.
///
/// Both separators are accepted interchangeably, matching the catalog and
/// alignment exports. Empty fields produced by repeated separators are kept
/// so that field-count validation sees them.
pub fn split_record_fields(line: &str) -> Vec<&str> {
    line.split(['\t', ';']).collect()
}

/// Output file that only appears at its destination once committed.
pub struct AtomicOutput {
    destination: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl AtomicOutput {
    /// Create a temporary file next to `destination`.
    pub fn create<P: AsRef<Path>>(destination: P) -> Result<Self, SvError> {
        let destination = destination.as_ref().to_path_buf();
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let temp = NamedTempFile::new_in(&dir).map_err(|e| SvError::Io {
            msg: format!(
                "Failed to create temporary output in {}: {}",
                dir.display(),
                e
            ),
        })?;

        Ok(Self {
            destination,
            writer: BufWriter::new(temp),
        })
    }

    /// Final path of the output.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Flush and move the temporary file to its destination.
    pub fn commit(self) -> Result<PathBuf, SvError> {
        let temp = self.writer.into_inner().map_err(|e| SvError::Io {
            msg: format!("Failed to flush output: {}", e),
        })?;
        temp.persist(&self.destination).map_err(|e| SvError::Io {
            msg: format!(
                "Failed to write {}: {}",
                self.destination.display(),
                e.error
            ),
        })?;
        Ok(self.destination)
    }
}

impl Write for AtomicOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_split_record_fields() {
        assert_eq!(
            split_record_fields("S\tchr1:1-10\tchr1:5-14"),
            vec!["S", "chr1:1-10", "chr1:5-14"]
        );
        assert_eq!(
            split_record_fields("label;chr1:1-10;chr1:5-14"),
            vec!["label", "chr1:1-10", "chr1:5-14"]
        );
        assert_eq!(split_record_fields("a;\tb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_open_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = open_input(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(SvError::MissingInput { .. })));
    }

    #[test]
    fn test_open_gzip_input() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"chr1:1-10\n").unwrap();
        encoder.finish().unwrap();

        let mut content = String::new();
        open_input(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "chr1:1-10\n");
    }

    #[test]
    fn test_atomic_output_commit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut output = AtomicOutput::create(&path).unwrap();
        writeln!(output, "hello").unwrap();
        assert!(!path.exists());

        output.commit().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_atomic_output_dropped_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        {
            let mut output = AtomicOutput::create(&path).unwrap();
            writeln!(output, "partial").unwrap();
        }

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
