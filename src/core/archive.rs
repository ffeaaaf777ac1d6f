//! Copying source reports into the archive directory.

use super::slug::slugify;
use chrono::NaiveDateTime;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Extension every source report must carry, compared case-insensitively.
pub const REPORT_EXTENSION: &str = "html";

/// Timestamp prefix of archived file names, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Invalid source html: {0}")]
    InvalidSource(PathBuf),
    #[error("archived report already exists: {0}")]
    AlreadyExists(PathBuf),
    #[error("failed to create archive directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to copy {from} to {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A source report that passed validation.
#[derive(Debug, Clone)]
pub struct SourceReport {
    path: PathBuf,
}

impl SourceReport {
    /// Accept `path` only if it is an existing file with an `.html` extension.
    pub fn validate(path: &Path) -> Result<Self, ArchiveError> {
        let has_html_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(REPORT_EXTENSION));

        if !has_html_extension || !path.is_file() {
            return Err(ArchiveError::InvalidSource(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Destination file name for an archive taken at `now`.
    pub fn archive_name(&self, now: NaiveDateTime) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        format!(
            "{}-{}.{}",
            now.format(TIMESTAMP_FORMAT),
            slugify(&stem),
            REPORT_EXTENSION
        )
    }

    /// Copy the report into `dir` under [`Self::archive_name`], creating `dir`
    /// as needed. Returns the new file name. Never replaces an existing file.
    pub fn archive_into(&self, dir: &Path, now: NaiveDateTime) -> Result<String, ArchiveError> {
        fs::create_dir_all(dir).map_err(|source| ArchiveError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let name = self.archive_name(now);
        let dest = dir.join(&name);
        let copy_err = |source: io::Error| ArchiveError::Copy {
            from: self.path.clone(),
            to: dest.clone(),
            source,
        };

        let mut target = match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ArchiveError::AlreadyExists(dest.clone()));
            }
            Err(e) => return Err(copy_err(e)),
        };
        let mut source = File::open(&self.path).map_err(copy_err)?;
        let bytes = io::copy(&mut source, &mut target).map_err(copy_err)?;
        target.sync_all().map_err(copy_err)?;

        log::info!("Archived {} ({} bytes) to {}", self.path.display(), bytes, dest.display());
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn write_source(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn rejects_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SourceReport::validate(&tmp.path().join("nope.html")).unwrap_err();
        assert!(matches!(err, ArchiveError::InvalidSource(_)));
    }

    #[test]
    fn rejects_wrong_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_source(tmp.path(), "report.txt", "hello");
        assert!(matches!(
            SourceReport::validate(&path),
            Err(ArchiveError::InvalidSource(_))
        ));

        let path = write_source(tmp.path(), "report", "hello");
        assert!(SourceReport::validate(&path).is_err());
    }

    #[test]
    fn rejects_directory_named_like_a_report() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("folder.html");
        fs::create_dir(&dir).unwrap();
        assert!(SourceReport::validate(&dir).is_err());
    }

    #[test]
    fn extension_check_ignores_case() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_source(tmp.path(), "Report.HTML", "<p>hi</p>");
        assert!(SourceReport::validate(&path).is_ok());
    }

    #[test]
    fn archive_name_is_timestamp_and_slug() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_source(tmp.path(), "Q1 Earnings.HTML", "");
        let source = SourceReport::validate(&path).unwrap();
        assert_eq!(
            source.archive_name(at(9, 30, 5)),
            "20240115-093005-q1-earnings.html"
        );
    }

    #[test]
    fn archive_copies_bytes_and_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let body = "<html><body>研报 &amp; data</body></html>";
        let path = write_source(tmp.path(), "report.html", body);
        let dest_dir = tmp.path().join("site").join("reports");

        let source = SourceReport::validate(&path).unwrap();
        let name = source.archive_into(&dest_dir, at(9, 30, 0)).unwrap();

        assert_eq!(name, "20240115-093000-report.html");
        assert_eq!(fs::read(dest_dir.join(&name)).unwrap(), body.as_bytes());
        assert_eq!(fs::read(&path).unwrap(), body.as_bytes());
    }

    #[test]
    fn archive_never_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_source(tmp.path(), "report.html", "new");
        let dest_dir = tmp.path().join("reports");
        fs::create_dir(&dest_dir).unwrap();
        fs::write(dest_dir.join("20240115-093000-report.html"), "old").unwrap();

        let source = SourceReport::validate(&path).unwrap();
        let err = source.archive_into(&dest_dir, at(9, 30, 0)).unwrap_err();

        assert!(matches!(err, ArchiveError::AlreadyExists(_)));
        assert_eq!(
            fs::read_to_string(dest_dir.join("20240115-093000-report.html")).unwrap(),
            "old"
        );
    }

    #[test]
    fn distinct_seconds_give_distinct_names() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_source(tmp.path(), "report.html", "x");
        let dest_dir = tmp.path().join("reports");
        let source = SourceReport::validate(&path).unwrap();

        let first = source.archive_into(&dest_dir, at(9, 30, 0)).unwrap();
        let second = source.archive_into(&dest_dir, at(9, 30, 1)).unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_dir(&dest_dir).unwrap().count(), 2);
    }
}
