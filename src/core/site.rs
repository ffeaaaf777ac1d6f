use std::path::{Path, PathBuf};

/// Directory under the site root holding archived reports and the index.
pub const REPORTS_DIR: &str = "reports";
/// Index document inside [`REPORTS_DIR`].
pub const INDEX_FILE: &str = "index.json";
/// Home page at the site root.
pub const HOME_FILE: &str = "index.html";

/// On-disk layout of a reports site.
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
}

impl Site {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join(REPORTS_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.reports_dir().join(INDEX_FILE)
    }

    pub fn home_path(&self) -> PathBuf {
        self.root.join(HOME_FILE)
    }

    /// Link to an archived file as written into the index, relative to the root.
    pub fn report_link(file_name: &str) -> String {
        format!("{}/{}", REPORTS_DIR, file_name)
    }

    /// Index path as shown to the user.
    pub fn index_link() -> String {
        Self::report_link(INDEX_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_under_root() {
        let site = Site::new("/srv/pages");
        assert_eq!(site.reports_dir(), PathBuf::from("/srv/pages/reports"));
        assert_eq!(site.index_path(), PathBuf::from("/srv/pages/reports/index.json"));
        assert_eq!(site.home_path(), PathBuf::from("/srv/pages/index.html"));
    }

    #[test]
    fn links_use_forward_slashes() {
        assert_eq!(
            Site::report_link("20240115-093000-report.html"),
            "reports/20240115-093000-report.html"
        );
        assert_eq!(Site::index_link(), "reports/index.json");
    }
}
