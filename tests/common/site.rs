//! On-disk content trees for build tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary site: `content/` with markdown, `public/` for output
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn content(&self) -> PathBuf {
        self.dir.path().join("content")
    }

    pub fn public(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    /// Write `body` to `content/<relative>`
    pub fn page(&self, relative: &str, body: &str) -> PathBuf {
        write_file(&self.content().join(relative), body)
    }

    pub fn read_output(&self, relative: &str) -> String {
        std::fs::read_to_string(self.public().join(relative)).expect("Failed to read output")
    }
}

pub fn write_file(path: &Path, body: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create dir");
    }
    std::fs::write(path, body).expect("Failed to write file");
    path.to_path_buf()
}
