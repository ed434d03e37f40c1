//! Shared test fixtures and helpers
//!
//! This module provides a throwaway source tree to expand patterns against.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A test source tree with a standard directory structure
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new test tree with standard structure:
    /// ```text
    /// /
    /// ├── src/
    /// │   ├── main.cpp
    /// │   ├── util.cpp
    /// │   ├── util.h
    /// │   └── net/
    /// │       └── socket.cpp
    /// ├── a.txt
    /// └── b.txt
    /// ```
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        fs::create_dir_all(dir.path().join("src/net")).unwrap();

        fs::write(dir.path().join("src/main.cpp"), "int main() {}\n").unwrap();
        fs::write(dir.path().join("src/util.cpp"), "void util() {}\n").unwrap();
        fs::write(dir.path().join("src/util.h"), "void util();\n").unwrap();
        fs::write(dir.path().join("src/net/socket.cpp"), "struct Socket {};\n").unwrap();
        fs::write(dir.path().join("a.txt"), "a\n").unwrap();
        fs::write(dir.path().join("b.txt"), "b\n").unwrap();

        Self { dir }
    }

    /// Get the root path of the test tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed
    pub fn add_file(&self, path: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, "").unwrap();
    }

    /// Absolute pattern rooted at the tree (the root itself is escaped)
    pub fn pattern(&self, relative: &str) -> String {
        let root = glob::Pattern::escape(&self.dir.path().to_string_lossy());
        format!("{root}/{relative}")
    }

    /// Strip the tree root from an expanded match
    pub fn relative(&self, matched: &str) -> String {
        let root = self.dir.path().to_string_lossy().replace('\\', "/");
        matched
            .strip_prefix(&root)
            .map_or_else(|| matched.to_string(), |m| m.trim_start_matches('/').to_string())
    }

    /// Expand `relative` under the tree and return matches relative to the root
    pub fn expand(&self, relative: &str) -> Vec<String> {
        globfiles::expand::expand(&self.pattern(relative))
            .unwrap()
            .iter()
            .map(|m| self.relative(m))
            .collect()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
