//! Common test utilities for supported-browsers integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create an empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project from a fixture under tests/common/fixtures/projects
    pub fn from_fixture(fixture_name: &str) -> Self {
        let project = Self::new();
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("projects")
            .join(fixture_name);

        for entry in std::fs::read_dir(&fixture_path).expect("Failed to read fixture directory") {
            let entry = entry.expect("Failed to read fixture entry");
            std::fs::copy(entry.path(), project.path.join(entry.file_name()))
                .expect("Failed to copy fixture file");
        }

        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a generated module back into `(name, minimumVersion)` pairs
///
/// Understands the formatter's output: one property per line, either quote
/// style, optional trailing commas. Entries without a name yield `None`.
#[allow(dead_code)]
pub fn parse_generated(module: &str) -> Vec<(Option<String>, String)> {
    let mut entries = Vec::new();
    let mut name = None;
    let mut version = None;

    for line in module.lines().map(str::trim) {
        let unquote = |value: &str| {
            value
                .trim_end_matches(',')
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string()
        };
        if let Some(value) = line.strip_prefix("name: ") {
            name = Some(unquote(value));
        } else if let Some(value) = line.strip_prefix("minimumVersion: ") {
            version = Some(unquote(value));
        } else if line.starts_with('}') {
            if let Some(version) = version.take() {
                entries.push((name.take(), version));
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("nested/file.txt", "hello");
        assert!(project.file_exists("nested/file.txt"));
        assert_eq!(project.read_file("nested/file.txt"), "hello");
    }

    #[test]
    fn test_project_from_fixture() {
        let project = TestProject::from_fixture("reference");
        assert!(project.file_exists(".browserslistrc"));
        assert!(project.file_exists(".prettierrc"));
    }

    #[test]
    fn test_parse_generated() {
        let module = "export default [\n  {\n    name: 'Chrome',\n    minimumVersion: '109',\n  },\n  {\n    minimumVersion: \"1.0\"\n  }\n]\n";
        assert_eq!(
            parse_generated(module),
            vec![
                (Some("Chrome".to_string()), "109".to_string()),
                (None, "1.0".to_string()),
            ]
        );
    }
}
