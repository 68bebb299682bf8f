//! Common test utilities for news-fusion integration tests

use std::path::PathBuf;
use tempfile::TempDir;

pub const SOURCES_JSON: &str = r#"[
  {"id": "9to5google", "name": "9to5Google", "domains": ["9to5google.com"]},
  {"id": "verge", "name": "The Verge", "domains": ["theverge.com"]}
]"#;

pub const CATEGORIES_JSON: &str = r#"[
  {"id": "technology", "name": "Technology"},
  {"id": "science", "name": "Science"}
]"#;

/// A temporary news-fusion project
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with the default sources.json and categories.json
    pub fn with_registries() -> Self {
        let workspace = Self::new();
        workspace.write_file("web/content/sources.json", SOURCES_JSON);
        workspace.write_file("web/content/categories.json", CATEGORIES_JSON);
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write an article under the default content directory
    pub fn write_article(&self, rel: &str, frontmatter: &[(&str, &str)], body: &str) {
        let mut content = String::from("---\n");
        for (key, value) in frontmatter {
            content.push_str(&format!("{key}: \"{value}\"\n"));
        }
        content.push_str("---\n");
        content.push_str(body);
        self.write_file(&format!("web/content/articles/{rel}"), &content);
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

    /// All files under `dir`, relative to the project root
    pub fn files_under(&self, dir: &str) -> Vec<String> {
        let root = self.path.join(dir);
        let mut files: Vec<String> = walkdir::WalkDir::new(&root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        files.sort();
        files
    }

    /// news-fusion command rooted at this project
    #[allow(deprecated)]
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("news-fusion").expect("binary builds");
        cmd.env_remove("NEWS_FUSION_ROOT")
            .env_remove("RUST_LOG")
            .arg("-w")
            .arg(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::with_registries();
        assert!(workspace.file_exists("web/content/sources.json"));
        workspace.write_article("technology/a.md", &[("title", "A")], "Body\n");
        assert_eq!(
            workspace.read_file("web/content/articles/technology/a.md"),
            "---\ntitle: \"A\"\n---\nBody\n"
        );
        assert_eq!(
            workspace.files_under("web/content/articles"),
            vec!["web/content/articles/technology/a.md"]
        );
    }
}
