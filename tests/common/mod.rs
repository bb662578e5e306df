//! Common test utilities for capstan integration tests.
//!
//! Provides `InMemoryRepository`, a stand-in for the external CM client,
//! so flows can be exercised without any version-control transport.

#![allow(dead_code)]

use capstan::Result;
use capstan::repo::TagRepository;

/// In-memory stand-in for the external CM repository.
///
/// Records every commit it receives so tests can assert on the exact
/// requests the core issued.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    /// Current tag names, in creation order
    pub tags: Vec<String>,
    /// (annotation, release) pairs in commit order
    pub commits: Vec<(String, bool)>,
}

impl InMemoryRepository {
    /// Create a repository pre-populated with the given tags.
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|s| s.to_string()).collect(),
            commits: Vec::new(),
        }
    }
}

impl TagRepository for InMemoryRepository {
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .tags
            .iter()
            .filter(|tag| tag.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn create_tag(&mut self, name: &str) -> Result<()> {
        self.tags.push(name.to_string());
        Ok(())
    }

    fn delete_tags(&mut self, names: &[String]) -> Result<()> {
        self.tags.retain(|tag| !names.contains(tag));
        Ok(())
    }

    fn commit(&mut self, annotation: &str, release: bool) -> Result<()> {
        self.commits.push((annotation.to_string(), release));
        Ok(())
    }

    fn location(&self) -> String {
        "in-memory".to_string()
    }
}
