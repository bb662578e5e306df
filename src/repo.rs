//! External CM repository collaborator.
//!
//! The version-control client is an explicit dependency handed to the
//! command layer, never a global lookup. The core prepares well-formed
//! requests and issues at most one call per user-confirmed action;
//! transport concerns (credentials, retries, locking) stay on the
//! implementor's side. Transport failures surface as
//! [`crate::Error::Repository`].

use crate::Result;

/// Trait for CM repository clients that hold the actual tags.
pub trait TagRepository: Send + Sync {
    /// List tag names starting with `prefix`. No ordering is guaranteed.
    fn list_tags(&self, prefix: &str) -> Result<Vec<String>>;

    /// Create a tag with the given name at the current state.
    fn create_tag(&mut self, name: &str) -> Result<()>;

    /// Delete the named tags in one request.
    fn delete_tags(&mut self, names: &[String]) -> Result<()>;

    /// Commit pending changes with `annotation`, optionally marking the
    /// result as a released version.
    fn commit(&mut self, annotation: &str, release: bool) -> Result<()>;

    /// Human-readable location of the repository (for display purposes).
    fn location(&self) -> String;
}
