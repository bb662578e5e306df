//! Configuration for the CM tag scheme.
//!
//! Settings live in a single KDL file, `capstan.kdl`, located by default
//! at `~/.config/capstan/capstan.kdl`. Everything is optional:
//!
//! - `tag-prefix` - first segment of every feature tag (default `feature`)
//! - `change-annotation-min` - minimum length for a generic change
//!   annotation (default 4)
//! - `commit-annotation-min` - minimum length for a repository commit
//!   annotation (default 8)
//!
//! Precedence: values passed directly by the host > config file >
//! built-in defaults. A missing file is not an error.

pub mod schema;

pub use schema::CapstanConfig;
