//! Configuration utility types.
//!
//! | Module   | Purpose                          |
//! |----------|----------------------------------|
//! | `error`  | Configuration error types        |
//! | `field`  | Dotted TOML field paths          |

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, Severity};
pub use field::FieldPath;
