//! Bookmarklet page generator.
//!
//! Reads a script, strict-percent-encodes it into a `javascript:` URI and
//! renders a self-contained HTML page that offers the URI as a draggable link.

pub mod diagnostics;
pub mod encode;
pub mod error;
pub mod generate;
pub mod render;
pub mod stats;

pub type Result<T> = anyhow::Result<T>;

pub use error::{FileError, FileErrorKind};
pub use generate::{build_bookmarklet, generate, Bookmarklet, GenerateOptions, GenerateSummary};
