//! Line sources feeding the line mapper.
//!
//! The mapper itself only consumes an iterator of lines; this crate supplies
//! the common origins of such lines.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use linebind_ingest::LineSource;
//!
//! for line in LineSource::open(Path::new("points.csv"))? {
//!     println!("{}", line?);
//! }
//! ```

mod error;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Line Sources ===
pub use source::LineSource;
