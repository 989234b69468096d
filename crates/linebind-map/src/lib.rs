//! Mapping of delimited text lines onto strongly typed values.
//!
//! A line is split by a [`Tokenizer`], the target type is resolved into a
//! cached [`TypeDescriptor`](linebind_model::TypeDescriptor) by a
//! [`DescriptorCache`], each token is coerced into its slot's kind, and an
//! [`ObjectBuilder`] assembles the result, recursing into nested records.
//! [`LineMapper`] ties the steps together.
//!
//! # Example
//!
//! ```
//! use linebind_map::LineMapper;
//! use linebind_model::{ColumnMarker, Reflect, TypeInfo};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Reflect for Point {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::of::<Point>()
//!             .mappable()
//!             .default_constructor()
//!             .field("x", ColumnMarker::at(0), |p: &mut Point, v: i32| p.x = v)
//!             .field("y", ColumnMarker::at(1), |p: &mut Point, v: i32| p.y = v)
//!             .build()
//!     }
//! }
//!
//! let mapper = LineMapper::new();
//! let point: Point = mapper.parse_line("3,4").unwrap();
//! assert_eq!(point, Point { x: 3, y: 4 });
//! ```

#![deny(unsafe_code)]

mod builder;
mod coerce;
mod error;
mod mapper;
mod options;
mod resolve;
mod tokenize;

// === Error Types ===
pub use error::{MapError, Result};

// === Pipeline Stages ===
pub use builder::{MAX_NESTING_DEPTH, ObjectBuilder};
pub use coerce::coerce;
pub use resolve::{DescriptorCache, describe};
pub use tokenize::{Tokenizer, tokenize};

// === Entry Point ===
pub use mapper::LineMapper;
pub use options::{DEFAULT_ESCAPE, DEFAULT_QUOTE, MapperOptions};
