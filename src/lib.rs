//! asn1meta — extract field metadata embedded in ASN.1 comments.
//!
//! ASN.1 modules carry annotation blocks inside `SEQUENCE` bodies:
//!
//! ```text
//! Telemetry ::= SEQUENCE {
//!     -- [Meta]
//!     -- @Scale 0.1
//!     -- @Range (-12.8, 12.7)
//!     ascent-rate INTEGER (-128..127),
//! }
//! ```
//!
//! Each block is attached to the field declaration that follows it and
//! collected into a [`ModuleIndex`] keyed by module, type and field name.
//! Malformed blocks never raise an error; they simply produce no entry and
//! are reported in [`Scan::dropped`].

pub mod driver;
pub mod merge;
pub mod model;
pub mod parser;
pub mod render;

pub use driver::{expand_patterns, parse_files, parse_glob};
pub use model::{Entry, FieldInfo, ModuleIndex, Scan, Value};
pub use parser::parse_source;
