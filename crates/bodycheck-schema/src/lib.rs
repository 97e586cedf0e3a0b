//! # bodycheck-schema — Request Body Shape Validation
//!
//! Gates API request bodies by checking them against a declarative field
//! schema before any further processing.
//!
//! ## Schemas
//!
//! A schema maps field names to schema nodes:
//!
//! ```json
//! {
//!   "name":    {"type": "string", "required": true},
//!   "id":      {"type": ["string", "number"], "required": true},
//!   "address": {
//!     "type": "object",
//!     "required": true,
//!     "description": {"type": "string", "required": true},
//!     "county":      {"type": "string", "required": false}
//!   }
//! }
//! ```
//!
//! `type` is a tag name or an array of tag names (see [`TypeTag`]).
//! `required` is a boolean. Nodes whose `type` is exactly `"object"` carry
//! child nodes under any other key.
//!
//! ## Verdict
//!
//! [`validate`] and [`Validator::validate`] return a single boolean.
//! Missing required fields, type mismatches, unrecognized tags and
//! malformed schemas all produce `false`; nothing panics. The reason for a
//! rejection is emitted as a `tracing` debug event.
//!
//! ## Absent optional fields
//!
//! By default an optional field that is missing from the body is still
//! type-checked as `undefined`, so it fails unless its `type` admits
//! `undefined`. [`AbsentOptional::Skip`] turns this off.
//!
//! ## Crate Policy
//!
//! - No I/O. Schemas and bodies are `serde_json::Value` trees owned by the
//!   caller and only borrowed here.
//! - No caching or compilation of schemas; every call walks the schema.
//! - No `panic!()` or `.unwrap()` outside tests.

mod error;
mod node;
pub mod options;
pub mod tag;
pub mod validate;

pub use options::{AbsentOptional, ValidationOptions};
pub use tag::{type_matches, TypeSpec, TypeTag};
pub use validate::{validate, Validator};
