//! # Rejections — Why a Verdict Is `false`
//!
//! The public surface of this crate only ever answers `true` or `false`.
//! Internally every failure is described by a [`Rejection`] carrying the
//! dotted path of the offending field, so that it can be logged through
//! `tracing` and asserted on in tests. Rejections never escape the crate.

use thiserror::Error;

use crate::tag::TypeTag;

/// A defect in a single schema node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeDefect {
    /// The node is not a JSON object.
    #[error("schema node must be an object, found {0}")]
    NotAnObject(TypeTag),

    /// The reserved `type` key is missing.
    #[error("schema node has no 'type'")]
    MissingType,

    /// `type` is neither a tag name nor an array of tag names.
    #[error("'type' must be a tag name or an array of tag names, found {0}")]
    InvalidType(TypeTag),

    /// The reserved `required` key is missing.
    #[error("schema node has no 'required' flag")]
    MissingRequired,

    /// `required` is present but not a boolean.
    #[error("'required' must be a boolean, found {0}")]
    InvalidRequired(TypeTag),
}

/// Reason a body failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// The top-level schema is not a mapping of field names to nodes.
    #[error("schema must be an object of field definitions, found {actual}")]
    MalformedSchema {
        /// Category of the value passed as schema.
        actual: TypeTag,
    },

    /// A schema node reached during validation is malformed.
    #[error("field '{path}': {defect}")]
    MalformedNode {
        /// Dotted path of the field the node describes.
        path: String,
        /// What is wrong with the node.
        defect: NodeDefect,
    },

    /// A required field is absent from its parent object.
    #[error("field '{path}': required but missing")]
    MissingRequired {
        /// Dotted path of the missing field.
        path: String,
    },

    /// A field's runtime category is not allowed by its schema node.
    #[error("field '{path}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Dotted path of the field.
        path: String,
        /// Rendered `type` descriptor.
        expected: String,
        /// Category of the value found (`undefined` when absent).
        actual: TypeTag,
    },
}

impl Rejection {
    /// Dotted path of the offending field, empty for schema-level rejections.
    pub(crate) fn path(&self) -> &str {
        match self {
            Rejection::MalformedSchema { .. } => "",
            Rejection::MalformedNode { path, .. }
            | Rejection::MissingRequired { path }
            | Rejection::TypeMismatch { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let rejection = Rejection::TypeMismatch {
            path: "age".into(),
            expected: "number".into(),
            actual: TypeTag::String,
        };
        assert_eq!(rejection.to_string(), "field 'age': expected number, got string");
    }

    #[test]
    fn test_malformed_node_display_includes_defect() {
        let rejection = Rejection::MalformedNode {
            path: "address.county".into(),
            defect: NodeDefect::InvalidRequired(TypeTag::String),
        };
        let display = rejection.to_string();
        assert!(display.contains("address.county"));
        assert!(display.contains("'required' must be a boolean, found string"));
    }

    #[test]
    fn test_path_accessor() {
        let missing = Rejection::MissingRequired { path: "a.b".into() };
        assert_eq!(missing.path(), "a.b");
        let schema = Rejection::MalformedSchema { actual: TypeTag::Array };
        assert_eq!(schema.path(), "");
    }
}
