//! # Body Validation
//!
//! Recursive structural type checking of a body against a schema.
//!
//! ## Algorithm
//!
//! The top-level schema is a mapping of field name to schema node, with no
//! `type`/`required` wrapper. For every field:
//!
//! 1. A required field must be owned by its parent object, otherwise the
//!    body is rejected.
//! 2. The field's value (or the absent sentinel, for an optional field that
//!    is missing) must satisfy the node's `type`. This holds whether or not
//!    the field is required.
//! 3. If the node's `type` is exactly `"object"`, steps 1–3 are applied to
//!    each child node against the value's own fields.
//!
//! Validation stops at the first failure. Only the boolean verdict is
//! public; the reason is logged at `debug` level.

use serde_json::{Map, Value};

use crate::error::Rejection;
use crate::node::SchemaNode;
use crate::options::{AbsentOptional, ValidationOptions};
use crate::tag::TypeTag;

/// Validates request bodies against field schemas.
///
/// Holds only immutable options, so a single validator can be shared
/// across threads. Schemas and bodies are borrowed for the duration of a
/// call and never retained.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
}

impl Validator {
    /// Creates a validator with the given options.
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// Returns the options this validator applies.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Returns true if `body` satisfies `schema`.
    ///
    /// Every failure collapses to `false`: missing required fields, type
    /// mismatches, unrecognized type tags and malformed schemas alike.
    pub fn validate(&self, body: &Value, schema: &Value) -> bool {
        match self.check(body, schema) {
            Ok(()) => true,
            Err(rejection) => {
                tracing::debug!(path = rejection.path(), %rejection, "body rejected");
                false
            }
        }
    }

    /// Validates and reports the first failure found.
    pub(crate) fn check(&self, body: &Value, schema: &Value) -> Result<(), Rejection> {
        let fields = schema.as_object().ok_or_else(|| Rejection::MalformedSchema {
            actual: TypeTag::of(Some(schema)),
        })?;

        // A body that is not an object owns no fields.
        let owner = body.as_object();
        for (name, node) in fields {
            self.check_field(owner, name, node, "")?;
        }
        Ok(())
    }

    /// Presence handling for one field of `owner`, then its property check.
    fn check_field(
        &self,
        owner: Option<&Map<String, Value>>,
        name: &str,
        node: &Value,
        prefix: &str,
    ) -> Result<(), Rejection> {
        let path = make_path(prefix, name);
        let node = match SchemaNode::parse(node) {
            Ok(node) => node,
            Err(defect) => return Err(Rejection::MalformedNode { path, defect }),
        };

        let value = owner.and_then(|fields| fields.get(name));
        tracing::trace!(
            path = %path,
            required = node.required(),
            present = value.is_some(),
            "checking field"
        );

        if value.is_none() {
            if node.required() {
                return Err(Rejection::MissingRequired { path });
            }
            if self.options.absent_optional == AbsentOptional::Skip {
                return Ok(());
            }
        }

        self.check_property(value, &node, &path)
    }

    /// Type check of one value, descending into object nodes.
    fn check_property(
        &self,
        value: Option<&Value>,
        node: &SchemaNode<'_>,
        path: &str,
    ) -> Result<(), Rejection> {
        let actual = TypeTag::of(value);
        if !node.type_spec().accepts(&actual) {
            return Err(Rejection::TypeMismatch {
                path: path.to_string(),
                expected: node.type_spec().to_string(),
                actual,
            });
        }

        if node.type_spec().is_object() {
            let owner = value.and_then(Value::as_object);
            for (name, child) in node.children() {
                self.check_field(owner, name, child, path)?;
            }
        }

        Ok(())
    }
}

/// Returns true if `body` satisfies `schema` under default options.
///
/// Absent optional fields are evaluated as `undefined`; see
/// [`AbsentOptional`].
pub fn validate(body: &Value, schema: &Value) -> bool {
    Validator::default().validate(body, schema)
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}
