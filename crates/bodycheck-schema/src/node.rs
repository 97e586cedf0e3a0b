//! # Schema Nodes
//!
//! A schema node is a JSON object with two reserved keys, `type` and
//! `required`. When `type` is exactly `"object"`, every other key names a
//! child node. [`SchemaNode`] is a borrowed, read-only view over such an
//! object; nothing is copied out of the schema tree except the parsed
//! `type` descriptor.

use serde_json::{Map, Value};

use crate::error::NodeDefect;
use crate::tag::{TypeSpec, TypeTag};

/// Reserved key holding the node's type descriptor.
pub(crate) const TYPE_KEY: &str = "type";

/// Reserved key holding the node's requiredness flag.
pub(crate) const REQUIRED_KEY: &str = "required";

/// Borrowed view over one schema node.
#[derive(Debug, Clone)]
pub(crate) struct SchemaNode<'a> {
    type_spec: TypeSpec,
    required: bool,
    entries: &'a Map<String, Value>,
}

impl<'a> SchemaNode<'a> {
    /// Reads a node, checking that both reserved keys are present and well
    /// formed. Child nodes are not inspected here.
    pub(crate) fn parse(node: &'a Value) -> Result<Self, NodeDefect> {
        let entries = node
            .as_object()
            .ok_or_else(|| NodeDefect::NotAnObject(TypeTag::of(Some(node))))?;

        let descriptor = entries.get(TYPE_KEY).ok_or(NodeDefect::MissingType)?;
        let type_spec = TypeSpec::from_value(descriptor)
            .ok_or_else(|| NodeDefect::InvalidType(TypeTag::of(Some(descriptor))))?;

        let required = match entries.get(REQUIRED_KEY) {
            Some(Value::Bool(flag)) => *flag,
            Some(other) => return Err(NodeDefect::InvalidRequired(TypeTag::of(Some(other)))),
            None => return Err(NodeDefect::MissingRequired),
        };

        Ok(Self {
            type_spec,
            required,
            entries,
        })
    }

    pub(crate) fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }

    pub(crate) fn required(&self) -> bool {
        self.required
    }

    /// Child nodes keyed by field name. Empty unless `type` is `"object"`.
    pub(crate) fn children(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + '_ {
        let descend = self.type_spec.is_object();
        self.entries
            .iter()
            .filter(move |(key, _)| descend && !is_reserved(key.as_str()))
            .map(|(key, child)| (key.as_str(), child))
    }
}

fn is_reserved(key: &str) -> bool {
    key == TYPE_KEY || key == REQUIRED_KEY
}
