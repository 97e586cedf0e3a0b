//! # Type Tags — Runtime Categories and the Type Matcher
//!
//! Every value seen by the validator falls into exactly one runtime
//! category, named by a [`TypeTag`]. A schema node's `type` is either a
//! single tag (`"string"`) or a union of tags (`["string", "number"]`),
//! parsed into a [`TypeSpec`].
//!
//! ## Categories
//!
//! | value                  | tag         |
//! |------------------------|-------------|
//! | absent field           | `undefined` |
//! | `null`                 | `null`      |
//! | `true` / `false`       | `boolean`   |
//! | any number             | `number`    |
//! | string                 | `string`    |
//! | object                 | `object`    |
//! | array                  | `array`     |
//!
//! Any other tag written in a schema is [`TypeTag::Unrecognized`] and never
//! matches a value. That is a policy, not an error.

use std::fmt;

use serde_json::Value;

/// Runtime category of a (possibly absent) value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// The field does not exist in its parent object.
    Undefined,
    /// JSON `null`.
    Null,
    /// JSON `true` or `false`.
    Boolean,
    /// Any JSON number, integer or float.
    Number,
    /// JSON string.
    String,
    /// JSON object.
    Object,
    /// JSON array. Never matches `object`.
    Array,
    /// A tag named in a schema that no runtime value carries.
    Unrecognized(String),
}

impl TypeTag {
    /// Returns the category of a value. `None` is the absent-field sentinel.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => TypeTag::Undefined,
            Some(Value::Null) => TypeTag::Null,
            Some(Value::Bool(_)) => TypeTag::Boolean,
            Some(Value::Number(_)) => TypeTag::Number,
            Some(Value::String(_)) => TypeTag::String,
            Some(Value::Object(_)) => TypeTag::Object,
            Some(Value::Array(_)) => TypeTag::Array,
        }
    }

    /// Parses a tag name as written in a schema. Unknown names are kept
    /// verbatim as [`TypeTag::Unrecognized`].
    pub fn parse(name: &str) -> Self {
        match name {
            "undefined" => TypeTag::Undefined,
            "null" => TypeTag::Null,
            "boolean" => TypeTag::Boolean,
            "number" => TypeTag::Number,
            "string" => TypeTag::String,
            "object" => TypeTag::Object,
            "array" => TypeTag::Array,
            other => TypeTag::Unrecognized(other.to_string()),
        }
    }

    /// Returns the tag name.
    pub fn name(&self) -> &str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::Unrecognized(name) => name,
        }
    }

    /// Returns true for tags that some runtime value can carry.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, TypeTag::Unrecognized(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `type` descriptor of a schema node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    /// `"type": "<tag>"` — the value's category must equal the tag.
    Single(TypeTag),
    /// `"type": ["<tag>", ...]` — the value's category must be a member.
    Union(Vec<TypeTag>),
}

impl TypeSpec {
    /// Reads a `type` descriptor from its schema value.
    ///
    /// Returns `None` when the descriptor is neither a string nor an array.
    /// Non-string array members become unrecognized tags, so they can never
    /// be matched but do not invalidate the rest of the union.
    pub fn from_value(descriptor: &Value) -> Option<Self> {
        match descriptor {
            Value::String(name) => Some(TypeSpec::Single(TypeTag::parse(name))),
            Value::Array(members) => Some(TypeSpec::Union(
                members
                    .iter()
                    .map(|member| match member {
                        Value::String(name) => TypeTag::parse(name),
                        other => TypeTag::Unrecognized(other.to_string()),
                    })
                    .collect(),
            )),
            _ => None,
        }
    }

    /// Returns true if a value of category `actual` satisfies this descriptor.
    ///
    /// Order and duplicates inside a union are irrelevant; an empty union
    /// accepts nothing.
    pub fn accepts(&self, actual: &TypeTag) -> bool {
        if !actual.is_recognized() {
            return false;
        }
        match self {
            TypeSpec::Single(expected) => expected == actual,
            TypeSpec::Union(members) => members.contains(actual),
        }
    }

    /// Returns true only for the single tag `object`.
    ///
    /// Child schemas are walked only in that case; a union that happens to
    /// contain `object` is checked for category but never descended into.
    pub fn is_object(&self) -> bool {
        matches!(self, TypeSpec::Single(TypeTag::Object))
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Single(tag) => write!(f, "{tag}"),
            TypeSpec::Union(members) => {
                f.write_str("one of [")?;
                for (i, tag) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{tag}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Type Matcher: does `value`'s runtime category satisfy the `type`
/// descriptor `descriptor`?
///
/// A descriptor that is neither a string nor an array matches nothing.
pub fn type_matches(value: Option<&Value>, descriptor: &Value) -> bool {
    TypeSpec::from_value(descriptor).is_some_and(|spec| spec.accepts(&TypeTag::of(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_of_each_value_kind() {
        assert_eq!(TypeTag::of(None), TypeTag::Undefined);
        assert_eq!(TypeTag::of(Some(&json!(null))), TypeTag::Null);
        assert_eq!(TypeTag::of(Some(&json!(false))), TypeTag::Boolean);
        assert_eq!(TypeTag::of(Some(&json!(33))), TypeTag::Number);
        assert_eq!(TypeTag::of(Some(&json!(-1.5))), TypeTag::Number);
        assert_eq!(TypeTag::of(Some(&json!("33"))), TypeTag::String);
        assert_eq!(TypeTag::of(Some(&json!({"a": 1}))), TypeTag::Object);
        assert_eq!(TypeTag::of(Some(&json!([1, 2]))), TypeTag::Array);
    }

    #[test]
    fn test_parse_and_name_agree() {
        for name in ["undefined", "null", "boolean", "number", "string", "object", "array"] {
            let tag = TypeTag::parse(name);
            assert!(tag.is_recognized(), "{name} should be recognized");
            assert_eq!(tag.name(), name);
        }
    }

    #[test]
    fn test_foreign_tags_are_unrecognized() {
        for name in ["function", "symbol", "bigint", "int", "String", ""] {
            let tag = TypeTag::parse(name);
            assert_eq!(tag, TypeTag::Unrecognized(name.to_string()));
            assert_eq!(tag.to_string(), name);
        }
    }

    #[test]
    fn test_single_tag_exact_match() {
        assert!(type_matches(Some(&json!("hello")), &json!("string")));
        assert!(!type_matches(Some(&json!("33")), &json!("number")));
        assert!(!type_matches(Some(&json!(33)), &json!("string")));
    }

    #[test]
    fn test_union_membership() {
        let union = json!(["string", "number"]);
        assert!(type_matches(Some(&json!("hello")), &union));
        assert!(type_matches(Some(&json!(3)), &union));
        assert!(!type_matches(Some(&json!({"value": "x"})), &union));
        assert!(!type_matches(None, &union));
    }

    #[test]
    fn test_union_order_and_duplicates_irrelevant() {
        let value = json!(true);
        assert!(type_matches(Some(&value), &json!(["boolean", "string"])));
        assert!(type_matches(Some(&value), &json!(["string", "boolean"])));
        assert!(type_matches(Some(&value), &json!(["boolean", "boolean"])));
    }

    #[test]
    fn test_empty_union_matches_nothing() {
        assert!(!type_matches(Some(&json!("x")), &json!([])));
        assert!(!type_matches(None, &json!([])));
    }

    #[test]
    fn test_unrecognized_tag_never_matches() {
        assert!(!type_matches(Some(&json!("x")), &json!("function")));
        assert!(!type_matches(None, &json!("bigint")));
        assert!(!type_matches(Some(&json!(1)), &json!(["symbol"])));
    }

    #[test]
    fn test_non_string_union_member_is_inert() {
        let union = json!(["string", 5, null]);
        assert!(type_matches(Some(&json!("x")), &union));
        assert!(!type_matches(Some(&json!(5)), &union));
        assert!(!type_matches(Some(&json!(null)), &union));
    }

    #[test]
    fn test_malformed_descriptor_matches_nothing() {
        assert!(!type_matches(Some(&json!("x")), &json!(null)));
        assert!(!type_matches(Some(&json!({})), &json!({"type": "object"})));
        assert!(!type_matches(None, &json!(true)));
    }

    #[test]
    fn test_absent_matches_undefined() {
        assert!(type_matches(None, &json!("undefined")));
        assert!(type_matches(None, &json!(["string", "undefined"])));
        assert!(!type_matches(Some(&json!(null)), &json!("undefined")));
    }

    #[test]
    fn test_null_and_array_are_not_objects() {
        assert!(!type_matches(Some(&json!(null)), &json!("object")));
        assert!(!type_matches(Some(&json!([])), &json!("object")));
        assert!(type_matches(Some(&json!([])), &json!("array")));
    }

    #[test]
    fn test_only_single_object_descends() {
        assert!(TypeSpec::Single(TypeTag::Object).is_object());
        assert!(!TypeSpec::Union(vec![TypeTag::Object]).is_object());
        assert!(!TypeSpec::Single(TypeTag::String).is_object());
    }

    #[test]
    fn test_spec_display() {
        assert_eq!(TypeSpec::Single(TypeTag::Number).to_string(), "number");
        let union = TypeSpec::Union(vec![TypeTag::String, TypeTag::Number]);
        assert_eq!(union.to_string(), "one of [string, number]");
    }
}
