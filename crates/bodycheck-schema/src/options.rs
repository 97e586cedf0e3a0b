//! # Validation Options
//!
//! The validator has one tunable policy: what to do with an optional field
//! that is absent from the body.
//!
//! By default an absent optional field is still type-checked, with the
//! absent value carrying the `undefined` category. Unless the field's
//! `type` admits `undefined`, the body is rejected. Callers that want the
//! intuitive "absent optional fields are fine" behavior must opt in with
//! [`AbsentOptional::Skip`].

use serde::{Deserialize, Serialize};

/// Handling of optional fields missing from the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentOptional {
    /// Type-check the absent value as `undefined`.
    #[default]
    Evaluate,
    /// Accept the absent field without checking it.
    Skip,
}

/// Options for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    /// Policy for optional fields absent from the body.
    pub absent_optional: AbsentOptional,
}

impl ValidationOptions {
    /// Sets the absent-optional policy.
    pub fn with_absent_optional(mut self, policy: AbsentOptional) -> Self {
        self.absent_optional = policy;
        self
    }
}
