//! # Document Loading
//!
//! Reads bodies, schemas and option files from disk. The format follows the
//! file extension: `.yaml`/`.yml` is YAML, anything else is JSON. YAML is
//! converted to the same `serde_json::Value` tree the validator works on.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Failure to load a document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        /// Path of the file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file content is not valid for its format.
    #[error("cannot parse '{path}': {reason}")]
    Parse {
        /// Path of the file.
        path: String,
        /// Parser message.
        reason: String,
    },
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Loads a JSON or YAML document as a JSON value tree.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read and
/// [`LoadError::Parse`] if it is not valid JSON/YAML or uses YAML features
/// with no JSON equivalent.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = read(path)?;
    parse_document(&content, Format::from_path(path)).map_err(|reason| LoadError::Parse {
        path: path.display().to_string(),
        reason,
    })
}

/// Loads a typed document (e.g. validation options) from JSON or YAML.
///
/// # Errors
///
/// Same as [`load_document`], plus [`LoadError::Parse`] when the document
/// does not match the target type.
pub fn load_typed<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let value = load_document(path)?;
    serde_json::from_value(value).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Parses document text in the given format.
pub fn parse_document(content: &str, format: Format) -> Result<Value, String> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}")),
        Format::Yaml => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}"))?;
            yaml_to_json_value(&yaml)
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Converts a YAML value tree into the equivalent JSON value tree.
///
/// Scalar map keys become field names and YAML tags are dropped. Floats
/// JSON cannot represent and composite map keys are rejected, naming the
/// dotted field path where they occur.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    convert(yaml, "")
}

fn convert(yaml: &serde_yaml::Value, path: &str) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    let value = match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(json_number(n).map_err(|e| at(path, &e))?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| convert(item, &child_path(path, &i.to_string())))
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(map) => {
            let mut fields = serde_json::Map::with_capacity(map.len());
            for (key, item) in map {
                let name = field_name(key).map_err(|e| at(path, &e))?;
                let converted = convert(item, &child_path(path, &name))?;
                fields.insert(name, converted);
            }
            Value::Object(fields)
        }
        Yaml::Tagged(tagged) => return convert(&tagged.value, path),
    };
    Ok(value)
}

fn json_number(n: &serde_yaml::Number) -> Result<serde_json::Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    match n.as_f64() {
        Some(f) => serde_json::Number::from_f64(f)
            .ok_or_else(|| format!("cannot represent float {f} in JSON")),
        None => Err(format!("unsupported YAML number: {n}")),
    }
}

fn field_name(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("field names must be scalars, found {other:?}")),
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn at(path: &str, reason: &str) -> String {
    if path.is_empty() {
        reason.to_string()
    } else {
        format!("{reason} at '{path}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("schema.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("schema.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("body.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("body")), Format::Json);
    }

    #[test]
    fn test_yaml_schema_conversion() {
        let yaml = r#"
name:
  type: string
  required: true
test6:
  type: [string, number]
  required: false
"#;
        let value = parse_document(yaml, Format::Yaml).unwrap();
        assert_eq!(
            value,
            json!({
                "name": {"type": "string", "required": true},
                "test6": {"type": ["string", "number"], "required": false}
            })
        );
    }

    #[test]
    fn test_yaml_scalar_keys_stringified() {
        let value = parse_document("1: one\ntrue: yes\n", Format::Yaml).unwrap();
        assert_eq!(value["1"], "one");
        assert_eq!(value["true"], "yes");
    }

    #[test]
    fn test_yaml_tags_dropped() {
        let value = parse_document("age: !years 33\n", Format::Yaml).unwrap();
        assert_eq!(value, json!({"age": 33}));
    }

    #[test]
    fn test_yaml_nan_rejected() {
        let err = parse_document("x: .nan\n", Format::Yaml).unwrap_err();
        assert!(err.contains("cannot represent float"));
    }

    #[test]
    fn test_yaml_errors_name_the_field_path() {
        let err = parse_document("address:\n  geo: [1, .inf]\n", Format::Yaml).unwrap_err();
        assert!(err.ends_with("at 'address.geo.1'"), "{err}");

        let err = parse_document("address:\n  ? [a, b]\n  : 1\n", Format::Yaml).unwrap_err();
        assert!(err.contains("field names must be scalars"), "{err}");
        assert!(err.ends_with("at 'address'"), "{err}");
    }

    #[test]
    fn test_invalid_json_reported() {
        let err = parse_document("{\"a\": ", Format::Json).unwrap_err();
        assert!(err.starts_with("invalid JSON"));
    }

    #[test]
    fn test_load_document_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"age": 33}}"#).unwrap();
        let value = load_document(file.path()).unwrap();
        assert_eq!(value, json!({"age": 33}));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("/nonexistent/body.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/body.json"));
    }

    #[test]
    fn test_load_typed_mismatch() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "absent_optional: sometimes").unwrap();
        let result: Result<bodycheck_schema::ValidationOptions, _> = load_typed(file.path());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
