//! Opaque stack template documents.
//!
//! A template is a generic tree of maps, sequences, and scalars describing
//! the desired resources of a stack. This crate never interprets it; the one
//! operation that matters is serializing it to the JSON wire format the
//! remote service expects.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON template: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML template: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A declarative stack template, held as an uninterpreted JSON value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Template(Value);

impl Template {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Load a template file. `.toml` files are converted to the same JSON
    /// value tree; everything else is parsed as JSON.
    pub fn from_path(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, TemplateError> {
        Ok(Self(serde_json::from_str(s)?))
    }

    pub fn from_toml_str(s: &str) -> Result<Self, TemplateError> {
        let value: toml::Value = toml::from_str(s)?;
        Ok(Self(serde_json::to_value(value)?))
    }

    /// Serialize to the wire format submitted to the remote service.
    pub fn to_wire(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_template_survives_to_wire() {
        let tpl = Template::from_json_str(r#"{"Resources":{"Db":{"Type":"DBInstance"}}}"#).unwrap();
        let wire = tpl.to_wire().unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&wire).unwrap(),
            *tpl.as_value()
        );
    }

    #[test]
    fn toml_template_becomes_json_tree() {
        let tpl = Template::from_toml_str(
            r#"
[Resources.Db]
Type = "DBInstance"
"#,
        )
        .unwrap();
        assert_eq!(tpl.as_value()["Resources"]["Db"]["Type"], "DBInstance");
    }

    #[test]
    fn from_path_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("stack.json");
        std::fs::write(&json_path, r#"{"Resources":{}}"#).unwrap();
        let from_json = Template::from_path(&json_path).unwrap();

        let toml_path = dir.path().join("stack.toml");
        std::fs::write(&toml_path, "[Resources]\n").unwrap();
        let from_toml = Template::from_path(&toml_path).unwrap();

        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Template::from_path(Path::new("/nonexistent/stack.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stack.json"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Template::from_json_str("{not json").is_err());
    }
}
