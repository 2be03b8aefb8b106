//! Per-domain metadata (`_meta.yml`).
//!
//! ```yaml
//! headers:
//!   X-Mock: "1"
//! content-type: application/xml
//! method_free: true
//! ```
//!
//! # Design Decisions
//! - Missing file, empty file and a bare `null` document all mean "defaults"
//! - Anything else that does not fit the shape above is a load error
//! - Header names and values are validated here, once, not per response

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_yaml_ng::Value;

use crate::mock::error::MetadataError;

/// File name of the metadata document inside a domain directory.
pub const META_FILE: &str = "_meta.yml";

/// Parsed, validated domain metadata.
#[derive(Debug, Clone, Default)]
pub struct DomainMetadata {
    /// Headers attached to every response of the domain.
    pub headers: HeaderMap,
    /// Overrides the process default content type.
    pub content_type: Option<String>,
    /// When set, files live directly under the domain root instead of `<method>/`.
    pub method_free: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetadataDocument {
    headers: Option<BTreeMap<String, Value>>,
    #[serde(rename = "content-type")]
    content_type: Option<String>,
    method_free: Option<bool>,
}

impl DomainMetadata {
    /// Load metadata from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, MetadataError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| MetadataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse a metadata document. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, MetadataError> {
        let parse_err = |source| MetadataError::Parse {
            path: origin.to_path_buf(),
            source,
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml_ng::from_str(content).map_err(parse_err)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        let doc: MetadataDocument = serde_yaml_ng::from_value(value).map_err(parse_err)?;

        let mut headers = HeaderMap::new();
        for (name, value) in doc.headers.unwrap_or_default() {
            let invalid = |reason: String| MetadataError::InvalidHeader {
                path: origin.to_path_buf(),
                name: name.clone(),
                reason,
            };

            let text = scalar_to_string(&value)
                .ok_or_else(|| invalid("value must be a string, number or boolean".into()))?;
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| invalid(e.to_string()))?;
            let header_value = HeaderValue::from_str(&text).map_err(|e| invalid(e.to_string()))?;

            headers.append(header_name, header_value);
        }

        let content_type = doc.content_type.filter(|ct| !ct.is_empty());
        if let Some(ct) = &content_type {
            HeaderValue::from_str(ct).map_err(|e| MetadataError::InvalidHeader {
                path: origin.to_path_buf(),
                name: "content-type".into(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            headers,
            content_type,
            method_free: doc.method_free.unwrap_or(false),
        })
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(yaml: &str) -> Result<DomainMetadata, MetadataError> {
        DomainMetadata::parse(yaml, &PathBuf::from("_meta.yml"))
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let meta = DomainMetadata::load(&dir.path().join(META_FILE)).unwrap();
        assert!(meta.headers.is_empty());
        assert!(meta.content_type.is_none());
        assert!(!meta.method_free);
    }

    #[test]
    fn test_empty_and_null_documents_are_default() {
        for doc in ["", "  \n", "~", "null"] {
            let meta = parse(doc).unwrap();
            assert!(meta.headers.is_empty());
            assert!(!meta.method_free);
        }
    }

    #[test]
    fn test_full_document() {
        let meta = parse(
            r#"
headers:
  X-Mock: showmock
  X-Count: 3
content-type: application/xml
method_free: true
"#,
        )
        .unwrap();

        assert_eq!(meta.headers.get("x-mock").unwrap(), "showmock");
        assert_eq!(meta.headers.get("x-count").unwrap(), "3");
        assert_eq!(meta.content_type.as_deref(), Some("application/xml"));
        assert!(meta.method_free);
    }

    #[test]
    fn test_partial_document_defaults_missing_keys() {
        let meta = parse("content-type: text/csv").unwrap();
        assert!(meta.headers.is_empty());
        assert_eq!(meta.content_type.as_deref(), Some("text/csv"));
        assert!(!meta.method_free);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let meta = parse("comment: fixtures for billing\nmethod_free: false").unwrap();
        assert!(!meta.method_free);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = parse("headers: [unterminated").unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
    }

    #[test]
    fn test_wrong_types_are_an_error() {
        assert!(matches!(
            parse("method_free: maybe").unwrap_err(),
            MetadataError::Parse { .. }
        ));
        assert!(matches!(
            parse("headers: not-a-map").unwrap_err(),
            MetadataError::Parse { .. }
        ));
        assert!(matches!(
            parse("- just\n- a list").unwrap_err(),
            MetadataError::Parse { .. }
        ));
    }

    #[test]
    fn test_invalid_headers_are_rejected() {
        assert!(matches!(
            parse("headers:\n  \"bad name\": x").unwrap_err(),
            MetadataError::InvalidHeader { .. }
        ));
        assert!(matches!(
            parse("headers:\n  X-Nested:\n    a: b").unwrap_err(),
            MetadataError::InvalidHeader { .. }
        ));
    }

    #[test]
    fn test_invalid_content_type_is_rejected() {
        let err = parse("content-type: \"text/plain\\nboom\"").unwrap_err();
        match err {
            MetadataError::InvalidHeader { name, .. } => assert_eq!(name, "content-type"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(META_FILE);
        std::fs::write(&path, "method_free: true\n").unwrap();
        assert!(DomainMetadata::load(&path).unwrap().method_free);
    }
}
