//! Domain catalog. Built-in analysis targets plus optional file override.

use crate::domain::{Domain, DomainError};
use serde::Deserialize;
use tracing::info;

/// Catalog file shape: `[[domains]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    domains: Vec<Domain>,
}

/// Built-in analysis targets, in display order.
pub fn default_domains() -> Vec<Domain> {
    vec![
        Domain {
            id: "vision-pro".to_string(),
            name: "Vision Pro".to_string(),
            endpoint: "https://api.example.com/vision/pro".to_string(),
            description: "High fidelity scene understanding for enterprise use cases.".to_string(),
        },
        Domain {
            id: "vision-lite".to_string(),
            name: "Vision Lite".to_string(),
            endpoint: "https://api.example.com/vision/lite".to_string(),
            description: "Cost-efficient model optimized for rapid prototyping.".to_string(),
        },
        Domain {
            id: "vision-medical".to_string(),
            name: "Vision Medical".to_string(),
            endpoint: "https://api.example.com/vision/medical".to_string(),
            description: "Specialized diagnostics tuned for medical imaging workflows.".to_string(),
        },
    ]
}

/// Loads the catalog: the file at `path` when given, otherwise the built-in
/// list. An empty file-based catalog is a configuration error.
pub async fn load_catalog(path: Option<&str>) -> Result<Vec<Domain>, DomainError> {
    let Some(path) = path else {
        return Ok(default_domains());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::Config(format!("read catalog {}: {}", path, e)))?;
    let parsed: CatalogFile = toml::from_str(&raw)
        .map_err(|e| DomainError::Config(format!("parse catalog {}: {}", path, e)))?;

    if parsed.domains.is_empty() {
        return Err(DomainError::Config(format!(
            "catalog {} defines no domains",
            path
        )));
    }

    info!(path, count = parsed.domains.len(), "loaded domain catalog from file");
    Ok(parsed.domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let domains = default_domains();
        assert_eq!(domains.len(), 3);
        let ids: HashSet<_> = domains.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), domains.len());
    }

    #[tokio::test]
    async fn missing_path_falls_back_to_builtin() {
        let domains = load_catalog(None).await.unwrap();
        assert_eq!(domains, default_domains());
    }

    #[tokio::test]
    async fn loads_catalog_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        tokio::fs::write(
            &path,
            r#"
[[domains]]
id = "vision-custom"
name = "Vision Custom"
endpoint = "https://vision.internal/analyze"
description = "In-house model."
"#,
        )
        .await
        .unwrap();

        let domains = load_catalog(Some(path.to_str().unwrap())).await.unwrap();
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].id, "vision-custom");
        assert_eq!(domains[0].endpoint, "https://vision.internal/analyze");
    }

    #[tokio::test]
    async fn empty_catalog_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        tokio::fs::write(&path, "domains = []\n").await.unwrap();

        let err = load_catalog(Some(path.to_str().unwrap())).await.unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[tokio::test]
    async fn unreadable_catalog_file_is_a_config_error() {
        let err = load_catalog(Some("/nonexistent/catalog.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
