//! Filesystem catalog source reading JSON or YAML files

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::catalog::{Catalog, Dilemma, Question};
use crate::ports::{CatalogError, CatalogSource, LoadedCatalog};

use super::checksum;

/// Supported catalog encodings, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Filesystem-based catalog source
///
/// Questions and dilemmas live in two files, each holding a list of items.
pub struct FsCatalogSource {
    questions_path: PathBuf,
    dilemmas_path: PathBuf,
}

impl FsCatalogSource {
    /// Create a source over the two catalog files
    pub fn new(questions_path: impl AsRef<Path>, dilemmas_path: impl AsRef<Path>) -> Self {
        Self {
            questions_path: questions_path.as_ref().to_path_buf(),
            dilemmas_path: dilemmas_path.as_ref().to_path_buf(),
        }
    }

    async fn read(path: &Path) -> Result<String, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }

        fs::read_to_string(path).await.map_err(|e| {
            CatalogError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<Vec<T>, CatalogError> {
        let parse_error = |message: String| CatalogError::Parse {
            source_name: path.display().to_string(),
            message,
        };

        match Format::from_path(path)? {
            Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        }
    }
}

#[async_trait]
impl CatalogSource for FsCatalogSource {
    async fn load(&self) -> Result<LoadedCatalog, CatalogError> {
        let questions_raw = Self::read(&self.questions_path).await?;
        let dilemmas_raw = Self::read(&self.dilemmas_path).await?;
        let fingerprint = checksum([questions_raw.as_bytes(), dilemmas_raw.as_bytes()]);

        let questions: Vec<Question> = Self::parse(&self.questions_path, &questions_raw)?;
        let dilemmas: Vec<Dilemma> = Self::parse(&self.dilemmas_path, &dilemmas_raw)?;

        debug!(
            questions = questions.len(),
            dilemmas = dilemmas.len(),
            path = %self.questions_path.display(),
            fingerprint = %fingerprint,
            "Loaded catalog"
        );

        Ok(LoadedCatalog {
            catalog: Catalog::new(questions, dilemmas),
            fingerprint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AxisTag, Horizon, Role};
    use tempfile::TempDir;

    const QUESTIONS_JSON: &str = r#"[
        {"id": 1, "text": "I give timely feedback.", "axis": "People", "block": "People",
         "category": "Feedback", "role": "Líder", "horizon": 0},
        {"id": 2, "axis": "Both", "block": "Results", "inverted": true,
         "categories": ["Execution", "Planning"], "roles": ["Manager"], "horizons": [1, 2]}
    ]"#;

    const DILEMMAS_YAML: &str = r#"
- id: D1
  title: Missed deadline
  axis: Results
  block: Results
  category: Delegation
  role: Gestor
  secondaryRole: Leader
  horizon: 1
  options:
    - text: Take over the task yourself
      value: 1
    - text: Renegotiate scope with the team
      value: 5
  lowScoreRecommendation: Agree on checkpoints before delegating.
"#;

    async fn write_catalog(dir: &TempDir, questions: &str, dilemmas: &str) -> FsCatalogSource {
        let questions_path = dir.path().join("questions.json");
        let dilemmas_path = dir.path().join("dilemmas.yaml");
        fs::write(&questions_path, questions).await.unwrap();
        fs::write(&dilemmas_path, dilemmas).await.unwrap();
        FsCatalogSource::new(questions_path, dilemmas_path)
    }

    #[tokio::test]
    async fn test_load_json_questions_and_yaml_dilemmas() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_catalog(&temp_dir, QUESTIONS_JSON, DILEMMAS_YAML).await;

        let catalog = source.load().await.unwrap().catalog;

        assert_eq!(catalog.questions.len(), 2);
        let q1 = catalog.question(1).unwrap();
        assert_eq!(q1.axis, AxisTag::People);
        assert_eq!(q1.role_tags(), &[Role::Leader]);
        assert_eq!(q1.horizon_tags(), &[Horizon::Immediate]);

        let q2 = catalog.question(2).unwrap();
        assert!(q2.inverted);
        assert_eq!(q2.category_tags().len(), 2);
        assert_eq!(q2.horizon_tags(), &[Horizon::Short, Horizon::Medium]);

        let d1 = catalog.dilemma("D1").unwrap();
        assert_eq!(d1.role, Role::Manager);
        assert_eq!(d1.secondary_role, Some(Role::Leader));
        assert_eq!(d1.options.len(), 2);
        assert!(d1.low_score_recommendation.is_some());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = FsCatalogSource::new(
            temp_dir.path().join("missing.json"),
            temp_dir.path().join("dilemmas.yaml"),
        );

        let result = source.load().await;
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_content_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_catalog(&temp_dir, "{not json", DILEMMAS_YAML).await;

        let result = source.load().await;
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_out_of_range_horizon_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_catalog(
            &temp_dir,
            r#"[{"id": 1, "axis": "People", "horizon": 7}]"#,
            "[]",
        )
        .await;

        assert!(matches!(source.load().await, Err(CatalogError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let questions_path = temp_dir.path().join("questions.csv");
        let dilemmas_path = temp_dir.path().join("dilemmas.yaml");
        fs::write(&questions_path, "id,axis").await.unwrap();
        fs::write(&dilemmas_path, "[]").await.unwrap();

        let source = FsCatalogSource::new(questions_path, dilemmas_path);
        assert!(matches!(
            source.load().await,
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_fingerprint_tracks_content() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_catalog(&temp_dir, QUESTIONS_JSON, DILEMMAS_YAML).await;

        let first = source.fingerprint().await.unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(first, source.fingerprint().await.unwrap());

        let changed = write_catalog(&temp_dir, "[]", DILEMMAS_YAML).await;
        assert_ne!(first, changed.fingerprint().await.unwrap());
    }

    #[tokio::test]
    async fn test_load_fingerprints_the_parsed_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let source = write_catalog(&temp_dir, QUESTIONS_JSON, DILEMMAS_YAML).await;

        let loaded = source.load().await.unwrap();
        assert_eq!(
            loaded.fingerprint,
            checksum([QUESTIONS_JSON.as_bytes(), DILEMMAS_YAML.as_bytes()])
        );
        assert_eq!(loaded.catalog.questions.len(), 2);

        // Rewriting the files after a load leaves that load's pair intact.
        write_catalog(&temp_dir, "[]", "[]").await;
        let reloaded = source.load().await.unwrap();
        assert!(reloaded.catalog.questions.is_empty());
        assert_ne!(reloaded.fingerprint, loaded.fingerprint);
        assert_eq!(reloaded.fingerprint, checksum([b"[]".as_slice(), b"[]".as_slice()]));
    }
}
