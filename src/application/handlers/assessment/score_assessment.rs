//! ScoreAssessmentHandler - Command handler for scoring a completed assessment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::catalog::AnswerMap;
use crate::domain::foundation::{AssessmentId, DomainError, RespondentLevel, Timestamp};
use crate::domain::scoring::{ScoreResult, ScoringEngine};
use crate::ports::{CatalogSource, LoadedCatalog};

/// Command to score one answer set.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    pub answers: AnswerMap,
    pub level: RespondentLevel,
}

/// A scored assessment, stamped with identity and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentScored {
    pub assessment_id: AssessmentId,
    pub level: RespondentLevel,
    /// Fingerprint of the catalog the answers were scored against.
    pub catalog_fingerprint: String,
    pub scored_at: Timestamp,
    pub result: ScoreResult,
}

/// Handler for scoring assessments.
///
/// Loads the catalog, filters it for the respondent level and runs the
/// scoring engine. The engine itself stays free of identity and time.
pub struct ScoreAssessmentHandler {
    catalog_source: Arc<dyn CatalogSource>,
    engine: ScoringEngine,
}

impl ScoreAssessmentHandler {
    pub fn new(catalog_source: Arc<dyn CatalogSource>, engine: ScoringEngine) -> Self {
        Self {
            catalog_source,
            engine,
        }
    }

    pub async fn handle(&self, cmd: ScoreAssessmentCommand) -> Result<AssessmentScored, DomainError> {
        // 1. Load and filter the catalog
        let LoadedCatalog {
            catalog,
            fingerprint: catalog_fingerprint,
        } = self.catalog_source.load().await?;
        let catalog = catalog.for_level(cmd.level);

        debug!(
            level = %cmd.level,
            questions = catalog.questions.len(),
            dilemmas = catalog.dilemmas.len(),
            "Catalog ready for scoring"
        );

        // 2. Score
        let result = self.engine.score(
            &catalog.questions,
            &catalog.dilemmas,
            &cmd.answers,
            cmd.level,
        );

        // 3. Stamp
        let scored = AssessmentScored {
            assessment_id: AssessmentId::new(),
            level: cmd.level,
            catalog_fingerprint,
            scored_at: Timestamp::now(),
            result,
        };

        info!(
            assessment_id = %scored.assessment_id,
            total = %scored.result.total,
            quadrant = %scored.result.matrix.quadrant_name,
            status = ?scored.result.consistency.status,
            "Assessment scored"
        );

        Ok(scored)
    }
}
