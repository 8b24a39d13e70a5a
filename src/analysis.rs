use crate::document::WorkflowDocument;
use serde::Serialize;

/// A rough estimate of how hard a workflow will be to migrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    /// 0 to 100.
    pub score: u32,
    pub level: ComplexityLevel,
    pub steps_count: usize,
    pub has_loops: bool,
    pub has_ai: bool,
    pub has_custom_code: bool,
    /// Fan-out or routing, which conversion flattens into a linear chain.
    pub has_branches: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityLevel {
    fn from_score(score: u32) -> Self {
        match score {
            0..30 => ComplexityLevel::Simple,
            30..60 => ComplexityLevel::Moderate,
            _ => ComplexityLevel::Complex,
        }
    }
}

const STEP_WEIGHT: u32 = 10;
const LOOP_WEIGHT: u32 = 20;
const AI_WEIGHT: u32 = 15;
const CODE_WEIGHT: u32 = 25;

const LOOP_MARKERS: &[&str] = &["loop", "splitinbatches", "iterator", "repeater"];
const AI_MARKERS: &[&str] = &["openai", "langchain", "anthropic", "gpt"];
const CODE_MARKERS: &[&str] = &["code", "function"];
const BRANCH_MARKERS: &[&str] = &["router", "switch", "paths"];

/// Scores a workflow by its size and by the kinds of steps it contains.
pub fn analyze(document: &WorkflowDocument) -> ComplexityReport {
    let identifiers: Vec<String> = document
        .step_identifiers()
        .into_iter()
        .map(str::to_lowercase)
        .collect();
    let any = |markers: &[&str]| {
        identifiers
            .iter()
            .any(|id| markers.iter().any(|marker| id.contains(marker)))
    };

    let has_loops = any(LOOP_MARKERS);
    let has_ai = any(AI_MARKERS);
    let has_custom_code = any(CODE_MARKERS);
    let connection_fan_out = match document {
        WorkflowDocument::N8n(doc) => doc.connections.values().any(|c| c.is_branching()),
        _ => false,
    };
    let has_branches = connection_fan_out || any(BRANCH_MARKERS);

    let steps_count = identifiers.len();
    let mut score = (steps_count as u32).saturating_mul(STEP_WEIGHT);
    if has_loops {
        score += LOOP_WEIGHT;
    }
    if has_ai {
        score += AI_WEIGHT;
    }
    if has_custom_code {
        score += CODE_WEIGHT;
    }
    let score = score.min(100);

    ComplexityReport {
        score,
        level: ComplexityLevel::from_score(score),
        steps_count,
        has_loops,
        has_ai,
        has_custom_code,
        has_branches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use serde_json::json;

    #[test]
    fn single_step_is_simple() {
        let doc = WorkflowDocument::coerce(
            &json!({ "steps": [{ "app": "gmail" }] }),
            Platform::Zapier,
        );
        let report = analyze(&doc);
        assert_eq!(report.score, 10);
        assert_eq!(report.level, ComplexityLevel::Simple);
        assert!(!report.has_branches);
    }

    #[test]
    fn code_and_ai_raise_the_score() {
        let doc = WorkflowDocument::coerce(
            &json!({
                "nodes": [
                    { "name": "A", "type": "n8n-nodes-base.code" },
                    { "name": "B", "type": "@n8n/n8n-nodes-langchain.openAi" }
                ],
                "connections": {
                    "A": { "main": [[{ "node": "B" }], [{ "node": "C" }]] }
                }
            }),
            Platform::N8n,
        );
        let report = analyze(&doc);
        assert!(report.has_custom_code);
        assert!(report.has_ai);
        assert!(report.has_branches);
        assert_eq!(report.score, 20 + 15 + 25);
        assert_eq!(report.level, ComplexityLevel::Complex);
    }

    #[test]
    fn score_is_capped() {
        let steps: Vec<_> = (0..20).map(|_| json!({ "module": "builtin:BasicRepeater" })).collect();
        let doc = WorkflowDocument::coerce(&json!({ "flow": steps }), Platform::Make);
        let report = analyze(&doc);
        assert_eq!(report.score, 100);
        assert!(report.has_loops);
        assert_eq!(report.level, ComplexityLevel::Complex);
    }
}
