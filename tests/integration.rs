//! Integration tests for flowport
//!
//! End-to-end tests from exported JSON text to converted files on disk.
//!
mod common;
use common::*;
use flowport::prelude::*;
use serde_json::{Value, json};
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_detected_export_converts_to_every_platform() {
        let source = n8n_support_flow();
        let from = detect_platform(&source).expect("n8n export is recognised");
        assert_eq!(from, Platform::N8n);

        let results = convert_to_all(&source, from);
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(result.validation.success, "{:?}", result.validation);
            assert_eq!(result.workflow.name(), Some("Support triage"));
        }
    }

    #[test]
    fn test_converted_workflows_written_to_disk() {
        let dir = std::env::temp_dir().join(format!("flowport-it-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");

        let source = lead_alert_zap();
        for result in convert_to_all(&source, Platform::Zapier) {
            let file_name = output_file_name(result.workflow.name().unwrap_or_default(), result.platform);
            let path = dir.join(&file_name);
            fs::write(&path, result.workflow.to_json_pretty().unwrap()).unwrap();

            let reread: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(detect_platform(&reread).unwrap(), result.platform);
            assert_eq!(
                WorkflowDocument::coerce(&reread, result.platform).step_count(),
                3
            );
        }

        assert!(dir.join("newleadalert_n8n.json").exists());
        assert!(dir.join("newleadalert_make.json").exists());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_n8n_output_has_import_ready_shape() {
        let result = convert(&lead_alert_zap(), Platform::Zapier, Platform::N8n);
        let output = workflow_json(&result);

        assert!(output["id"].is_string());
        assert!(output["versionId"].is_string());
        assert_eq!(output["active"], json!(false));
        assert_eq!(output["settings"], json!({ "executionOrder": "v1" }));
        assert_eq!(output["pinData"], json!({}));

        let node = &output["nodes"][0];
        assert_eq!(node["type"], json!("n8n-nodes-base.gmail"));
        assert_eq!(node["typeVersion"], json!(1));
        assert_eq!(node["position"], json!([250, 300]));
        assert_eq!(node["credentials"], json!({ "id": "auth-gmail" }));
        assert!(output["nodes"][1].get("credentials").is_none());
        assert_eq!(
            output["connections"]["Watch inbox"],
            json!({ "main": [[{ "node": "Log lead", "type": "main", "index": 0 }]] })
        );
    }

    #[test]
    fn test_make_output_has_import_ready_shape() {
        let result = convert(&n8n_support_flow(), Platform::N8n, Platform::Make);
        let output = workflow_json(&result);

        assert_eq!(output["name"], json!("Support triage"));
        assert_eq!(output["metadata"]["zone"], json!("us1.make.com"));
        assert_eq!(output["metadata"]["scenario"]["maxErrors"], json!(3));
        let module = &output["flow"][0];
        assert_eq!(module["id"], json!(1));
        assert_eq!(module["module"], json!("gateway:CustomWebHook"));
        assert_eq!(module["version"], json!(1));
        assert_eq!(module["mapper"], json!({}));
        assert_eq!(
            module["metadata"]["designer"],
            json!({ "x": 240, "y": 300, "name": "Incoming" })
        );
    }

    #[test]
    fn test_strict_parse_and_lenient_convert_agree() {
        let text = serde_json::to_string(&make_scenario()).unwrap();
        let parsed = WorkflowDocument::parse(&text, Platform::Make).expect("well-formed scenario");
        let converter = Converter::default();

        let from_document = converter.convert_document(&parsed, Platform::Zapier);
        let from_text = convert_str(&text, Platform::Make, Platform::Zapier).unwrap();
        assert_eq!(from_document.validation, from_text.validation);
        assert_eq!(from_document.workflow, from_text.workflow);
    }

    #[test]
    fn test_strict_parse_rejects_misshapen_exports() {
        let err = WorkflowDocument::parse(r#"{ "flow": "nope" }"#, Platform::Make).unwrap_err();
        assert!(matches!(err, DocumentError::Shape { .. }));
        assert!(err.to_string().contains("make"));
    }

    #[test]
    fn test_detection_of_unknown_formats_fails() {
        assert!(matches!(detect_platform(&json!([1])), Err(DetectionError::NotAnObject)));
        let err = detect_platform(&json!({ "foo": 1, "bar": 2 })).unwrap_err();
        assert!(err.to_string().contains("bar, foo") || err.to_string().contains("foo, bar"));
        assert_eq!(detect_platform(&make_scenario()).unwrap(), Platform::Make);
        assert_eq!(detect_platform(&gmail_and_unknown_zap()).unwrap(), Platform::Zapier);
    }

    #[test]
    fn test_complexity_report_for_ai_workflow() {
        let document = WorkflowDocument::coerce(&n8n_support_flow(), Platform::N8n);
        let report = analyze(&document);
        assert_eq!(report.steps_count, 3);
        assert!(report.has_ai);
        assert!(!report.has_loops);
        assert!(!report.has_branches);
        assert_eq!(report.score, 30 + 15);
        assert_eq!(report.level, ComplexityLevel::Moderate);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["level"], json!("moderate"));
    }
}
