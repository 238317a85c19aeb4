//! HTTP implementation of the DPR assembly collaborator.
//!
//! The backend's DPR endpoint is the loosest of the collaborator contracts:
//! success is reported either as `success: true` or `status: "success"`,
//! and the document arrives either as `{sections: {...}, metadata: {...}}`
//! or as a flat keyed map of section blocks. Everything is normalized here
//! into `DprDocument` so the rest of the app sees one shape.

use crate::client::BackendClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use vichar_core::canvas::CanvasItem;
use vichar_core::collaborator::{DprCollaborator, DprContext, DprDocument, DprSection};
use vichar_core::error::{Result, VicharError};

const DPR_PATH: &str = "/dpr/generate";

/// DPR assembly collaborator talking to the backend over HTTP.
#[derive(Clone)]
pub struct HttpDprCollaborator {
    client: Arc<BackendClient>,
}

impl HttpDprCollaborator {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

/// Wire request: the backend's DPR endpoint uses camelCase keys.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DprWireRequest {
    user_id: String,
    canvas_items: Vec<CanvasItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_data: Option<Value>,
    mode: vichar_core::session::WorkflowMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    business_idea: Option<String>,
    session_title: String,
    persona: vichar_core::Persona,
}

#[derive(Deserialize)]
struct DprResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    dpr: Option<Value>,
    #[serde(default)]
    model_used: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl DprResponse {
    fn is_success(&self) -> bool {
        self.success == Some(true) || self.status.as_deref() == Some("success")
    }
}

/// Normalizes the backend's document value into ordered sections plus
/// metadata. Section internals are not interpreted beyond the map-vs-text
/// distinction.
fn normalize_document(dpr: Value, model_used: Option<String>) -> DprDocument {
    let mut sections = BTreeMap::new();
    let mut metadata = BTreeMap::new();

    if let Value::Object(map) = dpr {
        let mut entries: BTreeMap<String, Value> = map.into_iter().collect();

        if let Some(Value::Object(meta)) = entries.remove("metadata") {
            metadata = meta.into_iter().collect();
        }

        // Nested layout: an explicit sections object. Flat layout: every
        // remaining key is itself a section block.
        let section_source = match entries.remove("sections") {
            Some(Value::Object(nested)) => nested.into_iter().collect(),
            Some(other) => BTreeMap::from([("document".to_string(), other)]),
            None => entries,
        };

        for (name, value) in section_source {
            sections.insert(name, DprSection::from_value(value));
        }
    } else {
        sections.insert("document".to_string(), DprSection::from_value(dpr));
    }

    DprDocument {
        sections,
        metadata,
        model_used,
    }
}

#[async_trait]
impl DprCollaborator for HttpDprCollaborator {
    async fn assemble(&self, items: Vec<CanvasItem>, context: DprContext) -> Result<DprDocument> {
        let request = DprWireRequest {
            user_id: context.user_id,
            canvas_items: items,
            user_data: context.user_data,
            mode: context.mode,
            business_idea: context.business_idea,
            session_title: context.session_title,
            persona: context.persona,
        };

        let response: DprResponse = self.client.post_json(DPR_PATH, &request).await?;

        if !response.is_success() {
            return Err(VicharError::collaborator(
                response
                    .error
                    .unwrap_or_else(|| "DPR assembly failed".to_string()),
            ));
        }

        let dpr = response.dpr.ok_or_else(|| {
            VicharError::collaborator("DPR response reported success but carried no document")
        })?;

        Ok(normalize_document(dpr, response.model_used))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flag_variants() {
        let by_bool: DprResponse =
            serde_json::from_str(r#"{"success": true, "dpr": {}}"#).unwrap();
        assert!(by_bool.is_success());

        let by_status: DprResponse =
            serde_json::from_str(r#"{"status": "success", "dpr": {}}"#).unwrap();
        assert!(by_status.is_success());

        let failed: DprResponse =
            serde_json::from_str(r#"{"success": false, "error": "no items"}"#).unwrap();
        assert!(!failed.is_success());
    }

    #[test]
    fn test_normalize_nested_layout() {
        let doc = normalize_document(
            json!({
                "sections": {
                    "executive_summary": "A tiffin service for IT parks.",
                    "financials": {"capex": "₹2,00,000", "breakeven_months": 8}
                },
                "metadata": {"generated_at": "2026-08-30"}
            }),
            Some("gemini-2.5-pro".to_string()),
        );

        assert_eq!(doc.sections.len(), 2);
        assert_eq!(
            doc.sections["executive_summary"],
            DprSection::Text("A tiffin service for IT parks.".to_string())
        );
        assert!(matches!(doc.sections["financials"], DprSection::Fields(_)));
        assert_eq!(doc.metadata["generated_at"], json!("2026-08-30"));
        assert_eq!(doc.model_used.as_deref(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_normalize_flat_layout() {
        let doc = normalize_document(
            json!({
                "market_analysis": {"demand": "high"},
                "summary": "Plain text section"
            }),
            None,
        );

        assert_eq!(doc.sections.len(), 2);
        assert!(matches!(doc.sections["market_analysis"], DprSection::Fields(_)));
        assert_eq!(
            doc.sections["summary"],
            DprSection::Text("Plain text section".to_string())
        );
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn test_request_uses_camel_case_keys() {
        let request = DprWireRequest {
            user_id: "u1".to_string(),
            canvas_items: Vec::new(),
            user_data: None,
            mode: vichar_core::session::WorkflowMode::Anchor,
            business_idea: Some("tiffin service".to_string()),
            session_title: "Session".to_string(),
            persona: vichar_core::Persona::Neutral,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("canvasItems").is_some());
        assert!(json.get("businessIdea").is_some());
        assert!(json.get("userData").is_none());
    }
}
