//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::ExtractError;
use crate::graph::{FlowSummary, GraphDocument};
use crate::options::ExtractOptions;
use crate::render::{self, Element, LayoutMode};

/// Full extraction: flow export text + optional options JSON.
/// Returns `{status: "success", graph, layout, summary}` or an error object.
#[wasm_bindgen]
pub fn extract_flow(json: &str, options_json: Option<String>) -> JsValue {
    let result = extract_flow_inner(json, options_json.as_deref());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Extraction straight to the renderer's element list.
#[wasm_bindgen]
pub fn flow_elements(json: &str, options_json: Option<String>) -> JsValue {
    let result = flow_elements_inner(json, options_json.as_deref());
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub(crate) fn extract_flow_inner(json: &str, options_json: Option<&str>) -> ExtractResult {
    match run(json, options_json) {
        Ok(graph) => ExtractResult::Success {
            layout: render::layout_mode(&graph),
            summary: graph.summary(),
            graph,
        },
        Err(e) => ExtractResult::Error(ErrorDto::from(e)),
    }
}

pub(crate) fn flow_elements_inner(json: &str, options_json: Option<&str>) -> ElementsResult {
    match run(json, options_json) {
        Ok(graph) => ElementsResult::Success {
            layout: render::layout_mode(&graph),
            elements: render::to_elements(&graph),
        },
        Err(e) => ElementsResult::Error(ErrorDto::from(e)),
    }
}

fn run(json: &str, options_json: Option<&str>) -> Result<GraphDocument, ExtractError> {
    let options = match options_json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => serde_json::from_str::<ExtractOptions>(raw)
            .map_err(|e| ExtractError::malformed(format!("options: {}", e)))?,
        None => ExtractOptions::default(),
    };
    crate::extract::extract_str(json, &options)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
pub(crate) struct ErrorDto {
    code: &'static str,
    phase: String,
    reason: String,
}

impl From<ExtractError> for ErrorDto {
    fn from(e: ExtractError) -> Self {
        ErrorDto {
            code: e.code(),
            phase: e.phase().to_string(),
            reason: e.reason(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub(crate) enum ExtractResult {
    Success {
        graph: GraphDocument,
        layout: LayoutMode,
        summary: FlowSummary,
    },
    Error(ErrorDto),
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub(crate) enum ElementsResult {
    Success {
        elements: Vec<Element>,
        layout: LayoutMode,
    },
    Error(ErrorDto),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_carries_graph_layout_and_summary() {
        let json = r#"{"name": "Main IVR", "steps": [{"id": "a1", "name": "Start", "type": "start"}]}"#;
        let value = serde_json::to_value(extract_flow_inner(json, None)).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["graph"]["name"], "Main IVR");
        assert_eq!(value["layout"]["name"], "dagre");
        assert_eq!(value["summary"]["nodeCount"], 1);
    }

    #[test]
    fn error_payload_carries_code_and_reason() {
        let value = serde_json::to_value(extract_flow_inner("{}", None)).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "S001");
        assert_eq!(value["phase"], "Locate");
        assert_eq!(value["reason"], "unrecognized schema");
    }

    #[test]
    fn options_supply_default_name() {
        let json = r#"{"nodes": [{"id": "n1"}]}"#;
        let value =
            serde_json::to_value(extract_flow_inner(json, Some(r#"{"defaultName": "ivr.json"}"#)))
                .unwrap();
        assert_eq!(value["graph"]["name"], "ivr.json");
    }

    #[test]
    fn bad_options_are_malformed_input() {
        let json = r#"{"nodes": [{"id": "n1"}]}"#;
        let value = serde_json::to_value(flow_elements_inner(json, Some("{oops"))).unwrap();
        assert_eq!(value["code"], "P001");
    }
}
