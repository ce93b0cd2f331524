#![allow(dead_code)]

use serde_json::{Value, json};

// =============================================================================
// Schema-variant documents
// =============================================================================

/// Current export layout: id-keyed activity map plus a root link list.
pub fn process_doc() -> Value {
    json!({
        "process": {
            "activities": {
                "a1": {"id": "a1", "name": "Start", "activityName": "start"},
                "a2": {"id": "a2", "name": "End", "activityName": "disconnect-contact"}
            },
            "links": [
                {"sourceActivityId": "a1", "targetActivityId": "a2", "conditionExpr": "true"}
            ]
        }
    })
}

/// Older layout: step list with transitions nested in each step.
pub fn steps_doc() -> Value {
    json!({
        "steps": [
            {"id": "a1", "name": "Start", "transitions": [{"to": "a2", "condition": "ok"}]},
            {"id": "a2", "name": "End"}
        ]
    })
}

pub fn empty_process_doc() -> Value {
    json!({"process": {"activities": {}, "links": []}})
}

/// A realistic IVR export touching every category, with layout hints.
pub fn main_menu_doc() -> Value {
    json!({
        "name": "Main Menu IVR",
        "process": {
            "activities": {
                "a1": {
                    "id": "a1",
                    "name": "Incoming Call",
                    "activityName": "NewPhoneContact",
                    "properties": {"event": "NewPhoneContact"}
                },
                "a2": {
                    "id": "a2",
                    "name": "Set Language",
                    "activityName": "set-variable",
                    "properties": {"updates": {"lang": "en", "retries": "0"}}
                },
                "a3": {
                    "id": "a3",
                    "name": "Welcome",
                    "activityName": "play-message",
                    "properties": {"prompts": [{"value": "Thank you for calling Acme"}]}
                },
                "a4": {
                    "id": "a4",
                    "name": "Main Menu",
                    "activityName": "ivr-menu",
                    "properties": {"menuLinks": {"1": "a5", "2": "a6"}, "expression": "digit"}
                },
                "a5": {
                    "id": "a5",
                    "name": "Sales Queue",
                    "activityName": "queue-contact",
                    "properties": {}
                },
                "a6": {"id": "a6", "name": "Post-call Survey", "activityName": "post-call-feedback"},
                "a7": {"id": "a7", "name": "Hang Up", "activityName": "disconnect-contact"},
                "a8": {"id": "a8", "name": "Webhook", "activityName": "http-request", "timeoutMs": 3000}
            },
            "links": [
                {"sourceActivityId": "a1", "targetActivityId": "a2", "conditionExpr": "true"},
                {"sourceActivityId": "a2", "targetActivityId": "a3"},
                {"sourceActivityId": "a3", "targetActivityId": "a4"},
                {"sourceActivityId": "a4", "targetActivityId": "a5", "conditionExpr": "1"},
                {"sourceActivityId": "a4", "targetActivityId": "a6", "properties": {"value": "2"}},
                {"sourceActivityId": "a4", "targetActivityId": "a7", "conditionExpr": "ERROR_TIMEOUT"},
                {"sourceActivityId": "a5", "targetActivityId": "a7", "conditionExpr": "false"},
                {"sourceActivityId": "a6", "targetActivityId": "a7", "type": "error"},
                {"sourceActivityId": "a8"}
            ]
        },
        "diagram": {
            "widgets": {
                "a1": {"point": {"x": 0, "y": 0}},
                "a2": {"point": {"x": 200, "y": 0}},
                "a4": {"point": {"x": 400, "y": 120}}
            }
        }
    })
}

// =============================================================================
// Single records
// =============================================================================

pub fn activity(id: &str, activity_name: &str) -> Value {
    json!({"id": id, "name": id.to_uppercase(), "activityName": activity_name})
}

pub fn activity_with(id: &str, activity_name: &str, properties: Value) -> Value {
    json!({"id": id, "name": id.to_uppercase(), "activityName": activity_name, "properties": properties})
}

pub fn link(source: &str, target: &str, label: &str) -> Value {
    json!({"sourceActivityId": source, "targetActivityId": target, "conditionExpr": label})
}

/// Wrap activities and links in the current export layout.
pub fn flow(activities: Vec<Value>, links: Vec<Value>) -> Value {
    let activities: serde_json::Map<String, Value> = activities
        .into_iter()
        .enumerate()
        .map(|(i, act)| {
            let key = act["id"].as_str().map_or_else(|| format!("k{}", i), str::to_string);
            (key, act)
        })
        .collect();
    json!({"process": {"activities": activities, "links": links}})
}
