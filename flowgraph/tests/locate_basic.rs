//! Integration tests for schema discovery across historical export layouts.

mod helpers;

use flowgraph::ExtractError;
use flowgraph::graph::Position;
use flowgraph::locate::locate;
use serde_json::json;

#[test]
fn locates_process_activity_map() {
    let doc = helpers::process_doc();
    let located = locate(&doc).expect("Should locate");
    assert_eq!(located.activity_strategy, "process.activities");
    assert_eq!(located.link_strategy, Some("process.links"));
    assert_eq!(located.activities.len(), 2);
    assert_eq!(located.links.len(), 1);
    // map keys are discarded, values kept in document order
    let ids: Vec<_> = located.activities.iter().filter_map(|a| a.id()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
}

#[test]
fn flattens_nested_transitions_in_activity_order() {
    let doc = json!({
        "steps": [
            {"id": "s1", "transitions": [{"to": "s2"}, {"to": "s3"}]},
            {"id": "s2", "transitions": [{"to": "s3"}]},
            {"id": "s3"}
        ]
    });
    let located = locate(&doc).unwrap();
    assert_eq!(located.activity_strategy, "steps");
    assert_eq!(located.link_strategy, Some("activities[].transitions"));
    let pairs: Vec<_> = located
        .links
        .iter()
        .map(|l| (l.source().unwrap(), l.target().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("s1".to_string(), "s2".to_string()),
            ("s1".to_string(), "s3".to_string()),
            ("s2".to_string(), "s3".to_string()),
        ]
    );
}

#[test]
fn nested_connections_and_links_are_found() {
    let doc = json!({"nodes": [{"id": "n1", "connections": [{"target": "n2"}]}, {"id": "n2"}]});
    let located = locate(&doc).unwrap();
    assert_eq!(located.activity_strategy, "nodes");
    assert_eq!(located.link_strategy, Some("activities[].connections"));

    let doc = json!({"flow": {"steps": [{"id": "f1", "links": ["f2"]}, {"id": "f2"}]}});
    let located = locate(&doc).unwrap();
    assert_eq!(located.activity_strategy, "flow.steps");
    assert_eq!(located.link_strategy, Some("activities[].links"));
    assert_eq!(located.links[0].target().as_deref(), Some("f2"));
}

#[test]
fn graph_nodes_with_root_edges() {
    let doc = json!({
        "graph": {"nodes": [{"id": "g1"}, {"id": "g2"}], "edges": [{"source": "g1", "target": "g2"}]}
    });
    let located = locate(&doc).unwrap();
    assert_eq!(located.activity_strategy, "graph.nodes");
    assert_eq!(located.link_strategy, Some("graph.edges"));
}

#[test]
fn first_non_empty_candidate_wins() {
    let doc = json!({"steps": [], "nodes": [{"id": "n1"}]});
    let located = locate(&doc).unwrap();
    assert_eq!(located.activity_strategy, "nodes");
}

#[test]
fn empty_but_present_collection_is_located() {
    let doc = helpers::empty_process_doc();
    let located = locate(&doc).expect("Empty flow is still a recognized schema");
    assert!(located.activities.is_empty());
    assert!(located.links.is_empty());
    assert_eq!(located.link_strategy, None);
}

#[test]
fn unknown_shapes_are_not_recognized() {
    for doc in [json!({}), json!({"process": {}}), json!({"steps": "nope"}), json!(42)] {
        let err = locate(&doc).unwrap_err();
        assert_eq!(err, ExtractError::SchemaNotRecognized, "doc: {}", doc);
    }
}

#[test]
fn root_array_of_activities() {
    let doc = json!([{"id": "r1"}, {"id": "r2"}]);
    let located = locate(&doc).unwrap();
    assert_eq!(located.activity_strategy, "[]");
    assert_eq!(located.activities.len(), 2);
}

#[test]
fn layout_hints_are_independent_of_activities() {
    let doc = helpers::main_menu_doc();
    let located = locate(&doc).unwrap();
    assert_eq!(located.layout.len(), 3);
    assert_eq!(located.layout["a4"], Position::new(400.0, 120.0));
    assert!(!located.layout.contains_key("a3"));

    let doc = helpers::steps_doc();
    let located = locate(&doc).unwrap();
    assert!(located.layout.is_empty());
}
