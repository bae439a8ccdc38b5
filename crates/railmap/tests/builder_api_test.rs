//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and that the fixed railway
//! topology survives the pipeline intact.

use railmap::{DiagramBuilder, config::AppConfig, railway, semantic};

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_export_railway_diagram() {
    let diagram = railway::migration_architecture();
    let builder = DiagramBuilder::default();

    let dot = builder.to_dot(&diagram).expect("Failed to export diagram");

    assert!(dot.starts_with("digraph "), "Output should be a DOT digraph");
    assert!(
        dot.contains("Indian Railways System - AWS Migration Architecture (Cost-Optimized)"),
        "Output should carry the diagram title"
    );
}

#[test]
fn test_exported_topology_is_complete() {
    let diagram = railway::migration_architecture();
    let builder = DiagramBuilder::default();
    let dot = builder.to_dot(&diagram).expect("Failed to export diagram");

    // One edge statement per declared relation
    assert_eq!(dot.matches(" -> ").count(), 66);
    // One subgraph per declared cluster
    assert_eq!(dot.matches("subgraph cluster_").count(), 13);
    // Both associations render without arrowheads
    assert_eq!(dot.matches("dir=\"none\"").count(), 2);
    assert!(dot.contains("label=\"Cross-Region Replication\""));
}

#[test]
fn test_export_is_idempotent() {
    let builder = DiagramBuilder::default();

    let dot1 = builder
        .to_dot(&railway::migration_architecture())
        .expect("Failed to export first build");
    let dot2 = builder
        .to_dot(&railway::migration_architecture())
        .expect("Failed to export second build");

    assert_eq!(dot1, dot2, "Two builds must produce identical DOT");
}

#[test]
fn test_builder_with_config() {
    let diagram = railway::migration_architecture();
    let config = AppConfig::default();

    let builder = DiagramBuilder::new(config);
    let result = builder.to_dot(&diagram);
    assert!(result.is_ok(), "Export with config should succeed: {:?}", result.err());
}

#[test]
fn test_dangling_relation_returns_error() {
    use semantic::{
        Diagram, Element, GraphAttributes, Node, NodeKind, RankDirection, Relation, Scope,
    };

    let diagram = Diagram::new(
        "Broken",
        RankDirection::TopBottom,
        GraphAttributes::default(),
        None,
        Scope::new(vec![
            Element::Node(Node::new("only_node", NodeKind::General, "Only")),
            Element::Relation(Relation::directed("only_node", "never_declared")),
        ]),
    );

    let builder = DiagramBuilder::default();
    let result = builder.to_dot(&diagram);
    assert!(result.is_err(), "Should return error for dangling endpoint");
}

#[test]
fn test_default_output_name_derives_from_title() {
    let diagram = railway::migration_architecture();
    let builder = DiagramBuilder::default();

    assert_eq!(
        builder.default_output_name(&diagram),
        "indian_railways_system_-_aws_migration_architecture_cost-optimized.png"
    );
}
