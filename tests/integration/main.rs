//! Integration tests for ngviz
//!
//! These tests drive the facade the way an analysis layer would: symbols
//! and providers in, a renderable graph out.

use ngviz::{
    Config, Direction, Edge, Graph, IdentityResolver, Layout, Membership, Node, ProviderMeta,
    ProviderToken, Subject, SymbolKind, SymbolRef, VisualizationConfig, symbol_id,
};
use serde_json::json;
use tempfile::TempDir;

fn app_module() -> SymbolRef {
    SymbolRef::new("AppModule", "/src/app/app.module.ts")
}

fn providers() -> Vec<ProviderMeta> {
    vec![
        ProviderMeta::new(ProviderToken::reference(SymbolRef::new(
            "HttpClient",
            "/node_modules/@angular/common/http.d.ts",
        ))),
        ProviderMeta::new(ProviderToken::reference(SymbolRef::new(
            "MyService",
            "/src/app/my.service.ts",
        ))),
        ProviderMeta::new(ProviderToken::literal("AUTH_TOKEN")),
        // Unidentifiable: dropped from the graph.
        ProviderMeta::new(ProviderToken::default()),
        // Duplicate of the first provider.
        ProviderMeta::new(ProviderToken::reference(SymbolRef::new(
            "HttpClient",
            "/node_modules/@angular/common/http.d.ts",
        ))),
    ]
}

fn build_module_graph(resolver: &IdentityResolver) -> Graph<()> {
    let module = app_module();
    let mut graph = Graph::new();
    graph.add_node(resolver.symbol_node(&module, SymbolKind::Module));

    for provider in providers() {
        let Some(node) = resolver.provider_node(&provider) else {
            continue;
        };
        let edge = Edge::new(symbol_id(&module), node.id.clone()).with_direction(Direction::To);
        if graph.add_node(node) {
            graph.add_edge(edge);
        }
    }

    graph
}

#[test]
fn test_module_graph_from_providers() {
    let resolver = IdentityResolver::angular();
    let graph = build_module_graph(&resolver);

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edges_from("/src/app/app.module.ts#AppModule").count(), 3);

    let http = graph
        .node("/node_modules/@angular/common/http.d.ts#HttpClient")
        .unwrap();
    assert_eq!(http.label, "HttpClient");
    assert!(http.symbol_type.unwrap().angular);

    let token = graph.node("AUTH_TOKEN").unwrap();
    assert!(!token.symbol_type.unwrap().angular);

    let digraph = graph.to_digraph();
    assert_eq!(digraph.node_count(), 4);
    assert_eq!(digraph.edge_count(), 3);
}

#[test]
fn test_visualization_config_serializes_for_renderer() {
    let resolver = IdentityResolver::angular();
    let viz = VisualizationConfig {
        layout: Some(Layout::HierarchicalUDDirected),
        title: "AppModule".to_string(),
        graph: build_module_graph(&resolver),
    };

    let value = serde_json::to_value(&viz).unwrap();
    assert_eq!(value["layout"], json!(1));
    assert_eq!(value["graph"]["nodes"][0]["type"], json!({"angular": false, "type": "module"}));
    assert_eq!(value["graph"]["edges"][0]["direction"], json!(1));

    let parsed: VisualizationConfig<()> = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, viz);
}

#[test]
fn test_classification_through_facade() {
    let resolver = IdentityResolver::angular();
    let http = SymbolRef::new("HttpClient", "/node_modules/@angular/common/http.d.ts");
    let mine = SymbolRef::new("MyService", "/src/app/my.service.ts");
    let opaque = ProviderMeta::new(ProviderToken::default());

    assert_eq!(resolver.classify(Subject::from(&http)), Membership::Confirmed);
    assert_eq!(resolver.classify(Subject::from(&mine)), Membership::Denied);
    assert_eq!(resolver.classify(Subject::from(&opaque)), Membership::Unknown);
    assert_eq!(resolver.classify(Subject::Provider(None)), Membership::Denied);
}

#[test]
fn test_config_drives_resolver() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ngviz.json");
    std::fs::write(
        &path,
        r#"{"showLibs": true, "theme": "Dark", "themes": {"Dark": {}}, "frameworkPattern": "node_modules/@nestjs"}"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.show_libs);

    let resolver = config.resolver().unwrap();
    let nest = SymbolRef::new("Injectable", "/node_modules/@nestjs/common/index.d.ts");
    let angular = SymbolRef::new("Injectable", "/node_modules/@angular/core/index.d.ts");
    assert!(resolver.classify_symbol(&nest).is_confirmed());
    assert!(!resolver.classify_symbol(&angular).is_confirmed());

    let node: Node<()> = resolver.symbol_node(&nest, SymbolKind::Provider);
    assert!(node.symbol_type.unwrap().angular);
}

#[test]
fn test_logging_init_once() {
    assert!(ngviz::logging::init(false).is_ok());
    assert!(ngviz::logging::init(true).is_err());
}
