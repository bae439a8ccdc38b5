//! Diagram structure building and validation.
//!
//! This module flattens the semantic scope tree into an internal graph and
//! checks the structural invariants of the model before anything is exported:
//!
//! - every node id is declared exactly once,
//! - every relation endpoint references a declared node.
//!
//! The cluster tree itself is acyclic by construction (clusters own their
//! content scopes), so no cycle check is needed there.

mod graph_base;

use log::debug;
use thiserror::Error;

use railmap_core::{
    identifier::Id,
    semantic::{Diagram, Element, Node, Relation, Scope},
};

use graph_base::GraphInternal;

/// Structural validation failures.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("duplicate node id `{0}`")]
    DuplicateNode(Id),

    #[error("relation `{source_id}` -> `{target}` references undeclared node `{missing}`")]
    DanglingEndpoint {
        source_id: Id,
        target: Id,
        missing: Id,
    },
}

/// A validated, flattened view of a diagram.
///
/// Holds the original diagram (whose scope tree the exporter walks) together
/// with a flat graph of all nodes and relations for queries and accounting.
#[derive(Debug)]
pub(crate) struct DiagramHierarchy<'d> {
    diagram: &'d Diagram,
    graph: GraphInternal<&'d Node, &'d Relation>,
    cluster_count: usize,
}

impl<'d> DiagramHierarchy<'d> {
    /// Flatten and validate a diagram.
    ///
    /// Walks the scope tree in declaration order collecting nodes, clusters,
    /// and relations, then checks every relation endpoint against the node
    /// set.
    pub(crate) fn from_diagram(diagram: &'d Diagram) -> Result<Self, StructureError> {
        let mut graph = GraphInternal::new();
        let mut cluster_count = 0;
        let mut relations = Vec::new();

        collect_scope(diagram.scope(), &mut graph, &mut cluster_count, &mut relations)?;

        for relation in relations {
            for endpoint in [relation.source(), relation.target()] {
                if !graph.contains_node(endpoint) {
                    return Err(StructureError::DanglingEndpoint {
                        source_id: relation.source(),
                        target: relation.target(),
                        missing: endpoint,
                    });
                }
            }
            graph.add_edge(relation.source(), relation.target(), relation);
        }

        debug!(
            nodes = graph.nodes_count(),
            edges = graph.edges_count(),
            clusters = cluster_count;
            "Diagram structure validated"
        );

        Ok(Self {
            diagram,
            graph,
            cluster_count,
        })
    }

    /// The diagram this hierarchy was built from.
    pub(crate) fn diagram(&self) -> &'d Diagram {
        self.diagram
    }

    /// Total number of nodes declared anywhere in the diagram.
    pub(crate) fn node_count(&self) -> usize {
        self.graph.nodes_count()
    }

    /// Total number of relations declared anywhere in the diagram.
    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edges_count()
    }

    /// Total number of clusters in the cluster tree.
    pub(crate) fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Checks whether a node with the given id is declared.
    pub(crate) fn contains_node(&self, id: Id) -> bool {
        self.graph.contains_node(id)
    }

    /// Iterates all nodes in declaration order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = &'d Node> {
        self.graph.nodes()
    }

    /// Iterates all relations in declaration order.
    pub(crate) fn relations(&self) -> impl Iterator<Item = &'d Relation> {
        self.graph.edges()
    }

    /// Iterates nodes with no incoming relation.
    pub(crate) fn roots(&self) -> impl Iterator<Item = &'d Node> {
        self.graph.roots()
    }
}

/// Recursively collects the contents of a scope.
fn collect_scope<'d>(
    scope: &'d Scope,
    graph: &mut GraphInternal<&'d Node, &'d Relation>,
    cluster_count: &mut usize,
    relations: &mut Vec<&'d Relation>,
) -> Result<(), StructureError> {
    for element in scope.elements() {
        match element {
            Element::Node(node) => {
                if graph.add_node(node.id(), node).is_some() {
                    return Err(StructureError::DuplicateNode(node.id()));
                }
            }
            Element::Cluster(cluster) => {
                *cluster_count += 1;
                collect_scope(cluster.scope(), graph, cluster_count, relations)?;
            }
            Element::Relation(relation) => {
                relations.push(relation);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use railmap_core::semantic::{
        Cluster, Diagram, GraphAttributes, NodeKind, RankDirection, Relation,
    };

    fn diagram_from(elements: Vec<Element>) -> Diagram {
        Diagram::new(
            "Test",
            RankDirection::TopBottom,
            GraphAttributes::default(),
            None,
            Scope::new(elements),
        )
    }

    #[test]
    fn test_flattens_nested_clusters() {
        let diagram = diagram_from(vec![
            Element::Node(Node::new("cdn", NodeKind::CloudFront, "CDN")),
            Element::Cluster(Cluster::new(
                "vpc",
                "VPC",
                Scope::new(vec![
                    Element::Node(Node::new("igw", NodeKind::InternetGateway, "IGW")),
                    Element::Cluster(Cluster::new(
                        "public_zone",
                        "Public Zone",
                        Scope::new(vec![Element::Node(Node::new(
                            "nat",
                            NodeKind::NatGateway,
                            "NAT",
                        ))]),
                    )),
                ]),
            )),
            Element::Relation(Relation::directed("cdn", "igw")),
        ]);

        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("valid diagram");
        assert_eq!(hierarchy.node_count(), 3);
        assert_eq!(hierarchy.edge_count(), 1);
        assert_eq!(hierarchy.cluster_count(), 2);
        assert!(hierarchy.contains_node(Id::new("nat")));
    }

    #[test]
    fn test_nodes_in_declaration_order() {
        let diagram = diagram_from(vec![
            Element::Node(Node::new("b_node", NodeKind::General, "B")),
            Element::Node(Node::new("a_node", NodeKind::General, "A")),
        ]);

        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("valid diagram");
        let labels: Vec<&str> = hierarchy.nodes().map(|node| node.label()).collect();
        assert_eq!(labels, vec!["B", "A"]);
    }

    #[test]
    fn test_rejects_duplicate_node() {
        let diagram = diagram_from(vec![
            Element::Node(Node::new("api", NodeKind::ApiGateway, "API Gateway")),
            Element::Node(Node::new("api", NodeKind::ApiGateway, "API Gateway again")),
        ]);

        let err = DiagramHierarchy::from_diagram(&diagram).unwrap_err();
        assert!(matches!(err, StructureError::DuplicateNode(id) if id == "api"));
    }

    #[test]
    fn test_rejects_dangling_endpoint() {
        let diagram = diagram_from(vec![
            Element::Node(Node::new("waf", NodeKind::Waf, "WAF")),
            Element::Relation(Relation::directed("waf", "missing")),
        ]);

        let err = DiagramHierarchy::from_diagram(&diagram).unwrap_err();
        match err {
            StructureError::DanglingEndpoint { missing, .. } => {
                assert_eq!(missing, "missing");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_roots_have_no_incoming_relations() {
        let diagram = diagram_from(vec![
            Element::Node(Node::new("users", NodeKind::Users, "Users")),
            Element::Node(Node::new("cdn", NodeKind::CloudFront, "CDN")),
            Element::Relation(Relation::directed("users", "cdn")),
        ]);

        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("valid diagram");
        let roots: Vec<&str> = hierarchy.roots().map(|node| node.label()).collect();
        assert_eq!(roots, vec!["Users"]);
    }
}
