//! Diagram element types for the semantic model.

use std::fmt;

use crate::{identifier::Id, semantic::diagram::Scope};

/// Visual category of a diagram node.
///
/// The kind selects how a node is drawn (shape and fill in the exporter's
/// theme). The set is closed: it covers exactly the cloud resource categories
/// that appear in the railway architecture diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // End users and clients
    Users,
    User,
    MobileClient,
    // Networking and content delivery
    CloudFront,
    ApiGateway,
    LoadBalancer,
    InternetGateway,
    NatGateway,
    PublicSubnet,
    PrivateSubnet,
    // Security and identity
    Shield,
    Waf,
    Iam,
    Cognito,
    // Compute
    Ec2,
    AutoScalingGroup,
    Lambda,
    // Databases and caching
    RdsInstance,
    RdsStandby,
    DynamoDb,
    ElastiCache,
    // Storage
    Ebs,
    S3,
    Glacier,
    // Application integration
    Sqs,
    Sns,
    EventBridge,
    // Management and governance
    CloudWatch,
    CloudTrail,
    ConfigService,
    Backup,
    // Everything else
    General,
}

/// A diagram node: one labeled cloud resource.
///
/// Nodes are created once and never mutated. The id is used by relations to
/// reference the node; the label is the free-text caption drawn under the
/// icon.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    kind: NodeKind,
    label: String,
}

impl Node {
    /// Create a new Node.
    pub fn new(id: impl Into<Id>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the node's visual category.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Get the node's caption.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A named visual grouping of nodes and sub-clusters.
///
/// Clusters own their content scope, so the cluster tree is acyclic by
/// construction and every element has exactly one parent.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: Id,
    name: String,
    scope: Scope,
}

impl Cluster {
    /// Create a new Cluster with its id, display name, and content scope.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, scope: Scope) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scope,
        }
    }

    /// Get the cluster identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the cluster's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the cluster's content scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// How a relation is drawn between its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// An arrow from source to target
    Directed,
    /// A plain association line with no arrowheads
    Undirected,
}

/// A relation (edge) between two nodes, carrying direction and an optional label.
///
/// Relations are drawn as lines or arrows between node icons. They have no
/// behavioral meaning.
#[derive(Debug, Clone)]
pub struct Relation {
    source: Id,
    target: Id,
    kind: EdgeKind,
    label: Option<String>,
}

impl Relation {
    /// Create a new Relation between two node ids.
    pub fn new(
        source: impl Into<Id>,
        target: impl Into<Id>,
        kind: EdgeKind,
        label: Option<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
            label,
        }
    }

    /// Create a directed relation with no label.
    pub fn directed(source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self::new(source, target, EdgeKind::Directed, None)
    }

    /// Create an undirected association with no label.
    pub fn undirected(source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self::new(source, target, EdgeKind::Undirected, None)
    }

    /// Attach a text label to this relation.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the source node id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get how this relation is drawn.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Get the relation's text label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Top-level element within a scope.
#[derive(Debug, Clone)]
pub enum Element {
    /// A diagram node
    Node(Node),
    /// A nested cluster
    Cluster(Cluster),
    /// A relation between nodes
    Relation(Relation),
}
