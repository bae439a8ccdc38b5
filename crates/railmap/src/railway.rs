//! The railway-reservation AWS migration architecture diagram.
//!
//! This module is a literal, declarative transcription of one fixed topology:
//! end users reaching a CloudFront edge, WAF/Shield in front of an API
//! gateway and load balancer, a VPC with public DMZ and private application
//! and data tiers, serverless functions, integration services, operations
//! tooling, identity, and disaster recovery. Nothing here executes; the
//! diagram is built once and handed to the rendering pipeline.

use railmap_core::{
    color::Color,
    semantic::{
        Cluster, Diagram, Element, GraphAttributes, Node, NodeKind, RankDirection, Relation, Scope,
    },
};

fn node(id: &str, kind: NodeKind, label: &str) -> Element {
    Element::Node(Node::new(id, kind, label))
}

fn cluster(id: &str, name: &str, elements: Vec<Element>) -> Element {
    Element::Cluster(Cluster::new(id, name, Scope::new(elements)))
}

fn flow(source: &str, target: &str) -> Element {
    Element::Relation(Relation::directed(source, target))
}

fn link(source: &str, target: &str) -> Element {
    Element::Relation(Relation::undirected(source, target))
}

/// Build the complete migration architecture diagram.
///
/// The construction is a pure function of the program text: every call
/// returns an identical diagram with 41 nodes, 13 clusters, and 66 relations.
pub fn migration_architecture() -> Diagram {
    let mut elements = vec![
        // End users
        node("user_web", NodeKind::Users, "Web Users"),
        node("user_mobile", NodeKind::MobileClient, "Mobile App Users"),
        node("user_agent", NodeKind::User, "Agents & Operators"),
        // Global edge and CDN
        node("cdn", NodeKind::CloudFront, "CloudFront CDN"),
        // API gateway and load balancer
        node("api", NodeKind::ApiGateway, "API Gateway"),
        node("alb", NodeKind::LoadBalancer, "Application Load Balancer"),
        // Security at the edge
        node("edge_security", NodeKind::Shield, "AWS Shield"),
        node("waf", NodeKind::Waf, "Web Application Firewall"),
        // VPC infrastructure
        cluster(
            "vpc",
            "Virtual Private Cloud (VPC)",
            vec![
                node("igw", NodeKind::InternetGateway, "Internet Gateway"),
                cluster(
                    "public_zone",
                    "Public Zone - DMZ",
                    vec![
                        node("public_subnets", NodeKind::PublicSubnet, "Public Subnets"),
                        node("nat", NodeKind::NatGateway, "NAT Gateway"),
                        node("bastion", NodeKind::Ec2, "Bastion Host"),
                    ],
                ),
                cluster(
                    "app_tier",
                    "Private Zone - Application Tier",
                    vec![
                        node(
                            "private_app_subnets",
                            NodeKind::PrivateSubnet,
                            "Private App Subnets",
                        ),
                        cluster(
                            "asg",
                            "Auto Scaling Groups",
                            vec![
                                node("web_asg", NodeKind::AutoScalingGroup, "Web Servers"),
                                node("api_asg", NodeKind::AutoScalingGroup, "API Servers"),
                                node("booking_asg", NodeKind::AutoScalingGroup, "Booking Servers"),
                                node("tatkal_asg", NodeKind::AutoScalingGroup, "Tatkal Servers"),
                            ],
                        ),
                        cluster(
                            "serverless",
                            "Serverless Functions",
                            vec![
                                node("notification_lambda", NodeKind::Lambda, "Notifications"),
                                node("report_lambda", NodeKind::Lambda, "Reports Generation"),
                                node("payment_lambda", NodeKind::Lambda, "Payment Processing"),
                                node("analytics_lambda", NodeKind::Lambda, "Analytics"),
                            ],
                        ),
                    ],
                ),
                cluster(
                    "data_tier",
                    "Private Zone - Data Tier",
                    vec![
                        node(
                            "private_data_subnets",
                            NodeKind::PrivateSubnet,
                            "Private Data Subnets",
                        ),
                        cluster(
                            "database_layer",
                            "Database Layer",
                            vec![
                                cluster(
                                    "rds_multi_az",
                                    "RDS Multi-AZ",
                                    vec![
                                        node("primary_db", NodeKind::RdsInstance, "Primary"),
                                        node("standby_db", NodeKind::RdsStandby, "Standby"),
                                    ],
                                ),
                                node("ddb_ticket", NodeKind::DynamoDb, "Ticket Status"),
                                node("ddb_trains", NodeKind::DynamoDb, "Train Schedule"),
                                node("cache", NodeKind::ElastiCache, "Session Cache"),
                            ],
                        ),
                        cluster(
                            "storage_layer",
                            "Storage Layer",
                            vec![
                                node("ebs", NodeKind::Ebs, "EBS Volumes"),
                                node("s3_data", NodeKind::S3, "Data Lake"),
                                node("s3_logs", NodeKind::S3, "Logs & Audit"),
                                node("glacier", NodeKind::Glacier, "Long-term Archive"),
                            ],
                        ),
                    ],
                ),
            ],
        ),
        // Integration services
        cluster(
            "integration",
            "Integration Services",
            vec![
                node("queue", NodeKind::Sqs, "Message Queue"),
                node("notification", NodeKind::Sns, "Notifications"),
                node("events", NodeKind::EventBridge, "Event Bus"),
            ],
        ),
        // Management and governance
        cluster(
            "operations",
            "Operations & Governance",
            vec![
                node("monitoring", NodeKind::CloudWatch, "CloudWatch"),
                node("audit", NodeKind::CloudTrail, "CloudTrail"),
                node("compliance", NodeKind::ConfigService, "Config"),
                node("backup", NodeKind::Backup, "AWS Backup"),
            ],
        ),
        // Identity and access
        cluster(
            "identity_security",
            "Identity & Security",
            vec![
                node("identity", NodeKind::Iam, "IAM"),
                node("auth", NodeKind::Cognito, "User Authentication"),
            ],
        ),
        // Disaster recovery
        cluster(
            "disaster_recovery",
            "Disaster Recovery",
            vec![node("dr_mechanism", NodeKind::General, "DR Strategy")],
        ),
    ];

    elements.extend([
        // User access layer
        flow("user_web", "cdn"),
        flow("user_mobile", "cdn"),
        flow("user_agent", "cdn"),
        // Edge security
        flow("cdn", "edge_security"),
        flow("edge_security", "waf"),
        flow("waf", "api"),
        flow("waf", "alb"),
        // API gateway and load balancer into the VPC
        flow("api", "igw"),
        flow("alb", "igw"),
        flow("igw", "public_subnets"),
        // Public to private routing
        flow("public_subnets", "nat"),
        flow("public_subnets", "bastion"),
        flow("nat", "private_app_subnets"),
        // Application tier components
        flow("alb", "web_asg"),
        flow("api", "api_asg"),
        flow("api", "booking_asg"),
        flow("api", "tatkal_asg"),
        // Application servers to serverless functions
        flow("api_asg", "notification_lambda"),
        flow("api_asg", "report_lambda"),
        flow("booking_asg", "payment_lambda"),
        // Application servers to integration services
        flow("web_asg", "queue"),
        flow("api_asg", "queue"),
        flow("booking_asg", "queue"),
        flow("tatkal_asg", "queue"),
        flow("queue", "notification_lambda"),
        flow("queue", "analytics_lambda"),
        flow("notification_lambda", "notification"),
        flow("events", "analytics_lambda"),
        // Application servers to databases
        flow("web_asg", "cache"),
        flow("api_asg", "cache"),
        flow("booking_asg", "primary_db"),
        flow("tatkal_asg", "ddb_ticket"),
        // Database replication
        flow("primary_db", "standby_db"),
        flow("primary_db", "s3_data"),
        link("ddb_ticket", "ddb_trains"),
        // Storage connections
        flow("primary_db", "ebs"),
        flow("standby_db", "ebs"),
        flow("s3_data", "glacier"),
        flow("s3_logs", "glacier"),
        // Monitoring
        flow("web_asg", "monitoring"),
        flow("api_asg", "monitoring"),
        flow("booking_asg", "monitoring"),
        flow("tatkal_asg", "monitoring"),
        flow("primary_db", "monitoring"),
        flow("ddb_ticket", "monitoring"),
        flow("monitoring", "notification"),
        // Backup and disaster recovery
        flow("primary_db", "backup"),
        flow("standby_db", "backup"),
        flow("ddb_ticket", "backup"),
        flow("ddb_trains", "backup"),
        flow("s3_data", "backup"),
        flow("backup", "s3_logs"),
        flow("backup", "glacier"),
        flow("backup", "dr_mechanism"),
        Element::Relation(
            Relation::undirected("dr_mechanism", "standby_db")
                .with_label("Cross-Region Replication"),
        ),
        // Security and compliance
        flow("identity", "web_asg"),
        flow("identity", "api_asg"),
        flow("identity", "booking_asg"),
        flow("identity", "tatkal_asg"),
        flow("auth", "api"),
        flow("web_asg", "audit"),
        flow("api_asg", "audit"),
        flow("booking_asg", "audit"),
        flow("primary_db", "audit"),
        flow("audit", "s3_logs"),
        flow("audit", "compliance"),
    ]);

    Diagram::new(
        "Indian Railways System - AWS Migration Architecture (Cost-Optimized)",
        RankDirection::TopBottom,
        GraphAttributes::new(28.0, 0.75),
        Some(Color::default()),
        Scope::new(elements),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use railmap_core::identifier::Id;

    use crate::structure::DiagramHierarchy;

    #[test]
    fn test_topology_counts() {
        let diagram = migration_architecture();
        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("topology is valid");

        assert_eq!(hierarchy.node_count(), 41);
        assert_eq!(hierarchy.edge_count(), 66);
        assert_eq!(hierarchy.cluster_count(), 13);
    }

    #[test]
    fn test_every_relation_endpoint_is_declared() {
        // from_diagram rejects dangling endpoints, so a successful build is
        // the property; spot-check a few connections on top.
        let diagram = migration_architecture();
        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("topology is valid");

        for endpoint in ["cdn", "waf", "primary_db", "dr_mechanism", "compliance"] {
            assert!(hierarchy.contains_node(Id::new(endpoint)), "{endpoint} missing");
        }
    }

    #[test]
    fn test_roots_match_passive_entry_points() {
        let diagram = migration_architecture();
        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("topology is valid");

        let mut roots: Vec<String> = hierarchy.roots().map(|n| n.id().to_string()).collect();
        roots.sort();
        // End users, the event bus, IAM, the authentication pool, and the
        // passive subnet containers have no incoming relation.
        assert_eq!(
            roots,
            vec![
                "auth",
                "events",
                "identity",
                "private_data_subnets",
                "user_agent",
                "user_mobile",
                "user_web",
            ]
        );
    }

    #[test]
    fn test_undirected_relations() {
        let diagram = migration_architecture();
        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("topology is valid");

        let undirected: Vec<_> = hierarchy
            .relations()
            .filter(|relation| {
                relation.kind() == railmap_core::semantic::EdgeKind::Undirected
            })
            .collect();
        assert_eq!(undirected.len(), 2);
        assert_eq!(undirected[1].label(), Some("Cross-Region Replication"));
    }

    #[test]
    fn test_construction_is_idempotent() {
        let first = migration_architecture();
        let second = migration_architecture();

        // The diagram is a pure function of the program text.
        assert_eq!(first.title(), second.title());
        assert_eq!(
            format!("{:?}", first.scope()),
            format!("{:?}", second.scope())
        );
    }
}
