//! Visual theme mapping node kinds onto Graphviz attributes.
//!
//! We ship no icon bitmaps; a node's [`NodeKind`] selects a Graphviz shape
//! and a fill color following the AWS architecture-icon category palette
//! (orange compute, purple networking, red security, and so on).

use railmap_core::semantic::NodeKind;

/// Map a node kind to a Graphviz shape.
pub(super) fn shape_for_kind(kind: NodeKind) -> &'static str {
    match kind {
        // People and external clients
        NodeKind::Users | NodeKind::User | NodeKind::MobileClient => "ellipse",
        // Networking: plain boxes, subnets as containers
        NodeKind::CloudFront
        | NodeKind::ApiGateway
        | NodeKind::LoadBalancer
        | NodeKind::InternetGateway
        | NodeKind::NatGateway => "box",
        NodeKind::PublicSubnet | NodeKind::PrivateSubnet => "folder",
        // Security and identity
        NodeKind::Shield | NodeKind::Waf | NodeKind::Iam | NodeKind::Cognito => "hexagon",
        // Compute
        NodeKind::Ec2 => "box",
        NodeKind::AutoScalingGroup => "box3d",
        NodeKind::Lambda => "component",
        // Databases and caches
        NodeKind::RdsInstance
        | NodeKind::RdsStandby
        | NodeKind::DynamoDb
        | NodeKind::ElastiCache => "cylinder",
        // Storage
        NodeKind::Ebs => "box",
        NodeKind::S3 | NodeKind::Glacier => "folder",
        // Application integration
        NodeKind::Sqs | NodeKind::Sns | NodeKind::EventBridge => "parallelogram",
        // Management and governance
        NodeKind::CloudWatch
        | NodeKind::CloudTrail
        | NodeKind::ConfigService
        | NodeKind::Backup => "note",
        NodeKind::General => "box",
    }
}

/// Map a node kind to a fill color (AWS category palette).
pub(super) fn fill_for_kind(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Users | NodeKind::User | NodeKind::MobileClient => "#d4d4d4",
        NodeKind::CloudFront
        | NodeKind::ApiGateway
        | NodeKind::LoadBalancer
        | NodeKind::InternetGateway
        | NodeKind::NatGateway
        | NodeKind::PublicSubnet
        | NodeKind::PrivateSubnet => "#8c4fff",
        NodeKind::Shield | NodeKind::Waf | NodeKind::Iam | NodeKind::Cognito => "#dd344c",
        NodeKind::Ec2 | NodeKind::AutoScalingGroup | NodeKind::Lambda => "#ed7100",
        NodeKind::RdsInstance
        | NodeKind::RdsStandby
        | NodeKind::DynamoDb
        | NodeKind::ElastiCache => "#c925d1",
        NodeKind::Ebs | NodeKind::S3 | NodeKind::Glacier => "#7aa116",
        NodeKind::Sqs | NodeKind::Sns | NodeKind::EventBridge => "#e7157b",
        NodeKind::CloudWatch
        | NodeKind::CloudTrail
        | NodeKind::ConfigService
        | NodeKind::Backup => "#e7157b",
        NodeKind::General => "#232f3e",
    }
}

/// Font color that stays readable against [`fill_for_kind`].
pub(super) fn font_for_kind(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Users | NodeKind::User | NodeKind::MobileClient => "black",
        _ => "white",
    }
}
