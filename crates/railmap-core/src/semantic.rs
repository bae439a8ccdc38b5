//! Semantic model types for railmap diagrams.
//!
//! The semantic model is the fully resolved, render-ready description of a
//! diagram: a titled root [`Scope`] containing [`Node`]s, nested [`Cluster`]s,
//! and [`Relation`]s. The model is purely representational; nothing in it is
//! ever executed. It is handed to the structure and export stages for
//! validation and rendering.

mod diagram;
mod element;

pub use diagram::{Diagram, GraphAttributes, RankDirection, Scope};
pub use element::{Cluster, EdgeKind, Element, Node, NodeKind, Relation};
