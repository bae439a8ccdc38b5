//! Graphviz DOT text generation.
//!
//! [`DotExporter`] walks a validated diagram and emits DOT: clusters become
//! nested `subgraph cluster_*` blocks, nodes carry theme-derived shape and
//! fill attributes, and relations become directed or undirected edges. The
//! output is deterministic; identical diagrams produce byte-identical DOT.

use std::fmt::Write;

use log::trace;

use railmap_core::{
    identifier::Id,
    semantic::{Diagram, EdgeKind, Element, Node, Relation, Scope},
};

use crate::config::StyleConfig;
use crate::export::{Error, Exporter, theme};
use crate::structure::DiagramHierarchy;

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub(crate) fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for DOT labels.
pub(crate) fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// An indent-tracking DOT writer for constructing valid DOT output.
struct DotWriter {
    output: String,
    indent: usize,
}

impl DotWriter {
    /// Create a new DOT digraph with the given name.
    fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a node attribute default.
    fn node_defaults(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "node [{attrs}];");
        self
    }

    /// Add a blank line for readability.
    fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with full attributes.
    fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id}[");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
        self.output.push_str("];\n");
        self
    }

    /// Add an edge.
    fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} -> {to};");
        self
    }

    /// Add an edge with attributes.
    fn edge_with_attrs(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} -> {to} [");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
        self.output.push_str("];\n");
        self
    }

    /// Start a subgraph cluster.
    fn start_cluster(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph cluster_{} {{", sanitize_id(id));
        self.indent += 1;
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "label=\"{}\";", escape_label(label));
        self
    }

    /// End the current subgraph cluster.
    fn end_cluster(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// DOT export backend.
///
/// Converts a validated [`DiagramHierarchy`] into DOT text, applying the
/// theme and any style overrides from configuration.
pub(crate) struct DotExporter<'c> {
    style: &'c StyleConfig,
}

impl<'c> DotExporter<'c> {
    /// Create a DOT exporter with the given style configuration.
    pub(crate) fn new(style: &'c StyleConfig) -> Self {
        Self { style }
    }

    fn write_graph_attributes(
        &self,
        writer: &mut DotWriter,
        diagram: &Diagram,
    ) -> Result<(), Error> {
        let attributes = diagram.attributes();

        writer.attr("label", diagram.title());
        writer.attr("labelloc", "t");
        writer.attr("fontsize", &format!("{}", attributes.font_size()));
        writer.attr("pad", &format!("{}", attributes.pad()));
        writer.attr("rankdir", &diagram.direction().to_string());

        // Config override wins over the diagram's own background
        let background = self
            .style
            .background_color()
            .map_err(Error::Render)?
            .or(diagram.background_color());
        if let Some(background) = background {
            writer.attr("bgcolor", &background.to_string());
        }

        Ok(())
    }

    fn write_node(&self, writer: &mut DotWriter, node: &Node) {
        trace!(node = node.id().to_string(); "Writing node");
        writer.node_full(
            &sanitize_id(&node.id().to_string()),
            &[
                ("label", node.label()),
                ("shape", theme::shape_for_kind(node.kind())),
                ("fillcolor", theme::fill_for_kind(node.kind())),
                ("fontcolor", theme::font_for_kind(node.kind())),
            ],
        );
    }

    fn write_relation(&self, writer: &mut DotWriter, relation: &Relation) {
        let source = sanitize_id(&relation.source().to_string());
        let target = sanitize_id(&relation.target().to_string());

        let mut attrs: Vec<(&str, &str)> = Vec::new();
        if relation.kind() == EdgeKind::Undirected {
            attrs.push(("dir", "none"));
        }
        if let Some(label) = relation.label() {
            attrs.push(("label", label));
        }

        if attrs.is_empty() {
            writer.edge(&source, &target);
        } else {
            writer.edge_with_attrs(&source, &target, &attrs);
        }
    }

    fn write_scope(&self, writer: &mut DotWriter, scope: &Scope, parent: Option<Id>) {
        for element in scope.elements() {
            match element {
                Element::Node(node) => self.write_node(writer, node),
                Element::Cluster(cluster) => {
                    // Nest the cluster id under its parent so repeated short
                    // names stay unique in the DOT output.
                    let cluster_id = match parent {
                        Some(parent_id) => parent_id.nested(cluster.id()),
                        None => cluster.id(),
                    };
                    writer.start_cluster(&cluster_id.to_string(), cluster.name());
                    self.write_scope(writer, cluster.scope(), Some(cluster_id));
                    writer.end_cluster();
                }
                Element::Relation(relation) => self.write_relation(writer, relation),
            }
        }
    }
}

impl Exporter for DotExporter<'_> {
    fn export_hierarchy(&mut self, hierarchy: &DiagramHierarchy) -> Result<String, Error> {
        let diagram = hierarchy.diagram();

        let mut writer = DotWriter::new(&sanitize_id(diagram.title()));
        self.write_graph_attributes(&mut writer, diagram)?;
        writer.blank();
        writer.node_defaults("style=filled");
        writer.blank();

        self.write_scope(&mut writer, diagram.scope(), None);

        Ok(writer.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use railmap_core::semantic::{Cluster, GraphAttributes, NodeKind, RankDirection};

    fn export(diagram: &Diagram) -> String {
        let style = StyleConfig::default();
        let hierarchy = DiagramHierarchy::from_diagram(diagram).expect("valid diagram");
        let mut exporter = DotExporter::new(&style);
        exporter.export_hierarchy(&hierarchy).expect("export")
    }

    fn small_diagram() -> Diagram {
        Diagram::new(
            "Small Test",
            RankDirection::TopBottom,
            GraphAttributes::new(28.0, 0.75),
            None,
            Scope::new(vec![
                Element::Node(Node::new("cdn", NodeKind::CloudFront, "CloudFront CDN")),
                Element::Cluster(Cluster::new(
                    "vpc",
                    "Virtual Private Cloud (VPC)",
                    Scope::new(vec![Element::Node(Node::new(
                        "igw",
                        NodeKind::InternetGateway,
                        "Internet Gateway",
                    ))]),
                )),
                Element::Relation(Relation::directed("cdn", "igw")),
                Element::Relation(
                    Relation::undirected("igw", "cdn").with_label("association"),
                ),
            ]),
        )
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("vpc::public_zone"), "vpc__public_zone");
        assert_eq!(sanitize_id("plain"), "plain");
    }

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("a \"quoted\" label"), "a \\\"quoted\\\" label");
        assert_eq!(escape_label("line\nbreak"), "line\\nbreak");
    }

    #[test]
    fn test_export_structure() {
        let diagram = small_diagram();
        let dot = export(&diagram);

        assert!(dot.starts_with("digraph "));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("label=\"Small Test\";"));
        assert!(dot.contains("fontsize=\"28\";"));
        assert!(dot.contains("pad=\"0.75\";"));
        assert!(dot.contains("rankdir=\"TB\";"));
        assert!(dot.contains("subgraph cluster_vpc {"));
        assert!(dot.contains("label=\"Virtual Private Cloud (VPC)\";"));
        assert!(dot.contains("cdn -> igw;"));
        assert!(dot.contains("igw -> cdn [dir=\"none\", label=\"association\"];"));
    }

    #[test]
    fn test_export_theme_attributes() {
        let diagram = small_diagram();
        let dot = export(&diagram);

        assert!(dot.contains("cdn[label=\"CloudFront CDN\", shape=\"box\", fillcolor=\"#8c4fff\", fontcolor=\"white\"];"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let diagram = small_diagram();
        assert_eq!(export(&diagram), export(&diagram));
    }

    #[test]
    fn test_background_color_from_diagram() {
        let diagram = Diagram::new(
            "Bg Test",
            RankDirection::TopBottom,
            GraphAttributes::default(),
            Some(railmap_core::color::Color::new("white").unwrap()),
            Scope::new(vec![Element::Node(Node::new(
                "only",
                NodeKind::General,
                "Only",
            ))]),
        );
        let dot = export(&diagram);
        assert!(dot.contains("bgcolor=\"white\";"));
    }
}
