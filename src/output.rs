use crate::graph::RandomGraph;
use crate::spanning_tree::SpanningTree;
use dot::{Edges, GraphWalk, Labeller, Nodes};

/// Returns a graph in DOT format.
///
/// Nodes carry vertex labels, edges carry weights rounded to 3 decimals.
///
/// Intended to be used with `neato`.
pub fn draw_graph(graph: &RandomGraph) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for v in graph.vertices() {
        output.push_str(&format!("  {} [label=\"{}\"];\n", v, v));
    }

    for u in graph.vertices() {
        for edge in graph.edges(u).iter().filter(|e| u < e.target) {
            output.push_str(&format!(
                "  {} -- {} [label=\"{:.3}\"];\n",
                u, edge.target, edge.weight
            ));
        }
    }

    output.push_str("}\n");
    output
}

type Node = usize;

#[derive(Debug, Clone)]
struct TreeEdge {
    parent: Node,
    child: Node,
    cost: f64,
}

struct TreeView<'a> {
    tree: &'a SpanningTree,
    nodes: Vec<Node>,
    edges: Vec<TreeEdge>,
}

impl<'a> Labeller<'a, Node, TreeEdge> for TreeView<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("MST").expect("constant id is valid")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("generated id is valid")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let node = self.tree.node(*n);
        if node.parent.is_none() {
            dot::LabelText::label(format!("{} (root)", node.label))
        } else {
            dot::LabelText::label(node.label.to_string())
        }
    }

    fn edge_label(&self, e: &TreeEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{:.3}", e.cost))
    }
}

impl<'a> GraphWalk<'a, Node, TreeEdge> for TreeView<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, TreeEdge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &TreeEdge) -> Node {
        e.parent
    }

    fn target(&self, e: &TreeEdge) -> Node {
        e.child
    }
}

/// Returns a spanning tree in DOT format, edges pointing away from the root.
///
/// Use returned string with `dot` not `neato`.
pub fn draw_spanning_tree(tree: &SpanningTree) -> String {
    let view = TreeView {
        tree,
        nodes: (0..tree.len()).collect(),
        edges: tree
            .nodes()
            .iter()
            .enumerate()
            .filter_map(|(child, node)| {
                node.parent.map(|parent| TreeEdge {
                    parent,
                    child,
                    cost: node.cost,
                })
            })
            .collect(),
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&view, &mut buffer).expect("writing to memory should not fail");
    String::from_utf8_lossy(&buffer.into_inner()).into_owned()
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
