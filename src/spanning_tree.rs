use hashbrown::HashMap;

/// Node of a [`SpanningTree`].
#[derive(Clone, PartialEq, Debug)]
pub struct TreeNode {
    /// Label of the graph vertex this node stands for.
    pub label: usize,
    /// Weight of the edge to the parent, 0 for the root.
    pub cost: f64,
    /// Arena index of the parent, `None` for the root.
    pub parent: Option<usize>,
    /// Arena indices of the children, in insertion order.
    pub children: Vec<usize>,
}

/// Rooted tree grown one vertex at a time.
///
/// Nodes live in an arena and refer to each other by index; the root is at
/// index 0 and every node is stored after its parent.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    nodes: Vec<TreeNode>,
    label_to_node: HashMap<usize, usize>,
}

impl SpanningTree {
    pub fn new(root_label: usize) -> Self {
        let mut label_to_node = HashMap::new();
        label_to_node.insert(root_label, 0);
        Self {
            nodes: vec![TreeNode {
                label: root_label,
                cost: 0.0,
                parent: None,
                children: Vec::new(),
            }],
            label_to_node,
        }
    }

    /// Hangs `child_label` below `parent_label` with the given edge cost.
    /// Returns the arena index of the new node.
    ///
    /// `parent_label` must already be in the tree and `child_label` must not.
    pub(crate) fn insert(&mut self, parent_label: usize, child_label: usize, cost: f64) -> usize {
        debug_assert!(!self.label_to_node.contains_key(&child_label));

        let parent = self.label_to_node[&parent_label];
        let idx = self.nodes.len();
        self.nodes.push(TreeNode {
            label: child_label,
            cost,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        self.label_to_node.insert(child_label, idx);

        idx
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Number of nodes. A tree always holds at least its root.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, idx: usize) -> &TreeNode {
        &self.nodes[idx]
    }

    /// Nodes in insertion order, root first.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn contains(&self, label: usize) -> bool {
        self.label_to_node.contains_key(&label)
    }

    pub fn node_for_label(&self, label: usize) -> Option<&TreeNode> {
        self.label_to_node.get(&label).map(|&idx| &self.nodes[idx])
    }

    /// Label of the parent of `label`, `None` for the root or an unknown label.
    pub fn parent_of(&self, label: usize) -> Option<usize> {
        let node = self.node_for_label(label)?;
        node.parent.map(|p| self.nodes[p].label)
    }

    /// Labels of the children of `label`, in insertion order.
    pub fn children_of(&self, label: usize) -> Vec<usize> {
        self.node_for_label(label)
            .map(|node| node.children.iter().map(|&c| self.nodes[c].label).collect())
            .unwrap_or_default()
    }

    /// Tree edges as `(parent label, child label, cost)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.parent.map(|p| (self.nodes[p].label, node.label, node.cost)))
    }

    /// Sum of all edge costs.
    pub fn total_cost(&self) -> f64 {
        self.nodes.iter().map(|node| node.cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SpanningTree {
        //      4
        //    /   \
        //   1     7
        //   |
        //   2
        let mut tree = SpanningTree::new(4);
        tree.insert(4, 1, 0.5);
        tree.insert(4, 7, 0.25);
        tree.insert(1, 2, 0.125);
        tree
    }

    #[test]
    fn test_single_node() {
        let tree = SpanningTree::new(3);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().label, 3);
        assert_eq!(tree.root().cost, 0.0);
        assert_eq!(tree.parent_of(3), None);
        assert!(tree.children_of(3).is_empty());
        assert_eq!(tree.edges().count(), 0);
        assert_eq!(tree.total_cost(), 0.0);
    }

    #[test]
    fn test_links() {
        let tree = sample_tree();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.children_of(4), vec![1, 7]);
        assert_eq!(tree.children_of(1), vec![2]);
        assert_eq!(tree.parent_of(2), Some(1));
        assert_eq!(tree.parent_of(7), Some(4));
        assert_eq!(tree.parent_of(5), None);
        assert!(tree.children_of(5).is_empty());
        assert!(tree.contains(7));
        assert!(!tree.contains(0));
        assert_eq!(tree.node_for_label(2).unwrap().cost, 0.125);

        for (idx, node) in tree.nodes().iter().enumerate() {
            if let Some(p) = node.parent {
                assert!(p < idx);
                assert!(tree.node(p).children.contains(&idx));
            }
        }
    }

    #[test]
    fn test_edges_and_cost() {
        let tree = sample_tree();
        let edges: Vec<_> = tree.edges().collect();
        assert_eq!(edges, vec![(4, 1, 0.5), (4, 7, 0.25), (1, 2, 0.125)]);
        assert_eq!(tree.total_cost(), 0.875);
    }
}
