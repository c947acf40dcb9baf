use crate::spanning_tree::SpanningTree;

/// Longest weighted root-to-leaf path of the tree.
///
/// This is not the graph-theoretic diameter: only paths that start at the
/// root count. See [`longest_path_from`].
pub fn tree_diameter(tree: &SpanningTree) -> f64 {
    longest_path_from(tree, 0)
}

/// Longest path value of the subtree rooted at arena index `idx`.
///
/// Panics if `idx >= tree.len()`.
///
/// A leaf is worth its own cost. An inner node is worth the best of
/// `own cost + child value` over its children, and never less than 0.
/// Every edge on the path is therefore counted once, through the cost of
/// its lower endpoint.
///
/// Children are always stored after their parent, so one backwards sweep
/// over the arena computes every value without recursion.
pub fn longest_path_from(tree: &SpanningTree, idx: usize) -> f64 {
    let nodes = tree.nodes();
    let mut value = vec![0.0; nodes.len()];

    for i in (idx..nodes.len()).rev() {
        let node = &nodes[i];
        let longest = if node.children.is_empty() {
            node.cost
        } else {
            node.children.iter().fold(0.0, |best, &c| {
                let current = node.cost + value[c];
                if best < current { current } else { best }
            })
        };
        value[i] = longest;
    }

    value[idx]
}

impl SpanningTree {
    /// Shorthand for [`tree_diameter`].
    pub fn diameter(&self) -> f64 {
        tree_diameter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node() {
        assert_eq!(tree_diameter(&SpanningTree::new(0)), 0.0);
    }

    #[test]
    fn test_picks_heaviest_branch() {
        //      0
        //  0.5/ \0.25
        //    1   2
        //        |0.5
        //        3
        let mut tree = SpanningTree::new(0);
        tree.insert(0, 1, 0.5);
        tree.insert(0, 2, 0.25);
        tree.insert(2, 3, 0.5);

        assert_eq!(tree.diameter(), 0.75);
        assert_eq!(longest_path_from(&tree, 2), 0.75);
        assert_eq!(longest_path_from(&tree, 1), 0.5);
    }

    #[test]
    #[should_panic]
    fn test_index_past_the_tree() {
        longest_path_from(&SpanningTree::new(0), 1);
    }

    #[test]
    fn test_deep_path() {
        let n = 100_000;
        let mut tree = SpanningTree::new(0);
        for v in 1..n {
            tree.insert(v - 1, v, 0.5);
        }
        assert_eq!(tree.diameter(), 0.5 * (n - 1) as f64);
    }

    #[test]
    fn test_matches_recursive_definition() {
        fn recursive(tree: &SpanningTree, idx: usize) -> f64 {
            let node = tree.node(idx);
            if node.children.is_empty() {
                return node.cost;
            }
            let mut lp = 0.0;
            for &c in &node.children {
                let current = node.cost + recursive(tree, c);
                if lp < current {
                    lp = current;
                }
            }
            lp
        }

        // star of paths with dyadic weights so sums stay exact
        let mut tree = SpanningTree::new(0);
        let mut next = 1;
        for arm in 1..6 {
            let mut prev = 0;
            for depth in 0..arm {
                tree.insert(prev, next, (1 + (arm * depth) % 4) as f64 / 8.0);
                prev = next;
                next += 1;
            }
        }

        for idx in 0..tree.len() {
            assert_eq!(longest_path_from(&tree, idx), recursive(&tree, idx));
        }
    }
}
