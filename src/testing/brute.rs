use crate::graph::RandomGraph;

/// Weight of a minimum spanning tree found by trying every `(n - 1)`-edge
/// subset. `None` if the graph is not connected.
///
/// Only meant for tiny graphs.
pub(crate) fn brute_force_mst_weight(g: &RandomGraph) -> Option<f64> {
    let n = g.vertex_count();
    if n <= 1 {
        return Some(0.0);
    }

    let mut edges = Vec::new();
    for u in g.vertices() {
        for e in g.edges(u) {
            if u < e.target {
                edges.push((u, e.target, e.weight));
            }
        }
    }
    assert!(edges.len() <= 20, "graph too big for brute force");

    let mut best: Option<f64> = None;
    for mask in 0usize..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }

        let mut parent: Vec<usize> = (0..n).collect();
        fn find(parent: &mut [usize], x: usize) -> usize {
            let mut root = x;
            while parent[root] != root {
                root = parent[root];
            }
            parent[x] = root;
            root
        }

        let mut acyclic = true;
        let mut weight = 0.0;
        for (i, &(u, v, w)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
            if ru == rv {
                acyclic = false;
                break;
            }
            parent[ru] = rv;
            weight += w;
        }

        // n - 1 edges without a cycle span all n vertices
        if acyclic && best.is_none_or(|b| weight < b) {
            best = Some(weight);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::four_vertex_graph;

    #[test]
    fn test_brute_force_on_fixture() {
        let w = brute_force_mst_weight(&four_vertex_graph()).unwrap();
        assert!((w - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_brute_force_disconnected() {
        let g = RandomGraph::from_weighted_edges(3, &[(0, 1, 0.5)]).unwrap();
        assert_eq!(brute_force_mst_weight(&g), None);
    }
}
