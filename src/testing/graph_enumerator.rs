use crate::graph::RandomGraph;

/// Walks through every simple graph on `n` vertices, one edge mask at a
/// time. Pair `(i, j)` with `i < j` gets bit `check` in generator order and
/// the weight `weight(check)`.
pub(crate) struct GraphEnumeratorState<F: Fn(usize) -> f64> {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
    pub weight: F,
}

impl<F: Fn(usize) -> f64> GraphEnumeratorState<F> {
    pub fn new(n: usize, weight: F) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * n.saturating_sub(1) / 2),
            weight,
        }
    }
}

impl<F: Fn(usize) -> f64> Iterator for GraphEnumeratorState<F> {
    type Item = RandomGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut edges = Vec::new();
        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    edges.push((i, j, (self.weight)(check)));
                }
                check += 1;
            }
        }

        self.mask += 1;
        RandomGraph::from_weighted_edges(self.n, &edges).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_masks() {
        let graphs: Vec<_> = GraphEnumeratorState::new(4, |c| c as f64).collect();
        assert_eq!(graphs.len(), 64);
        assert_eq!(graphs[0].edge_count(), 0);
        assert_eq!(graphs[63].edge_count(), 6);
    }
}
