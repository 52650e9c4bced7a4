//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a partition of the elements `0..n` into disjoint components
//! with near-constant-time root lookup and merging.
//!
//! # Algorithm
//!
//! Uses **path compression** during `find` and **union by size** during
//! `union`: the root of the smaller tree is attached under the root of the
//! larger one. Together they give amortized O(α(n)) per operation, where
//! α is the inverse Ackermann function.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Sedgewick & Wayne (2011), *Algorithms* 4th ed., §1.5 "Weighted quick-union"

/// Weighted disjoint-set forest with path compression.
///
/// The root returned by [`find`](UnionFind::find) is the component's
/// representative. Callers that attach data to components (for example
/// per-component flags) must key that data by the root and re-resolve
/// it after every [`union`](UnionFind::union), since a merge can hand
/// the representative role to the other tree.
///
/// # Examples
/// ```
/// use u_percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert_eq!(uf.find(0), uf.find(1));
/// assert_ne!(uf.find(0), uf.find(2));
///
/// uf.union(1, 3);
/// assert_eq!(uf.find(0), uf.find(2)); // transitivity
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton components `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of the component containing `x`.
    ///
    /// Every node visited on the way up is re-pointed directly at the
    /// root. Two passes keep the stack flat regardless of tree depth.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// # Returns
    /// `true` if `a` and `b` were in different components (and are now
    /// merged), `false` if they already shared a root.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `a >= len()` or `b >= len()`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        // Ties go to `root_a`.
        let (big, small) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }

    #[cfg(test)]
    fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
