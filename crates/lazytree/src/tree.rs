use crate::algebra::RangeAlgebra;
use crate::error::TreeError;

/// Range-aggregation tree with lazy propagation.
///
/// - Capacity is fixed at construction; internally it is padded up to the
///   next power of two `N`, with padding leaves pinned at
///   `A::identity()` by `build`.
/// - Ranges are closed, `[lo, hi]`, over the padded index space `0..N`.
/// - `update` and `query` are both `O(log N)`; `query` takes `&mut self`
///   because it pushes pending deltas down exactly like `update` does.
///
/// Layout is the classic implicit heap: two arrays of length `2N`,
/// 1-indexed with the root at 1, node `k`'s children at `2k` and `2k + 1`,
/// leaves at `N..2N`. Node spans are not stored; the recursion carries
/// them. `pending[k] = None` means node `k` owes its children nothing.
#[derive(Clone, Debug)]
pub struct LazyTree<A: RangeAlgebra> {
    capacity: usize,
    size: usize,
    agg: Vec<A::Value>,
    pending: Vec<Option<A::Delta>>,
    built: bool,
}

impl<A: RangeAlgebra> LazyTree<A> {
    /// Create an unbuilt tree for `capacity` logical positions.
    ///
    /// All leaves start at `A::identity()`. Assign initial values with
    /// [`assign`](Self::assign), then call [`build`](Self::build) before
    /// updating or querying.
    pub fn with_capacity(capacity: usize) -> Result<Self, TreeError> {
        if capacity == 0 {
            return Err(TreeError::Capacity);
        }
        let size = capacity.next_power_of_two();
        Ok(Self {
            capacity,
            size,
            agg: vec![A::identity(); 2 * size],
            pending: vec![None; 2 * size],
            built: false,
        })
    }

    /// Build a tree directly from a slice of leaf values.
    pub fn from_values(values: &[A::Value]) -> Result<Self, TreeError> {
        let mut tree = Self::with_capacity(values.len())?;
        for (index, value) in values.iter().enumerate() {
            tree.assign(index, value.clone())?;
        }
        tree.build();
        Ok(tree)
    }

    /// Logical capacity requested at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Padded length `N`: the number of addressable leaf positions.
    /// Positions `capacity..N` hold `A::identity()` after `build`.
    pub fn padded_len(&self) -> usize {
        self.size
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Write a leaf's aggregate slot directly. O(1).
    ///
    /// Intended for seeding leaves before [`build`](Self::build). Calling
    /// it on a built tree leaves internal aggregates stale: point queries
    /// of `index` see the new value at once, wider queries do not, and
    /// pending deltas above still fold into it. Aggregates are consistent
    /// again after the next `build`.
    pub fn assign(&mut self, index: usize, value: A::Value) -> Result<(), TreeError> {
        if index >= self.size {
            return Err(TreeError::Range {
                lo: index,
                hi: index,
                len: self.size,
            });
        }
        self.agg[self.size + index] = value;
        Ok(())
    }

    /// Compute every internal aggregate bottom-up from the leaf slots and
    /// discard all pending deltas. O(N). Running it again without touching
    /// the leaves reproduces the same aggregates.
    pub fn build(&mut self) {
        for slot in &mut self.pending {
            *slot = None;
        }
        for node in (1..self.size).rev() {
            self.agg[node] = A::merge(&self.agg[2 * node], &self.agg[2 * node + 1]);
        }
        self.built = true;
    }

    /// Apply `delta` uniformly to every position in `[lo, hi]`. O(log N).
    pub fn update(&mut self, lo: usize, hi: usize, delta: A::Delta) -> Result<(), TreeError> {
        self.check_ready(lo, hi)?;
        self.update_node(1, 0, self.size - 1, lo, hi, &delta);
        Ok(())
    }

    /// Fold the aggregate of `[lo, hi]`. O(log N). Mutates internal state
    /// (push-down), hence `&mut self`.
    pub fn query(&mut self, lo: usize, hi: usize) -> Result<A::Value, TreeError> {
        self.check_ready(lo, hi)?;
        Ok(self.query_node(1, 0, self.size - 1, lo, hi))
    }

    fn check_ready(&self, lo: usize, hi: usize) -> Result<(), TreeError> {
        if !self.built {
            return Err(TreeError::NotBuilt);
        }
        if lo > hi || hi >= self.size {
            return Err(TreeError::Range {
                lo,
                hi,
                len: self.size,
            });
        }
        Ok(())
    }

    /// Fold `delta` into node `k`'s own pending slot. Leaves have no
    /// children to owe, so they carry no pending delta.
    fn compose_pending(&mut self, node: usize, delta: &A::Delta) {
        debug_assert!(node < self.size);
        let folded = match &self.pending[node] {
            Some(old) => A::compose(delta, old),
            None => delta.clone(),
        };
        self.pending[node] = Some(folded);
    }

    /// Hand node `k`'s pending delta to its children and clear it.
    /// A no-op when nothing is pending.
    fn push_down(&mut self, node: usize, node_from: usize, mid: usize, node_to: usize) {
        let Some(delta) = self.pending[node].take() else {
            return;
        };
        let left = 2 * node;
        let right = left + 1;
        self.agg[left] = A::integrate(&self.agg[left], &delta, mid - node_from + 1);
        self.agg[right] = A::integrate(&self.agg[right], &delta, node_to - mid);
        if left < self.size {
            self.compose_pending(left, &delta);
            self.compose_pending(right, &delta);
        }
    }

    fn update_node(
        &mut self,
        node: usize,
        node_from: usize,
        node_to: usize,
        lo: usize,
        hi: usize,
        delta: &A::Delta,
    ) {
        if hi < node_from || lo > node_to {
            return;
        }
        if lo <= node_from && node_to <= hi {
            // Covered: fold into this node and stop descending. The
            // children learn about it on the next traversal through here.
            let span_len = node_to - node_from + 1;
            self.agg[node] = A::integrate(&self.agg[node], delta, span_len);
            if node < self.size {
                self.compose_pending(node, delta);
            }
            return;
        }
        let mid = (node_from + node_to) / 2;
        self.push_down(node, node_from, mid, node_to);
        self.update_node(2 * node, node_from, mid, lo, hi, delta);
        self.update_node(2 * node + 1, mid + 1, node_to, lo, hi, delta);
        self.agg[node] = A::merge(&self.agg[2 * node], &self.agg[2 * node + 1]);
    }

    fn query_node(
        &mut self,
        node: usize,
        node_from: usize,
        node_to: usize,
        lo: usize,
        hi: usize,
    ) -> A::Value {
        if hi < node_from || lo > node_to {
            return A::identity();
        }
        if lo <= node_from && node_to <= hi {
            return self.agg[node].clone();
        }
        let mid = (node_from + node_to) / 2;
        self.push_down(node, node_from, mid, node_to);
        let left = self.query_node(2 * node, node_from, mid, lo, hi);
        let right = self.query_node(2 * node + 1, mid + 1, node_to, lo, hi);
        A::merge(&left, &right)
    }
}
