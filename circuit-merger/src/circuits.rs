/// What connecting two points did to the circuit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Neither point was wired yet, so they open a new circuit.
    Opened,
    /// One point joined the circuit the other already belonged to.
    Extended,
    /// Two distinct circuits became one.
    Merged,
    /// Both points were already on the same circuit.
    Redundant,
}

/// Disjoint Set Union over junction boxes, with path compression and union
/// by size.
///
/// A point is unassigned until the first pair touching it is connected; only
/// assigned points count as part of a circuit. Which root survives a merge is
/// an implementation detail, callers should compare membership instead.
#[derive(Debug, Clone)]
pub struct Circuits {
    parent: Vec<usize>,
    sizes: Vec<usize>,
    assigned: Vec<bool>,
    unassigned: usize,
    /// Disjoint sets, counting every unassigned point as its own singleton.
    sets: usize,
}

impl Circuits {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sizes: vec![1; n],
            assigned: vec![false; n],
            unassigned: n,
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Root lookup without compression, for read-only queries.
    fn root(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.sizes[root_i] < self.sizes[root_j] {
            self.parent[root_i] = root_j;
            self.sizes[root_j] += self.sizes[root_i];
        } else {
            self.parent[root_j] = root_i;
            self.sizes[root_i] += self.sizes[root_j];
        }
        self.sets -= 1;
        true
    }

    fn assign(&mut self, i: usize) {
        if !self.assigned[i] {
            self.assigned[i] = true;
            self.unassigned -= 1;
        }
    }

    /// Wires `i` and `j` together.
    pub fn connect(&mut self, i: usize, j: usize) -> Link {
        debug_assert_ne!(i, j, "a pair needs two distinct points");

        let link = match (self.assigned[i], self.assigned[j]) {
            (false, false) => Link::Opened,
            (true, false) | (false, true) => Link::Extended,
            (true, true) if self.find(i) == self.find(j) => Link::Redundant,
            (true, true) => Link::Merged,
        };

        self.assign(i);
        self.assign(j);
        self.union(i, j);
        link
    }

    /// Identifier of the circuit `i` is on, `None` while it is unassigned.
    ///
    /// Identifiers are stable until the next merge.
    pub fn circuit_of(&self, i: usize) -> Option<usize> {
        if self.assigned[i] {
            Some(self.root(i))
        } else {
            None
        }
    }

    pub fn same_circuit(&self, i: usize, j: usize) -> bool {
        match (self.circuit_of(i), self.circuit_of(j)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Every point is assigned and they all share one circuit.
    pub fn is_unified(&self) -> bool {
        !self.is_empty() && self.unassigned == 0 && self.sets == 1
    }

    /// Sizes of all circuits, largest first. Unassigned points are not
    /// circuits and are left out.
    pub fn circuit_sizes(&self) -> Vec<usize> {
        let mut sizes = (0..self.len())
            .filter(|&i| self.assigned[i] && self.parent[i] == i)
            .map(|i| self.sizes[i])
            .collect::<Vec<_>>();

        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_merge_rule() {
        let mut circuits = Circuits::new(5);

        assert_eq!(circuits.connect(0, 1), Link::Opened);
        assert_eq!(circuits.connect(1, 2), Link::Extended);
        assert_eq!(circuits.connect(3, 4), Link::Opened);
        assert_eq!(circuits.connect(2, 0), Link::Redundant);
        assert_eq!(circuits.connect(4, 0), Link::Merged);
        assert!(circuits.is_unified());
    }

    #[test]
    fn unassigned_points_are_not_circuits() {
        let mut circuits = Circuits::new(4);
        circuits.connect(0, 1);

        assert_eq!(circuits.circuit_of(2), None);
        assert!(!circuits.same_circuit(2, 2));
        assert!(circuits.same_circuit(0, 1));
        assert_eq!(circuits.circuit_sizes(), vec![2]);
        assert_eq!(circuits.set_count(), 3);
        assert!(!circuits.is_unified());
    }

    #[test]
    fn sizes_are_sorted_largest_first() {
        let mut circuits = Circuits::new(7);
        circuits.connect(0, 1);
        circuits.connect(2, 3);
        circuits.connect(3, 4);
        circuits.connect(4, 5);

        assert_eq!(circuits.circuit_sizes(), vec![4, 2]);
    }

    #[test]
    fn one_circuit_with_an_unassigned_point_is_not_unified() {
        let mut circuits = Circuits::new(3);
        circuits.connect(0, 1);

        assert_eq!(circuits.circuit_sizes().len(), 1);
        assert!(!circuits.is_unified());
    }

    #[test]
    fn lone_or_missing_points_never_unify() {
        assert!(!Circuits::new(0).is_unified());
        assert!(!Circuits::new(1).is_unified());
    }
}
