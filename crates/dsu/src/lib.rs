/// Disjoint-set union with union by size and path compression.
///
/// `find`, `same` and `merge` run in amortised inverse-Ackermann time.
#[derive(Clone, Debug)]
pub struct Dsu {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl Dsu {
    /// `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    pub fn new(n: usize) -> Self {
        assert!(n <= u32::MAX as usize, "too many elements: {n}");
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `u`'s set.
    ///
    /// # Panics
    ///
    /// Panics if `u >= len()`.
    pub fn find(&mut self, u: usize) -> usize {
        self.check(u);
        let mut root = u;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        let mut v = u;
        while v != root {
            let next = self.parent[v] as usize;
            self.parent[v] = root as u32;
            v = next;
        }
        root
    }

    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Unites the sets of `u` and `v`. Returns `false` (and changes nothing)
    /// when they already share a set.
    pub fn merge(&mut self, u: usize, v: usize) -> bool {
        let mut a = self.find(u);
        let mut b = self.find(v);
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a as u32;
        self.size[a] += self.size[b];
        true
    }

    /// Number of elements in `u`'s set.
    pub fn size(&mut self, u: usize) -> usize {
        let root = self.find(u);
        self.size[root] as usize
    }

    #[inline(always)]
    fn check(&self, u: usize) {
        let n = self.parent.len();
        assert!(u < n, "element {u} out of bounds for length {n}");
    }
}

#[cfg(test)]
mod tests {
    use super::Dsu;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn initial_state() {
        let mut d = Dsu::new(5);
        for i in 0..5 {
            assert_eq!(d.find(i), i);
            assert!(d.same(i, i));
            assert_eq!(d.size(i), 1);
        }
        for i in 0..5 {
            for j in (i + 1)..5 {
                assert!(!d.same(i, j));
            }
        }
    }

    #[test]
    fn merge_and_same() {
        let mut d = Dsu::new(5);
        assert!(d.merge(0, 1));
        assert!(d.same(0, 1));
        assert!(!d.same(0, 2));

        assert!(d.merge(2, 3));
        assert!(d.same(2, 3));
        assert!(!d.same(1, 3));

        assert!(d.merge(1, 3));
        assert!(d.same(0, 3));
        assert!(!d.same(0, 4));
    }

    #[test]
    fn sizes() {
        let mut d = Dsu::new(5);
        d.merge(0, 1);
        assert_eq!(d.size(0), 2);
        d.merge(0, 2);
        assert_eq!(d.size(2), 3);
        d.merge(3, 4);
        assert_eq!(d.size(3), 2);
        d.merge(0, 3);
        assert_eq!(d.size(4), 5);
    }

    #[test]
    fn redundant_merge_is_noop() {
        let mut d = Dsu::new(4);
        assert!(d.merge(0, 1));
        assert!(!d.merge(0, 1));
        assert!(!d.merge(1, 0));
        assert!(d.same(0, 1));
        assert_eq!(d.size(0), 2);
        assert!(!d.same(0, 2));
        assert!(!d.same(0, 3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn find_out_of_range_panics() {
        Dsu::new(3).find(3);
    }

    /// Relabelling model: every element carries its component label.
    #[test]
    fn random_merges_match_labels() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        let n = 200;
        let mut d = Dsu::new(n);
        let mut label: Vec<usize> = (0..n).collect();

        for _ in 0..400 {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            let (lu, lv) = (label[u], label[v]);
            assert_eq!(d.merge(u, v), lu != lv);
            for x in &mut label {
                if *x == lv {
                    *x = lu;
                }
            }

            let w = rng.random_range(0..n);
            let expected = label.iter().filter(|&&x| x == label[w]).count();
            assert_eq!(d.size(w), expected);
            assert_eq!(d.same(u, w), label[u] == label[w]);
        }
    }
}
