use std::fmt::{self, Debug};

use super::{DisjointSets, Partition, Result};

/// Quick-union: each site stores a parent, and a root is its own parent.
///
/// Both [`find`](#method.find) and [`union`](#method.union) walk to a
/// root, so they cost the height of the tree. Nothing bounds that height:
/// an unlucky sequence of unions builds a chain.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuickUnion {
    partition: Partition,
}

impl Debug for QuickUnion {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "QuickUnion({:?})", self.partition)
    }
}

impl QuickUnion {
    /// Creates a new quick-union of `size` singleton components.
    pub fn new(size: usize) -> Self {
        QuickUnion { partition: Partition::new(size) }
    }

    /// The number of parent links between `site` and its root.
    pub fn height(&self, site: usize) -> Result<usize> {
        let mut site = self.partition.check(site)?;
        let mut links = 0;

        while site != self.parent(site) {
            site = self.parent(site);
            links += 1;
        }

        Ok(links)
    }

    // HELPERS

    // Callers must have checked `site` already.
    pub(crate) fn root(&self, mut site: usize) -> usize {
        while site != self.parent(site) {
            site = self.parent(site);
        }
        site
    }

    // Makes root `child` a child of root `parent`, merging two components.
    pub(crate) fn link(&mut self, child: usize, parent: usize) {
        debug_assert!(child != parent);
        debug_assert_eq!(child, self.parent(child));
        self.partition.set_entry(child, parent);
        self.partition.merged();
    }

    pub(crate) fn check(&self, site: usize) -> Result<usize> {
        self.partition.check(site)
    }

    fn parent(&self, site: usize) -> usize {
        self.partition.entry(site)
    }
}

impl DisjointSets for QuickUnion {
    fn len(&self) -> usize {
        self.partition.len()
    }

    fn count(&self) -> usize {
        self.partition.count()
    }

    fn find(&self, site: usize) -> Result<usize> {
        let site = self.check(site)?;
        Ok(self.root(site))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q { return Ok(false); }

        self.link(root_p, root_q);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len() {
        assert_eq!(5, QuickUnion::new(5).len());
    }

    #[test]
    fn union() {
        let mut uf = QuickUnion::new(8);
        assert!(!uf.connected(0, 1).unwrap());
        uf.union(0, 1).unwrap();
        assert!(uf.connected(0, 1).unwrap());
        assert_eq!(1, uf.find(0).unwrap());
    }

    #[test]
    fn unions() {
        let mut uf = QuickUnion::new(8);
        assert!(uf.union(0, 1).unwrap());
        assert!(uf.union(1, 2).unwrap());
        assert!(uf.union(4, 3).unwrap());
        assert!(uf.union(3, 2).unwrap());
        assert!(!uf.union(0, 3).unwrap());

        assert!(uf.connected(0, 1).unwrap());
        assert!(uf.connected(0, 2).unwrap());
        assert!(uf.connected(0, 3).unwrap());
        assert!(uf.connected(0, 4).unwrap());
        assert!(!uf.connected(0, 5).unwrap());

        uf.union(5, 3).unwrap();
        assert!(uf.connected(0, 5).unwrap());

        uf.union(6, 7).unwrap();
        assert!(uf.connected(6, 7).unwrap());
        assert!(!uf.connected(5, 7).unwrap());

        uf.union(0, 7).unwrap();
        assert!(uf.connected(5, 7).unwrap());
        assert_eq!(1, uf.count());
    }

    #[test]
    fn chain_grows_unbounded() {
        let mut uf = QuickUnion::new(6);
        for site in 0..5 {
            assert!(uf.union(site, site + 1).unwrap());
        }
        assert_eq!(5, uf.height(0).unwrap());
        assert_eq!(0, uf.height(5).unwrap());
    }

    #[test]
    fn out_of_range() {
        let mut uf = QuickUnion::new(2);
        assert!(uf.find(2).is_err());
        assert!(uf.height(2).is_err());
        assert!(uf.union(2, 0).is_err());
        assert_eq!(2, uf.count());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let mut uf0 = QuickUnion::new(8);
        uf0.union(0, 1).unwrap();
        uf0.union(2, 3).unwrap();

        let json = serde_json::to_string(&uf0).unwrap();
        let uf1: QuickUnion = serde_json::from_str(&json).unwrap();
        assert!( uf1.connected(0, 1).unwrap());
        assert!(!uf1.connected(1, 2).unwrap());
        assert!( uf1.connected(2, 3).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_invalid_state() {
        assert!(serde_json::from_str::<QuickUnion>(
            r#"{"partition":{"id":[0,1,7],"count":3}}"#).is_err());
        assert!(serde_json::from_str::<QuickUnion>(
            r#"{"partition":{"id":[1,2,0],"count":0}}"#).is_err());

        let uf: QuickUnion =
            serde_json::from_str(r#"{"partition":{"id":[1,2,2],"count":1}}"#).unwrap();
        assert_eq!(2, uf.height(0).unwrap());
        assert!(uf.find(3).is_err());
    }
}
