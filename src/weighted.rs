use std::fmt::{self, Debug};

use super::{DisjointSets, QuickUnion, Result};

/// Weighted quick-union: quick-union that always hangs the smaller tree
/// under the root of the larger one.
///
/// Tracking the size of each tree keeps every tree’s height at most
/// `log2(len)`, so [`find`](#method.find) and [`union`](#method.union)
/// take logarithmic time.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWeightedQuickUnion"))]
pub struct WeightedQuickUnion {
    forest: QuickUnion,
    sizes: Vec<usize>,
}
// Invariant: self.forest.len() == self.sizes.len(), and for each root r,
// self.sizes[r] is the number of sites in r’s tree

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWeightedQuickUnion {
    forest: QuickUnion,
    sizes: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWeightedQuickUnion> for WeightedQuickUnion {
    type Error = super::Error;

    fn try_from(raw: RawWeightedQuickUnion) -> Result<Self> {
        let RawWeightedQuickUnion { forest, sizes } = raw;
        let len = forest.len();

        if sizes.len() != len {
            return Err(super::Error::InvalidState(format!(
                "{} sizes for {} sites", sizes.len(), len)));
        }

        let mut members = vec![0; len];
        for site in 0 .. len {
            members[forest.root(site)] += 1;
        }
        for root in (0 .. len).filter(|&site| members[site] > 0) {
            if sizes[root] != members[root] {
                return Err(super::Error::InvalidState(format!(
                    "root {} records size {} but has {} sites",
                    root, sizes[root], members[root])));
            }
        }

        Ok(WeightedQuickUnion { forest, sizes })
    }
}

impl Debug for WeightedQuickUnion {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "WeightedQuickUnion({:?}, sizes: {:?})",
               self.forest, self.sizes)
    }
}

impl WeightedQuickUnion {
    /// Creates a new weighted quick-union of `size` singleton components.
    pub fn new(size: usize) -> Self {
        WeightedQuickUnion {
            forest: QuickUnion::new(size),
            sizes: vec![1; size],
        }
    }

    /// The number of parent links between `site` and its root.
    pub fn height(&self, site: usize) -> Result<usize> {
        self.forest.height(site)
    }

    /// The number of sites in `site`’s component.
    pub fn size(&self, site: usize) -> Result<usize> {
        let root = self.find(site)?;
        Ok(self.sizes[root])
    }
}

impl DisjointSets for WeightedQuickUnion {
    fn len(&self) -> usize {
        self.forest.len()
    }

    fn count(&self) -> usize {
        self.forest.count()
    }

    fn find(&self, site: usize) -> Result<usize> {
        self.forest.find(site)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q { return Ok(false); }

        let (child, parent) = if self.sizes[root_p] < self.sizes[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };

        self.forest.link(child, parent);
        self.sizes[parent] += self.sizes[child];

        Ok(true)
    }
}
