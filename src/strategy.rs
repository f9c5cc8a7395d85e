//! Selecting a union-find variant by name.

use std::fmt::{self, Display};
use std::str::FromStr;

use super::{partition, DisjointSets, Error, QuickFind, QuickUnion, Result,
            WeightedQuickUnion};

/// The three interchangeable union-find variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`QuickFind`](struct.QuickFind.html)
    QuickFind,
    /// [`QuickUnion`](struct.QuickUnion.html)
    QuickUnion,
    /// [`WeightedQuickUnion`](struct.WeightedQuickUnion.html)
    #[default]
    Weighted,
}

impl Strategy {
    /// Every strategy, in order of increasing sophistication.
    pub const ALL: [Strategy; 3] =
        [Strategy::QuickFind, Strategy::QuickUnion, Strategy::Weighted];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::QuickFind  => "quickfind",
            Strategy::QuickUnion => "quickunion",
            Strategy::Weighted   => "weighted",
        }
    }

    /// Creates a union-find of this variant with `n` singleton components.
    ///
    /// Fails if `n` is negative.
    pub fn build(self, n: i64) -> Result<UnionFinder> {
        let size = partition::site_count(n)?;
        Ok(self.with_size(size))
    }

    /// Creates a union-find of this variant with `size` singleton
    /// components.
    pub fn with_size(self, size: usize) -> UnionFinder {
        match self {
            Strategy::QuickFind  => UnionFinder::QuickFind(QuickFind::new(size)),
            Strategy::QuickUnion => UnionFinder::QuickUnion(QuickUnion::new(size)),
            Strategy::Weighted   =>
                UnionFinder::Weighted(WeightedQuickUnion::new(size)),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Strategy::ALL.iter()
            .copied()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| Error::UnknownStrategy(name.to_owned()))
    }
}

/// A union-find whose variant was chosen at run time.
///
/// The variant is fixed at construction; each operation dispatches to it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnionFinder {
    /// Quick-find.
    QuickFind(QuickFind),
    /// Quick-union.
    QuickUnion(QuickUnion),
    /// Weighted quick-union.
    Weighted(WeightedQuickUnion),
}

impl UnionFinder {
    /// Which variant this is.
    pub fn strategy(&self) -> Strategy {
        match *self {
            UnionFinder::QuickFind(_)  => Strategy::QuickFind,
            UnionFinder::QuickUnion(_) => Strategy::QuickUnion,
            UnionFinder::Weighted(_)   => Strategy::Weighted,
        }
    }

    fn as_dyn(&self) -> &dyn DisjointSets {
        match *self {
            UnionFinder::QuickFind(ref uf)  => uf,
            UnionFinder::QuickUnion(ref uf) => uf,
            UnionFinder::Weighted(ref uf)   => uf,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn DisjointSets {
        match *self {
            UnionFinder::QuickFind(ref mut uf)  => uf,
            UnionFinder::QuickUnion(ref mut uf) => uf,
            UnionFinder::Weighted(ref mut uf)   => uf,
        }
    }
}

impl DisjointSets for UnionFinder {
    fn len(&self) -> usize {
        self.as_dyn().len()
    }

    fn count(&self) -> usize {
        self.as_dyn().count()
    }

    fn find(&self, site: usize) -> Result<usize> {
        self.as_dyn().find(site)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        self.as_dyn_mut().union(p, q)
    }
}
