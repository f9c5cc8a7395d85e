use std::fmt::{self, Debug};

use super::{DisjointSets, Partition, Result};

/// Quick-find: each site stores its component id directly.
///
/// [`find`](#method.find) is a single lookup, while
/// [`union`](#method.union) rewrites every site of one component, so it
/// takes time linear in the number of sites. Worth it when queries vastly
/// outnumber merges.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawQuickFind"))]
pub struct QuickFind {
    partition: Partition,
}
// Invariant: every component id is the id of itself

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawQuickFind {
    partition: Partition,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQuickFind> for QuickFind {
    type Error = super::Error;

    fn try_from(raw: RawQuickFind) -> Result<Self> {
        let partition = raw.partition;

        for site in 0 .. partition.len() {
            let id = partition.entry(site);
            if partition.entry(id) != id {
                return Err(super::Error::InvalidState(format!(
                    "site {} has id {}, which is not a component id", site, id)));
            }
        }

        Ok(QuickFind { partition })
    }
}

impl Debug for QuickFind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "QuickFind({:?})", self.partition)
    }
}

impl QuickFind {
    /// Creates a new quick-find of `size` singleton components.
    pub fn new(size: usize) -> Self {
        QuickFind { partition: Partition::new(size) }
    }
}

impl DisjointSets for QuickFind {
    fn len(&self) -> usize {
        self.partition.len()
    }

    fn count(&self) -> usize {
        self.partition.count()
    }

    fn find(&self, site: usize) -> Result<usize> {
        let site = self.partition.check(site)?;
        Ok(self.partition.entry(site))
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q { return Ok(false); }

        for id in self.partition.entries_mut() {
            if *id == root_p {
                *id = root_q;
            }
        }
        self.partition.merged();

        Ok(true)
    }
}
