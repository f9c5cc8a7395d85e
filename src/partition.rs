use std::fmt::{self, Debug};

use super::{Error, Result};

/// Converts a signed site count into a size, rejecting negative counts.
pub fn site_count(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::NegativeSize(n))
}

/// Converts a signed site read from input into an index into `0 .. len`.
pub fn site(value: i64, len: usize) -> Result<usize> {
    match usize::try_from(value) {
        Ok(site) if site < len => Ok(site),
        _ => Err(Error::SiteOutOfRange { site: value, len }),
    }
}

/// The state every variant starts from: one entry per site plus a live
/// component count.
///
/// What an entry means is up to the owner. Quick-find stores component
/// ids in it; the parent-pointer variants store parents, with a root
/// pointing to itself.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPartition"))]
pub struct Partition {
    id: Vec<usize>,
    count: usize,
}
// Invariant: every entry is < self.len(), following entries from any site
// reaches a self-mapped root, and self.count is the number of roots

// A partition as it arrives from a deserializer, before it is checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPartition {
    id: Vec<usize>,
    count: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPartition> for Partition {
    type Error = Error;

    fn try_from(raw: RawPartition) -> Result<Self> {
        #[derive(Clone, Copy, PartialEq)]
        enum Visit { New, OnPath, Done }

        let len = raw.id.len();
        if let Some(site) = (0 .. len).find(|&site| raw.id[site] >= len) {
            return Err(Error::InvalidState(format!(
                "site {} points at {}, but there are only {} sites",
                site, raw.id[site], len)));
        }

        let mut visits = vec![Visit::New; len];
        let mut path = Vec::new();
        for start in 0 .. len {
            let mut site = start;
            loop {
                match visits[site] {
                    Visit::Done => break,
                    Visit::OnPath => return Err(Error::InvalidState(format!(
                        "site {} lies on a cycle", site))),
                    Visit::New => {
                        visits[site] = Visit::OnPath;
                        path.push(site);
                        if raw.id[site] == site { break; }
                        site = raw.id[site];
                    }
                }
            }
            for site in path.drain(..) {
                visits[site] = Visit::Done;
            }
        }

        let roots = (0 .. len).filter(|&site| raw.id[site] == site).count();
        if roots != raw.count {
            return Err(Error::InvalidState(format!(
                "count is {} but there are {} components", raw.count, roots)));
        }

        Ok(Partition { id: raw.id, count: raw.count })
    }
}

impl Debug for Partition {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "Partition({:?}, count: {})", self.id, self.count)
    }
}

impl Default for Partition {
    fn default() -> Self {
        Partition::new(0)
    }
}

impl Partition {
    /// Creates `size` singleton components, with site `i` mapped to `i`.
    pub fn new(size: usize) -> Self {
        Partition {
            id: (0..size).collect(),
            count: size,
        }
    }

    /// The number of sites.
    pub fn len(&self) -> usize {
        self.id.len()
    }

    /// Is the partition devoid of sites?
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// The number of distinct components.
    pub fn count(&self) -> usize {
        self.count
    }

    // HELPERS

    pub(crate) fn check(&self, site: usize) -> Result<usize> {
        if site < self.len() {
            Ok(site)
        } else {
            Err(Error::SiteOutOfRange { site: site as i64, len: self.len() })
        }
    }

    pub(crate) fn entry(&self, site: usize) -> usize {
        self.id[site]
    }

    pub(crate) fn set_entry(&mut self, site: usize, value: usize) {
        self.id[site] = value;
    }

    pub(crate) fn entries_mut(&mut self) -> std::slice::IterMut<'_, usize> {
        self.id.iter_mut()
    }

    pub(crate) fn merged(&mut self) {
        debug_assert!(self.count > 1);
        self.count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len() {
        assert_eq!(5, Partition::new(5).len());
        assert_eq!(5, Partition::new(5).count());
        assert!(Partition::default().is_empty());
    }

    #[test]
    fn negative_count_rejected() {
        assert_eq!(3, site_count(3).unwrap());
        assert_eq!(0, site_count(0).unwrap());
        match site_count(-1) {
            Err(Error::NegativeSize(-1)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn site_conversion() {
        assert_eq!(4, site(4, 5).unwrap());
        assert!(site(5, 5).is_err());
        match site(-2, 5) {
            Err(Error::SiteOutOfRange { site: -2, len: 5 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_state() {
        let ok: Partition =
            serde_json::from_str(r#"{"id":[1,1,1,3],"count":2}"#).unwrap();
        assert_eq!(2, ok.count());

        for json in &[
            r#"{"id":[0,1,7],"count":3}"#,
            r#"{"id":[1,0,2],"count":1}"#,
            r#"{"id":[1,2,0],"count":0}"#,
            r#"{"id":[0,1,2],"count":2}"#,
            r#"{"id":[],"count":1}"#,
        ] {
            assert!(serde_json::from_str::<Partition>(json).is_err(), "{}", json);
        }
    }

    #[test]
    fn check() {
        let partition = Partition::new(3);
        assert_eq!(2, partition.check(2).unwrap());
        assert!(partition.check(3).is_err());
        assert!(Partition::new(0).check(0).is_err());
    }
}
