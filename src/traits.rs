use super::Result;

/// The contract shared by every union-find variant.
///
/// Sites are the integers `0 .. self.len()`. A fresh structure has
/// `self.len()` singleton components; each effective
/// [`union`](#tymethod.union) merges two of them, so
/// [`count`](#tymethod.count) never increases.
///
/// Every operation that takes a site rejects one outside `0 .. len()` with
/// [`Error::SiteOutOfRange`](enum.Error.html#variant.SiteOutOfRange).
pub trait DisjointSets {
    /// The number of sites.
    fn len(&self) -> usize;

    /// Is the structure devoid of sites?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of distinct components.
    fn count(&self) -> usize;

    /// Finds the representative of the given site’s component.
    ///
    /// Two sites are in the same component exactly when their
    /// representatives are equal.
    fn find(&self, site: usize) -> Result<usize>;

    /// Determines whether two sites are in the same component.
    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Joins the components of the two given sites.
    ///
    /// Returns whether anything changed. That is, if the components were
    /// different, it returns `true` and the count drops by one, but if they
    /// were already the same then it returns `false`.
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;
}
