//! Comparison sorts over an abstract indexable sequence.
//!
//! Each algorithm touches the sequence only through the
//! [`Sortable`](trait.Sortable.html) capabilities: compare two positions,
//! exchange two positions, and read or overwrite one position. Nothing is
//! ever added or removed, so the result is always a permutation of the
//! input.
//!
//! ```
//! use union_sort::{sort, Algorithm};
//!
//! let mut words = vec!["the", "quick", "brown", "fox"];
//! sort::shell(&mut words[..]);
//! assert_eq!(words, ["brown", "fox", "quick", "the"]);
//!
//! let mut numbers = vec![5, 3, 9, 1];
//! Algorithm::Merge.sort(&mut numbers);
//! assert_eq!(numbers, [1, 3, 5, 9]);
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use log::trace;

use super::{Error, Result};

/// Subranges this short are merge sorted by insertion sort instead.
const MERGE_CUTOFF: usize = 8;

/// An indexable, mutable sequence whose positions can be compared.
pub trait Sortable {
    /// The element type.
    type Item: Clone;

    /// A scratch sequence of the same elements, used by merge sort.
    type Buffer: Sortable<Item = Self::Item>;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Is the sequence empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Does the element at `i` order strictly before the one at `j`?
    fn less(&self, i: usize, j: usize) -> bool;

    /// Swaps the elements at `i` and `j`.
    fn exchange(&mut self, i: usize, j: usize);

    /// A copy of the element at `i`.
    fn get(&self, i: usize) -> Self::Item;

    /// Overwrites the element at `i`.
    fn set(&mut self, i: usize, value: Self::Item);

    /// A scratch copy of the whole sequence.
    fn to_buffer(&self) -> Self::Buffer;
}

impl<T: Ord + Clone> Sortable for [T] {
    type Item = T;
    type Buffer = Vec<T>;

    fn len(&self) -> usize { <[T]>::len(self) }

    fn less(&self, i: usize, j: usize) -> bool { self[i] < self[j] }

    fn exchange(&mut self, i: usize, j: usize) { self.swap(i, j) }

    fn get(&self, i: usize) -> T { self[i].clone() }

    fn set(&mut self, i: usize, value: T) { self[i] = value }

    fn to_buffer(&self) -> Vec<T> { self.to_vec() }
}

impl<T: Ord + Clone> Sortable for Vec<T> {
    type Item = T;
    type Buffer = Vec<T>;

    fn len(&self) -> usize { Vec::len(self) }

    fn less(&self, i: usize, j: usize) -> bool { self[i] < self[j] }

    fn exchange(&mut self, i: usize, j: usize) { self.swap(i, j) }

    fn get(&self, i: usize) -> T { self[i].clone() }

    fn set(&mut self, i: usize, value: T) { self[i] = value }

    fn to_buffer(&self) -> Vec<T> { self.clone() }
}

/// The five sort algorithms, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`selection`](fn.selection.html)
    #[default]
    Selection,
    /// [`insertion`](fn.insertion.html)
    Insertion,
    /// [`shell`](fn.shell.html)
    Shell,
    /// [`merge`](fn.merge.html)
    Merge,
    /// [`quick`](fn.quick.html)
    Quick,
}

impl Algorithm {
    /// Every algorithm.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// The name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell     => "shell",
            Algorithm::Merge     => "merge",
            Algorithm::Quick     => "quick",
        }
    }

    /// Sorts `data` in place with this algorithm.
    pub fn sort<S: Sortable + ?Sized>(self, data: &mut S) {
        match self {
            Algorithm::Selection => selection(data),
            Algorithm::Insertion => insertion(data),
            Algorithm::Shell     => shell(data),
            Algorithm::Merge     => merge(data),
            Algorithm::Quick     => quick(data),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Algorithm::ALL.iter()
            .copied()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_owned()))
    }
}

/// Selection sort: exchange the minimum of `i ..` into position `i`, for
/// each `i`.
///
/// Always makes about *N*²/2 comparisons.
pub fn selection<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();

    for i in 0 .. n {
        let mut min = i;
        for j in i + 1 .. n {
            if data.less(j, min) {
                min = j;
            }
        }
        data.exchange(i, min);
    }
}

/// Insertion sort: move each element left past every greater
/// predecessor.
///
/// Quadratic in the worst case, linear on input that is already sorted.
pub fn insertion<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    insertion_range(data, 0, n);
}

/// Shell sort: insertion sort over the gaps 1, 4, 13, 40, … taken in
/// decreasing order, starting from the largest gap below *N*/3.
pub fn shell<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();

    let mut h = 1;
    while h < n / 3 {
        h = 3 * h + 1;
    }
    trace!("shell sort of {} elements starts at gap {}", n, h);

    while h >= 1 {
        for i in h .. n {
            let mut j = i;
            while j >= h && data.less(j, j - h) {
                data.exchange(j, j - h);
                j -= h;
            }
        }
        h /= 3;
    }
}

/// Top-down merge sort with one auxiliary buffer.
///
/// Subranges of at most eight elements are insertion sorted, and a merge
/// is skipped when its two runs are already in order. Ties are taken from
/// the left run, so the sort is stable.
pub fn merge<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n < 2 { return; }

    let mut aux = data.to_buffer();
    merge_sort(data, &mut aux, 0, n - 1);
}

/// Quick sort partitioning around the first element of each subrange.
pub fn quick<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n < 2 { return; }

    quick_sort(data, 0, n - 1);
}

// HELPERS

// Sorts the half-open range lo .. hi.
fn insertion_range<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    for i in lo + 1 .. hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.exchange(j, j - 1);
            j -= 1;
        }
    }
}

// Sorts the inclusive range lo ..= hi.
fn merge_sort<S, B>(data: &mut S, aux: &mut B, lo: usize, hi: usize)
    where S: Sortable + ?Sized,
          B: Sortable<Item = S::Item>
{
    if hi < lo + MERGE_CUTOFF {
        insertion_range(data, lo, hi + 1);
        return;
    }

    let mid = lo + (hi - lo) / 2;
    merge_sort(data, aux, lo, mid);
    merge_sort(data, aux, mid + 1, hi);

    if !data.less(mid + 1, mid) { return; }

    merge_runs(data, aux, lo, mid, hi);
}

// Merges the sorted runs lo ..= mid and mid + 1 ..= hi.
fn merge_runs<S, B>(data: &mut S, aux: &mut B, lo: usize, mid: usize, hi: usize)
    where S: Sortable + ?Sized,
          B: Sortable<Item = S::Item>
{
    for k in lo ..= hi {
        aux.set(k, data.get(k));
    }

    let mut i = lo;
    let mut j = mid + 1;
    for k in lo ..= hi {
        if i > mid {
            data.set(k, aux.get(j));
            j += 1;
        } else if j > hi {
            data.set(k, aux.get(i));
            i += 1;
        } else if aux.less(j, i) {
            data.set(k, aux.get(j));
            j += 1;
        } else {
            data.set(k, aux.get(i));
            i += 1;
        }
    }
}

// Sorts the inclusive range lo ..= hi.
fn quick_sort<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) {
    if hi <= lo { return; }

    let j = partition(data, lo, hi);
    if j > lo {
        quick_sort(data, lo, j - 1);
    }
    quick_sort(data, j + 1, hi);
}

// Puts the pivot data[lo] into its final place and returns that place.
// Everything left of it is no greater, everything right no less.
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    let mut i = lo;
    let mut j = hi + 1;

    loop {
        loop {
            i += 1;
            if i == hi || !data.less(i, lo) { break; }
        }
        loop {
            j -= 1;
            if j == lo || !data.less(lo, j) { break; }
        }
        if i >= j { break; }
        data.exchange(i, j);
    }

    data.exchange(lo, j);
    j
}
