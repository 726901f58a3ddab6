//! Persistent accumulated argument list.
//!
//! This module provides [`Arguments`], the ordered sequence of values a curry
//! session has collected so far.
//!
//! # Structural Sharing
//!
//! Every call to a curried function appends one batch. Instead of copying the
//! whole list, [`Arguments::concat`] allocates a single segment that points back
//! to the list it extends:
//!
//! ```text
//! base      = [2]
//! left      = base.concat([3])     : [2] <- [3]
//! right     = base.concat([5, 6])  : [2] <- [5, 6]   // shares [2] with left
//! ```
//!
//! Segments are never mutated after creation, so two branches created from the
//! same intermediate list cannot observe each other's arguments, even when
//! they run on different threads.
//!
//! # Examples
//!
//! ```rust
//! use curry_engine::engine::Arguments;
//!
//! let base: Arguments<i32> = [1, 2].into_iter().collect();
//! let left = base.concat([3]);
//! let right = base.concat([30, 40]);
//!
//! assert_eq!(base.to_vec(), vec![1, 2]);
//! assert_eq!(left.to_vec(), vec![1, 2, 3]);
//! assert_eq!(right.to_vec(), vec![1, 2, 30, 40]);
//! ```

use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::sync::Arc;

use smallvec::SmallVec;

/// Inline capacity for the segment stack built during iteration.
const INLINE_SEGMENTS: usize = 8;

/// One appended batch, linked to the list it extends.
struct Segment<A> {
    batch: Box<[A]>,
    parent: Option<Arc<Self>>,
}

// Unlinks the chain one segment at a time so that long sessions built from
// many single-argument calls do not overflow the stack on drop. Only the
// holder of the last reference continues down the chain, even when sibling
// branches are dropped on different threads.
impl<A> Drop for Segment<A> {
    fn drop(&mut self) {
        let mut current = self.parent.take();
        while let Some(segment) = current {
            current = Arc::into_inner(segment).and_then(|mut owned| owned.parent.take());
        }
    }
}

/// A persistent, append-only list of accumulated arguments.
///
/// # Time Complexity
///
/// | Operation | Complexity            |
/// |-----------|-----------------------|
/// | `new`     | O(1)                  |
/// | `len`     | O(1)                  |
/// | `concat`  | O(k) for a batch of k |
/// | `iter`    | O(s) setup, s batches |
/// | `first_n` | O(s + n)              |
pub struct Arguments<A> {
    last: Option<Arc<Segment<A>>>,
    length: usize,
}

impl<A> Arguments<A> {
    /// Creates an empty argument list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curry_engine::engine::Arguments;
    ///
    /// let arguments: Arguments<i32> = Arguments::new();
    /// assert!(arguments.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            length: 0,
        }
    }

    /// Returns the number of accumulated arguments.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no argument has been accumulated.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a new list with `batch` appended, leaving `self` untouched.
    ///
    /// An empty batch returns a list sharing every segment with `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curry_engine::engine::Arguments;
    ///
    /// let first = Arguments::new().concat(["a", "b"]);
    /// let second = first.concat(["c"]);
    ///
    /// assert_eq!(first.len(), 2);
    /// assert_eq!(second.len(), 3);
    /// ```
    #[must_use]
    pub fn concat<I>(&self, batch: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let batch: Box<[A]> = batch.into_iter().collect();
        if batch.is_empty() {
            return self.clone();
        }

        let length = self.length + batch.len();
        Self {
            last: Some(Arc::new(Segment {
                batch,
                parent: self.last.clone(),
            })),
            length,
        }
    }

    /// Returns an iterator over the arguments in the order they were supplied.
    #[must_use]
    pub fn iter(&self) -> ArgumentsIterator<'_, A> {
        let mut segments: SmallVec<[&[A]; INLINE_SEGMENTS]> = SmallVec::new();
        let mut current = self.last.as_deref();
        while let Some(segment) = current {
            segments.push(&segment.batch);
            current = segment.parent.as_deref();
        }
        segments.reverse();

        ArgumentsIterator {
            inner: segments.into_iter().flatten(),
            remaining: self.length,
        }
    }

    /// Clones the first `count` arguments out of the list.
    ///
    /// Fewer than `count` elements are returned if the list is shorter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curry_engine::engine::Arguments;
    ///
    /// let arguments = Arguments::new().concat([1, 2]).concat([3, 99]);
    /// assert_eq!(arguments.first_n(3), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn first_n(&self, count: usize) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().take(count).cloned().collect()
    }

    /// Clones every argument into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<A> Clone for Arguments<A> {
    fn clone(&self) -> Self {
        Self {
            last: self.last.clone(),
            length: self.length,
        }
    }
}

impl<A> Default for Arguments<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for Arguments<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: PartialEq> PartialEq for Arguments<A> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for Arguments<A> {}

impl<A> FromIterator<A> for Arguments<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iterable: I) -> Self {
        Self::new().concat(iterable)
    }
}

impl<'a, A> IntoIterator for &'a Arguments<A> {
    type Item = &'a A;
    type IntoIter = ArgumentsIterator<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over [`Arguments`].
pub struct ArgumentsIterator<'a, A> {
    inner: std::iter::Flatten<smallvec::IntoIter<[&'a [A]; INLINE_SEGMENTS]>>,
    remaining: usize,
}

impl<'a, A> Iterator for ArgumentsIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next()?;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A> ExactSizeIterator for ArgumentsIterator<'_, A> {}

impl<A> FusedIterator for ArgumentsIterator<'_, A> {}
