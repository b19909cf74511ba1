//! Wrap-around cursor used for both the page number and the selected row.
//!
//! The bound is supplied on every transition because the addressable range
//! changes independently of the cursor (a narrower filter, a shorter last page).

use crate::model::HistoryError;

/// Integer cursor in `[0, bound)` with circular increment and decrement.
///
/// A bound of zero (nothing to address) puts the counter in its empty state:
/// `bound == 1`, `value == 0` and [`BoundedCounter::is_addressable`] is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    value: usize,
    bound: usize,
    addressable: bool,
}

impl BoundedCounter {
    /// Create a counter at zero.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidArgument` if `bound` is zero.
    pub fn new(bound: usize) -> Result<Self, HistoryError> {
        if bound == 0 {
            return Err(HistoryError::InvalidArgument {
                what: "counter bound",
                value: bound,
            });
        }
        Ok(Self {
            value: 0,
            bound,
            addressable: true,
        })
    }

    /// A counter over nothing.
    pub fn empty() -> Self {
        Self {
            value: 0,
            bound: 1,
            addressable: false,
        }
    }

    /// Current position.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Bound supplied by the last transition (1 in the empty state).
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Whether the position names a real item.
    pub fn is_addressable(&self) -> bool {
        self.addressable
    }

    /// Advance by one, wrapping to zero past `new_bound - 1`.
    pub fn increment(&mut self, new_bound: usize) {
        if self.rebound(new_bound) {
            self.value = (self.value % self.bound + 1) % self.bound;
        }
    }

    /// Step back by one, wrapping to `new_bound - 1` below zero.
    pub fn decrement(&mut self, new_bound: usize) {
        if self.rebound(new_bound) {
            self.value = (self.value % self.bound + self.bound - 1) % self.bound;
        }
    }

    /// Install `new_bound` and reset the position to zero.
    pub fn set_bound_and_clamp(&mut self, new_bound: usize) {
        self.rebound(new_bound);
        self.value = 0;
    }

    /// Install `new_bound`; returns false (and empties the counter) when it is zero.
    fn rebound(&mut self, new_bound: usize) -> bool {
        if new_bound == 0 {
            *self = Self::empty();
            return false;
        }
        self.bound = new_bound;
        self.addressable = true;
        true
    }
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self::empty()
    }
}
