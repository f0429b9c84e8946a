// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Capacity Check
//!
//! The cheap precondition both strategies run before touching a grid: the
//! roster must fit into the room at all. Failing it short-circuits the
//! solve with a `CapacityExceeded` error instead of a doomed search.

use seatwise_model::err::PlanError;
use seatwise_model::layout::RoomLayout;
use seatwise_model::roster::Roster;

/// Demand versus capacity for one problem instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityCheck {
    demand: usize,
    capacity: usize,
}

impl CapacityCheck {
    /// Computes the check for a roster and a layout.
    pub fn of(roster: &Roster, layout: &RoomLayout) -> Self {
        Self {
            demand: roster.num_students(),
            capacity: layout.total_capacity(),
        }
    }

    /// Returns the number of students to seat.
    #[inline]
    pub const fn demand(&self) -> usize {
        self.demand
    }

    /// Returns the number of seats in the room.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if every student has a seat, ignoring constraints.
    #[inline]
    pub const fn is_sufficient(&self) -> bool {
        self.demand <= self.capacity
    }

    /// Converts the check into a result, failing with `CapacityExceeded`.
    pub fn into_result(self) -> Result<(), PlanError> {
        if self.is_sufficient() {
            Ok(())
        } else {
            Err(PlanError::CapacityExceeded {
                demand: self.demand,
                capacity: self.capacity,
            })
        }
    }
}

impl std::fmt::Display for CapacityCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CapacityCheck(demand: {}, capacity: {})",
            self.demand, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwise_model::roster::ClassRange;

    fn roster_of(n: u32) -> Roster {
        Roster::from_ranges(&[ClassRange::new("9", 1, n).expect("range must be valid")])
    }

    #[test]
    fn test_sufficient_capacity() {
        let layout = RoomLayout::new(&[3], 2).expect("layout must be valid");
        let check = CapacityCheck::of(&roster_of(6), &layout);

        assert_eq!(check.demand(), 6);
        assert_eq!(check.capacity(), 6);
        assert!(check.is_sufficient());
        assert!(check.into_result().is_ok());
    }

    #[test]
    fn test_exceeded_capacity() {
        let layout = RoomLayout::new(&[3], 2).expect("layout must be valid");
        let check = CapacityCheck::of(&roster_of(7), &layout);

        assert!(!check.is_sufficient());
        assert_eq!(
            check.into_result(),
            Err(PlanError::CapacityExceeded {
                demand: 7,
                capacity: 6,
            })
        );
    }

    #[test]
    fn test_empty_roster_always_fits() {
        let layout = RoomLayout::new(&[1], 1).expect("layout must be valid");
        let check = CapacityCheck::of(&Roster::from_ranges(&[]), &layout);
        assert!(check.is_sufficient());
    }
}
