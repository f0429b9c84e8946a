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

//! # Slot Undo Log
//!
//! Records every slot a repair attempt touches so a failed attempt can be
//! rolled back exactly. All grid mutation during repair goes through the
//! log; rolling back replays the recorded previous values in reverse order,
//! committing simply drops them.

use seatwise_model::grid::{Grid, Position};
use seatwise_model::roster::Student;

/// One recorded slot mutation: where, and what was there before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotChange {
    position: Position,
    previous: Option<Student>,
}

impl SlotChange {
    /// Returns the mutated position.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the occupant before the mutation.
    #[inline]
    pub const fn previous(&self) -> Option<Student> {
        self.previous
    }
}

/// An undo log over grid slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotLog {
    changes: Vec<SlotChange>,
}

impl SlotLog {
    /// Creates an empty log.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log with room for `capacity` changes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: Vec::with_capacity(capacity),
        }
    }

    /// Writes a slot through the log, recording its previous occupant.
    pub fn set(&mut self, grid: &mut Grid, position: Position, value: Option<Student>) {
        let previous = grid.set_slot(position, value);
        self.changes.push(SlotChange { position, previous });
    }

    /// Undoes every recorded change, newest first, restoring the grid to
    /// its state before the log started recording.
    pub fn rollback(&mut self, grid: &mut Grid) {
        while let Some(change) = self.changes.pop() {
            grid.set_slot(change.position, change.previous);
        }
    }

    /// Accepts the recorded changes and clears the log.
    #[inline]
    pub fn commit(&mut self) {
        self.changes.clear();
    }

    /// Returns the number of recorded changes.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if nothing is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
