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

//! # Class Queues
//!
//! Per-class FIFO queues of unseated students, ordered by descending class
//! size. The seeding phase rotates over the queues so large classes spread
//! out early; within a class, students leave the queue in roster order and
//! an unplaced student simply stays at the head for the next round.

use seatwise_model::roster::{Roster, Student};
use std::collections::VecDeque;

/// Unseated students, grouped by class in descending size order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassQueues {
    queues: Vec<VecDeque<Student>>,
}

impl ClassQueues {
    /// Builds the queues from a roster. Queue order is descending class
    /// size, ties broken by interning order.
    pub fn from_roster(roster: &Roster) -> Self {
        let queues = roster
            .classes_by_size()
            .into_iter()
            .map(|class| {
                roster
                    .students()
                    .iter()
                    .copied()
                    .filter(|student| student.class() == class)
                    .collect()
            })
            .collect();
        Self { queues }
    }

    /// Returns the number of queues.
    #[inline]
    pub fn len(&self) -> usize {
        self.queues.len()
    }

    /// Returns `true` if there are no queues.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Returns the head of queue `index` without removing it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn peek(&self, index: usize) -> Option<Student> {
        debug_assert!(
            index < self.queues.len(),
            "called `ClassQueues::peek` with queue index out of bounds: the len is {} but the index is {}",
            self.queues.len(),
            index
        );
        self.queues[index].front().copied()
    }

    /// Removes and returns the head of queue `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn pop(&mut self, index: usize) -> Option<Student> {
        debug_assert!(
            index < self.queues.len(),
            "called `ClassQueues::pop` with queue index out of bounds: the len is {} but the index is {}",
            self.queues.len(),
            index
        );
        self.queues[index].pop_front()
    }

    /// Returns the total number of students still queued.
    pub fn total_remaining(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// Drains every queue into a single list, in queue order.
    pub fn drain_all(&mut self) -> Vec<Student> {
        let mut drained = Vec::with_capacity(self.total_remaining());
        for queue in &mut self.queues {
            drained.extend(queue.drain(..));
        }
        drained
    }
}
