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

//! # Search Stack
//!
//! The explicit depth-first stack of the backtracker. One frame per student
//! depth: the shuffled candidate list, a cursor into it, and the placement
//! the frame currently holds on the grid. Keeping the stack explicit bounds
//! memory by roster size and makes budget-based interruption trivial.

use seatwise_model::grid::Position;

/// One depth of the search: a student's candidates and current placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    candidates: Vec<Position>,
    cursor: usize,
    placed: Option<Position>,
}

impl Frame {
    /// Creates a frame over a candidate list, cursor at the start.
    #[inline]
    pub fn new(candidates: Vec<Position>) -> Self {
        Self {
            candidates,
            cursor: 0,
            placed: None,
        }
    }

    /// Advances the cursor and returns the next untried candidate, or `None`
    /// when the frame is exhausted.
    #[inline]
    pub fn next_candidate(&mut self) -> Option<Position> {
        let candidate = self.candidates.get(self.cursor).copied();
        if candidate.is_some() {
            self.cursor += 1;
        }
        candidate
    }

    /// Returns how many candidates remain untried.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.candidates.len() - self.cursor
    }

    /// Records the position this frame placed its student at.
    #[inline]
    pub fn set_placed(&mut self, position: Position) {
        debug_assert!(
            self.placed.is_none(),
            "called `Frame::set_placed` on a frame that already holds a placement"
        );
        self.placed = Some(position);
    }

    /// Takes the frame's placement, leaving it empty.
    #[inline]
    pub fn take_placed(&mut self) -> Option<Position> {
        self.placed.take()
    }
}

/// The stack of frames for the iterative depth-first search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStack {
    frames: Vec<Frame>,
}

impl SearchStack {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack with room for `depth` frames.
    #[inline]
    pub fn with_capacity(depth: usize) -> Self {
        Self {
            frames: Vec::with_capacity(depth),
        }
    }

    /// Pushes a frame.
    #[inline]
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pops the top frame.
    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Returns a mutable reference to the top frame.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Returns the current depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frames remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Clears all frames so the stack can be reused for another solve.
    #[inline]
    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwise_model::index::{BenchIndex, GroupIndex, SeatIndex};

    fn pos(bench: usize, seat: usize) -> Position {
        Position::new(
            GroupIndex::new(0),
            BenchIndex::new(bench),
            SeatIndex::new(seat),
        )
    }

    #[test]
    fn test_frame_iterates_candidates_in_order() {
        let mut frame = Frame::new(vec![pos(0, 0), pos(1, 1)]);
        assert_eq!(frame.remaining(), 2);
        assert_eq!(frame.next_candidate(), Some(pos(0, 0)));
        assert_eq!(frame.next_candidate(), Some(pos(1, 1)));
        assert_eq!(frame.next_candidate(), None);
        assert_eq!(frame.remaining(), 0);
    }

    #[test]
    fn test_frame_placement_round_trip() {
        let mut frame = Frame::new(vec![pos(0, 0)]);
        assert_eq!(frame.take_placed(), None);

        frame.set_placed(pos(0, 0));
        assert_eq!(frame.take_placed(), Some(pos(0, 0)));
        assert_eq!(frame.take_placed(), None);
    }

    #[test]
    fn test_stack_push_pop_depth() {
        let mut stack = SearchStack::with_capacity(4);
        assert!(stack.is_empty());

        stack.push(Frame::new(vec![pos(0, 0)]));
        stack.push(Frame::new(vec![]));
        assert_eq!(stack.depth(), 2);

        let top = stack.pop().expect("stack holds two frames");
        assert_eq!(top.remaining(), 0);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_last_mut_reaches_the_top_frame() {
        let mut stack = SearchStack::new();
        stack.push(Frame::new(vec![pos(0, 0), pos(0, 1)]));

        let top = stack.last_mut().expect("stack is non-empty");
        assert_eq!(top.next_candidate(), Some(pos(0, 0)));

        // The cursor advance is visible on the next access.
        let top = stack.last_mut().expect("stack is non-empty");
        assert_eq!(top.next_candidate(), Some(pos(0, 1)));
    }

    #[test]
    fn test_reset_empties_the_stack() {
        let mut stack = SearchStack::new();
        stack.push(Frame::new(vec![]));
        stack.reset();
        assert!(stack.is_empty());
    }
}
