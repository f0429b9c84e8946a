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

//! # Seatwise Model
//!
//! Core data model for the seat assignment engine: typed indices, the
//! student roster, the room layout, the mutable seating grid, and the final
//! arrangement handed back to callers.
//!
//! # Motivation
//!
//! The solver crates share one representation of the problem. Keeping it in
//! a dedicated crate fixes the vocabulary once: a `Student` is a `Copy`
//! value with an interned class identifier, a seat is a `Position`, the
//! search state is a flat `Grid`. Engines mutate grids; callers only ever
//! see an immutable `Arrangement`.
//!
//! # Module map
//!
//! - [`index`]: typed wrappers for group, bench, seat, and class indices.
//! - [`err`]: model validation errors and planning failures.
//! - [`roster`]: class ranges, students, and label interning.
//! - [`layout`]: bench groups, seat counts, and group naming.
//! - [`grid`]: the flat occupancy grid the engines search over.
//! - [`arrangement`]: the label-resolved result snapshot.

pub mod arrangement;
pub mod err;
pub mod grid;
pub mod index;
pub mod layout;
pub mod roster;
