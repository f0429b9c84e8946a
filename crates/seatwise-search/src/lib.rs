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

//! # Seatwise Search
//!
//! The shared search infrastructure both engines build on: the separation
//! rules, the capacity precondition, statistics, the outcome contract, and
//! the monitor seam.
//!
//! # Motivation
//!
//! The exact backtracker and the greedy repair engine disagree about how to
//! explore, but they agree on everything around the exploration: what a
//! valid placement is, when an instance cannot fit at all, what they hand
//! back, and how outsiders observe them. That common ground lives here so
//! the engine crates only contain strategy.
//!
//! # Module map
//!
//! - [`constraint`]: the horizontal and vertical separation rules.
//! - [`capacity`]: the demand-versus-capacity precondition.
//! - [`stats`]: counters collected during a solve.
//! - [`result`]: `SolveOutcome`, `SolveResult`, and `TerminationReason`.
//! - [`monitor`]: the `SearchMonitor` trait and stock monitors.

pub mod capacity;
pub mod constraint;
pub mod monitor;
pub mod result;
pub mod stats;
