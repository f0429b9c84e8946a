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

//! # Seatwise Solver
//!
//! The user-facing crate: describe classes as admit-number ranges and the
//! room as bench groups, pick a strategy, and get a seating arrangement
//! where no two classmates share a bench or sit too close in a seat
//! column.
//!
//! ```
//! use seatwise_solver::{ClassRange, RoomLayout, SeatingSolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ranges = vec![
//!     ClassRange::new("9A", 1, 2)?,
//!     ClassRange::new("9B", 1, 2)?,
//! ];
//! let layout = RoomLayout::new(&[2], 2)?;
//!
//! let arrangement = SeatingSolver::new().solve(&ranges, &layout)?;
//! assert_eq!(arrangement.num_seated(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Module map
//!
//! - [`strategy`]: strategy selection and solver configuration.
//! - [`solver`]: the [`solver::SeatingSolver`] facade.

pub mod solver;
pub mod strategy;

pub use seatwise_model::arrangement::Arrangement;
pub use seatwise_model::err::{ModelError, PlanError};
pub use seatwise_model::layout::RoomLayout;
pub use seatwise_model::roster::ClassRange;
pub use solver::SeatingSolver;
pub use strategy::{SolverConfig, Strategy};
