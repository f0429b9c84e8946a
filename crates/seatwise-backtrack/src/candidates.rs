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

//! # Candidate Positions
//!
//! Enumerates the seats a student could take in the current grid. The
//! backtracker shuffles each candidate list so reruns with different seeds
//! explore different orders; the list is a snapshot, so candidates must be
//! re-validated against the live grid before committing.

use rand::seq::SliceRandom;
use rand::Rng;
use seatwise_model::grid::{Grid, Position};
use seatwise_model::index::ClassId;
use seatwise_search::constraint::SeparationRules;

/// Collects every empty seat where a student of `class` may sit, in grid
/// scan order.
pub fn collect_valid_positions(
    grid: &Grid,
    rules: &SeparationRules,
    class: ClassId,
) -> Vec<Position> {
    grid.positions()
        .filter(|&position| {
            grid.is_empty_slot(position) && rules.is_valid_placement(grid, position, class)
        })
        .collect()
}

/// Collects the valid seats for `class` and shuffles them with `rng`.
pub fn shuffled_valid_positions<R: Rng>(
    grid: &Grid,
    rules: &SeparationRules,
    class: ClassId,
    rng: &mut R,
) -> Vec<Position> {
    let mut candidates = collect_valid_positions(grid, rules, class);
    candidates.shuffle(rng);
    candidates
}
