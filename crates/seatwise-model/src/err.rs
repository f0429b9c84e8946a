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

//! Error taxonomy for the seating model and planner.
//!
//! `ModelError` covers invalid construction input and is reported eagerly by
//! the builders, so the engines never see a malformed roster or layout.
//! `PlanError` is the caller-facing failure of a solve call: either the room
//! is simply too small (`CapacityExceeded`) or the chosen strategy could not
//! produce a complete valid arrangement (`Infeasible`).

/// An error raised while constructing rosters or room layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A class range was given an empty label.
    EmptyClassLabel,
    /// A class range has `start > end`.
    InvalidAdmitRange {
        label: String,
        start: u32,
        end: u32,
    },
    /// A group was configured with zero benches.
    ZeroBenchCount { group_index: usize },
    /// The layout was configured with zero seats per bench.
    ZeroSeatsPerBench,
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::EmptyClassLabel => {
                write!(f, "class range label must not be empty")
            }
            ModelError::InvalidAdmitRange { label, start, end } => {
                write!(
                    f,
                    "class range '{}' has start {} greater than end {}",
                    label, start, end
                )
            }
            ModelError::ZeroBenchCount { group_index } => {
                write!(f, "group at index {} must have at least one bench", group_index)
            }
            ModelError::ZeroSeatsPerBench => {
                write!(f, "layout must have at least one seat per bench")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// A seating plan failure reported to the caller.
///
/// Both variants are ordinary return values; an error path never exposes a
/// partially filled grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The roster demands more seats than the layout supplies. Detected
    /// before any placement work happens.
    CapacityExceeded { demand: usize, capacity: usize },
    /// The chosen strategy could not find a complete valid arrangement.
    Infeasible { message: String },
}

impl PlanError {
    /// Returns `true` if this is a capacity failure.
    #[inline]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, PlanError::CapacityExceeded { .. })
    }

    /// Returns `true` if this is an infeasibility failure.
    #[inline]
    pub fn is_infeasible(&self) -> bool {
        matches!(self, PlanError::Infeasible { .. })
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::CapacityExceeded { demand, capacity } => {
                write!(
                    f,
                    "not enough seats for all students: {} students but only {} seats",
                    demand, capacity
                )
            }
            PlanError::Infeasible { message } => {
                write!(f, "no valid seating arrangement found: {}", message)
            }
        }
    }
}

impl std::error::Error for PlanError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::InvalidAdmitRange {
            label: "10".to_string(),
            start: 9,
            end: 3,
        };
        assert_eq!(
            format!("{}", err),
            "class range '10' has start 9 greater than end 3"
        );

        assert_eq!(
            format!("{}", ModelError::ZeroSeatsPerBench),
            "layout must have at least one seat per bench"
        );
    }

    #[test]
    fn test_plan_error_display_and_predicates() {
        let capacity = PlanError::CapacityExceeded {
            demand: 10,
            capacity: 3,
        };
        assert!(capacity.is_capacity_exceeded());
        assert!(!capacity.is_infeasible());
        assert_eq!(
            format!("{}", capacity),
            "not enough seats for all students: 10 students but only 3 seats"
        );

        let infeasible = PlanError::Infeasible {
            message: "search space exhausted".to_string(),
        };
        assert!(infeasible.is_infeasible());
        assert!(format!("{}", infeasible).contains("search space exhausted"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_err: &E) {}
        assert_error(&ModelError::EmptyClassLabel);
        assert_error(&PlanError::Infeasible {
            message: String::new(),
        });
    }
}
