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

//! # Roster Construction
//!
//! Turns user-facing class ranges into the flat, interned representation the
//! engines work with. Class labels are interned into `ClassId` indices so a
//! `Student` is a two-word `Copy` value; the constraint predicate compares
//! class identifiers instead of strings in its hot loop.
//!
//! Ranges are validated eagerly (`ClassRange::new`); a `Roster` built from
//! valid ranges is always internally consistent. Ranges that share a label
//! merge into a single class, with their students concatenated in input
//! order.

use crate::err::ModelError;
use crate::index::ClassId;
use rustc_hash::FxHashMap;

/// A contiguous range of admit numbers belonging to one class.
///
/// Expands to one `Student` per admit number in `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRange {
    label: String,
    start: u32,
    end: u32,
}

impl ClassRange {
    /// Creates a new class range.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyClassLabel` if `label` is empty and
    /// `ModelError::InvalidAdmitRange` if `start > end`.
    pub fn new(label: impl Into<String>, start: u32, end: u32) -> Result<Self, ModelError> {
        let label = label.into();
        if label.is_empty() {
            return Err(ModelError::EmptyClassLabel);
        }
        if start > end {
            return Err(ModelError::InvalidAdmitRange { label, start, end });
        }
        Ok(Self { label, start, end })
    }

    /// Returns the class label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the first admit number of the range.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Returns the last admit number of the range (inclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns the number of students this range expands to.
    ///
    /// Computed in `usize` so the widest valid range does not overflow the
    /// `+ 1`.
    #[inline]
    pub fn size(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

impl std::fmt::Display for ClassRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClassRange('{}', {}..={})", self.label, self.start, self.end)
    }
}

/// One student: an interned class identifier plus an admit number.
///
/// Deliberately `Copy` so grid slots, trail entries, and undo logs can store
/// students by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Student {
    class: ClassId,
    admit_no: u32,
}

impl Student {
    /// Creates a new student.
    #[inline]
    pub const fn new(class: ClassId, admit_no: u32) -> Self {
        Self { class, admit_no }
    }

    /// Returns the interned class identifier.
    #[inline]
    pub const fn class(&self) -> ClassId {
        self.class
    }

    /// Returns the admit number.
    #[inline]
    pub const fn admit_no(&self) -> u32 {
        self.admit_no
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Student(class: {}, no: {})", self.class.get(), self.admit_no)
    }
}

/// The full set of students to be seated, with interned class labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Interned labels; `labels[c]` is the label of `ClassId(c)`.
    labels: Vec<String>,
    /// All students in input order.
    students: Vec<Student>,
    /// `class_sizes[c]` is the number of students in `ClassId(c)`.
    class_sizes: Vec<usize>,
}

impl Roster {
    /// Builds a roster from validated class ranges.
    ///
    /// Ranges sharing a label are merged into one class; students keep the
    /// order of the input ranges.
    pub fn from_ranges(ranges: &[ClassRange]) -> Self {
        let mut labels: Vec<String> = Vec::new();
        let mut class_sizes: Vec<usize> = Vec::new();
        let mut students: Vec<Student> = Vec::new();
        let mut by_label: FxHashMap<&str, ClassId> = FxHashMap::default();

        for range in ranges {
            let class = match by_label.get(range.label()) {
                Some(&class) => class,
                None => {
                    let class = ClassId::new(labels.len());
                    labels.push(range.label().to_string());
                    class_sizes.push(0);
                    by_label.insert(range.label(), class);
                    class
                }
            };

            for admit_no in range.start()..=range.end() {
                students.push(Student::new(class, admit_no));
            }
            class_sizes[class.get()] += range.size();
        }

        Self {
            labels,
            students,
            class_sizes,
        }
    }

    /// Returns the total number of students.
    #[inline]
    pub fn num_students(&self) -> usize {
        self.students.len()
    }

    /// Returns `true` if the roster holds no students.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns the number of distinct classes.
    #[inline]
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    /// Returns the label of a class.
    ///
    /// # Panics
    ///
    /// Panics if `class` is out of bounds.
    #[inline]
    pub fn label(&self, class: ClassId) -> &str {
        debug_assert!(
            class.get() < self.labels.len(),
            "called `Roster::label` with class index out of bounds: the len is {} but the index is {}",
            self.labels.len(),
            class.get()
        );
        &self.labels[class.get()]
    }

    /// Returns the number of students in a class.
    ///
    /// # Panics
    ///
    /// Panics if `class` is out of bounds.
    #[inline]
    pub fn class_size(&self, class: ClassId) -> usize {
        debug_assert!(
            class.get() < self.class_sizes.len(),
            "called `Roster::class_size` with class index out of bounds: the len is {} but the index is {}",
            self.class_sizes.len(),
            class.get()
        );
        self.class_sizes[class.get()]
    }

    /// Returns all students in input order.
    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns all students ordered by descending class size, ties broken by
    /// original roster order.
    ///
    /// Larger classes are the most constrained, so the exact strategy places
    /// them first.
    pub fn students_by_class_size(&self) -> Vec<Student> {
        let mut ordered = self.students.clone();
        ordered.sort_by(|a, b| {
            self.class_size(b.class()).cmp(&self.class_size(a.class()))
        });
        ordered
    }

    /// Returns the class identifiers ordered by descending class size, ties
    /// broken by interning order.
    pub fn classes_by_size(&self) -> Vec<ClassId> {
        let mut classes: Vec<ClassId> = (0..self.num_classes()).map(ClassId::new).collect();
        classes.sort_by(|a, b| self.class_size(*b).cmp(&self.class_size(*a)));
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(label: &str, start: u32, end: u32) -> ClassRange {
        ClassRange::new(label, start, end).expect("test range must be valid")
    }

    #[test]
    fn test_class_range_validation() {
        assert_eq!(ClassRange::new("", 1, 5), Err(ModelError::EmptyClassLabel));
        assert_eq!(
            ClassRange::new("9", 5, 1),
            Err(ModelError::InvalidAdmitRange {
                label: "9".to_string(),
                start: 5,
                end: 1,
            })
        );

        let valid = range("9", 1, 5);
        assert_eq!(valid.size(), 5);
        assert_eq!(valid.label(), "9");
    }

    #[test]
    fn test_single_student_range() {
        let one = range("12", 7, 7);
        assert_eq!(one.size(), 1);
    }

    #[test]
    fn test_widest_range_size_does_not_overflow() {
        let widest = range("x", 0, u32::MAX);
        assert_eq!(widest.size(), 1 << 32);
    }

    #[test]
    fn test_roster_expansion_preserves_input_order() {
        let roster = Roster::from_ranges(&[range("1", 1, 3), range("2", 10, 11)]);

        assert_eq!(roster.num_students(), 5);
        assert_eq!(roster.num_classes(), 2);

        let admit_nos: Vec<u32> = roster.students().iter().map(|s| s.admit_no()).collect();
        assert_eq!(admit_nos, vec![1, 2, 3, 10, 11]);

        assert_eq!(roster.label(ClassId::new(0)), "1");
        assert_eq!(roster.label(ClassId::new(1)), "2");
        assert_eq!(roster.class_size(ClassId::new(0)), 3);
        assert_eq!(roster.class_size(ClassId::new(1)), 2);
    }

    #[test]
    fn test_ranges_with_same_label_merge() {
        let roster = Roster::from_ranges(&[range("7", 1, 2), range("8", 1, 1), range("7", 20, 21)]);

        assert_eq!(roster.num_classes(), 2);
        assert_eq!(roster.class_size(ClassId::new(0)), 4);
        assert_eq!(roster.class_size(ClassId::new(1)), 1);

        // The merged class keeps both ranges' students.
        let class_seven: Vec<u32> = roster
            .students()
            .iter()
            .filter(|s| s.class() == ClassId::new(0))
            .map(|s| s.admit_no())
            .collect();
        assert_eq!(class_seven, vec![1, 2, 20, 21]);
    }

    #[test]
    fn test_students_by_class_size_is_descending_and_stable() {
        let roster = Roster::from_ranges(&[range("small", 1, 2), range("big", 1, 4)]);

        let ordered = roster.students_by_class_size();
        assert_eq!(ordered.len(), 6);

        // The four "big" students come first, in their original order.
        for student in &ordered[..4] {
            assert_eq!(roster.label(student.class()), "big");
        }
        let big_nos: Vec<u32> = ordered[..4].iter().map(|s| s.admit_no()).collect();
        assert_eq!(big_nos, vec![1, 2, 3, 4]);

        for student in &ordered[4..] {
            assert_eq!(roster.label(student.class()), "small");
        }
    }

    #[test]
    fn test_equal_sizes_keep_roster_order() {
        let roster = Roster::from_ranges(&[range("a", 1, 2), range("b", 1, 2)]);
        let ordered = roster.students_by_class_size();

        // Stable sort: class "a" stays ahead of class "b".
        assert_eq!(roster.label(ordered[0].class()), "a");
        assert_eq!(roster.label(ordered[2].class()), "b");

        let classes = roster.classes_by_size();
        assert_eq!(classes, vec![ClassId::new(0), ClassId::new(1)]);
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::from_ranges(&[]);
        assert!(roster.is_empty());
        assert_eq!(roster.num_students(), 0);
        assert_eq!(roster.num_classes(), 0);
        assert!(roster.students_by_class_size().is_empty());
    }
}
