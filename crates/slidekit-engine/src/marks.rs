#![forbid(unsafe_code)]

//! Labelled positions along the track.
//!
//! Marks are rendering data only. They never influence value computation.

use serde::{Deserialize, Serialize};
use slidekit_core::NormalizedConfig;

use crate::value::RangeValue;

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub value: f64,
    pub label: String,
}

impl Mark {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Marks sorted by value, one per value.
///
/// Non-finite values are dropped on insertion; a later mark with the same
/// value replaces the earlier label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkSet {
    marks: Vec<Mark>,
}

impl MarkSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn insert(&mut self, mark: Mark) {
        if !mark.value.is_finite() {
            return;
        }
        match self
            .marks
            .binary_search_by(|probe| probe.value.total_cmp(&mark.value))
        {
            Ok(index) => self.marks[index] = mark,
            Err(index) => self.marks.insert(index, mark),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    /// Label of the mark sitting exactly on `value`.
    #[must_use]
    pub fn label_at(&self, value: f64) -> Option<&str> {
        self.marks
            .binary_search_by(|probe| probe.value.total_cmp(&value))
            .ok()
            .map(|index| self.marks[index].label.as_str())
    }

    /// `(percentage, mark)` for every mark inside `[min, max]`.
    pub fn positions<'a>(
        &'a self,
        config: &'a NormalizedConfig,
    ) -> impl Iterator<Item = (f64, &'a Mark)> + 'a {
        self.marks
            .iter()
            .filter(|mark| config.min() <= mark.value && mark.value <= config.max())
            .map(|mark| (config.to_percentage(mark.value), mark))
    }

    /// Single mode: a mark is active when it lies at or below `value`.
    #[must_use]
    pub fn is_active_single(mark: &Mark, value: f64) -> bool {
        mark.value <= value
    }

    /// Range mode: a mark is active when it lies inside the selected span.
    #[must_use]
    pub fn is_active_range(mark: &Mark, value: RangeValue) -> bool {
        value.contains(mark.value)
    }
}

impl FromIterator<Mark> for MarkSet {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        let mut set = Self::new();
        for mark in iter {
            set.insert(mark);
        }
        set
    }
}

impl<S: Into<String>> FromIterator<(f64, S)> for MarkSet {
    fn from_iter<I: IntoIterator<Item = (f64, S)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(value, label)| Mark::new(value, label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use slidekit_core::SliderConfig;

    #[test]
    fn marks_are_sorted_and_deduplicated() {
        let set: MarkSet = [(50.0, "half"), (0.0, "zero"), (f64::NAN, "bad"), (50.0, "mid")]
            .into_iter()
            .collect();
        let values: Vec<f64> = set.iter().map(|mark| mark.value).collect();
        assert_eq!(values, vec![0.0, 50.0]);
        assert_eq!(set.label_at(50.0), Some("mid"));
        assert_eq!(set.label_at(25.0), None);
    }

    #[test]
    fn positions_skip_out_of_range_marks() {
        let (config, _) = SliderConfig::new().range(0.0, 200.0).normalize();
        let set: MarkSet = [(-10.0, "below"), (50.0, "a"), (200.0, "end"), (300.0, "above")]
            .into_iter()
            .collect();
        let positions: Vec<(f64, &str)> = set
            .positions(&config)
            .map(|(percentage, mark)| (percentage, mark.label.as_str()))
            .collect();
        assert_eq!(positions, vec![(25.0, "a"), (100.0, "end")]);
    }

    #[test]
    fn active_marks_follow_selection() {
        let mark = Mark::new(40.0, "40");
        assert!(MarkSet::is_active_single(&mark, 40.0));
        assert!(!MarkSet::is_active_single(&mark, 39.0));
        assert!(MarkSet::is_active_range(&mark, RangeValue::new(20.0, 40.0)));
        assert!(!MarkSet::is_active_range(&mark, RangeValue::new(41.0, 60.0)));
    }
}
