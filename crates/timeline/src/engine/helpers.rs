// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use serde::Serialize;

/// Clamp a fraction of the timeline into `[0, 1]`.  NaN becomes 0.
pub(crate) fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// `numerator / denominator` as a fraction of the timeline.  A zero
/// denominator gives 0 rather than infinity.
pub(crate) fn fraction_of(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    clamp_fraction(numerator as f64 / denominator as f64)
}

/// A fraction as a percentage rounded to the nearest 0.1 (e.g. for CSS
/// `left`/`width`)
pub fn as_percentage(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

/// The first few items of a list plus how many were left out (e.g. tags shown
/// as `a b c d +2 more`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview<'a, T> {
    pub shown: &'a [T],
    pub hidden: usize,
}

impl<'a, T> Preview<'a, T> {
    pub fn of(items: &'a [T], limit: usize) -> Self {
        let shown = &items[..items.len().min(limit)];
        Preview {
            shown,
            hidden: items.len() - shown.len(),
        }
    }

    /// The `+N more` text, if anything was left out
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp_fraction() {
        assert_eq!(clamp_fraction(-0.5), 0.0);
        assert_eq!(clamp_fraction(0.25), 0.25);
        assert_eq!(clamp_fraction(1.5), 1.0);
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
    }

    #[test]
    fn test_fraction_of() {
        assert_eq!(fraction_of(12, 48), 0.25);
        assert_eq!(fraction_of(60, 48), 1.0);
        assert_eq!(fraction_of(-1, 48), 0.0);
        assert_eq!(fraction_of(5, 0), 0.0);
    }

    #[test]
    fn test_as_percentage() {
        assert_eq!(as_percentage(0.25), 25.0);
        assert_eq!(as_percentage(1.0 / 3.0), 33.3);
        assert_eq!(as_percentage(0.0), 0.0);
    }

    #[test]
    fn preview() {
        let tags = ["a", "b", "c", "d", "e", "f"];
        let preview = Preview::of(&tags, 4);
        assert_eq!(preview.shown, &["a", "b", "c", "d"]);
        assert_eq!(preview.hidden, 2);
        assert_eq!(preview.overflow_label(), Some("+2 more".to_string()));

        let preview = Preview::of(&tags[..2], 4);
        assert_eq!(preview.shown.len(), 2);
        assert_eq!(preview.hidden, 0);
        assert_eq!(preview.overflow_label(), None);

        let preview = Preview::of(&tags, 0);
        assert!(preview.shown.is_empty());
        assert_eq!(preview.hidden, 6);
    }
}
