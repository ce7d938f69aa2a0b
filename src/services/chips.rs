// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chip layout: how many labels fit in a row before a "+N more" chip.
//!
//! The decision is a pure function of label widths and available width.
//! Measuring text is left to a [`ChipMeasure`] supplied by the renderer.

/// Text measurement supplied by the rendering surface.
pub trait ChipMeasure {
    /// Rendered width of one chip with this label, padding included.
    fn chip_width(&self, label: &str) -> f64;

    /// Horizontal gap between adjacent chips.
    fn gap(&self) -> f64 {
        0.0
    }

    /// Bumped whenever measurements change at the same width, for example
    /// after a web font finishes loading.
    fn generation(&self) -> u64 {
        0
    }
}

/// Monospace approximation, useful when no renderer is attached.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMeasure {
    pub char_width: f64,
    pub padding: f64,
    pub gap: f64,
}

impl Default for FixedWidthMeasure {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            padding: 16.0,
            gap: 4.0,
        }
    }
}

impl ChipMeasure for FixedWidthMeasure {
    fn chip_width(&self, label: &str) -> f64 {
        label.chars().count() as f64 * self.char_width + self.padding
    }

    fn gap(&self) -> f64 {
        self.gap
    }
}

/// Text of the overflow chip.
pub fn overflow_label(hidden: usize) -> String {
    format!("+{} more", hidden)
}

/// Committed layout for one chip row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChipLayout {
    /// Number of leading labels shown
    pub visible: usize,
    /// Number of labels folded into the overflow chip
    pub hidden: usize,
}

impl ChipLayout {
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| overflow_label(self.hidden))
    }
}

/// Choose the largest prefix `k` such that `k` chips plus the overflow chip
/// (when labels remain) fit in `available`.
///
/// Tries `k = 1, 2, ...` and stops at the first trial that overflows. When
/// not even one chip fits, `k` is 0 and only the overflow chip is shown.
pub fn fit_chips<M: ChipMeasure + ?Sized>(labels: &[String], measure: &M, available: f64) -> ChipLayout {
    let total = labels.len();
    let gap = measure.gap();
    let widths: Vec<f64> = labels.iter().map(|l| measure.chip_width(l)).collect();

    let trial_width = |k: usize| -> f64 {
        let shown: f64 = widths[..k].iter().sum();
        let hidden = total - k;
        let (overflow, chips) = if hidden > 0 {
            (measure.chip_width(&overflow_label(hidden)), k + 1)
        } else {
            (0.0, k)
        };
        shown + overflow + gap * chips.saturating_sub(1) as f64
    };

    let mut visible = 0;
    for k in 1..=total {
        if trial_width(k) <= available {
            visible = k;
        } else {
            break;
        }
    }

    ChipLayout {
        visible,
        hidden: total - visible,
    }
}

/// Inputs a cached layout was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutKey {
    width: f64,
    generation: u64,
}

/// A chip row that re-runs layout only when its width, labels or
/// measurements change.
#[derive(Debug, Clone, Default)]
pub struct ChipRow {
    labels: Vec<String>,
    laid_out: Option<(LayoutKey, ChipLayout)>,
}

impl ChipRow {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            laid_out: None,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        if labels != self.labels {
            self.labels = labels;
            self.laid_out = None;
        }
    }

    /// Drop the cached layout so the next call re-measures. Use when the
    /// measure changed without bumping its generation.
    pub fn invalidate(&mut self) {
        self.laid_out = None;
    }

    /// Lay out for the given width, reusing the last result when nothing changed.
    pub fn layout<M: ChipMeasure + ?Sized>(&mut self, measure: &M, available: f64) -> &ChipLayout {
        let key = LayoutKey {
            width: available,
            generation: measure.generation(),
        };
        let stale = !matches!(&self.laid_out, Some((cached, _)) if *cached == key);
        if stale {
            let layout = fit_chips(&self.labels, measure, available);
            self.laid_out = Some((key, layout));
        }
        match &self.laid_out {
            Some((_, layout)) => layout,
            None => unreachable!("layout computed above"),
        }
    }

    /// Labels to render: the visible prefix, then the overflow chip if any.
    pub fn rendered(&self) -> Vec<String> {
        let Some((_, layout)) = &self.laid_out else {
            return Vec::new();
        };
        let mut out: Vec<String> = self.labels[..layout.visible].to_vec();
        out.extend(layout.overflow_label());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every chip is 10px wide with no gap.
    struct Uniform;

    impl ChipMeasure for Uniform {
        fn chip_width(&self, _label: &str) -> f64 {
            10.0
        }
    }

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Tag{}", i)).collect()
    }

    #[test]
    fn test_all_fit_without_overflow() {
        let layout = fit_chips(&labels(3), &Uniform, 30.0);
        assert_eq!(layout, ChipLayout { visible: 3, hidden: 0 });
        assert_eq!(layout.overflow_label(), None);
    }

    #[test]
    fn test_partial_fit_reserves_overflow() {
        // k=2 needs 2 chips + overflow = 30
        let layout = fit_chips(&labels(5), &Uniform, 35.0);
        assert_eq!(layout, ChipLayout { visible: 2, hidden: 3 });
        assert_eq!(layout.overflow_label().as_deref(), Some("+3 more"));
    }

    #[test]
    fn test_nothing_fits_shows_full_count() {
        let layout = fit_chips(&labels(4), &Uniform, 5.0);
        assert_eq!(layout, ChipLayout { visible: 0, hidden: 4 });
        assert_eq!(layout.overflow_label().as_deref(), Some("+4 more"));
    }

    #[test]
    fn test_empty_labels() {
        let layout = fit_chips(&[], &Uniform, 100.0);
        assert_eq!(layout, ChipLayout { visible: 0, hidden: 0 });
    }

    #[test]
    fn test_gap_counts_between_chips() {
        let measure = FixedWidthMeasure {
            char_width: 0.0,
            padding: 10.0,
            gap: 5.0,
        };
        // two chips: 10 + 5 + 10
        assert_eq!(fit_chips(&labels(2), &measure, 25.0).visible, 2);
        assert_eq!(fit_chips(&labels(2), &measure, 24.0).visible, 0);
    }

    #[test]
    fn test_chip_row_relayout_on_change() {
        let mut row = ChipRow::new(labels(4));
        assert_eq!(row.layout(&Uniform, 25.0).visible, 1);
        assert_eq!(row.rendered(), vec!["Tag0", "+3 more"]);

        // Same inputs, same output
        assert_eq!(row.layout(&Uniform, 25.0).visible, 1);

        assert_eq!(row.layout(&Uniform, 40.0).visible, 4);
        assert_eq!(row.rendered().len(), 4);

        row.set_labels(labels(6));
        assert!(row.rendered().is_empty());
        assert_eq!(row.layout(&Uniform, 40.0).visible, 3);
    }

    /// Fixed-width chips whose width changes once fonts load.
    struct Loadable {
        width: f64,
        generation: u64,
    }

    impl ChipMeasure for Loadable {
        fn chip_width(&self, _label: &str) -> f64 {
            self.width
        }

        fn generation(&self) -> u64 {
            self.generation
        }
    }

    #[test]
    fn test_chip_row_relayout_after_font_load() {
        let mut row = ChipRow::new(labels(4));
        let mut measure = Loadable {
            width: 10.0,
            generation: 0,
        };
        assert_eq!(row.layout(&measure, 50.0).visible, 4);

        measure.width = 20.0;
        measure.generation = 1;
        assert_eq!(row.layout(&measure, 50.0).visible, 1);
        assert_eq!(row.rendered(), vec!["Tag0", "+3 more"]);
    }

    #[test]
    fn test_chip_row_invalidate() {
        let mut row = ChipRow::new(labels(4));
        assert_eq!(row.layout(&Uniform, 50.0).visible, 4);

        // Different measure, same generation: cached until invalidated
        let wide = FixedWidthMeasure {
            char_width: 0.0,
            padding: 20.0,
            gap: 0.0,
        };
        assert_eq!(row.layout(&wide, 50.0).visible, 4);
        row.invalidate();
        assert!(row.rendered().is_empty());
        assert_eq!(row.layout(&wide, 50.0).visible, 1);
    }
}
