//! Renderer-agnostic bar chart model.
//!
//! The chart describes what to draw: one bar per element, with the pair
//! under comparison marked. Front ends turn it into pixels or cells.

use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::instrument;

/// Title shown above every rendering of the chart.
pub const CHART_TITLE: &str = "Bubble Sort Progress";

/// The pair of indices currently being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Highlight {
    /// Left element of the comparison.
    pub first: usize,
    /// Right element of the comparison.
    pub second: usize,
}

impl Highlight {
    /// Highlight for the pair starting at `index`.
    pub fn pair_at(index: usize) -> Self {
        Self::new(index, index + 1)
    }
}

/// Visual role of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum BarRole {
    /// Not part of the current comparison.
    Normal,
    /// Left element of the comparison.
    First,
    /// Right element of the comparison.
    Second,
}

/// One bar of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ChartBar {
    /// Index of the element in the array.
    pub index: usize,
    /// Value of the element (bar height).
    pub value: u32,
    /// How the bar should be colored.
    pub role: BarRole,
}

/// Bar chart of an array with an optional highlighted pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    bars: Vec<ChartBar>,
    highlight: Option<Highlight>,
}

impl Chart {
    /// Builds a chart; highlight indices outside the array are skipped.
    #[instrument(skip(values), fields(len = values.len()))]
    pub fn new(values: &[u32], highlight: Option<Highlight>) -> Self {
        let role_of = |index: usize| match highlight {
            Some(h) if h.first == index => BarRole::First,
            Some(h) if h.second == index => BarRole::Second,
            _ => BarRole::Normal,
        };
        let bars = values
            .iter()
            .enumerate()
            .map(|(index, &value)| ChartBar::new(index, value, role_of(index)))
            .collect();
        Self { bars, highlight }
    }

    /// Returns the bars in array order.
    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    /// Returns the highlighted pair, if any.
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// Upper bound for the value axis: the tallest bar plus headroom.
    pub fn axis_max(&self) -> u32 {
        self.bars
            .iter()
            .map(|b| b.value)
            .max()
            .map_or(1, |m| m.saturating_add(2))
    }

    /// Renders the chart as plain text, `height` rows tall.
    ///
    /// Normal bars are drawn with `#`, the first highlighted bar with `<`
    /// and the second with `>`. An index row sits under the bars.
    pub fn render_text(&self, height: usize) -> String {
        let height = height.max(1);
        let max = self.axis_max() as usize;
        let width = self
            .bars
            .iter()
            .map(|b| b.value.to_string().len().max(b.index.to_string().len()))
            .max()
            .unwrap_or(1)
            + 1;

        let mut out = format!("{CHART_TITLE}\n");
        for row in (1..=height).rev() {
            let threshold = row * max;
            for bar in &self.bars {
                // Bar reaches this row when value/max >= row/height.
                let filled = bar.value as usize * height >= threshold;
                let glyph = match (filled, bar.role) {
                    (false, _) => ' ',
                    (true, BarRole::Normal) => '#',
                    (true, BarRole::First) => '<',
                    (true, BarRole::Second) => '>',
                };
                out.push_str(&format!("{:>width$}", glyph, width = width));
            }
            out.push('\n');
        }
        for bar in &self.bars {
            out.push_str(&format!("{:>width$}", bar.value, width = width));
        }
        out.push('\n');
        for bar in &self.bars {
            out.push_str(&format!("{:>width$}", bar.index, width = width));
        }
        out
    }
}
