use core::fmt;
use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::check::{Sample, UlpCheck};
use crate::core::histogram::Histogram;

pub const DEFAULT_MAX_LINES: usize = 100;
pub const DEFAULT_BAR_WIDTH: usize = 80;

/// Gaps of up to this many missing keys are drawn as zero rows.
const FILL_SPAN: u64 = 3;

/// Geometric step of the threshold search.
const THRESHOLD_DECAY: f64 = 0.7;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderOptions {
    /// Most chart rows printed before truncating (markers included).
    pub max_lines: usize,
    /// Bar length of the most populated bucket.
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

/// One row of the chart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Line {
    /// A bucket, or a zero row filling a short gap.
    Bucket {
        key: u64,
        count: u64,
        /// Share of all samples, rounded to the nearest percent.
        percent: u64,
        /// Bar length in characters.
        bar: usize,
    },
    /// `//`: keys skipped between two rows.
    Gap,
    /// `+++`: rows dropped to stay within the line budget.
    Truncated,
}

/// Rendered histogram plus the worst sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report<V> {
    lines: Vec<Line>,
    margin: usize,
    worst: Option<Sample<V>>,
}

impl<V> Report<V> {
    fn empty() -> Self {
        Self {
            lines: Vec::new(),
            margin: 0,
            worst: None,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn worst(&self) -> Option<&Sample<V>> {
        self.worst.as_ref()
    }

    /// Width the keys are right-aligned to.
    pub fn margin(&self) -> usize {
        self.margin
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.lines.last() == Some(&Line::Truncated)
    }
}

impl<V: fmt::Debug> Report<V> {
    pub fn write_to<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl<V: fmt::Debug> fmt::Display for Report<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let margin = self.margin;

        for line in &self.lines {
            match *line {
                Line::Bucket { key, count, percent, bar } => {
                    write!(f, "{key:>margin$}|{percent:>3}%  ")?;
                    if bar > 0 {
                        write!(f, "{}", "*".repeat(bar))?;
                    } else if count > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str("\n")?;
                }
                Line::Gap => f.write_str("//\n")?,
                Line::Truncated => f.write_str("+++\n")?,
            }
        }

        // Debug on floats is the shortest text that parses back to the same value
        if let Some(w) = &self.worst {
            writeln!(f, "worst case:")?;
            writeln!(f, "x:       {:?}", w.x)?;
            writeln!(f, "ref(x):  {:?}", w.reference)?;
            writeln!(f, "eval(x): {:?}", w.candidate)?;
            writeln!(f, "abserr:  {:?}", w.error.abs)?;
            writeln!(f, "ulperr:  {:?}", w.error.ulps)?;
        }
        Ok(())
    }
}

/// Bar and percentage arithmetic shared by every row.
struct Scale {
    max_count: u64,
    bar_width: usize,
    total: u64,
}

impl Scale {
    fn row(&self, key: u64, count: u64) -> Line {
        let percent = if self.total == 0 {
            0
        } else {
            (100.0 * count as f64 / self.total as f64).round() as u64
        };
        // floor(count / (max_count / bar_width)), in integers
        let bar = if self.max_count == 0 {
            0
        } else {
            (count as u128 * self.bar_width as u128 / self.max_count as u128) as usize
        };

        Line::Bucket { key, count, percent, bar }
    }
}

/// How runs of missing or elided keys between rows are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Gaps {
    /// Zero rows for runs of up to [`FILL_SPAN`] keys, `//` for longer ones.
    Fill,
    /// `//` for every run.
    Mark,
    /// Nothing; rows follow each other directly.
    Omit,
}

/// Rows for every bucket with `count >= threshold`.
///
/// Skipped keys before the first kept bucket and after the last one count
/// as runs too, so an elided head or tail is still marked.
fn layout(histogram: &Histogram, threshold: f64, gaps: Gaps, scale: &Scale) -> Vec<Line> {
    let mut lines = Vec::new();
    let (Some(mut next), Some(max_key)) = (histogram.min_key(), histogram.max_key()) else {
        return lines;
    };
    let mut last = None;

    for (key, count) in histogram.iter() {
        if (count as f64) < threshold {
            continue;
        }

        let run = key - next;
        match gaps {
            _ if run == 0 => {}
            Gaps::Fill if run <= FILL_SPAN => lines.extend((next..key).map(|k| scale.row(k, 0))),
            Gaps::Fill | Gaps::Mark => lines.push(Line::Gap),
            Gaps::Omit => {}
        }

        lines.push(scale.row(key, count));
        next = key.saturating_add(1);
        last = Some(key);
    }

    if last != Some(max_key) && gaps != Gaps::Omit {
        lines.push(Line::Gap);
    }
    lines
}

/// Every bucket, with the most detailed gap drawing that fits in `max_lines`.
/// Only called with at most `max_lines` buckets, so the last resort fits.
fn layout_all(histogram: &Histogram, max_lines: usize, scale: &Scale) -> Vec<Line> {
    [Gaps::Fill, Gaps::Mark]
        .into_iter()
        .map(|gaps| layout(histogram, 0.0, gaps, scale))
        .find(|lines| lines.len() <= max_lines)
        .unwrap_or_else(|| layout(histogram, 0.0, Gaps::Omit, scale))
}

/// Lowest count threshold whose layout fits in `max_lines`, never below the
/// count worth one bar character.
///
/// Geometric steps from the largest count bracket the answer; the distinct
/// counts inside the bracket are then bisected. Rows only grow as the
/// threshold drops, so the counts that fit form a prefix.
fn select_threshold(histogram: &Histogram, options: &RenderOptions, scale: &Scale) -> f64 {
    let max_count = scale.max_count as f64;
    let floor = max_count / options.bar_width.max(1) as f64;
    let fits = |threshold: f64| {
        layout(histogram, threshold, Gaps::Mark, scale).len() <= options.max_lines
    };

    let mut threshold = max_count;
    let mut next = threshold * THRESHOLD_DECAY;
    while next >= floor && fits(next) {
        threshold = next;
        next *= THRESHOLD_DECAY;
    }

    let lowest = next.max(floor);
    let mut counts: Vec<u64> = histogram
        .iter()
        .map(|(_, count)| count)
        .filter(|&count| (count as f64) >= lowest && (count as f64) < threshold)
        .collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.dedup();

    match counts.partition_point(|&count| fits(count as f64)) {
        0 => threshold,
        n => counts[n - 1] as f64,
    }
}

/// Render a check into a report of at most `max_lines` chart rows plus a
/// truncation marker. An empty check renders nothing at all.
///
/// When the histogram has no more than `max_lines` buckets every one of them
/// is shown; otherwise the lightest buckets are elided.
pub fn render<V: Copy>(check: &UlpCheck<V>, options: &RenderOptions) -> Report<V> {
    let histogram = &check.histogram;
    if histogram.is_empty() {
        return Report::empty();
    }

    let scale = Scale {
        max_count: histogram.max_count(),
        bar_width: options.bar_width,
        total: histogram.total(),
    };

    let mut lines = if histogram.len() <= options.max_lines {
        layout_all(histogram, options.max_lines, &scale)
    } else {
        let threshold = select_threshold(histogram, options, &scale);
        layout(histogram, threshold, Gaps::Mark, &scale)
    };

    if lines.len() > options.max_lines {
        lines.truncate(options.max_lines);
        if lines.last() == Some(&Line::Gap) {
            lines.pop();
        }
        lines.push(Line::Truncated);
    }

    let margin = histogram
        .max_key()
        .and_then(|k| k.checked_ilog10())
        .map_or(1, |d| d as usize + 1);

    Report {
        lines,
        margin,
        worst: check.worst,
    }
}
