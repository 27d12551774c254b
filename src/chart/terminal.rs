//! Horizontal bar chart for the terminal.

use super::counts::{MoodCount, mood_rgb};
use crate::models::Mood;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

pub const CHART_TITLE: &str = "Team Mood Analysis";

const BAR: &str = "█";

fn bar_colour(mood: &Mood) -> Colour {
    match mood_rgb(mood) {
        // black bars vanish on dark terminals
        (0, 0, 0) => Colour::Fixed(240),
        (r, g, b) => Colour::RGB(r, g, b),
    }
}

/// Bar length scaled to `width`; any non-zero count gets at least one cell.
fn bar_len(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * width).div_ceil(max).max(1)
}

pub fn render_terminal(counts: &[MoodCount], width: usize, color: bool) -> String {
    let mut out = String::new();
    out.push_str(CHART_TITLE);
    out.push('\n');

    let label_w = counts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.mood.label()))
        .chain(std::iter::once("Mood".len()))
        .max()
        .unwrap_or(4);
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);

    out.push_str(&format!("{:<label_w$} | Count\n", "Mood"));
    out.push_str(&format!("{}-+-{}\n", "-".repeat(label_w), "-".repeat(width + 6)));

    for c in counts {
        let label = c.mood.label();
        let pad = " ".repeat(label_w - UnicodeWidthStr::width(label));
        let bar = BAR.repeat(bar_len(c.count, max, width));
        let bar = if color {
            bar_colour(&c.mood).paint(bar).to_string()
        } else {
            bar
        };
        out.push_str(&format!("{label}{pad} | {bar} {}\n", c.count));
    }

    out
}
