pub mod counts;
pub mod pdf;
pub mod terminal;

pub use counts::{MoodCount, count_moods, mood_rgb};
pub use pdf::ChartPdf;
pub use terminal::render_terminal;

use crate::errors::{AppError, AppResult};
use crate::models::MoodRecord;
use crate::ui::messages::{success, use_color, warning};
use std::io;
use std::path::Path;

/// Count moods and print the terminal chart. Returns false when there was
/// nothing to plot.
pub fn show_chart(history: &[MoodRecord], width: usize) -> bool {
    if history.is_empty() {
        warning("No mood history available to plot.");
        return false;
    }

    let counts = count_moods(history);
    println!();
    print!(
        "{}",
        render_terminal(&counts, width, use_color())
    );
    true
}

/// Write the chart as a one-page PDF.
pub fn save_chart_pdf(history: &[MoodRecord], path: &Path) -> AppResult<bool> {
    if history.is_empty() {
        warning("No mood history available to plot.");
        return Ok(false);
    }

    let mut pdf = ChartPdf::new();
    pdf.draw(&count_moods(history));
    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF chart error: {e}"))))?;

    success(format!("Chart saved: {}", path.display()));
    Ok(true)
}
