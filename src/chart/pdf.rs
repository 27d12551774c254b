use super::counts::{MoodCount, mood_rgb};
use super::terminal::CHART_TITLE;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Single-page PDF bar chart.
pub struct ChartPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,
    font_id: Ref,

    page_w: f32,
    page_h: f32,
    margin: f32,

    font_size: f32,
    title_font_size: f32,
}

impl Default for ChartPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // IDs managed by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,
            font_id,

            // A4 landscape
            page_w: 842.0,
            page_h: 595.0,
            margin: 60.0,

            font_size: 10.0,
            title_font_size: 16.0,
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn draw_vertical_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([0.0, 1.0, -1.0, 0.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    fn line(&self, content: &mut Content, x1: f32, y1: f32, x2: f32, y2: f32) {
        content.move_to(x1, y1);
        content.line_to(x2, y2);
        content.stroke();
    }

    /// Approximate Helvetica width, enough to center short labels.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    /// Draw the chart. An empty slice produces a page with axes only.
    pub fn draw(&mut self, counts: &[MoodCount]) {
        let mut content = Content::new();

        let x0 = self.margin + 30.0;
        let y0 = self.margin + 30.0;
        let plot_w = self.page_w - x0 - self.margin;
        let plot_h = self.page_h - y0 - self.margin - 40.0;

        // Title
        let tw = self.text_width(CHART_TITLE, self.title_font_size);
        self.draw_text(
            &mut content,
            (self.page_w - tw) / 2.0,
            self.page_h - self.margin,
            self.title_font_size,
            CHART_TITLE,
        );

        // Y scale
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);
        let step = if max <= 10 { 1 } else { max.div_ceil(10) };
        let top = max.div_ceil(step) * step;

        content.save_state();
        content.set_line_width(0.5);
        content.set_stroke_rgb(0.85, 0.85, 0.85);
        let mut tick = 0;
        while tick <= top {
            let y = y0 + plot_h * tick as f32 / top as f32;
            self.line(&mut content, x0, y, x0 + plot_w, y);
            tick += step;
        }
        content.restore_state();

        tick = 0;
        while tick <= top {
            let y = y0 + plot_h * tick as f32 / top as f32;
            let label = tick.to_string();
            let lw = self.text_width(&label, self.font_size);
            self.draw_text(&mut content, x0 - lw - 6.0, y - 3.0, self.font_size, &label);
            tick += step;
        }

        // Bars
        if !counts.is_empty() {
            let slot = plot_w / counts.len() as f32;
            let bar_w = slot * 0.6;

            for (i, c) in counts.iter().enumerate() {
                let (r, g, b) = mood_rgb(&c.mood);
                let h = plot_h * c.count as f32 / top as f32;
                let x = x0 + slot * i as f32 + (slot - bar_w) / 2.0;

                content.save_state();
                content.set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
                content.rect(x, y0, bar_w, h);
                content.fill_nonzero();
                content.restore_state();

                let label = c.mood.label();
                let lw = self.text_width(label, self.font_size);
                self.draw_text(
                    &mut content,
                    x + (bar_w - lw) / 2.0,
                    y0 - 14.0,
                    self.font_size,
                    label,
                );
            }
        }

        // Axes
        content.save_state();
        content.set_line_width(1.0);
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        self.line(&mut content, x0, y0, x0 + plot_w, y0);
        self.line(&mut content, x0, y0, x0, y0 + plot_h);
        content.restore_state();

        // Axis titles
        let mw = self.text_width("Mood", self.font_size + 1.0);
        self.draw_text(
            &mut content,
            x0 + (plot_w - mw) / 2.0,
            self.margin - 15.0,
            self.font_size + 1.0,
            "Mood",
        );
        self.draw_vertical_text(
            &mut content,
            self.margin - 20.0,
            y0 + plot_h / 2.0 - 15.0,
            self.font_size + 1.0,
            "Count",
        );

        {
            let mut page = self.pdf.page(self.page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(self.content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(self.content_id, &content.finish());
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf.pages(self.pages_id).kids([self.page_id]).count(1);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
