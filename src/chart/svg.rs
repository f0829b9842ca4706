//! Standalone SVG rendering of a [`LineChart`].

use std::fmt::Write;

use super::model::LineChart;
use super::scale::{ChartScale, format_tick};
use super::{ChartRenderer, series_color};

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 180.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 48.0;

/// Renders charts as self-contained SVG documents.
#[derive(Clone, Copy, Debug)]
pub struct SvgRenderer {
    pub width: f64,
    pub height: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 420.0,
        }
    }
}

impl SvgRenderer {
    fn plot_width(&self) -> f64 {
        (self.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0)
    }

    fn plot_height(&self) -> f64 {
        (self.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0)
    }

    fn to_x(&self, fraction: f64) -> f64 {
        MARGIN_LEFT + fraction * self.plot_width()
    }

    fn to_y(&self, fraction: f64) -> f64 {
        MARGIN_TOP + (1.0 - fraction) * self.plot_height()
    }

    fn open(&self, out: &mut String) {
        let _ = writeln!(
            out,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"##,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(out, r##"  <rect width="100%" height="100%" fill="#ffffff"/>"##);
    }
}

impl ChartRenderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, chart: &LineChart) -> String {
        let scale = ChartScale::for_chart(chart);
        let mut out = String::new();
        self.open(&mut out);
        let _ = writeln!(
            out,
            r##"  <text x="{}" y="24" font-size="15" font-weight="600" fill="#374151">{}</text>"##,
            MARGIN_LEFT,
            escape(&chart.title)
        );

        let (left, right) = (self.to_x(0.0), self.to_x(1.0));
        let (top, bottom) = (self.to_y(1.0), self.to_y(0.0));
        let ticks = scale.y_ticks(5);
        for tick in &ticks {
            let y = self.to_y(scale.y_fraction(*tick));
            let _ = writeln!(
                out,
                r##"  <line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#e5e7eb"/>"##
            );
            let _ = writeln!(
                out,
                r##"  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="#6b7280">{}</text>"##,
                left - 6.0,
                y + 4.0,
                format_tick(*tick, &ticks)
            );
        }
        for year in scale.years() {
            let Some(fraction) = scale.x_fraction(*year) else {
                continue;
            };
            let _ = writeln!(
                out,
                r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="#6b7280">{year}</text>"##,
                self.to_x(fraction),
                bottom + 16.0
            );
        }
        let _ = writeln!(
            out,
            r##"  <path d="M{left:.1},{top:.1} L{left:.1},{bottom:.1} L{right:.1},{bottom:.1}" fill="none" stroke="#9ca3af"/>"##
        );
        let _ = writeln!(
            out,
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="#6b7280">{}</text>"##,
            (left + right) / 2.0,
            self.height - 10.0,
            escape(&chart.x_label)
        );
        let _ = writeln!(
            out,
            r##"  <text x="16" y="{mid:.1}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 16, {mid:.1})">{}</text>"##,
            escape(&chart.y_label),
            mid = (top + bottom) / 2.0
        );

        for (index, series) in chart.series.iter().enumerate() {
            let [r, g, b] = series_color(index);
            let color = format!("#{r:02x}{g:02x}{b:02x}");
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .filter_map(|(year, value)| {
                    let x = self.to_x(scale.x_fraction(*year)?);
                    Some((x, self.to_y(scale.y_fraction(*value))))
                })
                .collect();
            let path: Vec<String> = points
                .iter()
                .enumerate()
                .map(|(i, (x, y))| format!("{}{x:.1},{y:.1}", if i == 0 { 'M' } else { 'L' }))
                .collect();
            let _ = writeln!(
                out,
                r##"  <path d="{}" fill="none" stroke="{color}" stroke-width="2"/>"##,
                path.join(" ")
            );
            for (x, y) in &points {
                let _ = writeln!(
                    out,
                    r##"  <circle cx="{x:.1}" cy="{y:.1}" r="3.5" fill="{color}"/>"##
                );
            }
            let legend_y = MARGIN_TOP + 8.0 + index as f64 * 18.0;
            let legend_x = right + 16.0;
            let _ = writeln!(
                out,
                r##"  <line x1="{legend_x:.1}" y1="{legend_y:.1}" x2="{:.1}" y2="{legend_y:.1}" stroke="{color}" stroke-width="2"/>"##,
                legend_x + 18.0
            );
            let _ = writeln!(
                out,
                r##"  <text x="{:.1}" y="{:.1}" font-size="11" fill="#374151">{}</text>"##,
                legend_x + 24.0,
                legend_y + 4.0,
                escape(&series.label)
            );
        }
        out.push_str("</svg>\n");
        out
    }

    fn no_data(&mut self, message: &str) -> String {
        let mut out = String::new();
        self.open(&mut out);
        let _ = writeln!(
            out,
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13" fill="#6b7280">{}</text>"##,
            self.width / 2.0,
            self.height / 2.0,
            escape(message)
        );
        out.push_str("</svg>\n");
        out
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
