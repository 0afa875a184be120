//! Dumb-terminal line chart.
//!
//! Layout, top to bottom:
//!
//! ```text
//!                      title
//! y label
//!       +---------------------+
//!  10.0 |               *     |
//!   5.0 |         *****  *    |
//!   0.0 |*********        *** |
//!       +---------------------+
//!        0        1        2
//!                    x label
//! ```

use crate::analyze::{ChartSeries, MetricKind};
use crate::cli::constants::{CHART_HEIGHT, CHART_WIDTH, MIN_CHART_HEIGHT, MIN_CHART_WIDTH};

// title, y label, two borders, x ticks, x label
const CHROME_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn for_metric(metric: MetricKind) -> Self {
        Self {
            title: metric.title().to_string(),
            x_label: "Time".to_string(),
            y_label: metric.axis_label().to_string(),
        }
    }
}

pub fn render_line_chart(series: &ChartSeries, labels: &ChartLabels, size: ChartSize) -> String {
    let width = size.width.max(MIN_CHART_WIDTH);
    let height = size.height.max(MIN_CHART_HEIGHT);

    let (lo, hi) = value_range(series.points());
    let plot_h = height - CHROME_ROWS;

    let ticks: Vec<(usize, String)> = [0, plot_h / 2, plot_h - 1]
        .into_iter()
        .map(|r| (r, format_tick(value_at(r, lo, hi, plot_h))))
        .collect();
    let tick_width = ticks.iter().map(|(_, t)| t.len()).max().unwrap_or(1);

    // "<ticks> |" on the left, "|" on the right
    let plot_w = width.saturating_sub(tick_width + 3).max(1);

    let mut grid = vec![vec![' '; plot_w]; plot_h];

    let cells: Vec<(usize, usize)> = series
        .points()
        .iter()
        .map(|&(i, v)| (column(i, series.len(), plot_w), row(v, lo, hi, plot_h)))
        .collect();

    if let [(x, y)] = cells.as_slice() {
        grid[*y][*x] = '*';
    }
    for pair in cells.windows(2) {
        draw_segment(&mut grid, pair[0], pair[1]);
    }

    if series.is_empty() {
        let msg: Vec<char> = "<no data>".chars().collect();
        let start = plot_w.saturating_sub(msg.len()) / 2;
        for (offset, c) in msg.into_iter().enumerate() {
            if let Some(cell) = grid[plot_h / 2].get_mut(start + offset) {
                *cell = c;
            }
        }
    }

    let mut lines = Vec::with_capacity(height);
    lines.push(center(&labels.title, width));
    lines.push(labels.y_label.clone());

    let border = format!("{}+{}+", " ".repeat(tick_width + 1), "-".repeat(plot_w));
    lines.push(border.clone());

    for (r, cells) in grid.iter().enumerate() {
        let tick = ticks
            .iter()
            .find(|(tick_row, _)| *tick_row == r)
            .map(|(_, t)| t.as_str())
            .unwrap_or("");
        let body: String = cells.iter().collect();
        lines.push(format!("{tick:>tick_width$} |{body}|"));
    }

    lines.push(border);
    lines.push(x_ticks(series, tick_width + 2, plot_w));
    lines.push(center(&labels.x_label, width));

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn value_range(points: &[(usize, f64)]) -> (f64, f64) {
    let (lo, hi) = points
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if lo > hi {
        (0.0, 1.0)
    } else if hi - lo < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

fn column(index: usize, count: usize, plot_w: usize) -> usize {
    if count <= 1 {
        return plot_w / 2;
    }
    let span = count - 1;
    ((index * (plot_w - 1) + span / 2) / span).min(plot_w - 1)
}

fn row(value: f64, lo: f64, hi: f64, plot_h: usize) -> usize {
    let frac = (hi - value) / (hi - lo);
    let r = (frac * (plot_h - 1) as f64).round();
    if r.is_nan() || r < 0.0 {
        0
    } else {
        (r as usize).min(plot_h - 1)
    }
}

fn value_at(row: usize, lo: f64, hi: f64, plot_h: usize) -> f64 {
    if plot_h <= 1 {
        return hi;
    }
    hi - (hi - lo) * row as f64 / (plot_h - 1) as f64
}

// Bresenham
fn draw_segment(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (mut x, mut y) = (from.0 as isize, from.1 as isize);
    let (x1, y1) = (to.0 as isize, to.1 as isize);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        grid[y as usize][x as usize] = '*';
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn x_ticks(series: &ChartSeries, offset: usize, plot_w: usize) -> String {
    let mut line = vec![' '; offset + plot_w + 1];
    let mut next_free = 0;

    for &(index, _) in series.points() {
        let label = index.to_string();
        let start = offset + column(index, series.len(), plot_w);
        if start < next_free || start + label.len() > line.len() {
            continue;
        }
        for (i, c) in label.chars().enumerate() {
            line[start + i] = c;
        }
        next_free = start + label.len() + 1;
    }

    line.into_iter().collect()
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(pad))
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
