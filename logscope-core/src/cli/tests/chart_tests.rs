use crate::analyze::{BucketKey, ChartSeries, MetricKind, Reading};
use crate::cli::{ChartLabels, ChartSize, render_line_chart};
use pretty_assertions::assert_eq;

fn series(values: &[(&str, f64)]) -> ChartSeries {
    ChartSeries::from_readings(
        values
            .iter()
            .map(|(bucket, value)| Reading {
                bucket: BucketKey::from(*bucket),
                value: *value,
            })
            .collect(),
    )
}

fn labels() -> ChartLabels {
    ChartLabels::for_metric(MetricKind::Latency)
}

fn stars(chart: &str) -> usize {
    chart.chars().filter(|c| *c == '*').count()
}

#[test]
fn default_chart_has_fixed_height() {
    // Arrange
    let series = series(&[("2023-10-07", 1.0), ("2023-10-08", 2.0), ("2023-10-09", 4.0)]);

    // Act
    let chart = render_line_chart(&series, &labels(), ChartSize::default());

    // Assert
    assert_eq!(chart.lines().count(), 40);
    assert!(chart.lines().all(|l| l.chars().count() <= 80));
}

#[test]
fn chart_carries_title_and_axis_labels() {
    let series = series(&[("2023-10-07", 1.0), ("2023-10-08", 2.0)]);

    let chart = render_line_chart(&series, &labels(), ChartSize::default());
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[0].trim(), "Latency");
    assert_eq!(lines[1], "Latency (ms)");
    assert_eq!(lines[39].trim(), "Time");
}

#[test]
fn line_runs_from_lowest_to_highest_corner() {
    // Arrange: 40 wide, 12 high leaves a 6 row plot with "10.0" as the widest tick.
    let series = series(&[("2023-10-07", 0.0), ("2023-10-08", 10.0)]);
    let size = ChartSize {
        width: 40,
        height: 12,
    };

    // Act
    let chart = render_line_chart(&series, &labels(), size);
    let lines: Vec<Vec<char>> = chart.lines().map(|l| l.chars().collect()).collect();

    // Assert
    assert_eq!(lines.len(), 12);
    // top plot row, last column
    assert_eq!(lines[3][38], '*');
    // bottom plot row, first column
    assert_eq!(lines[8][6], '*');
    assert!(chart.contains("10.0 |"));
    assert!(chart.contains(" 0.0 |"));
}

#[test]
fn single_point_is_drawn_once() {
    let series = series(&[("2023-10-07T10", 50.0)]);

    let chart = render_line_chart(&series, &labels(), ChartSize::default());

    assert_eq!(stars(&chart), 1);
}

#[test]
fn empty_series_says_so() {
    let series = series(&[]);

    let chart = render_line_chart(&series, &labels(), ChartSize::default());

    assert!(chart.contains("<no data>"));
    assert_eq!(stars(&chart), 0);
}

#[test]
fn tiny_sizes_are_clamped() {
    let series = series(&[("2023-10-07", 1.0), ("2023-10-08", 3.0)]);

    let chart = render_line_chart(
        &series,
        &labels(),
        ChartSize {
            width: 1,
            height: 1,
        },
    );

    assert_eq!(chart.lines().count(), 10);
}
