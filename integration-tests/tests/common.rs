use integration_tests::harness::LogFixture;
use logscope_core::analyze::{
    AnalyzeError, Analyzer, Granularity, MalformedPolicy, MetricKind, Query, TimeRange,
};
use logscope_core::cli::{MetricReport, build_report};

pub fn query(start: &str, end: &str, granularity: Granularity) -> Query {
    Query::new(
        TimeRange::from_dates(start, end).expect("valid test dates"),
        granularity,
    )
}

/// Runs one metric over `module` the way `logscope analyze` does.
pub fn report(
    fixture: &LogFixture,
    module: &str,
    query: &Query,
    metric: MetricKind,
    policy: MalformedPolicy,
) -> Result<MetricReport, AnalyzeError> {
    let analyzer = Analyzer::new(&fixture.load()).with_policy(policy);
    build_report(&analyzer, module, query, metric)
}

#[allow(dead_code)]
pub fn values(report: &MetricReport) -> Vec<(String, f64)> {
    report
        .readings
        .iter()
        .map(|r| (r.bucket.to_string(), r.value))
        .collect()
}
