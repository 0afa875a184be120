use crate::analyze::bucket::{BucketKey, BucketMap, Granularity};
use crate::analyze::error::AnalyzeError;
use crate::analyze::metric::Accumulator;
use crate::analyze::parse::parse_record;
use crate::analyze::types::ScanStats;
use crate::analyze::window::TimeRange;
use crate::conf::{AnalyzerConfig, ModuleRegistry};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// What to aggregate: the time window and how to group it.
#[derive(Debug, Clone, Copy)]
pub struct Query {
    pub range: TimeRange,
    pub granularity: Granularity,
}

impl Query {
    pub fn new(range: TimeRange, granularity: Granularity) -> Self {
        Self { range, granularity }
    }
}

/// What to do with a line that is not a valid log record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole run on the first malformed line.
    #[default]
    Abort,
    /// Log and count malformed lines, keep scanning.
    Skip,
}

impl MalformedPolicy {
    /// Fails with `err` under `Abort`; logs and counts it under `Skip`.
    fn absorb(
        self,
        line: usize,
        err: AnalyzeError,
        stats: &mut ScanStats,
    ) -> Result<(), AnalyzeError> {
        match self {
            MalformedPolicy::Abort => Err(err),
            MalformedPolicy::Skip => {
                tracing::warn!(line, error = %err, "skipping malformed record");
                stats.malformed += 1;
                Ok(())
            }
        }
    }
}

#[derive(Debug)]
pub struct Aggregation<A> {
    pub buckets: BucketMap<A>,
    pub stats: ScanStats,
}

/// Scans `reader` once and folds every eligible in-range record into the
/// bucket map of metric `M`.
pub fn aggregate<M, R>(
    reader: R,
    query: &Query,
    policy: MalformedPolicy,
) -> Result<Aggregation<M::Aggregate>, AnalyzeError>
where
    M: Accumulator,
    R: BufRead,
{
    let mut buckets: BucketMap<M::Aggregate> = BucketMap::new();
    let mut stats = ScanStats::default();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line_no = idx + 1;
        let mut bytes = bytes.map_err(|source| AnalyzeError::ReadLine {
            line: line_no,
            source,
        })?;
        stats.lines += 1;

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(e) => {
                let err = AnalyzeError::malformed(line_no, format!("invalid UTF-8: {e}"));
                policy.absorb(line_no, err, &mut stats)?;
                continue;
            }
        };

        if line.trim().is_empty() {
            stats.blank += 1;
            continue;
        }

        let record = match parse_record(line_no, &line) {
            Ok(record) => record,
            Err(err) => {
                policy.absorb(line_no, err, &mut stats)?;
                continue;
            }
        };
        stats.records += 1;

        if !query.range.contains(record.timestamp) {
            stats.out_of_range += 1;
            continue;
        }

        let sample = match M::sample(line_no, &record) {
            Ok(Some(sample)) => sample,
            Ok(None) => {
                stats.ineligible += 1;
                continue;
            }
            Err(err) => {
                policy.absorb(line_no, err, &mut stats)?;
                continue;
            }
        };
        stats.matched += 1;

        let key = BucketKey::resolve(record.timestamp, query.granularity);
        match buckets.get_mut(&key) {
            Some(aggregate) => M::fold(aggregate, sample),
            None => {
                buckets.insert(key, M::start(sample));
            }
        }
    }

    tracing::info!(
        lines = stats.lines,
        matched = stats.matched,
        buckets = buckets.len(),
        malformed = stats.malformed,
        "scan complete"
    );

    Ok(Aggregation { buckets, stats })
}

/// Entry point tying module resolution to [`aggregate`].
pub struct Analyzer {
    registry: ModuleRegistry,
    policy: MalformedPolicy,
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            registry: ModuleRegistry::from_config(config),
            policy: MalformedPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn source(&self, module: &str) -> Result<PathBuf, AnalyzeError> {
        self.registry.resolve(module)
    }

    pub fn run<M: Accumulator>(
        &self,
        module: &str,
        query: &Query,
    ) -> Result<Aggregation<M::Aggregate>, AnalyzeError> {
        let path = self.source(module)?;
        tracing::debug!(module, path = %path.display(), "resolved log source");

        let file = File::open(&path).map_err(|e| AnalyzeError::read_source(&path, e))?;
        aggregate::<M, _>(BufReader::new(file), query, self.policy)
    }
}
