use crate::analyze::{
    Accumulator, AnalyzeError, Availability, AvailabilityAggregate, Elapsed,
    LOG_TIMESTAMP_FORMAT, Latency, LatencyAggregate, LatencySample, LogRecord, Status,
    StatusSample,
};
use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;

fn record(time_ms: Option<f64>, status: Option<Status>) -> LogRecord {
    with_time(time_ms.map(Elapsed::Millis), status)
}

fn with_time(time: Option<Elapsed>, status: Option<Status>) -> LogRecord {
    LogRecord {
        timestamp: NaiveDateTime::parse_from_str(
            "2023-10-07T10:15:00.000000Z",
            LOG_TIMESTAMP_FORMAT,
        )
        .unwrap(),
        time,
        status,
    }
}

fn fold_all<M: Accumulator>(samples: &[M::Sample]) -> M::Aggregate {
    let (first, rest) = samples.split_first().unwrap();
    let mut aggregate = M::start(*first);
    for sample in rest {
        M::fold(&mut aggregate, *sample);
    }
    aggregate
}

//-----------------------------------------------------------------------------
// Latency
//-----------------------------------------------------------------------------

#[test]
fn latency_first_sample_opens_bucket_with_count_one() {
    let aggregate = Latency::start(LatencySample { millis: 100.0 });

    assert_eq!(
        aggregate,
        LatencyAggregate {
            count: 1,
            total_time: 100.0
        }
    );
}

#[test]
fn latency_mean_of_100_and_300_is_200() {
    let aggregate = fold_all::<Latency>(&[
        LatencySample { millis: 100.0 },
        LatencySample { millis: 300.0 },
    ]);

    assert_eq!(Latency::finalize("b", &aggregate).unwrap(), 200.0);
}

#[test]
fn latency_accumulation_is_order_independent() {
    let samples: Vec<LatencySample> = [5.0, 120.0, 33.0, 0.0, 980.0, 7.0]
        .into_iter()
        .map(|millis| LatencySample { millis })
        .collect();

    let forward = fold_all::<Latency>(&samples);

    let mut reversed = samples.clone();
    reversed.reverse();
    let backward = fold_all::<Latency>(&reversed);

    let mut rotated = samples.clone();
    rotated.rotate_left(2);
    let shifted = fold_all::<Latency>(&rotated);

    assert_eq!(forward, backward);
    assert_eq!(forward, shifted);
    assert_eq!(forward.count, 6);
    assert_eq!(forward.total_time, 1145.0);
}

#[test]
fn latency_accepts_negative_values() {
    let aggregate = fold_all::<Latency>(&[
        LatencySample { millis: -10.0 },
        LatencySample { millis: 30.0 },
    ]);

    assert_eq!(Latency::finalize("b", &aggregate).unwrap(), 10.0);
}

#[test]
fn latency_ignores_records_without_time() {
    assert_eq!(
        Latency::sample(1, &record(None, Some(Status::Code(200)))).unwrap(),
        None
    );
    assert_eq!(
        Latency::sample(1, &record(Some(12.0), None)).unwrap(),
        Some(LatencySample { millis: 12.0 })
    );
}

#[test]
fn latency_rejects_non_numeric_time() {
    let record = with_time(Some(Elapsed::Invalid("\"n/a\"".to_string())), None);

    let err = Latency::sample(4, &record).unwrap_err();

    assert!(
        matches!(err, AnalyzeError::MalformedRecord { line: 4, .. }),
        "unexpected error: {err:?}"
    );
}

//-----------------------------------------------------------------------------
// Availability
//-----------------------------------------------------------------------------

#[test]
fn availability_first_sample_is_counted_once() {
    assert_eq!(
        Availability::start(StatusSample { success: true }),
        AvailabilityAggregate {
            success: 1,
            error: 0
        }
    );
    assert_eq!(
        Availability::start(StatusSample { success: false }),
        AvailabilityAggregate {
            success: 0,
            error: 1
        }
    );
}

#[test]
fn availability_three_success_one_error_is_25_percent() {
    let aggregate = AvailabilityAggregate {
        success: 3,
        error: 1,
    };

    assert_eq!(Availability::finalize("b", &aggregate).unwrap(), 25.0);
}

#[test]
fn availability_treats_every_non_200_status_as_error() {
    for status in [
        Status::Code(201),
        Status::Code(404),
        Status::Code(500),
        Status::Code(-1),
        Status::Unrecognized("\"ok\"".to_string()),
    ] {
        let sample = Availability::sample(1, &record(None, Some(status.clone())))
            .unwrap()
            .unwrap();
        assert!(!sample.success, "{status:?} counted as success");
    }

    let sample = Availability::sample(1, &record(None, Some(Status::Code(200))))
        .unwrap()
        .unwrap();
    assert!(sample.success);
}

#[test]
fn availability_ignores_records_without_status() {
    assert_eq!(
        Availability::sample(1, &record(Some(10.0), None)).unwrap(),
        None
    );
}

#[test]
fn availability_does_not_read_time() {
    let record = with_time(
        Some(Elapsed::Invalid("\"n/a\"".to_string())),
        Some(Status::Code(200)),
    );

    assert_eq!(
        Availability::sample(1, &record).unwrap(),
        Some(StatusSample { success: true })
    );
}

#[test]
fn empty_buckets_fail_with_division_by_zero() {
    let err = Availability::finalize("2023-10-07T10", &AvailabilityAggregate::default())
        .unwrap_err();
    assert!(matches!(
        err,
        AnalyzeError::DivisionByZero { ref bucket } if bucket == "2023-10-07T10"
    ));

    let err = Latency::finalize(
        "2023-10",
        &LatencyAggregate {
            count: 0,
            total_time: 0.0,
        },
    )
    .unwrap_err();
    assert!(matches!(err, AnalyzeError::DivisionByZero { .. }));
}
