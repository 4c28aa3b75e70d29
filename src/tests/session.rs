use crate::{
    prelude::{
        Config, Constellation, Duration, Epoch, Error, IntegrityCause, Measurement, Position,
        Session, SV,
    },
    tests::{
        init_logger, measurements_at, reference_measurements, reference_position,
        REFERENCE_ALT_M, REFERENCE_CLOCK_BIAS_M, REFERENCE_LAT_DDEG, REFERENCE_LON_DDEG,
    },
};

fn t0() -> Epoch {
    Epoch::from_gpst_seconds(1_000_000.0)
}

fn epoch(i: usize) -> Epoch {
    t0() + Duration::from_seconds(i as f64)
}

#[test]
fn static_receiver_is_trusted() {
    init_logger();

    let cfg = Config::default();
    let mut session = Session::new(&cfg).unwrap();

    // a single batch, shuffled epochs
    let mut batch = Vec::<Measurement>::new();
    for i in [3, 0, 4, 1, 2] {
        batch.extend(reference_measurements(epoch(i)));
    }

    let reports = session.process(&batch);
    assert_eq!(reports.len(), 5);

    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.epoch, epoch(i));
        assert_eq!(report.verdict.epoch, epoch(i));

        let estimate = report
            .estimate()
            .unwrap_or_else(|| panic!("epoch #{} failed: {:?}", i, report.solution));

        let error_m = (estimate.ecef() - reference_position().ecef()).norm();
        assert!(error_m < 1.0E-3, "epoch #{}: error {}m", i, error_m);

        if i < 4 {
            assert_eq!(report.verdict.reason, Some(IntegrityCause::InsufficientData));
            assert!(!report.is_trusted());
        } else {
            assert!(!report.verdict.is_suspect);
            assert_eq!(report.verdict.reason, None);
            assert!(report.is_trusted());
        }
    }

    assert!(session.window().is_full());
}

#[test]
fn spoofed_position_jump() {
    init_logger();

    let cfg = Config::default();
    let mut session = Session::new(&cfg).unwrap();

    let spoofed = Position::from_geodetic(40.730610, -73.935242, 10.0);

    for i in 0..5 {
        let reports = session.process(&reference_measurements(epoch(i)));
        assert_eq!(reports.len(), 1);
        assert!(!reports[0].verdict.is_suspect);
    }

    let reports = session.process(&measurements_at(
        epoch(5),
        &spoofed,
        REFERENCE_CLOCK_BIAS_M,
        8,
    ));

    assert_eq!(reports.len(), 1);
    let report = &reports[0];

    let estimate = report.estimate().unwrap();
    assert!((estimate.latitude_ddeg() - 40.730610).abs() < 1.0E-6);

    assert!(report.verdict.is_suspect);
    assert!(matches!(
        report.verdict.reason,
        Some(IntegrityCause::Displacement(_))
    ));
    assert!(!report.is_trusted());
}

#[test]
fn failed_epoch_does_not_stop_batch() {
    init_logger();

    let cfg = Config::default().with_window_size(2);
    let mut session = Session::new(&cfg).unwrap();

    let mut batch = reference_measurements(epoch(0));
    batch.extend(measurements_at(
        epoch(1),
        &reference_position(),
        REFERENCE_CLOCK_BIAS_M,
        3,
    ));
    batch.extend(reference_measurements(epoch(2)));

    let reports = session.process(&batch);
    assert_eq!(reports.len(), 3);

    assert!(reports[0].solution.is_ok());
    assert_eq!(reports[1].solution, Err(Error::InsufficientMeasurements(3)));
    assert!(reports[1].verdict.is_unknown());
    assert!(reports[2].solution.is_ok());

    // failed epoch did not enter the window
    assert_eq!(session.window().len(), 2);
    assert!(!reports[2].verdict.is_suspect);
    assert_eq!(reports[2].verdict.reason, None);
}

#[test]
fn out_of_order_batches() {
    init_logger();

    let mut session = Session::new(&Config::default()).unwrap();

    let reports = session.process(&reference_measurements(epoch(10)));
    assert!(reports[0].solution.is_ok());

    // late epoch is still resolved, but does not enter the window
    let reports = session.process(&reference_measurements(epoch(5)));
    let estimate = reports[0].estimate().unwrap();
    assert!((estimate.ecef() - reference_position().ecef()).norm() < 1.0E-3);
    assert_eq!(estimate.epoch, epoch(5));
    assert!(reports[0].verdict.is_unknown());
    assert!(!reports[0].is_trusted());
    assert_eq!(session.window().len(), 1);
    assert_eq!(session.window().newest().map(|s| s.epoch), Some(epoch(10)));

    // same epoch is tolerated
    let reports = session.process(&reference_measurements(epoch(10)));
    assert!(reports[0].solution.is_ok());
    assert_eq!(session.window().len(), 2);

    session.reset();
    assert!(session.window().is_empty());

    let reports = session.process(&reference_measurements(epoch(5)));
    assert!(reports[0].solution.is_ok());
}

#[test]
fn constellation_prefilter() {
    init_logger();

    let cfg = Config::default().with_constellations(&[Constellation::Galileo]);
    let mut session = Session::new(&cfg).unwrap();

    let reports = session.process(&reference_measurements(epoch(0)));
    assert_eq!(reports[0].solution, Err(Error::InsufficientMeasurements(0)));
}

/// 4 Galileo vehicles with nominal signals,
/// 4 GPS vehicles with poor and unstable signals
fn mixed_measurements(t: Epoch) -> Vec<Measurement> {
    reference_measurements(t)
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            if i < 4 {
                Measurement {
                    sv: SV::new(Constellation::Galileo, i as u8 + 1),
                    ..m
                }
            } else {
                let doppler = if i % 2 == 0 { -3000.0 } else { 3000.0 };
                m.with_cn0(5.0).with_doppler(doppler)
            }
        })
        .collect()
}

#[test]
fn rejected_signals_do_not_alter_integrity() {
    init_logger();

    for cfg in [
        Config::default().with_constellations(&[Constellation::Galileo]),
        Config::default().with_min_cn0(20.0),
    ] {
        let mut session = Session::new(&cfg).unwrap();

        let mut batch = Vec::<Measurement>::new();
        for i in 0..5 {
            batch.extend(mixed_measurements(epoch(i)));
        }

        let reports = session.process(&batch);
        assert_eq!(reports.len(), 5);

        let report = &reports[4];
        let estimate = report.estimate().unwrap();
        assert!((estimate.ecef() - reference_position().ecef()).norm() < 1.0E-3);

        let newest = session.window().newest().unwrap();
        assert_eq!(newest.cn0_dbhz, vec![40.0; 4]);
        assert_eq!(newest.doppler_hz, vec![0.0; 4]);

        assert!(!report.verdict.is_suspect);
        assert_eq!(report.verdict.reason, None);
        assert!(report.is_trusted());
    }

    // without pre-fit, the poor signals are monitored
    let mut session = Session::new(&Config::default()).unwrap();
    let mut batch = Vec::<Measurement>::new();
    for i in 0..5 {
        batch.extend(mixed_measurements(epoch(i)));
    }

    let reports = session.process(&batch);
    assert!(reports[4].verdict.is_suspect);
    assert_eq!(reports[4].verdict.reason, Some(IntegrityCause::LowCn0(22.5)));
}

#[test]
fn invalid_window_size() {
    let cfg = Config::default().with_window_size(0);
    assert!(matches!(Session::new(&cfg), Err(Error::InvalidWindowSize)));
}

#[test]
fn empty_batch() {
    let mut session = Session::new(&Config::default()).unwrap();
    assert!(session.process(&[]).is_empty());
}

#[test]
fn reference_geodetic_fix() {
    init_logger();

    let mut session = Session::new(&Config::default()).unwrap();
    let reports = session.process(&reference_measurements(epoch(0)));
    let estimate = reports[0].estimate().unwrap();

    assert!((estimate.latitude_ddeg() - REFERENCE_LAT_DDEG).abs() < 1.0E-7);
    assert!((estimate.longitude_ddeg() - REFERENCE_LON_DDEG).abs() < 1.0E-7);
    assert!((estimate.altitude_m() - REFERENCE_ALT_M).abs() < 1.0E-2);
}
