//! The worked example and boundary cases, through the public API.

use pmf::chart::BarSeries;
use pmf::constants::{DISPLAY_DECIMALS, PROBABILITY_TOLERANCE, REFERENCE_SAMPLE};
use pmf::sampling::PmfSampler;
use pmf::{compute_frequencies, compute_pmf, expected_value, summarize, variance, Pmf, PmfError, PmfSummary};

#[test]
fn reference_frequencies() {
    let table = compute_frequencies(&REFERENCE_SAMPLE).unwrap();
    let pairs: Vec<(i64, u64)> = table.iter().map(|(&v, c)| (v, c)).collect();
    assert_eq!(pairs, vec![(1, 4), (2, 4), (3, 2), (4, 1), (5, 2)]);
}

#[test]
fn reference_pmf_rounded() {
    let table = compute_frequencies(&REFERENCE_SAMPLE).unwrap();
    let pmf = compute_pmf(&table, REFERENCE_SAMPLE.len()).unwrap();
    assert!((pmf.total_mass() - 1.0).abs() < PROBABILITY_TOLERANCE);

    let rounded = pmf.rounded(DISPLAY_DECIMALS);
    let expected = [(1, 0.31), (2, 0.31), (3, 0.15), (4, 0.08), (5, 0.15)];
    for (v, p) in expected {
        assert!(
            (rounded.probability(&v) - p).abs() < 1e-12,
            "value {v}: got {} want {p}",
            rounded.probability(&v)
        );
    }
}

#[test]
fn reference_moments_from_rounded_table() {
    let pmf = Pmf::from_sample(&REFERENCE_SAMPLE)
        .unwrap()
        .rounded(DISPLAY_DECIMALS);
    let mu = expected_value(&pmf);
    let var = variance(&pmf, mu);
    assert!((mu - 2.45).abs() < 1e-9, "mu={mu}");
    assert!((var - 1.927).abs() < 1e-3, "var={var}");
}

#[test]
fn reference_moments_exact() {
    let pmf = Pmf::from_sample(&REFERENCE_SAMPLE).unwrap();
    let mu = expected_value(&pmf);
    assert!((mu - 32.0 / 13.0).abs() < 1e-9);
    assert!((variance(&pmf, mu) - 328.0 / 169.0).abs() < 1e-9);
}

#[test]
fn singleton_sample() {
    let pmf = Pmf::from_sample(&[7]).unwrap();
    let (values, probs) = pmf.series();
    assert_eq!(values, vec![7]);
    assert_eq!(probs, vec![1.0]);
    let mu = expected_value(&pmf);
    assert_eq!(mu, 7.0);
    assert_eq!(variance(&pmf, mu), 0.0);
}

#[test]
fn empty_sample_is_invalid_input() {
    let empty: Vec<i64> = Vec::new();
    assert!(matches!(compute_frequencies(&empty), Err(PmfError::InvalidInput(_))));
    assert!(matches!(Pmf::from_sample(&empty), Err(PmfError::InvalidInput(_))));
    assert!(matches!(summarize(&empty), Err(PmfError::InvalidInput(_))));
}

#[test]
fn zero_sample_size_is_division_by_zero() {
    let table = compute_frequencies(&REFERENCE_SAMPLE).unwrap();
    let err = compute_pmf(&table, 0).unwrap_err();
    assert!(matches!(err, PmfError::DivisionByZero));
    assert_eq!(
        err.to_string(),
        "division by zero: sample size must be greater than 0"
    );
}

#[test]
fn bar_series_feeds_chart() {
    let pmf = Pmf::from_sample(&REFERENCE_SAMPLE).unwrap();
    let bars = BarSeries::from_pmf(&pmf);
    assert_eq!(bars.values, vec![1, 2, 3, 4, 5]);
    let sum: f64 = bars.probabilities.iter().sum();
    assert!((sum - 1.0).abs() < PROBABILITY_TOLERANCE);
}

#[test]
fn summary_json_reads_back() {
    let s = summarize(&REFERENCE_SAMPLE).unwrap();
    let json = s.to_json_pretty().unwrap();
    let back: PmfSummary<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.frequencies, s.frequencies);
    assert_eq!(back.percentiles, s.percentiles);
    assert!((back.mean - s.mean).abs() < 1e-12);
}

#[test]
fn resampling_reproduces_reference_pmf() {
    let pmf = Pmf::from_sample(&REFERENCE_SAMPLE).unwrap();
    let draws = PmfSampler::new(&pmf).unwrap().draw(200_000, 2024);
    let resampled = Pmf::from_sample(&draws).unwrap();
    for (&v, p) in pmf.iter() {
        assert!(
            (resampled.probability(&v) - p).abs() < 0.01,
            "value {v}: exact {p} simulated {}",
            resampled.probability(&v)
        );
    }
}

#[test]
fn summary_percentiles_on_exact_cdf_boundaries() {
    let sample: Vec<i64> = (1..=10).collect();
    let s = summarize(&sample).unwrap();
    let p90 = s.percentiles.iter().find(|p| p.level == 90).unwrap();
    assert_eq!(p90.value, 9);
}
