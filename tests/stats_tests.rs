//! Statistical terminal reducers: definitions, empty-input contracts, and
//! cross-operation consistency identities.

use lazyseq::prelude::*;

const TOLERANCE: f64 = 1e-12;

fn seq(data: &[f64]) -> Sequence<f64> {
    Sequence::new(data.to_vec())
}

#[test]
fn sum_and_product_return_identities_on_empty_input() {
    assert_eq!(seq(&[]).sum(), 0.0);
    assert_eq!(seq(&[]).product(), 1.0);
    assert_eq!(seq(&[2.0, 3.0, 4.0]).sum(), 9.0);
    assert_eq!(seq(&[2.0, 3.0, 4.0]).product(), 24.0);
}

#[test]
fn order_free_reducers_return_none_on_empty_input() {
    assert_eq!(seq(&[]).mean(), None);
    assert_eq!(seq(&[]).min(), None);
    assert_eq!(seq(&[]).max(), None);
    assert_eq!(seq(&[]).median(), None);
    assert_eq!(seq(&[]).variance(), None);
    assert_eq!(seq(&[]).std_dev(), None);
    assert_eq!(seq(&[]).span(), None);
    assert_eq!(seq(&[]).mode(), None);
    assert_eq!(seq(&[]).quartiles(), None);
    assert_eq!(seq(&[]).percentile(50.0).unwrap(), None);
}

#[test]
fn singleton_mean_is_the_element() {
    assert_eq!(seq(&[7.5]).mean(), Some(7.5));
}

#[test]
fn median_of_odd_and_even_lengths() {
    assert_eq!(seq(&[5.0, 1.0, 3.0]).median(), Some(3.0));
    assert_eq!(seq(&[4.0, 1.0, 3.0, 2.0]).median(), Some(2.5));
}

#[test]
fn variance_is_square_of_std_dev() {
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let variance = seq(&data).variance().unwrap();
    let std_dev = seq(&data).std_dev().unwrap();
    assert!((variance - std_dev * std_dev).abs() < TOLERANCE);
    // Population variance of this classic dataset is exactly 4.
    assert!((variance - 4.0).abs() < TOLERANCE);
}

#[test]
fn percentile_50_matches_median() {
    let data = [9.0, 1.0, 7.0, 3.0, 5.0, 2.0];
    let p50 = seq(&data).percentile(50.0).unwrap().unwrap();
    let median = seq(&data).median().unwrap();
    assert!((p50 - median).abs() < TOLERANCE);
}

#[test]
fn percentile_interpolates_and_validates() {
    assert_eq!(seq(&[1.0, 2.0, 3.0, 4.0, 5.0]).percentile(75.0).unwrap(), Some(4.0));
    assert_eq!(seq(&[1.0, 2.0, 3.0, 4.0, 5.0]).percentile(0.0).unwrap(), Some(1.0));
    assert_eq!(seq(&[1.0, 2.0, 3.0, 4.0, 5.0]).percentile(100.0).unwrap(), Some(5.0));

    let err = seq(&[1.0]).percentile(101.0).err().unwrap();
    assert_eq!(err, SequenceError::InvalidPercentile { got: 101.0 });
    assert!(seq(&[1.0]).percentile(-0.5).is_err());
}

#[test]
fn quartiles_use_percentile_interpolation() {
    let q = seq(&[1.0, 2.0, 3.0, 4.0, 5.0]).quartiles().unwrap();
    assert_eq!(q, Quartiles { q1: 2.0, q2: 3.0, q3: 4.0 });
}

#[test]
fn mode_returns_all_tied_values() {
    assert_eq!(seq(&[1.0, 2.0, 2.0, 3.0]).mode(), Some(vec![2.0]));
    assert_eq!(seq(&[1.0, 1.0, 2.0, 2.0, 3.0]).mode(), Some(vec![1.0, 2.0]));
}

#[test]
fn span_is_max_minus_min() {
    assert_eq!(seq(&[3.0, 9.0, 4.0, 1.0]).span(), Some(8.0));
}

#[test]
fn covariance_requires_matching_nonempty_inputs() {
    assert_eq!(seq(&[1.0, 2.0]).covariance(seq(&[1.0, 2.0, 3.0])), None);
    assert_eq!(seq(&[]).covariance(seq(&[])), None);

    // cov([1,2,3],[1,2,3]) = population variance of [1,2,3] = 2/3.
    let cov = seq(&[1.0, 2.0, 3.0]).covariance(seq(&[1.0, 2.0, 3.0])).unwrap();
    assert!((cov - 2.0 / 3.0).abs() < TOLERANCE);
}

#[test]
fn correlation_of_perfectly_scaled_data_is_one() {
    let r = seq(&[1.0, 2.0, 3.0, 4.0, 5.0])
        .correlation(seq(&[2.0, 4.0, 6.0, 8.0, 10.0]))
        .unwrap();
    assert!((r - 1.0).abs() < TOLERANCE);
}

#[test]
fn correlation_with_itself_is_one_when_nonconstant() {
    let data = [3.0, 1.0, 4.0, 1.0, 5.0];
    let r = seq(&data).correlation(seq(&data)).unwrap();
    assert!((r - 1.0).abs() < TOLERANCE);
}

#[test]
fn correlation_is_symmetric() {
    let x = [1.0, 3.0, 2.0, 5.0];
    let y = [2.0, 1.0, 4.0, 3.0];
    let xy = seq(&x).correlation(seq(&y)).unwrap();
    let yx = seq(&y).correlation(seq(&x)).unwrap();
    assert!((xy - yx).abs() < TOLERANCE);
}

#[test]
fn correlation_undefined_for_zero_std_dev() {
    assert_eq!(seq(&[1.0, 2.0, 3.0]).correlation(seq(&[5.0, 5.0, 5.0])), None);
}

#[test]
fn anticorrelated_data_yields_negative_one() {
    let r = seq(&[1.0, 2.0, 3.0])
        .correlation(seq(&[3.0, 2.0, 1.0]))
        .unwrap();
    assert!((r + 1.0).abs() < TOLERANCE);
}

#[test]
fn statistics_drain_transformed_pipelines() {
    // Reducers sit at the end of arbitrary lazy chains.
    let mean = Sequence::new(0..)
        .map(|x| x as f64)
        .filter(|x| x % 2.0 == 0.0)
        .take(5)
        .mean()
        .unwrap();
    assert_eq!(mean, 4.0); // mean of 0, 2, 4, 6, 8
}
