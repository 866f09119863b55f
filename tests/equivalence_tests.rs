//! The fluent and curried surfaces share one engine; for every operation,
//! applying the curried form to a fresh sequence must produce exactly the
//! result of the fluent method.

use lazyseq::functional as seq;
use lazyseq::prelude::*;

fn ints() -> Sequence<i64> {
    Sequence::new(vec![3, 1, 4, 1, 5, 9, 2, 6])
}

fn floats() -> Sequence<f64> {
    Sequence::new(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
}

#[test]
fn lazy_transformations_agree() {
    assert_eq!(
        ints().map(|x| x + 1).to_vec(),
        seq::to_vec(seq::map(|x: i64| x + 1)(ints()))
    );
    assert_eq!(
        ints().filter(|x| x % 2 == 1).to_vec(),
        seq::to_vec(seq::filter(|x: &i64| x % 2 == 1)(ints()))
    );
    assert_eq!(
        ints().flat_map(|x| vec![x, -x]).to_vec(),
        seq::to_vec(seq::flat_map(|x: i64| vec![x, -x])(ints()))
    );
    assert_eq!(ints().take(3).to_vec(), seq::to_vec(seq::take(3)(ints())));
    assert_eq!(ints().drop(5).to_vec(), seq::to_vec(seq::drop(5)(ints())));
    assert_eq!(
        ints().take_while(|x| *x < 5).to_vec(),
        seq::to_vec(seq::take_while(|x: &i64| *x < 5)(ints()))
    );
    assert_eq!(
        ints().drop_while(|x| *x < 5).to_vec(),
        seq::to_vec(seq::drop_while(|x: &i64| *x < 5)(ints()))
    );
    assert_eq!(
        ints().concat(Sequence::new(vec![7, 8])).to_vec(),
        seq::to_vec(seq::concat(Sequence::new(vec![7, 8]))(ints()))
    );
    assert_eq!(
        ints().intersperse(0).to_vec(),
        seq::to_vec(seq::intersperse(0)(ints()))
    );
    assert_eq!(
        ints().scan(0, |acc, x| acc + x).to_vec(),
        seq::to_vec(seq::scan(0, |acc: i64, x: i64| acc + x)(ints()))
    );
    assert_eq!(ints().enumerate().to_vec(), seq::to_vec(seq::enumerate(ints())));
    assert_eq!(
        ints().tap(|_| ()).to_vec(),
        seq::to_vec(seq::tap(|_: &i64| ())(ints()))
    );
    assert_eq!(ints().distinct().to_vec(), seq::to_vec(seq::distinct(ints())));
    assert_eq!(
        ints().distinct_by(|x| x % 3).to_vec(),
        seq::to_vec(seq::distinct_by(|x: &i64| x % 3)(ints()))
    );
}

#[test]
fn windowing_agrees() {
    assert_eq!(
        ints().window(3).unwrap().to_vec(),
        seq::to_vec(seq::window(3)(ints()).unwrap())
    );
    assert_eq!(
        ints().chunk(3).unwrap().to_vec(),
        seq::to_vec(seq::chunk(3)(ints()).unwrap())
    );
    assert_eq!(ints().pairwise().to_vec(), seq::to_vec(seq::pairwise(ints())));
}

#[test]
fn windowing_rejections_agree() {
    assert_eq!(ints().window(0).err(), seq::window::<i64>(0)(ints()).err());
    assert_eq!(ints().chunk(0).err(), seq::chunk::<i64>(0)(ints()).err());
}

#[test]
fn orderings_agree() {
    assert_eq!(ints().reverse().to_vec(), seq::to_vec(seq::reverse(ints())));
    assert_eq!(ints().sort().to_vec(), seq::to_vec(seq::sort(ints())));
    assert_eq!(
        ints().sort_by(|a, b| b.cmp(a)).to_vec(),
        seq::to_vec(seq::sort_by(|a: &i64, b: &i64| b.cmp(a))(ints()))
    );
}

#[test]
fn generic_terminals_agree() {
    assert_eq!(ints().count(), seq::count(ints()));
    assert_eq!(
        ints().reduce(|a, b| a.max(b)),
        seq::reduce(|a: i64, b: i64| a.max(b))(ints())
    );
    assert_eq!(
        ints().fold(0, |acc, x| acc + x),
        seq::fold(0, |acc: i64, x: i64| acc + x)(ints())
    );
    assert_eq!(
        ints().find(|x| *x > 4),
        seq::find(|x: &i64| *x > 4)(ints())
    );
    assert_eq!(ints().all(|x| *x > 0), seq::all(|x: &i64| *x > 0)(ints()));
    assert_eq!(ints().any(|x| *x > 8), seq::any(|x: &i64| *x > 8)(ints()));
    assert_eq!(ints().nth(4), seq::nth(4)(ints()));
    assert_eq!(ints().last(), seq::last(ints()));
    assert_eq!(
        ints().partition(|x| x % 2 == 0),
        seq::partition(|x: &i64| x % 2 == 0)(ints())
    );
    assert_eq!(
        ints().group_by(|x| x % 3),
        seq::group_by(|x: &i64| x % 3)(ints())
    );
}

#[test]
fn numeric_terminals_agree() {
    assert_eq!(floats().sum(), seq::sum(floats()));
    assert_eq!(floats().product(), seq::product(floats()));
    assert_eq!(floats().mean(), seq::mean(floats()));
    assert_eq!(floats().min(), seq::min(floats()));
    assert_eq!(floats().max(), seq::max(floats()));
    assert_eq!(floats().span(), seq::span(floats()));
    assert_eq!(floats().median(), seq::median(floats()));
    assert_eq!(floats().variance(), seq::variance(floats()));
    assert_eq!(floats().std_dev(), seq::std_dev(floats()));
    assert_eq!(floats().percentile(25.0), seq::percentile(25.0)(floats()));
    assert_eq!(floats().mode(), seq::mode(floats()));
    assert_eq!(floats().quartiles(), seq::quartiles(floats()));
    assert_eq!(
        floats().covariance(floats()),
        seq::covariance(floats())(floats())
    );
    assert_eq!(
        floats().correlation(floats()),
        seq::correlation(floats())(floats())
    );
}

#[test]
fn surfaces_interoperate_within_one_pipeline() {
    // A curried stage applied mid-chain yields an ordinary sequence that the
    // fluent surface keeps extending.
    let mixed = seq::map(|x: i64| x * 2)(ints().filter(|x| *x > 2))
        .take(3)
        .to_vec();
    let fluent = ints().filter(|x| *x > 2).map(|x| x * 2).take(3).to_vec();
    assert_eq!(mixed, fluent);
}
