// File: crates/linkplot-core/tests/scale.rs
// Purpose: Linear and band scale mapping, ticks and failure cases.

use linkplot_core::domain::{CategoricalDomain, NumericDomain};
use linkplot_core::{BandScale, ChartError, LinearScale};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_maps_endpoints_and_is_monotonic() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 400.0)).expect("scale");
    assert!(approx(s.map(0.0), 0.0));
    assert!(approx(s.map(10.0), 400.0));

    let mut last = f64::NEG_INFINITY;
    for i in 0..=100 {
        let px = s.map(i as f64 * 0.1);
        assert!(px >= last, "not monotonic at {i}");
        last = px;
    }
}

#[test]
fn linear_inverted_range_for_y() {
    let s = LinearScale::new((0.0, 4.0), (400.0, 0.0)).expect("scale");
    assert!(approx(s.map(0.0), 400.0));
    assert!(approx(s.map(4.0), 0.0));
    assert!(approx(s.map(2.0), 200.0));
    assert!(approx(s.invert(100.0), 3.0));
}

#[test]
fn linear_invert_round_trips_a_value() {
    let s = LinearScale::new((0.0, 7.9), (0.0, 400.0)).expect("scale");
    assert!((s.invert(s.map(5.1)) - 5.1).abs() < 1e-9);
}

#[test]
fn linear_rejects_degenerate_domain() {
    let err = LinearScale::new((5.0, 5.0), (0.0, 400.0)).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDomain { lo, hi } if lo == 5.0 && hi == 5.0));
    assert!(LinearScale::new((3.0, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
}

#[test]
fn numeric_domain_substitutes_unit_span() {
    let d = NumericDomain::new(0.0, 0.0);
    assert!(d.substituted);
    assert_eq!(d.as_tuple(), (0.0, 1.0));
    assert!(LinearScale::from_domain(&d, (0.0, 400.0)).is_ok());
}

#[test]
fn linear_ticks_are_round_numbers_inside_domain() {
    let s = LinearScale::new((0.0, 6.9), (0.0, 400.0)).expect("scale");
    assert_eq!(s.ticks(4), vec![0.0, 2.0, 4.0, 6.0]);
    let fmt = s.tick_format(4);
    assert_eq!(fmt(6.0), "6");

    let s = LinearScale::new((0.0, 2.5), (0.0, 400.0)).expect("scale");
    assert_eq!(s.ticks(4), vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    let fmt = s.tick_format(4);
    assert_eq!(fmt(1.5), "1.5");
    assert_eq!(fmt(2.0), "2.0");
}

#[test]
fn linear_ticks_zero_count_is_empty() {
    let s = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("scale");
    assert!(s.ticks(0).is_empty());
}

fn abc_band() -> BandScale {
    BandScale::new(CategoricalDomain::from_values(["a", "b", "c"]), (0.0, 400.0), 0.2)
}

#[test]
fn band_geometry_matches_padding() {
    let s = abc_band();
    assert!(approx(s.step(), 125.0));
    assert!(approx(s.bandwidth(), 100.0));
    assert!(approx(s.map("a").unwrap(), 25.0));
    assert!(approx(s.map("b").unwrap(), 150.0));
    assert!(approx(s.map("c").unwrap(), 275.0));
    assert!(approx(s.center("b").unwrap(), 200.0));
}

#[test]
fn band_bands_are_ordered_disjoint_and_fill_range() {
    let cats = ["setosa", "versicolor", "virginica", "other", "more"];
    let s = BandScale::new(CategoricalDomain::from_values(cats), (0.0, 400.0), 0.2);
    let n = cats.len() as f64;

    let starts: Vec<f64> = cats.iter().map(|c| s.map(c).unwrap()).collect();
    for w in starts.windows(2) {
        assert!(w[0] + s.bandwidth() <= w[1] + 1e-9, "bands overlap: {:?}", w);
    }
    let total = s.bandwidth() * n + s.inner_gap() * (n - 1.0) + s.outer_gap() * 2.0;
    assert!(approx(total, 400.0), "total {total}");
}

#[test]
fn band_keeps_first_encounter_order() {
    let d = CategoricalDomain::from_values(["z", "a", "z", "m"]);
    assert_eq!(d.categories(), ["z", "a", "m"]);
    let s = BandScale::new(d, (0.0, 300.0), 0.0);
    assert!(s.map("z").unwrap() < s.map("a").unwrap());
    assert!(s.map("a").unwrap() < s.map("m").unwrap());
}

#[test]
fn band_unknown_category_errors() {
    let err = abc_band().map("d").unwrap_err();
    assert!(matches!(err, ChartError::UnknownCategory(ref c) if c == "d"));
}
