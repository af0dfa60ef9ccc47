use approx::assert_abs_diff_eq;
use survey_charts::core::DataPoint;
use survey_charts::data::{Country, Sex};
use survey_charts::trend::{TrendFit, TrendGroup, UndefinedReason, fit, fit_groups};

fn points(raw: &[(f64, f64)]) -> Vec<DataPoint> {
    raw.iter().map(|&(x, y)| DataPoint::new(x, y)).collect()
}

#[test]
fn fits_exact_line() {
    let line = fit(&points(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]))
        .line()
        .expect("defined fit");
    assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(line.intercept, 0.0, epsilon = 1e-12);
}

#[test]
fn fits_least_squares_through_noise() {
    let line = fit(&points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 2.0), (3.0, 4.0)]))
        .line()
        .expect("defined fit");
    assert_abs_diff_eq!(line.slope, 0.9, epsilon = 1e-12);
    assert_abs_diff_eq!(line.intercept, 0.9, epsilon = 1e-12);
    assert_abs_diff_eq!(line.at(10.0), 9.9, epsilon = 1e-12);
}

#[test]
fn identical_x_values_are_undefined() {
    let result = fit(&points(&[(5.0, 1.0), (5.0, 2.0), (5.0, 9.0)]));
    assert_eq!(result, TrendFit::Undefined(UndefinedReason::ZeroXVariance));
    assert!(!result.is_defined());

    let single = fit(&points(&[(5.0, 1.0)]));
    assert_eq!(single, TrendFit::Undefined(UndefinedReason::ZeroXVariance));
}

#[test]
fn empty_and_non_finite_inputs_are_undefined() {
    assert_eq!(fit(&[]), TrendFit::Undefined(UndefinedReason::NoPoints));
    assert_eq!(
        fit(&points(&[(1.0, f64::NAN), (2.0, 3.0)])),
        TrendFit::Undefined(UndefinedReason::NonFinitePoint)
    );
}

#[test]
fn groups_fit_independently_in_first_seen_order() {
    let male = TrendGroup::country_and_sex(Country::France, Sex::Male);
    let female = TrendGroup::country_and_sex(Country::France, Sex::Female);
    let italy = TrendGroup::country(Country::Italy);
    let samples = vec![
        (male, DataPoint::new(81.0, 28.0)),
        (female, DataPoint::new(79.0, 32.0)),
        (male, DataPoint::new(79.0, 38.0)),
        (italy, DataPoint::new(70.0, 10.0)),
        (female, DataPoint::new(77.0, 42.0)),
        (italy, DataPoint::new(70.0, 12.0)),
    ];

    let fits = fit_groups(samples);
    let groups: Vec<TrendGroup> = fits.iter().map(|fit| fit.group).collect();
    assert_eq!(groups, vec![male, female, italy]);

    let male_line = fits[0].fit.line().expect("male fit");
    assert_abs_diff_eq!(male_line.slope, -5.0, epsilon = 1e-9);
    assert_eq!(fits[0].point_count, 2);
    assert_eq!(fits[0].x_extent, Some((79.0, 81.0)));

    let (from, to) = fits[0].segment().expect("segment");
    assert_abs_diff_eq!(from.y, 38.0, epsilon = 1e-9);
    assert_abs_diff_eq!(to.y, 28.0, epsilon = 1e-9);

    assert!(!fits[2].fit.is_defined());
    assert_eq!(fits[2].segment(), None);
}
