use approx::assert_relative_eq;
use bspline::{
    deboor_point, evaluate_curve, evaluate_curve_with, linspace, DegeneratePolicy, EvalConfig,
    KnotVector, DEFAULT_SAMPLES,
};
use nalgebra_glm::DVec2;

fn pts(v: &[(f64, f64)]) -> Vec<DVec2> {
    v.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}

fn scenario() -> Vec<DVec2> {
    pts(&[(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0), (6.0, 1.0)])
}

/// Screen-space clicks, as an interactive editor would collect them
fn clicks() -> Vec<DVec2> {
    pts(&[
        (112.0, 340.0),
        (160.0, 92.0),
        (301.0, 75.0),
        (355.0, 300.0),
        (420.0, 410.0),
        (512.0, 211.0),
        (590.0, 60.0),
        (605.0, 390.0),
    ])
}

// Counter-clockwise convex polygon containment, with some slack for rounding
fn inside_convex(hull: &[DVec2], q: DVec2) -> bool {
    (0..hull.len()).all(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let cross = (b.x - a.x) * (q.y - a.y) - (b.y - a.y) * (q.x - a.x);
        cross >= -1e-9
    })
}

#[test]
fn concrete_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ps = scenario();

    let knots = KnotVector::clamped_uniform(ps.len(), 3).unwrap();
    assert_eq!(&*knots, &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0, 2.0]);

    let curve = evaluate_curve(&ps, 3).unwrap();
    assert_eq!(curve.len(), DEFAULT_SAMPLES);
    assert_relative_eq!(curve[0].x, 0.0);
    assert_relative_eq!(curve[0].y, 0.0);
    assert_relative_eq!(curve[99].x, 6.0, epsilon = 1e-12);
    assert_relative_eq!(curve[99].y, 1.0, epsilon = 1e-12);

    // Every control point is on the hull here; this is it counter-clockwise
    let hull = pts(&[(0.0, 0.0), (4.0, 0.0), (6.0, 1.0), (3.0, 2.0), (1.0, 2.0)]);
    for q in &curve {
        assert!(inside_convex(&hull, *q), "{q:?} escaped the hull");
    }
}

#[test]
fn endpoint_interpolation() {
    for degree in 1..=5 {
        let ps = clicks();
        let curve = evaluate_curve(&ps, degree).unwrap();
        let first = curve[0];
        let last = curve[curve.len() - 1];
        assert_relative_eq!(first.x, ps[0].x, epsilon = 1e-9);
        assert_relative_eq!(first.y, ps[0].y, epsilon = 1e-9);
        assert_relative_eq!(last.x, ps[7].x, epsilon = 1e-9);
        assert_relative_eq!(last.y, ps[7].y, epsilon = 1e-9);
    }
}

#[test]
fn sample_count_is_fixed() {
    let all = clicks();
    for m in 4..=all.len() {
        let curve = evaluate_curve(&all[..m], 3).unwrap();
        assert_eq!(curve.len(), 100, "{m} control points");
    }
    let config = EvalConfig::default().with_samples(7);
    assert_eq!(evaluate_curve_with(&all, &config).unwrap().len(), 7);
}

#[test]
fn underdetermined_input_passes_through() {
    let ps = pts(&[(3.0, 4.0), (5.0, 6.0)]);
    assert_eq!(evaluate_curve(&ps, 3).unwrap(), ps);

    let ps = pts(&[(3.0, 4.0), (5.0, 6.0), (7.0, 1.0)]);
    assert_eq!(evaluate_curve(&ps, 3).unwrap(), ps);
}

#[test]
fn deterministic() {
    let ps = clicks();
    let a = evaluate_curve(&ps, 3).unwrap();
    let b = evaluate_curve(&ps, 3).unwrap();
    assert_eq!(a, b);
}

#[test]
fn parameters_stay_in_domain() {
    let ps = clicks();
    let knots = KnotVector::clamped_uniform(ps.len(), 3).unwrap();
    let (t_min, t_max) = knots.domain(3).unwrap();
    let ts: Vec<f64> = linspace(t_min, t_max, DEFAULT_SAMPLES).collect();
    assert!(ts.iter().all(|t| (t_min..=t_max).contains(t)));
    assert!(ts.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(ts[0], t_min);
    assert_eq!(ts[ts.len() - 1], t_max);

    // Sampled curve matches per-parameter evaluation, in order
    let curve = evaluate_curve(&ps, 3).unwrap();
    for (t, q) in ts.iter().zip(&curve) {
        assert_eq!(deboor_point(3, &ps, &knots, *t).unwrap(), *q);
    }
}

#[test]
fn boundary_sample_uses_fallback_span() {
    let ps = clicks();
    let knots = KnotVector::clamped_uniform(ps.len(), 3).unwrap();
    let (_, t_max) = knots.domain(3).unwrap();
    assert_eq!(knots.find_span(t_max, 3), Ok(knots.len() - 3 - 2));
    assert_eq!(knots.find_span(t_max, 3), Ok(ps.len() - 1));
    assert!(deboor_point(3, &ps, &knots, t_max).is_ok());
}

#[test]
fn unclamped_boundaries_stay_in_range() {
    // Knots that keep rising past t_max and start below t_min
    let ps = clicks();
    let degree = 3;
    let knots: Vec<f64> = (0..ps.len() + degree + 1).map(|i| i as f64).collect();
    let knots = KnotVector::new(knots).unwrap();
    let (t_min, t_max) = knots.domain(degree).unwrap();
    assert_eq!((t_min, t_max), (3.0, 8.0));

    for policy in [DegeneratePolicy::Clamp, DegeneratePolicy::Report] {
        for t in linspace(t_min, t_max, 11) {
            let span = knots.find_span(t, degree).unwrap();
            assert!((degree..ps.len()).contains(&span), "span {span} at t = {t}");
            assert!(bspline::deboor_point_with_policy(degree, &ps, &knots, t, policy).is_ok());
        }
    }
    assert_eq!(knots.find_span(t_max, degree), Ok(ps.len() - 1));
}

#[test]
fn local_control() {
    // Moving the last point leaves the first span of a cubic untouched
    let mut ps = clicks();
    let before = evaluate_curve(&ps, 3).unwrap();
    ps[7].y += 100.0;
    let after = evaluate_curve(&ps, 3).unwrap();

    // Domain is [0, 5], so span [0, 1) covers the first 20 samples
    for i in 0..20 {
        assert_eq!(before[i], after[i]);
    }
    assert_ne!(before[99], after[99]);
}

#[test]
fn clamped_curves_never_degenerate() {
    let config = EvalConfig::default().with_policy(DegeneratePolicy::Report);
    let all = clicks();
    for degree in 1..=6 {
        for m in degree + 1..=all.len() {
            let config = config.with_degree(degree);
            assert!(evaluate_curve_with(&all[..m], &config).is_ok());
        }
    }
}
