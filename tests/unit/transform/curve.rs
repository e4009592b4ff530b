use super::*;
use kurbo::PathEl;

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn on_curve_points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            PathEl::CurveTo(_, _, p) | PathEl::QuadTo(_, p) => Some(p),
            PathEl::ClosePath => None,
        })
        .collect()
}

#[test]
fn basis_starts_and_ends_on_endpoints() {
    let p = pts(&[(0.0, 0.0), (10.0, 20.0), (20.0, -5.0), (30.0, 10.0)]);
    let path = basis_path(&p);
    let on = on_curve_points(&path);
    assert_eq!(on.first().copied(), Some(p[0]));
    assert_eq!(on.last().copied(), Some(p[3]));
    let curves = path
        .elements()
        .iter()
        .filter(|e| matches!(e, PathEl::CurveTo(..)))
        .count();
    assert_eq!(curves, p.len() - 1);
}

#[test]
fn basis_of_collinear_points_stays_on_the_line() {
    let p = pts(&[(0.0, 5.0), (10.0, 5.0), (20.0, 5.0), (30.0, 5.0)]);
    for q in on_curve_points(&basis_path(&p)) {
        assert!((q.y - 5.0).abs() < 1e-12);
    }
}

#[test]
fn catmull_rom_interpolates_every_point() {
    let p = pts(&[(0.0, 0.0), (10.0, 20.0), (15.0, 20.0), (40.0, -10.0), (50.0, 0.0)]);
    let path = catmull_rom_path(&p, 0.5);
    assert_eq!(on_curve_points(&path), p);
}

#[test]
fn catmull_rom_two_points_is_a_line() {
    let p = pts(&[(0.0, 0.0), (10.0, 0.0)]);
    let path = catmull_rom_path(&p, 0.5);
    assert!(matches!(path.elements()[1], PathEl::LineTo(_)));
}

#[test]
fn catmull_rom_handles_repeated_points() {
    let p = pts(&[(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
    let path = catmull_rom_path(&p, 0.5);
    for q in on_curve_points(&path) {
        assert!(q.x.is_finite() && q.y.is_finite());
    }
}

#[test]
fn empty_input_yields_empty_path() {
    assert!(basis_path(&[]).elements().is_empty());
    assert!(catmull_rom_path(&[], 0.5).elements().is_empty());
}
