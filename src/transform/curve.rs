//! Smooth curves through sample points, emitted as cubic Bézier paths.

use kurbo::{BezPath, Point};

const EPSILON: f64 = 1e-12;

/// Uniform cubic B-spline through `points`, clamped so it starts and ends on the end points.
///
/// Interior points act as control points (the curve passes near, not through, them), which is
/// what keeps dense procedural fields free of ringing.
pub fn basis_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);

    match points.len() {
        1 => {}
        2 => path.line_to(points[1]),
        _ => {
            let (p0, p1) = (points[0], points[1]);
            path.line_to(Point::new(
                (5.0 * p0.x + p1.x) / 6.0,
                (5.0 * p0.y + p1.y) / 6.0,
            ));
            for w in points.windows(3) {
                basis_segment(&mut path, w[0], w[1], w[2]);
            }
            let n = points.len();
            let (a, b) = (points[n - 2], points[n - 1]);
            basis_segment(&mut path, a, b, b);
            path.line_to(b);
        }
    }
    path
}

fn basis_segment(path: &mut BezPath, p0: Point, p1: Point, p: Point) {
    path.curve_to(
        Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
        Point::new((p0.x + 4.0 * p1.x + p.x) / 6.0, (p0.y + 4.0 * p1.y + p.y) / 6.0),
    );
}

/// Catmull-Rom spline through every point. `alpha = 0.5` is the centripetal parameterization,
/// which never forms cusps or self-intersections within a segment.
pub fn catmull_rom_path(points: &[Point], alpha: f64) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);
    if points.len() == 2 {
        path.line_to(points[1]);
        return path;
    }

    let knot = |a: Point, b: Point| (a - b).hypot2().powf(alpha);
    for i in 0..points.len().saturating_sub(1) {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = (i > 0).then(|| points[i - 1]);
        let p3 = points.get(i + 2).copied();

        // d = |segment|^alpha, d2 = |segment|^(2 alpha)
        let d12_2 = knot(p1, p2);
        let d12 = d12_2.sqrt();

        let c1 = match p0 {
            Some(p0) => {
                let d01_2 = knot(p0, p1);
                let d01 = d01_2.sqrt();
                if d01 > EPSILON {
                    let a = 2.0 * d01_2 + 3.0 * d01 * d12 + d12_2;
                    let n = 3.0 * d01 * (d01 + d12);
                    Point::new(
                        (p1.x * a - p0.x * d12_2 + p2.x * d01_2) / n,
                        (p1.y * a - p0.y * d12_2 + p2.y * d01_2) / n,
                    )
                } else {
                    p1
                }
            }
            None => p1,
        };

        let c2 = match p3 {
            Some(p3) => {
                let d23_2 = knot(p2, p3);
                let d23 = d23_2.sqrt();
                if d23 > EPSILON {
                    let b = 2.0 * d23_2 + 3.0 * d23 * d12 + d12_2;
                    let m = 3.0 * d23 * (d23 + d12);
                    Point::new(
                        (p2.x * b + p1.x * d23_2 - p3.x * d12_2) / m,
                        (p2.y * b + p1.y * d23_2 - p3.y * d12_2) / m,
                    )
                } else {
                    p2
                }
            }
            None => p2,
        };

        path.curve_to(c1, c2, p2);
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/transform/curve.rs"]
mod tests;
