use serde::{Deserialize, Serialize};

use crate::Point;

/// Threshold on the doubled signed triangle area.
///
/// Lattice inputs keep the area and determinant sums exact in `f64`, so every
/// tolerance here is fixed rather than scaled.
pub const COLLINEAR_EPSILON: f64 = 1e-7;
/// Threshold on the circumcenter denominator.
pub const CIRCUMCENTER_EPSILON: f64 = 1e-9;
/// Smallest radius accepted from `circumcircle`.
pub const MIN_RADIUS: f64 = 1e-4;
/// Threshold on the 4x4 concyclicity determinant.
pub const CONCYCLIC_EPSILON: f64 = 1e-7;

/// A circle in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: (f64, f64),
    pub radius: f64,
}

impl Circle {
    /// Distance from the center to `point`.
    pub fn distance_to(&self, (x, y): Point) -> f64 {
        (x as f64 - self.center.0).hypot(y as f64 - self.center.1)
    }
}

/// Twice the signed area of the triangle `p1 p2 p3` (shoelace formula).
fn doubled_area((x1, y1): Point, (x2, y2): Point, (x3, y3): Point) -> f64 {
    let (x1, y1, x2, y2, x3, y3) = (
        x1 as f64, y1 as f64, x2 as f64, y2 as f64, x3 as f64, y3 as f64,
    );
    x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)
}

pub fn are_collinear(p1: Point, p2: Point, p3: Point) -> bool {
    doubled_area(p1, p2, p3).abs() < COLLINEAR_EPSILON
}

/// The unique circle through three non-collinear points.
///
/// Returns `None` for collinear or coincident input.
pub fn circumcircle(p1: Point, p2: Point, p3: Point) -> Option<Circle> {
    if are_collinear(p1, p2, p3) {
        return None;
    }

    let d = 2.0 * doubled_area(p1, p2, p3);
    if d.abs() < CIRCUMCENTER_EPSILON {
        return None;
    }

    let sq = |(x, y): Point| (x as f64).powi(2) + (y as f64).powi(2);
    let (s1, s2, s3) = (sq(p1), sq(p2), sq(p3));
    let (x1, y1) = (p1.0 as f64, p1.1 as f64);
    let (x2, y2) = (p2.0 as f64, p2.1 as f64);
    let (x3, y3) = (p3.0 as f64, p3.1 as f64);

    let cx = (s1 * (y2 - y3) + s2 * (y3 - y1) + s3 * (y1 - y2)) / d;
    let cy = (s1 * (x3 - x2) + s2 * (x1 - x3) + s3 * (x2 - x1)) / d;

    let circle = Circle {
        center: (cx, cy),
        radius: 0.0,
    };
    let radius = circle.distance_to(p1);
    if radius < MIN_RADIUS {
        return None;
    }

    Some(Circle { radius, ..circle })
}

#[allow(clippy::too_many_arguments)]
fn det3(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64, h: f64, i: f64) -> f64 {
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

/// True when the four points lie on one circle or one line.
///
/// Evaluates the determinant of the rows `[x²+y², x, y, 1]`, which vanishes in
/// both cases (a line being a circle of infinite radius).
pub fn is_concyclic_or_collinear(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let m: [[f64; 4]; 4] = [p1, p2, p3, p4].map(|(x, y)| {
        let (x, y) = (x as f64, y as f64);
        [x * x + y * y, x, y, 1.0]
    });

    let mut det = 0.0;
    det += m[0][0]
        * det3(
            m[1][1], m[1][2], m[1][3], m[2][1], m[2][2], m[2][3], m[3][1], m[3][2], m[3][3],
        );
    det -= m[0][1]
        * det3(
            m[1][0], m[1][2], m[1][3], m[2][0], m[2][2], m[2][3], m[3][0], m[3][2], m[3][3],
        );
    det += m[0][2]
        * det3(
            m[1][0], m[1][1], m[1][3], m[2][0], m[2][1], m[2][3], m[3][0], m[3][1], m[3][3],
        );
    det -= m[0][3]
        * det3(
            m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2], m[3][0], m[3][1], m[3][2],
        );

    det.abs() < CONCYCLIC_EPSILON
}
