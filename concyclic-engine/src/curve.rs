use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::combinations::combinations;
use crate::geometry::{Circle, are_collinear, circumcircle};

/// Absolute floor of the fourth-point check in `reconstruct_curve`.
const FIT_TOLERANCE_FLOOR: f64 = 0.01;
/// Radius-relative part of the fourth-point check in `reconstruct_curve`.
const FIT_TOLERANCE_RATIO: f64 = 0.02;

/// The curve drawn through a losing set of four stones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurvePath {
    Line { start: Point, end: Point },
    Circle(Circle),
}

impl CurvePath {
    pub fn is_circle(&self) -> bool {
        matches!(self, CurvePath::Circle(_))
    }

    /// The chord of a `Line` across the board square `[0, divisions]²`, in grid units.
    ///
    /// Returns `None` for circles, or when the line misses the board.
    pub fn board_segment(&self, divisions: u8) -> Option<((f64, f64), (f64, f64))> {
        let CurvePath::Line { start, end } = *self else {
            return None;
        };
        let max = divisions as f64;
        let (x1, y1) = (start.0 as f64, start.1 as f64);
        let (x2, y2) = (end.0 as f64, end.1 as f64);
        let on_edge = |v: f64| (0.0..=max).contains(&v);

        let mut hits: ArrayVec<(f64, f64), 4> = ArrayVec::new();
        if start.0 == end.0 {
            hits.push((x1, 0.0));
            hits.push((x1, max));
        } else if start.1 == end.1 {
            hits.push((0.0, y1));
            hits.push((max, y1));
        } else {
            let slope = (y2 - y1) / (x2 - x1);
            let intercept = y1 - slope * x1;

            let y_at_min = intercept;
            if on_edge(y_at_min) {
                hits.push((0.0, y_at_min));
            }
            let y_at_max = slope * max + intercept;
            if on_edge(y_at_max) {
                hits.push((max, y_at_max));
            }
            let x_at_min = -intercept / slope;
            if on_edge(x_at_min) {
                hits.push((x_at_min, 0.0));
            }
            let x_at_max = (max - intercept) / slope;
            if on_edge(x_at_max) {
                hits.push((x_at_max, max));
            }
        }

        let mut best = None;
        let mut best_dist = -1.0;
        for (i, &a) in hits.iter().enumerate() {
            for &b in &hits[i + 1..] {
                let d = (a.0 - b.0).powi(2) + (a.1 - b.1).powi(2);
                if d > best_dist {
                    best_dist = d;
                    best = Some((a, b));
                }
            }
        }
        best
    }
}

/// Sorted by `(x, y)`, the first and last of the four points.
fn extremes(points: &[Point; 4]) -> CurvePath {
    let mut sorted = *points;
    sorted.sort();
    CurvePath::Line {
        start: sorted[0],
        end: sorted[3],
    }
}

/// Derive the line or circle through four points already known to be
/// concyclic or collinear.
pub fn reconstruct_curve(points: &[Point; 4]) -> CurvePath {
    let [p1, p2, p3, p4] = *points;
    if are_collinear(p1, p2, p3)
        && are_collinear(p1, p2, p4)
        && are_collinear(p1, p3, p4)
        && are_collinear(p2, p3, p4)
    {
        return extremes(points);
    }

    for triple in combinations(&[0usize, 1, 2, 3], 3) {
        let (a, b, c) = (points[triple[0]], points[triple[1]], points[triple[2]]);
        if are_collinear(a, b, c) {
            continue;
        }
        let Some(circle) = circumcircle(a, b, c) else {
            continue;
        };
        let Some(rest) = (0..4).find(|i| !triple.contains(i)) else {
            continue;
        };
        let tolerance = FIT_TOLERANCE_FLOOR.max(circle.radius * FIT_TOLERANCE_RATIO);
        if (circle.distance_to(points[rest]) - circle.radius).abs() < tolerance {
            return CurvePath::Circle(circle);
        }
    }

    tracing::warn!("Circle identification failed for {points:?}, falling back to a line");
    extremes(points)
}
