use crate::Point;

/// Boards below this size show no star points.
pub const MIN_STAR_DIVISIONS: u8 = 8;

/// Decorative star points for a board with the given divisions.
///
/// Quarter points on every board from 8 up, the center on even boards, and the
/// side midpoints from 12 up. Purely cosmetic.
pub fn star_points(divisions: u8) -> Vec<Point> {
    if divisions < MIN_STAR_DIVISIONS {
        return Vec::new();
    }

    let n = divisions as i32;
    // N/4 rounded half up
    let off = (n + 2) / 4;
    let far = n - off;
    let mid = (n + 1) / 2;

    let mut pts = vec![(off, off), (far, off), (off, far), (far, far)];
    if n % 2 == 0 {
        pts.push((mid, mid));
    }
    if n >= 12 {
        pts.extend([(off, mid), (far, mid), (mid, off), (mid, far)]);
    }

    let mut unique = Vec::with_capacity(pts.len());
    for p in pts {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    unique
}
