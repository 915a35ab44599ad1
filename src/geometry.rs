/// A position on the floor plan, in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    fn sub(&self, other: &Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.1 - a.1 * b.0
}

/// Returns whether the open segment `tx`-`rx` crosses the open segment `w1`-`w2`.
///
/// Both crossing parameters must lie strictly inside (0, 1): touching a wall
/// endpoint, or a segment ending exactly on the other one, does not count.
/// Parallel and collinear segments never intersect. The comparison is done on
/// the numerators of the parametric solution so no division and no tolerance
/// is involved.
///
/// Callers must not pass `tx == rx` or `w1 == w2`; such inputs yield `false`.
pub fn intersects(tx: &Point, rx: &Point, w1: &Point, w2: &Point) -> bool {
    let path = rx.sub(tx);
    let wall = w2.sub(w1);
    let denom = cross(path, wall);
    if denom == 0.0 {
        return false;
    }

    let offset = w1.sub(tx);
    // tx + t * path == w1 + u * wall, with t = t_num / denom and u = u_num / denom
    let t_num = cross(offset, wall);
    let u_num = cross(offset, path);

    if denom > 0.0 {
        0.0 < t_num && t_num < denom && 0.0 < u_num && u_num < denom
    } else {
        denom < t_num && t_num < 0.0 && denom < u_num && u_num < 0.0
    }
}
