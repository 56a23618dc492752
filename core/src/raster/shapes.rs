//! Distance functions for the raster surface.

use crate::canvas::Point;

/// Distance from `(x, y)` to the segment `a`–`b`.
pub(super) fn capsule_distance(x: f32, y: f32, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > f32::EPSILON {
        (((x - a.x) * dx + (y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (x - (a.x + t * dx)).hypot(y - (a.y + t * dy))
}

/// Signed distance from `(x, y)` to the box of half-width `half_width`
/// around the segment `a`–`b`, lengthened by `extension` past each end.
///
/// A zero-length segment is treated as horizontal.
pub(super) fn segment_box_distance(
    x: f32,
    y: f32,
    a: Point,
    b: Point,
    half_width: f32,
    extension: f32,
) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = dx.hypot(dy);
    let (ux, uy) = if len > f32::EPSILON {
        (dx / len, dy / len)
    } else {
        (1.0, 0.0)
    };

    let (cx, cy) = ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let (px, py) = (x - cx, y - cy);
    let along = (px * ux + py * uy).abs() - (len / 2.0 + extension);
    let across = (-px * uy + py * ux).abs() - half_width;

    let outside = along.max(0.0).hypot(across.max(0.0));
    let inside = along.max(across).min(0.0);
    outside + inside
}

/// Signed distance from `(x, y)` to the outline of the filled contours,
/// negative inside. Contours are implicitly closed and filled with the
/// even-odd rule; contours with fewer than three points enclose nothing.
pub(super) fn polygon_distance(x: f32, y: f32, contours: &[(Vec<Point>, bool)]) -> f32 {
    let mut inside = false;
    let mut nearest = f32::INFINITY;

    for (points, _) in contours {
        if points.len() < 3 {
            continue;
        }
        for (i, &p0) in points.iter().enumerate() {
            let p1 = points[(i + 1) % points.len()];
            if (p0.y <= y) != (p1.y <= y) {
                let crossing = p0.x + (y - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
                if x < crossing {
                    inside = !inside;
                }
            }
            nearest = nearest.min(capsule_distance(x, y, p0, p1));
        }
    }

    if inside {
        -nearest
    } else {
        nearest
    }
}
