//! Point reduction for low-fidelity output.
//!
//! Ramer-Douglas-Peucker over the region's flattened points. The result is
//! a pure polyline region: coarser than the curved original, but much
//! smaller, which is what plotters and low-DPI clip targets want.

use tracing::warn;

use crate::path::{PathCommand, PathData};

/// Simplify a wave region to a polyline region, dropping points that sit
/// within `epsilon` of the line between their surviving neighbors.
///
/// `epsilon <= 0` returns the input unchanged, as does anything that cannot
/// be parsed or has too few points to reduce.
pub fn simplify_path(d: &str, epsilon: f64) -> String {
    if epsilon <= 0.0 {
        return d.to_string();
    }
    let path = match PathData::parse(d) {
        Ok(path) => path,
        Err(err) => {
            warn!(%err, "cannot simplify an unparseable path");
            return d.to_string();
        }
    };
    let points = path.points();
    if points.len() <= 2 {
        return d.to_string();
    }

    let kept = rdp_simplify(&points, epsilon);

    let mut commands = Vec::with_capacity(kept.len() + 1);
    commands.push(PathCommand::move_to(kept[0].0, kept[0].1));
    for (x, y) in &kept[1..] {
        commands.push(PathCommand::line_to(*x, *y));
    }
    commands.push(PathCommand::Close);
    PathData { commands }.to_string()
}

/// Recursive Ramer-Douglas-Peucker. Endpoints always survive.
fn rdp_simplify(points: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (i, point) in points.iter().enumerate().skip(1).take(points.len() - 2) {
        let dist = perpendicular_distance(*point, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i;
        }
    }

    if max_dist > epsilon {
        let mut left = rdp_simplify(&points[..=max_idx], epsilon);
        let right = rdp_simplify(&points[max_idx..], epsilon);
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

fn perpendicular_distance(point: (f64, f64), start: (f64, f64), end: (f64, f64)) -> f64 {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len_sq = dx * dx + dy * dy;
    if len_sq < 1e-10 {
        let px = point.0 - start.0;
        let py = point.1 - start.1;
        return (px * px + py * py).sqrt();
    }
    let t = (((point.0 - start.0) * dx + (point.1 - start.1) * dy) / len_sq).clamp(0.0, 1.0);
    let proj_x = start.0 + t * dx;
    let proj_y = start.1 + t * dy;
    let px = point.0 - proj_x;
    let py = point.1 - proj_y;
    (px * px + py * py).sqrt()
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: &str = "M 0,120 L 0,60 Q 100,30 200,60 L 200,120 Z";

    #[test]
    fn zero_epsilon_is_identity() {
        assert_eq!(simplify_path(REGION, 0.0), REGION);
        assert_eq!(simplify_path(REGION, -1.0), REGION);
    }

    #[test]
    fn output_is_a_closed_polyline() {
        let simplified = simplify_path(REGION, 1.0);
        assert!(simplified.starts_with("M "));
        assert!(simplified.ends_with(" Z"));
        assert!(!simplified.contains('Q'));
        assert!(!simplified.contains('C'));
    }

    #[test]
    fn endpoints_survive() {
        let simplified = simplify_path(REGION, 1000.0);
        // Brutal epsilon leaves only the traversal endpoints
        assert_eq!(simplified, "M 0,120 L 200,120 Z");
    }

    #[test]
    fn larger_epsilon_never_keeps_more_points() {
        let counts: Vec<usize> = [0.5, 2.0, 10.0, 50.0]
            .iter()
            .map(|eps| simplify_path(REGION, *eps).split(' ').count())
            .collect();
        for pair in counts.windows(2) {
            assert!(pair[0] >= pair[1], "{counts:?}");
        }
    }

    #[test]
    fn collinear_points_collapse() {
        let simplified = simplify_path("M 0,50 L 50,50 L 100,50 L 150,50 L 200,50", 0.1);
        assert_eq!(simplified, "M 0,50 L 200,50 Z");
    }

    #[test]
    fn off_line_points_survive_small_epsilon() {
        let simplified = simplify_path("M 0,50 L 100,10 L 200,50", 5.0);
        assert_eq!(simplified, "M 0,50 L 100,10 L 200,50 Z");
    }

    #[test]
    fn unparseable_passes_through() {
        assert_eq!(simplify_path("M zig", 2.0), "M zig");
    }

    #[test]
    fn tiny_paths_pass_through() {
        assert_eq!(simplify_path("M 0,50 L 200,50", 2.0), "M 0,50 L 200,50");
        assert_eq!(simplify_path("", 2.0), "");
    }
}
