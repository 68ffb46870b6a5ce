//! Resampling between paths and height arrays.
//!
//! The separator and morph pipelines work on evenly spaced height samples
//! rather than on raw path commands: sample the curve, perturb the heights,
//! then rebuild a smooth path. Rebuilding uses cubics with horizontal
//! tangents so any height array yields a visually clean wave.

use tracing::warn;

use crate::path::{PathCommand, PathData};
use crate::patterns::util::close_region;

/// Fraction of a segment's width given to each cubic control point.
const CONTROL_REACH: f64 = 0.4;

/// Sample a wave path's height at `count` evenly spaced x positions.
///
/// Points outside `0..=width` are ignored. Heights between recorded points
/// are linearly interpolated; positions past the first or last point clamp
/// to the nearest recorded height. An unparseable or pointless path yields
/// all zeros with a warning, because the separator pipeline prefers a flat
/// edge over an abort mid-composition.
pub fn sample_heights(path: &PathData, width: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let mut points: Vec<(f64, f64)> = path
        .points()
        .into_iter()
        .filter(|(x, _)| (0.0..=width).contains(x))
        .collect();
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    if points.is_empty() {
        warn!(width, count, "no sampleable points, using a flat edge");
        return vec![0.0; count];
    }

    let step = if count > 1 {
        width / (count - 1) as f64
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let x = i as f64 * step;
            height_at(&points, x)
        })
        .collect()
}

/// Interpolated height at `x` over a slice of points sorted by x.
fn height_at(points: &[(f64, f64)], x: f64) -> f64 {
    let first = points[0];
    if x <= first.0 {
        return first.1;
    }
    let last = points[points.len() - 1];
    if x >= last.0 {
        return last.1;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 - x0 <= f64::EPSILON {
                return y1;
            }
            let t = (x - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    last.1
}

/// Rebuild a closed wave region from evenly spaced height samples.
///
/// Consecutive samples are joined by cubics whose control points extend
/// horizontally from each endpoint, giving zero slope at every sample.
///
/// # Panics
///
/// Panics if `heights` has fewer than two samples; a wave needs at least
/// both edges.
pub fn path_from_samples(heights: &[f64], width: f64, height: f64) -> PathData {
    assert!(
        heights.len() >= 2,
        "path_from_samples needs at least 2 height samples, got {}",
        heights.len()
    );

    let step = width / (heights.len() - 1) as f64;
    let reach = step * CONTROL_REACH;

    let mut curve = Vec::with_capacity(heights.len() - 1);
    for (i, pair) in heights.windows(2).enumerate() {
        let x0 = i as f64 * step;
        let x1 = (i + 1) as f64 * step;
        curve.push(PathCommand::curve_to(
            x0 + reach,
            pair[0],
            x1 - reach,
            pair[1],
            x1,
            pair[1],
        ));
    }

    close_region(heights[0], curve, width, height)
}

// ====== TESTS ======

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_a_straight_line_exactly() {
        let path = PathData::parse("M 0,50 L 100,50").unwrap();
        let heights = sample_heights(&path, 100.0, 5);
        assert_eq!(heights, vec![50.0; 5]);
    }

    #[test]
    fn interpolates_between_points() {
        let path = PathData::parse("M 0,0 L 100,100").unwrap();
        let heights = sample_heights(&path, 100.0, 3);
        assert_eq!(heights, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn ignores_points_outside_the_span() {
        let inside = PathData::parse("M 0,10 L 100,20").unwrap();
        let with_stray = PathData::parse("M -500,99 L 0,10 L 100,20 L 900,99").unwrap();
        assert_eq!(
            sample_heights(&with_stray, 100.0, 4),
            sample_heights(&inside, 100.0, 4)
        );
    }

    #[test]
    fn clamps_past_the_recorded_ends() {
        let path = PathData::parse("M 40,10 L 60,30").unwrap();
        let heights = sample_heights(&path, 100.0, 3);
        assert_eq!(heights, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn empty_path_gives_flat_zeros() {
        let path = PathData::new();
        assert_eq!(sample_heights(&path, 100.0, 4), vec![0.0; 4]);
    }

    #[test]
    fn zero_count_gives_nothing() {
        let path = PathData::parse("M 0,50 L 100,50").unwrap();
        assert!(sample_heights(&path, 100.0, 0).is_empty());
    }

    #[test]
    fn rebuild_produces_the_canonical_frame() {
        let path = path_from_samples(&[60.0, 30.0, 60.0], 200.0, 120.0);
        assert_eq!(
            path.to_string(),
            "M 0,120 L 0,60 C 40,60 60,30 100,30 C 140,30 160,60 200,60 L 200,120 Z"
        );
    }

    #[test]
    fn sample_then_rebuild_keeps_sample_heights() {
        // Sample the bare curve, not the closed region, so the frame corners
        // at full height stay out of the height data
        let original = path_from_samples(&[50.0, 20.0, 70.0, 40.0], 300.0, 100.0);
        let contour = crate::transform::contour_path(&original);
        let heights = sample_heights(&contour, 300.0, 4);
        for (got, want) in heights.iter().zip([50.0, 20.0, 70.0, 40.0]) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[test]
    #[should_panic(expected = "at least 2 height samples")]
    fn rebuild_rejects_a_single_sample() {
        path_from_samples(&[50.0], 100.0, 100.0);
    }
}
