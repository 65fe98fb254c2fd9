//! 2D path generators for map-style trajectory sketches
//!
//! Each shape produces a polyline inset from its bounding box so strokes
//! stay clear of the box edges.

use rand::Rng;

use super::Point2;

/// Number of samples along a generated path.
const SAMPLES: usize = 24;

/// Inset from the bounding box, as a fraction of its smaller side.
const PAD_RATIO: f64 = 0.12;

/// Named 2D path shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    /// Closed elliptical loop
    Loop,
    /// Near-linear sweep with a slight bow
    Curve,
    /// One smooth S across the box
    SCurve,
    /// Random walk with clamped vertical steps
    Wander,
    /// Hard alternation between two bands
    ZigZag,
}

impl PathShape {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "loop" => Some(PathShape::Loop),
            "curve" => Some(PathShape::Curve),
            "s-curve" | "scurve" => Some(PathShape::SCurve),
            "wander" => Some(PathShape::Wander),
            "zigzag" | "zig-zag" => Some(PathShape::ZigZag),
            _ => None,
        }
    }
}

/// Generate a polyline for `shape` inside a `width` x `height` box.
pub fn sample_path(shape: PathShape, width: f64, height: f64, rng: &mut impl Rng) -> Vec<Point2> {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let pad = PAD_RATIO * width.min(height);
    let (left, right) = (pad, width - pad);
    let (top, bottom) = (pad, height - pad);
    let cy = height / 2.0;

    match shape {
        PathShape::Loop => {
            let cx = width / 2.0;
            let rx = (right - left) / 2.0;
            let ry = (bottom - top) / 2.0;
            (0..=SAMPLES)
                .map(|i| {
                    let theta = std::f64::consts::TAU * i as f64 / SAMPLES as f64;
                    Point2::new(cx + rx * theta.cos(), cy + ry * theta.sin())
                })
                .collect()
        }
        PathShape::Curve => {
            let amp = (bottom - top) * 0.18;
            (0..SAMPLES)
                .map(|i| {
                    let t = i as f64 / (SAMPLES - 1) as f64;
                    let x = left + (right - left) * t;
                    let y = cy - amp * (std::f64::consts::PI * t).sin();
                    Point2::new(x, y)
                })
                .collect()
        }
        PathShape::SCurve => {
            let amp = (bottom - top) / 2.0;
            (0..SAMPLES)
                .map(|i| {
                    let t = i as f64 / (SAMPLES - 1) as f64;
                    let x = left + (right - left) * t;
                    let y = cy + amp * ((t - 0.5) * std::f64::consts::PI).sin();
                    Point2::new(x, y)
                })
                .collect()
        }
        PathShape::Wander => {
            let step = (bottom - top) / 6.0;
            let mut y = cy;
            (0..SAMPLES)
                .map(|i| {
                    let t = i as f64 / (SAMPLES - 1) as f64;
                    let x = left + (right - left) * t;
                    y = (y + rng.gen_range(-step..=step)).clamp(top, bottom);
                    Point2::new(x, y)
                })
                .collect()
        }
        PathShape::ZigZag => {
            let segments = 8;
            (0..=segments)
                .map(|i| {
                    let t = i as f64 / segments as f64;
                    let x = left + (right - left) * t;
                    let y = if i % 2 == 0 { top } else { bottom };
                    Point2::new(x, y)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn assert_in_box(points: &[Point2], width: f64, height: f64) {
        for p in points {
            assert!(p.x >= 0.0 && p.x <= width, "x out of box: {:?}", p);
            assert!(p.y >= 0.0 && p.y <= height, "y out of box: {:?}", p);
        }
    }

    #[test]
    fn test_all_shapes_stay_in_box() {
        for shape in [
            PathShape::Loop,
            PathShape::Curve,
            PathShape::SCurve,
            PathShape::Wander,
            PathShape::ZigZag,
        ] {
            let points = sample_path(shape, 320.0, 200.0, &mut rng());
            assert!(points.len() >= 2);
            assert_in_box(&points, 320.0, 200.0);
        }
    }

    #[test]
    fn test_loop_closes_on_itself() {
        let points = sample_path(PathShape::Loop, 100.0, 100.0, &mut rng());
        let first = points.first().expect("loop has points");
        let last = points.last().expect("loop has points");
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_zigzag_alternates_bands() {
        let points = sample_path(PathShape::ZigZag, 100.0, 100.0, &mut rng());
        for pair in points.windows(2) {
            assert!((pair[0].y - pair[1].y).abs() > 1.0);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PathShape::from_name("wander"), Some(PathShape::Wander));
        assert_eq!(PathShape::from_name("s-curve"), Some(PathShape::SCurve));
        assert_eq!(PathShape::from_name("ZigZag"), Some(PathShape::ZigZag));
        assert_eq!(PathShape::from_name("spiral"), None);
    }

    #[test]
    fn test_degenerate_box_is_guarded() {
        let points = sample_path(PathShape::Curve, 0.0, 0.0, &mut rng());
        for p in &points {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}
