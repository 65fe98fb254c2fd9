//! 3D point-cloud generators
//!
//! Six named distributions producing N points in roughly the [-1, 1] cube,
//! with optional uniform jitter applied afterward.

use rand::Rng;

use super::Point3;

/// Spread of the Gaussian cluster distribution.
const CLUSTER_SIGMA: f64 = 0.35;

/// Golden angle in radians, used by the Fibonacci sphere.
const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// The twelve edges of the unit cube wireframe, as corner pairs.
const CUBE_EDGES: [([f64; 3], [f64; 3]); 12] = [
    ([-1.0, -1.0, -1.0], [1.0, -1.0, -1.0]),
    ([-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]),
    ([-1.0, -1.0, 1.0], [1.0, -1.0, 1.0]),
    ([-1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
    ([-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0]),
    ([1.0, -1.0, -1.0], [1.0, 1.0, -1.0]),
    ([-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0]),
    ([1.0, -1.0, 1.0], [1.0, 1.0, 1.0]),
    ([-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0]),
    ([1.0, -1.0, -1.0], [1.0, -1.0, 1.0]),
    ([-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0]),
    ([1.0, 1.0, -1.0], [1.0, 1.0, 1.0]),
];

/// Named point-cloud distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// Uniform in the cube
    Random,
    /// Even coverage of the unit sphere via a Fibonacci spiral
    Sphere,
    /// Points along a vertical helix
    Helix,
    /// Points along the cube wireframe edges
    Cube,
    /// Gaussian cluster around the origin
    Cluster,
    /// sin/cos product height field over a grid
    Wave,
}

impl Spread {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random" => Some(Spread::Random),
            "sphere" => Some(Spread::Sphere),
            "helix" => Some(Spread::Helix),
            "cube" => Some(Spread::Cube),
            "cluster" => Some(Spread::Cluster),
            "wave" => Some(Spread::Wave),
            _ => None,
        }
    }
}

/// Generate `count` points of the given distribution.
pub fn scatter(spread: Spread, count: usize, rng: &mut impl Rng) -> Vec<Point3> {
    match spread {
        Spread::Random => (0..count)
            .map(|_| {
                [
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                ]
            })
            .collect(),
        Spread::Sphere => {
            let denom = count.saturating_sub(1).max(1) as f64;
            (0..count)
                .map(|i| {
                    let y = 1.0 - 2.0 * i as f64 / denom;
                    let r = (1.0 - y * y).max(0.0).sqrt();
                    let theta = GOLDEN_ANGLE * i as f64;
                    [r * theta.cos(), y, r * theta.sin()]
                })
                .collect()
        }
        Spread::Helix => {
            let turns = 3.0;
            let radius = 0.6;
            let denom = count.saturating_sub(1).max(1) as f64;
            (0..count)
                .map(|i| {
                    let t = i as f64 / denom;
                    let angle = t * turns * std::f64::consts::TAU;
                    [radius * angle.cos(), t * 2.0 - 1.0, radius * angle.sin()]
                })
                .collect()
        }
        Spread::Cube => {
            let per_edge = count.div_ceil(CUBE_EDGES.len());
            let denom = per_edge.saturating_sub(1).max(1) as f64;
            (0..count)
                .map(|i| {
                    let (a, b) = CUBE_EDGES[i % CUBE_EDGES.len()];
                    let t = (i / CUBE_EDGES.len()) as f64 / denom;
                    [
                        a[0] + (b[0] - a[0]) * t,
                        a[1] + (b[1] - a[1]) * t,
                        a[2] + (b[2] - a[2]) * t,
                    ]
                })
                .collect()
        }
        Spread::Cluster => (0..count)
            .map(|_| [gaussian(rng), gaussian(rng), gaussian(rng)])
            .collect(),
        Spread::Wave => {
            let side = (count as f64).sqrt().ceil().max(1.0) as usize;
            let denom = side.saturating_sub(1).max(1) as f64;
            (0..count)
                .map(|i| {
                    let x = (i % side) as f64 / denom * 2.0 - 1.0;
                    let z = (i / side) as f64 / denom * 2.0 - 1.0;
                    let y = (x * std::f64::consts::PI).sin() * (z * std::f64::consts::PI).cos() * 0.5;
                    [x, y, z]
                })
                .collect()
        }
    }
}

/// Apply uniform jitter of `amount` to every coordinate, in place.
pub fn jitter(points: &mut [Point3], amount: f64, rng: &mut impl Rng) {
    if amount <= 0.0 {
        return;
    }
    for point in points {
        for coord in point {
            *coord += rng.gen_range(-amount..=amount);
        }
    }
}

/// One standard Gaussian sample via Box–Muller, scaled to the cluster sigma.
fn gaussian(rng: &mut impl Rng) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.gen();
    CLUSTER_SIGMA * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(31)
    }

    fn all_spreads() -> [Spread; 6] {
        [
            Spread::Random,
            Spread::Sphere,
            Spread::Helix,
            Spread::Cube,
            Spread::Cluster,
            Spread::Wave,
        ]
    }

    #[test]
    fn test_exact_point_counts() {
        for spread in all_spreads() {
            for count in [0, 1, 7, 100] {
                assert_eq!(scatter(spread, count, &mut rng()).len(), count);
            }
        }
    }

    #[test]
    fn test_all_points_finite() {
        for spread in all_spreads() {
            for point in scatter(spread, 128, &mut rng()) {
                assert!(point.iter().all(|c| c.is_finite()), "{:?}", spread);
            }
        }
    }

    #[test]
    fn test_sphere_points_on_unit_sphere() {
        for point in scatter(Spread::Sphere, 64, &mut rng()) {
            let norm = (point[0] * point[0] + point[1] * point[1] + point[2] * point[2]).sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cube_points_on_edges() {
        for point in scatter(Spread::Cube, 96, &mut rng()) {
            // On a wireframe edge, at least two coordinates sit at ±1
            let extreme = point.iter().filter(|c| (c.abs() - 1.0).abs() < 1e-9).count();
            assert!(extreme >= 2, "not on an edge: {:?}", point);
        }
    }

    #[test]
    fn test_random_points_in_cube() {
        for point in scatter(Spread::Random, 64, &mut rng()) {
            assert!(point.iter().all(|c| c.abs() <= 1.0));
        }
    }

    #[test]
    fn test_jitter_moves_points() {
        let mut points = scatter(Spread::Sphere, 32, &mut rng());
        let before = points.clone();
        jitter(&mut points, 0.05, &mut rng());
        assert!(points.iter().zip(&before).any(|(a, b)| a != b));
    }

    #[test]
    fn test_zero_jitter_is_identity() {
        let mut points = scatter(Spread::Helix, 32, &mut rng());
        let before = points.clone();
        jitter(&mut points, 0.0, &mut rng());
        assert_eq!(points, before);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Spread::from_name("sphere"), Some(Spread::Sphere));
        assert_eq!(Spread::from_name("Cluster"), Some(Spread::Cluster));
        assert_eq!(Spread::from_name("torus"), None);
    }
}
