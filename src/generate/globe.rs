//! Great-circle geodesy for globe trajectory sketches
//!
//! Converts latitude/longitude to unit-sphere Cartesian coordinates,
//! interpolates along great circles, and builds named multi-waypoint
//! routes. A parabolic elevation multiplier lifts the track off the sphere
//! for a flight-arc effect.

use rand::Rng;

use super::Point3;

/// Angular threshold below which slerp degrades to a linear blend.
const MIN_ANGLE: f64 = 1e-6;

/// Peak height of the elevation arc at altitude 1.0.
const ARC_SCALE: f64 = 0.35;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Named trajectory routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Great-circle arc between two distant points
    Arc,
    /// Hemisphere crossing routed over the pole
    Polar,
    /// Low-latitude wobble around the equator
    Equator,
    /// Several random waypoints
    Roam,
    /// Closed loop returning to its origin
    Circuit,
    /// Caller-supplied waypoints
    Custom,
}

impl Route {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "arc" => Some(Route::Arc),
            "polar" => Some(Route::Polar),
            "equator" => Some(Route::Equator),
            "roam" => Some(Route::Roam),
            "circuit" => Some(Route::Circuit),
            "custom" => Some(Route::Custom),
            _ => None,
        }
    }
}

/// Convert degrees latitude/longitude to a unit-sphere vector.
pub fn to_cartesian(point: LatLon) -> Point3 {
    let lat = point.lat.to_radians();
    let lon = point.lon.to_radians();
    [lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()]
}

/// Spherical linear interpolation between two unit vectors.
///
/// Falls back to a normalized linear blend when the separation angle is too
/// small for the spherical weights to be numerically sound.
pub fn slerp(a: Point3, b: Point3, t: f64) -> Point3 {
    let dot = (a[0] * b[0] + a[1] * b[1] + a[2] * b[2]).clamp(-1.0, 1.0);
    let omega = dot.acos();
    let sin_omega = omega.sin();

    if omega < MIN_ANGLE || sin_omega.abs() < MIN_ANGLE {
        return normalize(lerp(a, b, t));
    }

    let ka = ((1.0 - t) * omega).sin() / sin_omega;
    let kb = (t * omega).sin() / sin_omega;
    [
        a[0] * ka + b[0] * kb,
        a[1] * ka + b[1] * kb,
        a[2] * ka + b[2] * kb,
    ]
}

/// Radius multiplier for the flight arc at path parameter `t` in [0, 1].
///
/// Exactly 1.0 at both ends and for zero altitude; peaks at t = 0.5.
pub fn elevation(t: f64, altitude: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 + altitude * ARC_SCALE * 4.0 * t * (1.0 - t)
}

/// Build the waypoint list for a route.
pub fn route_waypoints(route: Route, custom: &[LatLon], rng: &mut impl Rng) -> Vec<LatLon> {
    match route {
        Route::Arc => {
            let start = LatLon::new(rng.gen_range(-50.0..=50.0), rng.gen_range(-180.0..=-20.0));
            let end = LatLon::new(rng.gen_range(-50.0..=50.0), rng.gen_range(20.0..=180.0));
            vec![start, end]
        }
        Route::Polar => {
            let lon = rng.gen_range(-180.0..=180.0);
            let start = LatLon::new(rng.gen_range(-60.0..=-20.0), lon);
            let end = LatLon::new(rng.gen_range(20.0..=60.0), wrap_lon(lon + 180.0));
            let over_pole = LatLon::new(87.0, wrap_lon(lon + 90.0));
            vec![start, over_pole, end]
        }
        Route::Equator => {
            let offset = rng.gen_range(-180.0..=180.0);
            (0..5)
                .map(|i| {
                    LatLon::new(
                        rng.gen_range(-12.0..=12.0),
                        wrap_lon(offset + i as f64 * 72.0),
                    )
                })
                .collect()
        }
        Route::Roam => {
            let stops = rng.gen_range(4..=6);
            (0..stops).map(|_| random_point(rng)).collect()
        }
        Route::Circuit => {
            let stops = 4;
            let mut points: Vec<LatLon> = (0..stops).map(|_| random_point(rng)).collect();
            if let Some(first) = points.first().copied() {
                points.push(first);
            }
            points
        }
        Route::Custom => {
            if custom.len() >= 2 {
                custom.to_vec()
            } else {
                // Too few waypoints to form a leg; fall back to an arc
                route_waypoints(Route::Arc, custom, rng)
            }
        }
    }
}

/// Sample a full trajectory: `detail` slerp steps per leg, radius scaled by
/// the elevation arc over the whole path.
pub fn trajectory(
    route: Route,
    custom: &[LatLon],
    altitude: f64,
    detail: usize,
    rng: &mut impl Rng,
) -> Vec<Point3> {
    let detail = detail.max(2);
    let waypoints = route_waypoints(route, custom, rng);
    if waypoints.len() < 2 {
        return Vec::new();
    }

    let anchors: Vec<Point3> = waypoints.iter().copied().map(to_cartesian).collect();
    let legs = anchors.len() - 1;
    let total = legs * detail;
    let mut track = Vec::with_capacity(total + 1);

    for step in 0..=total {
        let t = step as f64 / total as f64;
        let (leg, local) = if step == total {
            (legs - 1, 1.0)
        } else {
            (step / detail, (step % detail) as f64 / detail as f64)
        };
        let point = slerp(anchors[leg], anchors[leg + 1], local);
        let radius = elevation(t, altitude);
        track.push([point[0] * radius, point[1] * radius, point[2] * radius]);
    }

    track
}

fn random_point(rng: &mut impl Rng) -> LatLon {
    LatLon::new(rng.gen_range(-60.0..=60.0), rng.gen_range(-180.0..=180.0))
}

fn wrap_lon(lon: f64) -> f64 {
    let mut lon = lon;
    while lon > 180.0 {
        lon -= 360.0;
    }
    while lon < -180.0 {
        lon += 360.0;
    }
    lon
}

fn lerp(a: Point3, b: Point3, t: f64) -> Point3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn normalize(v: Point3) -> Point3 {
    let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if norm < MIN_ANGLE {
        // Degenerate blend of opposite vectors; any perpendicular will do
        return [1.0, 0.0, 0.0];
    }
    [v[0] / norm, v[1] / norm, v[2] / norm]
}
