use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Position in the map container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &ScreenPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Geographic-to-screen mapping under the map's current pan and zoom.
///
/// Supplied by the rendering backend; closures work directly.
pub trait Projector {
    fn project(&self, point: GeoPoint) -> ScreenPoint;
}

impl<F> Projector for F
where
    F: Fn(GeoPoint) -> ScreenPoint,
{
    fn project(&self, point: GeoPoint) -> ScreenPoint {
        self(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_projectors() {
        let flat = |p: GeoPoint| ScreenPoint::new(p.lng, -p.lat);
        let projected = flat.project(GeoPoint { lat: 10.0, lng: 20.0 });
        assert_eq!(projected, ScreenPoint::new(20.0, -10.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = ScreenPoint::new(0.0, 0.0);
        assert_eq!(a.distance(&ScreenPoint::new(3.0, 4.0)), 5.0);
    }
}
