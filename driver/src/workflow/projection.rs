use travelcore::{GeoPoint, Projector, ScreenPoint};

use crate::workflow::config::MapView;

const MAX_LATITUDE: f64 = 85.051_128_78;

/// Web Mercator projection relative to the map center, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    world_size: f64,
    origin: ScreenPoint,
}

impl WebMercator {
    pub fn new(view: &MapView) -> Self {
        let world_size = view.tile_size * 2f64.powf(view.zoom);
        let origin = world_pixel(
            world_size,
            GeoPoint {
                lat: view.center_lat,
                lng: view.center_lng,
            },
        );
        Self { world_size, origin }
    }
}

fn world_pixel(world_size: f64, point: GeoPoint) -> ScreenPoint {
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * world_size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * world_size;
    ScreenPoint::new(x, y)
}

impl Projector for WebMercator {
    fn project(&self, point: GeoPoint) -> ScreenPoint {
        let pixel = world_pixel(self.world_size, point);
        ScreenPoint::new(pixel.x - self.origin.x, pixel.y - self.origin.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_projects_to_origin() {
        let view = MapView::default();
        let projection = WebMercator::new(&view);
        let center = projection.project(GeoPoint {
            lat: view.center_lat,
            lng: view.center_lng,
        });
        assert!(center.x.abs() < 1e-9 && center.y.abs() < 1e-9);
    }

    #[test]
    fn zooming_in_doubles_distances() {
        let a = GeoPoint { lat: 48.85, lng: 2.35 };
        let b = GeoPoint { lat: 51.5, lng: -0.12 };
        let near = WebMercator::new(&MapView { zoom: 3.0, ..Default::default() });
        let far = WebMercator::new(&MapView { zoom: 4.0, ..Default::default() });
        let ratio = far.project(a).distance(&far.project(b)) / near.project(a).distance(&near.project(b));
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn north_is_up() {
        let projection = WebMercator::new(&MapView::default());
        let oslo = projection.project(GeoPoint { lat: 59.9, lng: 10.7 });
        let rome = projection.project(GeoPoint { lat: 41.9, lng: 12.5 });
        assert!(oslo.y < rome.y);
    }
}
