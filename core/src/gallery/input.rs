use crate::gallery::navigator::{Direction, GalleryNavigator};

/// Minimum horizontal travel, in pixels, for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Space,
}

impl GalleryKey {
    /// Parses DOM-style key names.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(GalleryKey::Escape),
            "ArrowLeft" => Some(GalleryKey::ArrowLeft),
            "ArrowRight" => Some(GalleryKey::ArrowRight),
            " " | "Space" | "Spacebar" => Some(GalleryKey::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(GalleryKey),
    Swipe { start_x: f64, end_x: f64 },
}

impl GalleryNavigator {
    /// Routes a keyboard or touch event. Only autoplay toggling works while the
    /// gallery is closed. Returns whether any state changed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if let InputEvent::Key(GalleryKey::Space) = event {
            let was_active = self.is_autoplay_active();
            let now_active = self.toggle_autoplay().is_some();
            return was_active || now_active;
        }
        if !self.is_open() {
            return false;
        }
        match event {
            InputEvent::Key(GalleryKey::Escape) => self.close(),
            InputEvent::Key(GalleryKey::ArrowLeft) => self.navigate(Direction::Previous),
            InputEvent::Key(GalleryKey::ArrowRight) => self.navigate(Direction::Next),
            InputEvent::Key(GalleryKey::Space) => false,
            InputEvent::Swipe { start_x, end_x } => {
                let travel = start_x - end_x;
                if travel.abs() <= SWIPE_THRESHOLD_PX {
                    return false;
                }
                let direction = if travel > 0.0 {
                    Direction::Next
                } else {
                    Direction::Previous
                };
                self.navigate(direction)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Photo, Visit};
    use crate::prelude::ViewerConfig;
    use std::sync::Arc;

    fn navigator() -> GalleryNavigator {
        let photos = (1..=4)
            .map(|i| Photo::dated(format!("hanoi/{i}.jpg"), format!("2018-11-0{i}")))
            .collect();
        let visits = vec![Visit {
            city: "Hanoi".into(),
            country: "Vietnam".into(),
            country_code: Some("VN".into()),
            lat: 21.0,
            lng: 105.8,
            photos,
        }];
        GalleryNavigator::new(Arc::new(visits), &ViewerConfig::default())
    }

    #[test]
    fn keys_map_onto_navigation() {
        let mut nav = navigator();
        assert!(!nav.handle_input(InputEvent::Key(GalleryKey::ArrowRight)));

        nav.open_global(None);
        assert!(nav.handle_input(InputEvent::Key(GalleryKey::ArrowRight)));
        assert_eq!(nav.current_index(), Some(1));
        assert!(nav.handle_input(InputEvent::Key(GalleryKey::ArrowLeft)));
        assert!(nav.handle_input(InputEvent::Key(GalleryKey::Escape)));
        assert!(!nav.is_open());
    }

    #[test]
    fn swipes_need_enough_travel() {
        let mut nav = navigator();
        nav.open_global(None);
        assert!(!nav.handle_input(InputEvent::Swipe { start_x: 200.0, end_x: 160.0 }));
        assert!(nav.handle_input(InputEvent::Swipe { start_x: 200.0, end_x: 100.0 }));
        assert_eq!(nav.current_index(), Some(1));
        assert!(nav.handle_input(InputEvent::Swipe { start_x: 100.0, end_x: 200.0 }));
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn space_toggles_autoplay_even_when_closed() {
        let mut nav = navigator();
        assert!(nav.handle_input(InputEvent::Key(GalleryKey::Space)));
        assert!(nav.is_autoplay_active());
        assert!(nav.is_open());
        nav.handle_input(InputEvent::Key(GalleryKey::Space));
        assert!(!nav.is_autoplay_active());
    }

    #[test]
    fn key_names_parse() {
        assert_eq!(GalleryKey::from_key_name("ArrowLeft"), Some(GalleryKey::ArrowLeft));
        assert_eq!(GalleryKey::from_key_name(" "), Some(GalleryKey::Space));
        assert_eq!(GalleryKey::from_key_name("Enter"), None);
    }
}
