pub mod autoplay;
pub mod input;
pub mod navigator;
pub mod window;

pub use autoplay::{drive, AutoplayHandle, AutoplayScheduler};
pub use input::{GalleryKey, InputEvent, SWIPE_THRESHOLD_PX};
pub use navigator::{
    Direction, GalleryMode, GalleryNavigator, GallerySnapshot, Thumbnail, ThumbnailWindow,
};
pub use window::{EdgeFade, WindowLayout};
