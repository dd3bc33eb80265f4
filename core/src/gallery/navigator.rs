use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::gallery::autoplay::{AutoplayHandle, AutoplayScheduler};
use crate::gallery::window::{EdgeFade, WindowLayout};
use crate::model::assets::thumbnail_path;
use crate::model::{Visit, VisitId};
use crate::organize::{
    build_global_index, sort_by_date_descending, GlobalPhotoIndex, PhotoRef, TimelineEntry,
};
use crate::prelude::ViewerConfig;
use crate::telemetry::{LogManager, MetricsRecorder, ViewerMetrics};

/// What the viewer is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GalleryMode {
    Closed,
    /// One visit's photos.
    Scoped { visit: VisitId },
    /// Every dated photo across all visits.
    Global,
}

/// Manual step through the active sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Maps a signed step (`-1`/`+1`) from the UI layer.
    pub fn from_step(step: i64) -> Option<Self> {
        match step {
            -1 => Some(Direction::Previous),
            1 => Some(Direction::Next),
            _ => None,
        }
    }
}

struct NavigationState {
    mode: GalleryMode,
    sequence: Vec<PhotoRef>,
    current_index: usize,
}

impl NavigationState {
    fn closed() -> Self {
        Self {
            mode: GalleryMode::Closed,
            sequence: Vec::new(),
            current_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub index: usize,
    pub path: String,
    pub thumbnail: String,
    pub active: bool,
    pub fade: Option<EdgeFade>,
}

/// Thumbnails to render below the main photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailWindow {
    pub layout: WindowLayout,
    pub thumbnails: Vec<Thumbnail>,
}

/// Read-only view of the navigator for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GallerySnapshot {
    pub mode: GalleryMode,
    pub current_index: Option<usize>,
    pub len: usize,
    pub current: Option<PhotoRef>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub window: ThumbnailWindow,
    pub autoplay_active: bool,
}

/// Stateful photo viewer over a fixed visit collection.
///
/// Every user-facing operation is total: requests that make no sense in the
/// current state are ignored and reported through the return value. Manual
/// operations stop autoplay before touching the index.
pub struct GalleryNavigator {
    visits: Arc<Vec<Visit>>,
    global: GlobalPhotoIndex,
    state: NavigationState,
    autoplay: AutoplayScheduler,
    window_size: usize,
    window_lead: usize,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl GalleryNavigator {
    pub fn new(visits: Arc<Vec<Visit>>, config: &ViewerConfig) -> Self {
        let global = build_global_index(&visits);
        Self {
            visits,
            global,
            state: NavigationState::closed(),
            autoplay: AutoplayScheduler::new(Duration::from_millis(
                config.autoplay_interval_ms.max(1),
            )),
            window_size: config.thumbnail_window.max(1),
            window_lead: config.window_lead,
            logger: LogManager::new("gallery"),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Swaps in a new visit collection. Closes the viewer and rebuilds the global index.
    pub fn replace_visits(&mut self, visits: Arc<Vec<Visit>>) {
        self.close();
        self.global = build_global_index(&visits);
        self.visits = visits;
        self.logger.record(&format!(
            "visit set replaced: {} visits, {} dated photos",
            self.visits.len(),
            self.global.len()
        ));
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn global_index(&self) -> &GlobalPhotoIndex {
        &self.global
    }

    pub fn mode(&self) -> GalleryMode {
        self.state.mode
    }

    pub fn is_open(&self) -> bool {
        self.state.mode != GalleryMode::Closed
    }

    pub fn len(&self) -> usize {
        self.state.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.sequence.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.is_open().then_some(self.state.current_index)
    }

    pub fn current(&self) -> Option<&PhotoRef> {
        self.state.sequence.get(self.state.current_index)
    }

    pub fn sequence(&self) -> &[PhotoRef] {
        &self.state.sequence
    }

    pub fn metrics(&self) -> ViewerMetrics {
        self.metrics.snapshot()
    }

    /// Opens one visit's photos, newest first. Starts at `start` when that path
    /// is among them, otherwise at the first photo.
    pub fn open_scoped(&mut self, visit: VisitId, start: Option<&str>) -> bool {
        self.stop_autoplay();
        let Some(target) = self.visits.get(visit.index()) else {
            self.ignore("open_scoped on unknown visit");
            return false;
        };
        if !target.has_photos() {
            self.ignore("open_scoped on visit without photos");
            return false;
        }

        let sequence = sort_by_date_descending(&PhotoRef::from_visit(visit, target));
        let current_index = resolve_start(&sequence, start);
        self.logger.record(&format!(
            "opened {} ({} photos) at {}",
            target.title(),
            sequence.len(),
            current_index
        ));
        self.state = NavigationState {
            mode: GalleryMode::Scoped { visit },
            sequence,
            current_index,
        };
        self.metrics.record_open();
        true
    }

    /// Opens the visit behind a timeline row, starting at that day's first photo.
    pub fn open_timeline_entry(&mut self, entry: &TimelineEntry) -> bool {
        let start = entry.first_photo().map(|photo| photo.path.clone());
        self.open_scoped(entry.visit, start.as_deref())
    }

    /// Opens the cross-visit sequence. Starts at the first entry whose path
    /// equals `start`, otherwise at the newest photo.
    pub fn open_global(&mut self, start: Option<&str>) -> bool {
        self.stop_autoplay();
        if self.global.is_empty() {
            self.ignore("open_global with no dated photos");
            return false;
        }

        let current_index = start
            .and_then(|path| self.global.position_of(path))
            .unwrap_or(0);
        self.state = NavigationState {
            mode: GalleryMode::Global,
            sequence: self.global.entries().to_vec(),
            current_index,
        };
        self.logger.record(&format!(
            "opened global gallery ({} photos) at {}",
            self.global.len(),
            current_index
        ));
        self.metrics.record_open();
        true
    }

    /// Steps one photo back or forward. Stops at either end, never wraps.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.stop_autoplay();
        let current = self.state.current_index;
        let target = match direction {
            Direction::Previous => current.checked_sub(1),
            Direction::Next => current.checked_add(1),
        };
        match target {
            Some(index) if index < self.state.sequence.len() => {
                self.move_to(index);
                true
            }
            _ => {
                self.ignore("navigate past sequence bounds");
                false
            }
        }
    }

    /// Selects a thumbnail directly.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.stop_autoplay();
        if index >= self.state.sequence.len() {
            self.ignore("jump outside sequence");
            return false;
        }
        self.move_to(index);
        true
    }

    pub fn close(&mut self) -> bool {
        self.stop_autoplay();
        if !self.is_open() {
            return false;
        }
        self.state = NavigationState::closed();
        self.logger.record("gallery closed");
        true
    }

    /// Starts the slideshow, opening the global gallery first when nothing is
    /// open. Returns the handle ticks must carry, or `None` when there is
    /// nothing to play.
    pub fn start_autoplay(&mut self) -> Option<AutoplayHandle> {
        if let Some(handle) = self.autoplay.handle() {
            return Some(handle);
        }
        if !self.is_open() && !self.open_global(None) {
            return None;
        }
        let handle = self.autoplay.arm();
        self.logger.record(&format!(
            "autoplay started every {:?}",
            self.autoplay.interval()
        ));
        Some(handle)
    }

    pub fn stop_autoplay(&mut self) -> bool {
        let stopped = self.autoplay.cancel();
        if stopped {
            self.logger.record("autoplay stopped");
        }
        stopped
    }

    /// Returns the new handle when autoplay is now running.
    pub fn toggle_autoplay(&mut self) -> Option<AutoplayHandle> {
        if self.stop_autoplay() {
            None
        } else {
            self.start_autoplay()
        }
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_active()
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay.interval()
    }

    /// One slideshow step: advances with wraparound. Stale handles and empty
    /// sequences are rejected; the caller should drop its timer on `false`.
    pub fn autoplay_tick(&mut self, handle: AutoplayHandle) -> bool {
        if !self.autoplay.is_current(handle) {
            return false;
        }
        let len = self.state.sequence.len();
        if len == 0 {
            self.stop_autoplay();
            return false;
        }
        self.state.current_index = (self.state.current_index + 1) % len;
        self.metrics.record_tick();
        self.logger
            .trace_step(&format!("autoplay -> {}", self.state.current_index));
        true
    }

    /// Thumbnails to show. Only a global sequence longer than the window slides;
    /// everything else is shown whole.
    pub fn window(&self) -> ThumbnailWindow {
        let len = self.state.sequence.len();
        let layout = match self.state.mode {
            GalleryMode::Global => WindowLayout::sliding(
                len,
                self.state.current_index,
                self.window_size,
                self.window_lead,
            ),
            _ => WindowLayout::full(len),
        };
        let thumbnails = layout
            .indices()
            .map(|index| {
                let entry = &self.state.sequence[index];
                Thumbnail {
                    index,
                    path: entry.path().to_string(),
                    thumbnail: thumbnail_path(entry.path()),
                    active: index == self.state.current_index,
                    fade: layout.fade_at(index),
                }
            })
            .collect();
        ThumbnailWindow { layout, thumbnails }
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        let current = self.current().cloned();
        let title = current
            .as_ref()
            .and_then(|entry| self.visits.get(entry.visit.index()))
            .map(Visit::title);
        let date = current.as_ref().and_then(|entry| entry.photo.date.clone());
        GallerySnapshot {
            mode: self.state.mode,
            current_index: self.current_index(),
            len: self.len(),
            current,
            title,
            date,
            window: self.window(),
            autoplay_active: self.is_autoplay_active(),
        }
    }

    fn move_to(&mut self, index: usize) {
        self.state.current_index = index;
        self.metrics.record_navigation();
        self.logger.trace_step(&format!("showing {}", index));
    }

    fn ignore(&self, reason: &str) {
        self.metrics.record_ignored();
        self.logger.trace_step(&format!("ignored: {}", reason));
    }
}

fn resolve_start(sequence: &[PhotoRef], start: Option<&str>) -> usize {
    start
        .and_then(|path| sequence.iter().position(|entry| entry.path() == path))
        .unwrap_or(0)
}
