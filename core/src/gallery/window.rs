use serde::Serialize;

/// Fade level applied to the thumbnails at a window edge that hides more items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeFade {
    /// Second thumbnail from the edge.
    Inner,
    /// Thumbnail right at the edge.
    Outer,
}

/// Which slice of the active sequence is shown as thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowLayout {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl WindowLayout {
    /// The whole sequence, no recentering.
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len, len }
    }

    /// Recentering window: `start = clamp(current - lead, 0, len - size)`.
    /// Falls back to the full sequence when it already fits.
    pub fn sliding(len: usize, current: usize, size: usize, lead: usize) -> Self {
        if len <= size {
            return Self::full(len);
        }
        let start = current.saturating_sub(lead).min(len - size);
        Self {
            start,
            end: start + size,
            len,
        }
    }

    pub fn is_clipped(&self) -> bool {
        self.start > 0 || self.end < self.len
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn fade_at(&self, index: usize) -> Option<EdgeFade> {
        if !self.contains(index) {
            return None;
        }
        let from_start = index - self.start;
        let from_end = self.end - 1 - index;
        if self.start > 0 {
            match from_start {
                0 => return Some(EdgeFade::Outer),
                1 => return Some(EdgeFade::Inner),
                _ => {}
            }
        }
        if self.end < self.len {
            match from_end {
                0 => return Some(EdgeFade::Outer),
                1 => return Some(EdgeFade::Inner),
                _ => {}
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sequences_show_everything() {
        let layout = WindowLayout::sliding(8, 7, 8, 4);
        assert_eq!(layout, WindowLayout::full(8));
        assert!(!layout.is_clipped());
        assert!(layout.indices().all(|i| layout.fade_at(i).is_none()));
    }

    #[test]
    fn window_recenters_and_clamps() {
        assert_eq!(WindowLayout::sliding(20, 2, 8, 4).start, 0);
        assert_eq!(WindowLayout::sliding(20, 10, 8, 4).start, 6);
        assert_eq!(WindowLayout::sliding(20, 19, 8, 4).start, 12);
        assert_eq!(WindowLayout::sliding(20, 19, 8, 4).end, 20);
    }

    #[test]
    fn fades_mark_sides_with_hidden_items() {
        let head = WindowLayout::sliding(20, 0, 8, 4);
        assert_eq!(head.fade_at(0), None);
        assert_eq!(head.fade_at(6), Some(EdgeFade::Inner));
        assert_eq!(head.fade_at(7), Some(EdgeFade::Outer));

        let middle = WindowLayout::sliding(20, 10, 8, 4);
        assert_eq!(middle.fade_at(6), Some(EdgeFade::Outer));
        assert_eq!(middle.fade_at(7), Some(EdgeFade::Inner));
        assert_eq!(middle.fade_at(10), None);
        assert_eq!(middle.fade_at(12), Some(EdgeFade::Inner));
        assert_eq!(middle.fade_at(13), Some(EdgeFade::Outer));
        assert_eq!(middle.fade_at(14), None);

        let tail = WindowLayout::sliding(20, 19, 8, 4);
        assert_eq!(tail.fade_at(12), Some(EdgeFade::Outer));
        assert_eq!(tail.fade_at(19), None);
    }
}
