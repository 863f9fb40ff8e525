/// Vertical scroll position of a view over content taller than its area.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportState {
    pub y: u32,
    pub viewport_h: u16,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, h: u16) {
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, h: u32) {
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        let next = self.y as i64 + delta as i64;
        self.y = next.clamp(0, self.max_y() as i64) as u32;
    }

    pub fn to_top(&mut self) {
        self.y = 0;
    }

    /// Scrolls the minimum amount needed for `[start, start + size)` to be visible.
    pub fn ensure_visible(&mut self, start: u32, size: u32) {
        let end = start.saturating_add(size);
        let bottom = self.y.saturating_add(self.viewport_h as u32);
        if start < self.y {
            self.y = start;
        } else if end > bottom {
            self.y = end.saturating_sub(self.viewport_h as u32);
        }
        self.clamp();
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_h > self.viewport_h as u32
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_to_content() {
        let mut s = ViewportState::default();
        s.set_viewport(5);
        s.set_content(6);
        s.y = 99;
        s.clamp();
        assert_eq!(s.y, 1);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut s = ViewportState::default();
        s.set_viewport(3);
        s.set_content(30);
        s.ensure_visible(9, 3);
        assert_eq!(s.y, 9);
        s.ensure_visible(12, 3);
        assert_eq!(s.y, 12);
        s.ensure_visible(4, 1);
        assert_eq!(s.y, 4);
        s.ensure_visible(5, 1);
        assert_eq!(s.y, 4);
    }
}
