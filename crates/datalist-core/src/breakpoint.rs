use ratatui::layout::Rect;

/// Presentation class of the area a list is rendered into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Breakpoint {
    /// Stacked summary rows.
    Narrow,
    /// Full table.
    #[default]
    Wide,
}

/// Decides which presentation an area gets. Consulted once per render pass.
pub trait ViewportClassifier {
    fn classify(&self, area: Rect) -> Breakpoint;
}

/// Narrow below `min_wide_width` terminal columns, wide otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthBreakpoint {
    pub min_wide_width: u16,
}

impl Default for WidthBreakpoint {
    fn default() -> Self {
        Self { min_wide_width: 80 }
    }
}

impl ViewportClassifier for WidthBreakpoint {
    fn classify(&self, area: Rect) -> Breakpoint {
        if area.width < self.min_wide_width {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }
}

/// Always answers the same class. Handy for tests and for apps with a user-chosen layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBreakpoint(pub Breakpoint);

impl ViewportClassifier for FixedBreakpoint {
    fn classify(&self, _area: Rect) -> Breakpoint {
        self.0
    }
}

impl<F> ViewportClassifier for F
where
    F: Fn(Rect) -> Breakpoint,
{
    fn classify(&self, area: Rect) -> Breakpoint {
        self(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_breakpoint_switches_at_threshold() {
        let bp = WidthBreakpoint { min_wide_width: 60 };
        assert_eq!(bp.classify(Rect::new(0, 0, 59, 10)), Breakpoint::Narrow);
        assert_eq!(bp.classify(Rect::new(0, 0, 60, 10)), Breakpoint::Wide);
    }

    #[test]
    fn closures_classify() {
        let tall_is_narrow = |area: Rect| {
            if area.height > area.width {
                Breakpoint::Narrow
            } else {
                Breakpoint::Wide
            }
        };
        assert_eq!(
            tall_is_narrow.classify(Rect::new(0, 0, 10, 20)),
            Breakpoint::Narrow
        );
    }
}
