use crate::bindings::Binding;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug)]
pub struct HelpBarOptions {
    pub separator: String,
    pub space: String,
}

impl Default for HelpBarOptions {
    fn default() -> Self {
        Self {
            separator: " • ".to_string(),
            space: " ".to_string(),
        }
    }
}

/// One-line strip of `key description` pairs.
#[derive(Clone, Debug, Default)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    options: HelpBarOptions,
}

impl HelpBar {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            options: HelpBarOptions::default(),
        }
    }

    pub fn with_options(bindings: Vec<Binding>, options: HelpBarOptions) -> Self {
        Self { bindings, options }
    }

    pub fn set_bindings(&mut self, bindings: Vec<Binding>) {
        self.bindings = bindings;
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, theme.text_muted);
        render::render_line_clipped(
            area.x,
            area.y,
            area.width,
            buf,
            &self.to_line(area.width as usize, theme.accent, theme.text_muted),
            theme.text_muted,
        );
    }

    /// Whole entries only; the first one is kept (and clipped) even when it alone overflows.
    fn to_line(&self, max_width: usize, key_style: Style, style: Style) -> Line<'static> {
        let sep_w = self.options.separator.width();
        let space_w = self.options.space.width();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0usize;
        for b in self.bindings.iter().filter(|b| !b.is_unbound()) {
            let entry_w = b.help_key.width() + space_w + b.help_desc.width();
            if !spans.is_empty() {
                if used + sep_w + entry_w > max_width {
                    break;
                }
                spans.push(Span::styled(self.options.separator.clone(), style));
                used += sep_w;
            }
            spans.push(Span::styled(b.help_key.clone(), key_style));
            spans.push(Span::styled(self.options.space.clone(), style));
            spans.push(Span::styled(b.help_desc.clone(), style));
            used += entry_w;
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::key_char;
    use crate::render::buffer_lines;

    #[test]
    fn help_bar_joins_bindings() {
        let hb = HelpBar::new(vec![
            Binding::new("q", "quit", vec![key_char('q')]),
            Binding::new("r", "review", vec![key_char('r')]),
        ]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        hb.render(Rect::new(0, 0, 30, 1), &mut buf, &Theme::default());
        assert_eq!(buffer_lines(&buf), vec!["q quit • r review"]);
    }

    #[test]
    fn help_bar_renders_narrow_width() {
        let hb = HelpBar::new(vec![Binding::new(
            "q",
            "quit",
            vec![key_char('q')],
        )]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        hb.render(Rect::new(0, 0, 3, 1), &mut buf, &Theme::default());
        assert_eq!(buffer_lines(&buf), vec!["q q"]);
    }

    #[test]
    fn help_bar_drops_entries_that_do_not_fit() {
        let hb = HelpBar::new(vec![
            Binding::new("q", "quit", vec![key_char('q')]),
            Binding::new("r", "review", vec![key_char('r')]),
            Binding::new("x", "hidden", vec![]),
        ]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        hb.render(Rect::new(0, 0, 12, 1), &mut buf, &Theme::default());
        assert_eq!(buffer_lines(&buf), vec!["q quit"]);
    }
}
