use datalist_core::input::InputEvent;
use datalist_core::input::KeyCode;
use datalist_core::input::MouseButton;
use datalist_core::input::MouseEventKind;
use datalist_core::overlay::Resolution;
use datalist_core::render;
use datalist_core::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;

#[derive(Clone, Debug)]
pub struct ConfirmDialogOptions {
    pub title: String,
    pub prompt: String,
    pub keep_label: String,
    pub delete_label: String,
    pub width: u16,
    pub height: u16,
}

impl Default for ConfirmDialogOptions {
    fn default() -> Self {
        Self {
            title: "Review".to_string(),
            prompt: "Keep this record or delete it?".to_string(),
            keep_label: "Keep".to_string(),
            delete_label: "Delete".to_string(),
            width: 44,
            height: 7,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogButton {
    #[default]
    Keep,
    Delete,
}

impl DialogButton {
    pub fn resolution(self) -> Resolution {
        match self {
            DialogButton::Keep => Resolution::Dismiss,
            DialogButton::Delete => Resolution::Confirm,
        }
    }

    fn other(self) -> Self {
        match self {
            DialogButton::Keep => DialogButton::Delete,
            DialogButton::Delete => DialogButton::Keep,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmDialogAction {
    None,
    Redraw,
    Resolved(Resolution),
}

/// Centered Keep / Delete popup drawn over whatever is already in the buffer.
///
/// Focus starts on Keep. Esc always keeps.
#[derive(Clone, Debug, Default)]
pub struct ConfirmDialog {
    options: ConfirmDialogOptions,
    focus: DialogButton,
    buttons: Vec<(DialogButton, Rect)>,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfirmDialogOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn focus(&self) -> DialogButton {
        self.focus
    }

    pub fn reset(&mut self) {
        self.focus = DialogButton::Keep;
        self.buttons.clear();
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ConfirmDialogAction {
        match event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Esc => self.resolve(DialogButton::Keep),
                KeyCode::Enter | KeyCode::Char(' ') => self.resolve(self.focus),
                KeyCode::Tab
                | KeyCode::BackTab
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Char('h')
                | KeyCode::Char('l') => {
                    self.focus = self.focus.other();
                    ConfirmDialogAction::Redraw
                }
                KeyCode::Char('k') => self.resolve(DialogButton::Keep),
                KeyCode::Char('d') => self.resolve(DialogButton::Delete),
                _ => ConfirmDialogAction::None,
            },
            InputEvent::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return ConfirmDialogAction::None;
                }
                let hit = self.buttons.iter().find(|(_, r)| {
                    mouse.x >= r.x && mouse.x < r.right() && mouse.y >= r.y && mouse.y < r.bottom()
                });
                match hit {
                    Some(&(button, _)) => self.resolve(button),
                    None => ConfirmDialogAction::None,
                }
            }
        }
    }

    fn resolve(&mut self, button: DialogButton) -> ConfirmDialogAction {
        let resolution = button.resolution();
        log::debug!("[dialog] {:?} -> {:?}", button, resolution);
        self.reset();
        ConfirmDialogAction::Resolved(resolution)
    }

    /// Draws the popup centered in `area`. `subject` names the record under review.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, subject: &str) {
        let popup = centered(area, self.options.width, self.options.height);
        if popup.width < 4 || popup.height < 3 {
            return;
        }
        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent)
            .title(format!(" {} ", self.options.title));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let text_w = inner.width.saturating_sub(2);
        render::render_line_clipped(
            inner.x + 1,
            inner.y,
            text_w,
            buf,
            &Line::from(subject.to_string()),
            theme.text_primary.add_modifier(Modifier::BOLD),
        );
        if inner.height >= 3 {
            render::render_line_clipped(
                inner.x + 1,
                inner.y + 1,
                text_w,
                buf,
                &Line::from(self.options.prompt.clone()),
                theme.text_muted,
            );
        }

        let keep = Line::from(format!("[ {} ]", self.options.keep_label));
        let delete = Line::from(format!("[ {} ]", self.options.delete_label));
        let keep_w = render::line_width(&keep) as u16;
        let delete_w = render::line_width(&delete) as u16;
        let total = keep_w + 2 + delete_w;
        let y = inner.bottom().saturating_sub(1);
        let x = inner.x + inner.width.saturating_sub(total) / 2;

        self.buttons.clear();
        for (button, line, at, w) in [
            (DialogButton::Keep, &keep, x, keep_w),
            (DialogButton::Delete, &delete, x + keep_w + 2, delete_w),
        ] {
            let mut style = match button {
                DialogButton::Keep => theme.success,
                DialogButton::Delete => theme.danger,
            };
            if button == self.focus {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let room = inner.right().saturating_sub(at);
            let written = render::render_line_clipped(at, y, w.min(room), buf, line, style);
            self.buttons.push((button, Rect::new(at, y, written, 1)));
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
