use crate::schema::Alignment;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Display width of `line` in terminal columns.
pub fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.width()).sum()
}

/// Writes `line` starting at `(x, y)`, stopping before `max_cols` columns are exceeded.
///
/// A wide character that would straddle the limit is dropped rather than split. Spans without a
/// style of their own use the line style patched over `fallback_style`. Returns the number of
/// columns written.
pub fn render_line_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    line: &Line<'_>,
    fallback_style: Style,
) -> u16 {
    if max_cols == 0 {
        return 0;
    }

    let base = fallback_style.patch(line.style);
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];

    for span in &line.spans {
        let style = base.patch(span.style);
        for ch in span.content.chars() {
            let ch = if ch == '\t' { ' ' } else { ch };
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if dx + w > max_cols {
                return dx;
            }
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_symbol(ch.encode_utf8(&mut tmp));
                cell.set_style(style);
            }
            if w == 2 {
                if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                    cell.set_symbol("");
                    cell.set_style(style);
                }
            }
            dx += w;
        }
    }
    dx
}

/// Writes `line` on the first row of `area`, left- or right-aligned.
pub fn render_line_aligned(
    area: Rect,
    buf: &mut Buffer,
    line: &Line<'_>,
    alignment: Alignment,
    fallback_style: Style,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let w = line_width(line).min(area.width as usize) as u16;
    let x = match alignment {
        Alignment::Left => area.x,
        Alignment::Right => area.x + area.width - w,
    };
    render_line_clipped(x, area.y, area.right() - x, buf, line, fallback_style);
}

/// Fills every cell of `area` with `symbol`.
pub fn fill(area: Rect, buf: &mut Buffer, symbol: &str, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        }
    }
}

pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if !state.is_scrollable() || state.content_h == 0 {
        fill(area, buf, " ", style);
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.viewport_h as f64 / state.content_h as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_y = state
        .content_h
        .saturating_sub(state.viewport_h as u32)
        .max(1) as f64;
    let thumb_top = ((state.y as f64 / max_y) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn clipped_line_stops_at_limit() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let line = Line::from(vec![Span::raw("abc"), Span::raw("def")]);
        let written = render_line_clipped(0, 0, 4, &mut buf, &line, Style::default());
        assert_eq!(written, 4);
        assert_eq!(buffer_lines(&buf), vec!["abcd"]);
    }

    #[test]
    fn wide_char_is_not_split() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let line = Line::raw("你好");
        let written = render_line_clipped(0, 0, 3, &mut buf, &line, Style::default());
        assert_eq!(written, 2);
    }

    #[test]
    fn right_alignment_pads_left() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        render_line_aligned(
            Rect::new(0, 0, 6, 1),
            &mut buf,
            &Line::raw("42"),
            Alignment::Right,
            Style::default(),
        );
        assert_eq!(buffer_lines(&buf), vec!["    42"]);
    }
}
