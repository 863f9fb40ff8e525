use crate::bindings::DataListBindings;
use crate::bindings::ListCommand;
use crate::breakpoint::Breakpoint;
use crate::breakpoint::ViewportClassifier;
use crate::error::DataListError;
use crate::input::InputEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::pagination::Pagination;
use crate::record::Record;
use crate::record::RowId;
use crate::render;
use crate::schema::Alignment;
use crate::schema::CellContent;
use crate::schema::ColumnSchema;
use crate::schema::MobileProjection;
use crate::schema::MobileRow;
use crate::schema::OpenOverlay;
use crate::sort;
use crate::sort::SortKey;
use crate::theme::Theme;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use std::cell::RefCell;
use std::rc::Rc;

/// Lines per record in the narrow presentation: primary, secondary, divider.
const ITEM_HEIGHT: u32 = 3;

/// What a row action asks the caller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowActionKind {
    Edit,
    View,
    /// Produced by the action column; callers typically open their confirmation overlay.
    Review,
}

/// Events reported by [`DataListView::handle_event`].
///
/// The view applies sort and pagination changes to its own state before reporting them; the
/// record collection is never touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataListAction {
    None,
    Redraw,
    SortRequested(SortKey),
    PageChanged(usize),
    RowsPerPageChanged(usize),
    RowAction { row_id: RowId, kind: RowActionKind },
}

/// Which optional row actions the caller handles. Disabled actions are never emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub view: bool,
}

#[derive(Clone, Debug)]
pub struct DataListOptions {
    pub pagination_enabled: bool,
    pub rows_per_page_options: Vec<usize>,
    pub initial_rows_per_page: usize,
    pub empty_message: String,
    /// Height of the empty-state row, so an empty table keeps its shape.
    pub empty_min_height: u16,
    /// Width reserved for the avatar in narrow mode, when the projection provides one.
    pub avatar_width: u16,
    pub col_gap: u16,
    pub divider: String,
    pub show_scrollbar: bool,
    pub style: Style,
    pub header_style: Style,
    pub cursor_style: Style,
    pub grid_line_style: Style,
    pub scrollbar_style: Style,
}

impl Default for DataListOptions {
    fn default() -> Self {
        Self {
            pagination_enabled: true,
            rows_per_page_options: vec![10, 50, 100],
            initial_rows_per_page: 50,
            empty_message: "No records to display".to_string(),
            empty_min_height: 2,
            avatar_width: 4,
            col_gap: 1,
            divider: "─".to_string(),
            show_scrollbar: true,
            style: Style::default(),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            grid_line_style: Style::default(),
            scrollbar_style: Style::default(),
        }
    }
}

/// Everything the caller owns and hands in on each render / event.
#[derive(Clone, Copy)]
pub struct DataListProps<'a> {
    pub records: &'a [Record],
    pub schema: &'a ColumnSchema,
    pub to_mobile: &'a MobileProjection,
}

impl<'a> DataListProps<'a> {
    pub fn new(
        records: &'a [Record],
        schema: &'a ColumnSchema,
        to_mobile: &'a MobileProjection,
    ) -> Self {
        Self {
            records,
            schema,
            to_mobile,
        }
    }
}

#[derive(Clone, Debug, Default)]
enum HitLayout {
    #[default]
    None,
    Wide {
        header: Rect,
        body: Rect,
        columns: Vec<(u16, u16)>,
    },
    Narrow {
        list: Rect,
    },
}

/// Responsive record list.
///
/// Each render asks a [`ViewportClassifier`] for the area's [`Breakpoint`] and draws one of two
/// presentations:
/// - **wide**: a header from the [`ColumnSchema`], then the stable-sorted, paginated rows, then a
///   pagination footer when enabled. Without an explicit sort key rows are ordered by id
///   ascending.
/// - **narrow**: every record in input order as a stacked item built from the mobile projection.
///   Narrow mode neither sorts nor paginates.
///
/// The view only keeps ephemeral UI state (page, sort key, cursor, scroll). Records, schema and
/// projection are borrowed per call through [`DataListProps`].
pub struct DataListView {
    options: DataListOptions,
    bindings: DataListBindings,
    pagination: Pagination,
    sort: Option<SortKey>,
    row_actions: RowActions,
    cursor: Option<usize>,
    focus_col: usize,
    mode: Breakpoint,
    body: ViewportState,
    list: ViewportState,
    hit: HitLayout,
}

impl Default for DataListView {
    fn default() -> Self {
        Self {
            options: DataListOptions::default(),
            bindings: DataListBindings::default(),
            pagination: Pagination::default(),
            sort: None,
            row_actions: RowActions::default(),
            cursor: None,
            focus_col: 0,
            mode: Breakpoint::Wide,
            body: ViewportState::default(),
            list: ViewportState::default(),
            hit: HitLayout::None,
        }
    }
}

impl DataListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DataListOptions) -> Result<Self, DataListError> {
        let pagination = Pagination::new(
            options.rows_per_page_options.clone(),
            options.initial_rows_per_page,
        )?;
        Ok(Self {
            options,
            pagination,
            ..Self::default()
        })
    }

    pub fn options(&self) -> &DataListOptions {
        &self.options
    }

    pub fn bindings(&self) -> &DataListBindings {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: DataListBindings) {
        self.bindings = bindings;
    }

    pub fn row_actions(&self) -> RowActions {
        self.row_actions
    }

    pub fn set_row_actions(&mut self, row_actions: RowActions) {
        self.row_actions = row_actions;
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// The key rows are actually ordered by in wide mode.
    pub fn effective_sort_key(&self) -> SortKey {
        self.sort.clone().unwrap_or_else(SortKey::by_id)
    }

    pub fn set_sort_key(&mut self, key: Option<SortKey>) {
        self.sort = key;
    }

    /// Presentation chosen by the most recent render.
    pub fn mode(&self) -> Breakpoint {
        self.mode
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
    }

    /// Drops page, sort, cursor and scroll state. Call when the schema or collection is replaced.
    pub fn reset(&mut self) {
        log::debug!("[datalist] reset");
        self.pagination.reset();
        self.sort = None;
        self.cursor = None;
        self.focus_col = 0;
        self.body = ViewportState::default();
        self.list = ViewportState::default();
        self.hit = HitLayout::None;
    }

    pub fn change_page(&mut self, page: usize) -> DataListAction {
        self.pagination.change_page(page);
        self.cursor = None;
        self.body.to_top();
        DataListAction::PageChanged(page)
    }

    pub fn change_rows_per_page(
        &mut self,
        rows_per_page: usize,
    ) -> Result<DataListAction, DataListError> {
        self.pagination.change_rows_per_page(rows_per_page)?;
        self.cursor = None;
        self.body.to_top();
        Ok(DataListAction::RowsPerPageChanged(rows_per_page))
    }

    /// Rows shown by the wide presentation, in display order.
    pub fn visible_rows<'a>(&self, props: &DataListProps<'a>) -> Vec<&'a Record> {
        let sorted = sort::sort_records(props.records, &self.effective_sort_key());
        if self.options.pagination_enabled {
            self.pagination.slice(&sorted).to_vec()
        } else {
            sorted
        }
    }

    /// The record under the cursor in the current presentation.
    pub fn cursor_record<'a>(&self, props: &DataListProps<'a>) -> Option<&'a Record> {
        let cursor = self.cursor?;
        match self.mode {
            Breakpoint::Wide => self.visible_rows(props).get(cursor).copied(),
            Breakpoint::Narrow => props.records.get(cursor),
        }
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        props: &DataListProps<'_>,
        classifier: &dyn ViewportClassifier,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mode = classifier.classify(area);
        if mode != self.mode {
            log::trace!("[datalist] {:?} -> {:?} at width {}", self.mode, mode, area.width);
            self.cursor = None;
        }
        self.mode = mode;
        match mode {
            Breakpoint::Wide => self.render_wide(area, buf, theme, props),
            Breakpoint::Narrow => self.render_narrow(area, buf, theme, props),
        }
    }

    pub fn handle_event(&mut self, event: InputEvent, props: &DataListProps<'_>) -> DataListAction {
        match event {
            InputEvent::Key(key) => match self.bindings.command_for(&key) {
                Some(command) => self.handle_command(command, props),
                None => DataListAction::None,
            },
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, props),
        }
    }

    fn handle_command(
        &mut self,
        command: ListCommand,
        props: &DataListProps<'_>,
    ) -> DataListAction {
        let row_count = match self.mode {
            Breakpoint::Wide => self.visible_rows(props).len(),
            Breakpoint::Narrow => props.records.len(),
        };
        let wide = self.mode == Breakpoint::Wide;

        match command {
            ListCommand::Up => self.move_cursor_by(-1, row_count),
            ListCommand::Down => self.move_cursor_by(1, row_count),
            ListCommand::First => self.move_cursor_to(0, row_count),
            ListCommand::Last => self.move_cursor_to(row_count.saturating_sub(1), row_count),
            ListCommand::PrevColumn | ListCommand::NextColumn if wide => {
                let cols = props.schema.len();
                if cols == 0 {
                    return DataListAction::None;
                }
                let next = if command == ListCommand::NextColumn {
                    (self.focus_col + 1).min(cols - 1)
                } else {
                    self.focus_col.saturating_sub(1)
                };
                if next == self.focus_col {
                    return DataListAction::None;
                }
                self.focus_col = next;
                DataListAction::Redraw
            }
            ListCommand::Sort if wide => self.request_sort(self.focus_col, props),
            ListCommand::NextPage if wide && self.options.pagination_enabled => {
                if !self.pagination.has_next(props.records.len()) {
                    return DataListAction::None;
                }
                self.change_page(self.pagination.page().saturating_add(1))
            }
            ListCommand::PrevPage if wide && self.options.pagination_enabled => {
                if !self.pagination.has_prev() {
                    return DataListAction::None;
                }
                self.change_page(self.pagination.page() - 1)
            }
            ListCommand::MoreRowsPerPage | ListCommand::FewerRowsPerPage
                if wide && self.options.pagination_enabled =>
            {
                let next = if command == ListCommand::MoreRowsPerPage {
                    self.pagination.next_rows_per_page()
                } else {
                    self.pagination.prev_rows_per_page()
                };
                if next == self.pagination.rows_per_page() {
                    return DataListAction::None;
                }
                match self.change_rows_per_page(next) {
                    Ok(action) => action,
                    Err(err) => {
                        log::warn!("[datalist] {err}");
                        DataListAction::None
                    }
                }
            }
            ListCommand::Activate => {
                let Some(record) = self.cursor_record(props) else {
                    return DataListAction::None;
                };
                if wide && let Some(row_id) = open_from_action_column(props.schema, record) {
                    return review(row_id);
                }
                self.row_action(record, RowActionKind::View)
            }
            ListCommand::Review => {
                let Some(record) = self.cursor_record(props) else {
                    return DataListAction::None;
                };
                open_from_action_column(props.schema, record)
                    .map(review)
                    .unwrap_or(DataListAction::None)
            }
            ListCommand::Edit | ListCommand::View => {
                let Some(record) = self.cursor_record(props) else {
                    return DataListAction::None;
                };
                let kind = if command == ListCommand::Edit {
                    RowActionKind::Edit
                } else {
                    RowActionKind::View
                };
                self.row_action(record, kind)
            }
            _ => DataListAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, props: &DataListProps<'_>) -> DataListAction {
        let row_count = match self.mode {
            Breakpoint::Wide => self.visible_rows(props).len(),
            Breakpoint::Narrow => props.records.len(),
        };
        match mouse.kind {
            MouseEventKind::ScrollUp => self.move_cursor_by(-1, row_count),
            MouseEventKind::ScrollDown => self.move_cursor_by(1, row_count),
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit.clone() {
                    HitLayout::Wide {
                        header,
                        body,
                        columns,
                    } => {
                        if contains(header, mouse) {
                            let rel = mouse.x - header.x;
                            let col = columns
                                .iter()
                                .position(|&(offset, width)| rel >= offset && rel < offset + width);
                            if let Some(col) = col {
                                self.focus_col = col;
                                return self.request_sort(col, props);
                            }
                        } else if contains(body, mouse) {
                            let idx = self.body.y as usize + (mouse.y - body.y) as usize;
                            let moved = self.move_cursor_to(idx, row_count);
                            let rel = mouse.x - body.x;
                            let on_action = columns
                                .iter()
                                .position(|&(offset, width)| rel >= offset && rel < offset + width)
                                .is_some_and(|col| props.schema.action_column() == Some(col));
                            if on_action
                                && idx < row_count
                                && let Some(record) = self.cursor_record(props)
                                && let Some(row_id) = open_from_action_column(props.schema, record)
                            {
                                return review(row_id);
                            }
                            return moved;
                        }
                    }
                    HitLayout::Narrow { list } => {
                        if contains(list, mouse) {
                            let abs = self.list.y + (mouse.y - list.y) as u32;
                            return self.move_cursor_to((abs / ITEM_HEIGHT) as usize, row_count);
                        }
                    }
                    HitLayout::None => {}
                }
                DataListAction::None
            }
            MouseEventKind::Down(_) => DataListAction::None,
        }
    }

    fn request_sort(&mut self, col: usize, props: &DataListProps<'_>) -> DataListAction {
        let Some(column) = props.schema.columns().get(col) else {
            return DataListAction::None;
        };
        if column.is_action() {
            return DataListAction::None;
        }
        let key = SortKey::toggled(self.sort.as_ref(), &column.name);
        log::debug!("[sort] {} {}", key.field, key.direction);
        self.sort = Some(key.clone());
        DataListAction::SortRequested(key)
    }

    fn row_action(&self, record: &Record, kind: RowActionKind) -> DataListAction {
        let enabled = match kind {
            RowActionKind::Edit => self.row_actions.edit,
            RowActionKind::View => self.row_actions.view,
            RowActionKind::Review => true,
        };
        if !enabled {
            return DataListAction::None;
        }
        DataListAction::RowAction {
            row_id: record.row_id(),
            kind,
        }
    }

    fn move_cursor_by(&mut self, delta: i64, count: usize) -> DataListAction {
        if count == 0 {
            self.cursor = None;
            return DataListAction::None;
        }
        let next = match self.cursor {
            None => 0,
            Some(cur) => (cur as i64 + delta).clamp(0, count as i64 - 1) as usize,
        };
        self.move_cursor_to(next, count)
    }

    fn move_cursor_to(&mut self, index: usize, count: usize) -> DataListAction {
        if count == 0 || index >= count {
            return DataListAction::None;
        }
        if self.cursor == Some(index) {
            return DataListAction::None;
        }
        self.cursor = Some(index);
        DataListAction::Redraw
    }

    fn base_style(&self, theme: &Theme) -> Style {
        if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        }
    }

    fn render_wide(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        props: &DataListProps<'_>,
    ) {
        let footer_h = if self.options.pagination_enabled && area.height >= 2 {
            1
        } else {
            0
        };
        let table = Rect::new(area.x, area.y, area.width, area.height - footer_h);
        let (content_w, scrollbar_x) = if self.options.show_scrollbar && table.width >= 2 {
            (table.width - 1, Some(table.x + table.width - 1))
        } else {
            (table.width, None)
        };
        let header_h = 1.min(table.height);
        let header_area = Rect::new(table.x, table.y, content_w, header_h);
        let body_area = Rect::new(
            table.x,
            table.y + header_h,
            content_w,
            table.height - header_h,
        );

        let base = self.base_style(theme);
        let grid_style = if self.options.grid_line_style == Style::default() {
            theme.text_muted
        } else {
            self.options.grid_line_style
        };
        buf.set_style(area, base);

        let columns = column_layout(props.schema, content_w, self.options.col_gap);
        self.render_header(header_area, buf, theme, props.schema, &columns, grid_style);

        let rows = self.visible_rows(props);
        self.body.set_viewport(body_area.height);
        self.body.set_content(rows.len() as u32);
        self.cursor = self.cursor.filter(|&c| c < rows.len());
        if let Some(c) = self.cursor {
            self.body.ensure_visible(c as u32, 1);
        }

        if props.records.is_empty() {
            self.render_empty(body_area, buf, theme);
        } else {
            let cursor_style = base.patch(self.options.cursor_style);
            let open: OpenOverlay = Rc::new(|_| {});
            for dy in 0..body_area.height {
                let idx = self.body.y as usize + dy as usize;
                let Some(record) = rows.get(idx) else {
                    break;
                };
                let row_rect = Rect::new(body_area.x, body_area.y + dy, body_area.width, 1);
                let row_style = if self.cursor == Some(idx) {
                    cursor_style
                } else {
                    base
                };
                buf.set_style(row_rect, row_style);
                for (column, &(offset, width)) in props.schema.iter().zip(columns.iter()) {
                    if width == 0 {
                        continue;
                    }
                    let cell_rect = Rect::new(row_rect.x + offset, row_rect.y, width, 1);
                    let content = column.resolve(record, &open);
                    let style = row_style.patch(column.cell_options.style);
                    render::render_line_aligned(
                        cell_rect,
                        buf,
                        content.line(),
                        column.alignment(),
                        style,
                    );
                }
                draw_separators(row_rect, buf, &columns, self.options.col_gap, grid_style);
            }
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, body_area.y, 1, body_area.height),
                buf,
                &self.body,
                self.options.scrollbar_style,
            );
        }

        if footer_h > 0 {
            let footer = Rect::new(area.x, table.bottom(), area.width, footer_h);
            self.render_footer(footer, buf, theme, props.records.len());
        }

        self.hit = HitLayout::Wide {
            header: header_area,
            body: body_area,
            columns,
        };
    }

    fn render_header(
        &self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        schema: &ColumnSchema,
        columns: &[(u16, u16)],
        grid_style: Style,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = self.options.header_style.patch(theme.accent);
        buf.set_style(area, style);

        let sort = self.effective_sort_key();
        for (i, (column, &(offset, width))) in schema.iter().zip(columns.iter()).enumerate() {
            if width == 0 {
                continue;
            }
            let mut spans = vec![Span::raw(column.label.clone())];
            if column.name == sort.field {
                spans.push(Span::raw(format!(" {}", sort.direction.indicator())));
            }
            let cell_style = if i == self.focus_col {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            render::render_line_aligned(
                Rect::new(area.x + offset, area.y, width, 1),
                buf,
                &Line::from(spans),
                column.alignment(),
                cell_style,
            );
        }
        draw_separators(area, buf, columns, self.options.col_gap, grid_style);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let h = self.options.empty_min_height.max(1).min(area.height);
        let rect = Rect::new(area.x, area.y, area.width, h);
        buf.set_style(rect, theme.warning);
        let line = Line::from(format!("⚠ {}", self.options.empty_message));
        render::render_line_clipped(
            rect.x + 1.min(rect.width),
            rect.y + (h - 1) / 2,
            rect.width.saturating_sub(1),
            buf,
            &line,
            theme.warning,
        );
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer, theme: &Theme, total: usize) {
        let p = &self.pagination;
        let arrow = |enabled: bool| {
            if enabled {
                theme.accent
            } else {
                theme.text_muted
            }
        };
        let line = Line::from(vec![
            Span::styled("Rows per page: ", theme.text_muted),
            Span::styled(p.rows_per_page().to_string(), theme.text_primary),
            Span::raw("   "),
            Span::styled(p.range_label(total), theme.text_primary),
            Span::raw("   "),
            Span::styled("‹", arrow(p.has_prev())),
            Span::raw(" "),
            Span::styled("›", arrow(p.has_next(total))),
            Span::raw(" "),
        ]);
        render::render_line_aligned(area, buf, &line, Alignment::Right, theme.text_primary);
    }

    fn render_narrow(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        props: &DataListProps<'_>,
    ) {
        let (list_area, scrollbar_x) = if self.options.show_scrollbar && area.width >= 2 {
            (
                Rect::new(area.x, area.y, area.width - 1, area.height),
                Some(area.x + area.width - 1),
            )
        } else {
            (area, None)
        };

        let count = props.records.len();
        self.list.set_viewport(list_area.height);
        self.list.set_content(count as u32 * ITEM_HEIGHT);
        self.cursor = self.cursor.filter(|&c| c < count);
        if let Some(c) = self.cursor {
            self.list.ensure_visible(c as u32 * ITEM_HEIGHT, ITEM_HEIGHT);
        }

        let base = self.base_style(theme);
        let cursor_style = base.patch(self.options.cursor_style);
        let divider_style = if self.options.grid_line_style == Style::default() {
            theme.text_muted
        } else {
            self.options.grid_line_style
        };
        buf.set_style(area, base);

        let mut current: Option<(usize, MobileRow)> = None;
        for dy in 0..list_area.height {
            let abs = self.list.y + dy as u32;
            let idx = (abs / ITEM_HEIGHT) as usize;
            let Some(record) = props.records.get(idx) else {
                break;
            };
            if current.as_ref().map(|(i, _)| *i) != Some(idx) {
                current = Some((idx, (props.to_mobile)(record)));
            }
            let Some((_, row)) = current.as_ref() else {
                continue;
            };

            let line_rect = Rect::new(list_area.x, list_area.y + dy, list_area.width, 1);
            let is_cursor = self.cursor == Some(idx);
            let indent = if row.avatar.is_some() {
                self.options.avatar_width.min(line_rect.width)
            } else {
                0
            };
            let text_x = line_rect.x + indent;
            let text_w = line_rect.width - indent;

            match abs % ITEM_HEIGHT {
                0 => {
                    let style = if is_cursor { cursor_style } else { base };
                    buf.set_style(line_rect, style);
                    if let Some(avatar) = &row.avatar {
                        render::render_line_clipped(
                            line_rect.x,
                            line_rect.y,
                            indent.saturating_sub(1),
                            buf,
                            avatar,
                            style,
                        );
                    }
                    render::render_line_clipped(
                        text_x,
                        line_rect.y,
                        text_w,
                        buf,
                        &row.primary,
                        style,
                    );
                }
                1 => {
                    let style = if is_cursor {
                        theme.text_muted.patch(self.options.cursor_style)
                    } else {
                        theme.text_muted
                    };
                    buf.set_style(line_rect, style);
                    render::render_line_clipped(
                        text_x,
                        line_rect.y,
                        text_w,
                        buf,
                        &row.secondary,
                        style,
                    );
                }
                _ => render::fill(line_rect, buf, &self.options.divider, divider_style),
            }
        }

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, area.y, 1, area.height),
                buf,
                &self.list,
                self.options.scrollbar_style,
            );
        }

        self.hit = HitLayout::Narrow { list: list_area };
    }
}

fn review(row_id: RowId) -> DataListAction {
    DataListAction::RowAction {
        row_id,
        kind: RowActionKind::Review,
    }
}

/// Activates the action column's cell for `record` and reports which row its renderer asked to
/// open, if any.
fn open_from_action_column(schema: &ColumnSchema, record: &Record) -> Option<RowId> {
    let column = &schema.columns()[schema.action_column()?];
    let requested: Rc<RefCell<Option<RowId>>> = Rc::new(RefCell::new(None));
    let sink = requested.clone();
    let open: OpenOverlay = Rc::new(move |id: &RowId| *sink.borrow_mut() = Some(id.clone()));
    if let CellContent::Action(cell) = column.resolve(record, &open) {
        cell.activate();
    }
    requested.borrow_mut().take()
}

/// `(offset, width)` per column. Fixed widths are honoured first; the rest share what is left.
fn column_layout(schema: &ColumnSchema, width: u16, gap: u16) -> Vec<(u16, u16)> {
    let n = schema.len();
    if n == 0 {
        return Vec::new();
    }
    let gaps = gap.saturating_mul((n - 1).min(u16::MAX as usize) as u16);
    let fixed = schema
        .iter()
        .filter_map(|c| c.cell_options.width)
        .fold(0u16, u16::saturating_add);
    let auto = schema
        .iter()
        .filter(|c| c.cell_options.width.is_none())
        .count()
        .min(u16::MAX as usize) as u16;
    let remaining = width.saturating_sub(gaps).saturating_sub(fixed);
    let (share, mut extra) = if auto > 0 {
        (remaining / auto, remaining % auto)
    } else {
        (0, 0)
    };

    let mut out = Vec::with_capacity(n);
    let mut x = 0u16;
    for c in schema.iter() {
        let want = match c.cell_options.width {
            Some(w) => w,
            None if extra > 0 => {
                extra -= 1;
                share + 1
            }
            None => share,
        };
        let w = want.min(width.saturating_sub(x));
        out.push((x, w));
        x = x.saturating_add(w).saturating_add(gap).min(width);
    }
    out
}

fn draw_separators(row: Rect, buf: &mut Buffer, columns: &[(u16, u16)], gap: u16, style: Style) {
    if gap == 0 || columns.len() < 2 {
        return;
    }
    for &(offset, width) in &columns[..columns.len() - 1] {
        let x = offset.saturating_add(width);
        if x >= row.width {
            continue;
        }
        buf.set_stringn(row.x + x, row.y, "│", 1, style);
    }
}

fn contains(area: Rect, mouse: MouseEvent) -> bool {
    mouse.x >= area.x && mouse.x < area.right() && mouse.y >= area.y && mouse.y < area.bottom()
}
