use crate::access::Permission;
use crate::access::User;
use crate::access::has_any_role;
use crate::columns;
use crate::dialog::ConfirmDialog;
use crate::dialog::ConfirmDialogAction;
use crate::dialog::ConfirmDialogOptions;
use crate::error::ReviewError;
use crate::navigation::Navigator;
use crate::navigation::contact_route;
use crate::source::RecordSource;
use crate::source::SearchFilter;
use crate::source::USERS_ENDPOINT;
use datalist_core::bindings::Binding;
use datalist_core::bindings::key;
use datalist_core::bindings::key_char;
use datalist_core::breakpoint::WidthBreakpoint;
use datalist_core::help::HelpBar;
use datalist_core::input::InputEvent;
use datalist_core::input::KeyCode;
use datalist_core::overlay::OverlayState;
use datalist_core::overlay::Resolution;
use datalist_core::overlay::remove_record;
use datalist_core::record::Record;
use datalist_core::record::RowId;
use datalist_core::record::Value;
use datalist_core::render;
use datalist_core::schema::Alignment;
use datalist_core::schema::ColumnSchema;
use datalist_core::theme::Theme;
use datalist_core::view::DataListAction;
use datalist_core::view::DataListOptions;
use datalist_core::view::DataListProps;
use datalist_core::view::DataListView;
use datalist_core::view::RowActionKind;
use datalist_core::view::RowActions;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::text::Span;

/// Screen-level keys. List navigation keys live in [`datalist_core::bindings::DataListBindings`].
#[derive(Clone, Debug)]
pub struct ReviewBindings {
    pub add_new: Binding,
    pub refresh: Binding,
    pub quit: Binding,
}

impl Default for ReviewBindings {
    fn default() -> Self {
        Self {
            add_new: Binding::new("a", "add new", vec![key_char('a')]),
            refresh: Binding::new("R", "refresh", vec![key_char('R')]),
            quit: Binding::new("q", "quit", vec![key_char('q')]),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReviewScreenOptions {
    pub tab: String,
    pub title: String,
    pub endpoint: String,
    pub filter: SearchFilter,
    pub list: DataListOptions,
    pub dialog: ConfirmDialogOptions,
    pub breakpoint: WidthBreakpoint,
    pub bindings: ReviewBindings,
}

impl Default for ReviewScreenOptions {
    fn default() -> Self {
        Self {
            tab: "Salvations".to_string(),
            title: "Users".to_string(),
            endpoint: USERS_ENDPOINT.to_string(),
            filter: SearchFilter::default(),
            list: DataListOptions::default(),
            dialog: ConfirmDialogOptions::default(),
            breakpoint: WidthBreakpoint::default(),
            bindings: ReviewBindings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactRef {
    pub id: Value,
    pub label: String,
}

/// What the person editor is opened with. `id == None` means a new person.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditDraft {
    pub id: Option<Value>,
    pub username: String,
    pub roles: Vec<String>,
    pub contact: Option<ContactRef>,
    pub is_active: bool,
}

impl EditDraft {
    pub fn from_record(record: &Record) -> Self {
        let roles = record
            .get("roles")
            .and_then(Value::as_list)
            .unwrap_or_default()
            .iter()
            .map(|r| r.to_string())
            .collect();
        let contact = record.get("contactId").map(|id| ContactRef {
            id: id.clone(),
            label: record.text("fullName").unwrap_or_default().to_string(),
        });
        Self {
            id: Some(record.id().clone()),
            username: record.text("username").unwrap_or_default().to_string(),
            roles,
            contact,
            is_active: record
                .get("isActive")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn title(&self) -> String {
        if self.is_new() {
            "Create User".to_string()
        } else {
            format!("Edit {}", self.username)
        }
    }

    /// The record an editor would hand back after saving this draft under `id`.
    pub fn to_record(&self, id: impl Into<Value>) -> Record {
        let mut record = Record::new(id)
            .with("username", self.username.clone())
            .with("roles", self.roles.clone())
            .with("isActive", self.is_active);
        if let Some(contact) = &self.contact {
            record.set("contactId", contact.id.clone());
            record.set("fullName", contact.label.clone());
        }
        record
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReviewAction {
    None,
    Redraw,
    Quit,
    /// The person editor should open with this draft.
    EditRequested(EditDraft),
    Navigated(String),
    Removed(RowId),
}

/// The "review salvations" screen: a header, the responsive person list, a help bar, and the
/// Keep / Delete dialog on top when a row is under review.
pub struct ReviewScreen<S, N> {
    options: ReviewScreenOptions,
    user: User,
    source: S,
    navigator: N,
    schema: ColumnSchema,
    records: Vec<Record>,
    list: DataListView,
    overlay: OverlayState,
    dialog: ConfirmDialog,
    editing: Option<EditDraft>,
    loading: bool,
    last_error: Option<ReviewError>,
}

impl<S, N> ReviewScreen<S, N>
where
    S: RecordSource,
    N: Navigator,
{
    pub fn new(user: User, source: S, navigator: N) -> Result<Self, ReviewError> {
        Self::with_options(user, source, navigator, ReviewScreenOptions::default())
    }

    pub fn with_options(
        user: User,
        source: S,
        navigator: N,
        options: ReviewScreenOptions,
    ) -> Result<Self, ReviewError> {
        let schema = columns::salvation_columns()?;
        let list = DataListView::with_options(options.list.clone())?;
        let dialog = ConfirmDialog::with_options(options.dialog.clone());
        let mut screen = Self {
            options,
            user,
            source,
            navigator,
            schema,
            records: Vec::new(),
            list,
            overlay: OverlayState::default(),
            dialog,
            editing: None,
            loading: true,
            last_error: None,
        };
        screen.apply_permissions();
        Ok(screen)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn list(&self) -> &DataListView {
        &self.list
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.options.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&ReviewError> {
        self.last_error.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = user;
        self.apply_permissions();
    }

    pub fn can_edit(&self) -> bool {
        has_any_role(&self.user, &[Permission::UserEdit])
    }

    pub fn can_view(&self) -> bool {
        has_any_role(&self.user, &[Permission::UserView])
    }

    fn apply_permissions(&mut self) {
        self.list.set_row_actions(RowActions {
            edit: self.can_edit(),
            view: self.can_view(),
        });
    }

    /// Searches the source with the current filter and replaces the collection on success.
    pub fn refresh(&mut self) {
        self.loading = true;
        let result = self
            .source
            .search(&self.options.endpoint, &self.options.filter);
        self.apply_search_result(result.map_err(ReviewError::from));
    }

    /// Feeds in the outcome of a search performed elsewhere.
    pub fn apply_search_result(&mut self, result: Result<Vec<Record>, ReviewError>) {
        match result {
            Ok(records) => {
                log::debug!("[review] loaded {} record(s)", records.len());
                self.records = records;
                self.list.reset();
                self.last_error = None;
            }
            Err(err) => {
                log::warn!("[review] search failed: {err}");
                self.last_error = Some(err);
            }
        }
        self.loading = false;
    }

    /// Replaces the text query and searches again.
    pub fn set_query(&mut self, query: Option<String>) {
        self.options.filter.query = query;
        self.refresh();
    }

    pub fn handle_event(&mut self, event: InputEvent) -> ReviewAction {
        if self.overlay.is_open() {
            return match self.dialog.handle_event(event) {
                ConfirmDialogAction::Resolved(resolution) => self.resolve_review(resolution),
                ConfirmDialogAction::Redraw => ReviewAction::Redraw,
                ConfirmDialogAction::None => ReviewAction::None,
            };
        }

        if let InputEvent::Key(k) = &event {
            let bindings = &self.options.bindings;
            if bindings.quit.matches(k) {
                return ReviewAction::Quit;
            }
            if bindings.refresh.matches(k) {
                self.refresh();
                return ReviewAction::Redraw;
            }
            if bindings.add_new.matches(k) {
                return self
                    .request_new()
                    .map(ReviewAction::EditRequested)
                    .unwrap_or(ReviewAction::None);
            }
            if self.editing.is_some() && k.code == KeyCode::Esc {
                self.cancel_edit();
                return ReviewAction::Redraw;
            }
        }

        if self.loading {
            return ReviewAction::None;
        }

        let props = DataListProps::new(&self.records, &self.schema, &columns::to_mobile);
        match self.list.handle_event(event, &props) {
            DataListAction::RowAction { row_id, kind } => match kind {
                RowActionKind::Review => {
                    self.open_review(row_id);
                    ReviewAction::Redraw
                }
                RowActionKind::Edit => self
                    .handle_edit(&row_id)
                    .map(ReviewAction::EditRequested)
                    .unwrap_or(ReviewAction::None),
                RowActionKind::View => ReviewAction::Navigated(self.handle_view(&row_id)),
            },
            DataListAction::None => ReviewAction::None,
            _ => ReviewAction::Redraw,
        }
    }

    pub fn open_review(&mut self, row_id: RowId) {
        self.overlay.open(row_id);
        self.dialog.reset();
    }

    fn resolve_review(&mut self, resolution: Resolution) -> ReviewAction {
        let records = &mut self.records;
        let mut removed = None;
        self.overlay.resolve(resolution, |id| {
            if remove_record(records, id) > 0 {
                removed = Some(id.clone());
            }
        });
        match removed {
            Some(id) => ReviewAction::Removed(id),
            None => ReviewAction::Redraw,
        }
    }

    /// Opens the editor for an existing person. Needs [`Permission::UserEdit`].
    pub fn handle_edit(&mut self, row_id: &RowId) -> Option<EditDraft> {
        if !self.can_edit() {
            return None;
        }
        let record = self.records.iter().find(|r| r.row_id() == *row_id)?;
        let draft = EditDraft::from_record(record);
        log::debug!("[review] editing {row_id}");
        self.editing = Some(draft.clone());
        Some(draft)
    }

    /// Opens the editor with a blank draft. Needs [`Permission::UserEdit`].
    pub fn request_new(&mut self) -> Option<EditDraft> {
        if !self.can_edit() {
            return None;
        }
        log::debug!("[review] new person");
        let draft = EditDraft::default();
        self.editing = Some(draft.clone());
        Some(draft)
    }

    pub fn handle_view(&mut self, row_id: &RowId) -> String {
        let route = contact_route(row_id);
        self.navigator.navigate(&route);
        route
    }

    /// Takes the editor's saved record: merges it onto the person being edited, or appends a new
    /// one. Fields the editor does not return (avatar, duplicate flag) are kept.
    pub fn complete_edit(&mut self, record: Record) {
        let existing = self.editing.take().is_some_and(|d| !d.is_new());
        if existing {
            let id = record.row_id();
            log::debug!("[review] updated {id}");
            for r in self.records.iter_mut().filter(|r| r.row_id() == id) {
                for (name, value) in record.fields() {
                    r.set(name, value.clone());
                }
            }
        } else {
            log::debug!("[review] added {}", record.row_id());
            self.records.push(record);
        }
    }

    pub fn handle_deleted(&mut self, row_id: &RowId) {
        remove_record(&mut self.records, row_id);
        self.editing = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height < 3 {
            return;
        }
        let header = Rect::new(area.x, area.y, area.width, 1);
        let rule = Rect::new(area.x, area.y + 1, area.width, 1);
        let body = Rect::new(area.x, area.y + 2, area.width, area.height - 3);
        let help = Rect::new(area.x, area.bottom() - 1, area.width, 1);

        self.render_header(header, buf, theme);
        match &self.last_error {
            Some(err) => {
                render::render_line_clipped(
                    rule.x,
                    rule.y,
                    rule.width,
                    buf,
                    &Line::from(format!("! {err}")),
                    theme.danger,
                );
            }
            None => render::fill(rule, buf, "─", theme.text_muted),
        }

        if self.loading {
            render::render_line_clipped(
                body.x + 1.min(body.width),
                body.y,
                body.width.saturating_sub(1),
                buf,
                &Line::from("Loading…"),
                theme.text_muted,
            );
        } else {
            let props = DataListProps::new(&self.records, &self.schema, &columns::to_mobile);
            self.list
                .render(body, buf, theme, &props, &self.options.breakpoint);
        }

        HelpBar::new(self.help_bindings()).render(help, buf, theme);

        if let Some(row_id) = self.overlay.active_row() {
            let subject = self
                .records
                .iter()
                .find(|r| r.row_id() == *row_id)
                .and_then(|r| r.text("fullName").or_else(|| r.text("username")))
                .map(str::to_string)
                .unwrap_or_else(|| format!("Record {row_id}"));
            self.dialog.render(area, buf, theme, &subject);
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut spans = vec![
            Span::styled(format!("{} › ", self.options.tab), theme.text_muted),
            Span::styled(
                self.options.title.clone(),
                theme.text_primary.add_modifier(Modifier::BOLD),
            ),
        ];
        if self.loading {
            spans.push(Span::styled("  Loading…", theme.text_muted));
        } else {
            spans.push(Span::styled(
                format!("  ({})", self.records.len()),
                theme.text_muted,
            ));
        }
        render::render_line_clipped(
            area.x,
            area.y,
            area.width,
            buf,
            &Line::from(spans),
            theme.text_primary,
        );

        if self.can_edit() {
            let hint = Line::from(format!("[{}] Add new", self.options.bindings.add_new.help_key));
            render::render_line_aligned(area, buf, &hint, Alignment::Right, theme.accent);
        }
    }

    fn help_bindings(&self) -> Vec<Binding> {
        if self.overlay.is_open() {
            return vec![
                Binding::new("tab", "switch", vec![key(KeyCode::Tab)]),
                Binding::new("enter", "choose", vec![key(KeyCode::Enter)]),
                Binding::new("esc", "keep", vec![key(KeyCode::Esc)]),
            ];
        }
        let bindings = &self.options.bindings;
        let mut out = self.list.bindings().help();
        if self.can_edit() {
            out.push(bindings.add_new.clone());
        }
        out.push(bindings.refresh.clone());
        out.push(bindings.quit.clone());
        out
    }
}
