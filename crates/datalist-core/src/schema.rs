//! Declarative column definitions.
//!
//! A [`ColumnSchema`] describes how each record is projected into table cells. It carries no
//! rendering logic of its own beyond the per-column renderer callbacks: layout, alignment and
//! styling are applied by [`crate::view::DataListView`].
//!
//! Columns come in two flavours:
//! - ordinary columns, whose renderer receives the field value and the whole record;
//! - the action column (label [`ACTION_LABEL`]), whose renderer receives an overlay opener and
//!   the row id. This lets a screen attach a row-scoped "Review" button without the table knowing
//!   how the screen dispatches it.

use crate::error::DataListError;
use crate::record::Record;
use crate::record::RowId;
use crate::record::Value;
use ratatui::style::Style;
use ratatui::text::Line;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Label that marks a column as the row action column.
pub const ACTION_LABEL: &str = "Action";

/// Callback that opens the confirmation overlay for a row.
pub type OpenOverlay = Rc<dyn Fn(&RowId)>;

pub type ValueRenderer = Arc<dyn Fn(Option<&Value>, &Record) -> Line<'static> + Send + Sync>;
pub type ActionRenderer = Arc<dyn Fn(OpenOverlay, &RowId) -> ActionCell + Send + Sync>;

#[derive(Clone)]
pub enum CellRenderer {
    Value(ValueRenderer),
    Action(ActionRenderer),
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRenderer::Value(_) => f.write_str("CellRenderer::Value(..)"),
            CellRenderer::Action(_) => f.write_str("CellRenderer::Action(..)"),
        }
    }
}

/// An interactive cell: a label plus the behaviour bound to it by the action renderer.
#[derive(Clone)]
pub struct ActionCell {
    label: Line<'static>,
    on_activate: Rc<dyn Fn()>,
}

impl ActionCell {
    pub fn new(label: impl Into<Line<'static>>, on_activate: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_activate: Rc::new(on_activate),
        }
    }

    /// A button that opens the overlay for `row_id` when activated.
    pub fn button(label: impl Into<Line<'static>>, open: OpenOverlay, row_id: &RowId) -> Self {
        let row_id = row_id.clone();
        Self::new(label, move || open(&row_id))
    }

    pub fn label(&self) -> &Line<'static> {
        &self.label
    }

    pub fn activate(&self) {
        (self.on_activate)()
    }
}

impl fmt::Debug for ActionCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCell")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Resolved content of one cell.
#[derive(Clone, Debug)]
pub enum CellContent {
    Text(Line<'static>),
    Action(ActionCell),
}

impl CellContent {
    pub fn line(&self) -> &Line<'static> {
        match self {
            CellContent::Text(line) => line,
            CellContent::Action(cell) => cell.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Per-column layout hints.
#[derive(Clone, Debug, Default)]
pub struct CellOptions {
    /// Fixed width in terminal columns. Columns without one share the remaining width.
    pub width: Option<u16>,
    pub style: Style,
}

#[derive(Clone, Debug)]
pub struct ColumnDescriptor {
    pub name: String,
    pub label: String,
    /// Right-aligns the column. Has no effect on sorting or formatting.
    pub numeric: bool,
    pub renderer: Option<CellRenderer>,
    pub cell_options: CellOptions,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            numeric: false,
            renderer: None,
            cell_options: CellOptions::default(),
        }
    }

    /// The row action column. `render` is called with an overlay opener and the row id.
    pub fn action(
        name: impl Into<String>,
        render: impl Fn(OpenOverlay, &RowId) -> ActionCell + Send + Sync + 'static,
    ) -> Self {
        let mut c = Self::new(name, ACTION_LABEL);
        c.renderer = Some(CellRenderer::Action(Arc::new(render)));
        c
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn render(
        mut self,
        render: impl Fn(Option<&Value>, &Record) -> Line<'static> + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(CellRenderer::Value(Arc::new(render)));
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.cell_options.width = Some(width);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.cell_options.style = style;
        self
    }

    pub fn is_action(&self) -> bool {
        self.label == ACTION_LABEL
    }

    pub fn alignment(&self) -> Alignment {
        if self.numeric {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    /// Resolves this column's cell for `record`.
    ///
    /// Without a renderer the raw field value is shown, stringified; a missing field renders as
    /// an empty cell.
    pub fn resolve(&self, record: &Record, open: &OpenOverlay) -> CellContent {
        match &self.renderer {
            Some(CellRenderer::Action(render)) => {
                CellContent::Action(render(open.clone(), &record.row_id()))
            }
            Some(CellRenderer::Value(render)) => {
                CellContent::Text(render(record.get(&self.name), record))
            }
            None => CellContent::Text(Line::raw(
                record
                    .get(&self.name)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            )),
        }
    }

    fn validate(&self, index: usize) -> Result<(), DataListError> {
        if self.name.trim().is_empty() {
            return Err(DataListError::EmptyColumnName { index });
        }
        if self.label.trim().is_empty() {
            return Err(DataListError::EmptyColumnLabel {
                name: self.name.clone(),
            });
        }
        let mismatch = match &self.renderer {
            Some(CellRenderer::Action(_)) => !self.is_action(),
            Some(CellRenderer::Value(_)) => self.is_action(),
            None => false,
        };
        if mismatch {
            return Err(DataListError::ActionRendererMismatch {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// An ordered, validated list of [`ColumnDescriptor`]s.
///
/// Order defines left-to-right display order. Names are unique.
#[derive(Clone, Debug, Default)]
pub struct ColumnSchema {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnSchema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, DataListError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (i, c) in columns.iter().enumerate() {
            c.validate(i)?;
            if !seen.insert(c.name.as_str()) {
                return Err(DataListError::DuplicateColumn(c.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn action_column(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| matches!(c.renderer, Some(CellRenderer::Action(_))))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }
}

/// Flattened record summary used by the narrow (stacked list) presentation.
#[derive(Clone, Debug, Default)]
pub struct MobileRow {
    pub avatar: Option<Line<'static>>,
    pub primary: Line<'static>,
    pub secondary: Line<'static>,
}

pub type MobileProjection = dyn Fn(&Record) -> MobileRow;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn noop_opener() -> OpenOverlay {
        Rc::new(|_| {})
    }

    #[test]
    fn plain_column_shows_stringified_value() {
        let c = ColumnDescriptor::new("age", "Age").numeric();
        let r = Record::new(1).with("age", 42);
        assert_eq!(c.resolve(&r, &noop_opener()).line().to_string(), "42");
        assert_eq!(c.alignment(), Alignment::Right);

        let missing = Record::new(2);
        assert_eq!(c.resolve(&missing, &noop_opener()).line().to_string(), "");
    }

    #[test]
    fn value_renderer_receives_field_and_record() {
        let c = ColumnDescriptor::new("isActive", "Status").render(|v, r| {
            let active = v.and_then(Value::as_bool).unwrap_or(false);
            Line::raw(format!("{}#{}", if active { "Active" } else { "Inactive" }, r.row_id()))
        });
        let r = Record::new(3).with("isActive", true);
        assert_eq!(c.resolve(&r, &noop_opener()).line().to_string(), "Active#3");
    }

    #[test]
    fn action_renderer_opens_overlay_with_row_id() {
        let c = ColumnDescriptor::action("action", |open, id| {
            ActionCell::button("Review", open, id)
        });
        let opened: Rc<RefCell<Vec<RowId>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = opened.clone();
        let open: OpenOverlay = Rc::new(move |id| sink.borrow_mut().push(id.clone()));

        let Some(CellRenderer::Action(render)) = &c.renderer else {
            panic!("expected action renderer");
        };
        let cell = render(open, &RowId::new("row-7"));
        assert!(opened.borrow().is_empty());
        cell.activate();
        assert_eq!(*opened.borrow(), vec![RowId::new("row-7")]);
    }

    #[test]
    fn resolve_action_column_binds_the_records_id() {
        let c = ColumnDescriptor::action("action", |open, id| {
            ActionCell::button("Review", open, id)
        });
        let opened: Rc<RefCell<Option<RowId>>> = Rc::new(RefCell::new(None));
        let sink = opened.clone();
        let open: OpenOverlay = Rc::new(move |id| *sink.borrow_mut() = Some(id.clone()));
        let r = Record::new(9).with("action", "payload");

        let CellContent::Action(cell) = c.resolve(&r, &open) else {
            panic!("expected action cell");
        };
        assert_eq!(cell.label().to_string(), "Review");
        cell.activate();
        assert_eq!(*opened.borrow(), Some(RowId::new("9")));
    }

    #[test]
    fn schema_rejects_duplicates_and_blanks() {
        let dup = ColumnSchema::new(vec![
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::new("name", "Other"),
        ]);
        assert_eq!(
            dup.unwrap_err(),
            DataListError::DuplicateColumn("name".to_string())
        );

        let blank = ColumnSchema::new(vec![ColumnDescriptor::new("", "Name")]);
        assert_eq!(
            blank.unwrap_err(),
            DataListError::EmptyColumnName { index: 0 }
        );

        let no_label = ColumnSchema::new(vec![ColumnDescriptor::new("name", " ")]);
        assert!(matches!(
            no_label,
            Err(DataListError::EmptyColumnLabel { .. })
        ));
    }

    #[test]
    fn schema_rejects_misplaced_action_renderers() {
        let mut c = ColumnDescriptor::action("action", |open, id| {
            ActionCell::button("Review", open, id)
        });
        c.label = "Review".to_string();
        assert!(matches!(
            ColumnSchema::new(vec![c]),
            Err(DataListError::ActionRendererMismatch { .. })
        ));

        let c = ColumnDescriptor::new("action", ACTION_LABEL).render(|_, _| Line::raw("x"));
        assert!(matches!(
            ColumnSchema::new(vec![c]),
            Err(DataListError::ActionRendererMismatch { .. })
        ));
    }

    #[test]
    fn bare_action_column_shows_its_field() {
        let s = ColumnSchema::new(vec![ColumnDescriptor::new("action", ACTION_LABEL)]).unwrap();
        let record = Record::new(3).with("action", "pending");
        let cell = s.columns()[0].resolve(&record, &noop_opener());
        assert_eq!(cell.line().to_string(), "pending");
    }

    #[test]
    fn schema_lookups() {
        let s = ColumnSchema::new(vec![
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::action("action", |open, id| ActionCell::button("Go", open, id)),
        ])
        .unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.index_of("action"), Some(1));
        assert_eq!(s.action_column(), Some(1));
        assert!(s.get("missing").is_none());
    }
}
