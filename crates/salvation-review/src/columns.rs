//! Column schema and narrow-mode projection for person records.

use datalist_core::DataListError;
use datalist_core::record::Record;
use datalist_core::record::Value;
use datalist_core::schema::ActionCell;
use datalist_core::schema::ColumnDescriptor;
use datalist_core::schema::ColumnSchema;
use datalist_core::schema::MobileRow;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;

pub const REVIEW_LABEL: &str = "Review";

pub fn salvation_columns() -> Result<ColumnSchema, DataListError> {
    ColumnSchema::new(vec![
        ColumnDescriptor::new("isActive", "Status")
            .render(|v, _| Line::from(status_chip(v.and_then(Value::as_bool).unwrap_or(false))))
            .width(10),
        ColumnDescriptor::new("avatar", "Avatar")
            .render(|v, r| Line::from(avatar(v, r)))
            .width(6),
        ColumnDescriptor::new("username", "Username"),
        ColumnDescriptor::new("fullName", "Full Name").style(Style::default().bold()),
        ColumnDescriptor::new("isDuplicate", "Is Duplicate ?")
            .render(|v, _| duplicate_choice(v.and_then(Value::as_bool)))
            .width(14),
        ColumnDescriptor::action("action", |open, id| {
            ActionCell::button(format!("[{REVIEW_LABEL}]"), open, id)
        })
        .width(8),
    ])
}

/// Stacked summary: avatar, status chip, then full name and role chips.
pub fn to_mobile(record: &Record) -> MobileRow {
    let active = record
        .get("isActive")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut secondary = vec![Span::raw(record.text("fullName").unwrap_or_default().to_string())];
    for role in record
        .get("roles")
        .and_then(Value::as_list)
        .unwrap_or_default()
    {
        secondary.push(Span::raw(" "));
        secondary.push(Span::styled(format!("[{role}]"), Style::default().cyan()));
    }

    MobileRow {
        avatar: Some(Line::from(avatar(record.get("avatar"), record))),
        primary: Line::from(status_chip(active)),
        secondary: Line::from(secondary),
    }
}

fn status_chip(active: bool) -> Span<'static> {
    if active {
        Span::styled("● Active", Style::default().green())
    } else {
        Span::styled("○ Inactive", Style::default().dark_gray())
    }
}

/// A filled marker when the person has a picture, their initials otherwise.
fn avatar(value: Option<&Value>, record: &Record) -> Span<'static> {
    if value.is_some_and(Value::has_value) {
        return Span::styled("◉", Style::default().magenta());
    }
    let initials: String = record
        .text("fullName")
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if initials.is_empty() {
        Span::styled("?", Style::default().dark_gray())
    } else {
        Span::styled(initials, Style::default().magenta())
    }
}

fn duplicate_choice(marked: Option<bool>) -> Line<'static> {
    let button = |label: &'static str, chosen: bool| {
        let style = if chosen {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Span::styled(format!("[{label}]"), style)
    };
    Line::from(vec![
        button("Yes", marked == Some(true)),
        Span::raw(" "),
        button("No", marked == Some(false)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::person;
    use datalist_core::record::RowId;
    use datalist_core::schema::CellContent;
    use datalist_core::schema::OpenOverlay;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn jane() -> Record {
        person(2, "Jane Deere", "jane.doe@kanzucodefoundation.org", "")
    }

    #[test]
    fn schema_has_action_column_last() {
        let s = salvation_columns().unwrap();
        let labels: Vec<&str> = s.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Status", "Avatar", "Username", "Full Name", "Is Duplicate ?", "Action"]
        );
        assert_eq!(s.action_column(), Some(5));
    }

    #[test]
    fn cells_render_chips_and_initials() {
        let s = salvation_columns().unwrap();
        let noop: OpenOverlay = Rc::new(|_| {});
        let r = jane();
        let text = |name: &str| {
            s.get(name)
                .map(|c| c.resolve(&r, &noop).line().to_string())
                .unwrap_or_default()
        };
        assert_eq!(text("isActive"), "● Active");
        assert_eq!(text("avatar"), "JD");
        assert_eq!(text("isDuplicate"), "[Yes] [No]");
        assert_eq!(text("username"), "jane.doe@kanzucodefoundation.org");
    }

    #[test]
    fn review_button_opens_for_record_id() {
        let s = salvation_columns().unwrap();
        let opened: Rc<RefCell<Option<RowId>>> = Rc::new(RefCell::new(None));
        let sink = opened.clone();
        let open: OpenOverlay = Rc::new(move |id| *sink.borrow_mut() = Some(id.clone()));
        let Some(column) = s.get("action") else {
            panic!("missing action column");
        };
        let CellContent::Action(cell) = column.resolve(&jane(), &open) else {
            panic!("expected action cell");
        };
        assert_eq!(cell.label().to_string(), "[Review]");
        cell.activate();
        assert_eq!(*opened.borrow(), Some(RowId::new("2")));
    }

    #[test]
    fn mobile_row_lists_roles() {
        let row = to_mobile(&jane());
        assert_eq!(row.primary.to_string(), "● Active");
        assert_eq!(row.secondary.to_string(), "Jane Deere [RoleAdmin]");
        assert_eq!(row.avatar.map(|a| a.to_string()), Some("JD".to_string()));
    }
}
