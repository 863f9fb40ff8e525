use datalist_core::breakpoint::Breakpoint;
use datalist_core::breakpoint::FixedBreakpoint;
use datalist_core::breakpoint::WidthBreakpoint;
use datalist_core::input::InputEvent;
use datalist_core::input::KeyCode;
use datalist_core::overlay::OverlayState;
use datalist_core::overlay::Resolution;
use datalist_core::overlay::remove_record;
use datalist_core::record::Record;
use datalist_core::record::RowId;
use datalist_core::schema::ActionCell;
use datalist_core::schema::ColumnDescriptor;
use datalist_core::schema::ColumnSchema;
use datalist_core::schema::MobileRow;
use datalist_core::theme::Theme;
use datalist_core::view::DataListAction;
use datalist_core::view::DataListOptions;
use datalist_core::view::DataListProps;
use datalist_core::view::DataListView;
use datalist_core::view::RowActionKind;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;

fn schema() -> ColumnSchema {
    ColumnSchema::new(vec![
        ColumnDescriptor::new("id", "Id").numeric().width(4),
        ColumnDescriptor::new("username", "Username"),
        ColumnDescriptor::action("action", |open, id| {
            ActionCell::button("Review", open, id)
        })
        .width(8),
    ])
    .unwrap()
}

fn to_mobile(r: &Record) -> MobileRow {
    MobileRow {
        avatar: Some(Line::raw("@")),
        primary: Line::raw(r.text("username").unwrap_or_default().to_string()),
        secondary: Line::raw(r.row_id().to_string()),
    }
}

/// Twelve records with ids 0..12, deliberately out of order.
fn twelve() -> Vec<Record> {
    [5, 11, 0, 3, 9, 1, 7, 2, 10, 4, 8, 6]
        .into_iter()
        .map(|i: i64| Record::new(i).with("username", format!("user{i:02}")))
        .collect()
}

fn lines(buf: &Buffer) -> Vec<String> {
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

fn render(view: &mut DataListView, props: &DataListProps<'_>, w: u16, h: u16) -> Vec<String> {
    let area = Rect::new(0, 0, w, h);
    let mut buf = Buffer::empty(area);
    view.render(area, &mut buf, &Theme::default(), props, &WidthBreakpoint::default());
    lines(&buf)
}

fn list_view() -> DataListView {
    DataListView::with_options(DataListOptions {
        initial_rows_per_page: 10,
        show_scrollbar: false,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn wide_pages_through_sorted_records() {
    let data = twelve();
    let s = schema();
    let props = DataListProps::new(&data, &s, &to_mobile);
    let mut view = list_view();

    let out = render(&mut view, &props, 100, 14);
    assert_eq!(view.mode(), Breakpoint::Wide);
    for (row, i) in (1..=10).zip(0..10) {
        assert!(out[row].contains(&format!("user{i:02}")), "row {row}: {}", out[row]);
    }
    assert!(out[13].contains("1–10 of 12"));

    assert_eq!(
        view.handle_event(InputEvent::from(KeyCode::PageDown), &props),
        DataListAction::PageChanged(1)
    );
    let out = render(&mut view, &props, 100, 14);
    assert!(out[1].contains("user10"));
    assert!(out[2].contains("user11"));
    assert_eq!(out[3], "");
}

#[test]
fn narrow_lists_every_record_in_input_order() {
    let data = twelve();
    let s = schema();
    let props = DataListProps::new(&data, &s, &to_mobile);
    let mut view = list_view();

    let out = render(&mut view, &props, 40, 36);
    assert_eq!(view.mode(), Breakpoint::Narrow);
    let shown: Vec<String> = out
        .iter()
        .step_by(3)
        .map(|l| l.trim_start_matches('@').trim().to_string())
        .collect();
    let expected: Vec<String> = data
        .iter()
        .map(|r| r.text("username").unwrap_or_default().to_string())
        .collect();
    assert_eq!(shown, expected);
}

#[test]
fn review_then_delete_removes_exactly_that_row() {
    let mut data = twelve();
    let s = schema();
    let mut overlay = OverlayState::default();
    let mut view = list_view();

    let action = {
        let props = DataListProps::new(&data, &s, &to_mobile);
        let area = Rect::new(0, 0, 100, 14);
        let mut buf = Buffer::empty(area);
        view.render(
            area,
            &mut buf,
            &Theme::default(),
            &props,
            &FixedBreakpoint(Breakpoint::Wide),
        );
        for _ in 0..4 {
            view.handle_event(InputEvent::from(KeyCode::Down), &props);
        }
        view.handle_event(InputEvent::from(KeyCode::Enter), &props)
    };

    let DataListAction::RowAction { row_id, kind } = action else {
        panic!("expected a row action, got {action:?}");
    };
    assert_eq!(kind, RowActionKind::Review);
    assert_eq!(row_id, RowId::new("3"));

    overlay.open(row_id);
    overlay.resolve(Resolution::Confirm, |id| {
        remove_record(&mut data, id);
    });
    assert!(!overlay.is_open());
    assert_eq!(data.len(), 11);
    assert!(data.iter().all(|r| r.row_id() != RowId::new("3")));
}

#[test]
fn empty_collection_shows_placeholder_row() {
    let data: Vec<Record> = Vec::new();
    let s = schema();
    let props = DataListProps::new(&data, &s, &to_mobile);
    let mut view = list_view();

    let out = render(&mut view, &props, 100, 8);
    assert!(out[0].contains("Username"));
    assert!(out[1].contains("No records to display"));
}
