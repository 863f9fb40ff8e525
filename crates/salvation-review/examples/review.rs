use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use datalist_core::crossterm_input::input_event_from_crossterm;
use datalist_core::theme::Theme;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Stylize;
use ratatui::text::Line;
use salvation_review::access::Permission;
use salvation_review::access::User;
use salvation_review::navigation::History;
use salvation_review::screen::ReviewAction;
use salvation_review::screen::ReviewScreen;
use salvation_review::source::StaticSource;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::time::Duration;

type Screen = ReviewScreen<StaticSource, History>;

fn main() -> io::Result<()> {
    let log_file = File::create("review.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let user = User::new("demo@kanzucodefoundation.org")
        .with_permission(Permission::Edit)
        .with_permission(Permission::UserEdit)
        .with_permission(Permission::UserView);
    let mut screen = ReviewScreen::new(user, StaticSource::seeded(), History::default())
        .map_err(io::Error::other)?;
    screen.refresh();

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &Theme::default(), &mut screen);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    screen: &mut Screen,
) -> io::Result<()> {
    let mut status = String::from("Press r on a row to review it.");

    loop {
        terminal.draw(|f| {
            let [main, footer] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .areas(f.area());
            screen.render(main, f.buffer_mut(), theme);
            f.render_widget(Line::from(status.as_str()).dark_gray(), footer);
        })?;

        if !crossterm::event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        match screen.handle_event(ev) {
            ReviewAction::Quit => return Ok(()),
            ReviewAction::EditRequested(draft) => {
                // No editor in the demo: saving the draft unchanged exercises the upsert path.
                status = format!("{}: saved without changes", draft.title());
                match draft.id.clone() {
                    Some(id) => screen.complete_edit(draft.to_record(id)),
                    None => screen.cancel_edit(),
                }
            }
            ReviewAction::Navigated(route) => status = format!("navigated to {route}"),
            ReviewAction::Removed(id) => status = format!("deleted record {id}"),
            ReviewAction::Redraw | ReviewAction::None => {}
        }
    }
}
