pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::REACTION_SYMBOLS;

use self::app::{InputMode, TuiApp, View};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Tui, ctx: &mut AppContext) -> Result<()> {
    let mut app = TuiApp::new(&ctx.config.board);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    app.refresh(ctx.store.snapshot());

    loop {
        terminal.draw(|frame| layout::render(frame, &app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match app.input_mode {
                InputMode::Search => handle_search_key(&mut app, ctx, key),
                InputMode::ConfirmDelete(id) => handle_confirm_key(&mut app, ctx, id, key),
                InputMode::Browse => handle_browse_action(&mut app, ctx, Action::from(key))?,
            },
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_browse_action(app: &mut TuiApp, ctx: &mut AppContext, action: Action) -> Result<()> {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::SwitchView => {
            app.clear_status();
            app.switch_view(ctx.store.snapshot());
        }
        Action::StartSearch => {
            app.clear_status();
            app.input_mode = InputMode::Search;
        }
        Action::ClearSearch => {
            app.filter_mut().search.clear();
            app.refresh(ctx.store.snapshot());
            app.set_status("Search cleared");
        }
        Action::CycleSort => {
            let sort = app.filter().sort.cycle();
            app.filter_mut().sort = sort;
            app.refresh(ctx.store.snapshot());
            app.set_status(format!("Sorted by {}", sort));
        }
        Action::Delete => {
            if let Some(article) = app.selected_article() {
                let (id, title) = (article.id, article.title.clone());
                if app.view == View::Articles {
                    app.set_status(format!("Delete \"{}\" permanently? y/N", title));
                    app.input_mode = InputMode::ConfirmDelete(id);
                } else {
                    app.set_status("Switch to All Articles (Tab) to delete");
                }
            }
        }
        Action::React(index) => {
            // Index comes from the digit keys, always in range.
            let symbol = REACTION_SYMBOLS[index];
            if let Some(article) = app.selected_article() {
                let id = article.id;
                if let Some(updated) = ctx.store.react(id, symbol)? {
                    app.set_status(format!("{} {}", symbol, updated.count_for(symbol)));
                    app.refresh(ctx.store.snapshot());
                    surface_save_warning(app, ctx);
                }
            }
        }
        Action::None => {}
    }
    Ok(())
}

fn handle_search_key(app: &mut TuiApp, ctx: &mut AppContext, key: KeyEvent) {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Browse;
        }
        KeyCode::Backspace => {
            app.filter_mut().search.pop();
            app.refresh(ctx.store.snapshot());
        }
        KeyCode::Char(c) => {
            app.filter_mut().search.push(c);
            app.refresh(ctx.store.snapshot());
        }
        _ => {}
    }
}

fn handle_confirm_key(app: &mut TuiApp, ctx: &mut AppContext, id: i64, key: KeyEvent) {
    use crossterm::event::KeyCode;

    app.input_mode = InputMode::Browse;
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if ctx.store.delete(id) {
                app.refresh(ctx.store.snapshot());
                app.set_status("Article deleted");
                surface_save_warning(app, ctx);
            } else {
                app.set_status("Article was already gone");
            }
        }
        _ => {
            app.set_status("Cancelled");
        }
    }
}

fn surface_save_warning(app: &mut TuiApp, ctx: &mut AppContext) {
    if let Some(warning) = ctx.store.take_save_warning() {
        app.set_status(format!("Warning: changes not saved: {}", warning));
    }
}
