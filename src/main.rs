use nexora::app::{App, AppMessage, Screen};
use nexora::{logging, ui};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("nexora {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    // Diagnostics go to a file; the terminal belongs to the UI.
    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {e}");
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Setup panic hook to restore the terminal on panic.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode.
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Async stream of terminal events.
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (ownership needed for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when needed (dirty flag or running animation).
        if app.needs_redraw || app.is_animating() {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the landing reveal, ripple, and spinner moving.
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.mark_dirty();

                            // Global keybinds
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                app.quit();
                                return Ok(());
                            }

                            match app.screen {
                                Screen::Landing => handle_landing_key(app, key),
                                Screen::Main => handle_main_key(app, key),
                            }
                        }
                        Event::Paste(text) => {
                            if app.screen == Screen::Main {
                                app.insert_str(&text);
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Handle async messages (request completions, timers)
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.begin_landing_transition(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    // Result actions first so they work while typing.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('y') => {
                app.copy_result();
                return;
            }
            KeyCode::Char('e') => {
                app.export_result();
                return;
            }
            KeyCode::Char('u') => {
                app.clear_input();
                return;
            }
            _ => return,
        }
    }

    match key.code {
        KeyCode::Tab => app.next_mode(),
        KeyCode::BackTab => app.prev_mode(),
        KeyCode::Up => app.prev_example(),
        KeyCode::Down => app.next_example(),
        KeyCode::Enter => {
            // Enter on an empty form fills the highlighted example;
            // otherwise it submits.
            if app.session.input.trim().is_empty() && app.example_cursor.is_some() {
                app.pick_example();
            } else {
                app.submit();
            }
        }
        KeyCode::PageUp => {
            app.result_scroll = app.result_scroll.saturating_sub(5);
        }
        KeyCode::PageDown => {
            app.result_scroll = app.result_scroll.saturating_add(5);
        }
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete_char(),
        KeyCode::Esc => {
            if app.notice.is_some() {
                app.notice = None;
            } else {
                app.clear_input();
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            app.insert_char(c);
        }
        _ => {}
    }
}
