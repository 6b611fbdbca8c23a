//! Two-thread TUI orchestration.
//!
//! Terminal I/O runs on a dedicated OS thread; the widget, the suggestion
//! engine and rendering stay on the tokio runtime. Communication via
//! `tokio::sync::mpsc` channels.

mod input;

pub use input::{handle_key, handle_mouse, handle_term_event};

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use wordfill_core::fetcher::AnyFetcher;
use wordfill_core::{Config, SuggestionEngine, apply_outcome};

use crate::app::App;
use crate::ui;

/// Terminal events forwarded from the UI reader thread.
pub enum TermEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Paste(String),
    Resize(u16, u16),
}

/// Run the interactive autocomplete input.
///
/// Returns the final text when the user finished with Ctrl+D, `None` when
/// they quit with Ctrl+C.
pub async fn run(
    config: &Config,
    fetcher: AnyFetcher,
    source_label: String,
) -> anyhow::Result<Option<String>> {
    // 1. Start the engine before touching the terminal.
    let (mut engine, mut outcome_rx) =
        SuggestionEngine::new(fetcher, Duration::from_millis(config.input.debounce_ms));

    // 2. Enter raw mode, create terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 3. Channels + cancellation token
    let cancel = CancellationToken::new();
    let (term_tx, mut term_rx) = tokio::sync::mpsc::channel::<TermEvent>(64);

    // 4. Spawn dedicated OS thread for crossterm::event::read()
    let cancel_clone = cancel.clone();
    let ui_thread = std::thread::spawn(move || {
        loop {
            if cancel_clone.is_cancelled() {
                break;
            }
            // Poll with 50ms timeout so we can check cancellation
            if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => {
                        // Filter out Release events (Windows emits Press + Release per keystroke)
                        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                            continue;
                        }
                        TermEvent::Key(key)
                    }
                    Ok(Event::Mouse(mouse)) => TermEvent::Mouse(mouse),
                    Ok(Event::Paste(text)) => TermEvent::Paste(text),
                    Ok(Event::Resize(w, h)) => TermEvent::Resize(w, h),
                    _ => continue,
                };
                if term_tx.blocking_send(forwarded).is_err() {
                    break;
                }
            }
        }
    });

    // 5. Main loop
    let mut app = App::new(config.input.stale_policy, config.input.visible_options);
    app.status = source_label;
    info!(
        debounce_ms = config.input.debounce_ms,
        stale_policy = ?config.input.stale_policy,
        "Autocomplete input started"
    );
    let mut tick = tokio::time::interval(Duration::from_millis(50));

    let result: anyhow::Result<()> = loop {
        tokio::select! {
            _ = tick.tick() => {
                if let Err(e) = terminal.draw(|f| ui::draw(f, &mut app)) {
                    break Err(e.into());
                }
            }
            Some(term_event) = term_rx.recv() => {
                let effect = handle_term_event(&mut app, term_event);
                debug!(?effect, "Input handled");
                engine.apply_effect(effect);
            }
            Some(outcome) = outcome_rx.recv() => {
                apply_outcome(&mut app.widget, outcome);
            }
        }
        if app.should_quit {
            break Ok(());
        }
    };

    // 6. Shutdown: signal UI thread to stop, drop any pending search
    cancel.cancel();
    let _ = ui_thread.join(); // fast — <50ms due to poll timeout
    engine.cancel();
    drop(engine);

    // 7. Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = terminal.show_cursor();

    result?;
    info!(submitted = app.submitted, "Autocomplete input closed");
    Ok(app.submitted.then(|| app.input().to_string()))
}
