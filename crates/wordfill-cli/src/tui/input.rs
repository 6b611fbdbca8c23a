//! Input handling for TUI key and mouse events.
//!
//! ENTER, UP and DOWN belong to the widget and Esc dismisses it; everything
//! else edits the text.
//! Each handler returns the widget's [`Effect`] for the engine to carry out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use wordfill_core::{Effect, NavKey};

use crate::app::{App, HitTarget};

use super::TermEvent;

/// Process a terminal event, updating app state.
pub fn handle_term_event(app: &mut App, event: TermEvent) -> Effect {
    match event {
        TermEvent::Key(key) => handle_key(app, key),
        TermEvent::Mouse(mouse) => handle_mouse(app, mouse),
        TermEvent::Paste(text) => {
            if !app.widget.is_focused() {
                return Effect::None;
            }
            // Single-line input: line breaks become spaces.
            let text = text.replace(['\r', '\n'], " ");
            app.insert_str(&text)
        }
        TermEvent::Resize(_, _) => Effect::None, // redrawn on next tick
    }
}

/// Handle a key press.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Effect {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return Effect::None;
        }
        KeyCode::Char('d') if ctrl => {
            app.submitted = true;
            app.should_quit = true;
            return Effect::None;
        }
        _ => {}
    }

    if !app.widget.is_focused() {
        if key.code == KeyCode::Tab {
            app.widget.on_focus();
        }
        return Effect::None;
    }

    match key.code {
        KeyCode::Enter => app.navigate(NavKey::Enter),
        KeyCode::Up => app.navigate(NavKey::Up),
        KeyCode::Down => app.navigate(NavKey::Down),
        KeyCode::Esc => {
            app.widget.on_outside_interaction();
            Effect::None
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.insert_char(c)
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => {
            app.move_left();
            Effect::None
        }
        KeyCode::Right => {
            app.move_right();
            Effect::None
        }
        KeyCode::Home => {
            app.move_home();
            Effect::None
        }
        KeyCode::End => {
            app.move_end();
            Effect::None
        }
        _ => Effect::None,
    }
}

/// Handle a mouse event. Only left-button presses matter.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Effect {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Effect::None;
    }
    match app.hit_test(mouse.column, mouse.row) {
        HitTarget::Option(index) => app.accept_option(index),
        HitTarget::Input => {
            app.widget.on_focus();
            Effect::None
        }
        HitTarget::DropdownChrome => Effect::None,
        HitTarget::Outside => {
            app.widget.on_outside_interaction();
            Effect::None
        }
    }
}
