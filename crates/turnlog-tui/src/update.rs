//! Viewer reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => {
            if app.viewport != (width, height) {
                app.viewport = (width, height);
            }
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            // Any key press clears the previous status message.
            app.status = None;
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let width = app.content_width();
    let viewport = app.content_height();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            move_cursor(app, 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            move_cursor(app, -1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
            app.controller.surface_mut().scroll_to_top();
        }
        KeyCode::Char('G') => {
            app.cursor = app.controller.store().len().saturating_sub(1);
            app.controller
                .surface_mut()
                .scroll_to_bottom(width, viewport);
        }
        KeyCode::PageDown => {
            app.controller
                .surface_mut()
                .scroll_by(viewport as isize, width, viewport);
        }
        KeyCode::PageUp => {
            app.controller
                .surface_mut()
                .scroll_by(-(viewport as isize), width, viewport);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Err(e) = app.controller.toggle_turn(app.cursor) {
                app.status = Some(e.to_string());
            }
        }
        KeyCode::Char('p') => {
            let visible = !app.controller.view().default_visible();
            app.controller.toggle_all(visible);
            app.status = Some(if visible {
                "all prompts shown".to_string()
            } else {
                "all prompts hidden".to_string()
            });
        }
        KeyCode::Char('y') => return vec![UiEffect::CopyTurn(app.cursor)],
        KeyCode::Char('Y') => return vec![UiEffect::CopyAll],
        KeyCode::Char('s') => return vec![UiEffect::Save],
        KeyCode::Char('r') => return vec![UiEffect::Reload],
        _ => {}
    }
    vec![]
}

fn move_cursor(app: &mut AppState, delta: isize) {
    let len = app.controller.store().len();
    if len == 0 {
        return;
    }
    app.cursor = app
        .cursor
        .saturating_add_signed(delta)
        .min(len - 1);
    let width = app.content_width();
    let viewport = app.content_height();
    app.controller
        .surface_mut()
        .ensure_element_visible(app.cursor, width, viewport);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};
    use turnlog_core::{StdFileSystem, TranscriptController, Turn};

    use super::*;
    use crate::clipboard::TerminalClipboard;
    use crate::surface::TranscriptView;

    fn app(turns: usize) -> AppState {
        let turns = (0..turns)
            .map(|i| Turn::new(i as f64, format!("u{i}"), "p", "c"))
            .collect();
        let controller = TranscriptController::with_turns(
            TranscriptView::new(),
            TerminalClipboard,
            StdFileSystem,
            turns,
        );
        AppState::new(controller, None)
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    #[test]
    fn q_and_esc_quit() {
        let mut a = app(1);
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut a = app(1);
        press(&mut a, KeyCode::Esc);
        assert!(a.should_quit);
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut a = app(3);
        press(&mut a, KeyCode::Char('j'));
        press(&mut a, KeyCode::Char('j'));
        assert_eq!(a.cursor, 2);
        press(&mut a, KeyCode::Down);
        assert_eq!(a.cursor, 2);
        press(&mut a, KeyCode::Char('k'));
        assert_eq!(a.cursor, 1);
        press(&mut a, KeyCode::Char('g'));
        assert_eq!(a.cursor, 0);
        press(&mut a, KeyCode::Char('k'));
        assert_eq!(a.cursor, 0);
        press(&mut a, KeyCode::Char('G'));
        assert_eq!(a.cursor, 2);
    }

    #[test]
    fn cursor_is_inert_on_empty_transcript() {
        let mut a = app(0);
        press(&mut a, KeyCode::Char('j'));
        assert_eq!(a.cursor, 0);
    }

    #[test]
    fn space_toggles_the_selected_prompt() {
        let mut a = app(2);
        press(&mut a, KeyCode::Char('j'));
        press(&mut a, KeyCode::Char(' '));
        assert!(a.controller.view().is_visible(0).unwrap());
        assert!(!a.controller.view().is_visible(1).unwrap());
        press(&mut a, KeyCode::Enter);
        assert!(a.controller.view().is_visible(1).unwrap());
    }

    #[test]
    fn toggle_on_empty_transcript_reports_instead_of_panicking() {
        let mut a = app(0);
        press(&mut a, KeyCode::Char(' '));
        assert!(a.status.is_some());
    }

    #[test]
    fn p_flips_all_prompts_both_ways() {
        let mut a = app(3);
        press(&mut a, KeyCode::Char('p'));
        assert!(!a.controller.view().is_visible(0).unwrap());
        assert!(!a.controller.view().default_visible());
        press(&mut a, KeyCode::Char('p'));
        assert!(a.controller.view().is_visible(2).unwrap());
    }

    #[test]
    fn io_keys_become_effects() {
        let mut a = app(2);
        press(&mut a, KeyCode::Char('j'));
        assert_eq!(press(&mut a, KeyCode::Char('y')), vec![UiEffect::CopyTurn(1)]);
        assert_eq!(press(&mut a, KeyCode::Char('Y')), vec![UiEffect::CopyAll]);
        assert_eq!(press(&mut a, KeyCode::Char('s')), vec![UiEffect::Save]);
        assert_eq!(press(&mut a, KeyCode::Char('r')), vec![UiEffect::Reload]);
    }

    #[test]
    fn key_press_clears_the_status_line() {
        let mut a = app(1);
        a.status = Some("saved".to_string());
        press(&mut a, KeyCode::Char('j'));
        assert!(a.status.is_none());
    }

    #[test]
    fn frame_event_records_the_viewport() {
        let mut a = app(1);
        update(&mut a, UiEvent::Frame { width: 120, height: 40 });
        assert_eq!(a.viewport, (120, 40));
    }
}
