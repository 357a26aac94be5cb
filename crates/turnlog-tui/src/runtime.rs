//! Viewer runtime: owns the terminal, runs the event loop, executes
//! effects.
//!
//! All I/O happens here. The reducer stays pure and produces effects; this
//! module executes them against the controller and reports outcomes on the
//! status line.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use tracing::warn;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll timeout when idle. Nothing animates, so a slow poll keeps CPU use
/// negligible while staying responsive to input.
const POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen viewer runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct ViewerRuntime {
    terminal: ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    pub state: AppState,
}

impl ViewerRuntime {
    /// Sets up the terminal and wraps `state`.
    ///
    /// # Errors
    /// Returns an error when the terminal cannot be configured.
    pub fn new(state: AppState) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        Ok(Self { terminal, state })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error on terminal I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so layout-dependent handling sees the
            // current size.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                if !effects.is_empty() {
                    dirty = true;
                }
                for effect in effects {
                    self.execute_effect(effect);
                }
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        if event::poll(POLL_DURATION)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain anything else already buffered without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }
        Ok(events)
    }

    // ======================================================================
    // Effect dispatch
    // ======================================================================

    fn execute_effect(&mut self, effect: UiEffect) {
        let status = match effect {
            UiEffect::CopyTurn(index) => match self.state.controller.copy_turn(index) {
                Ok(()) => format!("copied turn {}", index + 1),
                Err(e) => {
                    warn!(error = %e, "copy failed");
                    e.to_string()
                }
            },
            UiEffect::CopyAll => match self.state.controller.copy_all() {
                Ok(()) => format!("copied {} turns", self.state.controller.store().len()),
                Err(e) => {
                    warn!(error = %e, "copy failed");
                    e.to_string()
                }
            },
            UiEffect::Save => match self.state.file_path.clone() {
                Some(path) => match self.state.controller.save_path(&path) {
                    Ok(()) => format!("saved to {}", path.display()),
                    Err(e) => {
                        warn!(error = %e, "save failed");
                        e.to_string()
                    }
                },
                None => "no file to save to".to_string(),
            },
            UiEffect::Reload => match self.state.file_path.clone() {
                Some(path) => match self.state.controller.load_path(&path) {
                    Ok(()) => {
                        self.state.cursor = 0;
                        format!("reloaded {}", path.display())
                    }
                    Err(e) => {
                        warn!(error = %e, "reload failed");
                        e.to_string()
                    }
                },
                None => "no file to reload from".to_string(),
            },
        };
        self.state.clamp_cursor();
        self.state.status = Some(status);
    }
}
