//! The terminal render surface: transcript elements and scroll state.
//!
//! `TranscriptView` implements the engine's surface contract. Each turn
//! maps to one element; an element lazily wraps its text for the current
//! terminal width and caches the result, invalidated only when that
//! element's visibility changes or the width changes. This is what makes
//! the patch path cheap: a single toggle re-wraps one element and leaves
//! the rest of the cache and the scroll position alone.

use std::cell::RefCell;

use turnlog_core::{RenderSurface, Turn};

use crate::text::wrap_text;

/// How a rendered line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Timestamp + user header.
    Header,
    /// A wrapped prompt line (only present while the prompt is visible).
    Prompt,
    /// A wrapped completion line.
    Completion,
    /// Separator between turns.
    Blank,
}

/// One line of a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub kind: LineKind,
    pub text: String,
}

/// One turn's rendered form.
#[derive(Debug)]
struct Element {
    turn: Turn,
    visible: bool,
    /// Wrapped lines keyed by the width they were produced for.
    cache: RefCell<Option<(usize, Vec<ViewLine>)>>,
}

impl Element {
    fn new(turn: Turn, visible: bool) -> Self {
        Self {
            turn,
            visible,
            cache: RefCell::new(None),
        }
    }

    fn lines(&self, width: usize) -> Vec<ViewLine> {
        if let Some((cached_width, lines)) = self.cache.borrow().as_ref()
            && *cached_width == width
        {
            return lines.clone();
        }
        let lines = build_lines(&self.turn, self.visible, width);
        *self.cache.borrow_mut() = Some((width, lines.clone()));
        lines
    }

    fn height(&self, width: usize) -> usize {
        self.lines(width).len()
    }
}

fn build_lines(turn: &Turn, visible: bool, width: usize) -> Vec<ViewLine> {
    let header = format!("[{}] {}", format_timestamp(turn.timestamp), turn.user);
    let mut lines = vec![ViewLine {
        kind: LineKind::Header,
        text: header,
    }];

    let body_width = width.saturating_sub(2).max(10);
    if visible {
        for wrapped in wrap_text(&turn.prompt, body_width) {
            lines.push(ViewLine {
                kind: LineKind::Prompt,
                text: format!("> {wrapped}"),
            });
        }
    }
    for wrapped in wrap_text(&turn.completion, body_width) {
        lines.push(ViewLine {
            kind: LineKind::Completion,
            text: format!("  {wrapped}"),
        });
    }
    lines.push(ViewLine {
        kind: LineKind::Blank,
        text: String::new(),
    });
    lines
}

/// Formats a Unix timestamp for the element header (UTC).
pub fn format_timestamp(timestamp: f64) -> String {
    let secs = timestamp.trunc() as i64;
    let nanos = (timestamp.fract() * 1_000_000_000.0) as u32;
    chrono::DateTime::from_timestamp(secs, nanos)
        .map_or_else(|| format!("{timestamp}"), |dt| {
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        })
}

// ==========================================================================
// TranscriptView
// ==========================================================================

/// The transcript display: one element per turn plus a line-based scroll
/// offset.
#[derive(Debug, Default)]
pub struct TranscriptView {
    elements: Vec<Element>,
    scroll: usize,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// First visible line index.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_by(&mut self, delta: isize, width: usize, viewport: usize) {
        let max = self.total_height(width).saturating_sub(viewport);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// All lines at `width`, in element order.
    pub fn lines(&self, width: usize) -> Vec<(usize, ViewLine)> {
        self.elements
            .iter()
            .enumerate()
            .flat_map(|(i, e)| e.lines(width).into_iter().map(move |line| (i, line)))
            .collect()
    }

    pub fn total_height(&self, width: usize) -> usize {
        self.elements.iter().map(|e| e.height(width)).sum()
    }

    /// Line offset where element `index` begins.
    pub fn element_offset(&self, index: usize, width: usize) -> usize {
        self.elements
            .iter()
            .take(index)
            .map(|e| e.height(width))
            .sum()
    }

    /// Adjusts scroll so element `index` is fully on screen where possible.
    pub fn ensure_element_visible(&mut self, index: usize, width: usize, viewport: usize) {
        let Some(element) = self.elements.get(index) else {
            return;
        };
        let top = self.element_offset(index, width);
        let height = element.height(width);
        if top < self.scroll {
            self.scroll = top;
        } else if top + height > self.scroll + viewport {
            self.scroll = (top + height).saturating_sub(viewport);
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self, width: usize, viewport: usize) {
        self.scroll = self.total_height(width).saturating_sub(viewport);
    }
}

impl RenderSurface for TranscriptView {
    fn rebuild_all(&mut self, turns: &[(Turn, bool)]) {
        self.elements = turns
            .iter()
            .map(|(turn, visible)| Element::new(turn.clone(), *visible))
            .collect();
        self.scroll = 0;
    }

    fn patch_one(&mut self, index: usize, turn: &Turn, visible: bool) {
        if let Some(element) = self.elements.get_mut(index) {
            element.turn = turn.clone();
            element.visible = visible;
            *element.cache.borrow_mut() = None;
        }
    }

    fn append_elements(&mut self, turns: &[(Turn, bool)]) {
        self.elements.extend(
            turns
                .iter()
                .map(|(turn, visible)| Element::new(turn.clone(), *visible)),
        );
    }
}
