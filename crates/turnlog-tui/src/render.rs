//! Frame rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;
use crate::surface::{LineKind, ViewLine};

/// Renders the whole viewer: transcript area plus a one-row status line.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [content, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    render_transcript(app, frame, content);
    render_status(app, frame, status);
}

fn render_transcript(app: &AppState, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let view = app.controller.surface();

    let lines: Vec<Line> = view
        .lines(width)
        .into_iter()
        .map(|(element, line)| styled_line(line, element == app.cursor))
        .collect();

    let paragraph = Paragraph::new(lines).scroll((scroll_offset(view.scroll()), 0));
    frame.render_widget(paragraph, area);
}

/// Saturates the line offset into the widget's scroll range instead of
/// wrapping on transcripts taller than `u16::MAX` lines.
fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn styled_line(line: ViewLine, selected: bool) -> Line<'static> {
    let style = match line.kind {
        LineKind::Header => {
            let base = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            if selected {
                base.add_modifier(Modifier::REVERSED)
            } else {
                base
            }
        }
        LineKind::Prompt => Style::default().fg(Color::Yellow),
        LineKind::Completion | LineKind::Blank => Style::default(),
    };
    Line::from(Span::styled(line.text, style))
}

fn render_status(app: &AppState, frame: &mut Frame, area: Rect) {
    let text = if let Some(status) = &app.status {
        status.clone()
    } else {
        let file = app
            .file_path
            .as_ref()
            .map_or_else(|| "(no file)".to_string(), |p| p.display().to_string());
        let len = app.controller.store().len();
        let position = if len == 0 {
            "empty".to_string()
        } else {
            format!("{}/{len}", app.cursor + 1)
        };
        format!("{file}  {position}  space:toggle p:all y:copy Y:copy-all s:save r:reload q:quit")
    };

    let bar = Paragraph::new(Line::from(text))
        .style(Style::default().fg(Color::Black).bg(Color::Gray));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_offset_saturates_instead_of_wrapping() {
        assert_eq!(scroll_offset(0), 0);
        assert_eq!(scroll_offset(65_535), u16::MAX);
        assert_eq!(scroll_offset(65_536), u16::MAX);
        assert_eq!(scroll_offset(1_000_000), u16::MAX);
    }
}
