//! TUI rendering functions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Draw the full UI.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Dropdown space
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_input(frame, app, chunks[1]);
    app.layout.input = chunks[1];
    app.layout.dropdown = draw_dropdown(frame, app, chunks[1], chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "wordfill",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.widget.is_focused();
    let input = app.input();
    let inner_width = area.width.saturating_sub(2) as usize; // minus borders

    // Scroll horizontally so the cursor stays inside the box.
    let cursor_width = UnicodeWidthStr::width(&input[..app.cursor_pos.min(input.len())]);
    let hscroll = cursor_width.saturating_sub(inner_width.saturating_sub(1));

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let paragraph = Paragraph::new(input)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Input"),
        )
        .scroll((0, u16::try_from(hscroll).unwrap_or(u16::MAX)));
    frame.render_widget(paragraph, area);

    if focused {
        let col = u16::try_from(cursor_width - hscroll).unwrap_or(u16::MAX);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(col)
            .min(area.x.saturating_add(area.width.saturating_sub(2)));
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

/// Draw the suggestion list under the input. Returns the area drawn, if any.
fn draw_dropdown(frame: &mut Frame<'_>, app: &mut App, input: Rect, space: Rect) -> Option<Rect> {
    if !app.widget.dropdown_visible() {
        return None;
    }

    // Minus borders.
    let max_rows = space.height.saturating_sub(2);
    if max_rows == 0 {
        return None;
    }

    let len = app.widget.suggestions().len();
    let active = app.widget.active_index();
    app.dropdown.follow(active, len, usize::from(max_rows));
    let range = app.dropdown.visible_range(len);

    let rows = u16::try_from(range.len()).unwrap_or(u16::MAX);
    let height = rows.saturating_add(2).min(space.height);
    let area = Rect::new(input.x, space.y, input.width, height);

    let lines: Vec<Line<'_>> = range
        .map(|idx| {
            let candidate = &app.widget.suggestions()[idx];
            let base = if idx == active {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let matched = base.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            let matched = if idx == active {
                matched.fg(Color::Black).add_modifier(Modifier::UNDERLINED)
            } else {
                matched
            };
            let spans: Vec<Span<'_>> = app
                .widget
                .render_highlighted(candidate)
                .into_iter()
                .map(|seg| Span::styled(seg.text, if seg.is_match { matched } else { base }))
                .collect();
            Line::from(spans).style(base)
        })
        .collect();

    let title = format!("Suggestions {}/{}", active + 1, len);
    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
    Some(area)
}

fn draw_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(app.status.as_str(), Style::default().fg(Color::DarkGray)),
        Span::styled(
            " | Up/Down: select | Enter: accept | Esc: dismiss | Tab: focus | Ctrl+D: done | Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(status, area);
}
