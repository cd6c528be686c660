use crate::application::{App, AppMode, Focus};
use crate::domain::FieldKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 48;

pub fn render_ui(f: &mut Frame, app: &App) {
    let column = centered_column(f.area(), FORM_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(column);

    render_header(f, chunks[0]);
    render_result(f, app, chunks[1]);
    render_field(f, app, FieldKind::Height, chunks[2]);
    render_field(f, app, FieldKind::Weight, chunks[3]);
    render_button(f, app, chunks[4]);
    render_status_bar(f, app, chunks[6]);
    render_footer(f, chunks[7]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f);
    }
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("BMI Calculator")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(header, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let rule = "─".repeat(area.width.saturating_sub(2) as usize);
    let lines = vec![
        Line::from(app.result_text()),
        Line::from(rule),
        Line::from(app.category_text()),
    ];
    let result = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(result, area);
}

fn render_field(f: &mut Frame, app: &App, kind: FieldKind, area: Rect) {
    let field = app.field(kind);
    let focused = app.focus.field() == Some(kind) && matches!(app.mode, AppMode::Normal);

    let (text, style) = if focused && field.text().is_empty() {
        (kind.placeholder(), Style::default().fg(Color::DarkGray))
    } else if focused {
        (field.text(), Style::default().fg(Color::Yellow))
    } else if field.display_text().is_empty() {
        (kind.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        (field.display_text(), Style::default())
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(kind.label())
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(Paragraph::new(text).style(style).block(block), area);

    if focused && inner.width > 0 {
        let offset = if field.text().is_empty() {
            0
        } else {
            (app.cursor_position as u16).min(inner.width - 1)
        };
        f.set_cursor_position((inner.x + offset, inner.y));
    }
}

fn render_button(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Calculate {
        Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button = Paragraph::new("Calculate")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match (&app.status_message, app.mode) {
        (Some(message), AppMode::Normal) => (message.clone(), Style::default().fg(Color::Red)),
        (_, AppMode::Help) => ("Esc/F1/q: close help".to_string(), Style::default().fg(Color::Cyan)),
        (None, AppMode::Normal) => (
            "Tab: next | Enter: calculate | F1: help | Esc: quit".to_string(),
            Style::default(),
        ),
    };
    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("height in m, weight in kg")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Key bindings")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"FORM
Tab / Down       Next control
Shift+Tab / Up   Previous control
Enter            Calculate
Esc / Ctrl+C     Quit

EDITING
Left / Right     Move cursor
Home / End       Jump to start / end
Backspace / Del  Delete character

RESULT
BMI = weight / height²
  < 18.5   Underweight
  < 25     Normal
  < 30     Overweight
  < 35     Obesity
  < 40     Class 2 obesity
  ≥ 40     Class 3 obesity

Inputs are cleared after each calculation."#
}
