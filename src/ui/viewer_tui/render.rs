use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use super::app::ViewerApp;
use super::widgets::{centered_rect, rarity_color};
use crate::core::source::ArtifactSource;
use crate::ui::formatters::format_size;
use crate::ui::view::{MonkeyPanel, Page};

const ACCENT: Color = Color::Rgb(0x00, 0xff, 0x88);
const ERROR: Color = Color::Rgb(0xff, 0x6b, 0x9d);

/// Main render function
pub fn render_ui<S: ArtifactSource>(frame: &mut Frame, app: &ViewerApp<S>) {
    let area = frame.area();
    let page = app.viewer.page();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body[1]);

    render_header(frame, chunks[0], app);
    render_monkey_section(frame, body[0], page);
    render_traits_section(frame, right[0], page);
    render_history_section(frame, right[1], page);
    render_footer(frame, chunks[2], page);

    if app.show_help {
        render_help_overlay(frame, area);
    }

    if let Some(alert) = page.alerts.first() {
        render_alert(frame, area, alert);
    }
}

/// Render header with generation, age and rarity
fn render_header<S: ArtifactSource>(frame: &mut Frame, area: Rect, app: &ViewerApp<S>) {
    let page = app.viewer.page();
    let refresh = app.viewer.refresh();

    let (generation, age, rarity) = match &page.header {
        Some(h) => (h.generation.as_str(), h.age.as_str(), h.rarity.as_str()),
        None => ("-", "-", "-"),
    };

    let refresh_str = if refresh.is_running() {
        format!("auto {}s", refresh.interval().as_secs())
    } else {
        "paused".to_string()
    };

    let title = if page.loading {
        " 🐵 ForkMonkey │ loading… ".to_string()
    } else {
        format!(
            " 🐵 ForkMonkey │ {} │ Refresh: {} ",
            app.viewer.source().describe(),
            refresh_str
        )
    };

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" Generation ", label),
        Span::styled(generation.to_string(), value),
        Span::styled("   Age ", label),
        Span::styled(age.to_string(), value),
        Span::styled("   Rarity ", label),
        Span::styled(rarity.to_string(), value),
    ]);

    let border_color = if page.loading { Color::Yellow } else { ACCENT };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_monkey_section(frame: &mut Frame, area: Rect, page: &Page) {
    let block = Block::default()
        .title(" Monkey ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let label = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::new();

    match &page.monkey {
        MonkeyPanel::Empty => {
            lines.push(Line::from(Span::styled("Waiting for data…", label)));
        }
        MonkeyPanel::Artwork { summary, .. } => match summary {
            Some(summary) => {
                let dims = summary.dimensions().unwrap_or_else(|| "?".to_string());
                lines.push(Line::from(vec![
                    Span::styled("Artwork  ", label),
                    Span::raw(format!(
                        "SVG {} · {} · {} elements",
                        dims,
                        format_size(summary.bytes),
                        summary.element_count
                    )),
                ]));
                lines.push(Line::from(Span::styled(
                    "Press d to save it as an .svg file",
                    label,
                )));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "The artwork does not contain an <svg> element",
                    Style::default().fg(Color::Yellow),
                )));
            }
        },
        MonkeyPanel::Error { message, hint } => {
            lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(hint.clone(), label)));
        }
    }

    lines.push(Line::from(""));

    if let Some(identity) = &page.identity {
        for (name, value) in [
            ("DNA Hash ", &identity.dna_hash),
            ("Mutations", &identity.mutations),
            ("Parent   ", &identity.parent),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", name), label),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_traits_section(frame: &mut Frame, area: Rect, page: &Page) {
    let block = Block::default()
        .title(format!(" Traits ({}) ", page.traits.len()))
        .borders(Borders::ALL);

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Value").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Rarity").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1);

    let rows: Vec<Row> = page
        .traits
        .iter()
        .map(|card| {
            let color = rarity_color(&card.rarity);
            Row::new(vec![
                Cell::from(card.category.clone()),
                Cell::from(card.value.clone()).style(Style::default().fg(color)),
                Cell::from(card.rarity.to_string()).style(Style::default().fg(color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn render_history_section(frame: &mut Frame, area: Rect, page: &Page) {
    let count = page.history.as_ref().map_or(0, |h| h.count);
    let block = Block::default()
        .title(format!(" Evolution History ({}) ", count))
        .borders(Borders::ALL);

    let label = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::new();

    match &page.history {
        None => lines.push(Line::from(Span::styled("-", label))),
        Some(history) => {
            if let Some(placeholder) = history.placeholder() {
                lines.push(Line::from(Span::styled(placeholder, label)));
            }

            for item in &history.items {
                lines.push(Line::from(Span::styled(
                    item.date.clone(),
                    Style::default().fg(Color::Yellow),
                )));
                lines.push(Line::from(format!("  {}", item.story)));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  Gen: {} • Mutations: {} • Rarity: {}",
                        item.generation, item.mutations, item.rarity
                    ),
                    label,
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect, page: &Page) {
    let mut help = " q: Quit │ ?: Help │ r: Refresh │ d: Download SVG ".to_string();

    if let Some(updated) = page.last_updated {
        help.push_str(&format!("│ Updated {} ", updated.format("%H:%M:%S")));
    }
    if let Some(status) = &page.status {
        help.push_str(&format!("│ {} ", status));
    }

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    ForkMonkey Viewer - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    r / R       Refresh data
    d / D       Download SVG
    ? / h       Toggle this help screen
    q / Esc     Quit the application

    Data refreshes automatically while the
    terminal has focus.
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ERROR));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let popup_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}
