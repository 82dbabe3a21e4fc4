//! TUI rendering with ratatui
//!
//! Single-screen layout: root word up top, found words and session info in
//! the middle, the input box below, and a modal alert for rejections.

use super::app::{App, InputMode};
use crate::output::formatters::length_badge;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Found words
            Constraint::Percentage(40), // Score + session info
        ])
        .split(chunks[1]);

    render_found_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);

    // Modal alert on top of everything
    if let Some(ref alert) = app.alert {
        render_alert(f, &alert.title, &alert.message);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.round.root_word().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 SCRAMBLE - Root Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .round
        .accepted_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    length_badge(word),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    let title = format!(" Found Words ({}) ", app.round.accepted_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Round score
            Constraint::Percentage(50), // Session stats
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_session(f, app, chunks[1]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.round.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Letters available: {}",
            app.round.root_word().chars().count()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" This Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_session(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(format!("Rounds played: {}", app.stats.rounds_played)),
        Line::from(format!("Words found:   {}", app.stats.words_accepted)),
        Line::from(format!("Best score:    {}", app.stats.best_score)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Alert => (" Press any key to continue ", Color::Red),
        InputMode::Editing => (" Enter your word | ENTER to submit ", Color::Yellow),
    };

    let input = Paragraph::new(app.round.pending_input())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round_text = format!("Round: {}", app.stats.rounds_played);
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let score_text = format!("Score: {}", app.round.score());
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Round | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 30, f.area());

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let alert = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}

/// Centered sub-rectangle taking the given percentages of `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
