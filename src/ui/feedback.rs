use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(outcome) = app.last_outcome() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let (verdict, color) = if outcome.is_correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect.", Color::Red)
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
    ];
    if !outcome.is_correct {
        content.push(Line::from(
            format!(
                "The correct answer is {}) {}",
                outcome.correct_letter, outcome.correct_text
            )
            .fg(Color::Gray),
        ));
    }
    content.push(Line::from(""));
    content.push(Line::from(
        format!("Score: {}", app.calculate_score()).fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, chunks[1]);

    let hint = Paragraph::new("any key to continue")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(hint, chunks[3]);
}
