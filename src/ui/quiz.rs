use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{QuizQuestion, letter_for};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(question), Some(answer_set)) = (app.current_question(), app.current_answer_set())
    else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_details(frame, chunks[1], question);
    render_question_text(frame, chunks[2], &question.question);
    render_options(frame, chunks[3], answer_set.options());
    render_controls(frame, chunks[4]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_details(frame: &mut Frame, area: Rect, question: &QuizQuestion) {
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::styled(question.category.as_str(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Difficulty: ", label),
            Span::styled(
                question.difficulty.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String]) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}) ", letter_for(index)),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled(option.as_str(), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("a-d answer  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
