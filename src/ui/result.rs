use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::{Session, Summary};
use crate::i18n::{self, Locale, Text};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let locale = app.locale();
    let summary = session.summary();
    let grade_color = grade_color(summary.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], summary, grade_color, locale);
    render_question_breakdown(frame, chunks[2], session, app.result_scroll());
    render_study_tip(frame, chunks[3], locale);
    render_controls(frame, chunks[4], locale);
}

fn grade_color(percentage: u32) -> Color {
    match percentage {
        80.. => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    summary: Summary,
    grade_color: Color,
    locale: Locale,
) {
    let grade = summary.grade();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            Text::QuizComplete.get(locale),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(i18n::grade_headline(locale, grade).fg(grade_color)),
        Line::from(""),
        Line::from(Span::styled(
            i18n::score_line(summary.score, summary.total, summary.percentage()),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} {}", Text::CorrectCount.get(locale), summary.score),
                Style::default().fg(Color::Green),
            ),
            Span::styled("  ·  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} {}", Text::IncorrectCount.get(locale), summary.incorrect()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(""),
        Line::from(i18n::encouragement(locale, grade).fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, session: &Session, scroll: usize) {
    let lines: Vec<Line> = session
        .review()
        .enumerate()
        .map(|(index, (question, is_correct))| {
            let (symbol, color) = if is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(question.text()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  {}", question.correct_option()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_study_tip(frame: &mut Frame, area: Rect, locale: Locale) {
    let content = vec![
        Line::from(Span::styled(
            Text::StudyTipHeading.get(locale),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(Text::StudyTip.get(locale).fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect, locale: Locale) {
    let widget = Paragraph::new(Text::ResultControls.get(locale))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_question() {
        assert_eq!(truncate_question("3시"), "3시");
        let long = "가".repeat(60);
        let truncated = truncate_question(&long);
        assert_eq!(truncated.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_grade_color() {
        assert_eq!(grade_color(100), Color::Green);
        assert_eq!(grade_color(80), Color::Green);
        assert_eq!(grade_color(65), Color::Yellow);
        assert_eq!(grade_color(10), Color::Red);
    }
}
