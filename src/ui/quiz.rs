use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::Session;
use crate::i18n::{self, Locale, Text};

const OPTION_LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let locale = app.locale();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], session, locale);
    render_progress(frame, chunks[1], chunks[2], session, locale);
    render_question_card(frame, chunks[4], session.question().text(), locale);
    render_options(frame, chunks[5], session, app.cursor());
    if session.is_answered() {
        render_feedback(frame, chunks[6], session, locale);
    }
    render_controls(frame, chunks[7], session, locale);
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session, locale: Locale) {
    let [title_area, stats_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let title = Paragraph::new(Text::AppTitle.get(locale))
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, title_area);

    let stats = Line::from(vec![
        Span::styled(
            format!("{} ", Text::Score.get(locale)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            session.score().to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
        Span::styled(
            format!("   {} ", Text::Remaining.get(locale)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            session.remaining().to_string(),
            Style::default().fg(Color::Blue).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(stats).alignment(Alignment::Right), stats_area);
}

fn render_progress(
    frame: &mut Frame,
    text_area: Rect,
    gauge_area: Rect,
    session: &Session,
    locale: Locale,
) {
    let percent = session.progress_percent();
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(text_area);

    let position = i18n::question_progress(locale, session.position(), session.total());
    frame.render_widget(Paragraph::new(position).fg(Color::Gray), left);
    frame.render_widget(
        Paragraph::new(i18n::percent_complete(locale, percent))
            .alignment(Alignment::Right)
            .fg(Color::Gray),
        right,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .percent(percent.min(100) as u16)
        .label("");
    frame.render_widget(gauge, gauge_area);
}

fn render_question_card(frame: &mut Frame, area: Rect, text: &str, locale: Locale) {
    let content = vec![
        Line::from(Span::styled(text, Style::default().fg(Color::White).bold())),
        Line::from(""),
        Line::from(Text::ReadPrompt.get(locale).fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Blue),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &Session, cursor: usize) {
    let answered = session.is_answered();
    let selected = session.selected_slot();
    let mut lines: Vec<Line> = Vec::with_capacity(session.options().len() * 2);

    for (slot, option) in session.options().iter().enumerate() {
        let is_correct = session.is_slot_correct(slot);
        let is_selected = selected == Some(slot);

        let (marker, style) = if !answered {
            if slot == cursor {
                (">", Style::default().fg(Color::Cyan).bold())
            } else {
                (" ", Style::default().fg(Color::Gray))
            }
        } else if is_selected && is_correct {
            ("✓", Style::default().fg(Color::Green).bold())
        } else if is_selected {
            ("✗", Style::default().fg(Color::Red).bold())
        } else if is_correct {
            ("✓", Style::default().fg(Color::Green))
        } else {
            (" ", Style::default().fg(Color::DarkGray))
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(slot)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, session: &Session, locale: Locale) {
    let (color, content) = if session.last_answer_correct() == Some(true) {
        (
            Color::Green,
            vec![
                Line::from(Span::styled(
                    Text::CorrectHeadline.get(locale),
                    Style::default().fg(Color::Green).bold(),
                )),
                Line::from(Text::CorrectHint.get(locale).fg(Color::Green)),
            ],
        )
    } else {
        (
            Color::Red,
            vec![
                Line::from(Span::styled(
                    Text::WrongHeadline.get(locale),
                    Style::default().fg(Color::Red).bold(),
                )),
                Line::from(Span::styled(
                    i18n::correct_answer_was(locale, session.correct_option_text()),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Text::WrongHint.get(locale).fg(Color::DarkGray)),
            ],
        )
    };

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(color));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &Session, locale: Locale) {
    let text = if session.is_answered() {
        let next = if session.remaining() == 0 {
            Text::SeeResults
        } else {
            Text::NextQuestion
        };
        format!(
            "{}  ·  {}",
            next.get(locale),
            Text::AnsweredControls.get(locale)
        )
    } else {
        Text::QuizControls.get(locale).to_string()
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn option_label(slot: usize) -> char {
    OPTION_LABELS.get(slot).map_or('?', |&b| b as char)
}
