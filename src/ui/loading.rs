use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::i18n::{Locale, Text};

pub fn render_loading(frame: &mut Frame, area: Rect, locale: Locale) {
    let content = vec![
        title_line(locale),
        Line::from(""),
        Line::from(Span::styled(
            Text::Loading.get(locale),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Text::LoadingHint.get(locale).fg(Color::DarkGray)),
    ];

    render_card(frame, area, content, 8);
}

pub fn render_failed(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.locale();
    let mut content = vec![
        title_line(locale),
        Line::from(""),
        Line::from(Span::styled(
            Text::LoadFailed.get(locale),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(Text::LoadFailedHint.get(locale).fg(Color::Gray)),
        Line::from(""),
    ];
    if let Some(error) = app.load_error() {
        content.push(Line::from(error.fg(Color::DarkGray)));
        content.push(Line::from(""));
    }
    content.push(Line::from(
        Text::LoadFailedControls.get(locale).fg(Color::Green),
    ));

    render_card(frame, area, content, 12);
}

fn title_line(locale: Locale) -> Line<'static> {
    Line::from(Span::styled(
        Text::AppTitle.get(locale),
        Style::default().fg(Color::Cyan).bold(),
    ))
}

fn render_card(frame: &mut Frame, area: Rect, content: Vec<Line>, height: u16) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(70),
        Constraint::Fill(1),
    ])
    .split(rows[1]);

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, columns[1]);
}
