mod loading;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Loading => loading::render_loading(frame, area, app.locale()),
        AppState::LoadFailed => loading::render_failed(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::QuizConfig;
    use crate::data::LoadError;
    use crate::i18n::Locale;
    use crate::models::Question;

    fn config() -> QuizConfig {
        QuizConfig {
            pool_size: 10,
            locale: Locale::En,
        }
    }

    fn question() -> Question {
        Question::new(
            "Three o'clock",
            vec!["se si".into(), "sam si".into(), "se gae".into()],
            0,
        )
        .unwrap()
    }

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_loading_and_failure() {
        let mut app = App::new(config());
        let generation = app.begin_loading();
        assert!(render_to_string(&app).contains("Preparing your questions"));

        app.finish_loading(
            generation,
            Err(LoadError::Empty {
                path: PathBuf::from("bank.json"),
            }),
        );
        let screen = render_to_string(&app);
        assert!(screen.contains("Could not load the questions"));
        assert!(screen.contains("r retry"));
    }

    #[test]
    fn test_render_quiz_before_and_after_answer() {
        let mut app = App::with_questions(config(), vec![question()]);
        let screen = render_to_string(&app);
        assert!(screen.contains("Three o'clock"));
        assert!(screen.contains("Question 1 / 1"));
        assert!(screen.contains("sam si"));

        let slot = app.session().unwrap().correct_slot();
        app.select_slot(slot);
        let screen = render_to_string(&app);
        assert!(screen.contains("Correct!"));
        assert!(screen.contains("See results"));
    }

    #[test]
    fn test_render_wrong_answer_shows_correct_option() {
        let mut app = App::with_questions(config(), vec![question()]);
        let session = app.session().unwrap();
        let wrong = (0..3).find(|&slot| !session.is_slot_correct(slot)).unwrap();
        app.select_slot(wrong);

        let screen = render_to_string(&app);
        assert!(screen.contains("Not quite"));
        assert!(screen.contains("The correct answer is \"se si\"."));
    }

    #[test]
    fn test_render_result() {
        let mut app = App::with_questions(config(), vec![question()]);
        let slot = app.session().unwrap().correct_slot();
        app.select_slot(slot);
        app.advance();
        assert_eq!(app.state, AppState::Result);

        let screen = render_to_string(&app);
        assert!(screen.contains("Quiz complete!"));
        assert!(screen.contains("1 / 1  (100%)"));
        assert!(screen.contains("Perfect!"));
        assert!(screen.contains("Study tip"));
        assert!(screen.contains("Ten minutes of practice a day"));
    }
}
