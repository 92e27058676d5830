//! Display strings for the supported locales.
//!
//! Static strings are looked up with [`Text::get`]; strings that embed
//! numbers or option text are built by the template functions at the bottom
//! of this module.

use std::env;

use clap::ValueEnum;

use crate::engine::Grade;

/// Locales the quiz can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    /// Korean.
    Ko,
    /// English, also the fallback.
    #[default]
    En,
}

impl Locale {
    /// Pick a locale from the usual environment variables, falling back to
    /// English when none is set or none is supported.
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }

    /// Parse a tag such as `ko`, `ko-KR` or `en_US.UTF-8`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "ko" => Some(Locale::Ko),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    Loading,
    LoadingHint,
    LoadFailed,
    LoadFailedHint,
    Score,
    Remaining,
    ReadPrompt,
    CorrectHeadline,
    CorrectHint,
    WrongHeadline,
    WrongHint,
    NextQuestion,
    SeeResults,
    QuizComplete,
    CorrectCount,
    IncorrectCount,
    QuizControls,
    AnsweredControls,
    ResultControls,
    LoadFailedControls,
    StudyTipHeading,
    StudyTip,
}

impl Text {
    pub fn get(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.korean(),
            Locale::En => self.english(),
        }
    }

    fn korean(self) -> &'static str {
        match self {
            Text::AppTitle => "한국어 숫자 퀴즈",
            Text::Loading => "문제를 준비하고 있어요",
            Text::LoadingHint => "잠시만 기다려주세요...",
            Text::LoadFailed => "문제를 불러올 수 없어요",
            Text::LoadFailedHint => "잠시 후 다시 시도해주세요.",
            Text::Score => "점수",
            Text::Remaining => "남은 문제",
            Text::ReadPrompt => "정확한 한국어로 읽어보세요",
            Text::CorrectHeadline => "정답입니다!",
            Text::CorrectHint => "훌륭해요! 계속해서 잘하고 있어요!",
            Text::WrongHeadline => "틀렸습니다",
            Text::WrongHint => "괜찮아요! 다음에는 더 잘할 수 있어요!",
            Text::NextQuestion => "다음 문제",
            Text::SeeResults => "결과 보기",
            Text::QuizComplete => "퀴즈 완료!",
            Text::CorrectCount => "정답",
            Text::IncorrectCount => "오답",
            Text::QuizControls => "j/k 이동  ·  enter 선택  ·  1-9 바로 선택  ·  q 종료",
            Text::AnsweredControls => "enter/n 계속  ·  q 종료",
            Text::ResultControls => "j/k 스크롤  ·  r 다시 도전  ·  n 새로운 문제  ·  q 종료",
            Text::LoadFailedControls => "r 다시 시도  ·  q 종료",
            Text::StudyTipHeading => "학습 팁",
            Text::StudyTip => {
                "매일 10분씩 연습하면 한국어 숫자 읽기 실력이 크게 향상됩니다. \
                 시계를 볼 때마다 한국어로 시간을 읽어보는 습관을 만들어보세요!"
            }
        }
    }

    fn english(self) -> &'static str {
        match self {
            Text::AppTitle => "Korean Numbers Quiz",
            Text::Loading => "Preparing your questions",
            Text::LoadingHint => "Just a moment...",
            Text::LoadFailed => "Could not load the questions",
            Text::LoadFailedHint => "Please try again in a moment.",
            Text::Score => "Score",
            Text::Remaining => "Remaining",
            Text::ReadPrompt => "Read it in correct Korean",
            Text::CorrectHeadline => "Correct!",
            Text::CorrectHint => "Great job! Keep it up!",
            Text::WrongHeadline => "Not quite",
            Text::WrongHint => "No worries, you'll get the next one!",
            Text::NextQuestion => "Next question",
            Text::SeeResults => "See results",
            Text::QuizComplete => "Quiz complete!",
            Text::CorrectCount => "Correct",
            Text::IncorrectCount => "Incorrect",
            Text::QuizControls => "j/k navigate  ·  enter select  ·  1-9 pick  ·  q quit",
            Text::AnsweredControls => "enter/n continue  ·  q quit",
            Text::ResultControls => "j/k scroll  ·  r retry  ·  n new questions  ·  q quit",
            Text::LoadFailedControls => "r retry  ·  q quit",
            Text::StudyTipHeading => "Study tip",
            Text::StudyTip => {
                "Ten minutes of practice a day makes reading Korean numbers much easier. \
                 Try reading the time in Korean whenever you look at a clock!"
            }
        }
    }
}

pub fn grade_headline(locale: Locale, grade: Grade) -> &'static str {
    match (locale, grade) {
        (Locale::Ko, Grade::Perfect) => "완벽합니다!",
        (Locale::Ko, Grade::Excellent) => "훌륭합니다!",
        (Locale::Ko, Grade::Good) => "잘했습니다!",
        (Locale::Ko, Grade::Fair) => "좋습니다!",
        (Locale::Ko, Grade::TryAgain) => "다시 도전해보세요!",
        (Locale::En, Grade::Perfect) => "Perfect!",
        (Locale::En, Grade::Excellent) => "Excellent!",
        (Locale::En, Grade::Good) => "Well done!",
        (Locale::En, Grade::Fair) => "Good!",
        (Locale::En, Grade::TryAgain) => "Give it another try!",
    }
}

pub fn encouragement(locale: Locale, grade: Grade) -> &'static str {
    match (locale, grade) {
        (Locale::Ko, Grade::Perfect) => "당신은 한국어 숫자 마스터입니다!",
        (Locale::Ko, Grade::Excellent) => "정말 잘하고 있어요! 계속해서 연습해보세요!",
        (Locale::Ko, Grade::Good) => "좋은 성과입니다! 조금만 더 연습하면 완벽해질 거예요!",
        (Locale::Ko, Grade::Fair) => "괜찮은 시작이에요! 더 많은 연습으로 실력을 키워보세요!",
        (Locale::Ko, Grade::TryAgain) => "괜찮아요! 매일 조금씩 연습하면 분명 늘 거예요!",
        (Locale::En, Grade::Perfect) => "You are a master of Korean numbers!",
        (Locale::En, Grade::Excellent) => "You're doing great! Keep practicing!",
        (Locale::En, Grade::Good) => "Nice result! A little more practice and you'll be perfect!",
        (Locale::En, Grade::Fair) => "A solid start! Keep practicing to build your skills!",
        (Locale::En, Grade::TryAgain) => "That's okay! A little practice every day goes a long way!",
    }
}

pub fn question_progress(locale: Locale, current: usize, total: usize) -> String {
    match locale {
        Locale::Ko => format!("문제 {} / {}", current, total),
        Locale::En => format!("Question {} / {}", current, total),
    }
}

pub fn percent_complete(locale: Locale, percentage: u32) -> String {
    match locale {
        Locale::Ko => format!("{}% 완료", percentage),
        Locale::En => format!("{}% complete", percentage),
    }
}

pub fn correct_answer_was(locale: Locale, answer: &str) -> String {
    match locale {
        Locale::Ko => format!("정답은 \"{}\"입니다.", answer),
        Locale::En => format!("The correct answer is \"{}\".", answer),
    }
}

pub fn score_line(score: usize, total: usize, percentage: u32) -> String {
    format!("{} / {}  ({}%)", score, total, percentage)
}
