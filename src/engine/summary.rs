/// Final tally of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
}

/// Grade tier derived from the percentage of correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Excellent,
    Good,
    Fair,
    TryAgain,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        Self { score, total }
    }

    pub fn incorrect(&self) -> usize {
        self.total.saturating_sub(self.score)
    }

    /// Percentage of correct answers rounded to the nearest integer.
    pub fn percentage(&self) -> u32 {
        rounded_percent(self.score, self.total)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Grade::Perfect,
            80..=89 => Grade::Excellent,
            70..=79 => Grade::Good,
            60..=69 => Grade::Fair,
            _ => Grade::TryAgain,
        }
    }
}

/// `part / whole` as a whole-number percentage, 0 when `whole` is 0.
pub(crate) fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
