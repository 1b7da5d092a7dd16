/// Discrete sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// Report order: positive, negative, neutral.
    pub const ALL: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    /// Lowercase name, as written to the results export.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
            Label::Neutral => "neutral",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Label::Positive => "😊",
            Label::Negative => "😞",
            Label::Neutral => "😐",
        }
    }

    /// Chart fill color. Fixed per label so charts compare across runs.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Label::Positive => "#2e7d32",
            Label::Negative => "#c62828",
            Label::Neutral => "#808080",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the polarity it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    pub label: Label,
    /// Polarity reported by the scorer, conventionally in `[-1.0, 1.0]`.
    pub score: f64,
}

impl SentimentResult {
    /// Result for input that has no text to score.
    pub const NEUTRAL_ZERO: SentimentResult = SentimentResult {
        label: Label::Neutral,
        score: 0.0,
    };
}

/// A single cell read from the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    /// A value from a column that holds no text (e.g. all numbers). Keeps the
    /// raw cell for display but is never scored.
    NonText(String),
}

impl CellValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::NonText(_) => None,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            CellValue::Text(s) | CellValue::NonText(s) => s,
        }
    }
}

/// One input row, ready for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub raw_text: CellValue,
    pub truncated_display: String,
}

impl TextRecord {
    #[must_use]
    pub fn new(raw_text: CellValue, display_width: usize) -> Self {
        let truncated_display = truncate_display(raw_text.raw(), display_width);
        Self {
            raw_text,
            truncated_display,
        }
    }

    /// Shorthand for a text cell.
    #[must_use]
    pub fn text(raw: impl Into<String>, display_width: usize) -> Self {
        Self::new(CellValue::Text(raw.into()), display_width)
    }
}

/// Shorten `text` to `width` characters followed by `...` when it is longer.
///
/// Counts `char`s, so multi-byte text is never split mid-character.
#[must_use]
pub fn truncate_display(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: TextRecord,
    pub result: SentimentResult,
}

/// Per-label tallies. Every label is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    #[must_use]
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
        }
    }

    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
            Label::Neutral => self.neutral += 1,
        }
    }

    #[must_use]
    pub fn sum(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Labels paired with their counts, in [`Label::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        Label::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}

/// Highest- and lowest-scoring records of a non-empty batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub best: ScoredRecord,
    pub worst: ScoredRecord,
}

/// Summary statistics for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub counts: LabelCounts,
    pub total: usize,
    /// `None` when the batch was empty: there is no best or worst record.
    pub extremes: Option<Extremes>,
}

impl BatchSummary {
    #[must_use]
    pub fn best(&self) -> Option<&ScoredRecord> {
        self.extremes.as_ref().map(|e| &e.best)
    }

    #[must_use]
    pub fn worst(&self) -> Option<&ScoredRecord> {
        self.extremes.as_ref().map(|e| &e.worst)
    }

    /// Share of `label` in percent, or `None` for an empty batch.
    #[must_use]
    pub fn percentage(&self, label: Label) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.counts.get(label) as f64 / self.total as f64 * 100.0;
        Some(pct)
    }
}
