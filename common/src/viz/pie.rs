//! 単語ごとの感情の円グラフ

use serde_json::json;

use super::layout::{base_layout, DEFAULT_HEIGHT};
use super::Figure;
use crate::theme::Theme;
use crate::types::{Sentiment, WordSentiment};

/// 感情ごとの単語数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl BucketCounts {
    pub fn from_words(words: &[WordSentiment]) -> Self {
        words.iter().fold(Self::default(), |mut counts, word| {
            match word.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Neutral => counts.neutral += 1,
                Sentiment::Negative => counts.negative += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Positive, Neutral, Negative の順
    pub fn as_array(&self) -> [usize; 3] {
        [self.positive, self.neutral, self.negative]
    }
}

/// ドーナツ型の円グラフ。単語がなくても全ゼロで描く
pub fn pie_figure(theme: Theme, words: &[WordSentiment]) -> Figure {
    let palette = theme.palette();
    let counts = BucketCounts::from_words(words);

    let trace = json!({
        "type": "pie",
        "labels": Sentiment::ALL.map(|s| s.label()),
        "values": counts.as_array(),
        "textinfo": "label+percent",
        "insidetextorientation": "radial",
        "textfont": { "color": palette.text },
        "marker": { "colors": palette.sentiment_colors() },
        "hole": 0.4,
    });

    Figure {
        data: json!([trace]),
        layout: base_layout(theme, DEFAULT_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, sentiment: Sentiment) -> WordSentiment {
        WordSentiment {
            text: text.to_string(),
            sentiment,
            score: 0.5,
        }
    }

    #[test]
    fn test_bucket_counts_sum_to_length() {
        let words = vec![
            word("good", Sentiment::Positive),
            word("fine", Sentiment::Neutral),
            word("bad", Sentiment::Negative),
            word("great", Sentiment::Positive),
            word("table", Sentiment::Neutral),
        ];
        let counts = BucketCounts::from_words(&words);
        assert_eq!(counts.as_array(), [2, 2, 1]);
        assert_eq!(counts.total(), words.len());
    }

    #[test]
    fn test_bucket_counts_empty() {
        let counts = BucketCounts::from_words(&[]);
        assert_eq!(counts, BucketCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_pie_figure_shape() {
        let figure = pie_figure(Theme::Light, &[word("love", Sentiment::Positive)]);
        let trace = figure.trace();
        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["hole"], 0.4);
        assert_eq!(trace["labels"], json!(["Positive", "Neutral", "Negative"]));
        assert_eq!(trace["values"], json!([1, 0, 0]));
        assert_eq!(trace["marker"]["colors"], json!(["green", "#cc7700", "red"]));
    }

    #[test]
    fn test_pie_figure_empty_is_all_zero() {
        let figure = pie_figure(Theme::Dark, &[]);
        assert_eq!(figure.trace()["values"], json!([0, 0, 0]));
        assert_eq!(figure.trace()["marker"]["colors"], json!(["#7f7", "#ff7", "#f77"]));
    }
}
