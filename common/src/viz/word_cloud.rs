//! 単語の散布図（ワードクラウド）
//!
//! 単語は中心 (0.5, 0.5) を囲む輪の上に並べる。角度は単語の順番で円を等分し、
//! 半径は 0.4〜0.6 に乱数で散らしたうえで、x・y それぞれ最大30%外側へずらす。

use std::f64::consts::TAU;

use rand::Rng;
use serde_json::json;

use super::layout::{base_layout, with_overrides, TALL_HEIGHT};
use super::Figure;
use crate::theme::Theme;
use crate::types::{Sentiment, WordSentiment};

/// 単語がないときに図の代わりに出す文言
pub const WORD_CLOUD_PLACEHOLDER: &str = "No data available";
/// 表示する単語の上限
pub const MAX_CLOUD_WORDS: usize = 50;
pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 40.0;

/// 配置済みの単語
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub sentiment: Sentiment,
    pub size: f64,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
}

impl PlacedWord {
    pub fn hover_text(&self) -> String {
        format!("{} ({})", self.text, self.sentiment)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WordCloud {
    Placeholder,
    Chart { figure: Figure, words: Vec<PlacedWord> },
}

/// 上限を超えたらスコアの高い順に50語。入力の並びは変えない
pub fn select_words(words: &[WordSentiment]) -> Vec<&WordSentiment> {
    let mut selected: Vec<&WordSentiment> = words.iter().collect();
    if selected.len() > MAX_CLOUD_WORDS {
        selected.sort_by(|a, b| b.score.total_cmp(&a.score));
        selected.truncate(MAX_CLOUD_WORDS);
    }
    selected
}

/// `12 + (score / max_score) * 28`、常に [12, 40]
pub fn font_size(score: f64, max_score: f64) -> f64 {
    let ratio = score / max_score;
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    MIN_FONT_SIZE + ratio * (MAX_FONT_SIZE - MIN_FONT_SIZE)
}

/// 最大スコア。全部0（または空）なら1
fn max_score(words: &[&WordSentiment]) -> f64 {
    let max = words.iter().map(|w| w.score).fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 {
        max
    } else {
        1.0
    }
}

/// 表示する単語とその文字サイズ
pub fn sized_words(words: &[WordSentiment]) -> Vec<(&WordSentiment, f64)> {
    let selected = select_words(words);
    let max = max_score(&selected);
    selected.into_iter().map(|w| (w, font_size(w.score, max))).collect()
}

/// 選んだ単語に大きさ・色・座標を割り当てる
pub fn place_words<R: Rng + ?Sized>(theme: Theme, words: &[WordSentiment], rng: &mut R) -> Vec<PlacedWord> {
    let palette = theme.palette();
    let sized = sized_words(words);
    let count = sized.len() as f64;

    sized
        .into_iter()
        .enumerate()
        .map(|(i, (word, size))| {
            let angle = (i as f64 / count) * TAU;
            let radius = 0.4 + rng.gen::<f64>() * 0.2;
            let x = 0.5 + angle.cos() * radius * (1.0 + rng.gen::<f64>() * 0.3);
            let y = 0.5 + angle.sin() * radius * (1.0 + rng.gen::<f64>() * 0.3);
            PlacedWord {
                text: word.text.clone(),
                sentiment: word.sentiment,
                size,
                color: palette.sentiment(word.sentiment),
                x,
                y,
            }
        })
        .collect()
}

pub fn word_cloud<R: Rng + ?Sized>(theme: Theme, words: &[WordSentiment], rng: &mut R) -> WordCloud {
    if words.is_empty() {
        return WordCloud::Placeholder;
    }

    let placed = place_words(theme, words, rng);
    let hidden_axis = json!({ "visible": false, "range": [-0.1, 1.1] });

    let trace = json!({
        "type": "scatter",
        "mode": "text",
        "text": placed.iter().map(|w| w.text.as_str()).collect::<Vec<_>>(),
        "x": placed.iter().map(|w| w.x).collect::<Vec<_>>(),
        "y": placed.iter().map(|w| w.y).collect::<Vec<_>>(),
        "textfont": {
            "size": placed.iter().map(|w| w.size).collect::<Vec<_>>(),
            "color": placed.iter().map(|w| w.color).collect::<Vec<_>>(),
        },
        "hoverinfo": "text",
        "hovertext": placed.iter().map(PlacedWord::hover_text).collect::<Vec<_>>(),
    });

    let layout = with_overrides(
        base_layout(theme, TALL_HEIGHT),
        json!({
            "margin": { "t": 10, "b": 10, "l": 10, "r": 10 },
            "xaxis": hidden_axis,
            "yaxis": hidden_axis,
            "showlegend": false,
        }),
    );

    WordCloud::Chart {
        figure: Figure {
            data: json!([trace]),
            layout,
        },
        words: placed,
    }
}
