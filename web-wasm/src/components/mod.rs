//! 画面コンポーネント

pub mod analyze_panel;
pub mod dashboard;
pub mod header;
pub mod history_table;
pub mod loading_indicator;
pub mod nav;
pub mod result_card;
pub mod visualizations;
