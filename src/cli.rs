use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sentiment")]
#[command(about = "感情分析サーバーのターミナルクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 接続先（設定・環境変数より優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テキストを解析して結果を表示
    Analyze {
        /// 解析するテキスト
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// テキストファイルから読む
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// 集計（件数と分布）を表示
    Stats,

    /// 最近の解析履歴を表示
    History,

    /// ファイルの各行をまとめて解析
    Batch {
        /// 1行1テキストのファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定の表示・変更
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
