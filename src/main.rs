use anyhow::Context;
use clap::Parser;
use sentiment_common::{analyze_text, load_history, load_stats, ResultView};
use sentiment_dashboard::{batch, cli, client, config, error, progress, report};
use cli::{Cli, Commands};
use client::HttpBackend;
use config::Config;
use error::DashboardError;
use progress::Spinner;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn read_input(text: Option<String>, file: Option<std::path::PathBuf>) -> error::Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            if !path.exists() {
                return Err(DashboardError::FileNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(&path)?)
        }
        (None, None) => Err(DashboardError::EmptyInput("テキストか --file を指定してください".into())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗")?;
    let connect = || -> error::Result<HttpBackend> {
        match &cli.endpoint {
            Some(endpoint) => HttpBackend::new(endpoint, config.timeout()),
            None => HttpBackend::from_config(&config),
        }
    };

    match cli.command {
        Commands::Analyze { text, file } => {
            let text = read_input(text, file)?;
            let backend = connect()?;
            tracing::debug!(endpoint = backend.endpoint(), "analyze");

            let spinner = Spinner::new("Analyzing...");
            let outcome = analyze_text(&backend, &text, |loading| spinner.set_active(loading)).await;
            drop(spinner);

            match outcome.view {
                ResultView::Advisory(message) => println!("{}", message),
                ResultView::Summary(_) => {
                    if let Some(result) = &outcome.current {
                        print!("{}", report::render_summary(result));
                        println!();
                        print!("{}", report::render_words(result));
                    }
                }
            }
        }

        Commands::Stats => {
            let backend = connect()?;
            let spinner = Spinner::new("Loading statistics...");
            spinner.set_active(true);
            let stats = load_stats(&backend).await;
            drop(spinner);

            match stats {
                Some(stats) => print!("{}", report::render_stats(&stats)),
                None => anyhow::bail!("統計を取得できませんでした: {}", backend.endpoint()),
            }
        }

        Commands::History => {
            let backend = connect()?;
            let spinner = Spinner::new("Loading history...");
            spinner.set_active(true);
            let history = load_history(&backend).await;
            drop(spinner);

            match history {
                Some(history) => print!("{}", report::render_history(&history)),
                None => anyhow::bail!("履歴を取得できませんでした: {}", backend.endpoint()),
            }
        }

        Commands::Batch { file } => {
            println!("📄 sentiment - バッチ解析\n");
            let texts = batch::read_texts(&file)?;
            println!("✔ {}件のテキストを読み込み\n", texts.len());

            let backend = connect()?;
            let spinner = Spinner::new("Analyzing batch...");
            spinner.set_active(true);
            let results = batch::analyze_all(&backend, &texts).await;
            drop(spinner);

            print!("{}", report::render_batch(&results?));
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut stored = config.clone();
            let changed = set_endpoint.is_some() || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                stored.set_endpoint(&endpoint)?;
                println!("✔ 接続先を設定しました: {}", stored.endpoint);
            }
            if let Some(seconds) = set_timeout {
                stored.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました: {}秒", stored.timeout_seconds);
            }
            if changed {
                stored.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", stored.endpoint);
                println!("  実際の接続先: {}", stored.resolved_endpoint());
                println!("  タイムアウト: {}秒", stored.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
