use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use eyre::Result;
use log::info;

mod cli;

use cli::{Cli, OutputFormat};
use ytsum::cache::MemoryCache;
use ytsum::error::{Error, ErrorKind};
use ytsum::options::SummaryOptions;
use ytsum::summarize::SummaryClient;
use ytsum::youtube::TranscriptResolver;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn describe_error(err: &Error) -> String {
    match err.kind() {
        ErrorKind::RateLimited => format!(
            "Rate limited by an upstream service. Wait a while before retrying, and avoid \
             hammering the same URL.\n  detail: {err}"
        ),
        ErrorKind::NoSubtitles => format!(
            "This video has no usable caption track, so there is nothing to summarize. Try a \
             video with captions.\n  detail: {err}"
        ),
        ErrorKind::Network => format!(
            "Could not reach the provider. Check your connection and try again.\n  detail: {err}"
        ),
        ErrorKind::Upstream => format!("The summarization service failed: {err}"),
        ErrorKind::Unknown => format!(
            "Unexpected failure — the video may be private, deleted, or the URL malformed.\n  \
             detail: {err}"
        ),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = <Cli as clap::Parser>::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    let options = SummaryOptions::parse(&cli.length, &cli.style, &cli.explanation);

    let http = reqwest::Client::new();
    let resolver = TranscriptResolver::new(http.clone(), config.resolver_config());
    let client = SummaryClient::new(http, config.summarize_config());

    // A zero TTL turns every probe into a miss
    let cache_ttl = if cli.no_cache { Duration::ZERO } else { config.cache_ttl() };
    let cache = MemoryCache::new(cache_ttl, config.cache_capacity);

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        eyre::bail!("no URL or video ID provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    let mut failed = false;

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        let outcome = match ytsum::summarize_video(&resolver, &client, &cache, url_input, &options).await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("{}", describe_error(&e));
                failed = true;
                continue;
            }
        };

        if cli.verbose {
            eprintln!(
                "Video: {} ({})\nCaptions: {}{}\nOptions: {} / {} / {}{}",
                outcome.title,
                outcome.video_id,
                outcome.language,
                if outcome.auto_generated { " (auto-generated)" } else { "" },
                options.length.token(),
                options.style.token(),
                options.explanation.token(),
                if outcome.from_cache { "\nServed from cache" } else { "" },
            );
        }

        let rendered = match cli.format {
            OutputFormat::Text => ytsum::output::render_text(&outcome),
            OutputFormat::Json => ytsum::output::render_json(&outcome),
        };

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
