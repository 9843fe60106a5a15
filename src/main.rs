//! Terminal dashboard.
//!
//! Every stdin line is the new content of the password field. A line of the
//! form `:wordlist <path>` selects a different wordlist instead.

use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;
use pwd_gauge::{wordlist_dir, Dashboard, DashboardView, ReloadPolicy, WordlistStatus};
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WORDLIST_COMMAND: &str = ":wordlist ";

#[derive(Parser, Debug)]
#[command(name = "pwd-gauge")]
#[command(author, version, about = "Password strength and breach exposure dashboard")]
struct Cli {
    /// Directory scanned for *.txt wordlists (default: $PWD_WORDLIST_DIR or ./wordlists)
    #[arg(long)]
    wordlist_dir: Option<PathBuf>,

    /// Wordlist to load instead of the first one discovered
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// What a failed wordlist load does to the previous one: clear or preserve
    /// (default: $PWD_WORDLIST_ON_ERROR or clear)
    #[arg(long, value_parser = parse_policy)]
    on_load_error: Option<ReloadPolicy>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_policy(s: &str) -> Result<ReloadPolicy, String> {
    s.parse()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let policy = cli.on_load_error.unwrap_or_else(ReloadPolicy::from_env);
    let mut dashboard = Dashboard::new(policy);

    let dir = cli.wordlist_dir.unwrap_or_else(wordlist_dir);
    let candidates = dashboard.scan_wordlists(&dir).to_vec();
    for candidate in &candidates {
        println!("  wordlist: {}", candidate.display());
    }
    if let Some(path) = cli.wordlist {
        dashboard.select_wordlist(path);
    }
    print_wordlist_status(dashboard.wordlist_status());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(path) = line.strip_prefix(WORDLIST_COMMAND) {
            let (status, view) = dashboard.select_wordlist(path.trim());
            print_wordlist_status(status);
            print_view(&view);
            continue;
        }
        let view = dashboard.set_password(SecretString::new(line.into()));
        print_view(&view);
    }

    Ok(())
}

fn print_wordlist_status(status: &WordlistStatus) {
    match status {
        WordlistStatus::Loaded { path, .. } => {
            println!("Breach Check: {} ({})", status.text(), path.display());
        }
        WordlistStatus::Failed { path, reason } => {
            tracing::warn!("Could not load {}: {}", path.display(), reason);
            println!("Breach Check: {}", status.text());
        }
        WordlistStatus::NotScanned | WordlistStatus::NoneFound => {
            println!("Breach Check: {}", status.text());
        }
    }
}

fn print_view(view: &DashboardView) {
    const GAUGE_WIDTH: usize = 32;
    let filled = (view.gauge.ratio * GAUGE_WIDTH as f64).round() as usize;
    let needle = if view.gauge.alert { '!' } else { '#' };
    let checklist: Vec<&str> = view.checklist.iter().map(|item| item.label).collect();

    println!();
    println!("  {}", view.status_text);
    println!("  Weak [{}{}] Strong", needle.to_string().repeat(filled), "-".repeat(GAUGE_WIDTH - filled));
    println!("  {}", checklist.join(" | "));
    println!("  {}", view.crack_time_text);
    for line in view.recommendation_text.lines() {
        println!("  {}", line);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "pwd_gauge=debug" } else { "pwd_gauge=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
