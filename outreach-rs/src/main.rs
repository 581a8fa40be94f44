use clap::{Parser, Subcommand};
use outreach_rs::compose::Composer;
use outreach_rs::config::Config;
use outreach_rs::contacts::load_contacts;
use outreach_rs::dispatch::{DispatchLoop, StdinReviewer};
use outreach_rs::ledger::SentLedger;
use outreach_rs::mailer::SmtpMailer;
use outreach_rs::templates::TemplateSource;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "outreach", about = "Email outreach with a deduplicated sent-log")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send (or preview) emails for every contact not already in the log
    Send {
        /// Contacts CSV (defaults to the configured path)
        #[arg(long)]
        contacts: Option<PathBuf>,

        /// Explicit template file; wins over per-row template lookup
        #[arg(long)]
        template: Option<PathBuf>,

        /// CC the configured address on every email (rows can override)
        #[arg(long)]
        cc: bool,

        /// Sent-log CSV (defaults to the configured path)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Confirm each email interactively before sending
        #[arg(long, visible_alias = "preview")]
        dry_run: bool,
    },

    /// Show the sent-log
    Log,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        Config::from_file(&cli.config)?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    match cli.command {
        Command::Send {
            contacts,
            template,
            cc,
            log,
            dry_run,
        } => {
            let contacts_path =
                contacts.unwrap_or_else(|| PathBuf::from(&config.paths.contacts_csv));
            let log_path = log.unwrap_or_else(|| PathBuf::from(&config.paths.sent_log));

            // Explicit --template always wins; otherwise each row's
            // `template` field picks a file from the template directory.
            let source = match template {
                Some(path) => TemplateSource::Path(path),
                None => TemplateSource::Directory(PathBuf::from(&config.paths.template_dir)),
            };

            let rows = load_contacts(&contacts_path)?;
            info!("Loaded {} contacts from {}", rows.len(), contacts_path.display());

            let composer = Composer::new(
                source,
                config.sender.cc_address.clone(),
                cc || config.defaults.cc_myself,
            );
            let mailer = Arc::new(SmtpMailer::new(&config.sender, &config.smtp)?);
            let ledger = SentLedger::new(&log_path);
            let dispatch = DispatchLoop::new(composer, mailer, ledger);

            let mut reviewer = StdinReviewer;
            let report = if dry_run {
                dispatch.run(&rows, Some(&mut reviewer)).await?
            } else {
                dispatch.run(&rows, None).await?
            };

            println!(
                "Done: {} sent, {} already logged, {} skipped{}",
                report.sent,
                report.duplicates,
                report.skipped_by_user,
                if report.aborted { " (aborted)" } else { "" }
            );
        }

        Command::Log => {
            let path = PathBuf::from(&config.paths.sent_log);
            if !path.exists() {
                println!("No sent-log yet at {}", path.display());
            } else {
                print!("{}", std::fs::read_to_string(&path)?);
            }
        }
    }

    Ok(())
}
