use super::common::{LOG_TARGET, init_logging};
use super::{Host, ProgressReporter, Settings};
use crate::Result;
use crate::facts::{GitHubClient, Progress, RepoSpec, SUPPORTED_FORMATS, extract};
use crate::misc::ColorMode;
use crate::reports::{OutputWriter, generate_text, write_insights, write_summary};
use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::{ArgAction, Parser};
use core::time::Duration;
use std::ffi::OsString;
use std::io::Write;

const DEFAULT_OUTPUT_DIR: &str = "output";

/// How long a run may take before a progress bar appears.
const PROGRESS_DELAY: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "repo-lens", version, about, disable_version_flag = true)]
#[command(after_help = SUPPORTED_FORMATS)]
struct Cli {
    /// Repository to analyze, as a URL or `owner/repo`
    #[arg(value_name = "TARGET")]
    target: Option<String>,

    /// Repository URL; takes precedence over TARGET
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Repository owner [default: $GITHUB_DEFAULT_USER or kubernetes]
    #[arg(short = 'o', long)]
    owner: Option<String>,

    /// Repository name [default: $GITHUB_DEFAULT_REPO or kubernetes]
    #[arg(short = 'r', long)]
    repo: Option<String>,

    /// Directory to write results into [default: $OUTPUT_DIR or output]
    #[arg(long, value_name = "DIR")]
    output: Option<Utf8PathBuf>,

    /// When to color console output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),
}

/// Entry point of the tool.
///
/// Loads a `.env` file from the working directory, then runs against the process environment.
pub async fn run<I, T>(host: &mut impl Host, args: I)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        let _ = writeln!(host.error(), "warning: could not load .env file: {e}");
    }

    run_with_lookup(host, args, |name| std::env::var(name).ok()).await;
}

/// Runs the tool, reading environment variables through `lookup`.
pub async fn run_with_lookup<I, T>(host: &mut impl Host, args: I, lookup: impl Fn(&str) -> Option<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render().to_string();
            let _ = if e.use_stderr() {
                write!(host.error(), "{rendered}")
            } else {
                write!(host.output(), "{rendered}")
            };
            host.exit(e.exit_code());
            return;
        }
    };

    if let Err(e) = analyze(host, cli, lookup).await {
        let _ = writeln!(host.error(), "Error: {e:#}");
        host.exit(1);
    }
}

/// Picks the repository to analyze: a URL wins over owner/repo flags, which fall back to the
/// configured defaults.
fn resolve_target(cli: &Cli, settings: &Settings) -> Result<RepoSpec> {
    if let Some(url) = cli.url.as_deref().or(cli.target.as_deref()) {
        return url.parse();
    }

    Ok(RepoSpec::new(
        cli.owner.as_deref().unwrap_or(&settings.default_owner),
        cli.repo.as_deref().unwrap_or(&settings.default_repo),
    ))
}

/// Resolves once `signal` reports Ctrl-C. Never resolves if the handler could not be installed.
async fn interrupted(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        log::warn!(target: LOG_TARGET, "Could not listen for Ctrl-C: {e}");
        core::future::pending::<()>().await;
    }
}

async fn analyze(host: &mut impl Host, cli: Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    let settings = Settings::from_lookup(lookup)?;
    init_logging(settings.debug, settings.log_filter.as_deref());

    let spec = resolve_target(&cli, &settings)?;
    log::info!(target: LOG_TARGET, "Target: {spec}");

    let client = GitHubClient::new(&settings.token, settings.base_url.as_ref())?;
    let use_colors = cli.color.enabled_for_stdout();

    let progress = ProgressReporter::new(PROGRESS_DELAY);
    let data = {
        let _visibility = progress.start_visibility_checking();
        tokio::select! {
            result = extract(&client, &spec, &progress) => result?,
            () = interrupted(tokio::signal::ctrl_c()) => {
                progress.finish();
                bail!("interrupted while extracting '{spec}'");
            }
        }
    };

    write_summary(&mut host.output(), &data, use_colors).context("writing the extraction summary")?;

    let report = generate_text(&data, Utc::now());
    writeln!(host.output(), "\n{report}").context("writing the report")?;

    let output_dir = cli
        .output
        .or(settings.output_dir)
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_DIR));
    let outcome = OutputWriter::new(output_dir).save(&data, &report, &spec);

    {
        let mut out = host.output();
        writeln!(out, "Results saved to '{}':", outcome.directory)?;
        for path in &outcome.written {
            writeln!(out, "   {path}")?;
        }
        for warning in &outcome.warnings {
            writeln!(out, "   warning: {warning}")?;
        }
        writeln!(out)?;
    }

    write_insights(&mut host.output(), &data, use_colors).context("writing insights")?;

    Ok(())
}
