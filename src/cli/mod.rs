use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::report::{render, render_daily_breakdown, render_heatmap};
use crate::render::{Palette, RenderContext, RenderOutput, Role, Theme};
use crate::services::range::{days_heading, range_heading};
use crate::services::{ApiClient, ApiConfig, StatsRange};
use crate::types::{Report, Result};

/// Columns assumed when stdout is not a terminal
const FALLBACK_COLUMNS: u16 = 9999;

/// Colorful terminal stats for WakaTime and Wakapi
#[derive(Parser, Debug)]
#[command(name = "wakastat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Range of data to fetch (today/7d/30d/6m/1y/all)
    #[arg(short, long, default_value_t = StatsRange::Last7Days)]
    range: StatsRange,

    /// Number of days to fetch data for (overrides --range)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    days: Option<u32>,

    /// Display full statistics
    #[arg(short, long)]
    full: bool,

    /// Display daily breakdown
    #[arg(short = 'D', long)]
    daily: bool,

    /// Display heatmap of daily activity
    #[arg(short = 'H', long)]
    heatmap: bool,

    /// Your WakaTime/Wakapi API key (overrides config)
    #[arg(short = 'k', long, value_name = "KEY")]
    api_key: Option<String>,

    /// Disable colored output
    #[arg(short, long)]
    no_colors: bool,

    /// Print the raw response as JSON
    #[arg(short, long)]
    json: bool,

    /// Config file (default: ~/.wakatime.cfg)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log requests and layout decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Fetch, render and print. Errors are returned for `main` to report.
    pub fn run(self, palette: &Palette) -> anyhow::Result<()> {
        if self.verbose || std::env::var_os("RUST_LOG").is_some() {
            init_logging(self.verbose)?;
        }

        self.execute(palette)?;
        Ok(())
    }

    fn execute(&self, palette: &Palette) -> Result<()> {
        let config = ApiConfig::load(self.config.as_deref(), self.api_key.as_deref())?;
        let client = ApiClient::new(config)?;
        let ctx = RenderContext::new(*palette, terminal_columns());
        let mut out = std::io::stdout().lock();

        let output = if self.uses_summaries() {
            let (days, heading) = self.summary_request()?;
            let summary = client.fetch_summaries(days)?;
            if self.json {
                return write_json(&mut out, &summary);
            }

            if self.daily {
                render_daily_breakdown(&summary.data, &heading, &ctx)
            } else if self.heatmap {
                render_heatmap(&summary.data, &heading, &ctx)
            } else {
                render(&Report::Days(summary), self.full, &heading, &ctx)
            }
        } else {
            let response = client.fetch_stats(self.range)?;
            if self.json {
                return write_json(&mut out, &response);
            }

            let heading = if response.data.range.is_empty() {
                self.range.label().to_string()
            } else {
                range_heading(&response.data.range)
            };
            render(&Report::Range(response.data), self.full, &heading, &ctx)
        };

        match output {
            RenderOutput::Lines(lines) => write_lines(&mut out, &lines)?,
            RenderOutput::Empty(warning) => {
                eprintln!("{}", palette.paint(Role::Warning, &warning));
            }
        }
        Ok(())
    }

    /// Per-day endpoint for custom spans and the daily views
    fn uses_summaries(&self) -> bool {
        self.days.is_some() || self.daily || self.heatmap
    }

    /// Day count and heading for the per-day endpoint
    fn summary_request(&self) -> Result<(u32, String)> {
        match self.days {
            Some(days) => Ok((days, days_heading(days))),
            None => Ok((self.range.days()?, self.range.label().to_string())),
        }
    }

    /// Styling for this run, from the flags, environment and stdout
    pub fn palette(&self) -> Palette {
        let enabled = colors_enabled(
            self.no_colors,
            std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()),
            std::io::stdout().is_terminal(),
        );
        if enabled {
            Palette::colored(Theme::detect())
        } else {
            Palette::plain()
        }
    }
}

/// `--no-colors` and `NO_COLOR` always win; `FORCE_COLOR` overrides the tty check
fn colors_enabled(no_colors_flag: bool, no_color_env: bool, force_env: bool, is_tty: bool) -> bool {
    if no_colors_flag || no_color_env {
        return false;
    }
    force_env || is_tty
}

fn terminal_columns() -> u16 {
    if !std::io::stdout().is_terminal() {
        return FALLBACK_COLUMNS;
    }
    match crossterm::terminal::size() {
        Ok((columns, _)) => columns,
        Err(e) => {
            debug!(error = %e, "terminal size unavailable");
            FALLBACK_COLUMNS
        }
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// stderr subscriber; `--verbose` forces debug for this crate, otherwise
/// `RUST_LOG` decides
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let crate_level = format!("{}=debug", env!("CARGO_PKG_NAME").replace('-', "_"));
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !verbose => EnvFilter::new(directives),
        _ => EnvFilter::new(crate_level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
