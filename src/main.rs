mod collectors;
mod config;
mod models;
mod report;
mod ui;
mod util;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use ui::theme::{Theme, ThemeVariant};

#[derive(Parser, Debug)]
#[command(name = "zfsstat", about = "Quota, usage and availability of ZFS datasets", version)]
struct Cli {
    /// Print a JSON snapshot instead of tables
    #[arg(long)]
    json: bool,

    /// Read captured `zfs get -Hp` output from a file ("-" for stdin) instead of running zfs
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// zfs binary to run (overrides config)
    #[arg(long, value_name = "PATH")]
    zfs: Option<String>,

    /// Color theme: default, dracula, gruvbox, nord (overrides config)
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "zfsstat", &mut io::stdout());
        return Ok(());
    }

    let cfg = config::Config::load();
    if cli.config {
        return run_print_config(&cfg);
    }

    let lines = match &cli.input {
        Some(path) => collectors::zfs::read_lines_from(path)?,
        None => {
            let zfs_bin = cli.zfs.as_deref().unwrap_or(&cfg.general.zfs_bin);
            collectors::zfs::read_zfs_lines(zfs_bin)?
        }
    };
    let datasets = collectors::zfs::parse_zfs_lines(&lines);
    if datasets.is_empty() {
        warn!("no ZFS datasets found");
    }
    let details  = report::detail_rows(&datasets);
    let summary  = report::summary_rows(&datasets, &cfg.summary.groups);

    if cli.json {
        let snapshot = report::snapshot_json(&details, &summary);
        return write_json(&mut io::stdout().lock(), &snapshot)
            .context("failed to write JSON snapshot");
    }

    let theme_name = cli.theme.as_deref().unwrap_or(&cfg.general.theme);
    let theme = Theme::for_variant(ThemeVariant::from_name(theme_name));
    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    let mut out = stdout.lock();
    ui::print::print_tables(&mut out, &details, &summary, &theme, color)
        .context("failed to write tables")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_print_config(cfg: &config::Config) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    write_config(&mut io::stdout().lock(), &path, cfg).context("failed to write config")
}

fn write_json<W: Write>(out: &mut W, snapshot: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, snapshot)?;
    writeln!(out)?;
    out.flush()
}

fn write_config<W: Write>(out: &mut W, path: &str, cfg: &config::Config) -> io::Result<()> {
    writeln!(out, "Config: {}", path)?;
    writeln!(out)?;
    writeln!(out, "[general]")?;
    writeln!(out, "  zfs_bin = {}", cfg.general.zfs_bin)?;
    writeln!(out, "  theme   = {}", cfg.general.theme)?;
    writeln!(out)?;
    writeln!(out, "[summary]")?;
    for g in &cfg.summary.groups {
        writeln!(out, "  group: {} ← {}", g.label, g.dataset)?;
    }
    out.flush()
}
