//! CLI entry point for legacyscan.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup and exit codes.
//! All business logic lives in the `legacyscan-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use legacyscan_app::{
    ExplainOutput, MarkdownInput, ScanInput, ScanOutput, Unit, catalog_json, collect_units,
    format_catalog, parse_report_json, parse_units, resolve, run_catalog, run_explain,
    run_markdown, run_scan, serialize_report, serialize_units, verdict_exit_code,
};
use legacyscan_settings::Overrides;
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "legacyscan",
    version,
    about = "Find usages of deprecated ABAP objects in source units"
)]
struct Cli {
    /// Path to legacyscan config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "legacyscan.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|exhaustive).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override when the scan fails (never|ambiguous|any).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a JSON array of units and attach usage records to each.
    Scan {
        /// Units JSON file, or `-` for stdin.
        #[arg(long, short)]
        input: Utf8PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Scan every source file under a directory.
    ScanDir {
        #[arg(long)]
        root: Utf8PathBuf,

        /// File extensions to scan, comma separated.
        #[arg(long, value_delimiter = ',', default_value = "abap,txt")]
        ext: Vec<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Explain a matcher id or a catalog identifier.
    Explain {
        /// A matcher id (e.g. "usage.table_statement") or object name (e.g. "S066").
        identifier: String,
    },

    /// List the effective catalog of deprecated identifiers.
    Catalog {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Render markdown from scanned units.
    Md {
        /// Units JSON written by `scan` or `scan-dir`.
        #[arg(long)]
        results: Utf8PathBuf,

        /// Report JSON of the same scan; supplies verdict and profile.
        #[arg(long)]
        report: Option<Utf8PathBuf>,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Where to write the annotated units (if not specified, prints to stdout).
    #[arg(long, short)]
    output: Option<Utf8PathBuf>,

    /// Where to write the JSON report.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Where to write a Markdown summary.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.cmd {
        Commands::Scan { input, out } => {
            let result = read_input(input).and_then(|text| parse_units(&text));
            finish_scan(&cli, result, out)
        }
        Commands::ScanDir { root, ext, out } => {
            let result = collect_units(root, ext);
            finish_scan(&cli, result, out)
        }
        Commands::Explain { identifier } => cmd_explain(&cli, identifier),
        Commands::Catalog { json } => cmd_catalog(&cli, *json),
        Commands::Md {
            results,
            report,
            output,
        } => cmd_md(&cli, results, report.as_deref(), output.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        fail_on: cli.fail_on.clone(),
    }
}

/// Config text; a missing file is allowed (defaults apply).
fn load_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        debug!(path = %path, "no config file, using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn read_input(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read units from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read units: {}", path))
}

fn finish_scan(
    cli: &Cli,
    units: anyhow::Result<Vec<Unit>>,
    out: &OutputArgs,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let units = units?;
        let cfg_text = load_config(&cli.config)?;
        let output = run_scan(ScanInput {
            units,
            config_text: &cfg_text,
            overrides: overrides(cli),
        })?;
        write_artifacts(&output, out)?;
        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("legacyscan error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_artifacts(output: &ScanOutput, out: &OutputArgs) -> anyhow::Result<()> {
    let units = serialize_units(&output.units)?;
    match &out.output {
        Some(path) => write_bytes_file(path, &units).context("write units json")?,
        None => println!("{}", String::from_utf8_lossy(&units)),
    }

    if let Some(path) = &out.report_out {
        let data = serialize_report(&output.report)?;
        write_bytes_file(path, &data).context("write report json")?;
    }

    if let Some(path) = &out.markdown_out {
        let md = run_markdown(MarkdownInput {
            units: &output.units,
            resolved: &output.resolved_config,
            report: Some(&output.report),
        })?;
        write_bytes_file(path, md.as_bytes()).context("write markdown")?;
    }

    Ok(())
}

fn write_bytes_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn cmd_explain(cli: &Cli, identifier: &str) -> anyhow::Result<()> {
    let cfg_text = load_config(&cli.config)?;
    let catalog = run_catalog(&cfg_text, overrides(cli))?;

    match run_explain(identifier, &catalog) {
        ExplainOutput::Matcher(exp) => {
            print!("{}", legacyscan_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::Identifier(id) => {
            print!("{}", legacyscan_app::format_identifier(&id));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_matchers,
        } => {
            eprint!(
                "{}",
                legacyscan_app::format_not_found(&identifier, available_matchers)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_catalog(cli: &Cli, json: bool) -> anyhow::Result<()> {
    let cfg_text = load_config(&cli.config)?;
    let catalog = run_catalog(&cfg_text, overrides(cli))?;

    if json {
        let text =
            serde_json::to_string_pretty(&catalog_json(&catalog)).context("serialize catalog")?;
        println!("{}", text);
    } else {
        print!("{}", format_catalog(&catalog));
    }
    Ok(())
}

fn cmd_md(
    cli: &Cli,
    results: &Utf8Path,
    report: Option<&Utf8Path>,
    output: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let cfg_text = load_config(&cli.config)?;
    let resolved = resolve(&cfg_text, overrides(cli))?;

    let units_text =
        std::fs::read_to_string(results).with_context(|| format!("read results: {}", results))?;
    let units = parse_units(&units_text)?;

    let report = match report {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read report: {}", path))?;
            Some(parse_report_json(&text)?)
        }
        None => None,
    };

    let md = run_markdown(MarkdownInput {
        units: &units,
        resolved: &resolved,
        report: report.as_ref(),
    })?;

    if let Some(out_path) = output {
        write_bytes_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}
