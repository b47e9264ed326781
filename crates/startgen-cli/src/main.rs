//! CLI entry point for startgen.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. Resolution logic lives in `startgen-domain`.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use startgen_domain::model::{BuildRequest, ResolvedBuild};
use startgen_types::{
    PlatformVersion, ResolutionReport, ToolMeta, SCHEMA_RESOLUTION_V1,
};
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(
    name = "startgen",
    version,
    about = "Starter dependency resolution for generated projects"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the dependency set for a set of requested ids.
    Resolve {
        /// Logical dependency ids (e.g. session data-redis).
        #[arg(required = true)]
        ids: Vec<String>,

        /// Target platform version (e.g. 2.0.0.M3 or 1.5.4.RELEASE).
        #[arg(long)]
        platform_version: String,

        /// Catalog TOML merged over the builtin catalog.
        #[arg(long)]
        catalog: Option<Utf8PathBuf>,

        /// Where to write the JSON report (stdout when omitted).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Suppress the summary line on stderr.
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Resolve {
            ids,
            platform_version,
            catalog,
            report_out,
            quiet,
        } => cmd_resolve(ids, &platform_version, catalog, report_out, quiet),
    }
}

fn cmd_resolve(
    ids: Vec<String>,
    platform_version: &str,
    catalog_path: Option<Utf8PathBuf>,
    report_out: Option<Utf8PathBuf>,
    quiet: bool,
) -> anyhow::Result<()> {
    let version: PlatformVersion = platform_version
        .parse()
        .with_context(|| format!("parse platform version '{platform_version}'"))?;

    let catalog_file = match &catalog_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read catalog: {path}"))?;
            Some(startgen_catalog::parse_catalog_toml(&text).context("parse catalog")?)
        }
        None => None,
    };
    let catalog = startgen_catalog::resolve_catalog(catalog_file);

    let request = BuildRequest::new(ids, version);
    let build = startgen_domain::resolve(&request, &catalog).context("resolve dependencies")?;

    let report = build_report(&request, &build);
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;

    match &report_out {
        Some(path) => write_text_file(path, &json).context("write report json")?,
        None => println!("{json}"),
    }

    if !quiet {
        eprintln!(
            "startgen: resolved {} dependencies for platform {}",
            build.len(),
            request.platform_version
        );
    }

    Ok(())
}

fn build_report(request: &BuildRequest, build: &ResolvedBuild) -> ResolutionReport {
    ResolutionReport {
        schema: SCHEMA_RESOLUTION_V1.to_string(),
        tool: ToolMeta {
            name: "startgen".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        platform_version: request.platform_version.to_string(),
        requested: request.requested.iter().cloned().collect(),
        dependencies: build.dependencies.iter().cloned().collect(),
        dependency_count: build.len() as u32,
    }
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
