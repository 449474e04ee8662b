mod error;
mod output;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use navtree::{ElementTree, INDEX_PAGE, NavData, RendererConfig, TreeRenderer};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;

/// Render a generated documentation navigation tree in the terminal.
#[derive(Debug, Parser)]
#[command(name = "navtree", version)]
struct Args {
    /// Navigation data: a JSON array or a generated `navtree.js` script.
    data: PathBuf,

    /// Page whose breadcrumb path is opened and selected.
    #[arg(short, long, default_value = INDEX_PAGE)]
    target: String,

    /// Prefix joining the current page to the documentation root.
    #[arg(long, default_value = "")]
    relpath: String,

    /// Page selected when the target is not in the table.
    #[arg(long, default_value = INDEX_PAGE)]
    fallback: String,

    /// Rows to show. Defaults to the terminal height.
    #[arg(long)]
    height: Option<u16>,

    /// Print link targets after each label.
    #[arg(long)]
    links: bool,

    /// Write debug logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    if let Some(path) = &args.log_file {
        let log_file = File::create(path).map_err(|source| CliError::LogFile {
            path: path.clone(),
            source,
        })?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    }

    let data = NavData::from_path(&args.data)?;
    let height = args.height.unwrap_or_else(output::terminal_height);
    let config = RendererConfig::default()
        .with_relpath(args.relpath)
        .with_fallback_page(args.fallback);

    let mut sink = ElementTree::new(height);
    let host = sink.root();
    let mut tree = TreeRenderer::build_root(&mut sink, data, host, config);

    // Nothing to wait for: the element tree is ready as soon as it is built.
    let selected = tree
        .initialize_and_center(&mut sink, &args.target, std::future::ready(()))
        .await;
    match selected.and_then(|id| tree.node(id)) {
        Some(node) => log::info!("Selected {:?} for {:?}", node.label(), args.target),
        None => log::info!("No row selected for {:?}", args.target),
    }

    output::print(&sink, args.links)?;
    Ok(())
}
