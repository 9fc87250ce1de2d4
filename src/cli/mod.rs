pub mod types;
pub mod logging;

use clap::Parser;
use std::path::{Path, PathBuf};

use pagetoc::markdown::get_markdown_toc;
use pagetoc::toc::load_tokens;
use pagetoc::utils::fs::read_file;
use pagetoc::{get_toc, load_config, BoxResult, OutputFormat, TableOfContents, TocConfig};

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = execute(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn execute(cli: &types::Cli) -> BoxResult<()> {
    let mut config = load_config(PathBuf::from("."), cli.config.clone())?;
    if let Some(format) = cli.format {
        config.format = format;
    }

    let toc = match &cli.command {
        types::Commands::Markdown { input } => markdown_toc(input, &config)?,
        types::Commands::Tokens { input } => get_toc(&load_tokens(input)?),
    };

    print!("{}", render(&toc, &config)?);
    Ok(())
}

fn markdown_toc(input: &Path, config: &TocConfig) -> BoxResult<TableOfContents> {
    log::debug!("Reading markdown from {}", input.display());
    let markdown = read_file(input)?;
    Ok(get_toc(&get_markdown_toc(&markdown, config)))
}

/// Render a table of contents in the configured format
fn render(toc: &TableOfContents, config: &TocConfig) -> BoxResult<String> {
    let output = match config.format {
        OutputFormat::Text => toc.to_string(),
        OutputFormat::Json => format!("{}\n", toc.to_json()?),
        OutputFormat::Html => {
            let mut html = toc.to_html(config);
            if !html.is_empty() {
                html.push('\n');
            }
            html
        }
    };
    Ok(output)
}
