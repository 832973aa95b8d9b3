// File: crates/dotplan-cli/src/main.rs
// Summary: CLI that lays out the planner spreads and writes them as print-ready PDFs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use dotplan_core::render::render_page_to_png;
use dotplan_core::{spreads, theme, Document, FontBook, Layout, PageGeometry};
use flexi_logger::Logger;
use log::{info, warn};

#[derive(Parser)]
#[command(name = "dotplan", about = "Dotted-grid bullet journal page generator", version)]
struct Cli {
    #[arg(help = "Directory the PDFs are written to.", long, default_value = "target/out")]
    out_dir: PathBuf,

    #[arg(help = "Directory holding the Merienda TTF files.", long, default_value = "Merienda/static")]
    font_dir: PathBuf,

    #[arg(help = "Color theme (classic, faint, mono).", long, default_value = "classic")]
    theme: String,

    #[arg(help = "Log level when RUST_LOG is unset.", long, default_value = "info")]
    log_level: String,

    #[arg(help = "Also write this page (1-based) of each document as a PNG preview.", long)]
    preview_page: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    #[command(about = "Book and movie tracker pages")]
    Books {
        #[arg(long)]
        year: Option<i32>,
    },

    #[command(about = "Month spread: cover, tasks, timeline layout")]
    Month {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: u32,
    },

    #[command(about = "Year spread: cover and quarterly calendars")]
    Year {
        #[arg(long)]
        year: Option<i32>,
    },

    #[command(about = "Year spread, all twelve month spreads and the tracker in one PDF")]
    All {
        #[arg(long)]
        year: Option<i32>,
    },
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_env_or_str(&cli.log_level)
        .context("invalid log level")?
        .start()
        .context("starting logger")?;

    let mut layout = Layout::from_geometry(PageGeometry::a5_journal());
    match theme::find(&cli.theme) {
        Some(t) => layout.style.theme = t,
        None => warn!("unknown theme '{}'; using {}", cli.theme, layout.style.theme.name),
    }

    if !cli.font_dir.is_dir() {
        warn!("font directory {} not found; using system fonts", cli.font_dir.display());
    }
    let fonts = FontBook::load(Some(cli.font_dir.as_path()), &layout.style);

    let docs: Vec<Document> = match cli.command {
        Commands::Books { year } => vec![spreads::books_and_movies(year.unwrap_or_else(current_year))],
        Commands::Month { year, month } => vec![spreads::month_spread(year.unwrap_or_else(current_year), month)?],
        Commands::Year { year } => vec![spreads::year_spread(year.unwrap_or_else(current_year))],
        Commands::All { year } => vec![spreads::full_year(year.unwrap_or_else(current_year))?],
    };

    for doc in &docs {
        let out = cli.out_dir.join(format!("bullet_journal_{}.pdf", doc.name));
        info!("rendering '{}' ({} pages)", doc.name, doc.len());
        doc.render_to_pdf(&layout, &fonts, &out)?;
        println!("Wrote {}", out.display());

        if let Some(n) = cli.preview_page {
            let page = doc
                .pages
                .get(n.saturating_sub(1))
                .with_context(|| format!("document '{}' has no page {n}", doc.name))?;
            let png = out.with_extension(format!("p{n}.png"));
            render_page_to_png(page, &layout, &fonts, 2.0, &png)?;
            println!("Wrote {}", png.display());
        }
    }
    Ok(())
}
