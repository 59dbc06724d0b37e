//! arkdata CLI
//!
//! Builds the merged Arknights data document and mirrors its images.

mod error;
mod spinner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use arkdata_catalog::{ArkDocument, OutputStore};
use arkdata_lib::Settings;
use arkdata_lib::settings::{resolve_root, settings_path};
use arkdata_media::{
    BatchReport, ConvertReport, ImageCategory, MISSING_IMAGE_ID, convert_category, ensure_layout,
    fetch_images,
};
use arkdata_tables::HttpTransport;

use crate::error::CliError;
use crate::spinner::stage_spinner;

#[derive(Parser)]
#[command(name = "arkdata")]
#[command(about = "Build merged Arknights game data and mirror its images", long_about = None)]
struct Cli {
    /// Base directory for output and images (defaults to current directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Rebuild even when upstream has not changed
    #[arg(long)]
    force: bool,

    /// Only build the data document
    #[arg(long)]
    skip_images: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load()?;
    log::debug!("Settings from {}", settings_path().display());
    let root = resolve_root(cli.root);
    let store = OutputStore::new(settings.output_dir_in(&root));
    let images_dir = settings.images_dir_in(&root);

    let transport =
        HttpTransport::with_timeout(Duration::from_secs(settings.request_timeout_secs))?;
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;

    rt.block_on(async {
        let pb = stage_spinner("Checking upstream data...", cli.verbose);
        let outcome = arkdata_lib::load_or_build(&transport, &store, cli.force).await;
        pb.finish_and_clear();
        let run = outcome?;

        print_document_summary(&run.document, run.rebuilt, &store);

        if cli.skip_images {
            return Ok(());
        }

        ensure_layout(&images_dir)?;
        for category in ImageCategory::all() {
            let ids = image_ids(&run.document, *category);
            let pb = stage_spinner(&format!("Downloading {category} images..."), cli.verbose);
            let outcome = fetch_images(
                &transport,
                *category,
                &ids,
                &images_dir,
                settings.download_concurrency,
            )
            .await;
            pb.finish_and_clear();
            print_batch_summary(*category, &outcome?);
        }

        for category in ImageCategory::all() {
            let pb = stage_spinner(&format!("Converting {category} images..."), cli.verbose);
            let outcome = convert_category(&images_dir, *category);
            pb.finish_and_clear();
            print_convert_summary(*category, &outcome?);
        }

        Ok::<(), CliError>(())
    })
}

fn image_ids(document: &ArkDocument, category: ImageCategory) -> Vec<String> {
    match category {
        ImageCategory::Operators => document.operator_ids(),
        ImageCategory::Items => document.item_icon_ids(),
        ImageCategory::Modules => document.module_icon_ids(),
        ImageCategory::Skills => document.skill_icon_ids(),
        ImageCategory::Other => vec![MISSING_IMAGE_ID.to_string()],
    }
}

fn print_document_summary(document: &ArkDocument, rebuilt: bool, store: &OutputStore) {
    let status = if rebuilt {
        "Rebuilt".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "Up to date".if_supports_color(Stdout, |t| t.cyan()).to_string()
    };
    println!(
        "{} {}: {} operators, {} items",
        status,
        store
            .document_path()
            .display()
            .if_supports_color(Stdout, |t| t.bold()),
        document.operators.len(),
        document.items.len(),
    );
    println!(
        "  {} {} / {} {}",
        "YoStar".if_supports_color(Stdout, |t| t.dimmed()),
        short_hash(&document.commit_hashes.yostar),
        "CN".if_supports_color(Stdout, |t| t.dimmed()),
        short_hash(&document.commit_hashes.cn),
    );
}

fn print_batch_summary(category: ImageCategory, report: &BatchReport) {
    println!(
        "  {:<10} {} downloaded, {} present",
        category.if_supports_color(Stdout, |t| t.bold()),
        report.downloaded.len(),
        report.skipped.len(),
    );
    for id in &report.failed {
        println!(
            "    {} no image for {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            id.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

fn print_convert_summary(category: ImageCategory, report: &ConvertReport) {
    println!(
        "  {:<10} {} converted, {} up to date",
        category.if_supports_color(Stdout, |t| t.bold()),
        report.converted,
        report.up_to_date,
    );
    for id in &report.failed {
        println!(
            "    {} could not convert {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red()),
            id,
        );
    }
}

fn short_hash(hash: &str) -> &str {
    hash.get(..10).unwrap_or(hash)
}
