//! unocr CLI - OCR reading-order reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unocr::{process_page, process_volume, write_volume, PageStatus, ParseOptions};

#[derive(Parser)]
#[command(name = "unocr")]
#[command(version)]
#[command(about = "Reconstruct reading order and spacing from OCR output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct a single page and print it to stdout
    Page {
        /// Input page file (structured XML or glyph JSON, optionally gzip)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Emit the structured page result as JSON instead of plain text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Reconstruct a volume directory into one text file
    #[command(alias = "vol")]
    Volume {
        /// Input directory containing one file per page
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output text file (defaults to "<volume-id>.txt")
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Reconstruct a numeric range of volumes in one run
    Batch {
        /// Root directory containing one subdirectory per volume
        #[arg(value_name = "ROOT")]
        input_root: PathBuf,

        /// Output directory for volume text files
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Volume identifier prefix (e.g. "PI2KG210")
        #[arg(long)]
        prefix: String,

        /// First numeric suffix, inclusive
        #[arg(long)]
        start: u32,

        /// Last numeric suffix, inclusive
        #[arg(long)]
        end: u32,

        #[command(flatten)]
        tuning: Tuning,
    },
}

#[derive(Args)]
struct Tuning {
    /// Vertical bucket size for the structured-XML path, in page pixels
    #[arg(long, default_value = "70")]
    bucket_size: f32,

    /// Average-height divisor for the glyph-path break threshold
    #[arg(long, default_value = "10")]
    divisor: f32,

    /// Minimum fragment length (exclusive) kept on the structured path
    #[arg(long, default_value = "5")]
    min_fragment_len: usize,

    /// Skip space restoration on the glyph path
    #[arg(long)]
    no_spacing: bool,

    /// Process pages sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,
}

impl From<&Tuning> for ParseOptions {
    fn from(tuning: &Tuning) -> Self {
        let mut options = ParseOptions::new()
            .with_bucket_size(tuning.bucket_size)
            .with_threshold_divisor(tuning.divisor)
            .with_min_fragment_len(tuning.min_fragment_len);
        if tuning.no_spacing {
            options = options.without_spacing();
        }
        if tuning.sequential {
            options = options.sequential();
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Page {
            input,
            json,
            tuning,
        } => cmd_page(&input, json, &tuning),
        Commands::Volume {
            input,
            output,
            tuning,
        } => cmd_volume(&input, output.as_deref(), &tuning),
        Commands::Batch {
            input_root,
            output,
            prefix,
            start,
            end,
            tuning,
        } => cmd_batch(&input_root, &output, &prefix, start, end, &tuning),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_page(input: &Path, json: bool, tuning: &Tuning) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::from(tuning);
    let page = process_page(input, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", page.text);
        if page.status != PageStatus::Ok {
            eprintln!("{} page status: {:?}", "warning:".yellow(), page.status);
        }
    }
    Ok(())
}

fn cmd_volume(
    input: &Path,
    output: Option<&Path>,
    tuning: &Tuning,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::from(tuning);
    let volume = process_volume(input, &options)?;

    let output_path = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        PathBuf::from(format!("{}.txt", volume.id))
    });
    write_volume(&volume, &output_path)?;

    report_volume(&volume);
    println!(
        "{} {}",
        "Output:".green().bold(),
        output_path.display()
    );
    Ok(())
}

fn cmd_batch(
    input_root: &Path,
    output: &Path,
    prefix: &str,
    start: u32,
    end: u32,
    tuning: &Tuning,
) -> Result<(), Box<dyn std::error::Error>> {
    if end < start {
        return Err(format!("invalid range: {start}..={end}").into());
    }
    let options = ParseOptions::from(tuning);
    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(u64::from(end - start + 1));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut written = 0;
    for n in start..=end {
        let id = format!("{prefix}{n}");
        pb.set_message(id.clone());
        let input_dir = input_root.join(&id);
        if !input_dir.is_dir() {
            pb.println(format!("{} {id}: input directory not found", "skip".yellow()));
            pb.inc(1);
            continue;
        }
        let volume = process_volume(&input_dir, &options)?;
        write_volume(&volume, output.join(format!("{id}.txt")))?;
        written += 1;
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!(
        "\n{} {} volume(s) written to {}",
        "Done:".green().bold(),
        written,
        output.display()
    );
    Ok(())
}

fn report_volume(volume: &unocr::Volume) {
    let ok = count_status(volume, PageStatus::Ok);
    let empty = count_status(volume, PageStatus::Empty);
    let malformed = count_status(volume, PageStatus::Malformed);

    println!(
        "{} {} ({} pages: {} ok, {} empty, {} malformed)",
        "Volume:".green().bold(),
        volume.id,
        volume.page_count(),
        ok,
        empty,
        malformed
    );
    if malformed > 0 {
        for page in &volume.pages {
            if page.status == PageStatus::Malformed {
                println!("  {} {}", "malformed:".yellow(), page.id);
            }
        }
    }
}

fn count_status(volume: &unocr::Volume, status: PageStatus) -> usize {
    volume.pages.iter().filter(|p| p.status == status).count()
}
