use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

use gradle_mend::gradle;
use gradle_mend::patch::{PatchOutcome, RewriteOutcome, SubstringPatch};
use gradle_mend::scan::{char_window, scan_file, write_numbered_excerpt};
use gradle_mend::utils::read_file_to_string;

#[derive(Debug, Parser)]
#[command(
    name = "gradle-mend",
    version,
    about = "One-shot repair tools for a broken signingConfigs block in build.gradle"
)]
struct Cli {
    /// Build script to inspect or patch.
    #[arg(long, global = true, default_value = gradle::BUILD_GRADLE_PATH)]
    file: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the line numbers of block-opening lines.
    Scan,
    /// Dump a numbered line-range excerpt to a diagnostic file.
    Excerpt {
        /// Where to write the excerpt.
        #[arg(long, default_value = gradle::STRUCTURE_PATH)]
        out: PathBuf,
        /// First line of the excerpt (1-based, inclusive).
        #[arg(long, default_value_t = gradle::EXCERPT_FIRST_LINE)]
        first: usize,
        /// Last line of the excerpt (1-based, inclusive).
        #[arg(long, default_value_t = gradle::EXCERPT_LAST_LINE)]
        last: usize,
    },
    /// Replace the whole malformed signingConfigs body.
    Fix,
    /// Close the debug signing config right before `release {`.
    FixSeam,
    /// Rebuild signingConfigs and buildTypes between the markers.
    Rewrite,
}

fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "gradle_mend=info");
    }

    let cli = Cli::parse();
    gradle_mend::init_logging()?;

    info!("gradle-mend v{}", gradle_mend::version());
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Command::Scan => {
            for hit in scan_file(&cli.file, gradle::BLOCK_KEYWORDS)? {
                println!("{}: {}", hit.line_number, hit.text);
            }
        }
        Command::Excerpt { out, first, last } => {
            let written = write_numbered_excerpt(&cli.file, &out, first, last)?;
            println!(
                "Wrote {} numbered lines from {} to {}",
                written,
                cli.file.display(),
                out.display()
            );
        }
        Command::Fix => {
            run_patch(&gradle::signing_block_patch(), &cli.file, true)?;
        }
        Command::FixSeam => {
            run_patch(&gradle::seam_patch(), &cli.file, false)?;
        }
        Command::Rewrite => match gradle::signing_rewrite().rewrite_file(&cli.file)? {
            RewriteOutcome::Applied { .. } => {
                println!("Successfully rewrote signingConfigs and buildTypes");
            }
            RewriteOutcome::MarkersMissing { start, end } => {
                println!(
                    "Could not find rewrite markers: start {}, end {}",
                    describe_marker(start),
                    describe_marker(end)
                );
            }
        },
    }

    Ok(())
}

fn run_patch(patch: &SubstringPatch, file: &Path, dump_on_miss: bool) -> Result<()> {
    match patch.patch_file(file)? {
        PatchOutcome::Applied { candidate: 0, .. } => {
            println!("Successfully fixed {}", file.display());
        }
        PatchOutcome::Applied { candidate, .. } => {
            println!(
                "Successfully fixed {} (variant {})",
                file.display(),
                candidate + 1
            );
        }
        PatchOutcome::NotFound if dump_on_miss => {
            println!("Could not find the exact bad block to replace. Dumping content for debugging:");
            let content = read_file_to_string(file)?;
            println!(
                "{}",
                char_window(&content, gradle::DUMP_WINDOW_START, gradle::DUMP_WINDOW_LEN)
            );
        }
        PatchOutcome::NotFound => {
            println!("Could not find the pattern to replace.");
        }
    }
    Ok(())
}

fn describe_marker(found: Option<usize>) -> String {
    match found {
        Some(line) => format!("at line {}", line),
        None => "not found".to_string(),
    }
}
