//! hwp2hwpx CLI - HWP to HWPX conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use hwp2hwpx::{DiagnosticKind, Diagnostics, Hwp2Hwpx, Hwp2HwpxResult, JsonFormat};

#[derive(Parser)]
#[command(name = "hwp2hwpx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert decoded HWP documents to HWPX packages", long_about = None)]
struct Cli {
    /// Input document (decoded HWP record tree as JSON)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output HWPX file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Fail on the first recoverable problem
    #[arg(long, env = "HWP2HWPX_STRICT")]
    strict: bool,

    /// Translate sections on a single thread
    #[arg(long)]
    sequential: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to HWPX
    Convert {
        /// Input document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (input name with .hwpx if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Fail on the first recoverable problem
        #[arg(long, env = "HWP2HWPX_STRICT")]
        strict: bool,

        /// Translate sections on a single thread
        #[arg(long)]
        sequential: bool,

        /// Store XML parts uncompressed
        #[arg(long)]
        no_compress: bool,

        /// Keep styles no paragraph uses
        #[arg(long)]
        keep_unused_styles: bool,
    },

    /// Dump the translated document model as JSON
    Json {
        /// Input document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information and conversion diagnostics
    Info {
        /// Input document
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Flags shared by the default and `convert` invocations.
struct ConvertArgs {
    strict: bool,
    sequential: bool,
    compress: bool,
    keep_unused_styles: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            strict,
            sequential,
            no_compress,
            keep_unused_styles,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            ConvertArgs {
                strict,
                sequential,
                compress: !no_compress,
                keep_unused_styles,
            },
        ),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    ConvertArgs {
                        strict: cli.strict,
                        sequential: cli.sequential,
                        compress: true,
                        keep_unused_styles: false,
                    },
                )
            } else {
                println!("{}", "Usage: hwp2hwpx <INPUT> [OUTPUT]".yellow());
                println!("       hwp2hwpx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    args: ConvertArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("hwpx"));

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Converting...");
    let mut builder = Hwp2Hwpx::new()
        .with_stats()
        .with_compression(args.compress)
        .with_unused_styles(args.keep_unused_styles);
    if args.strict {
        builder = builder.strict();
    }
    if args.sequential {
        builder = builder.sequential();
    }
    log::debug!("converting {}", input.display());
    let result = builder.convert_file(input)?;
    pb.inc(1);

    pb.set_message("Writing package...");
    result.write_file(&output_path)?;
    pb.inc(1);
    pb.finish_with_message("Done!");

    print_diagnostics(&result.diagnostics);
    print_summary(&result);
    println!("{} {}", "Saved to".green(), output_path.display());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = Hwp2Hwpx::new().convert_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = hwp2hwpx::detect_format_from_path(input)?;
    let result = Hwp2Hwpx::new().with_stats().convert_file(input)?;
    let metadata = &result.document.metadata;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Source version".bold(), metadata.source_version);

    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref creator) = metadata.creator {
        println!("{}: {}", "Author".bold(), creator);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    print_summary(&result);
    print_diagnostics(&result.diagnostics);

    Ok(())
}

fn print_summary(result: &Hwp2HwpxResult) {
    let Some(stats) = &result.stats else {
        return;
    };
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Pictures".bold(), stats.picture_count);
    println!("{}: {}", "Objects".bold(), stats.object_count);
    println!("{}: {}", "Fields".bold(), stats.field_count);
    println!(
        "{}: {} char / {} para / {} style / {} border fill / {} font",
        "Definitions".bold(),
        stats.char_pr_count,
        stats.para_pr_count,
        stats.style_count,
        stats.border_fill_count,
        stats.font_count
    );
    println!(
        "{}: {} ({} deduplicated)",
        "Binary items".bold(),
        stats.bin_item_count,
        stats.deduplicated_resources
    );
    println!();
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }
    println!(
        "{} {} ({} dangling, {} unsupported, {} resource, {} structural)",
        diagnostics.len().to_string().yellow().bold(),
        "warnings".yellow(),
        diagnostics.count(DiagnosticKind::DanglingReference),
        diagnostics.count(DiagnosticKind::UnsupportedEntity),
        diagnostics.count(DiagnosticKind::ResourcePipeline),
        diagnostics.count(DiagnosticKind::StructuralIntegrity),
    );
    for diagnostic in diagnostics {
        println!("  {} {}", "-".dimmed(), diagnostic);
    }
    println!();
}

fn cmd_version() {
    println!("{} {}", "hwp2hwpx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HWP to HWPX conversion tool");
    println!();
    println!("License: MIT");
}
