use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use mockup_batch::config::{self, CliOverrides};
use mockup_batch::imaging::RustBackend;
use mockup_batch::process::{self, BatchRunner};
use mockup_batch::validate::ImageValidator;
use mockup_batch::{logging, output, signal};
use std::path::PathBuf;
use std::process::ExitCode;

/// Flags for a batch run (the default action).
#[derive(clap::Args, Clone)]
struct RunArgs {
    /// Directory containing the source images
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory [default: ./output]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template name: default, mobile, desktop, tablet [default: default]
    #[arg(short, long)]
    template: Option<String>,

    /// Output format: png, jpg, jpeg, webp, gif, avif [default: png]
    #[arg(short, long)]
    format: Option<String>,

    /// Encoding quality, 1-100 [default: 90]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: Option<u32>,

    /// Config file [default: ./mockup.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level [default: info]
    #[arg(long, ignore_case = true, value_parser = PossibleValuesParser::new(config::LOG_LEVELS))]
    log_level: Option<String>,

    /// Also write log events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Write the run report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl RunArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output_dir: self.output.clone(),
            template: self.template.clone(),
            format: self.format.clone(),
            quality: self.quality,
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }
}

#[derive(clap::Args, Clone)]
struct CheckArgs {
    /// Directory containing the source images
    #[arg(short, long)]
    input: PathBuf,

    /// Config file providing validation limits [default: ./mockup.toml if present]
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "mockup-batch")]
#[command(about = "Batch-convert a directory of images into framed presentation mockups")]
#[command(long_about = "\
Batch-convert a directory of images into framed presentation mockups

Every .jpg, .jpeg, .png, .webp and .gif file in the input directory is fitted
inside the template's content area (never enlarged), centered on a white
canvas of the template's exact size, and written as mockup_<name>.<format>.

Templates:

  default   1200x800   padding 50
  mobile     375x812   padding 20
  desktop   1920x1080  padding 100
  tablet     768x1024  padding 40

Files failing validation (format, size over 50MB, smaller than 100x100) are
skipped and counted as errors. One bad file never stops the batch.

Run 'mockup-batch gen-config' to generate a documented mockup.toml.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every image in a directory without writing anything
    Check(CheckArgs),
    /// List the available templates
    Templates,
    /// Print a stock mockup.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Some(Command::Check(args)) => check(&args),
        Some(Command::Templates) => {
            output::print_templates();
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
            Ok(ExitCode::SUCCESS)
        }
        None => run_batch(&cli.run),
    }
}

fn run_batch(args: &RunArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(args.config.as_deref(), &cwd, &args.overrides())?;
    let run_config = cfg.run_config(args.input.as_deref())?;

    let _guard = logging::setup_logging(&cfg.logging)?;
    for warning in cfg.startup_warnings() {
        tracing::warn!(%warning, "Configuration warning");
        eprintln!("Warning: {warning}");
    }
    let cancel = signal::setup_shutdown_signal()?;

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_run_event(&event);
        }
    });
    let result = BatchRunner::new(run_config.batch_options(), RustBackend::new())
        .with_events(tx)
        .with_cancellation(cancel)
        .run();
    printer.join().map_err(|_| "progress printer panicked")?;

    let report = result?;
    output::print_summary(&report);
    if let Some(path) = &args.report {
        report.write_json(path)?;
        println!("Report: {}", path.display());
    }

    Ok(if report.cancelled {
        ExitCode::from(130)
    } else {
        ExitCode::SUCCESS
    })
}

fn check(args: &CheckArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(args.config.as_deref(), &cwd, &CliOverrides::default())?;
    let validator = ImageValidator::new(cfg.validation.validator_config());

    println!("==> Checking {}", args.input.display());
    let verdicts = process::check_directory(&RustBackend::new(), &validator, &args.input)?;
    output::print_check(&verdicts);

    Ok(if verdicts.iter().all(|v| v.verdict.is_valid()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
