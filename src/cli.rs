// Command-line interface for Sensorpack.
//
// Subcommands run either encoder over a file or stdin, replay a request
// through the service adapter, or print build configuration.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use serde_json::json;

use crate::api::Service;
use crate::delta::{DEFAULT_SCALE, DeltaOptions, DifferenceEncoder, ELEMENT_WIDTH, SmoothSeries};
use crate::outcome::{CompressionOutcome, Compressor};
use crate::prefix::HuffmanEncoder;

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("input file: {}: {source}", .path.display())]
    Input { path: PathBuf, source: io::Error },
    #[error("read error: {0}")]
    Stdin(#[source] io::Error),
    #[error("output file exists, use -f to overwrite: {}", .0.display())]
    OutputExists(PathBuf),
    #[error("output file: {}: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },
}

// ---------------------------------------------------------------------------
// Value parsing
// ---------------------------------------------------------------------------

fn parse_shrink(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid factor '{s}': {e}"))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("factor must be within 0..=1, got {v}"));
    }
    Ok(v)
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Huffman and first-difference encoders for sensor payloads.
#[derive(Parser, Debug)]
#[command(
    name = "sensorpack",
    version,
    about = "Huffman and delta encoders for sensor payloads",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Huffman-encode an input stream.
    Huffman(IoArgs),
    /// Difference-encode a comma-delimited numeric stream.
    Delta(DeltaArgs),
    /// Run one request through the service adapter.
    Request(RequestArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Write the compressed bytes to this file.
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DeltaTuningArgs {
    /// Multiplier applied to parsed decimals before truncation.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: i32,

    /// Report literal sizes only (disable the smooth-series simulation).
    #[arg(long = "no-simulation")]
    no_simulation: bool,

    /// Series must be longer than this for the simulation to apply.
    #[arg(long = "smooth-min-len", default_value_t = SmoothSeries::default().min_len)]
    smooth_min_len: usize,

    /// Largest step (scaled units) still considered smooth.
    #[arg(long = "smooth-max-step", default_value_t = SmoothSeries::default().max_step)]
    smooth_max_step: u32,

    /// Factor applied to the reported size of smooth series (0..=1).
    #[arg(long = "smooth-shrink", value_parser = parse_shrink, default_value_t = SmoothSeries::default().shrink)]
    smooth_shrink: f64,
}

#[derive(Args, Debug)]
struct DeltaArgs {
    #[command(flatten)]
    io: IoArgs,

    #[command(flatten)]
    tuning: DeltaTuningArgs,
}

#[derive(Args, Debug)]
struct RequestArgs {
    /// HTTP method.
    #[arg(long, short = 'X', default_value = "POST")]
    method: String,

    /// Request path, e.g. /api/compress/huffman.
    #[arg(long, short = 'p')]
    path: String,

    /// Read the request body from this file.
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "body")]
    input: Option<PathBuf>,

    /// Request body (default: stdin unless --input is given).
    body: Option<String>,

    #[command(flatten)]
    tuning: DeltaTuningArgs,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Huffman,
    Delta,
    Request,
    Config,
}

#[derive(Debug)]
struct Options {
    command: Command,
    force: bool,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    delta: DeltaOptions,
    method: String,
    path: String,
    body: Option<String>,
}

fn delta_options(tuning: &DeltaTuningArgs) -> DeltaOptions {
    let smooth_series = (!tuning.no_simulation).then(|| SmoothSeries {
        min_len: tuning.smooth_min_len,
        max_step: tuning.smooth_max_step,
        shrink: tuning.smooth_shrink,
        ..SmoothSeries::default()
    });
    DeltaOptions {
        scale: tuning.scale,
        smooth_series,
    }
}

fn resolve_options(cli: Cli) -> Options {
    let base = Options {
        command: Command::Config,
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
        input_file: None,
        output_file: None,
        delta: DeltaOptions::default(),
        method: String::new(),
        path: String::new(),
        body: None,
    };

    match cli.command {
        Cmd::Huffman(io) => Options {
            command: Command::Huffman,
            input_file: io.input.or(io.input_pos),
            output_file: io.output,
            ..base
        },
        Cmd::Delta(args) => Options {
            command: Command::Delta,
            input_file: args.io.input.or(args.io.input_pos),
            output_file: args.io.output,
            delta: delta_options(&args.tuning),
            ..base
        },
        Cmd::Request(args) => Options {
            command: Command::Request,
            input_file: args.input,
            delta: delta_options(&args.tuning),
            method: args.method,
            path: args.path,
            body: args.body,
            ..base
        },
        Cmd::Config => base,
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("sensorpack".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, CliError> {
    let mut data = Vec::new();
    match path {
        Some(path) => {
            File::open(path)
                .and_then(|mut f| f.read_to_end(&mut data))
                .map_err(|source| CliError::Input {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        None => {
            io::stdin()
                .lock()
                .read_to_end(&mut data)
                .map_err(CliError::Stdin)?;
        }
    }
    Ok(data)
}

fn write_output(path: &Path, data: &[u8], force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::OutputExists(path.to_path_buf()));
    }
    let to_output_err = |source| CliError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_output_err)?;
    let mut writer = BufWriter::with_capacity(BUF_SIZE, file);
    writer.write_all(data).map_err(to_output_err)?;
    writer.flush().map_err(to_output_err)
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("sensorpack version {version} (Rust)");

    let parallel = cfg!(feature = "parallel") as u8;
    let smooth = SmoothSeries::default();

    eprintln!("PARALLEL={parallel}");
    eprintln!("DELTA_SCALE={DEFAULT_SCALE}");
    eprintln!("DELTA_ELEMENT_WIDTH={ELEMENT_WIDTH}");
    eprintln!("SMOOTH_MIN_LEN={}", smooth.min_len);
    eprintln!("SMOOTH_PROBE_END={}", smooth.probe_end);
    eprintln!("SMOOTH_MAX_STEP={}", smooth.max_step);
    eprintln!("SMOOTH_SHRINK={}", smooth.shrink);

    0
}

// ---------------------------------------------------------------------------
// Compress commands
// ---------------------------------------------------------------------------

fn report(opts: &Options, encoder: &str, outcome: &CompressionOutcome) {
    if !opts.quiet {
        let note = if outcome.simulated { " (simulated)" } else { "" };
        eprintln!(
            "sensorpack: {encoder}: original size: {}, compressed size: {}{note}, ratio: {:.2}%",
            outcome.original_size, outcome.compressed_size, outcome.ratio
        );
    }

    if opts.json_output {
        let json = json!({
            "command": encoder,
            "originalSize": outcome.original_size,
            "compressedSize": outcome.compressed_size,
            "compressionRatio": outcome.ratio,
            "simulated": outcome.simulated,
        });
        eprintln!("{json:#}");
    }
}

fn cmd_compress(opts: &Options, compressor: &dyn Compressor) -> i32 {
    let input = match read_input(opts.input_file.as_deref()) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("sensorpack: {e}");
            return 1;
        }
    };

    let outcome = compressor.compress(&input);

    if let Some(path) = &opts.output_file
        && let Err(e) = write_output(path, &outcome.data, opts.force)
    {
        eprintln!("sensorpack: {e}");
        return 1;
    }

    report(opts, compressor.name(), &outcome);
    0
}

// ---------------------------------------------------------------------------
// Request command
// ---------------------------------------------------------------------------

fn cmd_request(opts: &Options) -> i32 {
    let body = match &opts.body {
        Some(body) => body.clone().into_bytes(),
        None => match read_input(opts.input_file.as_deref()) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("sensorpack: {e}");
                return 1;
            }
        },
    };

    let service = Service::new(opts.delta.clone());
    let resp = service.handle(&opts.method, &opts.path, &body);

    if opts.verbose > 0 && !opts.quiet {
        eprintln!("sensorpack: {} {} -> {}", opts.method, opts.path, resp.status);
    }
    println!("{}", resp.body);

    if resp.is_success() { 0 } else { 1 }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    let filter = match opts.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match opts.command {
        Command::Huffman => cmd_compress(&opts, &HuffmanEncoder),
        Command::Delta => {
            cmd_compress(&opts, &DifferenceEncoder::with_options(opts.delta.clone()))
        }
        Command::Request => cmd_request(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
