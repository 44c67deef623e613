//! huffpack CLI - compress, decompress and inspect files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// huffpack: static Huffman file compression
#[derive(Parser)]
#[command(name = "huffpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress INPUT into OUTPUT
    Compress(PathArgs),

    /// Decompress INPUT into OUTPUT
    Decompress(PathArgs),

    /// Describe a compressed file without decoding it
    Inspect(InspectArgs),
}

#[derive(Args)]
struct PathArgs {
    /// File to read.
    input: PathBuf,

    /// File to write.
    output: PathBuf,
}

#[derive(Args)]
struct InspectArgs {
    /// Compressed file to read.
    input: PathBuf,

    /// Also print the tree and every symbol's code.
    #[arg(long)]
    codes: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and go to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Compress(args) => compress(args),
        Commands::Decompress(args) => decompress(args),
        Commands::Inspect(args) => inspect(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot open input {}", path.display()))
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("cannot write output {}", path.display()))
}

fn compress(args: &PathArgs) -> Result<()> {
    let data = read_input(&args.input)?;
    let packed = huffpack::compress(&data)
        .with_context(|| format!("cannot compress {}", args.input.display()))?;
    write_output(&args.output, &packed)?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        bytes_in = data.len(),
        bytes_out = packed.len(),
        "compressed"
    );
    println!(
        "Compressed {} ({} bytes) -> {} ({} bytes)",
        args.input.display(),
        data.len(),
        args.output.display(),
        packed.len()
    );
    Ok(())
}

fn decompress(args: &PathArgs) -> Result<()> {
    let packed = read_input(&args.input)?;
    let data = huffpack::decompress(&packed)
        .with_context(|| format!("cannot decompress {}", args.input.display()))?;
    write_output(&args.output, &data)?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        bytes_in = packed.len(),
        bytes_out = data.len(),
        "decompressed"
    );
    println!(
        "Decompressed {} ({} bytes) -> {} ({} bytes)",
        args.input.display(),
        packed.len(),
        args.output.display(),
        data.len()
    );
    Ok(())
}

fn inspect(args: &InspectArgs) -> Result<()> {
    let packed = read_input(&args.input)?;
    let summary = huffpack::inspect(&packed)
        .with_context(|| format!("cannot read header of {}", args.input.display()))?;

    println!("file:           {}", args.input.display());
    println!("symbols:        {}", summary.table.len());
    println!("total length:   {}", summary.table.total());
    println!("header bytes:   {}", summary.header_bytes);
    println!(
        "payload bytes:  {} ({} bits required{})",
        summary.payload_bytes,
        summary.required_bits(),
        if summary.payload_complete() {
            ""
        } else {
            ", TRUNCATED"
        }
    );
    println!("tree height:    {}", summary.tree.height());
    println!("tree nodes:     {}", summary.tree.node_count());
    println!("max code bits:  {}", summary.codes.max_len());

    if args.codes {
        println!();
        print!("{}", summary.tree);
        println!();
        for (symbol, code) in summary.codes.iter() {
            let bits: String = code.iter().map(|b| if *b { '1' } else { '0' }).collect();
            let shown = if symbol.is_ascii_graphic() {
                format!("'{}'", symbol as char)
            } else {
                "   ".to_string()
            };
            println!(
                "{shown} {symbol:#04x} {count:>12} {bits}",
                count = summary.table.get(symbol)
            );
        }
    }
    Ok(())
}
