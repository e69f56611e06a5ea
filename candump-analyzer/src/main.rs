//! # candump analyzer
//!
//! Reads candump capture lines from standard input and prints the CANopen
//! interpretation of every frame next to the raw data, using a device EDS
//! file and a bus configuration for PDO decoding.
//!
//! ```sh
//! candump can0 | candump-analyzer --eds cia402_slave.eds --bus bus.yml
//! ```

mod config;
mod format;
mod line;
mod logging;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use canopen_decode::{DecodeEngine, ObjectDictionary, PdoMappingTable};
use config::AppConfig;
use format::Formatter;
use line::LineParser;
use logging::FrameLogger;

/// Decode candump output into CANopen protocol events.
#[derive(Parser)]
#[command(name = "candump-analyzer")]
#[command(about = "Decode candump output into CANopen protocol events", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Device EDS file (object dictionary)
    #[arg(long)]
    eds: Option<PathBuf>,

    /// Bus configuration YAML (PDO mappings)
    #[arg(long)]
    bus: Option<PathBuf>,

    /// Node context key inside the bus configuration
    #[arg(long)]
    node: Option<String>,

    /// Directory for CSV session logs (enables logging)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let app_config = AppConfig::load();

    let eds_path = cli
        .eds
        .or_else(|| app_config.eds_file_path.as_ref().map(PathBuf::from))
        .ok_or("no EDS file given (use --eds or the config file)")?;
    let bus_path = cli
        .bus
        .or_else(|| app_config.bus_file_path.as_ref().map(PathBuf::from))
        .ok_or("no bus configuration given (use --bus or the config file)")?;
    let node_context = cli.node.unwrap_or_else(|| app_config.node_context.clone());

    // Fail fast: both documents must load before the first frame is read.
    let dictionary = ObjectDictionary::from_file(&eds_path)?;
    let mappings = PdoMappingTable::from_file(&bus_path, &node_context)?;
    let engine = DecodeEngine::new(dictionary, mappings);

    let log_directory = cli.log_dir.or_else(|| {
        if app_config.enable_logging {
            app_config.get_log_directory()
        } else {
            None
        }
    });
    let mut logger = match log_directory {
        Some(dir) => {
            let logger = FrameLogger::create(&dir)?;
            if let Some(path) = logger.file_path() {
                eprintln!("Logging decoded frames to {:?}", path);
            }
            logger
        }
        None => FrameLogger::disabled(),
    };

    let formatter = Formatter::new(!cli.no_color);
    println!("{}", formatter.banner());

    let parser = LineParser::new()?;
    let stdin = io::stdin();
    for input_line in stdin.lock().lines() {
        let input_line = input_line?;
        let trimmed = input_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parser.parse(trimmed) {
            Some(frame) => {
                // Unclassified frames render with an empty interpretation
                let interpretation = engine
                    .decode(&frame)
                    .map(|message| message.to_string())
                    .unwrap_or_default();
                println!("{}", formatter.frame(&frame, &interpretation));
                logger.log_frame(&frame, &interpretation);
            }
            None => println!("{}", formatter.unparsed_line(trimmed)),
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
