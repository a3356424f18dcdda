// main.rs
//
// Writes the standard STL fixture set (two cubes and a pyramid) used by the
// 3D integration tests of downstream tooling.

use clap::Parser;
use std::path::PathBuf;
use stl_fixtures::fixtures::{self, DEFAULT_OUTPUT_DIR, GenerateOptions};
use stl_fixtures::io::stl::DEFAULT_HEADER;

/// Generate simple binary STL test files
#[derive(Parser, Debug)]
#[command(name = "stl-fixtures")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory the STL files are written to (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Text stored in the 80-byte STL header
    #[arg(long, default_value = DEFAULT_HEADER)]
    header: String,

    /// Refuse to write meshes containing NaN or infinite coordinates
    #[arg(long)]
    strict: bool,
}

impl From<Args> for GenerateOptions {
    fn from(args: Args) -> Self {
        GenerateOptions {
            output_dir: args.output_dir,
            header: args.header,
            strict: args.strict,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger (respects RUST_LOG environment variable)
    env_logger::init();

    let options = GenerateOptions::from(Args::parse());

    println!("Generating test STL files...");

    let generated = fixtures::generate(&options, &fixtures::default_fixtures()?)?;
    for line in fixtures::summary_lines(&options.output_dir, &generated) {
        println!("{line}");
    }

    Ok(())
}
