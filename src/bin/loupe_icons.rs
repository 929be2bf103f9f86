//! Command-line icon generator over the platform tables.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use loupe_renderer::platform::{IconWriter, android_targets, flutter_targets};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Platform {
    Android,
    Flutter,
}

#[derive(Parser, Debug)]
#[command(
    name = "loupe-icons",
    about = "Generate magnifying-glass launcher icons for a platform's resource layout"
)]
struct Args {
    /// Platform icon table to generate.
    #[arg(long, value_enum)]
    platform: Platform,

    /// Output root directory (e.g. app/src/main/res for Android).
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Also write an icons.json manifest under the output root.
    #[arg(long)]
    manifest: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let targets = match args.platform {
        Platform::Android => android_targets(),
        Platform::Flutter => flutter_targets(),
    };

    let writer = IconWriter::new(&args.out);
    let manifest = match writer.write_targets(&targets) {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("icon generation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.manifest {
        if let Err(err) = writer.write_manifest(&manifest) {
            eprintln!("failed to write manifest: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!(
        "generated {} icons under {}",
        manifest.icons.len(),
        args.out.display()
    );
    ExitCode::SUCCESS
}
