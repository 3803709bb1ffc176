//! `mexo-icon`: regenerate the application icon bundle.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mexo_icon_renderer::{
    BundleManifest, BundlePaths, BundleResult, ContainerPacker, FontSpec, IconRenderer,
};

/// Render the Mexo Toolbox icon at every size and write the `.ico` and
/// `.png` preview.
#[derive(Debug, Parser)]
#[command(name = "mexo-icon", version, about)]
struct Cli {
    /// Directory the fixed `resources/icons/` layout is created under.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Font file to use for the glyph instead of looking up Arial.
    #[arg(long, value_name = "PATH")]
    font_file: Option<PathBuf>,

    /// Do not scan system font directories.
    #[arg(long)]
    no_system_fonts: bool,

    /// Print the bundle manifest as JSON instead of the summary.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(manifest) => match report(&manifest, cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(%err, "failed to serialize manifest");
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!(%err, "icon generation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> BundleResult<BundleManifest> {
    let font = FontSpec {
        file: cli.font_file.clone(),
        system_fonts: !cli.no_system_fonts,
        ..FontSpec::default()
    };
    let bundle = IconRenderer::probe(&font).render_all()?;
    ContainerPacker::new(BundlePaths::under(&cli.root)).pack(&bundle)
}

fn report(manifest: &BundleManifest, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", manifest.to_json_pretty()?);
        return Ok(());
    }
    println!("Icon created successfully!");
    println!("  - ICO file: {}", manifest.container.display());
    println!("  - PNG file: {}", manifest.preview.display());
    println!("  - Sizes: {}", manifest.size_list());
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::new(format!("mexo_icon_renderer={level},mexo_icon={level}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
