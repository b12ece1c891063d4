use clap::{Parser, Subcommand};
use images_list::{config, logging, manifest, output, scan};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "images-list")]
#[command(version)]
#[command(about = "Regenerate images_list.json from the puzzle image folders")]
#[command(long_about = "\
Regenerate images_list.json from the puzzle image folders

Scans images/4, images/6 and images/9 next to the executable (or under
--root) and writes one entry per .png/.jpg/.jpeg file (lower- or
upper-case extension) to images_list.json.

Layout:

  <root>/
  ├── images-list.toml     # Optional config (see 'images-list gen-config')
  ├── images_list.json     # Output, overwritten on every run
  └── images/
      ├── 4/
      │   ├── red_fox.png  # → {\"name\": \"red fox\", \"file\": \"red_fox.png\"}
      │   └── owl-night.JPG
      ├── 6/
      └── 9/               # Missing folders produce empty lists

Run without a subcommand to update the manifest.")]
struct Cli {
    /// Base directory [default: directory containing this executable]
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Output file, relative to the base directory [default: images_list.json]
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Log scan details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the image folders and overwrite the manifest (default)
    Update,
    /// Scan and report whether the manifest is current, without writing
    Check,
    /// Print a stock images-list.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Update) {
        Command::Update => {
            let (images_root, output_path) = resolve_paths(cli.root, cli.output)?;
            println!("{}", output::SCAN_NOTICE);
            let result = scan::scan_images_root(&images_root)?;
            let json = manifest::to_json(&result)?;
            manifest::write_manifest(&result, &output_path)?;
            output::print_update_report(&result, &json, &output_path);
        }
        Command::Check => {
            let (images_root, output_path) = resolve_paths(cli.root, cli.output)?;
            println!("{}", output::SCAN_NOTICE);
            let result = scan::scan_images_root(&images_root)?;
            let up_to_date = manifest::is_up_to_date(&result, &output_path)?;
            output::print_check_report(&result, &output_path, up_to_date);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the image root and output file from flags, config file and defaults.
fn resolve_paths(
    root: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
    let base_dir = match root {
        Some(root) => root,
        None => executable_dir()?,
    };
    let mut tool_config = config::load_config(&base_dir)?;
    if let Some(out) = output {
        tool_config.output = out;
    }
    tool_config.validate()?;
    debug!(?tool_config, "base directory {}", base_dir.display());

    Ok((
        tool_config.images_root(&base_dir),
        tool_config.output_path(&base_dir),
    ))
}

/// Directory holding the running executable.
fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
