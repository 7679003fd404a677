use clap::{Parser, Subcommand};
use readme_gen::{config, generate, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "readme-gen")]
#[command(about = "Regenerate a project README from per-folder metadata")]
#[command(long_about = "\
Regenerate a project README from per-folder metadata

Your filesystem is the data source. Run with no arguments from the project
root to rebuild README.md and docs/index.md from scratch.

Project structure:

  project/
  ├── project.json                 # name, description, homepage (optional)
  ├── readme-gen.toml              # output locations (optional)
  ├── code/                        # one folder per module
  │   └── beta-pipeline/
  │       ├── summary.md           # title line, snippet, optional [x] checkbox
  │       ├── tags.md              # one tag per line
  │       └── status.md            # checkbox overriding summary.md
  ├── datasets/                    # same layout as code/
  ├── papers/                      # same layout as code/
  ├── training/                    # loose *.md files
  ├── models/                      # loose *.md files
  ├── evaluation/                  # loose *.md files
  └── ideas/                       # loose *.md files

Metadata resolution (first available wins):
  Title:   first line of summary.md → folder name
  Status:  checkbox in status.md → checkbox in summary.md → unchecked

Run 'readme-gen gen-config' to print a documented readme-gen.toml.")]
#[command(version)]
struct Cli {
    /// Project root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Log scan details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild README.md and docs/index.md (default)
    Build,
    /// Scan the project and print what would be indexed, without writing
    Check {
        /// Print the scanned inventory as JSON instead of the listing
        #[arg(long)]
        json: bool,
    },
    /// Print a stock readme-gen.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            println!("==> Scanning {}", cli.root.display());
            let report = generate::build(&cli.root, chrono::Utc::now())?;
            output::print_scan_output(&report.inventory);
            println!();
            output::print_build_output(&report.written, &cli.root);
            println!("==> Build complete");
        }
        Command::Check { json } => {
            let config = config::load_config(&cli.root)?;
            let inventory = readme_gen::scan::scan(&cli.root, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&inventory)?);
            } else {
                println!("==> Checking {}", cli.root.display());
                output::print_scan_output(&inventory);
                println!("==> Project is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("readme_gen={default_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
