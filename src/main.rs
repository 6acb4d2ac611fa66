use clap::{Parser, Subcommand};
use simple_blog::pipeline::{self, BuildOptions};
use simple_blog::render::RenderRegistry;
use simple_blog::{config, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Static blog generator: markdown in, mirrored HTML out")]
#[command(long_about = "\
Static blog generator: markdown in, mirrored HTML out

Every .md file under the source root becomes one HTML page at the same
relative location under the output root. README.md files are never published.

Source structure:

  blog/
  ├── config.toml                  # Site config (optional)
  ├── README.md                    # Skipped
  ├── hello-world.md               # → docs/world.html
  └── posts/
      └── 2024-02-20-note.md       # → docs/posts/02-20-note.html

Output names drop everything up to the first hyphen and slugify the rest.
Top-level files use the page layout, files in posts/ the dated post layout;
any other directory is an error.

Run 'simple-blog gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Source directory
    #[arg(long, default_value = pipeline::DEFAULT_SOURCE_DIR, global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = pipeline::DEFAULT_OUTPUT_DIR, global = true)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory (default)
    Build,
    /// Write raw converted HTML next to each source file, without templates
    Raw,
    /// Validate the source tree and show what would be generated
    Check {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `check --json` output stays machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = BuildOptions {
        source: cli.source,
        output: cli.output,
    };

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&options.source)?;
            let registry = RenderRegistry::standard();
            println!(
                "==> Building {} \u{2192} {}",
                options.source.display(),
                options.output.display()
            );
            let report = pipeline::build(&options, &registry, &site_config)?;
            output::print_build_output(&report, &options.source, &options.output);
        }
        Command::Raw => {
            println!("==> Converting {} in place", options.source.display());
            let report = pipeline::build_raw(&options.source)?;
            output::print_build_output(&report, &options.source, &options.source);
        }
        Command::Check { json } => {
            config::load_config(&options.source)?;
            let report = pipeline::plan(&options, &RenderRegistry::standard())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("==> Checking {}", options.source.display());
                output::print_plan_output(&report, &options.source, &options.output);
                println!("==> Content is valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
