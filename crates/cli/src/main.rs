mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{BuildArgs, cmd_build, cmd_list, cmd_profile};
use crate::output::{OutputFormat, print_error};

/// dojo-build - Generate Dojo build profiles and collect their releases
#[derive(Parser)]
#[command(name = "dojo-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project config file (default: $DOJO_BUILD_CONFIG or ./dojo-build.json)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run builds and merge their releases into the destination directory
  Build {
    /// Build config names (default: all)
    names: Vec<String>,

    /// Binary passed to build.sh as --bin (overrides the config file)
    #[arg(long)]
    bin: Option<PathBuf>,

    /// Copy every release entry, including uncompressed and console-stripped files
    #[arg(long, conflicts_with_all = ["exclude_file", "exclude_dir"])]
    keep_all: bool,

    /// Additional regex for release files to leave behind
    #[arg(long = "exclude-file", value_name = "REGEX")]
    exclude_file: Vec<String>,

    /// Regex for release directories to leave behind, with everything under them
    #[arg(long = "exclude-dir", value_name = "REGEX")]
    exclude_dir: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Write the build profile for one config and print its path
  Profile {
    /// Build config name
    name: String,
  },

  /// List configured build names
  List {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let config = cli.config.as_deref();

  let result = match cli.command {
    Commands::Build {
      names,
      bin,
      keep_all,
      exclude_file,
      exclude_dir,
      output,
    } => cmd_build(
      config,
      &BuildArgs {
        names,
        bin,
        keep_all,
        exclude_file,
        exclude_dir,
      },
      output,
    ),
    Commands::Profile { name } => cmd_profile(config, &name),
    Commands::List { output } => cmd_list(config, output),
  };

  if let Err(e) = result {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}
