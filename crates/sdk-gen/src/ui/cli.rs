use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "sdk-gen")]
#[command(author, version, about = "TypeScript SDK resource generator for JSON:API schemas")]
#[command(styles = super::Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from the API schema
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript SDK sources from the API schema
  Generate(GenerateCommand),
  /// Flatten or nest a JSON:API document for inspection
  Transform(TransformCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the API schema JSON file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory holding the .tpl template files
  #[arg(short, long, value_name = "DIR", default_value = "gen/templates")]
  pub templates: PathBuf,

  /// Directory where resource modules are written (recreated on every run)
  #[arg(short, long, value_name = "DIR", default_value = "src/resources")]
  pub output: PathBuf,

  /// Path to the api aggregator file patched in place
  #[arg(long, value_name = "FILE", default_value = "src/api.ts")]
  pub api_file: PathBuf,

  /// Path to the client aggregator file patched in place
  #[arg(long, value_name = "FILE", default_value = "src/client.ts")]
  pub client_file: PathBuf,

  /// Enable verbose output with per-module progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct TransformCommand {
  /// Path to the JSON document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Nest a flat resource object into JSON:API layout instead of flattening
  #[arg(long, default_value_t = false)]
  pub nest: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all resources defined in the API schema
  Resources {
    /// Path to the API schema JSON file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
