use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    context::GenContext,
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, Orchestrator},
    patcher::{self, ResourceEntry},
    templates::TemplateSet,
  },
  schema::{ApiSchema, loader::SchemaLoader},
  ui::{Colors, GenerateCommand},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub templates: PathBuf,
  pub output: PathBuf,
  pub api_file: PathBuf,
  pub client_file: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> Self {
    let GenerateCommand {
      input,
      templates,
      output,
      api_file,
      client_file,
      verbose,
      quiet,
    } = command;

    Self {
      input,
      templates,
      output,
      api_file,
      client_file,
      verbose,
      quiet,
    }
  }

  async fn load_schema(&self) -> anyhow::Result<ApiSchema> {
    SchemaLoader::open(&self.input).await?.parse()
  }

  /// Recreates the destination directory, then writes one module per
  /// resource. Stale modules from earlier runs never survive.
  async fn write_modules(&self, output: &GeneratedOutput, logger: &GenerateLogger<'_>) -> anyhow::Result<()> {
    if tokio::fs::try_exists(&self.output).await? {
      tokio::fs::remove_dir_all(&self.output)
        .await
        .with_context(|| format!("cannot clear output directory: {}", self.output.display()))?;
    }
    tokio::fs::create_dir_all(&self.output).await?;

    for module in &output.modules {
      let path = self.output.join(format!("{}.ts", module.wire_type));
      tokio::fs::write(&path, &module.source).await?;
      logger.log_module(&path);
    }
    Ok(())
  }

  async fn patch_api(&self, header: &str, entries: &[ResourceEntry]) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&self.api_file)
      .await
      .with_context(|| format!("cannot open aggregator file: {}", self.api_file.display()))?;
    let patched = patcher::patch_api_file(&content, header, entries)?;
    tokio::fs::write(&self.api_file, patched).await?;
    Ok(())
  }

  async fn patch_client(&self, entries: &[ResourceEntry]) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&self.client_file)
      .await
      .with_context(|| format!("cannot open aggregator file: {}", self.client_file.display()))?;
    let patched = patcher::patch_client_file(&content, entries)?;
    tokio::fs::write(&self.client_file, patched).await?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading API schema from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, resources: usize) {
    self.info(
      &format!("Generating TypeScript sources for {resources} resources...")
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_module(&self, path: &Path) {
    if self.config.verbose && !self.config.quiet {
      println!(
        "            {}",
        path.display().to_string().with(self.colors.info())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing resource modules to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_patching(&self, path: &Path) {
    self.info(
      &format!("Patching aggregator: {}", path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Resources generated:", stats.resources_generated.to_string());
    self.stat("Operations rendered:", stats.operations_rendered.to_string());
    if stats.operations_skipped > 0 {
      self.stat("", format!("{} skipped", stats.operations_skipped));
    }
    self.stat("Interfaces rendered:", stats.interfaces_rendered.to_string());
    if stats.relationship_aliases > 0 {
      self.stat("", format!("{} relationship aliases", stats.relationship_aliases));
    }
    if stats.imports_rendered > 0 {
      self.stat("Imports rendered:", stats.imports_rendered.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    let mut printed_header = false;
    for warning in &stats.warnings {
      let should_print = warning.is_skipped_operation() || self.config.verbose;
      if !should_print {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_operation() {
        "Skipped:"
      } else {
        "Warning:"
      };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript SDK sources".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_resources(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let schema = config.load_schema().await?;
  let templates = TemplateSet::load(&config.templates).await?;
  let context = GenContext::for_schema(&schema);

  logger.log_generating(schema.resources.len());
  let orchestrator = Orchestrator::new(schema, templates, context);
  let output = orchestrator.generate();
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_modules(&output, &logger).await?;

  let entries = output.entries();
  logger.log_patching(&config.api_file);
  config.patch_api(&orchestrator.stamped_header(), &entries).await?;
  logger.log_patching(&config.client_file);
  config.patch_client(&entries).await?;

  logger.log_success();
  Ok(())
}
