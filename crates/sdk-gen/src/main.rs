#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod jsonapi;
mod schema;
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Resources { input } => ui::commands::list_resources(&input, &colors).await?,
    },
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command);
      ui::commands::generate_resources(config, &colors).await?;
    }
    Commands::Transform(command) => ui::commands::transform_document(&command).await?,
  }

  Ok(())
}
