use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::naming,
  schema::loader::SchemaLoader,
  ui::{Colors, colors::comfy_color, term_width},
};

pub async fn list_resources(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let schema = SchemaLoader::open(input).await?.parse()?;

  let mut resources: Vec<(String, String, String, String)> = schema
    .resources
    .iter()
    .map(|(wire_type, resource)| {
      (
        wire_type.clone(),
        naming::class_name(wire_type),
        resource.operations.keys().join(", "),
        resource.components.keys().join(", "),
      )
    })
    .collect();
  resources.sort_by(|a, b| a.0.cmp(&b.0));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("TYPE").fg(comfy_color(colors.label())));
  header.add_cell(Cell::new("CLASS").fg(comfy_color(colors.label())));
  header.add_cell(Cell::new("OPERATIONS").fg(comfy_color(colors.label())));
  header.add_cell(Cell::new("COMPONENTS").fg(comfy_color(colors.label())));
  table.set_header(header);

  for (wire_type, class_name, operations, components) in resources {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(wire_type)
        .fg(comfy_color(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(class_name).fg(comfy_color(colors.accent())));
    row.add_cell(Cell::new(operations).fg(comfy_color(colors.primary())));
    row.add_cell(Cell::new(components).fg(comfy_color(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
