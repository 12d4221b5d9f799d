//! Marker-delimited region rewriting for the two hand-maintained aggregator
//! files. Everything outside a declared region passes through byte for byte;
//! the editable spans are replaced wholesale on every run, which keeps
//! regeneration idempotent regardless of how the resource set changed.

use anyhow::bail;
use itertools::Itertools;

use crate::generator::templates::tokens;

/// Ordered `(wire_type, class_name)` projection of a generation run; the
/// input to both aggregator patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResourceEntry {
  pub(crate) wire_type: String,
  pub(crate) class_name: String,
}

/// Sentinel substrings scanned for in aggregator files. `..._TEMPLATE::`
/// lines carry the per-item template inline, after the marker and one
/// separator character.
pub(crate) mod markers {
  pub(crate) const API_EXPORTS_TEMPLATE: &str = "##__API_RESOURCES_TEMPLATE::";
  pub(crate) const API_EXPORTS_START: &str = "##__API_RESOURCES_START__##";
  pub(crate) const API_EXPORTS_STOP: &str = "##__API_RESOURCES_STOP__##";
  pub(crate) const API_TYPES_START: &str = "##__API_RESOURCE_TYPES_START__##";
  pub(crate) const API_TYPES_STOP: &str = "##__API_RESOURCE_TYPES_STOP__##";
  pub(crate) const SDK_DEF_TEMPLATE: &str = "##__SDK_RESOURCES_DEF_TEMPLATE::";
  pub(crate) const SDK_DEF_START: &str = "##__SDK_RESOURCES_DEF_START__##";
  pub(crate) const SDK_DEF_STOP: &str = "##__SDK_RESOURCES_DEF_STOP__##";
  pub(crate) const SDK_INIT_TEMPLATE: &str = "##__SDK_RESOURCES_INIT_TEMPLATE::";
  pub(crate) const SDK_INIT_START: &str = "##__SDK_RESOURCES_INIT_START__##";
  pub(crate) const SDK_INIT_STOP: &str = "##__SDK_RESOURCES_INIT_STOP__##";
}

/// Declared layout of one machine-owned region. `start_offset` is the fixed
/// line distance from the start sentinel to the editable span (templated
/// regions keep one spacer line after the sentinel); it is part of the
/// aggregator file contract, not a tunable.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionSpec {
  pub(crate) name: &'static str,
  pub(crate) template_marker: Option<&'static str>,
  pub(crate) start_marker: &'static str,
  pub(crate) stop_marker: &'static str,
  pub(crate) start_offset: usize,
}

const API_REGIONS: [RegionSpec; 2] = [
  RegionSpec {
    name: "resource exports",
    template_marker: Some(markers::API_EXPORTS_TEMPLATE),
    start_marker: markers::API_EXPORTS_START,
    stop_marker: markers::API_EXPORTS_STOP,
    start_offset: 2,
  },
  RegionSpec {
    name: "resource type list",
    template_marker: None,
    start_marker: markers::API_TYPES_START,
    stop_marker: markers::API_TYPES_STOP,
    start_offset: 1,
  },
];

const CLIENT_REGIONS: [RegionSpec; 2] = [
  RegionSpec {
    name: "resource definitions",
    template_marker: Some(markers::SDK_DEF_TEMPLATE),
    start_marker: markers::SDK_DEF_START,
    stop_marker: markers::SDK_DEF_STOP,
    start_offset: 2,
  },
  RegionSpec {
    name: "resource initializations",
    template_marker: Some(markers::SDK_INIT_TEMPLATE),
    start_marker: markers::SDK_INIT_START,
    stop_marker: markers::SDK_INIT_STOP,
    start_offset: 2,
  },
];

/// A region resolved against a concrete file: the editable line span
/// `[start, stop)` plus the extracted per-item template, when declared.
#[derive(Debug, Clone)]
struct Region {
  template: Option<String>,
  start: usize,
  stop: usize,
}

struct FilePatcher {
  lines: Vec<String>,
}

impl FilePatcher {
  fn new(content: &str) -> Self {
    Self {
      lines: content.split('\n').map(String::from).collect(),
    }
  }

  /// First line containing the marker, with the text following it.
  fn find_line(&self, marker: &str) -> Option<(usize, &str)> {
    self.lines.iter().enumerate().find_map(|(index, line)| {
      line.find(marker).map(|offset| (index, &line[offset + marker.len()..]))
    })
  }

  fn resolve(&self, spec: &RegionSpec) -> anyhow::Result<Region> {
    let template = match spec.template_marker {
      Some(marker) => {
        let Some((_, rest)) = self.find_line(marker) else {
          bail!("aggregator is missing the {} item template '{marker}'", spec.name);
        };
        Some(rest.get(1..).unwrap_or("").to_string())
      }
      None => None,
    };

    let Some((start_line, _)) = self.find_line(spec.start_marker) else {
      bail!("aggregator is missing the {} start marker '{}'", spec.name, spec.start_marker);
    };
    let Some((stop_line, _)) = self.find_line(spec.stop_marker) else {
      bail!("aggregator is missing the {} stop marker '{}'", spec.name, spec.stop_marker);
    };

    let start = start_line + spec.start_offset;
    if stop_line < start {
      bail!("aggregator {} region stops before it starts", spec.name);
    }

    Ok(Region {
      template,
      start,
      stop: stop_line,
    })
  }

  /// Resolves every declared region before anything is spliced: a missing or
  /// misordered sentinel must leave the file untouched.
  fn resolve_all(&self, specs: &[RegionSpec]) -> anyhow::Result<Vec<Region>> {
    let regions = specs
      .iter()
      .map(|spec| self.resolve(spec))
      .collect::<anyhow::Result<Vec<_>>>()?;

    for ((previous_spec, previous), (next_spec, next)) in specs.iter().zip(&regions).tuple_windows() {
      if next.start <= previous.stop {
        bail!(
          "aggregator regions '{}' and '{}' overlap or appear out of order",
          previous_spec.name,
          next_spec.name
        );
      }
    }

    Ok(regions)
  }

  /// Replaces the editable span. Items may embed newlines; the final join
  /// flattens them back into lines.
  fn splice(&mut self, region: &Region, items: Vec<String>) {
    self.lines.splice(region.start..region.stop, items);
  }

  fn into_content(self) -> String {
    self.lines.join("\n")
  }
}

fn instantiate(template: &str, entry: &ResourceEntry) -> String {
  template
    .replace(tokens::TAB, "\t")
    .replace(tokens::RESOURCE_TYPE, &entry.wire_type)
    .replace(tokens::RESOURCE_CLASS, &entry.class_name)
}

fn instantiate_all(region: &Region, entries: &[ResourceEntry]) -> Vec<String> {
  let template = region.template.as_deref().unwrap_or("");
  entries.iter().map(|entry| instantiate(template, entry)).collect()
}

/// Rewrites the export and wire-type regions of the api aggregator. The
/// stamped header leads the export list, so regeneration refreshes the date
/// in place. Regions are spliced back to front to keep line indices valid.
pub(crate) fn patch_api_file(content: &str, header: &str, entries: &[ResourceEntry]) -> anyhow::Result<String> {
  let mut patcher = FilePatcher::new(content);
  let regions = patcher.resolve_all(&API_REGIONS)?;

  let mut exports = vec![header.to_string()];
  exports.extend(instantiate_all(&regions[0], entries));
  let type_list = entries.iter().map(|entry| format!("\t'{}'", entry.wire_type)).join("\n|");

  patcher.splice(&regions[1], vec![type_list]);
  patcher.splice(&regions[0], exports);
  Ok(patcher.into_content())
}

/// Rewrites the property definition and constructor initialization regions
/// of the client aggregator.
pub(crate) fn patch_client_file(content: &str, entries: &[ResourceEntry]) -> anyhow::Result<String> {
  let mut patcher = FilePatcher::new(content);
  let regions = patcher.resolve_all(&CLIENT_REGIONS)?;

  let definitions = instantiate_all(&regions[0], entries);
  let initializations = instantiate_all(&regions[1], entries);

  patcher.splice(&regions[1], initializations);
  patcher.splice(&regions[0], definitions);
  Ok(patcher.into_content())
}
