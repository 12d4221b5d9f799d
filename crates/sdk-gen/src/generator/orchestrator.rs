use crate::generator::context::GenContext;
use crate::generator::metrics::GenerationStats;
use crate::generator::patcher::ResourceEntry;
use crate::generator::resources::{self, GeneratedModule};
use crate::generator::templates::TemplateSet;
use crate::schema::ApiSchema;

/// Drives a full generation run over the schema, one resource module at a
/// time, in schema order. Pure with respect to the filesystem: callers own
/// every read and write.
pub(crate) struct Orchestrator {
  schema: ApiSchema,
  templates: TemplateSet,
  context: GenContext,
}

/// Everything a run produced: modules in schema order plus run metrics.
#[derive(Debug, Clone)]
pub(crate) struct GeneratedOutput {
  pub(crate) modules: Vec<GeneratedModule>,
  pub(crate) stats: GenerationStats,
}

impl GeneratedOutput {
  /// Ordered aggregator entries, one per generated module.
  pub(crate) fn entries(&self) -> Vec<ResourceEntry> {
    self
      .modules
      .iter()
      .map(|module| ResourceEntry {
        wire_type: module.wire_type.clone(),
        class_name: module.class_name.clone(),
      })
      .collect()
  }
}

impl Orchestrator {
  pub(crate) fn new(schema: ApiSchema, templates: TemplateSet, context: GenContext) -> Self {
    Self {
      schema,
      templates,
      context,
    }
  }

  pub(crate) fn generate(&self) -> GeneratedOutput {
    let mut stats = GenerationStats::default();
    let modules = self
      .schema
      .resources
      .iter()
      .map(|(wire_type, resource)| {
        resources::render_resource(&self.context, &self.templates, wire_type, resource, &mut stats)
      })
      .collect();

    GeneratedOutput { modules, stats }
  }

  /// Header text stamped with this run's date and schema version, as spliced
  /// into the api aggregator's export region.
  pub(crate) fn stamped_header(&self) -> String {
    self.context.stamp(self.templates.header())
  }
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;

  #[test]
  fn empty_schema_generates_nothing() {
    let schema = ApiSchema {
      version: "1.0.0".into(),
      resources: IndexMap::new(),
    };
    let templates = TemplateSet::new("", "", "", "");
    let context = GenContext::new("1.0.0", chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    let output = Orchestrator::new(schema, templates, context).generate();
    assert!(output.modules.is_empty());
    assert!(output.entries().is_empty());
    assert_eq!(output.stats, GenerationStats::default());
  }
}
