use indexmap::IndexSet;
use itertools::Itertools;

use crate::generator::components;
use crate::generator::context::GenContext;
use crate::generator::metrics::{GenerationStats, GenerationWarning};
use crate::generator::naming;
use crate::generator::operations;
use crate::generator::templates::{TemplateKind, TemplateSet, tokens};
use crate::schema::{OperationKind, SchemaResource};

/// One finished resource module, ready to be written to `<wire_type>.ts`.
/// The `(wire_type, class_name)` pair feeds the aggregator patches.
#[derive(Debug, Clone)]
pub(crate) struct GeneratedModule {
  pub(crate) wire_type: String,
  pub(crate) class_name: String,
  pub(crate) source: String,
}

/// Synthesizes a whole resource module: class with one method per renderable
/// operation, component interfaces for every type those methods reference,
/// relationship aliases for models referenced from CUD variants, and imports
/// for models owned by other resources.
pub(crate) fn render_resource(
  ctx: &GenContext,
  templates: &TemplateSet,
  wire_type: &str,
  resource: &SchemaResource,
  stats: &mut GenerationStats,
) -> GeneratedModule {
  let class_name = naming::class_name(wire_type);
  let singular = naming::interface_name(&class_name);

  let mut methods: Vec<String> = Vec::new();
  let mut referenced_types: IndexSet<String> = IndexSet::new();
  let mut query_models: Vec<&'static str> = Vec::new();

  for (op_name, operation) in &resource.operations {
    let Some(kind) = OperationKind::parse(op_name) else {
      stats.record_warning(GenerationWarning::UnsupportedOperation {
        resource: wire_type.to_string(),
        operation: op_name.clone(),
      });
      continue;
    };

    let template_kind = if operation.singleton {
      TemplateKind::Singleton
    } else {
      TemplateKind::from(kind)
    };
    let Some(template) = templates.operation(template_kind) else {
      stats.record_warning(GenerationWarning::MissingOperationTemplate {
        resource: wire_type.to_string(),
        operation: op_name.clone(),
      });
      continue;
    };

    if let Some(query_model) = operations::query_model(kind, operation.singleton) {
      if !query_models.contains(&query_model) {
        query_models.push(query_model);
      }
    }

    let rendered = operations::render_operation(&class_name, op_name, kind, operation, template);
    methods.push(rendered.text);
    referenced_types.extend(rendered.referenced_types);
    stats.record_operation();
  }

  let mut interfaces: Vec<String> = Vec::new();
  let mut base_interfaces: Vec<String> = Vec::new();
  let mut imported_models: IndexSet<String> = IndexSet::new();
  let mut alias_models: IndexSet<String> = IndexSet::new();

  for type_name in &referenced_types {
    let Some(component) = resource.components.get(type_name) else {
      stats.record_warning(GenerationWarning::MissingComponent {
        resource: wire_type.to_string(),
        component: type_name.clone(),
      });
      continue;
    };

    base_interfaces.push(format!("Resource{}", naming::cud_suffix_str(type_name)));
    let rendered = components::render_component(type_name, component, templates);
    interfaces.push(rendered.text);
    stats.record_interface();

    if naming::cud_suffix(type_name).is_some() {
      alias_models.extend(rendered.referenced_models.iter().cloned());
    }
    imported_models.extend(rendered.referenced_models);
  }

  let alias_lines: Vec<String> = alias_models
    .iter()
    .map(|model| format!("type {model}Rel = ResourceId & {{ type: '{}' }}", naming::module_path(model)))
    .collect();
  let alias_block = if alias_lines.is_empty() {
    String::new()
  } else {
    format!("{}\n", alias_lines.iter().join("\n"))
  };

  // A model is imported only when another resource owns it: operation types
  // and the resource's own singular interface are structural, never imported.
  let import_lines: Vec<String> = imported_models
    .iter()
    .filter(|model| !referenced_types.contains(model.as_str()) && model.as_str() != singular.as_str())
    .map(|model| format!("import {{ {model} }} from './{}'", naming::module_path(model)))
    .collect();
  let import_block = if import_lines.is_empty() {
    String::new()
  } else {
    format!("{}\n", import_lines.iter().join("\n"))
  };

  stats.record_relationship_aliases(alias_lines.len());
  stats.record_imports(import_lines.len());
  stats.record_resource();

  let source = ctx
    .stamp(templates.resource())
    .replace(tokens::QUERY_MODELS, &query_models.iter().join(", "))
    .replace(tokens::MODEL_RESOURCE_INTERFACE, &singular)
    .replace(tokens::RESOURCE_TYPE, wire_type)
    .replace(tokens::RESOURCE_CLASS, &class_name)
    .replace(tokens::RESOURCE_OPERATIONS, &methods.iter().join("\n\n\t"))
    .replace(tokens::EXPORT_RESOURCE_TYPES, &referenced_types.iter().join(", "))
    .replace(tokens::MODEL_INTERFACES, &interfaces.iter().join("\n\n\n"))
    .replace(tokens::RESOURCE_INTERFACES, &base_interfaces.iter().join(", "))
    .replace(tokens::RELATIONSHIP_TYPES, &alias_block)
    .replace(tokens::IMPORT_RESOURCE_MODELS, &import_block);

  GeneratedModule {
    wire_type: wire_type.to_string(),
    class_name,
    source,
  }
}
