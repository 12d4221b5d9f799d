use chrono::NaiveDate;

use crate::generator::context::GenContext;
use crate::generator::orchestrator::{GeneratedOutput, Orchestrator};
use crate::generator::templates::{TemplateKind, TemplateSet};
use crate::schema::ApiSchema;

pub(super) const SCHEMA: &str = include_str!("../../../fixtures/schema.json");
pub(super) const API_TS: &str = include_str!("../../../fixtures/api.ts");
pub(super) const CLIENT_TS: &str = include_str!("../../../fixtures/client.ts");

pub(super) fn parse_schema(schema_json: &str) -> ApiSchema {
  serde_json::from_str(schema_json).expect("failed to parse test schema")
}

pub(super) fn fixture_schema() -> ApiSchema {
  parse_schema(SCHEMA)
}

pub(super) fn fixture_templates() -> TemplateSet {
  let mut set = TemplateSet::new(
    include_str!("../../../fixtures/templates/resource.tpl"),
    include_str!("../../../fixtures/templates/model.tpl"),
    include_str!("../../../fixtures/templates/model_empty.tpl"),
    include_str!("../../../fixtures/templates/header.tpl"),
  );
  set.insert_operation(
    TemplateKind::Retrieve,
    include_str!("../../../fixtures/templates/retrieve.tpl"),
  );
  set.insert_operation(TemplateKind::List, include_str!("../../../fixtures/templates/list.tpl"));
  set.insert_operation(TemplateKind::Create, include_str!("../../../fixtures/templates/create.tpl"));
  set.insert_operation(TemplateKind::Update, include_str!("../../../fixtures/templates/update.tpl"));
  set.insert_operation(TemplateKind::Delete, include_str!("../../../fixtures/templates/delete.tpl"));
  set.insert_operation(
    TemplateKind::Singleton,
    include_str!("../../../fixtures/templates/singleton.tpl"),
  );
  set
}

/// Pinned generation inputs so rendered output is byte-stable across runs.
pub(super) fn fixed_context() -> GenContext {
  GenContext::new("2.3.0", NaiveDate::from_ymd_opt(2021, 7, 22).unwrap())
}

pub(super) fn make_orchestrator(schema: ApiSchema) -> Orchestrator {
  Orchestrator::new(schema, fixture_templates(), fixed_context())
}

pub(super) fn generate_fixture_output() -> GeneratedOutput {
  make_orchestrator(fixture_schema()).generate()
}

pub(super) fn module_source(output: &GeneratedOutput, wire_type: &str) -> String {
  output
    .modules
    .iter()
    .find(|module| module.wire_type == wire_type)
    .unwrap_or_else(|| panic!("no module generated for '{wire_type}'"))
    .source
    .clone()
}

pub(super) fn assert_contains(code: &str, expected: &str, context: &str) {
  assert!(code.contains(expected), "missing {context}: expected '{expected}'");
}

pub(super) fn assert_not_contains(code: &str, pattern: &str, context: &str) {
  assert!(!code.contains(pattern), "{context}: '{pattern}' should not appear");
}

pub(super) fn assert_contains_all(code: &str, checks: &[(&str, &str)]) {
  for (expected, context) in checks {
    assert_contains(code, expected, context);
  }
}
