use itertools::Itertools;

use crate::generator::naming;
use crate::generator::templates::{TemplateSet, tokens};
use crate::schema::{Component, Relationship};

/// Base-model fields every generated interface inherits; attributes shadowing
/// them are never re-emitted.
pub(crate) const RESERVED_ATTRIBUTES: [&str; 7] = [
  "type",
  "id",
  "reference",
  "reference_origin",
  "metadata",
  "created_at",
  "updated_at",
];

const DEPRECATION_NOTICE: &str =
  "/**\n\t* @deprecated This field should not be used as it may be removed in the future without notice\n\t*/\n\t";

/// One rendered interface plus the models its relationships referenced, in
/// declaration order with duplicates preserved (callers dedup).
#[derive(Debug, Clone)]
pub(crate) struct RenderedComponent {
  pub(crate) text: String,
  pub(crate) referenced_models: Vec<String>,
}

/// Schema primitives map straight to their TypeScript spelling except
/// `integer`, which TypeScript folds into `number`.
fn field_type(kind: &str) -> &str {
  match kind {
    "integer" => "number",
    other => other,
  }
}

fn relationship_line(name: &str, rel: &Relationship, rel_suffix: &str, models: &mut Vec<String>) -> String {
  if rel.deprecated {
    let array = if rel.to_many() { "[]" } else { "" };
    return format!("{DEPRECATION_NOTICE}{name}?: object{array}");
  }

  let optional = if rel.required { "" } else { "?" };
  let array = if rel.to_many() { "[]" } else { "" };

  if rel.target == "object" {
    return format!("{name}{optional}: object{array}");
  }

  let type_text = match (&rel.one_of, rel.polymorphic) {
    (Some(one_of), true) => {
      models.extend(one_of.iter().cloned());
      let union = one_of.iter().map(|member| format!("{member}{rel_suffix}")).join(" | ");
      if rel.to_many() { format!("({union})") } else { union }
    }
    _ => {
      let target = naming::relationship_target(&rel.target);
      models.push(target.clone());
      format!("{target}{rel_suffix}")
    }
  };

  format!("{name}{optional}: {type_text}{array}")
}

/// Renders one component interface. Relationship types of a CUD variant are
/// pointers (`<Model>Rel` aliases); on the bare model they are the embedded
/// interfaces themselves.
pub(crate) fn render_component(name: &str, component: &Component, templates: &TemplateSet) -> RenderedComponent {
  let rel_suffix = if naming::cud_suffix(name).is_some() { "Rel" } else { "" };
  let mut referenced_models = Vec::new();

  let fields: Vec<String> = component
    .attributes
    .iter()
    .filter(|(attr_name, _)| !RESERVED_ATTRIBUTES.contains(&attr_name.as_str()))
    .map(|(attr_name, attr)| {
      let optional = if attr.required { "" } else { "?" };
      format!("{attr_name}{optional}: {}", field_type(&attr.kind))
    })
    .collect();

  let rels: Vec<String> = component
    .relationships
    .iter()
    .map(|(rel_name, rel)| relationship_line(rel_name, rel, rel_suffix, &mut referenced_models))
    .collect();

  let template = if fields.is_empty() && rels.is_empty() {
    templates.model_empty()
  } else {
    templates.model()
  };

  let fields_block = if fields.is_empty() {
    String::new()
  } else {
    let separator = if rels.is_empty() { "" } else { "\n" };
    format!("\n\t{}{separator}", fields.iter().join("\n\t"))
  };
  let rels_block = if rels.is_empty() {
    String::new()
  } else {
    format!("{}\n", rels.iter().join("\n\t"))
  };

  let text = template
    .replace(tokens::RESOURCE_MODEL, name)
    .replace(tokens::EXTEND_TYPE, naming::cud_suffix_str(name))
    .replace(tokens::RESOURCE_MODEL_FIELDS, &fields_block)
    .replace(tokens::RESOURCE_MODEL_RELATIONSHIPS, &rels_block);

  RenderedComponent {
    text,
    referenced_models,
  }
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;
  use crate::schema::{Attribute, Cardinality};

  const MODEL_TPL: &str = "interface ##__RESOURCE_MODEL__## extends Resource##__EXTEND_TYPE__## {\n\t##__RESOURCE_MODEL_FIELDS__##\n\t##__RESOURCE_MODEL_RELATIONSHIPS__##\n}";
  const MODEL_EMPTY_TPL: &str = "interface ##__RESOURCE_MODEL__## extends Resource##__EXTEND_TYPE__## {\n}";

  fn templates() -> TemplateSet {
    TemplateSet::new("", MODEL_TPL, MODEL_EMPTY_TPL, "")
  }

  fn attribute(kind: &str, required: bool) -> Attribute {
    Attribute {
      kind: kind.into(),
      required,
    }
  }

  fn relationship(target: &str, cardinality: Cardinality) -> Relationship {
    Relationship {
      target: target.into(),
      cardinality,
      required: false,
      deprecated: false,
      polymorphic: false,
      one_of: None,
    }
  }

  #[test]
  fn skips_reserved_attributes_and_maps_integer() {
    let component = Component {
      attributes: IndexMap::from([
        ("id".to_string(), attribute("string", true)),
        ("metadata".to_string(), attribute("object", false)),
        ("name".to_string(), attribute("string", true)),
        ("circuit_failure_count".to_string(), attribute("integer", false)),
      ]),
      relationships: IndexMap::new(),
    };

    let rendered = render_component("ExternalGateway", &component, &templates());
    assert!(rendered.text.contains("\tname: string"));
    assert!(rendered.text.contains("\tcircuit_failure_count?: number"));
    assert!(!rendered.text.contains("id:"));
    assert!(!rendered.text.contains("metadata"));
    assert!(rendered.referenced_models.is_empty());
  }

  #[test]
  fn renders_single_target_relationships() {
    let component = Component {
      attributes: IndexMap::new(),
      relationships: IndexMap::from([
        ("payment_methods".to_string(), relationship("payment_methods", Cardinality::ToMany)),
        ("market".to_string(), relationship("markets", Cardinality::ToOne)),
      ]),
    };

    let rendered = render_component("ExternalGateway", &component, &templates());
    assert!(rendered.text.contains("payment_methods?: PaymentMethod[]"));
    assert!(rendered.text.contains("market?: Market"));
    assert_eq!(rendered.referenced_models, ["PaymentMethod", "Market"]);
  }

  #[test]
  fn cud_variants_point_at_relationship_aliases() {
    let mut rel = relationship("markets", Cardinality::ToOne);
    rel.required = true;
    let component = Component {
      attributes: IndexMap::new(),
      relationships: IndexMap::from([("market".to_string(), rel)]),
    };

    let rendered = render_component("PriceCreate", &component, &templates());
    assert!(rendered.text.contains("market: MarketRel"));
    assert!(rendered.text.contains("extends ResourceCreate"));
    assert_eq!(rendered.referenced_models, ["Market"]);
  }

  #[test]
  fn polymorphic_to_many_union_is_parenthesized() {
    let mut rel = relationship("payment_methods", Cardinality::ToMany);
    rel.polymorphic = true;
    rel.one_of = Some(vec!["CreditCard".into(), "PaypalPayment".into()]);
    let component = Component {
      attributes: IndexMap::new(),
      relationships: IndexMap::from([("payment_sources".to_string(), rel)]),
    };

    let rendered = render_component("CustomerUpdate", &component, &templates());
    assert!(rendered.text.contains("payment_sources?: (CreditCardRel | PaypalPaymentRel)[]"));
    assert_eq!(rendered.referenced_models, ["CreditCard", "PaypalPayment"]);
  }

  #[test]
  fn polymorphic_to_one_union_on_bare_model_is_unsuffixed() {
    let mut rel = relationship("payment_methods", Cardinality::ToOne);
    rel.polymorphic = true;
    rel.one_of = Some(vec!["CreditCard".into(), "PaypalPayment".into()]);
    let component = Component {
      attributes: IndexMap::new(),
      relationships: IndexMap::from([("payment_source".to_string(), rel)]),
    };

    let rendered = render_component("Customer", &component, &templates());
    assert!(rendered.text.contains("payment_source?: CreditCard | PaypalPayment"));
    assert!(!rendered.text.contains('('));
  }

  #[test]
  fn deprecated_relationships_degrade_to_untyped_objects() {
    let mut to_one = relationship("payment_gateways", Cardinality::ToOne);
    to_one.deprecated = true;
    to_one.required = true;
    let mut to_many = relationship("payment_gateways", Cardinality::ToMany);
    to_many.deprecated = true;
    let component = Component {
      attributes: IndexMap::new(),
      relationships: IndexMap::from([
        ("gateway".to_string(), to_one),
        ("gateways".to_string(), to_many),
      ]),
    };

    let rendered = render_component("Payment", &component, &templates());
    assert!(rendered.text.contains("* @deprecated"));
    assert!(rendered.text.contains("gateway?: object\n"));
    assert!(rendered.text.contains("gateways?: object[]"));
    assert!(rendered.referenced_models.is_empty(), "deprecated links record no models");
  }

  #[test]
  fn object_targets_stay_untyped() {
    let component = Component {
      attributes: IndexMap::new(),
      relationships: IndexMap::from([("inputs".to_string(), relationship("object", Cardinality::ToMany))]),
    };

    let rendered = render_component("Import", &component, &templates());
    assert!(rendered.text.contains("inputs?: object[]"));
    assert!(rendered.referenced_models.is_empty());
  }

  #[test]
  fn empty_component_uses_the_empty_model_template() {
    let component = Component::default();
    let rendered = render_component("ExternalGatewayDelete", &component, &templates());
    assert_eq!(
      rendered.text,
      "interface ExternalGatewayDelete extends ResourceDelete {\n}"
    );
  }

  #[test]
  fn block_layout_matches_the_shipped_module_shape() {
    let component = Component {
      attributes: IndexMap::from([
        ("name".to_string(), attribute("string", false)),
        ("shared_secret".to_string(), attribute("string", true)),
      ]),
      relationships: IndexMap::from([(
        "payment_methods".to_string(),
        relationship("payment_methods", Cardinality::ToMany),
      )]),
    };

    let rendered = render_component("ExternalGateway", &component, &templates());
    assert_eq!(
      rendered.text,
      "interface ExternalGateway extends Resource {\n\t\n\tname?: string\n\tshared_secret: string\n\n\tpayment_methods?: PaymentMethod[]\n\n}"
    );
  }
}
