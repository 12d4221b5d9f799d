use indexmap::IndexMap;
use serde::Deserialize;
use strum::{Display, EnumString};

pub(crate) mod loader;

/// Distilled API schema: the fully parsed description the generator consumes.
/// Collections preserve document order, which fixes generation order end to end.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSchema {
  pub(crate) version: String,
  pub(crate) resources: IndexMap<String, SchemaResource>,
}

/// One API resource, keyed in the schema by its wire-type (stable snake_case).
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SchemaResource {
  #[serde(default)]
  pub(crate) operations: IndexMap<String, Operation>,
  #[serde(default)]
  pub(crate) components: IndexMap<String, Component>,
}

/// Operation descriptor. `singleton` switches the rendered method to id-less
/// retrieval regardless of the operation name.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Operation {
  #[serde(default)]
  pub(crate) singleton: bool,
  #[serde(default)]
  pub(crate) request_type: Option<String>,
  #[serde(default)]
  pub(crate) response_type: Option<String>,
}

/// Closed set of operation names the generator can render. Anything else in
/// the schema surfaces as a warning and the method is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum OperationKind {
  Retrieve,
  List,
  Create,
  Update,
  Delete,
}

impl OperationKind {
  pub(crate) fn parse(name: &str) -> Option<Self> {
    name.parse().ok()
  }

  /// Operations whose rendered methods accept query-parameter models.
  pub(crate) fn takes_query_params(self) -> bool {
    matches!(self, OperationKind::Retrieve | OperationKind::List)
  }

  /// Operations whose response type falls back to the resource's singular
  /// interface name when the schema does not declare one.
  pub(crate) fn forces_response_type(self) -> bool {
    matches!(
      self,
      OperationKind::List | OperationKind::Update | OperationKind::Create
    )
  }
}

/// Data component of a resource: the bare model or one of its CUD variants.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Component {
  #[serde(default)]
  pub(crate) attributes: IndexMap<String, Attribute>,
  #[serde(default)]
  pub(crate) relationships: IndexMap<String, Relationship>,
}

/// Scalar field of a component. `kind` is a primitive type name passed
/// through to the output; only `integer` gets remapped.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Attribute {
  #[serde(rename = "type")]
  pub(crate) kind: String,
  #[serde(default)]
  pub(crate) required: bool,
}

/// Link to another resource. `target` is the related wire-type, or the
/// literal `object` for untyped payloads.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Relationship {
  #[serde(rename = "type")]
  pub(crate) target: String,
  pub(crate) cardinality: Cardinality,
  #[serde(default)]
  pub(crate) required: bool,
  #[serde(default)]
  pub(crate) deprecated: bool,
  #[serde(default)]
  pub(crate) polymorphic: bool,
  #[serde(default)]
  pub(crate) one_of: Option<Vec<String>>,
}

impl Relationship {
  pub(crate) fn to_many(&self) -> bool {
    self.cardinality == Cardinality::ToMany
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Cardinality {
  ToOne,
  ToMany,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_operation_kinds() {
    let cases = [
      ("retrieve", Some(OperationKind::Retrieve)),
      ("list", Some(OperationKind::List)),
      ("create", Some(OperationKind::Create)),
      ("update", Some(OperationKind::Update)),
      ("delete", Some(OperationKind::Delete)),
      ("archive", None),
      ("Retrieve", None),
      ("", None),
    ];
    for (name, expected) in cases {
      assert_eq!(OperationKind::parse(name), expected, "operation name: {name}");
    }
  }

  #[test]
  fn operation_kind_renders_schema_names() {
    assert_eq!(OperationKind::Retrieve.to_string(), "retrieve");
    assert_eq!(OperationKind::Delete.to_string(), "delete");
  }

  #[test]
  fn deserializes_resources_in_document_order() {
    let raw = r#"{
      "version": "3.1.0",
      "resources": {
        "orders": {
          "operations": {
            "list": { "response_type": "Order" },
            "create": { "request_type": "OrderCreate" }
          },
          "components": {
            "Order": {
              "attributes": { "number": { "type": "string" } },
              "relationships": {
                "customer": { "type": "customers", "cardinality": "to_one" }
              }
            }
          }
        },
        "customers": {}
      }
    }"#;
    let schema: ApiSchema = serde_json::from_str(raw).unwrap();
    assert_eq!(schema.version, "3.1.0");
    let types: Vec<&str> = schema.resources.keys().map(String::as_str).collect();
    assert_eq!(types, ["orders", "customers"]);

    let orders = &schema.resources["orders"];
    let ops: Vec<&str> = orders.operations.keys().map(String::as_str).collect();
    assert_eq!(ops, ["list", "create"]);
    assert!(!orders.operations["list"].singleton);
    assert_eq!(orders.operations["create"].request_type.as_deref(), Some("OrderCreate"));

    let customer = &orders.components["Order"].relationships["customer"];
    assert_eq!(customer.target, "customers");
    assert!(!customer.to_many());
    assert!(!customer.deprecated);
    assert!(!customer.polymorphic);
  }

  #[test]
  fn deserializes_cardinalities() {
    let raw = r#"{ "type": "payment_methods", "cardinality": "to_many", "required": true }"#;
    let rel: Relationship = serde_json::from_str(raw).unwrap();
    assert!(rel.to_many());
    assert!(rel.required);
  }
}
