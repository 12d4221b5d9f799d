use crate::generator::naming;
use crate::generator::templates::tokens;
use crate::schema::{Operation, OperationKind};

/// One rendered class method plus the component types it referenced, in
/// reference order (request before response).
#[derive(Debug, Clone)]
pub(crate) struct RenderedOperation {
  pub(crate) text: String,
  pub(crate) referenced_types: Vec<String>,
}

/// Renders a single operation method from its template fragment.
///
/// The request type is substituted only when the schema declares one. The
/// response type is substituted when declared, and also for list, update,
/// and create operations, falling back to the resource's singular interface
/// name. The finished fragment is indented one tab stop so it nests in the
/// generated class body.
pub(crate) fn render_operation(
  class_name: &str,
  name: &str,
  kind: OperationKind,
  operation: &Operation,
  template: &str,
) -> RenderedOperation {
  let mut text = template
    .replace(tokens::OPERATION_NAME, name)
    .replace(tokens::RESOURCE_CLASS, class_name);
  let mut referenced_types = Vec::new();

  if let Some(request_type) = &operation.request_type {
    text = text.replace(tokens::RESOURCE_REQUEST_TYPE, request_type);
    referenced_types.push(request_type.clone());
  }

  if operation.response_type.is_some() || kind.forces_response_type() {
    let response_type = operation
      .response_type
      .clone()
      .unwrap_or_else(|| naming::interface_name(class_name));
    text = text.replace(tokens::RESOURCE_RESPONSE_TYPE, &response_type);
    referenced_types.push(response_type);
  }

  RenderedOperation {
    text: text.replace('\n', "\n\t"),
    referenced_types,
  }
}

/// Query-parameter model consumed by the operation's method signature, if
/// any. Singleton retrieval always takes the single-record parameters.
pub(crate) fn query_model(kind: OperationKind, singleton: bool) -> Option<&'static str> {
  if !kind.takes_query_params() {
    return None;
  }
  if singleton || kind == OperationKind::Retrieve {
    Some("QueryParamsRetrieve")
  } else {
    Some("QueryParamsList")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const METHOD_TPL: &str = "async ##__OPERATION_NAME__##(resource: ##__RESOURCE_REQUEST_TYPE__##): Promise<##__RESOURCE_RESPONSE_TYPE__##> {\n\treturn this.resources.update({ ...resource, type: ##__RESOURCE_CLASS__##.TYPE })\n}";

  fn operation(request_type: Option<&str>, response_type: Option<&str>) -> Operation {
    Operation {
      singleton: false,
      request_type: request_type.map(String::from),
      response_type: response_type.map(String::from),
    }
  }

  #[test]
  fn update_without_declared_response_falls_back_to_singular_interface() {
    let op = operation(Some("ExternalGatewayUpdate"), None);
    let rendered = render_operation("ExternalGateways", "update", OperationKind::Update, &op, METHOD_TPL);

    assert!(rendered.text.contains("Promise<ExternalGateway>"));
    assert!(rendered.text.contains("resource: ExternalGatewayUpdate"));
    assert_eq!(rendered.referenced_types, ["ExternalGatewayUpdate", "ExternalGateway"]);
  }

  #[test]
  fn declared_response_type_wins_over_fallback() {
    let op = operation(Some("OrderCreate"), Some("Order"));
    let rendered = render_operation("Orders", "create", OperationKind::Create, &op, METHOD_TPL);

    assert!(rendered.text.contains("Promise<Order>"));
    assert_eq!(rendered.referenced_types, ["OrderCreate", "Order"]);
  }

  #[test]
  fn delete_references_no_types() {
    let tpl = "async ##__OPERATION_NAME__##(id: string): Promise<void> {\n\tthis.resources.delete({ type: ##__RESOURCE_CLASS__##.TYPE, id })\n}";
    let op = operation(None, None);
    let rendered = render_operation("Orders", "delete", OperationKind::Delete, &op, tpl);

    assert!(rendered.referenced_types.is_empty());
    assert!(rendered.text.contains("this.resources.delete({ type: Orders.TYPE, id })"));
  }

  #[test]
  fn method_body_is_indented_one_stop() {
    let op = operation(None, Some("Order"));
    let rendered = render_operation("Orders", "retrieve", OperationKind::Retrieve, &op, "a\nb\nc");
    assert_eq!(rendered.text, "a\n\tb\n\tc");
  }

  #[test]
  fn operation_name_and_class_are_always_substituted() {
    let op = operation(None, None);
    let rendered = render_operation(
      "Orders",
      "delete",
      OperationKind::Delete,
      &op,
      "##__OPERATION_NAME__## on ##__RESOURCE_CLASS__##",
    );
    assert_eq!(rendered.text, "delete on Orders");
  }

  #[test]
  fn query_models_follow_operation_kind() {
    let cases = [
      (OperationKind::Retrieve, false, Some("QueryParamsRetrieve")),
      (OperationKind::Retrieve, true, Some("QueryParamsRetrieve")),
      (OperationKind::List, false, Some("QueryParamsList")),
      (OperationKind::List, true, Some("QueryParamsRetrieve")),
      (OperationKind::Create, false, None),
      (OperationKind::Update, false, None),
      (OperationKind::Delete, false, None),
    ];
    for (kind, singleton, expected) in cases {
      assert_eq!(query_model(kind, singleton), expected, "kind: {kind}, singleton: {singleton}");
    }
  }
}
