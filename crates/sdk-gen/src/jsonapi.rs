//! JSON:API wire-format transforms. Generated clients exchange flat objects
//! with callers while the API speaks JSON:API documents; these two functions
//! define that contract. Both are pure value-to-value mappings.

use serde_json::{Map, Value};

/// True when the value is shaped like a resource identifier: an object
/// carrying string `id` and `type` members. Extra members are allowed, so a
/// full resource matches too.
pub(crate) fn is_resource_identifier(value: &Value) -> bool {
  value.get("id").is_some_and(Value::is_string) && value.get("type").is_some_and(Value::is_string)
}

fn identity(value: &Value) -> Option<(&str, &str)> {
  match (
    value.get("id").and_then(Value::as_str),
    value.get("type").and_then(Value::as_str),
  ) {
    (Some(id), Some(wire_type)) => Some((id, wire_type)),
    _ => None,
  }
}

fn bare_identifier(id: &str, wire_type: &str) -> Value {
  let mut identifier = Map::new();
  identifier.insert("id".to_string(), Value::String(id.to_string()));
  identifier.insert("type".to_string(), Value::String(wire_type.to_string()));
  Value::Object(identifier)
}

/// Flattens a JSON:API document into plain nested objects. Primary data (or
/// each element of it) becomes `{id, type, ...attributes}` with relationship
/// identifiers resolved recursively against `included`, then primary data.
/// `null` relationship data stays `null`; an identifier that resolves nowhere
/// passes through bare, and a reference cycle terminates with the bare
/// identifier instead of recursing forever.
pub(crate) fn denormalize(document: &Value) -> Value {
  let mut pool: Vec<&Value> = document
    .get("included")
    .and_then(Value::as_array)
    .map(|included| included.iter().collect())
    .unwrap_or_default();

  match document.get("data") {
    Some(Value::Array(items)) => {
      pool.extend(items.iter());
      Value::Array(
        items
          .iter()
          .map(|item| denormalize_resource(item, &pool, &mut Vec::new()))
          .collect(),
      )
    }
    Some(Value::Null) | None => Value::Null,
    Some(single) => {
      pool.push(single);
      denormalize_resource(single, &pool, &mut Vec::new())
    }
  }
}

fn denormalize_resource(resource: &Value, pool: &[&Value], trail: &mut Vec<(String, String)>) -> Value {
  let mut flat = Map::new();
  if let Some(id) = resource.get("id") {
    flat.insert("id".to_string(), id.clone());
  }
  if let Some(wire_type) = resource.get("type") {
    flat.insert("type".to_string(), wire_type.clone());
  }
  if let Some(attributes) = resource.get("attributes").and_then(Value::as_object) {
    for (name, value) in attributes {
      flat.insert(name.clone(), value.clone());
    }
  }

  if let Some(relationships) = resource.get("relationships").and_then(Value::as_object) {
    for (name, relationship) in relationships {
      match relationship.get("data") {
        Some(Value::Null) => {
          flat.insert(name.clone(), Value::Null);
        }
        Some(Value::Array(identifiers)) => {
          let resolved = identifiers
            .iter()
            .map(|identifier| resolve(identifier, pool, trail))
            .collect();
          flat.insert(name.clone(), Value::Array(resolved));
        }
        Some(identifier) => {
          flat.insert(name.clone(), resolve(identifier, pool, trail));
        }
        None => {}
      }
    }
  }

  Value::Object(flat)
}

fn resolve(identifier: &Value, pool: &[&Value], trail: &mut Vec<(String, String)>) -> Value {
  let Some((id, wire_type)) = identity(identifier) else {
    return identifier.clone();
  };

  let key = (id.to_string(), wire_type.to_string());
  if trail.contains(&key) {
    return bare_identifier(id, wire_type);
  }
  let Some(target) = pool.iter().find(|candidate| identity(candidate) == Some((id, wire_type))) else {
    return bare_identifier(id, wire_type);
  };

  trail.push(key);
  let resolved = denormalize_resource(target, pool, trail);
  trail.pop();
  resolved
}

/// Splits a flat resource object into JSON:API layout: identifier-shaped
/// member values become `relationships` entries, everything else (nulls
/// included) lands in `attributes`, and `type`/`id` stay top-level. The `id`
/// is carried over only when the input itself is identifier-shaped.
pub(crate) fn normalize(resource: &Value) -> Value {
  let mut attributes = Map::new();
  let mut relationships = Map::new();

  if let Some(members) = resource.as_object() {
    for (field, value) in members {
      if field == "type" || field == "id" {
        continue;
      }
      if is_resource_identifier(value) {
        let mut wrapper = Map::new();
        wrapper.insert("data".to_string(), value.clone());
        relationships.insert(field.clone(), Value::Object(wrapper));
      } else {
        attributes.insert(field.clone(), value.clone());
      }
    }
  }

  let mut normalized = Map::new();
  normalized.insert("type".to_string(), resource.get("type").cloned().unwrap_or(Value::Null));
  normalized.insert("attributes".to_string(), Value::Object(attributes));
  normalized.insert("relationships".to_string(), Value::Object(relationships));
  if is_resource_identifier(resource) {
    if let Some(id) = resource.get("id") {
      normalized.insert("id".to_string(), id.clone());
    }
  }

  Value::Object(normalized)
}
