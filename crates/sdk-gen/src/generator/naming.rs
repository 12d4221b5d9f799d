//! Identifier derivations for generated modules.
//!
//! Every function here is total: unknown or irregular tokens pass through
//! best-effort, already-canonical input comes back unchanged, and nothing
//! returns an error. The schema's wire-types are the only source of truth;
//! every other name in the output is derived from them.

use inflections::Inflect;
use strum::Display;

/// Exported class name for a resource: PascalCase plural of the wire-type.
///
/// ```text
/// external_gateways -> ExternalGateways
/// orders            -> Orders
/// ```
pub(crate) fn class_name(wire_type: &str) -> String {
  cruet::to_plural(&wire_type.to_pascal_case())
}

/// Base interface name for a resource: the singular of its class name.
///
/// ```text
/// ExternalGateways -> ExternalGateway
/// Addresses        -> Address
/// ```
pub(crate) fn interface_name(class_name: &str) -> String {
  cruet::to_singular(class_name)
}

/// Interface name for a relationship target wire-type, singularized before
/// casing so plural markers never leak into the type name.
///
/// ```text
/// payment_methods -> PaymentMethod
/// ```
pub(crate) fn relationship_target(target: &str) -> String {
  cruet::to_singular(target).to_pascal_case()
}

/// Module file stem for a model name: snake_case plural. Used both for
/// import paths and for the wire-type literal in relationship aliases.
///
/// ```text
/// PaymentMethod -> payment_methods
/// ```
pub(crate) fn module_path(model: &str) -> String {
  cruet::to_plural(model).to_snake_case()
}

/// Mutation-variant suffix carried by component names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum CudSuffix {
  Update,
  Create,
  Delete,
}

impl CudSuffix {
  const ALL: [CudSuffix; 3] = [CudSuffix::Update, CudSuffix::Create, CudSuffix::Delete];

  pub(crate) const fn as_str(self) -> &'static str {
    match self {
      CudSuffix::Update => "Update",
      CudSuffix::Create => "Create",
      CudSuffix::Delete => "Delete",
    }
  }
}

/// Detects the CUD suffix of a component name, if any. First match wins;
/// a bare model name yields `None`.
pub(crate) fn cud_suffix(name: &str) -> Option<CudSuffix> {
  CudSuffix::ALL.into_iter().find(|suffix| name.ends_with(suffix.as_str()))
}

/// The suffix as rendered into templates: empty for a bare model name.
pub(crate) fn cud_suffix_str(name: &str) -> &'static str {
  cud_suffix(name).map_or("", CudSuffix::as_str)
}
