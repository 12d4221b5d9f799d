use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::schema::OperationKind;

/// Placeholder tokens recognized in templates. One lexical form only;
/// substitution is literal substring replacement with no escaping and no
/// nesting, so unknown tokens survive into the output verbatim.
pub(crate) mod tokens {
  pub(crate) const RESOURCE_TYPE: &str = "##__RESOURCE_TYPE__##";
  pub(crate) const RESOURCE_CLASS: &str = "##__RESOURCE_CLASS__##";
  pub(crate) const OPERATION_NAME: &str = "##__OPERATION_NAME__##";
  pub(crate) const RESOURCE_REQUEST_TYPE: &str = "##__RESOURCE_REQUEST_TYPE__##";
  pub(crate) const RESOURCE_RESPONSE_TYPE: &str = "##__RESOURCE_RESPONSE_TYPE__##";
  pub(crate) const QUERY_MODELS: &str = "##__QUERY_MODELS__##";
  pub(crate) const MODEL_RESOURCE_INTERFACE: &str = "##__MODEL_RESOURCE_INTERFACE__##";
  pub(crate) const RESOURCE_OPERATIONS: &str = "##__RESOURCE_OPERATIONS__##";
  pub(crate) const EXPORT_RESOURCE_TYPES: &str = "##__EXPORT_RESOURCE_TYPES__##";
  pub(crate) const MODEL_INTERFACES: &str = "##__MODEL_INTERFACES__##";
  pub(crate) const RESOURCE_INTERFACES: &str = "##__RESOURCE_INTERFACES__##";
  pub(crate) const RELATIONSHIP_TYPES: &str = "##__RELATIONSHIP_TYPES__##";
  pub(crate) const IMPORT_RESOURCE_MODELS: &str = "##__IMPORT_RESOURCE_MODELS__##";
  pub(crate) const RESOURCE_MODEL: &str = "##__RESOURCE_MODEL__##";
  pub(crate) const EXTEND_TYPE: &str = "##__EXTEND_TYPE__##";
  pub(crate) const RESOURCE_MODEL_FIELDS: &str = "##__RESOURCE_MODEL_FIELDS__##";
  pub(crate) const RESOURCE_MODEL_RELATIONSHIPS: &str = "##__RESOURCE_MODEL_RELATIONSHIPS__##";
  pub(crate) const CURRENT_YEAR: &str = "##__CURRENT_YEAR__##";
  pub(crate) const CURRENT_DATE: &str = "##__CURRENT_DATE__##";
  pub(crate) const SCHEMA_VERSION: &str = "##__SCHEMA_VERSION__##";
  pub(crate) const TAB: &str = "##__TAB__##";
}

/// Every template the store knows about, keyed by file stem (`<name>.tpl`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum TemplateKind {
  Retrieve,
  List,
  Create,
  Update,
  Delete,
  Singleton,
  Resource,
  Model,
  ModelEmpty,
  Header,
}

impl TemplateKind {
  pub(crate) fn file_name(self) -> String {
    format!("{self}.tpl")
  }

  /// Structural templates every run needs. Operation templates are optional;
  /// an absent one downgrades the affected methods to a logged skip.
  pub(crate) const fn is_required(self) -> bool {
    matches!(
      self,
      TemplateKind::Resource | TemplateKind::Model | TemplateKind::ModelEmpty | TemplateKind::Header
    )
  }
}

impl From<OperationKind> for TemplateKind {
  fn from(kind: OperationKind) -> Self {
    match kind {
      OperationKind::Retrieve => TemplateKind::Retrieve,
      OperationKind::List => TemplateKind::List,
      OperationKind::Create => TemplateKind::Create,
      OperationKind::Update => TemplateKind::Update,
      OperationKind::Delete => TemplateKind::Delete,
    }
  }
}

/// Loaded template set. The structural templates are fields, present by
/// construction; per-operation templates are looked up at render time.
#[derive(Debug, Clone)]
pub(crate) struct TemplateSet {
  resource: String,
  model: String,
  model_empty: String,
  header: String,
  operations: BTreeMap<TemplateKind, String>,
}

impl TemplateSet {
  pub(crate) fn new(
    resource: impl Into<String>,
    model: impl Into<String>,
    model_empty: impl Into<String>,
    header: impl Into<String>,
  ) -> Self {
    Self {
      resource: resource.into(),
      model: model.into(),
      model_empty: model_empty.into(),
      header: header.into(),
      operations: BTreeMap::new(),
    }
  }

  /// Reads `<kind>.tpl` for every template kind under `dir`. Missing
  /// structural templates are fatal; missing operation templates are not.
  pub(crate) async fn load(dir: &Path) -> anyhow::Result<Self> {
    let resource = Self::read_required(dir, TemplateKind::Resource).await?;
    let model = Self::read_required(dir, TemplateKind::Model).await?;
    let model_empty = Self::read_required(dir, TemplateKind::ModelEmpty).await?;
    let header = Self::read_required(dir, TemplateKind::Header).await?;

    let mut set = Self::new(resource, model, model_empty, header);
    for kind in TemplateKind::iter().filter(|kind| !kind.is_required()) {
      let path = dir.join(kind.file_name());
      if tokio::fs::try_exists(&path).await? {
        let text = tokio::fs::read_to_string(&path)
          .await
          .with_context(|| format!("cannot read template: {}", path.display()))?;
        set.insert_operation(kind, text);
      }
    }

    Ok(set)
  }

  async fn read_required(dir: &Path, kind: TemplateKind) -> anyhow::Result<String> {
    let path = dir.join(kind.file_name());
    tokio::fs::read_to_string(&path)
      .await
      .with_context(|| format!("missing required template: {}", path.display()))
  }

  pub(crate) fn insert_operation(&mut self, kind: TemplateKind, text: impl Into<String>) {
    self.operations.insert(kind, text.into());
  }

  pub(crate) fn resource(&self) -> &str {
    &self.resource
  }

  pub(crate) fn model(&self) -> &str {
    &self.model
  }

  pub(crate) fn model_empty(&self) -> &str {
    &self.model_empty
  }

  pub(crate) fn header(&self) -> &str {
    &self.header
  }

  pub(crate) fn operation(&self, kind: TemplateKind) -> Option<&str> {
    self.operations.get(&kind).map(String::as_str)
  }
}
