use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct GenerationStats {
  pub(crate) resources_generated: usize,
  pub(crate) operations_rendered: usize,
  pub(crate) operations_skipped: usize,
  pub(crate) interfaces_rendered: usize,
  pub(crate) relationship_aliases: usize,
  pub(crate) imports_rendered: usize,
  pub(crate) warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub(crate) fn record_resource(&mut self) {
    self.resources_generated += 1;
  }

  pub(crate) fn record_operation(&mut self) {
    self.operations_rendered += 1;
  }

  pub(crate) fn record_interface(&mut self) {
    self.interfaces_rendered += 1;
  }

  pub(crate) fn record_relationship_aliases(&mut self, count: usize) {
    self.relationship_aliases += count;
  }

  pub(crate) fn record_imports(&mut self, count: usize) {
    self.imports_rendered += count;
  }

  pub(crate) fn record_warning(&mut self, warning: GenerationWarning) {
    if warning.is_skipped_operation() {
      self.operations_skipped += 1;
    }
    self.warnings.push(warning);
  }
}

/// Resource-local conditions that downgrade to a skip instead of failing the
/// run. Collected during synthesis and printed by the command logger.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub(crate) enum GenerationWarning {
  #[strum(to_string = "Unknown operation '{operation}' on resource '{resource}'")]
  UnsupportedOperation { resource: String, operation: String },
  #[strum(to_string = "No template for operation '{operation}' on resource '{resource}'")]
  MissingOperationTemplate { resource: String, operation: String },
  #[strum(to_string = "Resource '{resource}' references undeclared component '{component}'")]
  MissingComponent { resource: String, component: String },
}

impl GenerationWarning {
  pub(crate) fn is_skipped_operation(&self) -> bool {
    matches!(
      self,
      Self::UnsupportedOperation { .. } | Self::MissingOperationTemplate { .. }
    )
  }
}
