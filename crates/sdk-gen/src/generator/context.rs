use chrono::{Datelike, NaiveDate};

use crate::generator::templates::tokens;
use crate::schema::ApiSchema;

/// Per-run inputs threaded explicitly through synthesis: the schema version
/// written into generated headers and the date stamped next to it. Tests pin
/// the date so output stays byte-identical across runs.
#[derive(Debug, Clone)]
pub(crate) struct GenContext {
  schema_version: String,
  today: NaiveDate,
}

impl GenContext {
  pub(crate) fn new(schema_version: impl Into<String>, today: NaiveDate) -> Self {
    Self {
      schema_version: schema_version.into(),
      today,
    }
  }

  pub(crate) fn for_schema(schema: &ApiSchema) -> Self {
    Self::new(schema.version.clone(), chrono::Local::now().date_naive())
  }

  pub(crate) fn schema_version(&self) -> &str {
    &self.schema_version
  }

  /// Replaces the year, date (`DD-MM-YYYY`), and schema version stamp tokens
  /// wherever they appear in the given template text.
  pub(crate) fn stamp(&self, text: &str) -> String {
    text
      .replace(tokens::CURRENT_YEAR, &self.today.year().to_string())
      .replace(tokens::CURRENT_DATE, &self.today.format("%d-%m-%Y").to_string())
      .replace(tokens::SCHEMA_VERSION, &self.schema_version)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn fixed_context() -> GenContext {
    GenContext::new("2.3.0", NaiveDate::from_ymd_opt(2021, 7, 22).unwrap())
  }

  #[test]
  fn stamps_all_tokens() {
    let text = "schema ##__SCHEMA_VERSION__## on ##__CURRENT_DATE__## (c) ##__CURRENT_YEAR__##";
    assert_eq!(fixed_context().stamp(text), "schema 2.3.0 on 22-07-2021 (c) 2021");
  }

  #[test]
  fn date_components_are_zero_padded() {
    let ctx = GenContext::new("1.0", NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(ctx.stamp("##__CURRENT_DATE__##"), "05-03-2024");
  }

  #[test]
  fn text_without_tokens_passes_through() {
    let text = "nothing to see here";
    assert_eq!(fixed_context().stamp(text), text);
  }
}
