use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::schema::ApiSchema;

/// Memory-mapped schema document. Parsing borrows the mapped bytes, so the
/// loader stays alive for the duration of the parse.
pub(crate) struct SchemaLoader {
  file: AsyncMmapFile,
}

impl SchemaLoader {
  pub(crate) async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("cannot open schema file: {}", path.display()))?;

    Ok(Self { file })
  }

  pub(crate) fn parse(&self) -> anyhow::Result<ApiSchema> {
    serde_json::from_slice::<ApiSchema>(self.file.as_slice()).context("malformed schema document")
  }
}
