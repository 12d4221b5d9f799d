pub mod generate;
pub mod list;
pub mod transform;

pub use generate::{GenerateConfig, generate_resources};
pub use list::list_resources;
pub use transform::transform_document;
