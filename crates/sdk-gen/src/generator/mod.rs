pub(crate) mod components;
pub(crate) mod context;
pub(crate) mod metrics;
pub(crate) mod naming;
pub(crate) mod operations;
pub(crate) mod orchestrator;
pub(crate) mod patcher;
pub(crate) mod resources;
pub(crate) mod templates;

#[cfg(test)]
mod tests;
