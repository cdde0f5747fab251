mod agent;
mod document;

pub use agent::{AgentCatalog, AgentDefinition};
pub use document::{Document, DocumentFormat};
