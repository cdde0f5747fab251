mod agents;
mod gemini;
mod gemini_upload;
mod home;
mod run_agent;

pub use agents::list_agents_handler;
pub use gemini::gemini_handler;
pub use gemini_upload::gemini_upload_handler;
pub use home::home_handler;
pub use run_agent::run_agent_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
