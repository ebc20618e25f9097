//! AI-backed playbook generation: backend trait and implementations, the
//! generation pipeline, and the parsers for what the service returns.

pub mod backend;
mod error;
mod pipeline;
mod response;

pub use backend::gemini::GeminiBackend;
pub use backend::mock::MockBackend;
pub use backend::TextBackend;
pub use error::GenError;
pub use pipeline::{generate_playbook, generate_tasks};
pub use response::{parse_multi_file_response, parse_task_response, REQUIRED_FILES};
