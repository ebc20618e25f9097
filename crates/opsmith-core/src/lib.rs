pub mod error;
pub mod list;
pub mod playbook;
pub mod task;

pub use error::OpsmithError;
pub use playbook::{
    Complexity, FileMap, GeneratedPlaybook, GenerationRequest, PlaybookMeta, Structure,
};
pub use task::{ParsedTask, TaskDetails, TaskType};
