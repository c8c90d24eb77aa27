use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TaskzError {
    #[error("Task not found: {0}")]
    TaskNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, TaskzError>;
