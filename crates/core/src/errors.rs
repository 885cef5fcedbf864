use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Slot time parse failure: {0}")]
    SlotTimeParse(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Manager not initialized")]
    Uninitialized,

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
