use thiserror::Error;

#[derive(Debug, Error)]
pub enum LossServiceError {
    /// Данные отклонены до обращения к хранилищу
    #[error("{0}")]
    Validation(String),

    #[error("Pérdida no encontrada: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
