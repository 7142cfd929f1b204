use crate::entities::FieldErrors;
use thiserror::Error;
use tonic::{Code, Status};

/// Failure classification shared by the repository, the service and the
/// transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    StoreFailure,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::StoreFailure => "db_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    StoreFailure(String),
}

impl PetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PetError::Validation(_) => ErrorKind::Validation,
            PetError::NotFound(_) => ErrorKind::NotFound,
            PetError::StoreFailure(_) => ErrorKind::StoreFailure,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            PetError::Validation(detail)
            | PetError::NotFound(detail)
            | PetError::StoreFailure(detail) => detail,
        }
    }
}

// Every store-level failure is a db_error, including "no rows".
impl From<sqlx::Error> for PetError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreFailure(err.to_string())
    }
}

impl From<FieldErrors> for PetError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<PetError> for Status {
    fn from(err: PetError) -> Self {
        let code = match err.kind() {
            ErrorKind::Validation => Code::InvalidArgument,
            ErrorKind::NotFound => Code::NotFound,
            ErrorKind::StoreFailure => Code::Internal,
        };
        Status::new(code, format!("something went wrong: {}", err.detail()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlx_errors_are_store_failures() {
        let err = PetError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), ErrorKind::StoreFailure);
        assert_eq!(err.kind().as_str(), "db_error");

        let err = PetError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.kind(), ErrorKind::StoreFailure);
        assert!(err.detail().contains("closed"));
    }

    #[test]
    fn status_codes_follow_the_kind() {
        let status = Status::from(PetError::Validation("name: pet name is empty".into()));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("pet name is empty"));

        let status = Status::from(PetError::NotFound("pet not found".into()));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "something went wrong: pet not found");

        let status = Status::from(PetError::StoreFailure("database is locked".into()));
        assert_eq!(status.code(), Code::Internal);
    }
}
