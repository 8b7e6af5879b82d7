use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("User error: {0}")]
    User(ErrUser),
    #[error("Path error: {0}")]
    Path(ErrPath),
    #[error("Store error: {0}")]
    Store(ErrStore),
    #[error("Argon2 error: {0}")]
    Argon2(ErrArgon2),
    #[error("Inquire error: {0}")]
    Inquire(ErrInquire),
}

#[derive(Debug, Error)]
pub enum ErrUser {
    #[error("user already exists")]
    AlreadyExist,
}

#[derive(Debug, Error)]
pub enum ErrPath {
    #[error("invalid path")]
    InvalidPath,
    #[error("access denied")]
    AccessDenied,
    #[error("read error")]
    ReadError,
    #[error("write error")]
    WriteError,
    #[error("directory creation failed")]
    DirectoryCreationFailed,
    #[error("directory not found")]
    DirectoryNotFound,
}

#[derive(Debug, Error)]
pub enum ErrStore {
    #[error("borsh serialization failed")]
    BorshError,
    #[error("credential table is corrupted")]
    CorruptedTable,
    #[error("credential table lock is poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum ErrArgon2 {
    #[error("password hash error: {0}")]
    PasswordHashError(argon2::password_hash::Error),
}

#[derive(Debug, Error)]
pub enum ErrInquire {
    #[error("{0}")]
    InquireError(inquire::InquireError),
}
