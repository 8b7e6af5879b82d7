use crate::domain::user::entities::{User, UserName};
use crate::domain::user::passwords::PasswordDigest;
use crate::error::AppError;

/// Port de persistance des comptes. L'unicité du nom est garantie par
/// `insert` lui-même, pas seulement par un `exists` préalable.
pub trait UserRepository {
    fn exists(&self, username: &UserName) -> Result<bool, AppError>;
    fn insert(&self, username: &UserName, password: PasswordDigest) -> Result<User, AppError>;
    fn find_by_username(&self, username: &UserName) -> Result<Option<User>, AppError>;
}
