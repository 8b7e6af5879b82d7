use borsh::{BorshDeserialize, BorshSerialize};
use std::fmt::{Debug, Display};

use crate::domain::user::passwords::PasswordDigest;

impl Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user #{}: {}", self.id, self.name)
    }
}

#[derive(Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct User {
    pub id: u64,
    pub name: UserName,
    pub password: PasswordDigest,
}

impl User {
    pub fn new(id: u64, name: UserName, password: PasswordDigest) -> Self {
        Self { id, name, password }
    }
}

/// Nom d'utilisateur normalisé (espaces retirés). Les règles de politique
/// vivent dans `validation`, pas ici: la casse est significative.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, BorshSerialize, BorshDeserialize, Debug)]
pub struct UserName {
    pub name: String,
}

impl UserName {
    pub fn new(raw_name: &str) -> Self {
        Self {
            name: raw_name.trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
