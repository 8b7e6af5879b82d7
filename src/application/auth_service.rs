use std::fmt::Display;

use log::info;

use crate::{
    domain::{
        ports::repository::UserRepository,
        user::{
            entities::{User, UserName},
            passwords::PasswordDigest,
            validation::{ValidationFault, validate_password, validate_username},
        },
    },
    error::{AppError, ErrUser},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered { user: User },
    Rejected { faults: Vec<ValidationFault> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted { user: User },
    Denied { faults: Vec<AuthFault> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFault {
    MissingCredentials,
    UserNotFound,
    InvalidCredentials,
}

impl Display for AuthFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "Please provide proper username & password"),
            Self::UserNotFound => write!(f, "User does not exist"),
            Self::InvalidCredentials => write!(f, "Invalid username / password"),
        }
    }
}

pub struct AuthService<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Les fautes s'accumulent toutes dans une seule liste, l'existence du
    /// compte comprise. Rien n'est écrit tant que la liste n'est pas vide.
    pub fn register(&self, username: &str, raw_pw: &str) -> Result<RegisterOutcome, AppError> {
        let name = UserName::new(username);

        let mut faults = validate_username(username);
        if self.repository.exists(&name)? {
            faults.push(ValidationFault::UserAlreadyExists);
        }
        faults.extend(validate_password(raw_pw));

        if !faults.is_empty() {
            return Ok(RegisterOutcome::Rejected { faults });
        }

        let digest = PasswordDigest::from_plain(raw_pw)?;
        match self.repository.insert(&name, digest) {
            Ok(user) => {
                info!("Nouvel utilisateur enregistré: {}", user.name);
                Ok(RegisterOutcome::Registered { user })
            }
            // Course perdue entre `exists` et `insert`: même réponse que si
            // le compte avait été vu au premier contrôle.
            Err(AppError::User(ErrUser::AlreadyExist)) => Ok(RegisterOutcome::Rejected {
                faults: vec![ValidationFault::UserAlreadyExists],
            }),
            Err(e) => Err(e),
        }
    }

    pub fn authenticate(&self, username: &str, raw_pw: &str) -> Result<AuthOutcome, AppError> {
        let name = UserName::new(username);

        if name.is_empty() || raw_pw.is_empty() {
            return Ok(AuthOutcome::Denied {
                faults: vec![AuthFault::MissingCredentials],
            });
        }

        let user = match self.repository.find_by_username(&name)? {
            Some(user) => user,
            None => {
                return Ok(AuthOutcome::Denied {
                    faults: vec![AuthFault::UserNotFound],
                });
            }
        };

        if !user.password.verify(raw_pw) {
            return Ok(AuthOutcome::Denied {
                faults: vec![AuthFault::InvalidCredentials],
            });
        }

        info!("Utilisateur connecté: {}", user.name);
        Ok(AuthOutcome::Granted { user })
    }
}
