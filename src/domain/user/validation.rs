use std::fmt::Display;

/// Règles syntaxiques d'inscription. Chaque règle violée est rapportée,
/// pas seulement la première.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFault {
    UsernameRequired,
    UsernameTooShort,
    UsernameTooLong,
    UsernameForbiddenCharacters,
    UserAlreadyExists,
    PasswordRequired,
    PasswordTooShort,
    PasswordTooLong,
}

impl Display for ValidationFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameRequired => write!(f, "Username is required"),
            Self::UsernameTooShort => write!(f, "Username must contain at least 4 characters"),
            Self::UsernameTooLong => write!(f, "Username must not exceed 12 characters"),
            Self::UsernameForbiddenCharacters => {
                write!(f, "Username can't contain special characters")
            }
            Self::UserAlreadyExists => write!(f, "User already exists"),
            Self::PasswordRequired => write!(f, "Password is required"),
            Self::PasswordTooShort => write!(f, "Password must contain at least 6 characters"),
            Self::PasswordTooLong => write!(f, "Password must not exceed 20 characters"),
        }
    }
}

/// Un nom vide ne rapporte que `UsernameRequired`, les autres règles ne
/// s'appliquent qu'à un nom non vide.
pub fn validate_username(raw_name: &str) -> Vec<ValidationFault> {
    let cleaned_name = raw_name.trim();
    let mut faults = Vec::new();

    if cleaned_name.is_empty() {
        faults.push(ValidationFault::UsernameRequired);
        return faults;
    }
    if cleaned_name.len() < 4 {
        faults.push(ValidationFault::UsernameTooShort);
    }
    if cleaned_name.len() > 12 {
        faults.push(ValidationFault::UsernameTooLong);
    }
    if !cleaned_name.chars().all(|c| c.is_ascii_alphanumeric()) {
        faults.push(ValidationFault::UsernameForbiddenCharacters);
    }

    faults
}

/// Le mot de passe n'est pas normalisé: les espaces comptent.
pub fn validate_password(raw_pw: &str) -> Vec<ValidationFault> {
    let mut faults = Vec::new();

    if raw_pw.is_empty() {
        faults.push(ValidationFault::PasswordRequired);
        return faults;
    }
    if raw_pw.len() < 6 {
        faults.push(ValidationFault::PasswordTooShort);
    }
    if raw_pw.len() > 20 {
        faults.push(ValidationFault::PasswordTooLong);
    }

    faults
}
