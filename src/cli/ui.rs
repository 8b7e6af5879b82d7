use crate::error::{AppError, ErrInquire};
use inquire::{Password, Select, Text};

pub fn main_menu() -> Result<String, AppError> {
    let options = vec![
        "Inscription".to_string(),
        "Connexion".to_string(),
        "Quitter".to_string(),
    ];

    Select::new("Choisissez une option:", options)
        .prompt()
        .map_err(|e| AppError::Inquire(ErrInquire::InquireError(e)))
}

pub fn username_prompt(message: &str, help: &str) -> Result<String, AppError> {
    let prompt = if help.is_empty() {
        Text::new(message)
    } else {
        Text::new(message).with_help_message(help)
    };

    prompt
        .prompt()
        .map_err(|e| AppError::Inquire(ErrInquire::InquireError(e)))
}

pub fn secure_password_prompt(message: &str, help: &str) -> Result<String, AppError> {
    Password::new(message)
        .with_help_message(help)
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .map_err(|e| AppError::Inquire(ErrInquire::InquireError(e)))
}
