// src/cli/app.rs
use crate::{
    application::auth_service::{AuthOutcome, AuthService, RegisterOutcome},
    domain::ports::config::AppConfig,
    error::AppError,
    infra::{file_system::FileSystemAdapter, user_repo::UserFileRepository},
};
use zeroize::Zeroize;

pub struct CustosCli {
    auth_service: AuthService<UserFileRepository<FileSystemAdapter>>,
}

impl CustosCli {
    pub fn new() -> Result<Self, AppError> {
        // Choix du mode (OFFICE/NOMADE) au premier lancement, puis configuration initiale
        let mode = crate::cli::mode::resolve_mode()?;
        crate::cli::mode::apply_mode_environment(mode)?;

        let config = AppConfig::new(None)?;
        let fs_adapter = FileSystemAdapter::new();
        let user_repository = UserFileRepository::new(fs_adapter, config);
        let auth_service = AuthService::new(user_repository);

        Ok(Self { auth_service })
    }

    pub fn run(&self) -> Result<(), AppError> {
        // Interface principale du CLI
        println!("=== Custos CLI 🔐 ===");
        println!("Inscription et connexion par nom d'utilisateur et mot de passe");

        loop {
            let selection = crate::cli::ui::main_menu()?;
            match selection.as_str() {
                "Inscription" => self.register()?,
                "Connexion" => self.login()?,
                "Quitter" => {
                    println!("Au revoir!");
                    break;
                }
                _ => println!("Option non reconnue"),
            }
        }

        Ok(())
    }

    fn register(&self) -> Result<(), AppError> {
        println!("\n=== Inscription ✍️ ===");

        let username = crate::cli::ui::username_prompt(
            "Nom d'utilisateur:",
            "4 à 12 caractères alphanumériques",
        )?;

        let mut password = crate::cli::ui::secure_password_prompt(
            "Mot de passe:",
            "6 à 20 caractères",
        )?;

        match self.auth_service.register(&username, &password) {
            Ok(RegisterOutcome::Registered { user }) => {
                println!("\n✅ Inscription réussie pour: {}", user.name);
            }
            Ok(RegisterOutcome::Rejected { faults }) => {
                println!("\n❌ Inscription refusée:");
                for fault in faults {
                    println!("  - {}", fault);
                }
            }
            Err(e) => {
                println!("\n❌ Erreur lors de l'inscription: {:?}", e);
            }
        }

        password.zeroize();

        Ok(())
    }

    fn login(&self) -> Result<(), AppError> {
        println!("\n=== Connexion 🔑 ===");

        let username = crate::cli::ui::username_prompt("Nom d'utilisateur:", "")?;

        let mut password =
            crate::cli::ui::secure_password_prompt("Mot de passe:", "Entrez votre mot de passe")?;

        match self.auth_service.authenticate(&username, &password) {
            Ok(AuthOutcome::Granted { user }) => {
                println!("\n✅ Connexion réussie pour: {}", user.name);
            }
            Ok(AuthOutcome::Denied { faults }) => {
                println!("\n❌ Connexion refusée:");
                for fault in faults {
                    println!("  - {}", fault);
                }
            }
            Err(e) => {
                println!("\n❌ Erreur lors de la connexion: {:?}", e);
            }
        }

        password.zeroize();

        Ok(())
    }
}
