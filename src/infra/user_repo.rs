use std::sync::Mutex;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::{
    domain::{
        ports::{config::AppConfig, fs::FileSystem, repository::UserRepository},
        user::{
            entities::{User, UserName},
            passwords::PasswordDigest,
        },
    },
    error::{AppError, ErrStore, ErrUser},
};

/// Table des comptes persistée en un seul fichier borsh. `next_id` est
/// stocké avec la table: les identifiants montent sans réemploi.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct CredentialTable {
    pub next_id: u64,
    pub records: Vec<User>,
}

impl CredentialTable {
    fn empty() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

pub struct UserFileRepository<F: FileSystem> {
    fs: F,
    config: AppConfig,
    // Sérialise les lecture-modification-écriture de la table: ferme la
    // course entre le contrôle d'existence et l'insertion.
    table_lock: Mutex<()>,
}

impl<F: FileSystem> UserFileRepository<F> {
    pub fn new(fs: F, config: AppConfig) -> Self {
        Self {
            fs,
            config,
            table_lock: Mutex::new(()),
        }
    }

    fn table_path(&self) -> String {
        self.config.credentials_path().to_string_lossy().into_owned()
    }

    fn load_table(&self) -> Result<CredentialTable, AppError> {
        let path = self.table_path();
        if !self.fs.file_exists(&path) {
            return Ok(CredentialTable::empty());
        }

        let bytes = self.fs.read_file(&path)?;
        CredentialTable::try_from_slice(&bytes)
            .map_err(|_| AppError::Store(ErrStore::CorruptedTable))
    }

    fn store_table(&self, table: &CredentialTable) -> Result<(), AppError> {
        let bytes = borsh::to_vec(table).map_err(|_| AppError::Store(ErrStore::BorshError))?;
        self.fs.write_file(&self.table_path(), &bytes)
    }
}

impl<F: FileSystem> UserRepository for UserFileRepository<F> {
    fn exists(&self, username: &UserName) -> Result<bool, AppError> {
        let _guard = self
            .table_lock
            .lock()
            .map_err(|_| AppError::Store(ErrStore::LockPoisoned))?;

        let table = self.load_table()?;
        Ok(table.records.iter().any(|r| r.name == *username))
    }

    fn insert(&self, username: &UserName, password: PasswordDigest) -> Result<User, AppError> {
        let _guard = self
            .table_lock
            .lock()
            .map_err(|_| AppError::Store(ErrStore::LockPoisoned))?;

        let mut table = self.load_table()?;
        if table.records.iter().any(|r| r.name == *username) {
            return Err(AppError::User(ErrUser::AlreadyExist));
        }

        let user = User::new(table.next_id, username.clone(), password);
        table.next_id += 1;
        table.records.push(user.clone());
        self.store_table(&table)?;

        Ok(user)
    }

    fn find_by_username(&self, username: &UserName) -> Result<Option<User>, AppError> {
        let _guard = self
            .table_lock
            .lock()
            .map_err(|_| AppError::Store(ErrStore::LockPoisoned))?;

        let table = self.load_table()?;
        Ok(table.records.into_iter().find(|r| r.name == *username))
    }
}
