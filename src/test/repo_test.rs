#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            ports::{config::AppConfig, repository::UserRepository},
            user::{entities::UserName, passwords::PasswordDigest},
        },
        error::{AppError, ErrStore, ErrUser},
        infra::{file_system::FileSystemAdapter, user_repo::UserFileRepository},
    };

    fn setup_repo() -> (UserFileRepository<FileSystemAdapter>, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config = AppConfig::new(Some(temp_dir.path().to_owned())).expect("Failed to create config");
        let repository = UserFileRepository::new(FileSystemAdapter::new(), config);
        (repository, temp_dir)
    }

    fn digest(plain: &str) -> PasswordDigest {
        PasswordDigest::from_plain(plain).expect("hash should succeed")
    }

    #[test]
    fn test_insert_assigns_ascending_ids() {
        let (repository, _temp_dir) = setup_repo();

        let alice = repository
            .insert(&UserName::new("alice1"), digest("secret1"))
            .expect("insert alice");
        let bob = repository
            .insert(&UserName::new("bob123"), digest("secret2"))
            .expect("insert bob");

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[test]
    fn test_exists_and_find_roundtrip() {
        let (repository, _temp_dir) = setup_repo();
        let name = UserName::new("alice1");

        assert!(!repository.exists(&name).expect("exists"));
        assert!(repository.find_by_username(&name).expect("find").is_none());

        repository.insert(&name, digest("secret1")).expect("insert");

        assert!(repository.exists(&name).expect("exists"));
        let loaded = repository
            .find_by_username(&name)
            .expect("find")
            .expect("user should be present");
        assert_eq!(loaded.name, name);
        assert!(loaded.password.verify("secret1"));
    }

    #[test]
    fn test_username_lookup_is_case_sensitive() {
        let (repository, _temp_dir) = setup_repo();

        repository
            .insert(&UserName::new("Alice1"), digest("secret1"))
            .expect("insert");

        assert!(!repository.exists(&UserName::new("alice1")).expect("exists"));
        assert!(
            repository
                .find_by_username(&UserName::new("alice1"))
                .expect("find")
                .is_none()
        );
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let (repository, _temp_dir) = setup_repo();
        let name = UserName::new("alice1");

        repository.insert(&name, digest("secret1")).expect("insert");
        let duplicate = repository.insert(&name, digest("autre-mdp"));

        assert!(matches!(
            duplicate,
            Err(AppError::User(ErrUser::AlreadyExist))
        ));

        // Le premier enregistrement reste intact.
        let loaded = repository
            .find_by_username(&name)
            .expect("find")
            .expect("user should be present");
        assert!(loaded.password.verify("secret1"));
    }

    #[test]
    fn test_table_survives_repository_reload() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config = AppConfig::new(Some(temp_dir.path().to_owned())).expect("Failed to create config");

        let repository = UserFileRepository::new(FileSystemAdapter::new(), config.clone());
        repository
            .insert(&UserName::new("alice1"), digest("secret1"))
            .expect("insert");
        drop(repository);

        let reloaded = UserFileRepository::new(FileSystemAdapter::new(), config);
        assert!(reloaded.exists(&UserName::new("alice1")).expect("exists"));

        // Le compteur d'identifiants reprend où il s'était arrêté.
        let bob = reloaded
            .insert(&UserName::new("bob123"), digest("secret2"))
            .expect("insert");
        assert_eq!(bob.id, 2);
    }

    #[test]
    fn test_corrupted_table_surfaces_store_error() {
        let (repository, temp_dir) = setup_repo();
        let table_path = temp_dir.path().join("Custos").join("credentials.cst");
        std::fs::write(&table_path, b"pas une table").expect("write garbage");

        let result = repository.exists(&UserName::new("alice1"));
        assert!(matches!(
            result,
            Err(AppError::Store(ErrStore::CorruptedTable))
        ));
    }
}
