//! Account commands and sign-in for league commands

use crate::{
    config::AppConfig,
    storage::{StatsDatabase, User},
    CompanionError, Result,
};

/// Handle `user add`
pub fn handle_add_user(db: &mut StatsDatabase, username: &str, password: Option<&str>) -> Result<()> {
    let password = password.ok_or(CompanionError::MissingField { field: "password" })?;
    let user = db.create_user(username, password)?;
    println!("✓ Created user {} as id {}", user.username, user.id);
    Ok(())
}

/// Handle `user verify`
pub fn handle_verify_user(config: &AppConfig, db: &StatsDatabase) -> Result<()> {
    let user = login(config, db)?;
    println!("✓ Signed in as {}", user.username);
    Ok(())
}

/// Resolve the configured `--user` / `--password` pair to an account.
pub fn login(config: &AppConfig, db: &StatsDatabase) -> Result<User> {
    let username = config
        .user
        .as_deref()
        .ok_or(CompanionError::MissingField { field: "user" })?;
    let password = config
        .password
        .as_deref()
        .ok_or(CompanionError::MissingField { field: "password" })?;
    db.authenticate(username, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user: Option<&str>, password: Option<&str>) -> AppConfig {
        AppConfig::from_lookup(|key| {
            (key == crate::config::DB_PATH_ENV_VAR).then(|| "unused.db".to_string())
        })
        .unwrap()
        .with_credentials(user.map(String::from), password.map(String::from))
    }

    #[test]
    fn test_add_user_requires_password() {
        let mut db = StatsDatabase::new_in_memory().unwrap();
        assert!(matches!(
            handle_add_user(&mut db, "sam", None),
            Err(CompanionError::MissingField { field: "password" })
        ));
        handle_add_user(&mut db, "sam", Some("pw")).unwrap();
        assert!(db.find_user_by_username("sam").unwrap().is_some());
    }

    #[test]
    fn test_login() {
        let mut db = StatsDatabase::new_in_memory().unwrap();
        let sam = db.create_user("sam", "pw").unwrap();

        let user = login(&config(Some("sam"), Some("pw")), &db).unwrap();
        assert_eq!(user.id, sam.id);
        assert!(handle_verify_user(&config(Some("sam"), Some("pw")), &db).is_ok());

        assert!(matches!(
            login(&config(Some("sam"), Some("nope")), &db),
            Err(CompanionError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&config(Some("nobody"), Some("pw")), &db),
            Err(CompanionError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&config(None, Some("pw")), &db),
            Err(CompanionError::MissingField { field: "user" })
        ));
        assert!(matches!(
            login(&config(Some("sam"), None), &db),
            Err(CompanionError::MissingField { field: "password" })
        ));
    }
}
