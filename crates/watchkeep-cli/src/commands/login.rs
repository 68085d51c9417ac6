use crate::commands::api_client;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::{Input, Password};
use tracing::debug;
use watchkeep_config::{CredentialStore, PathManager, Session};

pub async fn run_login(username: Option<String>, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let (_config, client) = api_client(&paths)?;

    let mut store = CredentialStore::new(paths.credentials_file());
    store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let username = match username {
        Some(u) => u,
        None => {
            let mut input = Input::<String>::new().with_prompt("Username");
            if let Some(last) = store.get_username() {
                input = input.default(last.clone());
            }
            input
                .interact()
                .map_err(|e| eyre!("Failed to read input: {}", e))?
        }
    };
    if username.trim().is_empty() {
        output.error("Username cannot be empty");
        return Ok(());
    }

    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| eyre!("Failed to read password: {}", e))?;
    if password.is_empty() {
        output.error("Password cannot be empty");
        return Ok(());
    }

    let spinner = output.spinner("Logging in...");
    let result = client.login(&username, &password).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match result {
        Ok(token) => {
            store.set_api_token(token);
            store.set_username(username.clone());
            store
                .save()
                .map_err(|e| eyre!("Failed to save credentials: {}", e))?;
            output.success(format!("Logged in as {}", username));
            output.info("Browse the catalog with `watchkeep movies`");
        }
        Err(e) => {
            // Deliberately generic; the underlying detail stays at debug level
            debug!(error = %e, "login rejected");
            output.error("Invalid username or password");
        }
    }

    Ok(())
}

pub fn run_logout(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut store = CredentialStore::new(paths.credentials_file());
    store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;

    let mut session = Session::restore(&store);
    if !session.is_authenticated() {
        output.info("Not logged in");
        return Ok(());
    }

    session.logout();
    store.clear_api_token();
    store
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;
    output.success("Logged out");
    Ok(())
}
