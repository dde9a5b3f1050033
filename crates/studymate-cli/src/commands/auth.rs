use clap::Subcommand;
use studymate_core::integrations::{AuthProvider, MockGoogleAuth, UserProfile};
use studymate_core::storage::Database;

const USER_KEY: &str = "google_user";

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with the simulated Google account
    SignIn,
    /// Sign out and forget the stored identity
    SignOut,
    /// Show the signed-in account, if any
    Status,
}

/// Rebuild the auth provider from the stored identity.
pub fn load_auth(db: &Database) -> MockGoogleAuth {
    let user = db
        .kv_get(USER_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str::<UserProfile>(&json).ok());
    MockGoogleAuth::with_user(user)
}

fn save_auth(db: &Database, auth: &MockGoogleAuth) -> Result<(), Box<dyn std::error::Error>> {
    match auth.current_user() {
        Some(user) => db.kv_set(USER_KEY, &serde_json::to_string(&user)?)?,
        None => db.kv_set(USER_KEY, "null")?,
    }
    Ok(())
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut auth = load_auth(&db);

    match action {
        AuthAction::SignIn => {
            let profile = auth.sign_in()?;
            save_auth(&db, &auth)?;
            println!("signed in as {} <{}>", profile.name, profile.email);
        }
        AuthAction::SignOut => {
            auth.sign_out();
            save_auth(&db, &auth)?;
            println!("signed out");
        }
        AuthAction::Status => match auth.current_user() {
            Some(user) => println!("signed in as {} <{}>", user.name, user.email),
            None => println!("not signed in"),
        },
    }

    Ok(())
}
