//! Session commands: sign in, sign out, show the current user.

use clementine_client::state::Storefront;

/// Sign in and persist the session to the configured session file.
///
/// # Errors
///
/// Returns an error if the sign-in is rejected or the backend is
/// unreachable.
pub async fn login(
    storefront: &Storefront,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = storefront.auth().login(username, password).await?;
    println!("Signed in as {}", response.username);
    Ok(())
}

/// Clear the persisted session.
pub fn logout(storefront: &Storefront) {
    storefront.auth().logout();
    println!("Signed out");
}

/// Show the signed-in user, if any.
pub fn whoami(storefront: &Storefront) {
    match storefront.auth().current_user() {
        Some(user) => {
            println!("{} (id {})", user.username, user.id);
            if let Some(name) = &user.real_name {
                println!("  name:  {name}");
            }
            if let Some(phone) = &user.phone {
                println!("  phone: {phone}");
            }
            if storefront.auth().is_token_expired() {
                println!("  token: expired, sign in again");
            }
        }
        None => println!("Not signed in"),
    }
}
