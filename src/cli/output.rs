//! Output formatting for CLI

use anyhow::Result;

use crate::user::User;

/// Format a user as a single `User ID: ..., Name: ..., Email: ..., Password: ...` line
pub fn format_user(user: &User) -> String {
    format!(
        "User ID: {}, Name: {}, Email: {}, Password: {}",
        user.id(),
        user.name(),
        user.email(),
        user.password()
    )
}

/// Print one user as text or JSON
pub fn print_user(user: &User, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(user)?);
    } else {
        println!("{}", format_user(user));
    }
    Ok(())
}

/// Print users as text lines or a JSON array
pub fn print_users(users: &[User], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(users)?);
    } else {
        for user in users {
            println!("{}", format_user(user));
        }
    }
    Ok(())
}

/// Print a separator line
pub fn print_separator() {
    println!("---");
}
