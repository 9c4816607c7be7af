//! Account commands: login, register, reset-password

use colored::Colorize;

use super::prompt::{prompt_password, value_or_prompt};
use crate::interfaces::cli::CliError;
use crate::services::AuthContext;
use crate::utils::form_validator::{
    FieldError, LOGIN_SUCCESS, PasswordMatch, REGISTER_SUCCESS, RESET_FAILURE, RESET_SUCCESS,
    RegistrationInput, sign_up_error_field, validate_email, validate_registration,
};

pub async fn login(auth: &AuthContext, email: Option<String>) -> Result<(), CliError> {
    let email = value_or_prompt(email, "Email")?;
    let password = prompt_password("Password")?;

    let user = auth.sign_in(&email, &password).await?;
    println!("{} {}", "✓".bold().green(), LOGIN_SUCCESS);
    println!("  Signed in as {}", user.email.cyan());
    Ok(())
}

pub async fn register(
    auth: &AuthContext,
    email: Option<String>,
    name: Option<String>,
) -> Result<(), CliError> {
    let name = value_or_prompt(name, "Name")?;
    let email = value_or_prompt(email, "Email")?;
    let password = prompt_password("Password")?;
    let confirm = prompt_password("Confirm password")?;

    let errors = validate_registration(RegistrationInput {
        name: &name,
        email: &email,
        password: &password,
        confirm: &confirm,
    });
    let matched = PasswordMatch::check(&password, &confirm);
    if matched == PasswordMatch::Matches {
        println!("  {}", matched.message().green());
    }

    let messages: Vec<String> = [errors.name, errors.email, errors.password, errors.confirm]
        .into_iter()
        .flatten()
        .collect();
    if let Some(first) = messages.first() {
        for message in &messages {
            eprintln!("  {} {}", "✗".red().bold(), message);
        }
        return Err(CliError::InputError(first.clone()));
    }

    match auth.sign_up(&email, &password).await {
        Ok(user) => {
            println!("{} {}", "✓".bold().green(), REGISTER_SUCCESS);
            println!("  Welcome, {} ({})", name.cyan(), user.email);
            Ok(())
        }
        Err(e) => match sign_up_error_field(&e) {
            FieldError::Email(msg) => Err(CliError::InputError(msg)),
            FieldError::Password(msg) => Err(CliError::AuthError(msg)),
        },
    }
}

pub async fn reset_password(auth: &AuthContext, email: Option<String>) -> Result<(), CliError> {
    let email = value_or_prompt(email, "Email")?;
    validate_email(&email).map_err(|msg| CliError::InputError(msg.to_string()))?;

    match auth.send_password_reset(&email).await {
        Ok(()) => {
            println!("{} {}", "✓".bold().green(), RESET_SUCCESS);
            Ok(())
        }
        Err(e) => Err(CliError::AuthError(format!("{}: {}", RESET_FAILURE, e))),
    }
}
