//! Interactive prompts for values not given on the command line

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::error::Result;

/// Use `value` if given, otherwise ask for it
pub fn username(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Use `value` if given, otherwise ask for it without echo
pub fn password(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?)
}

/// Like [`password`], but asks twice when prompting
pub fn new_password(value: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?)
}
