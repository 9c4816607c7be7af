//! 交互式输入辅助

use std::io::{self, BufRead, IsTerminal, Write};

use crate::interfaces::cli::CliError;

/// Use the given value or ask for it on stdin
pub(super) fn value_or_prompt(value: Option<String>, label: &str) -> Result<String, CliError> {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(value.trim().to_string());
    }

    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim().to_string();
    if line.is_empty() {
        return Err(CliError::InputError(format!("{} is required", label)));
    }
    Ok(line)
}

/// 读取密码（不回显）
pub(super) fn prompt_password(label: &str) -> Result<String, CliError> {
    if !io::stdin().is_terminal() {
        return Err(CliError::InputError(
            "Password prompt requires an interactive terminal".to_string(),
        ));
    }

    print!("{}: ", label);
    io::stdout().flush()?;

    rpassword::read_password()
        .map_err(|e| CliError::InputError(format!("Failed to read password: {}", e)))
}
