//! User interaction for the quickstart.
//!
//! Responsibilities:
//! - Abstract terminal prompts behind [`Prompter`] so the setup sequence can be
//!   driven by scripted answers in tests.
//! - Collect the connection answers (host, port, username, password).
//!
//! Invariants:
//! - Port 8000 (Splunk Web) is never accepted as the management port.
//! - The password is never empty and never leaves a `SecretString`.

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};
use secrecy::{ExposeSecret, SecretString};
use sst_config::constants::{DEFAULT_HOST, DEFAULT_SPLUNK_PORT, DEFAULT_USERNAME, SPLUNK_WEB_PORT};
use sst_config::{ConnectionParams, Settings};

pub const HOST_PROMPT: &str = "Enter your Splunk IP or hostname";
pub const PORT_PROMPT: &str = "Enter your Splunk management port (usually 8089)";
pub const USERNAME_PROMPT: &str = "Enter your Splunk username";
pub const PASSWORD_PROMPT: &str = "Enter your Splunk password";

/// Source of operator answers.
pub trait Prompter {
    /// Free-text answer; an empty answer yields `default` when one is given.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Hidden answer.
    fn password(&mut self, prompt: &str) -> Result<SecretString>;

    /// Yes/no question, "no" unless answered otherwise.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Block until the operator presses enter.
    fn pause(&mut self, prompt: &str) -> Result<()>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn password(&mut self, prompt: &str) -> Result<SecretString> {
        let password = Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?;
        Ok(SecretString::new(password.into()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    fn pause(&mut self, prompt: &str) -> Result<()> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(())
    }
}

/// Ask for the management connection, using `settings` for defaults.
///
/// A password from the environment skips its prompt.
pub fn prompt_connection(
    prompter: &mut dyn Prompter,
    settings: &Settings,
) -> Result<ConnectionParams> {
    let host = prompter.input(HOST_PROMPT, Some(settings.host.as_deref().unwrap_or(DEFAULT_HOST)))?;
    let host = non_empty_or(&host, DEFAULT_HOST);

    let port = prompt_port(prompter, settings.port.unwrap_or(DEFAULT_SPLUNK_PORT))?;

    let username = prompter.input(
        USERNAME_PROMPT,
        Some(settings.username.as_deref().unwrap_or(DEFAULT_USERNAME)),
    )?;
    let username = non_empty_or(&username, DEFAULT_USERNAME);

    let password = match &settings.password {
        Some(password) => password.clone(),
        None => prompt_password(prompter)?,
    };

    Ok(settings.connection(&host, port, &username, password))
}

fn non_empty_or(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

fn prompt_port(prompter: &mut dyn Prompter, default: u16) -> Result<u16> {
    let default_text = default.to_string();
    loop {
        let answer = prompter.input(PORT_PROMPT, Some(&default_text))?;
        let answer = answer.trim();
        let port = if answer.is_empty() {
            default
        } else {
            match answer.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => {
                    println!("'{answer}' is not a valid port number.");
                    continue;
                }
            }
        };

        if port == SPLUNK_WEB_PORT {
            println!(
                "INFO: Port {SPLUNK_WEB_PORT} is usually the Splunk Web port used to access the UI, \
                 not the management API port. To check, see which port your Universal \
                 Forwarders send to."
            );
            continue;
        }
        return Ok(port);
    }
}

fn prompt_password(prompter: &mut dyn Prompter) -> Result<SecretString> {
    loop {
        let password = prompter.password(PASSWORD_PROMPT)?;
        if !password.expose_secret().is_empty() {
            return Ok(password);
        }
    }
}

/// Answers replayed in order; running out of answers is an error.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    /// Every prompt shown, in order.
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted answer for prompt: {prompt}"))
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next(prompt)?;
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer,
        })
    }

    fn password(&mut self, prompt: &str) -> Result<SecretString> {
        Ok(SecretString::new(self.next(prompt)?.into()))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.next(prompt)?;
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn pause(&mut self, prompt: &str) -> Result<()> {
        self.next(prompt).map(drop)
    }
}
