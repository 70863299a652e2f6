//! Payload command implementation.

use anyhow::Result;
use keysheet_catalog::KeyCommand;
use std::path::Path;

use crate::formatters::output_result;

/// Print the JSON command the key relay accessory expects for `keys`.
pub fn run(keys: &[String], delay: Option<u64>, output_file: Option<&Path>) -> Result<()> {
    let mut command = KeyCommand::new(keys)?;
    if let Some(delay) = delay {
        command = command.with_delay(delay);
    }
    let payload = String::from_utf8(command.to_payload()?)?;
    output_result(&payload, output_file)
}
