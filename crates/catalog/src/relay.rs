//! Key relay codec for the wireless keyboard accessory.
//!
//! Responsibilities:
//! - Name the accessory's GATT service and characteristics.
//! - Encode key combinations as the accessory's JSON command payload.
//! - Decode status notifications (battery level, status text).
//! - Choose between relaying a combination and falling back to clipboard text.
//!
//! Does NOT handle:
//! - Bluetooth discovery, pairing, or connection management; transports
//!   implement `KeySink`.
//! - Clipboard access; the fallback text is returned to the caller.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::constants::{DEFAULT_KEY_DELAY_MS, KEY_COMBO_SEPARATOR};

/// GATT service exposed by the accessory.
pub const SERVICE_UUID: Uuid = Uuid::from_u128(0x12345678_1234_1234_1234_123456789ABC);
/// Characteristic that receives `KeyCommand` payloads.
pub const SHORTCUT_CHARACTERISTIC_UUID: Uuid = Uuid::from_u128(0x12345678_1234_1234_1234_123456789ABD);
/// Characteristic that notifies `DeviceStatus` payloads.
pub const STATUS_CHARACTERISTIC_UUID: Uuid = Uuid::from_u128(0x12345678_1234_1234_1234_123456789ABE);
/// Characteristic used during pairing.
pub const PAIRING_CHARACTERISTIC_UUID: Uuid = Uuid::from_u128(0x12345678_1234_1234_1234_123456789ABF);

/// Errors that can occur while relaying a key combination.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Key combination is empty")]
    EmptyCombination,

    #[error("Failed to encode key command: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Key relay transport failed: {0}")]
    Transport(String),
}

/// Command written to the shortcut characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyCommand {
    pub keys: Vec<String>,
    #[serde(rename = "keyCount")]
    pub key_count: usize,
    /// Delay between key events, in milliseconds.
    pub delay: u64,
}

impl KeyCommand {
    /// Build a command for `keys` with the default delay.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::EmptyCombination` if `keys` is empty.
    pub fn new(keys: &[String]) -> Result<Self, RelayError> {
        if keys.is_empty() {
            return Err(RelayError::EmptyCombination);
        }
        Ok(Self {
            keys: keys.to_vec(),
            key_count: keys.len(),
            delay: DEFAULT_KEY_DELAY_MS,
        })
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay = delay_ms;
        self
    }

    /// UTF-8 JSON bytes as written to the characteristic.
    pub fn to_payload(&self) -> Result<Vec<u8>, RelayError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// The combination as plain text, e.g. `Ctrl + C`.
    pub fn combo_text(&self) -> String {
        self.keys.join(KEY_COMBO_SEPARATOR)
    }
}

/// Status notification from the accessory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceStatus {
    pub battery: Option<i64>,
    pub status: Option<String>,
}

impl DeviceStatus {
    /// Decode a notification payload.
    ///
    /// Fields with an unexpected type are ignored. Returns None when the
    /// payload is not a JSON object.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        let value: serde_json::Value = match serde_json::from_slice(payload) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring undecodable status payload");
                return None;
            }
        };
        let object = value.as_object()?;
        Some(Self {
            battery: object.get("battery").and_then(serde_json::Value::as_i64),
            status: object
                .get("status")
                .and_then(serde_json::Value::as_str)
                .map(String::from),
        })
    }
}

/// A transport that can deliver key commands to the accessory.
pub trait KeySink {
    fn is_connected(&self) -> bool;

    fn send(&mut self, command: &KeyCommand) -> Result<(), RelayError>;
}

/// What happened to a relayed key combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// Sent to the accessory.
    Sent(KeyCommand),
    /// The accessory is not connected; this text should go to the clipboard.
    Copied(String),
}

/// Send `keys` through `sink` when it is connected, otherwise return the
/// clipboard text for the combination.
///
/// # Errors
///
/// Returns `RelayError::EmptyCombination` for an empty combination, and any
/// error the sink reports while sending.
pub fn relay_or_copy<S: KeySink + ?Sized>(sink: &mut S, keys: &[String]) -> Result<Dispatched, RelayError> {
    let command = KeyCommand::new(keys)?;
    if !sink.is_connected() {
        tracing::debug!(keys = %command.combo_text(), "Relay not connected, copying combination");
        return Ok(Dispatched::Copied(command.combo_text()));
    }
    sink.send(&command)?;
    tracing::info!(keys = %command.combo_text(), "Sent key combination");
    Ok(Dispatched::Sent(command))
}
