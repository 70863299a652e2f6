//! Centralized constants for the keysheet workspace.
//!
//! Wire field names, environment variable names, and relay defaults live here
//! so that the normalizer, the audit tooling, and the CLI agree on them.

// =============================================================================
// Document Wire Format
// =============================================================================

/// Field names accepted for a program's display name, in lookup order.
pub const PROGRAM_NAME_FIELDS: &[&str] = &["appName", "name"];

/// Field names accepted for a group's display name, in lookup order.
pub const GROUP_NAME_FIELDS: &[&str] = &["groupName", "name"];

/// Field names accepted for the per-entry disabled flag, in lookup order.
///
/// `disEnable` reads as "disabled": `true` hides the entry.
pub const DISABLED_FIELDS: &[&str] = &["disEnable", "disabled"];

/// Object keys under which a wrapped document keeps its program array.
pub const WRAPPER_KEYS: &[&str] = &["apps", "programs"];

// =============================================================================
// Document Library
// =============================================================================

/// Extension of shortcut documents discovered in a library directory.
pub const DOCUMENT_EXTENSION: &str = "json";

/// File-name suffix of JSON schema files that share a library directory.
pub const SCHEMA_FILE_SUFFIX: &str = "schema.json";

// =============================================================================
// Environment
// =============================================================================

/// Path of the shortcut document to load.
pub const CONFIG_PATH_ENV: &str = "KEYSHEET_CONFIG_PATH";

/// Directory holding per-application shortcut documents.
pub const LIBRARY_DIR_ENV: &str = "KEYSHEET_LIBRARY_DIR";

// =============================================================================
// Key Relay
// =============================================================================

/// Delay between key events requested from the relay accessory, in milliseconds.
pub const DEFAULT_KEY_DELAY_MS: u64 = 50;

/// Separator used when a key combination is rendered as plain text.
pub const KEY_COMBO_SEPARATOR: &str = " + ";
