/// Session persistence
///
/// Saves the last selected filter and slider values as JSON under the user's
/// config directory so the app reopens where it left off. Best-effort: any
/// read or parse failure falls back to defaults, any write failure is only
/// logged.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::filter::FilterKind;
use crate::state::params::FilterParams;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct StoredSession {
    pub filter: FilterKind,
    pub params: FilterParams,
}

/// Path of the session file:
/// - Linux: ~/.config/snapfilter/session.json
/// - macOS: ~/Library/Application Support/snapfilter/session.json
/// - Windows: %APPDATA%\snapfilter\session.json
fn session_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("snapfilter");
    path.push("session.json");
    Some(path)
}

/// Load the stored session, or defaults if there is none (or it is corrupt).
pub fn load() -> StoredSession {
    let Some(path) = session_path() else {
        return StoredSession::default();
    };

    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => StoredSession::default(),
    }
}

/// Persist the current session. Failures are logged, never surfaced.
pub fn save(filter: FilterKind, params: FilterParams) {
    let Some(path) = session_path() else {
        return;
    };

    let stored = StoredSession { filter, params };
    let json = match serde_json::to_string_pretty(&stored) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("⚠️  Could not serialize session: {}", e);
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("⚠️  Could not create config directory: {}", e);
            return;
        }
    }

    if let Err(e) = fs::write(&path, json) {
        eprintln!("⚠️  Could not write session file: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_session_round_trip() {
        let stored = StoredSession {
            filter: FilterKind::GaussianBlur,
            params: FilterParams {
                intensity: 0.8,
                radius: 0.3,
            },
        };

        let json = serde_json::to_string(&stored).unwrap();
        let restored: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(stored, restored);
    }

    #[test]
    fn test_corrupt_json_falls_back_to_defaults() {
        let restored: StoredSession =
            serde_json::from_str("{not json").unwrap_or_default();
        assert_eq!(restored, StoredSession::default());
    }
}
