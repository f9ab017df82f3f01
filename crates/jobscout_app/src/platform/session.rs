//! Persistent session store: user profile and theme flag.
//!
//! The original client kept these under the secure-store keys `userProfile`
//! and `theme`; here they are fields of one RON file written atomically.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use jobscout_core::{Theme, UserProfile};
use jobscout_logging::{app_info, app_warn};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".jobscout_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedProfile {
    name: String,
    surname: String,
    location: String,
    categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSession {
    #[serde(default)]
    user_profile: Option<PersistedProfile>,
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Loads the persisted session. A missing file is a fresh install; an
    /// unreadable or unparsable file falls back to defaults with a warning.
    pub(crate) fn load(&self) -> (Option<UserProfile>, Theme) {
        let path = self.dir.join(SESSION_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return (None, Theme::default());
            }
            Err(err) => {
                app_warn!("Failed to read session from {:?}: {}", path, err);
                return (None, Theme::default());
            }
        };

        let session: PersistedSession = match ron::from_str(&content) {
            Ok(session) => session,
            Err(err) => {
                app_warn!("Failed to parse session from {:?}: {}", path, err);
                return (None, Theme::default());
            }
        };

        let profile = session.user_profile.map(|profile| UserProfile {
            name: profile.name,
            surname: profile.surname,
            location: profile.location,
            categories: profile.categories,
        });
        let theme = match session.theme.as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        };
        app_info!("Loaded persisted session from {:?}", path);
        (profile, theme)
    }

    pub(crate) fn save_profile(&self, profile: &UserProfile) {
        let mut session = self.read_or_default();
        session.user_profile = Some(PersistedProfile {
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            location: profile.location.clone(),
            categories: profile.categories.clone(),
        });
        self.write(session);
    }

    pub(crate) fn save_theme(&self, theme: Theme) {
        let mut session = self.read_or_default();
        session.theme = Some(
            match theme {
                Theme::Light => "light",
                Theme::Dark => "dark",
            }
            .to_string(),
        );
        self.write(session);
    }

    fn read_or_default(&self) -> PersistedSession {
        let path = self.dir.join(SESSION_FILENAME);
        fs::read_to_string(&path)
            .ok()
            .and_then(|content| ron::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn write(&self, session: PersistedSession) {
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&session, pretty) {
            Ok(text) => text,
            Err(err) => {
                app_warn!("Failed to serialize session: {}", err);
                return;
            }
        };
        if let Err(err) = atomic_write(&self.dir, SESSION_FILENAME, &content) {
            app_warn!("Failed to write session to {:?}: {}", self.dir, err);
        }
    }
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file
/// then renaming, so a crash never leaves a half-written session.
fn atomic_write(dir: &PathBuf, filename: &str, content: &str) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let target = dir.join(filename);
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing file if present to keep determinism.
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Anna".to_string(),
            surname: "Berzina".to_string(),
            location: "Riga".to_string(),
            categories: vec!["Vadība".to_string(), "Pakalpojumi".to_string()],
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());

        let (loaded, theme) = store.load();
        assert_eq!(loaded, None);
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn profile_and_theme_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());

        store.save_profile(&profile());
        store.save_theme(Theme::Dark);

        let (loaded, theme) = store.load();
        assert_eq!(loaded, Some(profile()));
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn saving_theme_keeps_stored_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());

        store.save_profile(&profile());
        store.save_theme(Theme::Dark);
        store.save_theme(Theme::Light);

        let (loaded, theme) = store.load();
        assert_eq!(loaded, Some(profile()));
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILENAME), "not ron at all").unwrap();
        let store = SessionStore::new(dir.path().to_path_buf());

        let (loaded, theme) = store.load();
        assert_eq!(loaded, None);
        assert_eq!(theme, Theme::Light);
    }
}
