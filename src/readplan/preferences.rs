//! # Theme Preference
//!
//! Persists the light/dark display preference. When nothing is stored, the host's
//! ambient color scheme decides; without a usable signal the preference is light.
//! A stored value that is unreadable or anything but dark means light; the ambient
//! scheme is never consulted once something has been stored.

use crate::error::{ReadplanError, Result};
use crate::model::ThemePreference;
use crate::store::{KeyValueStore, THEME_KEY};
use tracing::{debug, warn};

/// Source of the host's ambient color scheme, if it has one.
pub type AmbientDetector = fn() -> Option<ThemePreference>;

/// Asks the desktop environment (via `dark-light`) which scheme is active.
pub fn ambient_theme() -> Option<ThemePreference> {
    if matches!(dark_light::detect(), dark_light::Mode::Dark) {
        Some(ThemePreference::Dark)
    } else {
        Some(ThemePreference::Light)
    }
}

/// Detector that never has an opinion; used when ambient detection is disabled.
pub fn no_ambient_theme() -> Option<ThemePreference> {
    None
}

pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
    theme: ThemePreference,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn load(store: S) -> Self {
        Self::load_with(store, ambient_theme)
    }

    pub fn load_with(store: S, ambient: AmbientDetector) -> Self {
        let theme = match read_stored(&store) {
            Stored::Theme(theme) => theme,
            Stored::Nothing => ambient().unwrap_or_default(),
            Stored::Unusable => ThemePreference::Light,
        };
        debug!(%theme, "theme preference loaded");
        Self { store, theme }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    /// Sets and persists the preference. The in-memory value changes even when the
    /// write fails; the error is returned so callers can report it.
    pub fn save(&mut self, theme: ThemePreference) -> Result<()> {
        self.theme = theme;
        let json = serde_json::to_string(&theme).map_err(ReadplanError::Serialization)?;
        self.store.set(THEME_KEY, &json).inspect_err(|e| {
            warn!(error = %e, %theme, "could not persist theme preference");
        })
    }

    pub fn toggle(&mut self) -> Result<ThemePreference> {
        let next = self.theme.toggled();
        self.save(next)?;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

enum Stored {
    Nothing,
    Theme(ThemePreference),
    Unusable,
}

fn read_stored<S: KeyValueStore>(store: &S) -> Stored {
    let raw = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Stored::Nothing,
        Err(e) => {
            warn!(error = %e, "theme preference unreadable");
            return Stored::Unusable;
        }
    };
    // Both the JSON form (`"dark"`) and a bare word (`dark`) are accepted.
    let parsed = serde_json::from_str::<ThemePreference>(&raw)
        .ok()
        .or_else(|| raw.parse::<ThemePreference>().ok());
    match parsed {
        Some(theme) => Stored::Theme(theme),
        None => {
            warn!(value = %raw.trim(), "theme preference corrupt, using light");
            Stored::Unusable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{ReadOnlyStore, UnreadableStore};
    use crate::store::memory::InMemoryStore;

    fn ambient_dark() -> Option<ThemePreference> {
        Some(ThemePreference::Dark)
    }

    #[test]
    fn defaults_to_light_without_signal() {
        let prefs = PreferenceStore::load_with(InMemoryStore::new(), no_ambient_theme);
        assert_eq!(prefs.theme(), ThemePreference::Light);
    }

    #[test]
    fn ambient_signal_used_when_nothing_stored() {
        let prefs = PreferenceStore::load_with(InMemoryStore::new(), ambient_dark);
        assert_eq!(prefs.theme(), ThemePreference::Dark);
    }

    #[test]
    fn stored_value_beats_ambient_signal() {
        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "\"light\"").unwrap();
        let prefs = PreferenceStore::load_with(store, ambient_dark);
        assert_eq!(prefs.theme(), ThemePreference::Light);
    }

    #[test]
    fn save_then_reload() {
        let mut prefs = PreferenceStore::load_with(InMemoryStore::new(), no_ambient_theme);
        prefs.save(ThemePreference::Dark).unwrap();

        let reloaded = PreferenceStore::load_with(prefs.into_store(), no_ambient_theme);
        assert_eq!(reloaded.theme(), ThemePreference::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut prefs = PreferenceStore::load_with(InMemoryStore::new(), no_ambient_theme);
        assert_eq!(prefs.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(prefs.toggle().unwrap(), ThemePreference::Light);

        let store = prefs.into_store();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("\"light\""));
    }

    #[test]
    fn corrupt_value_is_light_even_with_dark_ambient() {
        for raw in ["\"sepia\"", "{}", "", "42"] {
            let mut store = InMemoryStore::new();
            store.set(THEME_KEY, raw).unwrap();
            let prefs = PreferenceStore::load_with(store, ambient_dark);
            assert_eq!(prefs.theme(), ThemePreference::Light, "stored {:?}", raw);
        }
    }

    #[test]
    fn bare_words_are_accepted() {
        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();
        let prefs = PreferenceStore::load_with(store, ambient_dark);
        assert_eq!(prefs.theme(), ThemePreference::Light);

        let mut store = InMemoryStore::new();
        store.set(THEME_KEY, "dark\n").unwrap();
        let prefs = PreferenceStore::load_with(store, no_ambient_theme);
        assert_eq!(prefs.theme(), ThemePreference::Dark);
    }

    #[test]
    fn unreadable_store_is_light() {
        let prefs = PreferenceStore::load_with(UnreadableStore, ambient_dark);
        assert_eq!(prefs.theme(), ThemePreference::Light);
    }

    #[test]
    fn failed_write_still_switches_theme() {
        let store = ReadOnlyStore::with_value(THEME_KEY, "\"light\"");
        let mut prefs = PreferenceStore::load_with(store, no_ambient_theme);
        assert!(prefs.save(ThemePreference::Dark).is_err());
        assert_eq!(prefs.theme(), ThemePreference::Dark);
    }
}
