use std::{fmt, str::FromStr};

use thiserror::Error;

/// Durable storage key shared by every reader and writer of the preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class placed on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidValue(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unrecognised theme value: {0:?}")]
    InvalidValue(String),
    #[error("couldn't persist theme preference: {0}")]
    Storage(String),
}

/// Everything the controller needs from the page it runs in.
pub trait ThemeHost {
    fn read_preference(&self, key: &str) -> Option<String>;
    fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
    fn prefers_dark(&self) -> bool;
    fn set_dark_marker(&mut self, dark: bool);
}

/// Single owner of the light/dark mode for the page.
pub struct ThemeController<H: ThemeHost> {
    host: H,
    theme: Theme,
    applied: Option<Theme>,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Resolve the starting theme and apply it.
    pub fn init(host: H) -> Self {
        let theme = Self::initial(&host);
        let mut controller = Self {
            host,
            theme,
            applied: None,
        };
        controller.apply(theme);
        controller
    }

    /// Stored preference first, then the OS "prefers dark" signal.
    pub fn initial(host: &H) -> Theme {
        if let Some(stored) = host.read_preference(THEME_STORAGE_KEY) {
            match stored.parse::<Theme>() {
                Ok(theme) => {
                    log::info!("theme restored from storage: {theme}");
                    return theme;
                }
                Err(e) => log::warn!("ignoring stored theme: {e}"),
            }
        }
        let theme = if host.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        log::info!("theme taken from system preference: {theme}");
        theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Make `theme` current, mark the document and persist it.
    ///
    /// A repeat call with the already-applied theme changes nothing.
    pub fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        if self.applied == Some(theme) {
            return;
        }
        self.host.set_dark_marker(theme.is_dark());
        if let Err(e) = self
            .host
            .write_preference(THEME_STORAGE_KEY, theme.as_str())
        {
            log::warn!("{e}");
        }
        self.applied = Some(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        log::info!("theme toggled to {next}");
        self.apply(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryHost {
        storage: HashMap<String, String>,
        os_dark: bool,
        marker: bool,
        marker_writes: usize,
        storage_writes: usize,
        fail_writes: bool,
    }

    impl MemoryHost {
        fn stored(&self) -> Option<&str> {
            self.storage.get(THEME_STORAGE_KEY).map(String::as_str)
        }
    }

    impl ThemeHost for MemoryHost {
        fn read_preference(&self, key: &str) -> Option<String> {
            self.storage.get(key).cloned()
        }

        fn write_preference(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
            if self.fail_writes {
                return Err(ThemeError::Storage("quota exceeded".to_string()));
            }
            self.storage_writes += 1;
            self.storage.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn prefers_dark(&self) -> bool {
            self.os_dark
        }

        fn set_dark_marker(&mut self, dark: bool) {
            self.marker_writes += 1;
            self.marker = dark;
        }
    }

    fn host_with(stored: Option<&str>, os_dark: bool) -> MemoryHost {
        let mut host = MemoryHost {
            os_dark,
            ..Default::default()
        };
        if let Some(v) = stored {
            host.storage
                .insert(THEME_STORAGE_KEY.to_string(), v.to_string());
        }
        host
    }

    #[test]
    fn stored_value_beats_os_preference() {
        let ctl = ThemeController::init(host_with(Some("dark"), false));
        assert_eq!(ctl.theme(), Theme::Dark);
        assert!(ctl.host().marker);
    }

    #[test]
    fn os_preference_used_when_nothing_stored() {
        let ctl = ThemeController::init(host_with(None, true));
        assert_eq!(ctl.theme(), Theme::Dark);
        assert_eq!(ctl.host().stored(), Some("dark"));

        let ctl = ThemeController::init(host_with(None, false));
        assert_eq!(ctl.theme(), Theme::Light);
        assert!(!ctl.host().marker);
    }

    #[test]
    fn invalid_stored_value_falls_back_to_os() {
        let ctl = ThemeController::init(host_with(Some("sepia"), true));
        assert_eq!(ctl.theme(), Theme::Dark);
        assert_eq!(ctl.host().stored(), Some("dark"));
    }

    #[test]
    fn storage_and_marker_agree_after_every_toggle() {
        let mut ctl = ThemeController::init(host_with(Some("light"), true));
        for _ in 0..5 {
            let theme = ctl.toggle();
            let stored = ctl.host().stored().expect("theme should be stored");
            assert_eq!(stored.parse::<Theme>(), Ok(theme));
            assert_eq!(ctl.host().marker, theme.is_dark());
        }
        assert_eq!(ctl.theme(), Theme::Dark);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut ctl = ThemeController::init(host_with(None, false));
        let (markers, writes) = (ctl.host().marker_writes, ctl.host().storage_writes);
        ctl.apply(Theme::Light);
        ctl.apply(Theme::Light);
        assert_eq!(ctl.host().marker_writes, markers);
        assert_eq!(ctl.host().storage_writes, writes);
    }

    #[test]
    fn storage_failure_still_marks_document() {
        let mut host = host_with(None, false);
        host.fail_writes = true;
        let mut ctl = ThemeController::init(host);
        assert_eq!(ctl.toggle(), Theme::Dark);
        assert!(ctl.host().marker);
        assert_eq!(ctl.host().stored(), None);
    }

    #[test]
    fn theme_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ThemeError::InvalidValue("Dark".to_string()))
        );
    }
}
