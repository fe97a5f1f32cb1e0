//! Theme preference persistence.
//!
//! The preference is a one-word file in the app's config directory, read
//! once at startup and rewritten on every toggle.

use std::path::PathBuf;

use egui::ThemePreference;
use log::{error, info};

use crate::runtime::Runtime;

const THEME_FILE: &str = "theme.txt";
const APP_DIR: &str = "devfolio";

pub struct ThemeHandler<R: Runtime> {
    runtime: R,
    theme_file: Option<PathBuf>,
    fallback_theme: ThemePreference,
}

impl<R: Runtime> ThemeHandler<R> {
    pub fn new(runtime: R) -> Self {
        let theme_file = runtime
            .config_dir()
            .map(|dir| dir.join(APP_DIR).join(THEME_FILE));

        Self {
            runtime,
            theme_file,
            fallback_theme: ThemePreference::Dark,
        }
    }

    pub fn load(&self) -> ThemePreference {
        let Some(path) = &self.theme_file else {
            return self.fallback_theme;
        };

        if !self.runtime.exists(path) {
            return self.fallback_theme;
        }

        match self.runtime.read_to_string(path) {
            Ok(contents) => match deserialize_theme(contents.trim()) {
                Some(theme) => theme,
                None => {
                    error!(
                        "Could not deserialize theme. Using fallback {:?} instead",
                        self.fallback_theme
                    );
                    self.fallback_theme
                }
            },
            Err(e) => {
                error!(
                    "Could not read {} file: {:?}. Using fallback {:?} instead",
                    THEME_FILE, e, self.fallback_theme
                );
                self.fallback_theme
            }
        }
    }

    pub fn save(&self, theme: ThemePreference) {
        let Some(path) = &self.theme_file else {
            error!("No config directory; {:?} theme change not saved", theme);
            return;
        };

        let result = path
            .parent()
            .map(|dir| self.runtime.create_dir_all(dir))
            .unwrap_or(Ok(()))
            .and_then(|_| self.runtime.write(path, serialize_theme(&theme).as_bytes()));

        match result {
            Ok(_) => info!("Saved {:?} theme change to {}", theme, THEME_FILE),
            Err(e) => error!("Could not save {:?} theme change: {:?}", theme, e),
        }
    }
}

fn serialize_theme(theme: &ThemePreference) -> String {
    match theme {
        ThemePreference::Light => "light",
        _ => "dark",
    }
    .to_owned()
}

fn deserialize_theme(serialized_theme: &str) -> Option<ThemePreference> {
    match serialized_theme {
        "dark" => Some(ThemePreference::Dark),
        "light" => Some(ThemePreference::Light),
        _ => None,
    }
}
