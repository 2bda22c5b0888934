// Persistent UI State
//
// The terminal equivalent of the web client's persisted store: one JSON
// file with five slices (session, theme, organization, favorites, date
// range). Every mutation is written back immediately; a missing or
// unreadable file falls back to defaults.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use leadboard_core::domain::contact::demo_contacts;
use leadboard_core::domain::{DateRange, RangePreset};
use leadboard_sdk::UserProfile;
use serde::{Deserialize, Serialize};

const STATE_PATH_ENV: &str = "LEADBOARD_STATE_PATH";
const DEFAULT_ORG_NAME: &str = "Organization";

/// Signed-in session: the bearer token plus the cached profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: UserProfile,
}

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// A pinned sidebar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub hearted: bool,
}

/// Active dashboard window: a preset tab plus the explicit range the
/// `custom` tab falls back to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRangeSlice {
    pub active_tab: RangePreset,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Default for DateRangeSlice {
    fn default() -> Self {
        let today = Utc::now().date_naive();
        Self {
            active_tab: RangePreset::OneDay,
            from: today,
            to: today,
        }
    }
}

impl DateRangeSlice {
    /// Switch tabs. Presets recompute the window against `today`;
    /// `custom` keeps the stored range.
    pub fn set_tab(&mut self, tab: RangePreset, today: NaiveDate) {
        self.active_tab = tab;
        if let Some(range) = tab.resolve(today) {
            self.from = range.start.unwrap_or(today);
            self.to = range.end.unwrap_or(today);
        }
    }

    /// Store an explicit window; the active tab flips to `custom`.
    pub fn set_custom(&mut self, from: NaiveDate, to: NaiveDate) {
        self.active_tab = RangePreset::Custom;
        self.from = from;
        self.to = to;
    }

    /// The window to query the API with.
    pub fn effective(&self) -> DateRange {
        DateRange::new(Some(self.from), Some(self.to))
    }
}

/// Everything the client remembers between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub session: Option<Session>,
    pub theme: Theme,
    pub organization: String,
    pub favorites: Vec<FavoriteItem>,
    pub date_range: DateRangeSlice,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            session: None,
            theme: Theme::default(),
            organization: DEFAULT_ORG_NAME.to_string(),
            favorites: default_favorites(),
            date_range: DateRangeSlice::default(),
        }
    }
}

/// The sidebar ships with the demo contacts pinned, hearts off.
fn default_favorites() -> Vec<FavoriteItem> {
    demo_contacts()
        .into_iter()
        .map(|contact| FavoriteItem {
            name: contact.name,
            logo: None,
            hearted: false,
        })
        .collect()
}

/// On-disk store: loads once, saves after every mutation
pub struct Store {
    path: PathBuf,
    state: UiState,
}

impl Store {
    /// Resolve the state file path: env override first, then the
    /// platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(STATE_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = directories::ProjectDirs::from("", "", "leadboard")
            .context("Could not determine a config directory")?;
        Ok(dirs.config_dir().join("state.json"))
    }

    /// Load from `path`, falling back to defaults when the file is
    /// missing or does not parse.
    pub fn load(path: PathBuf) -> Self {
        let state = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self { path, state }
    }

    pub fn open() -> Result<Self> {
        Ok(Self::load(Self::default_path()?))
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Could not write {}", self.path.display()))?;

        Ok(())
    }

    // --- session slice ---

    pub fn set_session(&mut self, session: Session) -> Result<()> {
        self.state.session = Some(session);
        self.save()
    }

    pub fn clear_session(&mut self) -> Result<()> {
        self.state.session = None;
        self.save()
    }

    /// Refresh the cached profile without touching the token.
    pub fn update_profile(&mut self, user: UserProfile) -> Result<()> {
        if let Some(session) = self.state.session.as_mut() {
            session.user = user;
        }
        self.save()
    }

    // --- theme slice ---

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.state.theme = theme;
        self.save()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.state.theme.toggled();
        self.state.theme = next;
        self.save()?;
        Ok(next)
    }

    // --- organization slice ---

    /// Rename the organization. The name is trimmed; empty input falls
    /// back to the default.
    pub fn set_organization(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        self.state.organization = if name.is_empty() {
            DEFAULT_ORG_NAME.to_string()
        } else {
            name.to_string()
        };
        self.save()
    }

    // --- favorites slice ---

    /// Toggle the heart on one entry. Returns false (and changes
    /// nothing) for an out-of-range index.
    pub fn toggle_heart(&mut self, index: usize) -> Result<bool> {
        let Some(item) = self.state.favorites.get_mut(index) else {
            return Ok(false);
        };

        item.hearted = !item.hearted;
        self.save()?;
        Ok(true)
    }

    /// Move an entry to a new position. Returns false (and changes
    /// nothing) when either index is out of range.
    pub fn move_favorite(&mut self, from: usize, to: usize) -> Result<bool> {
        let len = self.state.favorites.len();
        if from >= len || to >= len {
            return Ok(false);
        }
        if from == to {
            return Ok(true);
        }

        let item = self.state.favorites.remove(from);
        self.state.favorites.insert(to, item);
        self.save()?;
        Ok(true)
    }

    // --- date range slice ---

    pub fn set_range_tab(&mut self, tab: RangePreset, today: NaiveDate) -> Result<()> {
        self.state.date_range.set_tab(tab, today);
        self.save()
    }

    pub fn set_custom_range(&mut self, from: NaiveDate, to: NaiveDate) -> Result<()> {
        self.state.date_range.set_custom(from, to);
        self.save()
    }
}
