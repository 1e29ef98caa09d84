use bevy::camera::ClearColorConfig;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_FILE_PATH: &str = "./settings.yaml";

const LIGHT_BACKGROUND: Color = Color::srgb(0.8, 0.84, 0.9);
const DARK_BACKGROUND: Color = Color::srgb(0.06, 0.07, 0.1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceSettings {
    pub dark_mode: bool,
    pub show_notifications: bool,
}

impl Default for InterfaceSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_notifications: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsIoError {
    #[error("failed to read settings file: {0}")]
    Read(std::io::Error),
    #[error("failed to write settings file: {0}")]
    Write(std::io::Error),
    #[error("failed to decode YAML settings: {0}")]
    Deserialize(serde_yaml::Error),
    #[error("failed to encode YAML settings: {0}")]
    Serialize(serde_yaml::Error),
}

#[derive(Resource, Clone)]
pub struct SettingsResource {
    pub current: InterfaceSettings,
    path: PathBuf,
}

impl SettingsResource {
    pub fn new(current: InterfaceSettings) -> Self {
        Self {
            current,
            path: PathBuf::from(SETTINGS_FILE_PATH),
        }
    }

    pub fn save_to_disk(&self) -> Result<(), SettingsIoError> {
        write_settings_to_path(&self.current, &self.path)
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_dark_mode_with_key, apply_clear_color));
    }
}

pub fn load_settings_or_default() -> InterfaceSettings {
    let path = Path::new(SETTINGS_FILE_PATH);

    if !path.exists() {
        return InterfaceSettings::default();
    }

    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!(
                "Failed to load settings from '{}': {}. Falling back to defaults.",
                SETTINGS_FILE_PATH, error
            );
            InterfaceSettings::default()
        }
    }
}

pub fn ensure_settings_file_exists(settings: &InterfaceSettings) -> Result<(), SettingsIoError> {
    let path = Path::new(SETTINGS_FILE_PATH);
    if path.exists() {
        return Ok(());
    }

    write_settings_to_path(settings, path)
}

fn load_settings_from_path(path: &Path) -> Result<InterfaceSettings, SettingsIoError> {
    let raw = fs::read_to_string(path).map_err(SettingsIoError::Read)?;
    serde_yaml::from_str::<InterfaceSettings>(&raw).map_err(SettingsIoError::Deserialize)
}

fn write_settings_to_path(
    settings: &InterfaceSettings,
    path: &Path,
) -> Result<(), SettingsIoError> {
    let encoded = serde_yaml::to_string(settings).map_err(SettingsIoError::Serialize)?;
    fs::write(path, encoded).map_err(SettingsIoError::Write)
}

fn toggle_dark_mode_with_key(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<SettingsResource>,
) {
    if !keys.just_pressed(KeyCode::F2) {
        return;
    }

    settings.current.dark_mode = !settings.current.dark_mode;
    if let Err(error) = settings.save_to_disk() {
        warn!(
            "Failed to save settings file '{}': {}",
            SETTINGS_FILE_PATH, error
        );
    }
}

fn apply_clear_color(
    settings: Res<SettingsResource>,
    mut cameras: Query<&mut Camera, With<Camera3d>>,
) {
    if !settings.is_changed() {
        return;
    }
    let background = if settings.current.dark_mode {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    };
    for mut camera in &mut cameras {
        camera.clear_color = ClearColorConfig::Custom(background);
    }
}
