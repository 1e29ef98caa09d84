use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::app::plugins::build_bevy_plugins;
use crate::character::CharacterPlugin;
use crate::notifications::NotificationPlugin;
use crate::scene::BoardScenePlugin;
use crate::settings::{self, InterfaceSettings, SettingsPlugin, SettingsResource};

pub fn run_client_app() {
    let startup_settings = load_startup_settings();
    let mut app = App::new();
    configure_client_app(&mut app, &startup_settings);
    app.run();
}

pub fn configure_client_app(app: &mut App, startup_settings: &InterfaceSettings) {
    app.insert_resource(SettingsResource::new(startup_settings.clone()))
        .add_plugins(build_bevy_plugins("Party Board"))
        .add_plugins(EguiPlugin::default())
        .add_plugins(SettingsPlugin)
        .add_plugins(CharacterPlugin)
        .add_plugins(NotificationPlugin)
        .add_plugins(BoardScenePlugin);
}

fn load_startup_settings() -> InterfaceSettings {
    let startup_settings = settings::load_settings_or_default();
    if let Err(error) = settings::ensure_settings_file_exists(&startup_settings) {
        eprintln!(
            "Failed to ensure startup settings file '{}': {}",
            settings::SETTINGS_FILE_PATH,
            error
        );
    }
    startup_settings
}
