//! Preset gallery: one of every character preset on a plinth row, with a
//! small egui legend. Run with `cargo run --bin character_viewer`.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use rand::Rng;

use client::app::plugins::build_bevy_plugins;
use client::character::{CharacterFactory, CharacterPlugin, CharacterPreset};
use client::notifications::NotificationPlugin;
use client::settings::{InterfaceSettings, SettingsPlugin, SettingsResource};

fn main() {
    App::new()
        .insert_resource(SettingsResource::new(InterfaceSettings::default()))
        .add_plugins(build_bevy_plugins("Party Board - Character Viewer"))
        .add_plugins(EguiPlugin::default())
        .add_plugins(SettingsPlugin)
        .add_plugins(CharacterPlugin)
        .add_plugins(NotificationPlugin)
        .add_systems(Startup, (setup_stage, spawn_gallery))
        .add_systems(EguiPrimaryContextPass, draw_legend)
        .run();
}

fn setup_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Tonemapping::None,
        Transform::from_xyz(0.0, 2.0, 7.5).looking_at(Vec3::new(0.0, 0.8, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        Transform::from_xyz(3.0, 8.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(16.0, 0.1, 5.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.4, 0.42, 0.47),
            perceptual_roughness: 0.95,
            ..Default::default()
        })),
        Transform::from_xyz(0.0, -0.15, 0.0),
    ));
}

fn spawn_gallery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let count = CharacterPreset::ALL.len();
    for (i, preset) in CharacterPreset::ALL.iter().enumerate() {
        // Random team color per plinth so profiles desynchronize.
        let color = format!("#{:06X}", rng.gen_range(0x202020..=0xDFDFDF_u32));
        let x = (i as f32 - (count as f32 - 1.0) / 2.0) * 1.5;
        if let Err(error) = CharacterFactory::spawn(
            &mut commands,
            &mut meshes,
            &mut materials,
            &color,
            &preset.overrides(),
            Vec3::new(x, 0.0, 0.0),
        ) {
            warn!("Failed to spawn preset {}: {error}", preset.display_name());
        }
    }
}

fn draw_legend(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    egui::Window::new("Presets")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            for preset in CharacterPreset::ALL {
                ui.label(preset.display_name());
            }
            ui.separator();
            ui.label("F2 toggles dark mode");
        });
}
