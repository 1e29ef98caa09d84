use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use common::notifications::ReleaseMethod;
use rand::Rng;

use crate::character::{CharacterAnimator, CharacterFactory, CharacterPreset};
use crate::notifications::NotificationCenter;

const TEAM_COLORS: [(&str, &str); 4] = [
    ("Team Red", "#E53935"),
    ("Team Blue", "#1E88E5"),
    ("Team Green", "#43A047"),
    ("Team Yellow", "#FDD835"),
];

/// The demo board: camera, light, ground, one character per team, and a
/// keyboard stand-in for the game-state driver that would normally feed
/// events and movement flags.
pub struct BoardScenePlugin;

impl Plugin for BoardScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_scene, spawn_team_lineup))
            .add_systems(Update, drive_demo_events);
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Tonemapping::None,
        Transform::from_xyz(0.0, 2.4, 6.5).looking_at(Vec3::new(0.0, 0.8, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(14.0, 0.1, 7.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.48, 0.52),
            perceptual_roughness: 0.95,
            ..Default::default()
        })),
        Transform::from_xyz(0.0, -0.15, 0.0),
    ));
}

fn spawn_team_lineup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let presets = [
        CharacterPreset::Classic,
        CharacterPreset::Athlete,
        CharacterPreset::Rockstar,
        CharacterPreset::Showman,
    ];
    for (i, ((team, color), preset)) in TEAM_COLORS.iter().zip(presets).enumerate() {
        let x = (i as f32 - 1.5) * 1.6;
        let overrides = preset.overrides();
        if let Err(error) = CharacterFactory::spawn(
            &mut commands,
            &mut meshes,
            &mut materials,
            color,
            &overrides,
            Vec3::new(x, 0.0, 0.0),
        ) {
            warn!("Failed to spawn {team}: {error}");
        }
    }
}

/// Keyboard drives the events the game server would normally push:
/// 1 dice roll, 2 catapult, 3 barrier, 4 minigame, 5 final roll,
/// M toggles the movement flag, C clears the feed.
fn drive_demo_events(
    keys: Res<ButtonInput<KeyCode>>,
    mut center: ResMut<NotificationCenter>,
    mut characters: Query<&mut CharacterAnimator>,
) {
    let mut rng = rand::thread_rng();
    let (team, _) = TEAM_COLORS[rng.gen_range(0..TEAM_COLORS.len())];

    if keys.just_pressed(KeyCode::Digit1) {
        let standard = rng.gen_range(1..=6);
        let bonus = if rng.gen_bool(0.3) { rng.gen_range(1..=6) } else { 0 };
        center.show_dice_roll(team, standard, bonus, None, None);
    }
    if keys.just_pressed(KeyCode::Digit2) {
        let distance = rng.gen_range(2..=6);
        if rng.gen_bool(0.5) {
            center.show_catapult_forward(team, distance, None);
        } else {
            center.show_catapult_backward(team, distance, None);
        }
    }
    if keys.just_pressed(KeyCode::Digit3) {
        let required = rng.gen_range(4..=6);
        let roll = rng.gen_range(1..=6);
        if roll >= required {
            center.show_barrier_released(team, roll, 0, ReleaseMethod::Standard, None);
        } else {
            center.show_barrier_failed(team, roll, 0, &format!("needs {required}+"), None);
        }
    }
    if keys.just_pressed(KeyCode::Digit4) {
        if rng.gen_bool(0.5) {
            center.show_minigame_win(team, rng.gen_range(1..=4), None);
        } else {
            center.show_minigame_loss(team, None);
        }
    }
    if keys.just_pressed(KeyCode::Digit5) {
        let roll = rng.gen_range(1..=6);
        if roll >= 6 {
            center.show_final_roll_success(team, roll, None);
        } else {
            center.show_final_roll_needed(team, roll, None);
        }
    }
    if keys.just_pressed(KeyCode::KeyM) {
        for mut animator in &mut characters {
            animator.is_moving = !animator.is_moving;
        }
    }
    if keys.just_pressed(KeyCode::KeyC) {
        center.clear_all();
    }
}
