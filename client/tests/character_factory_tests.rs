use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use client::character::{
    BodyPart, BodyPartMarker, CharacterAnimator, CharacterFactory, CharacterParts, CharacterRoot,
    SpawnError, SpawnedCharacter,
};
use common::traits::{GlassesStyle, HairStyle, TraitOverrides};

fn test_world() -> World {
    let mut world = World::new();
    world.insert_resource(Assets::<Mesh>::default());
    world.insert_resource(Assets::<StandardMaterial>::default());
    world
}

fn spawn_character(
    world: &mut World,
    color: &'static str,
    overrides: TraitOverrides,
) -> Result<SpawnedCharacter, SpawnError> {
    world
        .run_system_once(
            move |mut commands: Commands,
                  mut meshes: ResMut<Assets<Mesh>>,
                  mut materials: ResMut<Assets<StandardMaterial>>| {
                CharacterFactory::spawn(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    color,
                    &overrides,
                    Vec3::ZERO,
                )
            },
        )
        .expect("spawn system runs")
}

fn count_parts(world: &mut World, part: BodyPart) -> usize {
    let mut query = world.query::<&BodyPartMarker>();
    query.iter(world).filter(|marker| marker.part == part).count()
}

#[test]
fn default_character_spawns_the_expected_tree() {
    let mut world = test_world();
    let spawned = spawn_character(&mut world, "#AA3366", TraitOverrides::default())
        .expect("default character spawns");

    let child_of = world
        .get::<ChildOf>(spawned.body_group)
        .expect("body group is parented");
    assert_eq!(child_of.parent(), spawned.root);

    assert!(world.get::<CharacterRoot>(spawned.root).is_some());
    assert!(world.get::<CharacterParts>(spawned.root).is_some());
    assert!(world.get::<CharacterAnimator>(spawned.root).is_some());

    assert_eq!(count_parts(&mut world, BodyPart::Torso), 1);
    assert_eq!(count_parts(&mut world, BodyPart::Eye), 2);
    assert_eq!(count_parts(&mut world, BodyPart::Pupil), 2);
    assert_eq!(count_parts(&mut world, BodyPart::Arm), 2);
    assert_eq!(count_parts(&mut world, BodyPart::Leg), 2);
    assert_eq!(count_parts(&mut world, BodyPart::Shoe), 2);
    // Defaults carry no accessories.
    assert_eq!(count_parts(&mut world, BodyPart::Glasses), 0);
    assert_eq!(count_parts(&mut world, BodyPart::Jewelry), 0);
    assert_eq!(count_parts(&mut world, BodyPart::Backpack), 0);
    assert_eq!(count_parts(&mut world, BodyPart::FacialHair), 0);
}

#[test]
fn optional_parts_appear_only_when_selected() {
    let mut world = test_world();
    spawn_character(
        &mut world,
        "#AA3366",
        TraitOverrides {
            hair_style: Some(HairStyle::Bald),
            glasses: Some(GlassesStyle::Sunglasses),
            ..Default::default()
        },
    )
    .expect("customized character spawns");

    assert_eq!(count_parts(&mut world, BodyPart::Hair), 0);
    // Glasses group node plus two frames, two lenses and the bridge.
    assert_eq!(count_parts(&mut world, BodyPart::Glasses), 6);
}

#[test]
fn same_color_means_same_motion_profile() {
    let mut world = test_world();
    let first = spawn_character(&mut world, "#4169E1", TraitOverrides::default()).unwrap();
    let second = spawn_character(&mut world, "#4169E1", TraitOverrides::default()).unwrap();

    let first_profile = world
        .get::<CharacterAnimator>(first.root)
        .unwrap()
        .state
        .profile;
    let second_profile = world
        .get::<CharacterAnimator>(second.root)
        .unwrap()
        .state
        .profile;
    assert_eq!(first_profile, second_profile);
    assert_eq!(first_profile.seed, 0x4169E1);
}

#[test]
fn malformed_color_is_rejected_at_spawn() {
    let mut world = test_world();
    let result = spawn_character(&mut world, "zzzzzz", TraitOverrides::default());
    assert!(matches!(result, Err(SpawnError::InvalidColor(_))));

    // Nothing half-spawned.
    let mut query = world.query::<&CharacterRoot>();
    assert_eq!(query.iter(&world).count(), 0);
}
