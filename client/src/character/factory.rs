use std::f32::consts::TAU;

use bevy::color::Alpha;
use bevy::mesh::{MeshBuilder, Meshable};
use bevy::prelude::*;
use common::animation::{AnimationState, derive_animation_profile};
use common::geometry::Primitive;
use common::rig::{self, CharacterRig, PartNode, Surface};
use common::traits::{TraitError, TraitOverrides, parse_hex_color, resolve};
use thiserror::Error;

use super::types::{
    BodyGroup, BodyPart, BodyPartMarker, CharacterAnimator, CharacterParts, CharacterRoot,
};

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("invalid character color '{0}': expected #RRGGBB")]
    InvalidColor(String),
    #[error(transparent)]
    Traits(#[from] TraitError),
}

pub struct SpawnedCharacter {
    pub root: Entity,
    pub body_group: Entity,
}

pub struct CharacterFactory;

impl CharacterFactory {
    /// Build one character: resolve traits, assemble the rig, spawn it as an
    /// entity tree (root, body group, parts) and attach the animation driver.
    /// The color is the team color; it seeds the motion profile so two
    /// characters only move in lockstep when they share it.
    pub fn spawn(
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        color_hex: &str,
        overrides: &TraitOverrides,
        position: Vec3,
    ) -> Result<SpawnedCharacter, SpawnError> {
        let color = parse_hex_color(color_hex)
            .ok_or_else(|| SpawnError::InvalidColor(color_hex.to_string()))?;
        let resolved = resolve(overrides)?;
        let rig = rig::assemble_character(&resolved.traits, &resolved.palette);

        let root = commands
            .spawn((
                Transform::from_translation(position),
                Visibility::default(),
                CharacterRoot,
            ))
            .id();
        let body_group = commands
            .spawn((Transform::default(), Visibility::default(), BodyGroup))
            .id();
        commands.entity(root).add_child(body_group);

        let parts = spawn_rig(commands, meshes, materials, &rig, body_group);

        commands.entity(root).insert((
            CharacterAnimator {
                state: AnimationState::new(derive_animation_profile(color)),
                traits: resolved.traits,
                is_moving: false,
            },
            parts,
        ));

        Ok(SpawnedCharacter { root, body_group })
    }
}

fn spawn_rig(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rig: &CharacterRig,
    body_group: Entity,
) -> CharacterParts {
    let mut spawn = |node: &PartNode, part: BodyPart| {
        spawn_part(commands, meshes, materials, node, part, body_group)
    };

    spawn(&rig.torso, BodyPart::Torso);
    let head = spawn(&rig.head, BodyPart::Head);
    let eyes = [
        spawn(&rig.eyes[0], BodyPart::Eye),
        spawn(&rig.eyes[1], BodyPart::Eye),
    ];
    let pupils = [
        spawn(&rig.pupils[0], BodyPart::Pupil),
        spawn(&rig.pupils[1], BodyPart::Pupil),
    ];
    let facial_hair = rig
        .facial_hair
        .as_ref()
        .map(|node| spawn(node, BodyPart::FacialHair));
    let mouth = spawn(&rig.mouth, BodyPart::Mouth);
    if let Some(hair) = &rig.hair {
        spawn(hair, BodyPart::Hair);
    }
    let hat_crown = rig.hat.as_ref().map(|hat| {
        if let Some(base) = &hat.base {
            spawn(base, BodyPart::HatBase);
        }
        spawn(&hat.crown, BodyPart::HatCrown)
    });
    for arm in &rig.arms {
        spawn(arm, BodyPart::Arm);
    }
    for leg in &rig.legs {
        spawn(leg, BodyPart::Leg);
    }
    for shoe in &rig.shoes {
        spawn(shoe, BodyPart::Shoe);
    }
    let glasses = rig.glasses.as_ref().map(|node| spawn(node, BodyPart::Glasses));
    let jewelry = rig.jewelry.as_ref().map(|node| spawn(node, BodyPart::Jewelry));
    if let Some(backpack) = &rig.backpack {
        spawn(backpack, BodyPart::Backpack);
    }

    CharacterParts {
        body_group,
        head,
        eyes,
        pupils,
        mouth,
        facial_hair,
        hat_crown,
        glasses,
        jewelry,
        eye_rest_scale: Vec3::from_array(rig.eyes[0].scale),
        pupil_rest: [
            Vec3::from_array(rig.pupils[0].translation),
            Vec3::from_array(rig.pupils[1].translation),
        ],
    }
}

fn spawn_part(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    node: &PartNode,
    part: BodyPart,
    parent: Entity,
) -> Entity {
    let transform = Transform {
        translation: Vec3::from_array(node.translation),
        rotation: Quat::from_euler(
            EulerRot::XYZ,
            node.rotation[0],
            node.rotation[1],
            node.rotation[2],
        ),
        scale: Vec3::from_array(node.scale),
    };

    let entity = match (node.primitive, node.surface) {
        (Some(primitive), Some(surface)) => commands
            .spawn((
                Mesh3d(meshes.add(build_mesh(primitive))),
                MeshMaterial3d(materials.add(build_material(surface))),
                transform,
                BodyPartMarker { part },
            ))
            .id(),
        _ => commands
            .spawn((transform, Visibility::default(), BodyPartMarker { part }))
            .id(),
    };

    for child in &node.children {
        spawn_part(commands, meshes, materials, child, part, entity);
    }
    commands.entity(parent).add_child(entity);
    entity
}

fn build_mesh(primitive: Primitive) -> Mesh {
    match primitive {
        Primitive::Sphere { radius } => Sphere::new(radius).into(),
        Primitive::Box { x, y, z } => Cuboid::new(x, y, z).into(),
        Primitive::Cylinder { radius_top, radius_bottom, height } => {
            if (radius_top - radius_bottom).abs() < f32::EPSILON {
                Cylinder::new(radius_top, height).into()
            } else {
                ConicalFrustum { radius_top, radius_bottom, height }.into()
            }
        }
        Primitive::Torus { radius, tube, arc } => {
            let torus = Torus { minor_radius: tube, major_radius: radius };
            if arc < TAU {
                torus.mesh().angle_range(0.0..=arc).build()
            } else {
                torus.into()
            }
        }
        Primitive::Disc { radius } => Circle::new(radius).into(),
    }
}

fn build_material(surface: Surface) -> StandardMaterial {
    let base_color = color_from_u32(surface.color);
    let mut material = StandardMaterial {
        base_color,
        perceptual_roughness: (1.0 - surface.gloss).clamp(0.089, 1.0),
        ..Default::default()
    };
    if let Some(alpha) = surface.alpha {
        material.base_color = base_color.with_alpha(alpha);
        material.alpha_mode = AlphaMode::Blend;
    }
    material
}

pub fn color_from_u32(color: u32) -> Color {
    Color::srgb_u8((color >> 16) as u8, (color >> 8) as u8, color as u8)
}
