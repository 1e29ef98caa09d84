use bevy::prelude::*;
use common::animation::AnimationState;
use common::traits::CharacterTraits;

/// Marker for the character root entity. The root carries the board
/// position; all animation happens one level down on the body group.
#[derive(Component)]
pub struct CharacterRoot;

/// Marker for the body group entity that idle sway and jumps move, kept
/// separate so root placement is never disturbed.
#[derive(Component)]
pub struct BodyGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Torso,
    Head,
    Eye,
    Pupil,
    FacialHair,
    Mouth,
    Hair,
    HatBase,
    HatCrown,
    Arm,
    Leg,
    Shoe,
    Glasses,
    Jewelry,
    Backpack,
}

/// Marker component for body part entities.
#[derive(Component)]
pub struct BodyPartMarker {
    pub part: BodyPart,
}

/// Direct handles to every animated part of one spawned character, plus the
/// rest values animation restores between effects.
#[derive(Component)]
pub struct CharacterParts {
    pub body_group: Entity,
    pub head: Entity,
    pub eyes: [Entity; 2],
    pub pupils: [Entity; 2],
    pub mouth: Entity,
    pub facial_hair: Option<Entity>,
    pub hat_crown: Option<Entity>,
    pub glasses: Option<Entity>,
    pub jewelry: Option<Entity>,
    pub eye_rest_scale: Vec3,
    pub pupil_rest: [Vec3; 2],
}

/// Per-character animation driver. `is_moving` is the one field an external
/// collaborator (the game-state driver) writes directly; everything else is
/// owned by the animation system.
#[derive(Component)]
pub struct CharacterAnimator {
    pub state: AnimationState,
    pub traits: CharacterTraits,
    pub is_moving: bool,
}
