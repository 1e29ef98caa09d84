pub mod animation;
pub mod factory;
pub mod presets;
pub mod types;

use bevy::prelude::*;

pub use animation::animate_characters;
pub use factory::{CharacterFactory, SpawnError, SpawnedCharacter};
pub use presets::CharacterPreset;
pub use types::{BodyGroup, BodyPart, BodyPartMarker, CharacterAnimator, CharacterParts, CharacterRoot};

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, animate_characters);
    }
}
