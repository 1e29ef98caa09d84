use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use common::traits::{BeardStyle, JewelryStyle};

use super::types::{CharacterAnimator, CharacterParts, CharacterRoot};

/// Advance every character's animation state once per frame and write the
/// resulting transform patch through the retained part handles. Characters
/// only ever mutate their own parts, so the loop needs no cross-character
/// coordination.
pub fn animate_characters(
    time: Res<Time>,
    mut characters: Query<(&mut CharacterAnimator, &CharacterParts), With<CharacterRoot>>,
    mut transforms: Query<&mut Transform>,
    mut visibilities: Query<&mut Visibility>,
) {
    let now = time.elapsed_secs();

    for (mut animator, parts) in &mut characters {
        let traits = animator.traits;
        let is_moving = animator.is_moving;
        let motion = animator.state.step(&traits, is_moving, now);

        if let Ok(mut transform) = transforms.get_mut(parts.body_group) {
            transform.translation.y = motion.body_lift;
            transform.rotation =
                Quat::from_euler(EulerRot::YXZ, motion.body_spin, 0.0, motion.body_sway);
        }

        if let Ok(mut transform) = transforms.get_mut(parts.head) {
            transform.rotation = Quat::from_rotation_y(motion.head_turn);
        }

        for eye in parts.eyes {
            if let Ok(mut transform) = transforms.get_mut(eye) {
                transform.scale.y = if motion.blink {
                    0.1
                } else {
                    parts.eye_rest_scale.y
                };
            }
        }
        for (pupil, rest) in parts.pupils.into_iter().zip(parts.pupil_rest) {
            if let Ok(mut visibility) = visibilities.get_mut(pupil) {
                *visibility = if motion.blink {
                    Visibility::Hidden
                } else {
                    Visibility::Inherited
                };
            }
            if let Ok(mut transform) = transforms.get_mut(pupil) {
                transform.translation.x = rest.x + motion.pupil_drift[0];
                transform.translation.y = rest.y + motion.pupil_drift[1];
            }
        }

        if let Ok(mut transform) = transforms.get_mut(parts.mouth) {
            transform.scale.x = motion.mouth_scale[0];
            transform.scale.y = motion.mouth_scale[1];
        }

        // The mustache keeps its resting half-turn around x while swinging.
        if traits.beard_style == BeardStyle::Mustache {
            if let Some(entity) = parts.facial_hair {
                if let Ok(mut transform) = transforms.get_mut(entity) {
                    transform.rotation =
                        Quat::from_euler(EulerRot::XYZ, FRAC_PI_2, 0.0, motion.mustache_swing);
                }
            }
        }

        if let Some(entity) = parts.hat_crown {
            if let Ok(mut transform) = transforms.get_mut(entity) {
                transform.rotation = Quat::from_rotation_z(motion.hat_tilt);
            }
        }
        if let Some(entity) = parts.glasses {
            if let Ok(mut transform) = transforms.get_mut(entity) {
                transform.rotation = Quat::from_rotation_y(motion.glasses_turn);
            }
        }
        // The watch keeps a fixed strap rotation; only the chain sways.
        if traits.jewelry == JewelryStyle::Chain {
            if let Some(entity) = parts.jewelry {
                if let Ok(mut transform) = transforms.get_mut(entity) {
                    transform.rotation = Quat::from_rotation_z(motion.jewelry_sway);
                }
            }
        }
    }
}
