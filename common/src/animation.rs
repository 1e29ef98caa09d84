//! Per-character animation: a seeded motion profile, a cooldown-gated jump
//! state machine, and the continuous idle effects (sway, blink, talk,
//! accessory shimmer).
//!
//! [`AnimationState::step`] is the whole per-frame contract: it mutates only
//! the state it owns and returns a [`MotionFrame`] of plain numbers for the
//! engine side to apply to transforms. Time is whatever non-decreasing clock
//! the caller supplies, in seconds.

use std::f32::consts::{PI, TAU};

use crate::traits::{
    AnimationStyle, BeardStyle, CharacterTraits, GlassesStyle, HatStyle, IdleStyle, JewelryStyle,
    VoiceType,
};

/// Minimum adjusted-time gap between two jump starts.
pub const JUMP_COOLDOWN_SECS: f32 = 2.0;

const SPIN_JUMP_THRESHOLD: f32 = 0.995;
const NORMAL_JUMP_THRESHOLD: f32 = 0.988;
const MOVING_TEMPO_BOOST: f32 = 1.5;

/// Deterministic per-character motion parameters derived from the build-time
/// color. Two characters built with the same color share a profile; anything
/// else desynchronizes their phase, speed and jump cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProfile {
    pub seed: u32,
    /// Phase shift in seconds, `0..10`.
    pub time_offset: f32,
    /// Clock rate, `0.8..1.2`.
    pub speed_variation: f32,
    /// Jump trigger frequency, `0.1..0.2`.
    pub jump_frequency: f32,
}

pub fn derive_animation_profile(color: u32) -> AnimationProfile {
    AnimationProfile {
        seed: color,
        time_offset: (color % 1000) as f32 / 100.0,
        speed_variation: 0.8 + (color % 100) as f32 / 250.0,
        jump_frequency: 0.1 + (color % 50) as f32 / 500.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Normal,
    Spin,
}

impl JumpKind {
    pub fn duration_secs(self) -> f32 {
        match self {
            JumpKind::Normal => 0.8,
            JumpKind::Spin => 1.0,
        }
    }

    pub fn lift(self) -> f32 {
        match self {
            JumpKind::Normal => 0.15,
            JumpKind::Spin => 0.25,
        }
    }
}

/// The transform patch for one frame. All values are deltas or absolute
/// angles in the body group's local space; the engine owns turning them into
/// scene-graph mutations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionFrame {
    /// Vertical offset of the body group (jump arc).
    pub body_lift: f32,
    /// Body group yaw (full turn over a spin jump, otherwise zero).
    pub body_spin: f32,
    /// Body group roll (lateral idle sway).
    pub body_sway: f32,
    /// Head yaw oscillation.
    pub head_turn: f32,
    /// Eyes collapse and pupils hide while true.
    pub blink: bool,
    /// Mouth x/y scale for the talk oscillation.
    pub mouth_scale: [f32; 2],
    /// Pupil x/y offset from rest; nonzero only for the quirky style.
    pub pupil_drift: [f32; 2],
    /// Mustache z rotation (includes its resting half-turn).
    pub mustache_swing: f32,
    /// Formal hat crown z rotation.
    pub hat_tilt: f32,
    /// Sunglasses group yaw.
    pub glasses_turn: f32,
    /// Chain group roll.
    pub jewelry_sway: f32,
}

/// Mutable animation state owned by one character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub profile: AnimationProfile,
    current_jump: Option<JumpKind>,
    jump_started_at: f32,
    last_jump_trigger: f32,
}

impl AnimationState {
    pub fn new(profile: AnimationProfile) -> Self {
        Self {
            profile,
            current_jump: None,
            jump_started_at: 0.0,
            // Far enough back that the first trigger window is open.
            last_jump_trigger: -10.0,
        }
    }

    pub fn current_jump(&self) -> Option<JumpKind> {
        self.current_jump
    }

    /// The character's own animation clock.
    pub fn adjusted_time(&self, time: f32) -> f32 {
        (time + self.profile.time_offset) * self.profile.speed_variation
    }

    /// Advance by one frame and produce the transform patch.
    pub fn step(&mut self, traits: &CharacterTraits, is_moving: bool, time: f32) -> MotionFrame {
        let t = self.adjusted_time(time);
        let frequency = self.profile.jump_frequency;

        let boost = if is_moving { MOVING_TEMPO_BOOST } else { 1.0 };
        let tempo = animation_tempo(traits.animation_style) * self.profile.speed_variation * boost;
        let body_sway = (t * tempo * 0.8).sin() * sway_amplitude(traits.idle_style);

        if self.current_jump.is_none() && t - self.last_jump_trigger > JUMP_COOLDOWN_SECS {
            let spin_trigger = (t * frequency * 0.6).sin() > SPIN_JUMP_THRESHOLD;
            let normal_trigger = (t * frequency).sin() > NORMAL_JUMP_THRESHOLD;
            if let Some(kind) = jump_for_triggers(spin_trigger, normal_trigger) {
                self.start_jump(kind, t);
            }
        }

        let mut body_lift = 0.0;
        let mut body_spin = 0.0;
        if let Some(kind) = self.current_jump {
            let progress = ((t - self.jump_started_at) / kind.duration_secs()).min(1.0);
            if progress >= 1.0 {
                self.current_jump = None;
            } else {
                body_lift = (progress * PI).sin() * kind.lift();
                if kind == JumpKind::Spin {
                    body_spin = progress * TAU;
                }
            }
        }

        let head_turn = (t * 1.2).sin() * head_amplitude(traits.idle_style);
        let blink = (t * 1.5).sin() > 0.9;

        let talk = (t * 5.0).sin();
        let mouth_scale = [
            1.5 + talk * 0.2,
            0.8 + talk.abs() * mouth_amplitude(traits.voice_type),
        ];

        let pupil_drift = if traits.animation_style == AnimationStyle::Quirky {
            [(t * 8.0).sin() * 0.01, (t * 6.0).cos() * 0.005]
        } else {
            [0.0, 0.0]
        };

        let mustache_swing = if traits.beard_style == BeardStyle::Mustache {
            PI + (t * 6.0).sin() * 0.15
        } else {
            0.0
        };
        let hat_tilt = if traits.hat == HatStyle::Formal {
            (t * 4.0).sin() * 0.1
        } else {
            0.0
        };
        let glasses_turn = if traits.glasses == GlassesStyle::Sunglasses {
            (t * 0.5).sin() * 0.1
        } else {
            0.0
        };
        let jewelry_sway = if traits.jewelry == JewelryStyle::Chain {
            (t * 2.0).sin() * 0.05
        } else {
            0.0
        };

        MotionFrame {
            body_lift,
            body_spin,
            body_sway,
            head_turn,
            blink,
            mouth_scale,
            pupil_drift,
            mustache_swing,
            hat_tilt,
            glasses_turn,
            jewelry_sway,
        }
    }

    fn start_jump(&mut self, kind: JumpKind, adjusted_time: f32) {
        self.current_jump = Some(kind);
        self.jump_started_at = adjusted_time;
        self.last_jump_trigger = adjusted_time;
    }
}

/// Jump selection for one frame's trigger results: spin is evaluated first
/// and wins whenever both triggers fire together.
pub fn jump_for_triggers(spin_trigger: bool, normal_trigger: bool) -> Option<JumpKind> {
    if spin_trigger {
        Some(JumpKind::Spin)
    } else if normal_trigger {
        Some(JumpKind::Normal)
    } else {
        None
    }
}

fn animation_tempo(style: AnimationStyle) -> f32 {
    match style {
        AnimationStyle::Energetic => 4.0,
        AnimationStyle::Calm => 1.0,
        AnimationStyle::Quirky => 3.0,
        AnimationStyle::Normal => 2.0,
    }
}

fn sway_amplitude(style: IdleStyle) -> f32 {
    match style {
        IdleStyle::Fidgety => 0.12,
        IdleStyle::Relaxed => 0.05,
        IdleStyle::Proud => 0.03,
        IdleStyle::Normal => 0.08,
    }
}

fn head_amplitude(style: IdleStyle) -> f32 {
    match style {
        IdleStyle::Fidgety => 0.15,
        IdleStyle::Relaxed => 0.05,
        IdleStyle::Proud => 0.02,
        IdleStyle::Normal => 0.1,
    }
}

fn mouth_amplitude(voice: VoiceType) -> f32 {
    match voice {
        VoiceType::Deep => 0.6,
        VoiceType::High => 0.2,
        VoiceType::Robotic => 0.3,
        VoiceType::Normal => 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CharacterTraits;

    fn neutral_profile() -> AnimationProfile {
        AnimationProfile {
            seed: 0,
            time_offset: 0.0,
            speed_variation: 1.0,
            jump_frequency: 0.15,
        }
    }

    #[test]
    fn profile_derivation_is_deterministic_and_bounded() {
        for color in [0x000000, 0x4169E1, 0xFFFFFF, 0xDEADBE] {
            let first = derive_animation_profile(color);
            let second = derive_animation_profile(color);
            assert_eq!(first, second);
            assert!((0.0..10.0).contains(&first.time_offset));
            assert!((0.8..1.2).contains(&first.speed_variation));
            assert!((0.1..0.2).contains(&first.jump_frequency));
        }
    }

    #[test]
    fn different_colors_desynchronize() {
        let red = derive_animation_profile(0xFF0000);
        let blue = derive_animation_profile(0x0000FF);
        assert_ne!(red.time_offset, blue.time_offset);
    }

    #[test]
    fn jumps_are_exclusive_and_respect_the_cooldown() {
        let traits = CharacterTraits::default();
        let mut state = AnimationState::new(neutral_profile());
        let mut trigger_times = Vec::new();

        let dt = 1.0 / 60.0;
        for frame in 0..(240.0 / dt) as u32 {
            let time = frame as f32 * dt;
            let before = state.current_jump();
            state.step(&traits, false, time);
            let after = state.current_jump();

            if before.is_none() && after.is_some() {
                trigger_times.push(state.adjusted_time(time));
            }
            // A jump never changes kind mid-flight.
            if let (Some(b), Some(a)) = (before, after) {
                assert_eq!(b, a);
            }
        }

        assert!(trigger_times.len() >= 2, "timeline long enough to jump twice");
        for pair in trigger_times.windows(2) {
            assert!(
                pair[1] - pair[0] > JUMP_COOLDOWN_SECS,
                "jump starts {} and {} violate the cooldown",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn completed_jump_resets_lift_and_spin_to_exactly_zero() {
        let traits = CharacterTraits::default();
        let mut state = AnimationState::new(neutral_profile());

        let dt = 1.0 / 60.0;
        let mut saw_airborne = false;
        let mut frame = 0u32;
        loop {
            let time = frame as f32 * dt;
            let motion = state.step(&traits, false, time);
            if state.current_jump().is_some() {
                saw_airborne = true;
            }
            if saw_airborne && state.current_jump().is_none() {
                assert_eq!(motion.body_lift, 0.0);
                assert_eq!(motion.body_spin, 0.0);
                break;
            }
            frame += 1;
            assert!(frame < 100_000, "never saw a full jump cycle");
        }
    }

    #[test]
    fn spin_takes_priority_when_both_triggers_fire() {
        assert_eq!(jump_for_triggers(true, true), Some(JumpKind::Spin));
        assert_eq!(jump_for_triggers(true, false), Some(JumpKind::Spin));
        assert_eq!(jump_for_triggers(false, true), Some(JumpKind::Normal));
        assert_eq!(jump_for_triggers(false, false), None);
    }

    #[test]
    fn spin_jump_turns_a_full_circle_and_lifts_higher() {
        // With jump_frequency = 1.0, sin(t·f·0.6) peaks at t = 7.5π while
        // the normal trigger is far from its own window.
        let profile = AnimationProfile {
            seed: 0,
            time_offset: 0.0,
            speed_variation: 1.0,
            jump_frequency: 1.0,
        };
        let traits = CharacterTraits::default();
        let mut state = AnimationState::new(profile);

        let t = 7.5 * PI;
        assert!((t * 0.6).sin() > SPIN_JUMP_THRESHOLD);
        state.step(&traits, false, t);
        assert_eq!(state.current_jump(), Some(JumpKind::Spin));

        // Mid-jump: half a second in, halfway through the turn.
        let motion = state.step(&traits, false, t + 0.5);
        assert!((motion.body_spin - PI).abs() < 1e-3);
        assert!((motion.body_lift - JumpKind::Spin.lift()).abs() < 1e-3);
    }

    #[test]
    fn blink_follows_the_shared_threshold() {
        let traits = CharacterTraits::default();
        let mut state = AnimationState::new(neutral_profile());

        // sin(t·1.5) = 1 at t = π/3.
        let open = state.step(&traits, false, 0.0);
        assert!(!open.blink);
        let closed = state.step(&traits, false, PI / 3.0);
        assert!(closed.blink);
    }

    #[test]
    fn quirky_style_is_the_only_one_with_pupil_drift() {
        let quirky = CharacterTraits {
            animation_style: AnimationStyle::Quirky,
            ..Default::default()
        };
        let calm = CharacterTraits::default();

        let mut state = AnimationState::new(neutral_profile());
        let quirky_motion = state.step(&quirky, false, 0.2);
        let calm_motion = state.step(&calm, false, 0.2);
        assert!(quirky_motion.pupil_drift[0] != 0.0 || quirky_motion.pupil_drift[1] != 0.0);
        assert_eq!(calm_motion.pupil_drift, [0.0, 0.0]);
    }

    #[test]
    fn moving_flag_boosts_secondary_motion() {
        let traits = CharacterTraits::default();
        let mut state = AnimationState::new(neutral_profile());
        // Pick a time where a 1.5x faster sway phase lands elsewhere.
        let idle = state.step(&traits, false, 0.4).body_sway;
        let moving = state.step(&traits, true, 0.4).body_sway;
        assert_ne!(idle, moving);
    }
}
