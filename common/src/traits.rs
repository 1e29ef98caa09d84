use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default palette, matching the classic board look.
const DEFAULT_SHIRT_COLOR: u32 = 0x4169E1;
const DEFAULT_PANTS_COLOR: u32 = 0x8B4513;
const DEFAULT_HAIR_COLOR: u32 = 0x2C1810;
const DEFAULT_SHOE_COLOR: u32 = 0x8B4513;
const DEFAULT_SKIN_COLOR: u32 = 0xFFDE97;
const DEFAULT_EYE_COLOR: u32 = 0x4169E1;

#[derive(Debug, Error)]
pub enum TraitError {
    #[error("invalid color '{value}' for '{key}': expected #RRGGBB")]
    InvalidColor { key: &'static str, value: String },
}

/// Parse a `#RRGGBB` color string (leading `#` optional) into its numeric
/// value. Returns `None` for anything else; callers decide whether that is
/// an error (resolver) or a default (nothing else should accept raw colors).
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn resolve_color(
    key: &'static str,
    override_value: Option<&str>,
    default: u32,
) -> Result<u32, TraitError> {
    match override_value {
        Some(value) => parse_hex_color(value).ok_or_else(|| TraitError::InvalidColor {
            key,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parse an enumerated trait value, falling back to the key's default for
/// anything outside the documented value set. This is the single place the
/// "unknown value degrades silently" rule lives.
fn value_or_default<T: DeserializeOwned + Default>(value: &str) -> T {
    serde_json::from_value(serde_json::Value::String(value.to_string())).unwrap_or_default()
}

macro_rules! trait_enum {
    ($name:ident { $default:ident, $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $default,
            $($variant,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$default, $($name::$variant,)*];
        }
    };
}

trait_enum!(FaceShape { Oval, Round, Square, Heart });
trait_enum!(BodyType { Normal, Slim, Athletic, Chunky });
trait_enum!(HeightClass { Normal, Short, Tall });
trait_enum!(HairStyle { Short, Medium, Long, Curly, Bald });
trait_enum!(EyeShape { Normal, Big, Small, Sleepy });
trait_enum!(BeardStyle { None, Mustache, Goatee, Full });
trait_enum!(PantsType { Jeans, Shorts, Formal, Athletic });
trait_enum!(ShoeType { Sneakers, Boots, Formal, Sandals });
trait_enum!(HatStyle { None, Cap, Beanie, Formal });
trait_enum!(GlassesStyle { None, Normal, Sunglasses, Reading });
trait_enum!(JewelryStyle { None, Watch, Chain, Rings });
trait_enum!(BackpackStyle { None, School, Hiking, Stylish });
trait_enum!(AnimationStyle { Normal, Energetic, Calm, Quirky });
trait_enum!(WalkStyle { Normal, Bouncy, Confident, Sneaky });
trait_enum!(IdleStyle { Normal, Fidgety, Relaxed, Proud });
trait_enum!(VoiceType { Normal, Deep, High, Robotic });

/// The sixteen enumerated customization axes of a resolved character.
/// Together with the six [`Palette`] colors these are the 22 recognized
/// trait keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTraits {
    pub face_shape: FaceShape,
    pub body_type: BodyType,
    pub height: HeightClass,
    pub hair_style: HairStyle,
    pub eye_shape: EyeShape,
    pub beard_style: BeardStyle,
    pub pants_type: PantsType,
    pub shoe_type: ShoeType,
    pub hat: HatStyle,
    pub glasses: GlassesStyle,
    pub jewelry: JewelryStyle,
    pub backpack: BackpackStyle,
    pub animation_style: AnimationStyle,
    pub walk_style: WalkStyle,
    pub idle_style: IdleStyle,
    pub voice_type: VoiceType,
}

/// The six resolved trait colors as numeric `0xRRGGBB` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub shirt: u32,
    pub pants: u32,
    pub hair: u32,
    pub shoes: u32,
    pub skin: u32,
    pub eyes: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            shirt: DEFAULT_SHIRT_COLOR,
            pants: DEFAULT_PANTS_COLOR,
            hair: DEFAULT_HAIR_COLOR,
            shoes: DEFAULT_SHOE_COLOR,
            skin: DEFAULT_SKIN_COLOR,
            eyes: DEFAULT_EYE_COLOR,
        }
    }
}

/// Caller-supplied customization: any subset of the 22 trait keys.
/// Colors stay strings here so a bad one can be reported verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitOverrides {
    pub shirt_color: Option<String>,
    pub pants_color: Option<String>,
    pub hair_color: Option<String>,
    pub shoe_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub face_shape: Option<FaceShape>,
    pub body_type: Option<BodyType>,
    pub height: Option<HeightClass>,
    pub hair_style: Option<HairStyle>,
    pub eye_shape: Option<EyeShape>,
    pub beard_style: Option<BeardStyle>,
    pub pants_type: Option<PantsType>,
    pub shoe_type: Option<ShoeType>,
    pub hat: Option<HatStyle>,
    pub glasses: Option<GlassesStyle>,
    pub jewelry: Option<JewelryStyle>,
    pub backpack: Option<BackpackStyle>,
    pub animation_style: Option<AnimationStyle>,
    pub walk_style: Option<WalkStyle>,
    pub idle_style: Option<IdleStyle>,
    pub voice_type: Option<VoiceType>,
}

impl TraitOverrides {
    /// Build overrides from loosely-typed key/value pairs, e.g. query
    /// parameters or board-state attributes. Unrecognized keys are ignored;
    /// unrecognized values for a known key resolve to that key's default.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut overrides = Self::default();
        for (key, value) in pairs {
            match key {
                "shirt_color" => overrides.shirt_color = Some(value.to_string()),
                "pants_color" => overrides.pants_color = Some(value.to_string()),
                "hair_color" => overrides.hair_color = Some(value.to_string()),
                "shoe_color" => overrides.shoe_color = Some(value.to_string()),
                "skin_color" => overrides.skin_color = Some(value.to_string()),
                "eye_color" => overrides.eye_color = Some(value.to_string()),
                "face_shape" => overrides.face_shape = Some(value_or_default(value)),
                "body_type" => overrides.body_type = Some(value_or_default(value)),
                "height" => overrides.height = Some(value_or_default(value)),
                "hair_style" => overrides.hair_style = Some(value_or_default(value)),
                "eye_shape" => overrides.eye_shape = Some(value_or_default(value)),
                "beard_style" => overrides.beard_style = Some(value_or_default(value)),
                "pants_type" => overrides.pants_type = Some(value_or_default(value)),
                "shoe_type" => overrides.shoe_type = Some(value_or_default(value)),
                "hat" => overrides.hat = Some(value_or_default(value)),
                "glasses" => overrides.glasses = Some(value_or_default(value)),
                "jewelry" => overrides.jewelry = Some(value_or_default(value)),
                "backpack" => overrides.backpack = Some(value_or_default(value)),
                "animation_style" => overrides.animation_style = Some(value_or_default(value)),
                "walk_style" => overrides.walk_style = Some(value_or_default(value)),
                "idle_style" => overrides.idle_style = Some(value_or_default(value)),
                "voice_type" => overrides.voice_type = Some(value_or_default(value)),
                _ => {}
            }
        }
        overrides
    }

    /// Parse a JSON override payload as sent by the game-state driver.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

/// A fully resolved character description: typed traits plus numeric colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedCharacter {
    pub traits: CharacterTraits,
    pub palette: Palette,
}

/// Merge overrides onto the defaults and resolve colors. This is the single
/// validation boundary: a malformed color string is an error here instead of
/// a silently black material downstream.
pub fn resolve(overrides: &TraitOverrides) -> Result<ResolvedCharacter, TraitError> {
    let palette = Palette {
        shirt: resolve_color(
            "shirt_color",
            overrides.shirt_color.as_deref(),
            DEFAULT_SHIRT_COLOR,
        )?,
        pants: resolve_color(
            "pants_color",
            overrides.pants_color.as_deref(),
            DEFAULT_PANTS_COLOR,
        )?,
        hair: resolve_color(
            "hair_color",
            overrides.hair_color.as_deref(),
            DEFAULT_HAIR_COLOR,
        )?,
        shoes: resolve_color(
            "shoe_color",
            overrides.shoe_color.as_deref(),
            DEFAULT_SHOE_COLOR,
        )?,
        skin: resolve_color(
            "skin_color",
            overrides.skin_color.as_deref(),
            DEFAULT_SKIN_COLOR,
        )?,
        eyes: resolve_color(
            "eye_color",
            overrides.eye_color.as_deref(),
            DEFAULT_EYE_COLOR,
        )?,
    };

    let traits = CharacterTraits {
        face_shape: overrides.face_shape.unwrap_or_default(),
        body_type: overrides.body_type.unwrap_or_default(),
        height: overrides.height.unwrap_or_default(),
        hair_style: overrides.hair_style.unwrap_or_default(),
        eye_shape: overrides.eye_shape.unwrap_or_default(),
        beard_style: overrides.beard_style.unwrap_or_default(),
        pants_type: overrides.pants_type.unwrap_or_default(),
        shoe_type: overrides.shoe_type.unwrap_or_default(),
        hat: overrides.hat.unwrap_or_default(),
        glasses: overrides.glasses.unwrap_or_default(),
        jewelry: overrides.jewelry.unwrap_or_default(),
        backpack: overrides.backpack.unwrap_or_default(),
        animation_style: overrides.animation_style.unwrap_or_default(),
        walk_style: overrides.walk_style.unwrap_or_default(),
        idle_style: overrides.idle_style.unwrap_or_default(),
        voice_type: overrides.voice_type.unwrap_or_default(),
    };

    Ok(ResolvedCharacter { traits, palette })
}
