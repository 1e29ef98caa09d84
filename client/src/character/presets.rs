use common::traits::{
    AnimationStyle, BackpackStyle, BeardStyle, BodyType, GlassesStyle, HairStyle, HatStyle,
    HeightClass, IdleStyle, JewelryStyle, PantsType, ShoeType, TraitOverrides, VoiceType,
};

/// Fixed trait sets standing in for the old one-off showcase characters.
/// Every preset goes through the same parametric builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterPreset {
    Classic,
    Athlete,
    Professor,
    Rockstar,
    Wanderer,
    Showman,
}

impl CharacterPreset {
    pub const ALL: &'static [CharacterPreset] = &[
        CharacterPreset::Classic,
        CharacterPreset::Athlete,
        CharacterPreset::Professor,
        CharacterPreset::Rockstar,
        CharacterPreset::Wanderer,
        CharacterPreset::Showman,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CharacterPreset::Classic => "Classic",
            CharacterPreset::Athlete => "Athlete",
            CharacterPreset::Professor => "Professor",
            CharacterPreset::Rockstar => "Rockstar",
            CharacterPreset::Wanderer => "Wanderer",
            CharacterPreset::Showman => "Showman",
        }
    }

    pub fn overrides(&self) -> TraitOverrides {
        match self {
            CharacterPreset::Classic => TraitOverrides::default(),
            CharacterPreset::Athlete => TraitOverrides {
                body_type: Some(BodyType::Athletic),
                height: Some(HeightClass::Tall),
                pants_type: Some(PantsType::Athletic),
                hair_style: Some(HairStyle::Short),
                animation_style: Some(AnimationStyle::Energetic),
                ..Default::default()
            },
            CharacterPreset::Professor => TraitOverrides {
                body_type: Some(BodyType::Slim),
                glasses: Some(GlassesStyle::Reading),
                beard_style: Some(BeardStyle::Goatee),
                pants_type: Some(PantsType::Formal),
                shoe_type: Some(ShoeType::Formal),
                hair_color: Some("#9E9E9E".to_string()),
                idle_style: Some(IdleStyle::Relaxed),
                voice_type: Some(VoiceType::Deep),
                ..Default::default()
            },
            CharacterPreset::Rockstar => TraitOverrides {
                hair_style: Some(HairStyle::Long),
                glasses: Some(GlassesStyle::Sunglasses),
                jewelry: Some(JewelryStyle::Chain),
                shirt_color: Some("#212121".to_string()),
                animation_style: Some(AnimationStyle::Quirky),
                idle_style: Some(IdleStyle::Fidgety),
                ..Default::default()
            },
            CharacterPreset::Wanderer => TraitOverrides {
                hat: Some(HatStyle::Beanie),
                backpack: Some(BackpackStyle::Hiking),
                shoe_type: Some(ShoeType::Boots),
                pants_type: Some(PantsType::Shorts),
                animation_style: Some(AnimationStyle::Calm),
                idle_style: Some(IdleStyle::Relaxed),
                ..Default::default()
            },
            CharacterPreset::Showman => TraitOverrides {
                body_type: Some(BodyType::Chunky),
                hat: Some(HatStyle::Formal),
                beard_style: Some(BeardStyle::Mustache),
                jewelry: Some(JewelryStyle::Watch),
                pants_type: Some(PantsType::Formal),
                shoe_type: Some(ShoeType::Formal),
                idle_style: Some(IdleStyle::Proud),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::traits::resolve;

    #[test]
    fn every_preset_resolves() {
        for preset in CharacterPreset::ALL {
            let resolved = resolve(&preset.overrides());
            assert!(resolved.is_ok(), "{} must resolve", preset.display_name());
        }
    }
}
