//! Character rig assembly.
//!
//! Builds the positioned part tree for one character: every body part is a
//! primitive (or a small grouped sub-assembly) described in the body group's
//! local space. Construction runs in a fixed order with provisional vertical
//! offsets; [`reconcile_positions`] then settles the torso on the legs and
//! moves every body- and head-anchored part through the handles the rig
//! retains, so no part is ever re-identified by shape or dimensions.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::geometry::{self, Primitive};
use crate::traits::{
    BackpackStyle, BeardStyle, CharacterTraits, GlassesStyle, HairStyle, HatStyle, JewelryStyle,
    Palette,
};

const MOUTH_COLOR: u32 = 0x8B0000;
const EYE_WHITE_COLOR: u32 = 0xFFFFFF;
const GOLD_COLOR: u32 = 0xFFD700;
const DARK_FRAME_COLOR: u32 = 0x333333;
const SHADE_FRAME_COLOR: u32 = 0x2A2A2A;
const SHADE_LENS_COLOR: u32 = 0x1A1A1A;
const HORN_FRAME_COLOR: u32 = 0x8B4513;
const BLACK_COLOR: u32 = 0x000000;
const SCHOOL_PACK_COLOR: u32 = 0x0066CC;
const HIKING_PACK_COLOR: u32 = 0x228B22;
const STYLISH_PACK_COLOR: u32 = 0x8B4513;

/// Surface description for one part: base color, gloss in `0..=1`
/// (the engine side maps it to roughness), and optional translucency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub color: u32,
    pub gloss: f32,
    pub alpha: Option<f32>,
}

impl Surface {
    pub fn new(color: u32, gloss: f32) -> Self {
        Self { color, gloss, alpha: None }
    }

    pub fn translucent(color: u32, gloss: f32, alpha: f32) -> Self {
        Self { color, gloss, alpha: Some(alpha) }
    }
}

/// One node of the rig: a primitive mesh, or a grouping node when
/// `primitive` is `None`. Positions are in the parent's local space,
/// rotations are XYZ euler radians.
#[derive(Debug, Clone, PartialEq)]
pub struct PartNode {
    pub primitive: Option<Primitive>,
    pub surface: Option<Surface>,
    pub translation: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub children: Vec<PartNode>,
}

impl PartNode {
    pub fn mesh(primitive: Primitive, surface: Surface) -> Self {
        Self {
            primitive: Some(primitive),
            surface: Some(surface),
            translation: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self {
            primitive: None,
            surface: None,
            translation: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            children: Vec::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation = [x, y, z];
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = [x, y, z];
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = [x, y, z];
        self
    }

    pub fn with_child(mut self, child: PartNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of actual meshes in this subtree (grouping nodes excluded).
    pub fn mesh_count(&self) -> usize {
        usize::from(self.primitive.is_some())
            + self.children.iter().map(PartNode::mesh_count).sum::<usize>()
    }
}

/// The three quantities every dependent offset is expressed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub body_y: f32,
    pub head_y: f32,
    pub height_multiplier: f32,
}

/// The two chained primitives of the formal hat.
#[derive(Debug, Clone, PartialEq)]
pub struct HatParts {
    pub base: Option<PartNode>,
    pub crown: PartNode,
}

/// A complete character rig with a named handle to every constructed part.
/// Optional parts are absent entirely for their `none`/`bald` trait value,
/// never hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRig {
    pub anchors: Anchors,
    pub torso: PartNode,
    pub head: PartNode,
    pub eyes: [PartNode; 2],
    pub pupils: [PartNode; 2],
    pub facial_hair: Option<PartNode>,
    pub mouth: PartNode,
    pub hair: Option<PartNode>,
    pub hat: Option<HatParts>,
    pub arms: [PartNode; 2],
    pub legs: [PartNode; 2],
    pub shoes: [PartNode; 2],
    pub glasses: Option<PartNode>,
    pub jewelry: Option<PartNode>,
    pub backpack: Option<PartNode>,
}

impl CharacterRig {
    /// Total mesh count across all parts, for structural assertions.
    pub fn mesh_count(&self) -> usize {
        let mut count = self.torso.mesh_count()
            + self.head.mesh_count()
            + self.mouth.mesh_count();
        for part in self.eyes.iter().chain(&self.pupils) {
            count += part.mesh_count();
        }
        for part in self.arms.iter().chain(&self.legs).chain(&self.shoes) {
            count += part.mesh_count();
        }
        for part in [&self.facial_hair, &self.hair, &self.glasses, &self.jewelry, &self.backpack]
            .into_iter()
            .flatten()
        {
            count += part.mesh_count();
        }
        if let Some(hat) = &self.hat {
            count += hat.crown.mesh_count();
            if let Some(base) = &hat.base {
                count += base.mesh_count();
            }
        }
        count
    }
}

/// Build the full rig and settle all dependent positions.
pub fn assemble_character(traits: &CharacterTraits, palette: &Palette) -> CharacterRig {
    let mut rig = build_rig(traits, palette);
    reconcile_positions(&mut rig, traits);
    rig
}

/// First pass: construct every part in the fixed source order. Torso, head
/// and everything hanging off the head use a provisional torso height of
/// `0.3 * height_multiplier`; legs are not known yet at that point.
pub fn build_rig(traits: &CharacterTraits, palette: &Palette) -> CharacterRig {
    let body = geometry::body_dimensions(traits.body_type);
    let h = geometry::height_multiplier(traits.height);

    let body_y = 0.3 * h;
    let head_y = body_y + body.height * h * 0.5 + 0.25;
    let anchors = Anchors { body_y, head_y, height_multiplier: h };

    let torso = PartNode::mesh(
        Primitive::Cylinder {
            radius_top: body.width,
            radius_bottom: body.width * 1.2,
            height: body.height * h,
        },
        Surface::new(palette.shirt, 0.2),
    )
    .at(0.0, body_y, 0.0);

    let head_geometry = geometry::head_geometry(traits.face_shape);
    let head = PartNode::mesh(head_geometry.primitive, Surface::new(palette.skin, 0.27))
        .at(0.0, head_y, 0.0)
        .scaled(head_geometry.scale[0], head_geometry.scale[1], head_geometry.scale[2]);

    let eye = geometry::eye_geometry(traits.eye_shape);
    let pupil = geometry::pupil_geometry(traits.eye_shape);
    let eyes = [0.12_f32, -0.12].map(|x| {
        PartNode::mesh(
            Primitive::Sphere { radius: eye.radius },
            Surface::new(EYE_WHITE_COLOR, 0.67),
        )
        .at(x, head_y + 0.08, 0.2)
        .scaled(eye.scale[0], eye.scale[1], eye.scale[2])
    });
    let pupils = [0.12_f32, -0.12].map(|x| {
        PartNode::mesh(
            Primitive::Sphere { radius: pupil.radius },
            Surface::new(palette.eyes, 0.67),
        )
        .at(x, head_y + 0.08, pupil.forward)
    });

    let facial_hair = build_facial_hair(traits.beard_style, palette, head_y);

    let mouth = PartNode::mesh(
        Primitive::Sphere { radius: 0.04 },
        Surface::new(MOUTH_COLOR, 0.33),
    )
    .at(0.0, head_y - 0.12, 0.22)
    .scaled(1.5, 0.8, 1.0);

    let hair = build_hair(traits.hair_style, palette, head_y);
    let hat = build_hat(traits.hat, palette, head_y);

    let arm = geometry::arm_dimensions(traits.body_type);
    let arms = [1.0_f32, -1.0].map(|side| {
        PartNode::mesh(
            Primitive::Cylinder {
                radius_top: arm.thickness,
                radius_bottom: arm.thickness,
                height: arm.length * h,
            },
            Surface::new(palette.shirt, 0.2),
        )
        .at(side * (body.width + 0.08), body_y + 0.05, 0.0)
        .rotated(0.0, 0.0, side * PI / 2.5)
    });

    let leg = geometry::leg_dimensions(traits.body_type);
    let leg_primitive = geometry::leg_primitive(traits.pants_type, leg, h);
    let legs = [0.08_f32, -0.08].map(|x| {
        PartNode::mesh(leg_primitive, Surface::new(palette.pants, 0.2)).at(x, 0.05 * h, 0.0)
    });

    let shoe = geometry::shoe_geometry(traits.shoe_type);
    let shoes = [0.08_f32, -0.08].map(|x| {
        PartNode::mesh(shoe.primitive, Surface::new(palette.shoes, 0.27))
            .at(x, -0.08 * h, 0.12)
            .scaled(shoe.scale[0], shoe.scale[1], shoe.scale[2])
    });

    let glasses = build_glasses(traits.glasses, head_y);
    let jewelry = build_jewelry(traits.jewelry, body_y);
    let backpack = build_backpack(traits.backpack, body_y);

    CharacterRig {
        anchors,
        torso,
        head,
        eyes,
        pupils,
        facial_hair,
        mouth,
        hair,
        hat,
        arms,
        legs,
        shoes,
        glasses,
        jewelry,
        backpack,
    }
}

/// Second pass: recompute the torso and head anchors from the now-known leg
/// length and shift every dependent part through its retained handle.
pub fn reconcile_positions(rig: &mut CharacterRig, traits: &CharacterTraits) {
    let body = geometry::body_dimensions(traits.body_type);
    let leg = geometry::leg_dimensions(traits.body_type);
    let h = rig.anchors.height_multiplier;

    let body_y = (0.05 + leg.length * h * 0.5 + body.height * h * 0.5) * h;
    let head_y = body_y + body.height * h * 0.5 + 0.25;
    let body_shift = body_y - rig.anchors.body_y;
    let head_shift = head_y - rig.anchors.head_y;
    rig.anchors.body_y = body_y;
    rig.anchors.head_y = head_y;

    rig.torso.translation[1] = body_y;
    rig.head.translation[1] = head_y;
    // Arms ride at body_y + 0.1 once the torso has settled on the legs.
    for arm in &mut rig.arms {
        arm.translation[1] = body_y + 0.1;
    }

    for part in rig.eyes.iter_mut().chain(&mut rig.pupils) {
        part.translation[1] += head_shift;
    }
    rig.mouth.translation[1] += head_shift;
    for part in [&mut rig.facial_hair, &mut rig.hair, &mut rig.glasses]
        .into_iter()
        .flatten()
    {
        part.translation[1] += head_shift;
    }
    if let Some(hat) = &mut rig.hat {
        hat.crown.translation[1] += head_shift;
        if let Some(base) = &mut hat.base {
            base.translation[1] += head_shift;
        }
    }
    for part in [&mut rig.jewelry, &mut rig.backpack].into_iter().flatten() {
        part.translation[1] += body_shift;
    }
}

fn build_facial_hair(style: BeardStyle, palette: &Palette, head_y: f32) -> Option<PartNode> {
    let surface = Surface::new(palette.hair, 0.2);
    match style {
        BeardStyle::Mustache => Some(
            PartNode::mesh(
                Primitive::Torus { radius: 0.1, tube: 0.025, arc: PI },
                surface,
            )
            .at(0.0, head_y - 0.05, 0.2)
            .rotated(FRAC_PI_2, 0.0, PI),
        ),
        BeardStyle::Goatee => Some(
            PartNode::mesh(Primitive::Sphere { radius: 0.04 }, surface)
                .at(0.0, head_y - 0.15, 0.2)
                .scaled(1.0, 1.5, 1.0),
        ),
        BeardStyle::Full => Some(
            PartNode::mesh(Primitive::Sphere { radius: 0.15 }, surface)
                .at(0.0, head_y - 0.1, 0.15)
                .scaled(1.2, 0.8, 0.8),
        ),
        BeardStyle::None => None,
    }
}

fn build_hair(style: HairStyle, palette: &Palette, head_y: f32) -> Option<PartNode> {
    let (radius, lift, scale, gloss) = match style {
        HairStyle::Short => (0.27, 0.18, [0.9, 0.5, 0.9], 0.2),
        HairStyle::Medium => (0.29, 0.18, [1.0, 0.6, 1.0], 0.2),
        HairStyle::Long => (0.31, 0.15, [1.1, 0.8, 1.1], 0.2),
        HairStyle::Curly => (0.33, 0.19, [1.2, 0.7, 1.2], 0.13),
        HairStyle::Bald => return None,
    };
    Some(
        PartNode::mesh(Primitive::Sphere { radius }, Surface::new(palette.hair, gloss))
            .at(0.0, head_y + lift, -0.05)
            .scaled(scale[0], scale[1], scale[2]),
    )
}

fn build_hat(style: HatStyle, palette: &Palette, head_y: f32) -> Option<HatParts> {
    match style {
        HatStyle::Cap => Some(HatParts {
            base: None,
            crown: PartNode::mesh(
                Primitive::Cylinder { radius_top: 0.15, radius_bottom: 0.15, height: 0.05 },
                Surface::new(palette.shirt, 0.33),
            )
            .at(0.0, head_y + 0.25, 0.0),
        }),
        HatStyle::Beanie => Some(HatParts {
            base: None,
            crown: PartNode::mesh(
                Primitive::Sphere { radius: 0.28 },
                Surface::new(palette.hair, 0.2),
            )
            .at(0.0, head_y + 0.15, 0.0)
            .scaled(1.0, 0.8, 1.0),
        }),
        HatStyle::Formal => Some(HatParts {
            base: Some(
                PartNode::mesh(
                    Primitive::Cylinder { radius_top: 0.15, radius_bottom: 0.15, height: 0.03 },
                    Surface::new(BLACK_COLOR, 0.33),
                )
                .at(0.0, head_y + 0.28, 0.0),
            ),
            crown: PartNode::mesh(
                Primitive::Cylinder { radius_top: 0.1, radius_bottom: 0.12, height: 0.15 },
                Surface::new(BLACK_COLOR, 0.33),
            )
            .at(0.0, head_y + 0.38, 0.0),
        }),
        HatStyle::None => None,
    }
}

/// Each glasses variant is a two-lens-plus-bridge sub-assembly. The group is
/// anchored at the eye line so it moves as one unit during reconciliation;
/// children keep their per-lens x offsets in group-local space.
fn build_glasses(style: GlassesStyle, head_y: f32) -> Option<PartNode> {
    let (frame_ring, frame_color, frame_gloss, lens, lens_surface, bridge, lift) = match style {
        GlassesStyle::Normal => (
            Primitive::Torus { radius: 0.06, tube: 0.008, arc: TAU },
            DARK_FRAME_COLOR,
            0.4,
            Primitive::Disc { radius: 0.055 },
            Surface::translucent(EYE_WHITE_COLOR, 0.6, 0.2),
            Primitive::Cylinder { radius_top: 0.008, radius_bottom: 0.008, height: 0.04 },
            0.08,
        ),
        GlassesStyle::Sunglasses => (
            Primitive::Torus { radius: 0.07, tube: 0.01, arc: TAU },
            SHADE_FRAME_COLOR,
            0.6,
            Primitive::Disc { radius: 0.065 },
            Surface::translucent(SHADE_LENS_COLOR, 0.8, 0.9),
            Primitive::Cylinder { radius_top: 0.01, radius_bottom: 0.01, height: 0.04 },
            0.08,
        ),
        GlassesStyle::Reading => (
            Primitive::Torus { radius: 0.05, tube: 0.006, arc: TAU },
            HORN_FRAME_COLOR,
            0.27,
            Primitive::Disc { radius: 0.045 },
            Surface::translucent(EYE_WHITE_COLOR, 0.53, 0.15),
            Primitive::Cylinder { radius_top: 0.006, radius_bottom: 0.006, height: 0.03 },
            0.06,
        ),
        GlassesStyle::None => return None,
    };

    let mut group = PartNode::group().at(0.0, head_y + lift, 0.0);
    for x in [0.12, -0.12] {
        group = group
            .with_child(
                PartNode::mesh(frame_ring, Surface::new(frame_color, frame_gloss))
                    .at(x, 0.0, 0.21),
            )
            .with_child(PartNode::mesh(lens, lens_surface).at(x, 0.0, 0.22));
    }
    Some(group.with_child(
        PartNode::mesh(bridge, Surface::new(frame_color, frame_gloss))
            .at(0.0, 0.0, 0.21)
            .rotated(0.0, 0.0, FRAC_PI_2),
    ))
}

fn build_jewelry(style: JewelryStyle, body_y: f32) -> Option<PartNode> {
    match style {
        JewelryStyle::Watch => Some(
            PartNode::mesh(
                Primitive::Cylinder { radius_top: 0.03, radius_bottom: 0.03, height: 0.02 },
                Surface::new(GOLD_COLOR, 0.67),
            )
            .at(0.15, body_y, 0.0)
            .rotated(0.0, 0.0, FRAC_PI_2),
        ),
        JewelryStyle::Chain => {
            let mut group = PartNode::group().at(0.0, body_y + 0.18, 0.14).with_child(
                PartNode::mesh(
                    Primitive::Torus { radius: 0.1, tube: 0.006, arc: TAU },
                    Surface::new(GOLD_COLOR, 0.8),
                ),
            );
            for i in 0..8 {
                let angle = i as f32 / 8.0 * TAU;
                group = group.with_child(
                    PartNode::mesh(
                        Primitive::Torus { radius: 0.015, tube: 0.004, arc: TAU },
                        Surface::new(GOLD_COLOR, 0.8),
                    )
                    .at(angle.sin() * 0.1, angle.cos() * 0.03, 0.0)
                    .rotated(angle, 0.0, 0.0),
                );
            }
            Some(group.with_child(
                PartNode::mesh(
                    Primitive::Sphere { radius: 0.02 },
                    Surface::new(GOLD_COLOR, 0.93),
                )
                .at(0.0, -0.08, 0.01),
            ))
        }
        JewelryStyle::Rings => {
            let mut group = PartNode::group().at(0.2, body_y - 0.1, 0.05);
            for i in 0..3 {
                group = group.with_child(
                    PartNode::mesh(
                        Primitive::Torus { radius: 0.01, tube: 0.003, arc: TAU },
                        Surface::new(GOLD_COLOR, 0.67),
                    )
                    .at(i as f32 * 0.015, 0.0, 0.0)
                    .rotated(FRAC_PI_2, 0.0, 0.0),
                );
            }
            Some(group)
        }
        JewelryStyle::None => None,
    }
}

fn build_backpack(style: BackpackStyle, body_y: f32) -> Option<PartNode> {
    let (primitive, color, gloss, depth) = match style {
        BackpackStyle::School => (
            Primitive::Box { x: 0.2, y: 0.3, z: 0.1 },
            SCHOOL_PACK_COLOR,
            0.2,
            -0.15,
        ),
        BackpackStyle::Hiking => (
            Primitive::Box { x: 0.25, y: 0.35, z: 0.15 },
            HIKING_PACK_COLOR,
            0.13,
            -0.18,
        ),
        BackpackStyle::Stylish => (
            Primitive::Box { x: 0.18, y: 0.25, z: 0.08 },
            STYLISH_PACK_COLOR,
            0.4,
            -0.12,
        ),
        BackpackStyle::None => return None,
    };
    Some(
        PartNode::mesh(primitive, Surface::new(color, gloss)).at(0.0, body_y + 0.1, depth),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{
        BodyType, EyeShape, FaceShape, HeightClass, TraitOverrides, resolve,
    };

    fn rig_for(overrides: TraitOverrides) -> CharacterRig {
        let resolved = resolve(&overrides).unwrap();
        assemble_character(&resolved.traits, &resolved.palette)
    }

    #[test]
    fn default_rig_has_the_expected_parts() {
        let rig = rig_for(TraitOverrides::default());
        // torso, head, 2 eyes, 2 pupils, mouth, hair, 2 arms, 2 legs, 2 shoes
        assert_eq!(rig.mesh_count(), 14);
        assert!(rig.facial_hair.is_none());
        assert!(rig.hat.is_none());
        assert!(rig.glasses.is_none());
        assert!(rig.jewelry.is_none());
        assert!(rig.backpack.is_none());
    }

    #[test]
    fn identical_inputs_build_identical_rigs() {
        let first = rig_for(TraitOverrides::default());
        let second = rig_for(TraitOverrides::default());
        assert_eq!(first, second);
    }

    #[test]
    fn head_sits_above_torso_and_tracks_height() {
        let short = rig_for(TraitOverrides {
            height: Some(HeightClass::Short),
            ..Default::default()
        });
        let normal = rig_for(TraitOverrides::default());
        let tall = rig_for(TraitOverrides {
            height: Some(HeightClass::Tall),
            ..Default::default()
        });

        assert!(short.anchors.head_y < normal.anchors.head_y);
        assert!(normal.anchors.head_y < tall.anchors.head_y);
        for rig in [&short, &normal, &tall] {
            assert!(rig.anchors.head_y > rig.anchors.body_y);
            assert_eq!(rig.head.translation[1], rig.anchors.head_y);
            assert_eq!(rig.torso.translation[1], rig.anchors.body_y);
        }
    }

    #[test]
    fn reconciliation_keeps_face_offsets_relative_to_the_head() {
        let rig = rig_for(TraitOverrides {
            body_type: Some(BodyType::Chunky),
            height: Some(HeightClass::Tall),
            ..Default::default()
        });
        let head_y = rig.anchors.head_y;
        for eye in &rig.eyes {
            assert!((eye.translation[1] - (head_y + 0.08)).abs() < 1e-5);
        }
        assert!((rig.mouth.translation[1] - (head_y - 0.12)).abs() < 1e-5);
        for arm in &rig.arms {
            assert!((arm.translation[1] - (rig.anchors.body_y + 0.1)).abs() < 1e-5);
        }
    }

    #[test]
    fn optional_parts_are_omitted_not_hidden() {
        use crate::traits::{
            BackpackStyle, BeardStyle, GlassesStyle, HairStyle, HatStyle, JewelryStyle,
        };

        let bare = rig_for(TraitOverrides {
            hair_style: Some(HairStyle::Bald),
            ..Default::default()
        });
        assert!(bare.hair.is_none());

        for style in [HairStyle::Short, HairStyle::Medium, HairStyle::Long, HairStyle::Curly] {
            let rig = rig_for(TraitOverrides {
                hair_style: Some(style),
                ..Default::default()
            });
            assert!(rig.hair.is_some());
        }
        for style in [BeardStyle::Mustache, BeardStyle::Goatee, BeardStyle::Full] {
            let rig = rig_for(TraitOverrides {
                beard_style: Some(style),
                ..Default::default()
            });
            assert!(rig.facial_hair.is_some());
        }
        for style in [HatStyle::Cap, HatStyle::Beanie, HatStyle::Formal] {
            let rig = rig_for(TraitOverrides { hat: Some(style), ..Default::default() });
            assert!(rig.hat.is_some());
        }
        for style in [GlassesStyle::Normal, GlassesStyle::Sunglasses, GlassesStyle::Reading] {
            let rig = rig_for(TraitOverrides { glasses: Some(style), ..Default::default() });
            assert!(rig.glasses.is_some());
        }
        for style in [JewelryStyle::Watch, JewelryStyle::Chain, JewelryStyle::Rings] {
            let rig = rig_for(TraitOverrides { jewelry: Some(style), ..Default::default() });
            assert!(rig.jewelry.is_some());
        }
        for style in [BackpackStyle::School, BackpackStyle::Hiking, BackpackStyle::Stylish] {
            let rig = rig_for(TraitOverrides { backpack: Some(style), ..Default::default() });
            assert!(rig.backpack.is_some());
        }
    }

    #[test]
    fn formal_hat_is_two_chained_primitives() {
        let rig = rig_for(TraitOverrides {
            hat: Some(crate::traits::HatStyle::Formal),
            ..Default::default()
        });
        let hat = rig.hat.expect("formal hat");
        let base = hat.base.expect("formal hat base");
        assert!(hat.crown.translation[1] > base.translation[1]);
    }

    #[test]
    fn glasses_keep_per_lens_offsets() {
        let rig = rig_for(TraitOverrides {
            glasses: Some(crate::traits::GlassesStyle::Sunglasses),
            ..Default::default()
        });
        let glasses = rig.glasses.expect("sunglasses");
        // two frames + two lenses + bridge
        assert_eq!(glasses.mesh_count(), 5);
        let xs: Vec<f32> = glasses.children.iter().map(|c| c.translation[0]).collect();
        assert!(xs.contains(&0.12) && xs.contains(&-0.12));
    }

    #[test]
    fn chain_jewelry_carries_its_links_and_pendant() {
        let rig = rig_for(TraitOverrides {
            jewelry: Some(crate::traits::JewelryStyle::Chain),
            ..Default::default()
        });
        let chain = rig.jewelry.expect("chain");
        // main ring + 8 links + pendant
        assert_eq!(chain.mesh_count(), 10);
    }

    #[test]
    fn rig_is_total_over_every_trait_combination_axis() {
        for &face in FaceShape::ALL {
            for &eye in EyeShape::ALL {
                let rig = rig_for(TraitOverrides {
                    face_shape: Some(face),
                    eye_shape: Some(eye),
                    ..Default::default()
                });
                assert!(rig.mesh_count() >= 14);
            }
        }
        for &body in BodyType::ALL {
            for &height in HeightClass::ALL {
                let rig = rig_for(TraitOverrides {
                    body_type: Some(body),
                    height: Some(height),
                    ..Default::default()
                });
                assert!(rig.anchors.head_y.is_finite());
                assert!(rig.anchors.head_y > 0.0);
            }
        }
    }
}
