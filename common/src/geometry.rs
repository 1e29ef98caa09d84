//! Pure lookup tables from trait values to primitive dimensions.
//!
//! Every table is total over its enum and the `normal`/primary value doubles
//! as the default arm, so an unresolved trait can never leave a dimension
//! undefined.

use crate::traits::{BodyType, EyeShape, FaceShape, HeightClass, PantsType, ShoeType};

/// Primitive shapes the rig is assembled from. Dimensions follow the source
/// conventions: cylinders are top-radius/bottom-radius/height, tori are
/// ring-radius/tube-radius with an arc angle, discs are flat circles facing
/// forward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere { radius: f32 },
    Box { x: f32, y: f32, z: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Torus { radius: f32, tube: f32, arc: f32 },
    Disc { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDimensions {
    pub scale: f32,
    pub width: f32,
    pub height: f32,
}

pub fn body_dimensions(body_type: BodyType) -> BodyDimensions {
    match body_type {
        BodyType::Slim => BodyDimensions { scale: 0.8, width: 0.15, height: 0.55 },
        BodyType::Athletic => BodyDimensions { scale: 1.2, width: 0.22, height: 0.55 },
        BodyType::Chunky => BodyDimensions { scale: 1.4, width: 0.26, height: 0.6 },
        BodyType::Normal => BodyDimensions { scale: 1.0, width: 0.18, height: 0.55 },
    }
}

pub fn height_multiplier(height: HeightClass) -> f32 {
    match height {
        HeightClass::Short => 0.8,
        HeightClass::Tall => 1.2,
        HeightClass::Normal => 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadGeometry {
    pub primitive: Primitive,
    pub scale: [f32; 3],
}

pub fn head_geometry(face_shape: FaceShape) -> HeadGeometry {
    match face_shape {
        FaceShape::Round => HeadGeometry {
            primitive: Primitive::Sphere { radius: 0.25 },
            scale: [1.1, 1.1, 1.1],
        },
        FaceShape::Square => HeadGeometry {
            primitive: Primitive::Box { x: 0.4, y: 0.4, z: 0.4 },
            scale: [1.0, 1.0, 1.0],
        },
        FaceShape::Heart => HeadGeometry {
            primitive: Primitive::Sphere { radius: 0.25 },
            scale: [1.1, 0.9, 1.0],
        },
        FaceShape::Oval => HeadGeometry {
            primitive: Primitive::Sphere { radius: 0.25 },
            scale: [1.0, 1.1, 1.0],
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeGeometry {
    pub radius: f32,
    pub scale: [f32; 3],
}

pub fn eye_geometry(eye_shape: EyeShape) -> EyeGeometry {
    match eye_shape {
        EyeShape::Big => EyeGeometry { radius: 0.08, scale: [1.4, 1.8, 1.0] },
        EyeShape::Small => EyeGeometry { radius: 0.05, scale: [1.1, 1.3, 1.0] },
        EyeShape::Sleepy => EyeGeometry { radius: 0.06, scale: [1.5, 0.8, 1.0] },
        EyeShape::Normal => EyeGeometry { radius: 0.06, scale: [1.2, 1.6, 1.0] },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PupilGeometry {
    pub radius: f32,
    /// Forward (z) offset from the head center line.
    pub forward: f32,
}

/// Pupils sit deeper and larger inside small eyes so they stay visible.
pub fn pupil_geometry(eye_shape: EyeShape) -> PupilGeometry {
    let eye = eye_geometry(eye_shape);
    match eye_shape {
        EyeShape::Small => PupilGeometry { radius: eye.radius * 0.8, forward: 0.26 },
        _ => PupilGeometry { radius: eye.radius * 0.6, forward: 0.25 },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbDimensions {
    pub thickness: f32,
    pub length: f32,
}

pub fn arm_dimensions(body_type: BodyType) -> LimbDimensions {
    match body_type {
        BodyType::Slim => LimbDimensions { thickness: 0.04, length: 0.25 },
        BodyType::Athletic => LimbDimensions { thickness: 0.08, length: 0.35 },
        BodyType::Chunky => LimbDimensions { thickness: 0.1, length: 0.32 },
        BodyType::Normal => LimbDimensions { thickness: 0.06, length: 0.3 },
    }
}

pub fn leg_dimensions(body_type: BodyType) -> LimbDimensions {
    match body_type {
        BodyType::Slim => LimbDimensions { thickness: 0.06, length: 0.38 },
        BodyType::Athletic => LimbDimensions { thickness: 0.1, length: 0.42 },
        BodyType::Chunky => LimbDimensions { thickness: 0.12, length: 0.32 },
        BodyType::Normal => LimbDimensions { thickness: 0.08, length: 0.35 },
    }
}

/// Leg primitive cut by pants type. `height_multiplier` scales the visible
/// length; shorts stop at 60% of it.
pub fn leg_primitive(
    pants_type: PantsType,
    leg: LimbDimensions,
    height_multiplier: f32,
) -> Primitive {
    match pants_type {
        PantsType::Shorts => Primitive::Cylinder {
            radius_top: leg.thickness,
            radius_bottom: leg.thickness * 1.2,
            height: leg.length * 0.6 * height_multiplier,
        },
        PantsType::Formal => Primitive::Cylinder {
            radius_top: leg.thickness * 0.9,
            radius_bottom: leg.thickness * 0.9,
            height: leg.length * height_multiplier,
        },
        PantsType::Athletic => Primitive::Cylinder {
            radius_top: leg.thickness * 1.1,
            radius_bottom: leg.thickness * 1.3,
            height: leg.length * height_multiplier,
        },
        PantsType::Jeans => Primitive::Cylinder {
            radius_top: leg.thickness,
            radius_bottom: leg.thickness * 1.2,
            height: leg.length * height_multiplier,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoeGeometry {
    pub primitive: Primitive,
    pub scale: [f32; 3],
}

pub fn shoe_geometry(shoe_type: ShoeType) -> ShoeGeometry {
    match shoe_type {
        ShoeType::Boots => ShoeGeometry {
            primitive: Primitive::Cylinder {
                radius_top: 0.08,
                radius_bottom: 0.06,
                height: 0.15,
            },
            scale: [1.0, 1.0, 1.5],
        },
        ShoeType::Formal => ShoeGeometry {
            primitive: Primitive::Sphere { radius: 0.05 },
            scale: [2.0, 0.5, 2.5],
        },
        ShoeType::Sandals => ShoeGeometry {
            primitive: Primitive::Box { x: 0.12, y: 0.02, z: 0.18 },
            scale: [1.0, 1.0, 1.0],
        },
        ShoeType::Sneakers => ShoeGeometry {
            primitive: Primitive::Sphere { radius: 0.06 },
            scale: [1.8, 0.6, 2.2],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_finite(values: &[f32]) {
        for value in values {
            assert!(value.is_finite() && *value > 0.0, "bad dimension {value}");
        }
    }

    #[test]
    fn body_tables_are_total_and_positive() {
        for &body_type in BodyType::ALL {
            let body = body_dimensions(body_type);
            assert_finite(&[body.scale, body.width, body.height]);
            let arm = arm_dimensions(body_type);
            assert_finite(&[arm.thickness, arm.length]);
            let leg = leg_dimensions(body_type);
            assert_finite(&[leg.thickness, leg.length]);
        }
        for &height in HeightClass::ALL {
            assert_finite(&[height_multiplier(height)]);
        }
    }

    #[test]
    fn face_and_eye_tables_are_total() {
        for &face in FaceShape::ALL {
            let head = head_geometry(face);
            assert_finite(&head.scale);
        }
        for &eye in EyeShape::ALL {
            let geometry = eye_geometry(eye);
            assert_finite(&[geometry.radius]);
            assert_finite(&geometry.scale);
            let pupil = pupil_geometry(eye);
            assert_finite(&[pupil.radius, pupil.forward]);
            assert!(pupil.radius < geometry.radius);
        }
    }

    #[test]
    fn shorts_cut_the_leg_length() {
        let leg = leg_dimensions(BodyType::Normal);
        let full = leg_primitive(PantsType::Jeans, leg, 1.0);
        let shorts = leg_primitive(PantsType::Shorts, leg, 1.0);
        let (Primitive::Cylinder { height: full_height, .. },
            Primitive::Cylinder { height: short_height, .. }) = (full, shorts)
        else {
            panic!("legs must be cylinders");
        };
        assert!(short_height < full_height);
    }

    #[test]
    fn shoe_table_is_total() {
        for &shoe in ShoeType::ALL {
            let geometry = shoe_geometry(shoe);
            assert_finite(&geometry.scale);
        }
    }
}
