//! Static description of the interactive keepsakes: identifiers, placement,
//! per-kind visuals and the info shown when one is picked.

use crate::geometry::{self, MeshData};
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    Headphone,
    Book,
    Letter,
    Camera,
}

impl ObjectKind {
    /// Registration order. Ties in picking resolve to the earlier entry.
    pub const ALL: [ObjectKind; 4] = [
        ObjectKind::Headphone,
        ObjectKind::Book,
        ObjectKind::Letter,
        ObjectKind::Camera,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Headphone => "headphone",
            ObjectKind::Book => "book",
            ObjectKind::Letter => "letter",
            ObjectKind::Camera => "camera",
        }
    }

    /// Text rasterised onto the object's floating label.
    pub fn label_text(self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown object identifier `{0}`")]
pub struct UnknownObject(pub String);

impl FromStr for ObjectKind {
    type Err = UnknownObject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownObject(s.to_string()))
    }
}

/// Display metadata for the info panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
}

/// Info lookup. Total over `ObjectKind`, so registered objects always resolve.
pub fn object_info(kind: ObjectKind) -> ObjectInfo {
    match kind {
        ObjectKind::Headphone => ObjectInfo {
            title: "HEADPHONE",
            description: "🎵 My favorite headphones for music production",
            image: Some("images/headphone.jpg"),
        },
        ObjectKind::Book => ObjectInfo {
            title: "BOOK",
            description: "📚 Currently reading: Atomic Habits",
            image: Some("images/book.jpg"),
        },
        ObjectKind::Letter => ObjectInfo {
            title: "LETTER",
            description: "💌 Personal letters from friends",
            image: Some("images/letter.jpg"),
        },
        ObjectKind::Camera => ObjectInfo {
            title: "CAMERA",
            description: "📷 My vintage film camera collection",
            image: Some("images/camera.jpg"),
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Cuboid { size: [f32; 3] },
    Cylinder { radius: f32, height: f32, segments: u32 },
    Torus { radius: f32, tube: f32, radial: u32, tubular: u32 },
}

impl Shape {
    pub fn build(self) -> MeshData {
        match self {
            Shape::Cuboid { size } => geometry::cuboid(Vec3::from(size)),
            Shape::Cylinder {
                radius,
                height,
                segments,
            } => geometry::cylinder(radius, height, segments),
            Shape::Torus {
                radius,
                tube,
                radial,
                tubular,
            } => geometry::torus(radius, tube, radial, tubular),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    /// Unlit materials ignore scene lights.
    pub lit: bool,
}

impl Material {
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualSpec {
    pub position: [f32; 3],
    pub shape: Shape,
    pub material: Material,
    pub glow_rgb: [f32; 3],
}

pub fn visual_spec(kind: ObjectKind) -> VisualSpec {
    match kind {
        ObjectKind::Headphone => VisualSpec {
            position: [2.0, 1.0, 1.5],
            shape: Shape::Torus {
                radius: 0.16,
                tube: 0.04,
                radial: 12,
                tubular: 32,
            },
            material: Material {
                color: [0.15, 0.15, 0.18],
                opacity: 1.0,
                lit: true,
            },
            glow_rgb: [0.4, 0.8, 1.0],
        },
        ObjectKind::Book => VisualSpec {
            position: [-1.0, 0.8, 2.0],
            shape: Shape::Cuboid {
                size: [0.3, 0.06, 0.4],
            },
            material: Material {
                color: [0.6, 0.15, 0.12],
                opacity: 1.0,
                lit: true,
            },
            glow_rgb: [1.0, 0.8, 0.3],
        },
        ObjectKind::Letter => VisualSpec {
            position: [0.0, 1.0, -2.0],
            shape: Shape::Cuboid {
                size: [0.3, 0.2, 0.01],
            },
            material: Material {
                color: [0.98, 0.95, 0.86],
                opacity: 0.9,
                lit: true,
            },
            glow_rgb: [1.0, 0.5, 0.7],
        },
        ObjectKind::Camera => VisualSpec {
            position: [-2.0, 1.2, -1.0],
            shape: Shape::Cylinder {
                radius: 0.1,
                height: 0.22,
                segments: 24,
            },
            material: Material {
                color: [0.1, 0.1, 0.1],
                opacity: 1.0,
                lit: true,
            },
            glow_rgb: [0.6, 1.0, 0.6],
        },
    }
}
