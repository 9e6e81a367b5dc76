//! CSS 3D transform helpers for the crystal cubes

use crate::consts::WORLD_TO_PX;
use crate::sim::PuzzleUnit;
use crate::to_degrees;

/// Transform placing and orienting one cube (screen Y grows downward)
pub fn cube_transform(unit: &PuzzleUnit) -> String {
    let p = unit.position * WORLD_TO_PX;
    let r = unit.rotation;
    format!(
        "translate3d({:.1}px, {:.1}px, {:.1}px) rotateX({:.2}deg) rotateY({:.2}deg) rotateZ({:.2}deg)",
        p.x,
        -p.y,
        p.z,
        to_degrees(r.x),
        to_degrees(r.y),
        to_degrees(r.z),
    )
}

/// Face tint for a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Solved,
    Hovered,
    Dormant,
}

impl Appearance {
    pub fn css_class(&self) -> &'static str {
        match self {
            Appearance::Solved => "crystal-solved",
            Appearance::Hovered => "crystal-glow",
            Appearance::Dormant => "",
        }
    }
}

/// Full `class` attribute for a cube's crystal element
pub fn crystal_class(unit: &PuzzleUnit, hovered: bool) -> String {
    match appearance(unit, hovered).css_class() {
        "" => "crystal".to_string(),
        tint => format!("crystal {tint}"),
    }
}

pub fn appearance(unit: &PuzzleUnit, hovered: bool) -> Appearance {
    if unit.solved {
        Appearance::Solved
    } else if hovered {
        Appearance::Hovered
    } else {
        Appearance::Dormant
    }
}

/// The six faces of a cube of edge `size` px: (name, face transform)
pub fn cube_faces(size: f32) -> [(&'static str, String); 6] {
    let half = size / 2.0;
    [
        ("front", format!("translateZ({half}px)")),
        ("back", format!("translateZ(-{half}px) rotateY(180deg)")),
        ("right", format!("rotateY(90deg) translateZ({half}px)")),
        ("left", format!("rotateY(-90deg) translateZ({half}px)")),
        ("top", format!("rotateX(90deg) translateZ({half}px)")),
        ("bottom", format!("rotateX(-90deg) translateZ({half}px)")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_cube_transform() {
        let mut unit = GameState::new().puzzles[1].clone();
        unit.rotation = Vec3::new(FRAC_PI_2, 0.0, 0.0);
        assert_eq!(
            cube_transform(&unit),
            "translate3d(-200.0px, -100.0px, 200.0px) rotateX(90.00deg) rotateY(0.00deg) rotateZ(0.00deg)"
        );
    }

    #[test]
    fn test_appearance_prefers_solved() {
        let mut unit = GameState::new().puzzles[0].clone();
        assert_eq!(appearance(&unit, false), Appearance::Dormant);
        assert_eq!(appearance(&unit, true), Appearance::Hovered);
        unit.solved = true;
        assert_eq!(appearance(&unit, true), Appearance::Solved);
    }

    #[test]
    fn test_crystal_class_has_no_duplicates() {
        let mut unit = GameState::new().puzzles[0].clone();
        assert_eq!(crystal_class(&unit, false), "crystal");
        assert_eq!(crystal_class(&unit, true), "crystal crystal-glow");
        unit.solved = true;
        assert_eq!(crystal_class(&unit, false), "crystal crystal-solved");
    }

    #[test]
    fn test_cube_faces() {
        let faces = cube_faces(96.0);
        assert_eq!(faces[0], ("front", "translateZ(48px)".to_string()));
        assert_eq!(faces[5].0, "bottom");
    }
}
