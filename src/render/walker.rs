//! Walker screen: the visible part of the arena plus a status block

use crate::sight::{Pose, VisibilityGrid};
use crate::world::{Grid, Tile};

/// Full walker frame, arena rows first
pub fn walker_frame(
    map: &Grid<Tile>,
    pose: &Pose,
    visibility: &VisibilityGrid,
    fov_degrees: f64,
) -> Vec<String> {
    let player = pose.cell();
    let mut lines: Vec<String> = (0..map.height())
        .map(|y| {
            (0..map.width())
                .map(|x| {
                    if x == player.x && y == player.y {
                        pose.glyph()
                    } else {
                        visibility.glyph_at(map, x, y)
                    }
                })
                .collect()
        })
        .collect();

    lines.push(String::new());
    lines.push(format!(
        "Position: ({}, {}) | Facing: {} degrees {}",
        player.x,
        player.y,
        pose.heading() as i32,
        pose.glyph()
    ));
    lines.push("Controls: W/S=Forward/Back | A/D=Rotate | Q=Quit".to_string());
    lines.push(format!(
        "FOV: {} degrees | Vision blocked by walls (#)",
        fov_degrees
    ));
    lines
}
