//! Platformer screen

use crate::game::Platformer;
use crate::world::Tile;

const PLAYER_GLYPH: char = '@';

/// Stage rows with the player drawn in, followed by the key help
pub fn platformer_frame(game: &Platformer) -> Vec<String> {
    let stage = game.stage();
    let player = game.player();

    let mut lines: Vec<String> = (0..stage.height())
        .map(|y| {
            stage
                .row(y)
                .enumerate()
                .map(|(x, tile)| {
                    if x as i32 == player.x && y == player.y {
                        PLAYER_GLYPH
                    } else if tile.is_solid() {
                        Tile::Wall.glyph()
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect();

    lines.push("A (left) | D (right) | SPACE (jump)".to_string());
    lines.push("Shift (slow) | Ctrl (fast)".to_string());
    lines.push("Press ESC to quit".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformerConfig;

    #[test]
    fn test_player_and_platforms_drawn() {
        let game = Platformer::new(PlatformerConfig::default());
        let lines = platformer_frame(&game);
        let height = game.stage().height() as usize;

        assert_eq!(lines.len(), height + 3);
        assert_eq!(lines[18].chars().nth(10), Some('@'));
        assert_eq!(lines[15].chars().nth(5), Some('#'));
        assert_eq!(lines[15].chars().nth(11), Some(' '));
        assert!(lines[0].chars().all(|c| c == '#'));
        assert_eq!(lines[height + 2], "Press ESC to quit");
    }
}
