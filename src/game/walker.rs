//! Field-of-view walker
//!
//! The player walks a fixed arena. Every accepted key recomputes what is
//! visible and redraws the whole screen.

use std::io;
use std::time::Duration;

use crate::config::WalkerConfig;
use crate::render::walker_frame;
use crate::sight::{Pose, VisibilityGrid};
use crate::term::{Console, KeyPress, RawModeGuard};
use crate::world::{Grid, Position, Tile};

/// How long one key poll waits before looping
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Walker actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerCommand {
    Forward,
    Back,
    TurnLeft,
    TurnRight,
    Quit,
}

impl WalkerCommand {
    /// Map a key to a command; unknown keys map to nothing
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        match press.lower_char()? {
            'w' => Some(Self::Forward),
            's' => Some(Self::Back),
            'a' => Some(Self::TurnLeft),
            'd' => Some(Self::TurnRight),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Quit,
}

/// Arena, observer and the current visibility
pub struct WalkerSession {
    map: Grid<Tile>,
    pose: Pose,
    visibility: VisibilityGrid,
    config: WalkerConfig,
}

impl WalkerSession {
    /// Start near the middle of the map facing east
    ///
    /// When the middle cell is a wall the player starts on the closest
    /// open cell instead. In [`Grid::walker_arena`] the center (15, 10) lies
    /// inside the central column, so the start is (14, 9) on purpose.
    pub fn new(map: Grid<Tile>, config: WalkerConfig) -> Self {
        let center = Position::new(map.width() / 2, map.height() / 2);
        let start = nearest_open(&map, center).unwrap_or(center);
        if start != center {
            log::debug!(
                "Center ({}, {}) is blocked, starting at ({}, {})",
                center.x,
                center.y,
                start.x,
                start.y
            );
        }
        let pose = Pose::new(start.x as f64, start.y as f64, 0.0);
        Self::with_pose(map, pose, config)
    }

    pub fn with_pose(map: Grid<Tile>, pose: Pose, config: WalkerConfig) -> Self {
        let visibility = VisibilityGrid::compute(&map, &pose, config.fov_degrees);
        Self {
            map,
            pose,
            visibility,
            config,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn map(&self) -> &Grid<Tile> {
        &self.map
    }

    pub fn visibility(&self) -> &VisibilityGrid {
        &self.visibility
    }

    /// Apply one command and refresh visibility
    ///
    /// Blocked moves leave the pose untouched but still redraw.
    pub fn apply(&mut self, command: WalkerCommand) -> Outcome {
        match command {
            WalkerCommand::Forward => self.step(self.config.move_step),
            WalkerCommand::Back => self.step(-self.config.move_step),
            WalkerCommand::TurnLeft => self.pose.rotate(-self.config.turn_step),
            WalkerCommand::TurnRight => self.pose.rotate(self.config.turn_step),
            WalkerCommand::Quit => return Outcome::Quit,
        }
        self.visibility
            .recompute(&self.map, &self.pose, self.config.fov_degrees);
        Outcome::Redraw
    }

    fn step(&mut self, distance: f64) {
        if !self.pose.advance(distance, &self.map) {
            log::debug!(
                "Blocked move from ({:.2}, {:.2}) heading {:.0}",
                self.pose.x,
                self.pose.y,
                self.pose.heading()
            );
        }
    }

    /// Lines of the current screen
    pub fn frame(&self) -> Vec<String> {
        walker_frame(&self.map, &self.pose, &self.visibility, self.config.fov_degrees)
    }

    fn redraw<C: Console + ?Sized>(&self, console: &mut C) -> io::Result<()> {
        console.clear()?;
        console.draw(&self.frame())
    }

    /// Interactive loop: one key per frame until quit
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> io::Result<()> {
        let mut console = RawModeGuard::new(console)?;
        self.redraw(&mut *console)?;

        loop {
            let Some(press) = console.read_key(POLL_INTERVAL)? else {
                continue;
            };
            let Some(command) = WalkerCommand::from_key(&press) else {
                continue;
            };
            match self.apply(command) {
                Outcome::Redraw => self.redraw(&mut *console)?,
                Outcome::Quit => break,
            }
        }

        console.clear()?;
        console.write_text("Game exited.")?;
        console.flush()
    }
}

/// Closest non-wall cell by Chebyshev distance, ties broken row-major
fn nearest_open(map: &Grid<Tile>, from: Position) -> Option<Position> {
    map.iter()
        .filter(|(_, tile)| !tile.is_solid())
        .map(|(pos, _)| pos)
        .min_by_key(|pos| (pos.chebyshev_distance(&from), pos.y, pos.x))
}
