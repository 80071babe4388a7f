//! Side-scrolling platformer with variable-height jumps
//!
//! Positions are whole cells. Vertical velocity is fractional and the
//! player moves one cell per whole unit of it each frame, checking for
//! collisions cell by cell.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::PlatformerConfig;
use crate::render::platformer_frame;
use crate::term::{Console, Key, KeyPress, RawModeGuard};
use crate::world::{Grid, Position, Tile};

/// Upper bound on key events consumed in a single frame
const MAX_KEYS_PER_FRAME: usize = 32;

/// Input held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub slow: bool,
    pub fast: bool,
    pub quit: bool,
}

impl Controls {
    /// Merge every key press seen during a frame
    pub fn from_keys(keys: &[KeyPress]) -> Self {
        let mut controls = Self::default();
        for press in keys {
            match press.key {
                Key::Escape => controls.quit = true,
                Key::Char(c) => match c.to_ascii_lowercase() {
                    'a' => controls.left = true,
                    'd' => controls.right = true,
                    ' ' => controls.jump = true,
                    _ => {}
                },
                Key::Other => {}
            }
            controls.slow |= press.shift;
            controls.fast |= press.ctrl;
        }
        controls
    }

    /// Cells per frame: 1 slow, 2 normal, 3 fast
    pub fn speed(&self) -> i32 {
        self.fast as i32 - self.slow as i32 + 2
    }

    /// Signed horizontal step for this frame
    pub fn horizontal(&self) -> i32 {
        (self.right as i32 - self.left as i32) * self.speed()
    }
}

/// Platformer state
pub struct Platformer {
    stage: Grid<Tile>,
    player: Position,
    velocity: f32,
    on_ground: bool,
    /// Whether holding jump still adds lift
    can_jump: bool,
    frames_jumping: u32,
    running: bool,
    config: PlatformerConfig,
}

impl Platformer {
    /// Default stage with the player standing on the floor
    pub fn new(config: PlatformerConfig) -> Self {
        let stage = Grid::platform_stage();
        let start = Position::new(10, stage.height() - 2);
        Self::with_stage(stage, start, config)
    }

    pub fn with_stage(stage: Grid<Tile>, start: Position, config: PlatformerConfig) -> Self {
        let mut game = Self {
            stage,
            player: start,
            velocity: 0.0,
            on_ground: false,
            can_jump: false,
            frames_jumping: 0,
            running: true,
            config,
        };
        game.on_ground = game.ground_below();
        game
    }

    pub fn stage(&self) -> &Grid<Tile> {
        &self.stage
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Out of bounds counts as solid
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.stage.get(x, y).map_or(true, |tile| tile.is_solid())
    }

    fn ground_below(&self) -> bool {
        self.player.y + 1 >= self.stage.height() || self.is_solid(self.player.x, self.player.y + 1)
    }

    /// Advance one frame
    pub fn step(&mut self, controls: Controls) {
        if controls.quit {
            self.running = false;
            return;
        }
        self.move_horizontal(controls.horizontal());
        self.jump(controls.jump);
        self.apply_gravity();
    }

    fn move_horizontal(&mut self, dx: i32) {
        if dx == 0 {
            return;
        }
        let new_x = self.player.x + dx;
        if !self.is_solid(new_x, self.player.y) {
            self.player.x = new_x;
        }
    }

    fn jump(&mut self, held: bool) {
        if self.on_ground && held {
            self.velocity = self.config.initial_jump_impulse;
            self.on_ground = false;
            self.can_jump = true;
            self.frames_jumping = 0;
        } else if !self.on_ground && held && self.can_jump {
            self.frames_jumping += 1;
            if self.velocity < 0.0 && self.frames_jumping < self.config.max_jump_frames {
                self.velocity += self.config.maintained_jump_impulse;
            } else {
                self.can_jump = false;
            }
        } else if !held && !self.on_ground {
            self.can_jump = false;
        }
    }

    fn apply_gravity(&mut self) {
        if !self.on_ground {
            self.velocity += self.config.gravity;
        }

        if self.velocity > 0.0 {
            for _ in 0..self.velocity as i32 {
                if self.ground_below() {
                    self.velocity = 0.0;
                    self.on_ground = true;
                    return;
                }
                self.player.y += 1;
            }
            self.on_ground = false;
        } else if self.velocity < 0.0 {
            for _ in 0..(-self.velocity) as i32 {
                if self.player.y - 1 <= 0 || self.is_solid(self.player.x, self.player.y - 1) {
                    // Bumped the ceiling
                    self.velocity = 0.0;
                    self.on_ground = false;
                    return;
                }
                self.player.y -= 1;
            }
            self.on_ground = false;
        } else {
            self.on_ground = self.ground_below();
        }
    }

    /// Lines of the current screen
    pub fn frame(&self) -> Vec<String> {
        platformer_frame(self)
    }

    /// Fixed-rate loop until Esc, then wait for any key
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> io::Result<()> {
        let frame_time = Duration::from_millis(self.config.frame_millis);
        let mut console = RawModeGuard::new(console)?;
        console.set_cursor_visible(false)?;
        console.clear()?;

        while self.running {
            let frame_start = Instant::now();

            let mut keys = Vec::new();
            while keys.len() < MAX_KEYS_PER_FRAME {
                match console.read_key(Duration::ZERO)? {
                    Some(press) => keys.push(press),
                    None => break,
                }
            }

            self.step(Controls::from_keys(&keys));
            console.draw(&self.frame())?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_time {
                thread::sleep(frame_time - elapsed);
            }
        }

        console.clear()?;
        console.write_text("Game over. Press any key to continue...")?;
        console.flush()?;
        while console.read_key(Duration::from_millis(250))?.is_none() {}
        console.clear()
    }
}
