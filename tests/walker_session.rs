//! Headless walker sessions driven by a key script

use delve::game::{WalkerCommand, WalkerSession};
use delve::sight::has_line_of_sight;
use delve::term::ScriptedConsole;
use delve::{GameConfig, Grid, Position, WalkerConfig};

fn arena_session(config: WalkerConfig) -> WalkerSession {
    WalkerSession::new(Grid::walker_arena(), config)
}

fn wrote(console: &ScriptedConsole, line: &str) -> bool {
    console.transcript().iter().any(|text| text == line)
}

#[test]
fn scripted_walk_redraws_after_each_key() {
    let mut session = arena_session(WalkerConfig::default());
    let mut console = ScriptedConsole::from_chars("sawq");
    session.run(&mut console).expect("script ends with q");

    assert!(wrote(&console, "Position: (14, 9) | Facing: 0 degrees >"));
    assert!(wrote(&console, "Position: (13, 9) | Facing: 0 degrees >"));
    assert!(wrote(&console, "Position: (13, 9) | Facing: 345 degrees >"));
    assert!(wrote(&console, "Position: (14, 9) | Facing: 345 degrees >"));
    assert_eq!(console.screen(), vec!["Game exited.".to_string()]);
    assert!(!console.is_raw());
}

#[test]
fn central_column_hides_the_far_side() {
    let session = arena_session(WalkerConfig::default());
    let map = session.map();

    assert!(!has_line_of_sight(map, 14.0, 9.0, 16, 9));
    assert!(!session.visibility().is_visible(16, 9));
    assert!(!session.visibility().is_visible(20, 9));
    // Row 3 runs above every obstacle
    assert!(has_line_of_sight(map, 14.0, 3.0, 20, 3));
}

#[test]
fn walking_into_a_wall_is_refused() {
    let mut session = arena_session(WalkerConfig::default());
    let mut console = ScriptedConsole::from_chars("wwq");
    session.run(&mut console).expect("script ends with q");

    assert_eq!(session.pose().cell(), Position::new(14, 9));
    assert_eq!(session.pose().x, 14.0);
    assert!(!wrote(&console, "Position: (15, 9) | Facing: 0 degrees >"));
}

#[test]
fn config_changes_turning_and_view() {
    let config = GameConfig::from_ron("(walker: (turn_step: 90.0, fov_degrees: 60.0))")
        .expect("valid config");
    let mut narrow = arena_session(config.walker.clone());

    narrow.apply(WalkerCommand::TurnRight);
    narrow.apply(WalkerCommand::Forward);
    assert_eq!(narrow.pose().cell(), Position::new(14, 10));
    assert!(narrow.frame().contains(&"Position: (14, 10) | Facing: 90 degrees v".to_string()));
    assert!(narrow.frame().contains(&"FOV: 60 degrees | Vision blocked by walls (#)".to_string()));

    let mut turned = arena_session(WalkerConfig::default());
    for _ in 0..6 {
        turned.apply(WalkerCommand::TurnRight);
    }
    turned.apply(WalkerCommand::Forward);
    assert_eq!(turned.pose().cell(), Position::new(14, 10));
    assert!(narrow.visibility().visible_count() < turned.visibility().visible_count());
    // 39 degrees off the heading: inside 120, outside 60
    assert!(turned.visibility().is_visible(10, 15));
    assert!(!narrow.visibility().is_visible(10, 15));
}
