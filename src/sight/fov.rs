//! Field-of-view cone test
//!
//! Angles are in degrees with 0 pointing east (+x) and 90 pointing south
//! (+y, screen down).

/// Normalize an angle into `[0, 360)`
pub fn normalize_degrees(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Direction from one point to another, in `[0, 360)`
pub fn bearing(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> f64 {
    normalize_degrees((to_y - from_y).atan2(to_x - from_x).to_degrees())
}

/// Signed turn from `heading` to `bearing`, folded into `[-180, 180]`
pub fn angle_difference(heading: f64, bearing: f64) -> f64 {
    let mut diff = bearing - heading;
    if diff < -180.0 {
        diff += 360.0;
    }
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}

/// Whether the center of cell `(x, y)` lies inside the view cone
pub fn in_field_of_view(
    eye_x: f64,
    eye_y: f64,
    heading: f64,
    x: i32,
    y: i32,
    fov_degrees: f64,
) -> bool {
    let to_cell = bearing(eye_x, eye_y, x as f64, y as f64);
    angle_difference(heading, to_cell).abs() <= fov_degrees / 2.0
}

/// One of eight arrows for a heading, each covering a 45 degree slice
pub fn heading_glyph(heading: f64) -> char {
    let angle = normalize_degrees(heading);
    if !(22.5..337.5).contains(&angle) {
        '>'
    } else if angle < 67.5 {
        '\\'
    } else if angle < 112.5 {
        'v'
    } else if angle < 157.5 {
        '/'
    } else if angle < 202.5 {
        '<'
    } else if angle < 247.5 {
        '/'
    } else if angle < 292.5 {
        '^'
    } else {
        '\\'
    }
}
