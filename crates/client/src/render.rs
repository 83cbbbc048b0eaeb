//! Plain-text frames.
//!
//! | glyph | meaning |
//! |-------|---------|
//! | `@` | agent |
//! | `X` | target |
//! | `#` | blocked cell |
//! | `0`..`7` | cell scanned this tick, by direction index |
//! | `.` | open cell |
use pursuit_core::{Agent, Grid, Position, ScanOverlay};

/// Render the grid with the agent, its target and optionally the scan overlay.
pub fn render_frame(grid: &Grid, agent: &Agent, overlay: Option<&ScanOverlay>) -> String {
    let mut frame = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            frame.push(glyph_at(grid, agent, overlay, Position::new(x, y)));
        }
        frame.push('\n');
    }
    frame
}

/// One status line describing a tick.
pub fn status_line(tick: u64, agent: &Agent, resolution: &str) -> String {
    format!(
        "tick {tick:>4}  at {}  target {}  {resolution}",
        agent.location(),
        agent.target()
    )
}

fn glyph_at(grid: &Grid, agent: &Agent, overlay: Option<&ScanOverlay>, position: Position) -> char {
    if position == agent.location() {
        '@'
    } else if position == agent.target() {
        'X'
    } else if grid.is_blocked(position) {
        '#'
    } else if let Some(direction) = overlay.and_then(|overlay| overlay.direction_at(position)) {
        (b'0' + direction.index() as u8) as char
    } else {
        '.'
    }
}
