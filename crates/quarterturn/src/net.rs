//! ASCII net rendering of the cube state.
//!
//! This is the terminal stand-in for a real renderer: it only reads the
//! public per-piece position and sticker queries.

use cgmath::{vec3, Vector3};
use owo_colors::OwoColorize;
use quarterturn_core::{Color, Cube, Face};

/// Face placement in the unfolded net, row by row.
const NET_ROWS: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::U), None, None],
    [Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    [None, Some(Face::D), None, None],
];

/// Renders the whole cube as an unfolded net, one character per sticker.
pub fn net_string(cube: &Cube, colored: bool) -> String {
    let mut lines = Vec::new();
    for band in NET_ROWS {
        for row in 0..3 {
            let mut line = String::new();
            for slot in band {
                match slot {
                    Some(face) => {
                        for col in 0..3 {
                            line.push_str(&cell(cube, face, row, col, colored));
                        }
                        line.push(' ');
                    }
                    None => line.push_str("    "),
                }
            }
            lines.push(line.trim_end().to_string());
        }
    }
    lines.join("\n")
}

fn cell(cube: &Cube, face: Face, row: usize, col: usize, colored: bool) -> String {
    let position = cell_position(face, row, col);
    let color = cube
        .piece_at(position)
        .and_then(|piece| cube[piece].sticker(face));
    match color {
        Some(color) if colored => paint(color),
        Some(color) => color.symbol().to_string(),
        // Unreachable while the cube invariants hold.
        None => "?".to_string(),
    }
}

/// Lattice position of the piece shown at (`row`, `col`) of `face` in the
/// net. Rows run top to bottom on paper, columns left to right, with each
/// face oriented as seen from outside the cube.
fn cell_position(face: Face, row: usize, col: usize) -> Vector3<i32> {
    let r = row as i32;
    let c = col as i32;
    match face {
        Face::U => vec3(c - 1, 1, r - 1),
        Face::L => vec3(-1, 1 - r, c - 1),
        Face::F => vec3(c - 1, 1 - r, 1),
        Face::R => vec3(1, 1 - r, 1 - c),
        Face::B => vec3(1 - c, 1 - r, -1),
        Face::D => vec3(c - 1, -1, 1 - r),
    }
}

fn paint(color: Color) -> String {
    let s = color.symbol();
    match color {
        Color::White => s.white().bold().to_string(),
        Color::Yellow => s.yellow().to_string(),
        Color::Green => s.green().to_string(),
        Color::Blue => s.blue().to_string(),
        Color::Red => s.red().to_string(),
        Color::Orange => s.truecolor(0xff, 0x80, 0x00).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarterturn_core::{Twist, TwistDirection};

    use super::*;

    #[test]
    fn test_solved_net() {
        let cube = Cube::new();
        let expected = "\
    WWW
    WWW
    WWW
OOO GGG RRR BBB
OOO GGG RRR BBB
OOO GGG RRR BBB
    YYY
    YYY
    YYY";
        assert_eq!(net_string(&cube, false), expected);
    }

    #[test]
    fn test_net_after_front_clockwise() {
        let mut cube = Cube::new();
        cube.twist(Twist::new(Face::F, TwistDirection::Cw))
            .expect("twist failed");
        let expected = "\
    WWW
    WWW
    OOO
OOY GGG WRR BBB
OOY GGG WRR BBB
OOY GGG WRR BBB
    RRR
    YYY
    YYY";
        assert_eq!(net_string(&cube, false), expected);
    }
}
