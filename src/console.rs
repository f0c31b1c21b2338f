//! Console presentation: glyph rendering, input parsing, announcements.
//!
//! Glyph choices follow the classic notation: `○` open water, `■` vessel,
//! `X` hit, `T` miss, `•` revealed contour around a sunk vessel. Hidden
//! grids render intact vessel cells as open water.

use crate::common::ShotOutcome;
use crate::coord::Coord;
use crate::game::MoveRecord;
use crate::grid::{CellState, Grid};

fn glyph(state: CellState, hidden: bool) -> char {
    match state {
        CellState::Empty => '○',
        CellState::Ship => {
            if hidden {
                '○'
            } else {
                '■'
            }
        }
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::NearMiss => '•',
    }
}

/// Render a grid as bordered text lines, 1-indexed headers on both axes.
pub fn render_grid(grid: &Grid) -> Vec<String> {
    let size = grid.size() as usize;
    let hidden = grid.is_hidden();
    let mut lines = Vec::with_capacity(2 * size + 2);

    let mut header = String::from("   ");
    for c in 1..=size {
        header.push_str(&format!(" {}  ", c));
    }
    lines.push(header);

    let edge = |left: char, join: char, right: char| {
        let mut line = String::from("  ");
        line.push(left);
        for c in 0..size {
            line.push_str("───");
            line.push(if c + 1 < size { join } else { right });
        }
        line
    };

    lines.push(edge('┌', '┬', '┐'));
    for r in 0..size {
        let mut line = format!("{} │", r + 1);
        for c in 0..size {
            let state = grid.cell(Coord::new(r as i16, c as i16));
            line.push_str(&format!(" {} │", glyph(state, hidden)));
        }
        lines.push(line);
        if r + 1 < size {
            lines.push(edge('├', '┼', '┤'));
        }
    }
    lines.push(edge('└', '┴', '┘'));
    lines
}

/// Display two boards side by side under their captions.
pub fn print_boards(left: &Grid, right: &Grid, left_label: &str, right_label: &str) {
    let left = render_grid(left);
    let right = render_grid(right);
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 6;
    println!();
    println!(
        "{:<width$}{}",
        format!("     {}", left_label),
        right_label,
        width = width
    );
    for (l, r) in left.iter().zip(right.iter()) {
        println!("{:<width$}{}", l, r, width = width);
    }
}

/// Banner printed once at startup.
pub fn greet(size: u8) {
    println!("=================================");
    println!("         SEA BATTLE");
    println!("=================================");
    println!("You play against the computer.");
    println!("Enter each shot as two digits,");
    println!("row first, then column, both");
    println!("between 1 and {}. Example: 1 2", size);
    println!("=================================");
}

/// 1-indexed rendering of a target, the same shape the player types.
pub fn format_target(c: Coord) -> String {
    format!("{} {}", c.row + 1, c.col + 1)
}

/// Report a resolved move. Computer shots are echoed so the player can
/// follow along.
pub fn announce_shot(record: &MoveRecord, computer: bool) {
    if computer {
        println!("\nComputer fires at {}", format_target(record.target));
    }
    match record.outcome {
        ShotOutcome::Sunk => println!("Vessel destroyed!"),
        ShotOutcome::Hit => println!("Vessel hit!"),
        ShotOutcome::Miss => println!("Miss!"),
    }
}

/// Parse a target typed as exactly two digits (spaces ignored), 1-indexed,
/// each within [1, size]. Returns the 0-indexed coordinate.
pub fn parse_target(input: &str, size: u8) -> Option<Coord> {
    let digits: Vec<char> = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    if digits.len() != 2 {
        return None;
    }
    let row = digits[0].to_digit(10)?;
    let col = digits[1].to_digit(10)?;
    if !(1..=size as u32).contains(&row) || !(1..=size as u32).contains(&col) {
        return None;
    }
    Some(Coord::new(row as i16 - 1, col as i16 - 1))
}
