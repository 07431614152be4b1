//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, GameOutcome};

/// Create a progress bar for a series of games
pub fn create_game_progress(total_games: u64) -> crate::Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map_err(|e| crate::Error::ProgressBarTemplate {
            message: e.to_string(),
        })?
        .progress_chars("=>-");
    pb.set_style(style);
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with row and column indices
pub fn format_board(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for row in 0..3 {
        out.push_str(&format!("  {row}"));
        for col in 0..3 {
            out.push(' ');
            out.push(board.get(row * 3 + col).to_char());
        }
        if row < 2 {
            out.push('\n');
        }
    }
    out
}

/// Announcement for a finished game
pub fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(player) => format!("{player} wins!"),
        GameOutcome::Draw => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn test_format_board() {
        let board = Board::from_string("X...O...X").unwrap();
        assert_eq!(format_board(&board), "    0 1 2\n  0 X . .\n  1 . O .\n  2 . . X");
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(GameOutcome::Win(Player::O)), "O wins!");
        assert_eq!(describe_outcome(GameOutcome::Draw), "It's a draw!");
    }
}
