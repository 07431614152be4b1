//! Complete games driven by the minimax searcher

use std::{fmt, str::FromStr};

use log::trace;
use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::minimax::Minimax;
use crate::tictactoe::{Game, Player};

/// Who plays against the minimax engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// A second minimax engine holding the other mark
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl Opponent {
    const EXPECTED: &'static str = "minimax, random";

    pub fn as_str(self) -> &'static str {
        match self {
            Opponent::Minimax => "minimax",
            Opponent::Random => "random",
        }
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Opponent {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "optimal" => Ok(Opponent::Minimax),
            "random" => Ok(Opponent::Random),
            _ => Err(crate::Error::ParseOpponent {
                input: s.to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }
}

/// Play one game of minimax against minimax; `first` opens.
pub fn self_play(first: Player) -> crate::Result<Game> {
    let mut engines = [Minimax::new(Player::X), Minimax::new(Player::O)];
    let mut game = Game::new(first);

    while !game.is_over() {
        let engine = match game.to_move {
            Player::X => &mut engines[0],
            Player::O => &mut engines[1],
        };
        let mut scratch = game.board;
        let Some(position) = engine.choose_move(&mut scratch) else {
            break;
        };
        trace!("{} -> {position}", game.to_move);
        game.play_at(position)?;
    }

    Ok(game)
}

/// Play one game of minimax (holding `engine_side`) against random moves.
pub fn play_against_random<R: Rng>(
    engine_side: Player,
    first: Player,
    rng: &mut R,
) -> crate::Result<Game> {
    let mut engine = Minimax::new(engine_side);
    let mut game = Game::new(first);

    while !game.is_over() {
        let position = if game.to_move == engine_side {
            let mut scratch = game.board;
            match engine.choose_move(&mut scratch) {
                Some(position) => position.index(),
                None => break,
            }
        } else {
            match game.board.empty_positions().choose(rng) {
                Some(&pos) => pos,
                None => break,
            }
        };
        trace!("{} -> {position}", game.to_move);
        game.play(position)?;
    }

    Ok(game)
}

/// Play one game against the given opponent kind.
pub fn play_match<R: Rng>(
    opponent: Opponent,
    engine_side: Player,
    first: Player,
    rng: &mut R,
) -> crate::Result<Game> {
    match opponent {
        Opponent::Minimax => self_play(first),
        Opponent::Random => play_against_random(engine_side, first, rng),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::GameOutcome;

    #[test]
    fn test_self_play_draws_from_either_side() {
        for first in [Player::X, Player::O] {
            let game = self_play(first).unwrap();
            assert_eq!(game.outcome(), Some(GameOutcome::Draw));
            assert_eq!(game.moves.len(), 9);
            assert_eq!(game.moves[0].player, first);
        }
    }

    #[test]
    fn test_random_opponent_never_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..20 {
            let first = if i % 2 == 0 { Player::X } else { Player::O };
            let game = play_against_random(Player::O, first, &mut rng).unwrap();
            assert_ne!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        }
    }

    #[test]
    fn test_parse_opponent() {
        assert_eq!("Random".parse::<Opponent>().unwrap(), Opponent::Random);
        assert_eq!("minimax".parse::<Opponent>().unwrap(), Opponent::Minimax);
        let err = "genius".parse::<Opponent>().unwrap_err();
        assert!(err.to_string().contains("minimax, random"));
    }
}
