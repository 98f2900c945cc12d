//! Session state and its transitions.
//!
//! A [`Session`] is a value. [`Session::submit_guess`] and [`Session::restart`]
//! never mutate it; they return the next session. Any transition that
//! changes health or points also deals a fresh round.

use rand::Rng;

use crate::{
    color::HexColor,
    error::GameError,
    history::History,
    round::{DEFAULT_OPTIONS, Round, build_round},
};

/// Tunables of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rules {
    pub max_health: u32,
    pub points_per_correct: u32,
    pub option_count: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_health: 10,
            points_per_correct: 100,
            option_count: DEFAULT_OPTIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    rules: Rules,
    health: u32,
    points: u32,
    is_game_over: bool,
    round: Round,
    history: History,
}

/// What happened on a single guess.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: HexColor,
    pub answer: HexColor,
    pub is_correct: bool,
    pub game_over: bool,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Result<Self, GameError> {
        let round = build_round(rules.option_count, rng)?;
        Ok(Self::with_round(rules, round))
    }

    /// A fresh session playing a given round.
    pub fn with_round(rules: Rules, round: Round) -> Self {
        Self {
            rules,
            health: rules.max_health,
            points: 0,
            is_game_over: false,
            round,
            history: History::new(),
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn answer(&self) -> HexColor {
        self.round.answer()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Score a guess against the current answer and deal the next round.
    pub fn submit_guess<R: Rng + ?Sized>(
        &self,
        guess: HexColor,
        rng: &mut R,
    ) -> Result<(Session, GuessOutcome), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }

        let answer = self.round.answer();
        let is_correct = guess == answer;

        let mut next = self.clone();
        if is_correct {
            next.points = self.points.saturating_add(self.rules.points_per_correct);
        } else {
            next.health = self.health.saturating_sub(1);
            next.is_game_over = next.health == 0;
        }
        next.history.push(answer, is_correct);
        next.round = build_round(self.rules.option_count, rng)?;

        let outcome = GuessOutcome {
            guess,
            answer,
            is_correct,
            game_over: next.is_game_over,
        };
        Ok((next, outcome))
    }

    /// Back to full health and zero points with an empty history.
    ///
    /// The round is only redealt when health or points actually change.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Session, GameError> {
        let changed = self.health != self.rules.max_health || self.points != 0;

        let round = if changed {
            build_round(self.rules.option_count, rng)?
        } else {
            self.round.clone()
        };

        Ok(Self::with_round(self.rules, round))
    }
}
