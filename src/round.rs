//! Round construction: one answer plus distractors, shuffled.

use rand::{Rng, seq::SliceRandom};

use crate::{
    color::{HexColor, generate},
    error::GameError,
};

pub const DEFAULT_OPTIONS: usize = 3;
pub const MIN_OPTIONS: usize = 2;
/// One option per digit key.
pub const MAX_OPTIONS: usize = 9;

/// A swatch to guess and the options offered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    answer: HexColor,
    options: Vec<HexColor>,
}

impl Round {
    /// Build a round from known parts, checking that the options are
    /// distinct and contain the answer.
    pub fn from_parts(answer: HexColor, options: Vec<HexColor>) -> Result<Self, GameError> {
        if !options.contains(&answer) {
            return Err(GameError::InvalidRound("answer is not among the options"));
        }

        for (i, color) in options.iter().enumerate() {
            if options[i + 1..].contains(color) {
                return Err(GameError::InvalidRound("options are not distinct"));
            }
        }

        Ok(Self { answer, options })
    }

    pub fn answer(&self) -> HexColor {
        self.answer
    }

    /// Options in presentation order.
    pub fn options(&self) -> &[HexColor] {
        &self.options
    }

    pub fn is_correct(&self, guess: HexColor) -> bool {
        guess == self.answer
    }
}

/// Generate `option_count` distinct colors, take the first as the answer and
/// shuffle the lot.
pub fn build_round<R: Rng + ?Sized>(option_count: usize, rng: &mut R) -> Result<Round, GameError> {
    if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&option_count) {
        return Err(GameError::InvalidOptionCount(option_count));
    }

    let mut options = Vec::with_capacity(option_count);
    for _ in 0..option_count {
        let color = generate(&options, rng)?;
        options.push(color);
    }

    let answer = options[0];
    options.shuffle(rng);

    tracing::debug!(%answer, count = option_count, "round built");
    Ok(Round { answer, options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn color(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_build_round_invariants() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let round = build_round(DEFAULT_OPTIONS, &mut rng).unwrap();
            let unique: HashSet<_> = round.options().iter().collect();

            assert_eq!(round.options().len(), 3);
            assert_eq!(unique.len(), 3);
            assert!(round.options().contains(&round.answer()));
        }
    }

    #[test]
    fn test_answer_position_varies() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut positions = HashSet::new();

        for _ in 0..100 {
            let round = build_round(DEFAULT_OPTIONS, &mut rng).unwrap();
            let index = round
                .options()
                .iter()
                .position(|c| *c == round.answer())
                .unwrap();
            positions.insert(index);
        }

        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn test_build_round_option_count_bounds() {
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            build_round(1, &mut rng),
            Err(GameError::InvalidOptionCount(1))
        );
        assert_eq!(
            build_round(10, &mut rng),
            Err(GameError::InvalidOptionCount(10))
        );
        assert_eq!(build_round(9, &mut rng).unwrap().options().len(), 9);
    }

    #[test]
    fn test_from_parts_validation() {
        let answer = color("#1a2b3c");

        let round =
            Round::from_parts(answer, vec![answer, color("#aa00ff"), color("#00ff11")]).unwrap();
        assert!(round.is_correct(color("#1A2B3C")));
        assert!(!round.is_correct(color("#aa00ff")));

        assert!(Round::from_parts(answer, vec![color("#aa00ff"), color("#00ff11")]).is_err());
        assert!(Round::from_parts(answer, vec![answer, color("#aa00ff"), color("#AA00FF")]).is_err());
    }
}
