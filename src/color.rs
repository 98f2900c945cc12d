//! Hex color values and the random color generator.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::GameError;

/// Number of hex digits in a color triplet.
pub const DIGITS: usize = 6;

/// Upper bound on redraws before the generator gives up.
pub const MAX_ATTEMPTS: usize = 1024;

/// A `#RRGGBB` color. Comparison ignores the case it was written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor(u32);

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// The form shown to the player, e.g. `#1A2B3C`.
    pub fn to_upper(self) -> String {
        format!("#{:06X}", self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());

        if digits.len() != DIGITS || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GameError::InvalidColor(s.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|_| GameError::InvalidColor(s.to_string()))
    }
}

/// Draw a color that is not in `existing`.
///
/// Every digit is drawn independently from the 16 hex values. The whole
/// triplet is redrawn on collision, up to [`MAX_ATTEMPTS`] times.
pub fn generate<R: Rng + ?Sized>(
    existing: &[HexColor],
    rng: &mut R,
) -> Result<HexColor, GameError> {
    for _ in 0..MAX_ATTEMPTS {
        let color = random_color(rng);
        if !existing.contains(&color) {
            return Ok(color);
        }
    }

    tracing::error!(existing = existing.len(), "color generator exhausted");
    Err(GameError::ColorSpaceExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let value = (0..DIGITS).fold(0u32, |acc, _| (acc << 4) | rng.gen_range(0..16u32));
    HexColor(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn is_hex_triplet(s: &str) -> bool {
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_generated_colors_are_hex_triplets() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let color = generate(&[], &mut rng).unwrap();
            assert!(is_hex_triplet(&color.to_string()), "{color}");
            assert!(is_hex_triplet(&color.to_upper()));
        }
    }

    #[test]
    fn test_generate_skips_existing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut existing = Vec::new();

        for _ in 0..50 {
            let color = generate(&existing, &mut rng).unwrap();
            assert!(!existing.contains(&color));
            existing.push(color);
        }
    }

    #[test]
    fn test_generate_uses_all_digits() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let color = generate(&[], &mut rng).unwrap();
            seen.extend(color.to_string()[1..].chars());
        }

        assert_eq!(seen.len(), 16);
    }

    /// Always yields zero, so every draw is `#000000`.
    struct ZeroRng;

    impl rand::RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    #[test]
    fn test_generate_bounded_retries() {
        let black = HexColor::from_rgb(0, 0, 0);

        assert_eq!(generate(&[], &mut ZeroRng), Ok(black));
        assert_eq!(
            generate(&[black], &mut ZeroRng),
            Err(GameError::ColorSpaceExhausted {
                attempts: MAX_ATTEMPTS
            })
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: HexColor = "#1a2b3c".parse().unwrap();
        let upper: HexColor = "#1A2B3C".parse().unwrap();
        let bare: HexColor = "1a2B3c".parse().unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, bare);
        assert_eq!(lower.to_string(), "#1a2b3c");
        assert_eq!(lower.to_upper(), "#1A2B3C");
        assert_eq!(lower.rgb(), (0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#ggg000", "12 456", "#+12345"] {
            assert!(
                matches!(bad.parse::<HexColor>(), Err(GameError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_rgb() {
        assert_eq!(HexColor::from_rgb(0xff, 0, 0).to_upper(), "#FF0000");
        assert_eq!(HexColor::from_rgb(0, 0, 0).to_string(), "#000000");
    }
}
