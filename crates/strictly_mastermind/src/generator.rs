//! Random code generation.

use crate::{CODE_LENGTH, Code, ColorIndex, SessionError};
use rand::Rng;
use tracing::{instrument, trace, warn};

/// Draws codes from a shrinking pool of colors.
///
/// Each pick is uniform over the colors still in the pool and removes that
/// color. When the pool runs dry before the code is long enough it is
/// refilled, so a code only repeats a color when there are fewer colors than
/// slots.
pub struct CodeGenerator<'a, R: Rng> {
    rng: &'a mut R,
}

impl<'a, R: Rng> CodeGenerator<'a, R> {
    /// Creates a generator drawing from the given random source.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Generates `length` colors from `[0, num_colors)`.
    #[instrument(skip(self))]
    pub fn generate(&mut self, length: usize, num_colors: u8) -> Vec<ColorIndex> {
        if num_colors == 0 {
            warn!("No colors to draw from");
            return Vec::new();
        }

        let mut pool: Vec<ColorIndex> = Vec::with_capacity(usize::from(num_colors));
        let mut code = Vec::with_capacity(length);
        while code.len() < length {
            if pool.is_empty() {
                trace!(remaining = length - code.len(), "Refilling color pool");
                pool.extend(ColorIndex::all(num_colors));
            }
            let pick = self.rng.random_range(0..pool.len());
            code.push(pool.remove(pick));
        }
        code
    }

    /// Generates a full-length code.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfiguration` if `num_colors` is zero.
    #[instrument(skip(self))]
    pub fn generate_code(&mut self, num_colors: u8) -> Result<Code, SessionError> {
        if num_colors == 0 {
            return Err(SessionError::InvalidConfiguration(
                "At least one color is required".to_string(),
            ));
        }
        Code::try_from(self.generate(CODE_LENGTH, num_colors).as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_COLORS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_codes_never_repeat_colors() {
        let mut rng = seeded_rng();
        let mut generator = CodeGenerator::new(&mut rng);
        for num_colors in 4..=MAX_COLORS {
            for _ in 0..200 {
                let code = generator.generate_code(num_colors).expect("valid color count");
                assert!(code.has_distinct_colors(), "{code} repeats a color");
                assert!(code.colors().iter().all(|c| c.index() < num_colors));
            }
        }
    }

    #[test]
    fn test_four_colors_use_every_color() {
        let mut rng = seeded_rng();
        let code = CodeGenerator::new(&mut rng)
            .generate_code(4)
            .expect("valid color count");
        let mut indices = code.colors().map(|c| c.index());
        indices.sort();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn test_pool_refills_when_too_few_colors() {
        let mut rng = seeded_rng();
        let colors = CodeGenerator::new(&mut rng).generate(CODE_LENGTH, 3);
        assert_eq!(colors.len(), CODE_LENGTH);
        // The first pass drains the pool, so it holds each color exactly once.
        let mut first_pass = colors[..3].iter().map(|c| c.index()).collect::<Vec<_>>();
        first_pass.sort();
        assert_eq!(first_pass, vec![0, 1, 2]);
        assert!(colors[3].index() < 3);
    }

    #[test]
    fn test_single_color_fills_every_slot() {
        let mut rng = seeded_rng();
        let colors = CodeGenerator::new(&mut rng).generate(CODE_LENGTH, 1);
        assert_eq!(colors, vec![ColorIndex::new(0); CODE_LENGTH]);
    }

    #[test]
    fn test_zero_colors_rejected() {
        let mut rng = seeded_rng();
        let mut generator = CodeGenerator::new(&mut rng);
        assert!(generator.generate(CODE_LENGTH, 0).is_empty());
        assert!(matches!(
            generator.generate_code(0),
            Err(SessionError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_successive_codes_are_independent() {
        let mut rng = seeded_rng();
        let mut generator = CodeGenerator::new(&mut rng);
        let codes = (0..20)
            .map(|_| generator.generate_code(7).expect("valid color count"))
            .collect::<Vec<_>>();
        assert!(codes.iter().any(|c| *c != codes[0]));
    }
}
