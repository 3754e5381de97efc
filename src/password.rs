use crate::errors::GenerationError;
use crate::generators::{ build_pool, draw, ClassFlags };

use std::fmt;

use rand::rngs::SmallRng;
use rand::{ Rng, SeedableRng };

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RngTier {
    /// General-purpose PRNG. Not suitable where an attacker may observe outputs.
    #[default]
    Fast,
    Secure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub flags: ClassFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    value: String,
    pool_size: usize,
}

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Serialize, Debug)]
pub struct PasswordReport<'a> {
    pub password: &'a str,
    pub length: usize,
    pub pool_size: usize,
    pub classes: ClassFlags,
    pub rng: RngTier,
}

impl<'a> PasswordReport<'a> {
    pub fn new(password: &'a GeneratedPassword, classes: ClassFlags, rng: RngTier) -> Self {
        Self {
            password: password.as_str(),
            length: password.len(),
            pool_size: password.pool_size(),
            classes,
            rng,
        }
    }
}

pub fn generate(request: &PasswordRequest, tier: RngTier) -> Result<GeneratedPassword, GenerationError> {
    match tier {
        RngTier::Fast => generate_with(request, &mut SmallRng::from_os_rng()),
        RngTier::Secure => generate_with(request, &mut rand::rng()),
    }
}

pub fn generate_with<R: Rng>(request: &PasswordRequest, rng: &mut R) -> Result<GeneratedPassword, GenerationError> {
    let pool = build_pool(&request.flags);

    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    log::debug!("drawing {} chars from a pool of {}", request.length, pool.len());

    let value: String = (0..request.length)
        .map(|_| draw(&pool, rng))
        .collect();

    Ok(GeneratedPassword {
        value,
        pool_size: pool.len(),
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;

    use super::*;
    use crate::generators::{ DIGITS, LOWERCASE, SYMBOLS, UPPERCASE };
    use crate::validation::{ MAX_LENGTH, MIN_LENGTH };

    fn init() {
        let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Trace).try_init();
    }

    fn flags_from_bits(bits: u8) -> ClassFlags {
        ClassFlags {
            upper: bits & 0b0001 != 0,
            lower: bits & 0b0010 != 0,
            digits: bits & 0b0100 != 0,
            symbols: bits & 0b1000 != 0,
        }
    }

    #[test]
    fn every_length_and_class_subset() {
        init();
        let mut rng = StdRng::seed_from_u64(2024);

        for bits in 1u8..16 {
            let flags = flags_from_bits(bits);
            let pool = build_pool(&flags);

            for length in MIN_LENGTH..=MAX_LENGTH {
                let request = PasswordRequest { length, flags };
                let password = generate_with(&request, &mut rng).unwrap();

                assert_eq!(password.len(), length);
                assert_eq!(password.pool_size(), pool.len());
                assert!(password.as_str().chars().all(|c| pool.contains(&c)));
            }
        }
    }

    #[test]
    fn digits_only_eight() {
        let request = PasswordRequest {
            length: 8,
            flags: ClassFlags { digits: true, ..Default::default() },
        };

        for tier in [RngTier::Fast, RngTier::Secure] {
            let password = generate(&request, tier).unwrap();

            assert_eq!(password.len(), 8);
            assert_eq!(password.pool_size(), 10);
            assert!(password.as_str().chars().all(|c| DIGITS.contains(c)));
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        let request = PasswordRequest { length: 8, flags: ClassFlags::default() };

        assert_eq!(generate(&request, RngTier::Fast), Err(GenerationError::EmptyPool));
    }

    #[test]
    fn single_class_never_leaks_others() {
        let mut rng = StdRng::seed_from_u64(9);
        let request = PasswordRequest {
            length: 16,
            flags: ClassFlags { symbols: true, ..Default::default() },
        };

        for _ in 0..200 {
            let password = generate_with(&request, &mut rng).unwrap();
            assert!(password.as_str().chars().all(|c| SYMBOLS.contains(c)));
            assert!(!password.as_str().chars().any(|c| UPPERCASE.contains(c) || LOWERCASE.contains(c)));
        }
    }

    #[test]
    fn report_serializes() {
        let mut rng = StdRng::seed_from_u64(1);
        let flags = ClassFlags { upper: true, lower: true, ..Default::default() };
        let password = generate_with(&PasswordRequest { length: 12, flags }, &mut rng).unwrap();

        let json = serde_json::to_value(PasswordReport::new(&password, flags, RngTier::Secure)).unwrap();

        assert_eq!(json["password"], password.as_str());
        assert_eq!(json["length"], 12);
        assert_eq!(json["pool_size"], 52);
        assert_eq!(json["rng"], "secure");
        assert_eq!(json["classes"]["upper"], true);
        assert_eq!(json["classes"]["digits"], false);
    }
}
