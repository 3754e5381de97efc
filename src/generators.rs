use rand::Rng;
use serde::Serialize;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*_()+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Symbols,
}

impl CharClass {
    /// Pool order: uppercase, lowercase, digits, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "Include UpperCase",
            CharClass::Lower => "Include LowerCase",
            CharClass::Digits => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassFlags {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassFlags {
    pub fn any(&self) -> bool {
        self.upper || self.lower || self.digits || self.symbols
    }

    pub fn is_set(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        let slot = match class {
            CharClass::Upper => &mut self.upper,
            CharClass::Lower => &mut self.lower,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        };
        *slot = on;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.is_set(class));
    }
}

pub fn build_pool(flags: &ClassFlags) -> Vec<char> {
    let mut pool: Vec<char> = Vec::new();

    for class in CharClass::ALL {
        if flags.is_set(class) {
            pool.extend(class.alphabet().chars());
        }
    }

    pool
}

/// Uniform draw with replacement. Caller guarantees `pool` is non-empty.
pub fn draw<R: Rng>(pool: &[char], rng: &mut R) -> char {
    let chosen_index = rng.random_range(0..pool.len());

    pool[chosen_index]
}
