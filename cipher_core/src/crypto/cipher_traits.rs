use crate::crypto::error::Result;
use std::fmt;
use std::str::FromStr;

/// Направление преобразования
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" | "enc" | "e" => Ok(Direction::Encrypt),
            "decrypt" | "dec" | "d" => Ok(Direction::Decrypt),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Общий контракт всех алгоритмов: прямое и обратное преобразование текста.
///
/// Ключ передаётся при создании конкретного алгоритма, поэтому здесь
/// остаётся только полезная нагрузка.
pub trait CipherAlgorithm {
    fn name(&self) -> &'static str;
    fn encrypt(&self, payload: &str) -> Result<String>;
    fn decrypt(&self, payload: &str) -> Result<String>;

    fn transform(&self, payload: &str, direction: Direction) -> Result<String> {
        match direction {
            Direction::Encrypt => self.encrypt(payload),
            Direction::Decrypt => self.decrypt(payload),
        }
    }
}

impl<T: CipherAlgorithm + ?Sized> CipherAlgorithm for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        (**self).encrypt(payload)
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        (**self).decrypt(payload)
    }
}
