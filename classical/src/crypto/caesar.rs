use crate::crypto::shift_letter;
use cipher_core::{CipherAlgorithm, Direction, Result};

/// Сдвиг по умолчанию, если ключ не разбирается как целое число
pub const DEFAULT_SHIFT: i64 = 3;

/// Шифр Цезаря: каждая латинская буква сдвигается на `shift` позиций,
/// регистр сохраняется, прочие символы проходят без изменений.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Любой сдвиг приводится к диапазону 0..26 (отрицательные тоже).
    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(26) as u8,
        }
    }

    /// Ключ из текста. Нечисловой ключ молча заменяется на `default_shift`.
    pub fn from_key(key: &str, default_shift: i64) -> Self {
        let shift = match key.trim().parse::<i64>() {
            Ok(s) => s,
            Err(_) => {
                log::debug!("caesar: key {key:?} is not an integer, using shift {default_shift}");
                default_shift
            }
        };
        Self::new(shift)
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    pub fn apply(&self, text: &str, direction: Direction) -> String {
        shift_text(text, self.shift, direction)
    }
}

impl Default for Caesar {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

/// Прямой сдвиг: (p + s) mod 26; обратный: (p - s + 26) mod 26
pub fn shift_text(text: &str, shift: u8, direction: Direction) -> String {
    let shift = shift % 26;
    let effective = match direction {
        Direction::Encrypt => shift,
        Direction::Decrypt => (26 - shift) % 26,
    };
    text.chars().map(|ch| shift_letter(ch, effective)).collect()
}

impl CipherAlgorithm for Caesar {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        Ok(self.apply(payload, Direction::Encrypt))
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        Ok(self.apply(payload, Direction::Decrypt))
    }
}
