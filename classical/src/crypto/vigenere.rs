use crate::crypto::shift_letter;
use cipher_core::{CipherAlgorithm, CipherError, Direction, Result};

/// Шифр Виженера.
///
/// Ключевое слово нормализуется к заглавным латинским буквам, всё прочее
/// отбрасывается. Индекс ключа продвигается только на буквах текста,
/// одинаково при шифровании и расшифровании, поэтому знаки препинания
/// не сбивают синхронизацию.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vigenere {
    /// Сдвиги 0..26, по одному на букву ключевого слова
    shifts: Vec<u8>,
}

impl Vigenere {
    pub fn new(keyword: &str) -> Result<Self> {
        let shifts: Vec<u8> = keyword
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase() as u8 - b'A')
            .collect();

        if shifts.is_empty() {
            return Err(CipherError::MissingKeyword);
        }
        Ok(Self { shifts })
    }

    /// Нормализованное ключевое слово (заглавные буквы)
    pub fn keyword(&self) -> String {
        self.shifts.iter().map(|&s| (s + b'A') as char).collect()
    }

    pub fn apply(&self, text: &str, direction: Direction) -> String {
        let mut key_index = 0usize;
        text.chars()
            .map(|ch| {
                if !ch.is_ascii_alphabetic() {
                    return ch;
                }
                let k = self.shifts[key_index % self.shifts.len()];
                key_index += 1;
                match direction {
                    Direction::Encrypt => shift_letter(ch, k),
                    Direction::Decrypt => shift_letter(ch, (26 - k) % 26),
                }
            })
            .collect()
    }
}

impl CipherAlgorithm for Vigenere {
    fn name(&self) -> &'static str {
        "vigenere"
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        Ok(self.apply(payload, Direction::Encrypt))
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        Ok(self.apply(payload, Direction::Decrypt))
    }
}
