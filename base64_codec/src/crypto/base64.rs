use bitvec::prelude::BitVec;
use cipher_core::crypto::utils::{bits_to_bytes, bytes_to_bits};
use cipher_core::{CipherAlgorithm, CipherError, Result};

pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub const PAD: char = '=';

fn symbol_index(ch: char) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A'),
        'a'..='z' => Some(ch as u8 - b'a' + 26),
        '0'..='9' => Some(ch as u8 - b'0' + 52),
        '+' => Some(62),
        '/' => Some(63),
        _ => None,
    }
}

/// Кодирование: общий битовый поток → нули до кратности 6 → группы по 6
/// бит → символы алфавита → (3 - len mod 3) mod 3 знаков `=`.
pub fn encode(data: &[u8]) -> String {
    let mut bits = bytes_to_bits(data);
    while bits.len() % 6 != 0 {
        bits.push(false);
    }

    let padding = (3 - data.len() % 3) % 3;
    let mut out = String::with_capacity(bits.len() / 6 + padding);
    for group in bits.chunks(6) {
        let index = group
            .iter()
            .fold(0usize, |acc, bit| (acc << 1) | usize::from(*bit));
        out.push(ALPHABET[index] as char);
    }
    out.extend(std::iter::repeat_n(PAD, padding));
    out
}

/// Декодирование. Все `=` удаляются, число завершающих `=` определяет,
/// сколько битов (по 2 на знак) отбросить с конца потока. Неполная
/// последняя восьмёрка битов отбрасывается.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let pad_count = text.chars().rev().take_while(|&c| c == PAD).count();

    let mut bits = BitVec::with_capacity(text.len() * 6);
    for ch in text.chars().filter(|&c| c != PAD) {
        let index = symbol_index(ch).ok_or(CipherError::InvalidAlphabetCharacter(ch))?;
        for i in (0..6).rev() {
            bits.push((index >> i) & 1 != 0);
        }
    }

    let keep = bits.len().saturating_sub(pad_count * 2);
    bits.truncate(keep - keep % 8);
    Ok(bits_to_bytes(&bits))
}

/// Base64 как алгоритм набора: ключ не нужен, текст кодируется как UTF-8.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base64;

impl CipherAlgorithm for Base64 {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        Ok(encode(payload.as_bytes()))
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        let bytes = decode(payload)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
