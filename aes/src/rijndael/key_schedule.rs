use crate::rijndael::cipher::{Block, BLOCK_SIZE};
use crate::rijndael::sbox::sbox;
use cipher_core::{CipherError, Result};

/// Максимум раундов (AES-256) плюс начальный ключ
pub const MAX_ROUND_KEYS: usize = 15;

/// Раундовые константы: x^(i-1) в GF(2^8), старший байт слова
const RCON: [u8; 11] = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Aes128),
            24 => Ok(KeySize::Aes192),
            32 => Ok(KeySize::Aes256),
            other => Err(CipherError::InvalidKeyLength(other)),
        }
    }

    /// Длина ключа в 32-битных словах (Nk)
    pub fn nk(self) -> usize {
        match self {
            KeySize::Aes128 => 4,
            KeySize::Aes192 => 6,
            KeySize::Aes256 => 8,
        }
    }

    pub fn rounds(self) -> usize {
        self.nk() + 6
    }

    pub fn bits(self) -> usize {
        self.nk() * 32
    }
}

/// Развёрнутый ключ: (rounds + 1) блоков по 16 байт в массиве
/// фиксированной длины.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: [Block; MAX_ROUND_KEYS],
    key_size: KeySize,
}

impl KeySchedule {
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    pub fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    /// Число раундовых ключей (rounds + 1)
    pub fn round_key_count(&self) -> usize {
        self.rounds() + 1
    }

    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.round_keys[..self.round_key_count()].iter()
    }
}

fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(sbox)
}

fn rot_word(word: [u8; 4]) -> [u8; 4] {
    [word[1], word[2], word[3], word[0]]
}

/// Генерация всех раундовых ключей
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    let key_size = KeySize::from_key_len(key.len())?;
    let nk = key_size.nk();
    let total_words = 4 * (key_size.rounds() + 1);

    let mut words = [[0u8; 4]; 4 * MAX_ROUND_KEYS];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        words[i] = [chunk[0], chunk[1], chunk[2], chunk[3]];
    }

    for i in nk..total_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            // только AES-256: дополнительная подстановка в середине
            temp = sub_word(temp);
        }
        let back = words[i - nk];
        words[i] = [
            back[0] ^ temp[0],
            back[1] ^ temp[1],
            back[2] ^ temp[2],
            back[3] ^ temp[3],
        ];
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; MAX_ROUND_KEYS];
    for (round, rk) in round_keys.iter_mut().enumerate().take(key_size.rounds() + 1) {
        for col in 0..4 {
            rk[col * 4..col * 4 + 4].copy_from_slice(&words[round * 4 + col]);
        }
    }

    log::debug!(
        "aes: expanded {}-bit key into {} round keys",
        key_size.bits(),
        key_size.rounds() + 1
    );

    Ok(KeySchedule { round_keys, key_size })
}
