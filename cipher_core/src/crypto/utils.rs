use crate::crypto::error::{CipherError, Result};
use bitvec::prelude::BitVec;

/// Байты в строку из шестнадцатеричных цифр (нижний регистр)
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text.trim())
        .map_err(|e| CipherError::MalformedCiphertext(format!("bad hex {text:?}: {e}")))
}

/// Развёртка байтов в битовый поток, старший бит первым
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Сборка байтов из битового потока. Неполная последняя группа
/// дополняется нулями справа.
pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// PKCS#7: дополняет до ближайшей границы блока; кратный блоку вход
/// получает целый блок дополнения.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding_length = block_size - (data.len() % block_size);
    let mut out = Vec::with_capacity(data.len() + padding_length);
    out.extend_from_slice(data);
    out.extend(std::iter::repeat_n(padding_length as u8, padding_length));
    out
}

/// Снимает PKCS#7, если дополнение корректно; иначе `None`.
pub fn pkcs7_unpad(data: &[u8]) -> Option<&[u8]> {
    let &last_byte = data.last()?;
    let pad_len = last_byte as usize;
    if pad_len == 0 || pad_len > data.len() {
        return None;
    }
    let (body, pad) = data.split_at(data.len() - pad_len);
    if pad.iter().all(|&b| b == last_byte) {
        Some(body)
    } else {
        None
    }
}
