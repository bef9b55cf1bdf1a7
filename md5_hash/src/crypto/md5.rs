use crate::crypto::md5_tables::{INIT_STATE, K, SHIFTS};
use cipher_core::crypto::utils::to_hex;
use cipher_core::{CipherAlgorithm, CipherError, Result};

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 16;

pub type Digest = [u8; DIGEST_SIZE];

#[inline]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Сжатие одного 512-битного блока в состояние
fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_SIZE]) {
    let mut x = [0u32; 16];
    for (j, word) in block.chunks_exact(4).enumerate() {
        x[j] = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let round = step / 16;
        let (mixed, index) = match round {
            0 => (f(b, c, d), step),
            1 => (g(b, c, d), (5 * step + 1) % 16),
            2 => (h(b, c, d), (3 * step + 5) % 16),
            _ => (i(b, c, d), (7 * step) % 16),
        };

        let sum = a
            .wrapping_add(mixed)
            .wrapping_add(x[index])
            .wrapping_add(K[step]);
        let rotated = sum.rotate_left(SHIFTS[round][step % 4]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Инкрементальный контекст MD5 (конструкция Меркла–Дамгора).
/// Все буферы фиксированного размера, кучу не трогает.
#[derive(Clone)]
pub struct Md5Context {
    state: [u32; 4],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Длина сообщения в байтах
    length: u64,
}

impl Md5Context {
    pub fn new() -> Self {
        Self {
            state: INIT_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            length: 0,
        }
    }

    pub fn update(&mut self, mut data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];
            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffer_len = 0;
        }

        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &block);
        }

        let rest = chunks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Дополнение: бит 1, нули до длины 448 mod 512, затем исходная длина
    /// в битах (64 бита, little-endian).
    pub fn finalize(mut self) -> Digest {
        let bit_length = self.length.wrapping_mul(8);

        let mut tail = [0u8; 2 * BLOCK_SIZE];
        tail[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        tail[self.buffer_len] = 0x80;

        let tail_len = if self.buffer_len < 56 { BLOCK_SIZE } else { 2 * BLOCK_SIZE };
        tail[tail_len - 8..tail_len].copy_from_slice(&bit_length.to_le_bytes());

        for chunk in tail[..tail_len].chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &block);
        }

        let mut out = [0u8; DIGEST_SIZE];
        for (j, word) in self.state.iter().enumerate() {
            out[j * 4..j * 4 + 4].copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl Default for Md5Context {
    fn default() -> Self {
        Self::new()
    }
}

pub fn digest(message: &[u8]) -> Digest {
    let mut ctx = Md5Context::new();
    ctx.update(message);
    ctx.finalize()
}

/// Дайджест в виде 32 шестнадцатеричных символов нижнего регистра
pub fn digest_hex(message: &[u8]) -> String {
    to_hex(&digest(message))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Md5;

impl CipherAlgorithm for Md5 {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        Ok(digest_hex(payload.as_bytes()))
    }

    fn decrypt(&self, _payload: &str) -> Result<String> {
        Err(CipherError::IrreversibleOperation("MD5 is a one-way hash"))
    }
}
