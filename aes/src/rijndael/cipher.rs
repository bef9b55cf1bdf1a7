use crate::rijndael::key_schedule::{expand_key, KeySchedule, KeySize};
use crate::rijndael::sbox::{inv_sbox, sbox};
use cipher_core::crypto::gf256::{gf_mul, xtime};
use cipher_core::crypto::utils::{from_hex, pkcs7_pad, pkcs7_unpad, to_hex};
use cipher_core::{CipherAlgorithm, CipherError, Result};

pub const BLOCK_SIZE: usize = 16;

/// Состояние AES: 16 байт по столбцам, индекс i → строка i % 4, столбец i / 4
pub type Block = [u8; BLOCK_SIZE];

#[inline]
fn add_round_key(state: &mut Block, round_key: &Block) {
    for (byte, k) in state.iter_mut().zip(round_key) {
        *byte ^= k;
    }
}

fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Строка r циклически сдвигается влево на r позиций
fn shift_rows(state: &mut Block) {
    let old = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[c * 4 + r] = old[((c + r) % 4) * 4 + r];
        }
    }
}

fn inv_shift_rows(state: &mut Block) {
    let old = *state;
    for r in 1..4 {
        for c in 0..4 {
            state[c * 4 + r] = old[((c + 4 - r) % 4) * 4 + r];
        }
    }
}

fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];
        // 2·x = xtime(x), 3·x = xtime(x) ⊕ x
        col[0] = xtime(a[0]) ^ (xtime(a[1]) ^ a[1]) ^ a[2] ^ a[3];
        col[1] = a[0] ^ xtime(a[1]) ^ (xtime(a[2]) ^ a[2]) ^ a[3];
        col[2] = a[0] ^ a[1] ^ xtime(a[2]) ^ (xtime(a[3]) ^ a[3]);
        col[3] = (xtime(a[0]) ^ a[0]) ^ a[1] ^ a[2] ^ xtime(a[3]);
    }
}

fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];
        col[0] = gf_mul(a[0], 0x0e) ^ gf_mul(a[1], 0x0b) ^ gf_mul(a[2], 0x0d) ^ gf_mul(a[3], 0x09);
        col[1] = gf_mul(a[0], 0x09) ^ gf_mul(a[1], 0x0e) ^ gf_mul(a[2], 0x0b) ^ gf_mul(a[3], 0x0d);
        col[2] = gf_mul(a[0], 0x0d) ^ gf_mul(a[1], 0x09) ^ gf_mul(a[2], 0x0e) ^ gf_mul(a[3], 0x0b);
        col[3] = gf_mul(a[0], 0x0b) ^ gf_mul(a[1], 0x0d) ^ gf_mul(a[2], 0x09) ^ gf_mul(a[3], 0x0e);
    }
}

/// Шифрование блока; `observe(round, state)` вызывается после
/// начального AddRoundKey (round = 0) и после каждого раунда.
fn encrypt_block_internal<F>(block: &Block, schedule: &KeySchedule, mut observe: F) -> Block
where
    F: FnMut(usize, &Block),
{
    let mut state = *block;
    let nr = schedule.rounds();

    add_round_key(&mut state, schedule.round_key(0));
    observe(0, &state);

    for round in 1..=nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        if round != nr {
            mix_columns(&mut state);
        }
        add_round_key(&mut state, schedule.round_key(round));
        observe(round, &state);
    }
    state
}

/// Точная структурная инверсия шифрования
fn decrypt_block_internal(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;
    let nr = schedule.rounds();

    add_round_key(&mut state, schedule.round_key(nr));
    for round in (0..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
        if round != 0 {
            inv_mix_columns(&mut state);
        }
    }
    state
}

pub fn aes_encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    encrypt_block_internal(block, schedule, |_, _| {})
}

pub fn aes_decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    decrypt_block_internal(block, schedule)
}

/// Приводит вход к одному блоку. Короче 16 байт: PKCS#7; ровно 16: как есть;
/// длиннее: берутся первые 16 байт.
pub fn pad_block(data: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    if data.len() < BLOCK_SIZE {
        block.copy_from_slice(&pkcs7_pad(data, BLOCK_SIZE));
    } else {
        if data.len() > BLOCK_SIZE {
            log::warn!(
                "aes: input of {} bytes truncated to a single {BLOCK_SIZE}-byte block",
                data.len()
            );
        }
        block.copy_from_slice(&data[..BLOCK_SIZE]);
    }
    block
}

/// AES с одним блоком, без режима сцепления.
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Ключ 16/24/32 байта, иначе `InvalidKeyLength` до каких-либо вычислений
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: expand_key(key)?,
        })
    }

    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    pub fn encrypt_block(&self, block: &Block) -> Block {
        aes_encrypt_block(block, &self.schedule)
    }

    pub fn decrypt_block(&self, block: &Block) -> Block {
        aes_decrypt_block(block, &self.schedule)
    }

    /// Шифрование с записью состояния после каждого раунда:
    /// rounds + 1 снимков, последний совпадает с шифртекстом.
    pub fn encrypt_block_traced(&self, block: &Block) -> (Block, Vec<Block>) {
        let mut trace = Vec::with_capacity(self.rounds() + 1);
        let out = encrypt_block_internal(block, &self.schedule, |_, state| trace.push(*state));
        (out, trace)
    }
}

impl CipherAlgorithm for Aes {
    fn name(&self) -> &'static str {
        "aes"
    }

    /// Текст → один блок → 32 шестнадцатеричных символа
    fn encrypt(&self, payload: &str) -> Result<String> {
        let block = pad_block(payload.as_bytes());
        Ok(to_hex(&self.encrypt_block(&block)))
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        let bytes = from_hex(payload)?;
        let block: Block = bytes.as_slice().try_into().map_err(|_| {
            CipherError::MalformedCiphertext(format!(
                "expected {BLOCK_SIZE} bytes of hex, got {}",
                bytes.len()
            ))
        })?;

        let plain = self.decrypt_block(&block);
        let body = pkcs7_unpad(&plain).unwrap_or(&plain[..]);
        Ok(String::from_utf8_lossy(body).into_owned())
    }
}
