use cipher_core::crypto::gf256::gf_inv;
use once_cell::sync::Lazy;

/// Прямая таблица S-блока, строится один раз на процесс
pub static SBOX: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut table = [0u8; 256];
    for (x, slot) in table.iter_mut().enumerate() {
        *slot = affine(gf_inv(x as u8));
    }
    table
});

/// Обратная таблица, получается обращением прямой
pub static INV_SBOX: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut table = [0u8; 256];
    for (x, &y) in SBOX.iter().enumerate() {
        table[y as usize] = x as u8;
    }
    table
});

/// Аффинное преобразование FIPS-197:
/// b'_i = b_i ⊕ b_{i+4} ⊕ b_{i+5} ⊕ b_{i+6} ⊕ b_{i+7} ⊕ c_i, c = 0x63
fn affine(inv: u8) -> u8 {
    let mut result = 0u8;

    for i in 0..8 {
        let b_i = (inv >> i) & 1;
        let b_i4 = (inv >> ((i + 4) % 8)) & 1;
        let b_i5 = (inv >> ((i + 5) % 8)) & 1;
        let b_i6 = (inv >> ((i + 6) % 8)) & 1;
        let b_i7 = (inv >> ((i + 7) % 8)) & 1;
        let c_i = (0x63 >> i) & 1;

        result |= (b_i ^ b_i4 ^ b_i5 ^ b_i6 ^ b_i7 ^ c_i) << i;
    }

    result
}

#[inline]
pub fn sbox(x: u8) -> u8 {
    SBOX[x as usize]
}

#[inline]
pub fn inv_sbox(x: u8) -> u8 {
    INV_SBOX[x as usize]
}
