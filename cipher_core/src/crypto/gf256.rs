/// Редукционный байт полинома AES: x^8 + x^4 + x^3 + x + 1 = 0x11B
pub const AES_REDUCTION: u8 = 0x1B;

/// Умножение на x в GF(2^8)
#[inline]
pub fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ AES_REDUCTION
    } else {
        shifted
    }
}

/// Умножение в GF(2^8) по полиному 0x11B
pub fn gf_mul(a: u8, b: u8) -> u8 {
    let mut result: u8 = 0;
    let mut a_val = a;
    let mut b_val = b;

    // Школьный алгоритм: сдвиг-и-сложение с редукцией на каждом шаге
    while b_val != 0 {
        if b_val & 1 != 0 {
            result ^= a_val;
        }
        a_val = xtime(a_val);
        b_val >>= 1;
    }

    result
}

/// Возведение в степень в том же поле (square-and-multiply)
pub fn gf_pow(a: u8, exp: usize) -> u8 {
    if exp == 0 {
        return 1;
    }
    if a == 0 {
        return 0;
    }

    let mut result: u8 = 1;
    let mut base = a;
    let mut exponent = exp;

    while exponent > 0 {
        if exponent & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exponent >>= 1;
    }

    result
}

/// Мультипликативный обратный: a^254 = a^-1, для нуля по соглашению 0
pub fn gf_inv(a: u8) -> u8 {
    if a == 0 { 0 } else { gf_pow(a, 254) }
}
