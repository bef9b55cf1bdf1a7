use crate::number_theory::{gcd, mod_inverse};
use cipher_core::{CipherError, Result};
use num_bigint::BigUint;
use num_traits::One;

/// Фиксированная открытая экспонента
pub const DEFAULT_PUBLIC_EXPONENT: u32 = 17;

/// Пара ключей RSA: открытый (e, n) и закрытый (d, n).
/// Выводится заново при каждом вызове и нигде не хранится.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub phi: BigUint,
    #[doc(hidden)]
    pub(crate) p: BigUint,
    #[doc(hidden)]
    pub(crate) q: BigUint,
}

impl RsaKeyPair {
    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }
}

/// n = p·q, φ = (p-1)(q-1), e = 17, d = e⁻¹ mod φ
pub fn derive_keys(p: &BigUint, q: &BigUint) -> Result<RsaKeyPair> {
    derive_keys_with_exponent(p, q, &BigUint::from(DEFAULT_PUBLIC_EXPONENT))
}

/// Простота p и q не проверяется. Если gcd(e, φ) != 1, обратного к e нет
/// и ключ отвергается с `ExponentNotInvertible`.
pub fn derive_keys_with_exponent(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<RsaKeyPair> {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    if p < &two || q < &two {
        return Err(CipherError::InvalidPrimes(format!(
            "p = {p}, q = {q}: both must be at least 2"
        )));
    }

    let n = p * q;
    let phi = (p - &one) * (q - &one);

    if gcd(e, &phi) != one {
        return Err(CipherError::ExponentNotInvertible {
            e: e.to_string(),
            phi: phi.to_string(),
        });
    }
    let d = mod_inverse(e, &phi).ok_or_else(|| CipherError::ExponentNotInvertible {
        e: e.to_string(),
        phi: phi.to_string(),
    })?;

    log::debug!("rsa: n = {n}, phi = {phi}, e = {e}, d = {d}");

    Ok(RsaKeyPair {
        n,
        e: e.clone(),
        d,
        phi,
        p: p.clone(),
        q: q.clone(),
    })
}
