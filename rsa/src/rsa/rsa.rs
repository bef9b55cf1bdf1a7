use crate::number_theory::mod_pow;
use crate::rsa::keygen::{derive_keys_with_exponent, RsaKeyPair};
use cipher_core::{CipherAlgorithm, CipherError, Result};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Простые числа, которые подставляются, если ключ не разобран
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultPrimes {
    pub p: u64,
    pub q: u64,
}

impl Default for DefaultPrimes {
    fn default() -> Self {
        Self { p: 61, q: 53 }
    }
}

#[derive(Clone, Debug)]
pub struct RsaService {
    keypair: RsaKeyPair,
}

impl RsaService {
    pub fn new(keypair: RsaKeyPair) -> Self {
        Self { keypair }
    }

    pub fn from_primes(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<Self> {
        Ok(Self::new(derive_keys_with_exponent(p, q, e)?))
    }

    /// Ключ в виде "p,q". Если он не разбирается ровно на два числа,
    /// молча берутся `defaults`.
    pub fn from_key_text(key: &str, defaults: DefaultPrimes, e: u64) -> Result<Self> {
        let (p, q) = parse_primes(key).unwrap_or_else(|| {
            log::debug!(
                "rsa: key {key:?} is not a \"p,q\" pair, using p = {}, q = {}",
                defaults.p,
                defaults.q
            );
            (BigUint::from(defaults.p), BigUint::from(defaults.q))
        });
        Self::from_primes(&p, &q, &BigUint::from(e))
    }

    pub fn keypair(&self) -> &RsaKeyPair {
        &self.keypair
    }

    /// c = code^e mod n. Коды >= n не отвергаются, результат для них
    /// не восстановим.
    pub fn encrypt_char(&self, code: &BigUint) -> BigUint {
        mod_pow(code, &self.keypair.e, &self.keypair.n)
    }

    pub fn decrypt_char(&self, ciphertext: &BigUint) -> BigUint {
        mod_pow(ciphertext, &self.keypair.d, &self.keypair.n)
    }

    /// Каждый символ шифруется отдельно, результат: числа через запятую
    pub fn encrypt_text(&self, text: &str) -> String {
        text.chars()
            .map(|ch| self.encrypt_char(&BigUint::from(ch as u32)).to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn decrypt_text(&self, ciphertext: &str) -> Result<String> {
        if ciphertext.trim().is_empty() {
            return Ok(String::new());
        }
        ciphertext
            .split(',')
            .map(|item| {
                let c: BigUint = item.trim().parse().map_err(|_| {
                    CipherError::MalformedCiphertext(format!("{item:?} is not an integer"))
                })?;
                let code = self.decrypt_char(&c);
                code.to_u32()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        CipherError::MalformedCiphertext(format!(
                            "{code} is not a character code"
                        ))
                    })
            })
            .collect()
    }

    pub fn public_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.e.clone())
    }

    pub fn private_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.d.clone())
    }
}

fn parse_primes(key: &str) -> Option<(BigUint, BigUint)> {
    let parts: Vec<&str> = key.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    let p = parts[0].trim().parse().ok()?;
    let q = parts[1].trim().parse().ok()?;
    Some((p, q))
}

impl CipherAlgorithm for RsaService {
    fn name(&self) -> &'static str {
        "rsa"
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        Ok(self.encrypt_text(payload))
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        self.decrypt_text(payload)
    }
}
