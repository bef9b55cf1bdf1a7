use crate::config::SuiteConfig;
use base64_codec::Base64;
use cipher_core::{CipherAlgorithm, Direction, Result};
use classical::{Caesar, Vigenere};
use md5_hash::Md5;
use rijndael::Aes;
use rsa::RsaService;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Caesar,
    Vigenere,
    Base64,
    Md5,
    Aes,
    Rsa,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Caesar,
        Algorithm::Vigenere,
        Algorithm::Base64,
        Algorithm::Md5,
        Algorithm::Aes,
        Algorithm::Rsa,
    ];

    /// Есть ли обратное преобразование
    pub fn is_reversible(self) -> bool {
        !matches!(self, Algorithm::Md5)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Base64 => "base64",
            Algorithm::Md5 => "md5",
            Algorithm::Aes => "aes",
            Algorithm::Rsa => "rsa",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.to_string() == wanted)
            .ok_or_else(|| format!("unknown algorithm: {wanted}"))
    }
}

/// Один собранный алгоритм с уже разобранным ключом.
#[derive(Clone, Debug)]
pub enum SuiteCipher {
    Caesar(Caesar),
    Vigenere(Vigenere),
    Base64(Base64),
    Md5(Md5),
    Aes(Aes),
    Rsa(RsaService),
}

impl SuiteCipher {
    /// Ключ интерпретируется по-своему для каждого алгоритма:
    /// сдвиг, ключевое слово, байты UTF-8 или пара "p,q".
    /// Base64 и MD5 ключ игнорируют.
    pub fn build(algorithm: Algorithm, key: &str, config: &SuiteConfig) -> Result<Self> {
        let cipher = match algorithm {
            Algorithm::Caesar => {
                SuiteCipher::Caesar(Caesar::from_key(key, config.default_caesar_shift))
            }
            Algorithm::Vigenere => SuiteCipher::Vigenere(Vigenere::new(key)?),
            Algorithm::Base64 => SuiteCipher::Base64(Base64),
            Algorithm::Md5 => SuiteCipher::Md5(Md5),
            Algorithm::Aes => SuiteCipher::Aes(Aes::new(key.as_bytes())?),
            Algorithm::Rsa => SuiteCipher::Rsa(RsaService::from_key_text(
                key,
                config.default_rsa_primes,
                config.rsa_public_exponent,
            )?),
        };
        Ok(cipher)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            SuiteCipher::Caesar(_) => Algorithm::Caesar,
            SuiteCipher::Vigenere(_) => Algorithm::Vigenere,
            SuiteCipher::Base64(_) => Algorithm::Base64,
            SuiteCipher::Md5(_) => Algorithm::Md5,
            SuiteCipher::Aes(_) => Algorithm::Aes,
            SuiteCipher::Rsa(_) => Algorithm::Rsa,
        }
    }

    fn inner(&self) -> &dyn CipherAlgorithm {
        match self {
            SuiteCipher::Caesar(c) => c,
            SuiteCipher::Vigenere(c) => c,
            SuiteCipher::Base64(c) => c,
            SuiteCipher::Md5(c) => c,
            SuiteCipher::Aes(c) => c,
            SuiteCipher::Rsa(c) => c,
        }
    }
}

impl CipherAlgorithm for SuiteCipher {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn encrypt(&self, payload: &str) -> Result<String> {
        self.inner().encrypt(payload)
    }

    fn decrypt(&self, payload: &str) -> Result<String> {
        self.inner().decrypt(payload)
    }
}

pub fn run(
    algorithm: Algorithm,
    direction: Direction,
    payload: &str,
    key: &str,
    config: &SuiteConfig,
) -> Result<String> {
    SuiteCipher::build(algorithm, key, config)?.transform(payload, direction)
}

/// Результат с проверкой обратным преобразованием.
/// `round_trip_ok` равен `None` для MD5 и для расшифрования.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verified {
    pub output: String,
    pub round_trip_ok: Option<bool>,
}

pub fn run_verified(
    algorithm: Algorithm,
    direction: Direction,
    payload: &str,
    key: &str,
    config: &SuiteConfig,
) -> Result<Verified> {
    let cipher = SuiteCipher::build(algorithm, key, config)?;
    let output = cipher.transform(payload, direction)?;

    if direction == Direction::Decrypt || !algorithm.is_reversible() {
        return Ok(Verified {
            output,
            round_trip_ok: None,
        });
    }

    let restored = cipher.decrypt(&output)?;
    let ok = restored == payload;
    if !ok {
        log::warn!("{algorithm}: round trip gave {restored:?} instead of {payload:?}");
    }
    Ok(Verified {
        output,
        round_trip_ok: Some(ok),
    })
}
