use thiserror::Error;

/// Ошибки всех алгоритмов набора.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Ключ AES должен быть 16, 24 или 32 байта.
    #[error("invalid AES key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    /// Ключевое слово Виженера пусто после удаления не-букв.
    #[error("Vigenere keyword must contain at least one letter")]
    MissingKeyword,

    #[error("invalid Base64 character: {0:?}")]
    InvalidAlphabetCharacter(char),

    /// Шифртекст не разбирается (RSA-числа, hex-блок AES и т.п.).
    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// gcd(e, φ) != 1, обратного к e не существует.
    #[error("public exponent {e} is not invertible modulo phi = {phi}")]
    ExponentNotInvertible { e: String, phi: String },

    #[error("invalid RSA primes: {0}")]
    InvalidPrimes(String),

    /// Операция в этом направлении не определена (например, обращение MD5).
    #[error("irreversible operation: {0}")]
    IrreversibleOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, CipherError>;
