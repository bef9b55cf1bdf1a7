use rsa::rsa::rsa::DefaultPrimes;
use rsa::rsa::keygen::DEFAULT_PUBLIC_EXPONENT;

/// Значения по умолчанию для ключей, которые не удалось разобрать.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    pub default_caesar_shift: i64,
    pub default_rsa_primes: DefaultPrimes,
    pub rsa_public_exponent: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            default_caesar_shift: classical::crypto::caesar::DEFAULT_SHIFT,
            default_rsa_primes: DefaultPrimes::default(),
            rsa_public_exponent: DEFAULT_PUBLIC_EXPONENT as u64,
        }
    }
}

/// Разбор пары "p,q" для `--primes-default`
pub fn parse_prime_pair(s: &str) -> Result<DefaultPrimes, String> {
    let (p, q) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"p,q\", got {s:?}"))?;
    let p = p.trim().parse::<u64>().map_err(|e| format!("p: {e}"))?;
    let q = q.trim().parse::<u64>().map_err(|e| format!("q: {e}"))?;
    Ok(DefaultPrimes { p, q })
}
