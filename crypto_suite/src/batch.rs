use crate::algorithm::{run, Algorithm};
use crate::config::SuiteConfig;
use cipher_core::{Direction, Result};
use rayon::prelude::*;

/// Одно независимое задание пакета
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub key: String,
    pub payload: String,
}

impl Job {
    pub fn new(algorithm: Algorithm, direction: Direction, key: &str, payload: &str) -> Self {
        Self {
            algorithm,
            direction,
            key: key.to_string(),
            payload: payload.to_string(),
        }
    }

    /// Строка пакетного файла: `algorithm<TAB>direction<TAB>key<TAB>payload`.
    /// Полезная нагрузка берётся до конца строки и может содержать табуляции.
    pub fn parse_line(line: &str) -> std::result::Result<Self, String> {
        let mut fields = line.splitn(4, '\t');
        let mut next = |what: &str| {
            fields
                .next()
                .ok_or_else(|| format!("missing {what} in {line:?}"))
        };
        let algorithm: Algorithm = next("algorithm")?.parse()?;
        let direction: Direction = next("direction")?.parse()?;
        let key = next("key")?.to_string();
        let payload = next("payload")?.to_string();
        Ok(Self {
            algorithm,
            direction,
            key,
            payload,
        })
    }
}

/// Задания выполняются параллельно; i-й результат относится к i-му заданию.
pub fn run_batch(jobs: &[Job], config: &SuiteConfig) -> Vec<Result<String>> {
    log::debug!(
        "batch: {} jobs on {} threads",
        jobs.len(),
        rayon::current_num_threads()
    );
    jobs.par_iter()
        .map(|job| run(job.algorithm, job.direction, &job.payload, &job.key, config))
        .collect()
}
