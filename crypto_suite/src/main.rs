use cipher_core::Direction;
use clap::{Parser, Subcommand};
use crypto_suite::config::parse_prime_pair;
use crypto_suite::{run_batch, run_verified, Algorithm, Job, SuiteConfig};
use rsa::rsa::rsa::DefaultPrimes;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crypto-suite", version, about = "Classical and modern ciphers on text")]
struct Cli {
    /// Сдвиг Цезаря, если ключ не является целым числом
    #[arg(long, global = true, default_value_t = 3, allow_negative_numbers = true)]
    shift_default: i64,
    /// Простые "p,q" для RSA, если ключ не разобран
    #[arg(long, global = true, value_parser = parse_prime_pair)]
    primes_default: Option<DefaultPrimes>,
    /// Открытая экспонента RSA
    #[arg(long, global = true, default_value_t = 17)]
    exponent: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Преобразовать одну строку
    Run {
        #[arg(value_enum)]
        algorithm: Algorithm,
        /// encrypt | decrypt
        direction: Direction,
        #[arg(long, short, default_value = "")]
        key: String,
        /// Текст; если не задан, читается stdin
        payload: Option<String>,
    },
    /// Выполнить задания из файла, по одному на строку:
    /// algorithm<TAB>direction<TAB>key<TAB>payload
    Batch {
        /// Файл заданий; "-" означает stdin
        input: PathBuf,
    },
}

impl Cli {
    fn config(&self) -> SuiteConfig {
        let defaults = SuiteConfig::default();
        SuiteConfig {
            default_caesar_shift: self.shift_default,
            default_rsa_primes: self.primes_default.unwrap_or(defaults.default_rsa_primes),
            rsa_public_exponent: self.exponent,
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Command::Run {
            algorithm,
            direction,
            key,
            payload,
        } => {
            let payload = match payload {
                Some(p) => p,
                None => read_input(None)?.trim_end_matches(['\r', '\n']).to_string(),
            };
            log::info!("{direction} with {algorithm}, {} bytes of input", payload.len());

            let verified = run_verified(algorithm, direction, &payload, &key, &config)?;
            println!("{}", verified.output);
            match verified.round_trip_ok {
                Some(true) => log::info!("round trip ok"),
                Some(false) => eprintln!("warning: decrypting the output does not restore the input"),
                None => {}
            }
        }
        Command::Batch { input } => {
            let text = read_input(Some(&input))?;
            let jobs = text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(Job::parse_line)
                .collect::<Result<Vec<_>, _>>()?;
            log::info!("running {} jobs", jobs.len());

            let mut failed = 0usize;
            for (i, result) in run_batch(&jobs, &config).into_iter().enumerate() {
                match result {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        failed += 1;
                        println!("error: {e}");
                        log::error!("job {} ({}) failed: {e}", i + 1, jobs[i].algorithm);
                    }
                }
            }
            log::info!("batch finished, {failed} failed");
        }
    }

    Ok(())
}
