//! lwe-tool: key generation, message encryption and decryption from the
//! command line, plus a decryption success-rate trial.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lwe_crypt::lwe::{BitCiphertext, Lwe, PublicKey, SecretKey};
use lwe_crypt::params::{LweParams, DEFAULT_DIM, DEFAULT_Q};
use lwe_crypt::text::{decrypt_text, encrypt_text};

#[derive(Parser)]
#[command(name = "lwe-tool")]
#[command(about = "Toy LWE bit encryption")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    params: ParamArgs,

    /// Random seed for reproducible runs (optional)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ParamArgs {
    /// Lattice dimension n
    #[arg(long, global = true, default_value_t = DEFAULT_DIM)]
    dim: usize,

    /// Modulus q
    #[arg(long, global = true, default_value_t = DEFAULT_Q)]
    modulus: u64,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a key pair
    Keygen {
        /// Output directory for public_key.json and secret_key.json
        #[arg(long, default_value = "lwe_keys")]
        out_dir: PathBuf,
    },
    /// Encrypt a message bit by bit
    Encrypt {
        #[arg(long)]
        public_key: PathBuf,
        #[arg(long)]
        message: String,
        /// Ciphertext output file
        #[arg(long, default_value = "ciphertexts.json")]
        out: PathBuf,
    },
    /// Decrypt a ciphertext file
    Decrypt {
        #[arg(long)]
        secret_key: PathBuf,
        #[arg(long, default_value = "ciphertexts.json")]
        ciphertexts: PathBuf,
    },
    /// Measure the single-bit round-trip success rate
    Trial {
        /// Number of encrypt/decrypt trials
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
        /// Trials run under one key pair before regenerating
        #[arg(long, default_value_t = 100)]
        per_key: usize,
    },
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let params = LweParams {
        dim: cli.params.dim,
        q: cli.params.modulus,
    };
    let lwe = Lwe::new(params).wrap_err("Invalid parameters")?;
    info!("Parameters: n={}, q={}", params.dim, params.q);

    let mut rng = match cli.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    match cli.command {
        Command::Keygen { out_dir } => keygen(&lwe, &out_dir, &mut rng),
        Command::Encrypt {
            public_key,
            message,
            out,
        } => {
            let pk: PublicKey = read_json(&public_key)?;
            let start = Instant::now();
            let cts = encrypt_text(&lwe, &pk, &message, &mut rng)
                .wrap_err("Encryption failed")?;
            info!("Encrypted {} bits in {:.2?}", cts.len(), start.elapsed());
            write_json(&out, &cts)
        }
        Command::Decrypt {
            secret_key,
            ciphertexts,
        } => {
            let sk: SecretKey = read_json(&secret_key)?;
            let cts: Vec<BitCiphertext> = read_json(&ciphertexts)?;
            let plaintext = decrypt_text(&lwe, &sk, &cts).wrap_err("Decryption failed")?;
            println!("{}", plaintext);
            Ok(())
        }
        Command::Trial { trials, per_key } => trial(&lwe, trials, per_key, &mut rng),
    }
}

fn keygen(lwe: &Lwe, out_dir: &Path, rng: &mut ChaCha20Rng) -> Result<()> {
    let keys = lwe.generate_keys(rng);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    write_json(&out_dir.join("public_key.json"), &keys.public_key)?;
    info!("Saving secret key (keep this secure!)...");
    write_json(&out_dir.join("secret_key.json"), &keys.secret_key)?;

    println!("Keys written to {}", out_dir.display());
    Ok(())
}

fn trial(lwe: &Lwe, trials: usize, per_key: usize, rng: &mut ChaCha20Rng) -> Result<()> {
    let per_key = per_key.max(1);
    let start = Instant::now();
    let mut correct = 0usize;
    let mut keys = lwe.generate_keys(rng);

    for i in 0..trials {
        if i > 0 && i % per_key == 0 {
            keys = lwe.generate_keys(rng);
        }
        let bit = rng.gen_range(0..=1u64);
        let ct = lwe.encrypt_bit(&keys.public_key, bit, rng)?;
        if lwe.decrypt_bit(&keys.secret_key, &ct)? == bit {
            correct += 1;
        }
    }

    let rate = if trials == 0 {
        1.0
    } else {
        correct as f64 / trials as f64
    };
    info!("Trial time: {:.2?}", start.elapsed());

    println!();
    println!("=== Round-trip Trial ===");
    println!("Trials: {}", trials);
    println!("Correct: {}", correct);
    println!("Success rate: {:.4}%", rate * 100.0);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to deserialize {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    writer.flush()?;
    info!("Wrote {}", path.display());
    Ok(())
}
