//! lwe-server: LWE bit encryption over HTTP

use clap::Parser;
use eyre::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lwe_crypt::params::{LweParams, DEFAULT_DIM, DEFAULT_Q};
use lwe_crypt::server::router;
use lwe_crypt::service::CryptoService;

#[derive(Parser)]
#[command(name = "lwe-server")]
#[command(about = "LWE bit encryption server")]
#[command(version)]
struct Args {
    /// Server bind address
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Lattice dimension n
    #[arg(long, default_value_t = DEFAULT_DIM)]
    dim: usize,

    /// Modulus q
    #[arg(long, default_value_t = DEFAULT_Q)]
    modulus: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let params = LweParams {
        dim: args.dim,
        q: args.modulus,
    };
    let service = CryptoService::new(params).wrap_err("Invalid parameters")?;

    info!("LWE server: n={}, q={}", params.dim, params.q);
    info!("Bind address: {}", args.bind);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    println!();
    println!("=== LWE Server Running ===");
    println!("Listening on: http://{}", args.bind);
    println!();
    println!("Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  GET  /params   - Dimension and modulus");
    println!("  POST /keys     - Generate a key pair");
    println!("  POST /encrypt  - Encrypt a message bit by bit");
    println!("  POST /decrypt  - Decrypt a ciphertext sequence");
    println!("  POST /rpc      - Action-tagged request");
    println!();

    axum::serve(listener, router(service)).await?;

    Ok(())
}
