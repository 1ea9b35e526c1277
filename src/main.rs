//! Command line tool to mint a signed JWT from a token description.

use std::process::ExitCode;

use clap::Parser;
use tkn::keys::pem::{load_private_key, public_key_pem};
use tkn::{validate_params, AlgorithmId, Key, TokenDescription};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mint a signed JWT from a YAML/JSON description")]
struct Cli {
    /// Path to a JSON/YAML description of the token
    #[arg(short = 't', long = "token", env = "TKN_TOKEN", default_value = "./token.yaml")]
    token: String,

    /// Algorithm used to sign the token: HS256, HS384, HS512, RS256, RS384,
    /// RS512, PS256, PS384, PS512, ES256, ES384, ES512
    #[arg(short = 'a', long = "alg", env = "TKN_ALG", default_value = "RS256")]
    alg: String,

    /// Path to a PEM private key (RSA or ECDSA)
    #[arg(short = 'k', long = "key", env = "TKN_KEY", default_value = "", hide_default_value = true)]
    key: String,

    /// Secret used to sign the token (HMAC)
    #[arg(
        short = 's',
        long = "secret",
        env = "TKN_SECRET",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    secret: String,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Validate, build, sign and self-verify a token, returning the printable result
fn run(cli: &Cli) -> tkn::Result<String> {
    let alg = cli.alg.to_uppercase();
    validate_params(&alg, &cli.secret, &cli.key, &cli.token)?;
    let algorithm = AlgorithmId::from_str(&alg)?;

    let token = TokenDescription::read(&cli.token)?.into_token()?;

    let (key, verification) = if algorithm.is_symmetric() {
        (
            Key::symmetric(cli.secret.as_bytes()),
            format!(
                "-----BEGIN SECRET-----\n{}\n-----END SECRET-----\n",
                cli.secret
            ),
        )
    } else {
        let key = load_private_key(&cli.key, algorithm)?;
        let public_pem = public_key_pem(&key)?;
        (key, public_pem)
    };

    let signed = token.sign(&key, algorithm)?;
    signed.verify(&key, algorithm)?;
    info!(%algorithm, claims = token.claims().len(), "token signed");

    Ok(format!(
        "-----BEGIN JWT TOKEN-----\n{signed}\n-----END JWT TOKEN-----\n\n{verification}"
    ))
}
