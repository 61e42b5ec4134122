use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, bail};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;
use xendit_gateway::config::{CredentialOptions, Credentials, GatewayConfig};
use xendit_gateway::domain::response::GatewayResponse;
use xendit_gateway::infrastructure::http::HttpTransport;
use xendit_gateway::interfaces::json::intent_reader::IntentReader;
use xendit_gateway::XenditGateway;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, env = "XENDIT_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    #[arg(long, env = "XENDIT_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    #[arg(long, env = "XENDIT_VALIDATION_TOKEN", hide_env_values = true)]
    validation_token: Option<String>,

    /// Send requests to the live endpoint. Test mode is the default.
    #[arg(long)]
    live: bool,

    /// Override the test endpoint URL
    #[arg(long, env = "XENDIT_TEST_URL")]
    test_url: Option<String>,

    /// Override the live endpoint URL
    #[arg(long, env = "XENDIT_LIVE_URL")]
    live_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Charge every intent in the file ("-" for stdin)
    Purchase { input: PathBuf },
    /// Authorize every intent in the file ("-" for stdin)
    Authorize { input: PathBuf },
    /// Authorize and immediately void every intent in the file ("-" for stdin)
    Verify { input: PathBuf },
    /// Capture a prior authorization
    Capture { authorization: String },
    /// Refund a prior charge
    Refund { authorization: String },
    /// Void a prior authorization
    Void { authorization: String },
}

#[derive(Clone, Copy)]
enum IntentCall {
    Purchase,
    Authorize,
    Verify,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match std::env::var("LOG_FORMAT").unwrap_or_default().as_str() {
        "json" => builder.json().init(),
        _ => builder.init(),
    }
}

fn build_config(cli: &Cli) -> Result<GatewayConfig> {
    let credentials = Credentials::from_options(CredentialOptions {
        public_key: cli.public_key.clone(),
        secret_key: cli.secret_key.clone(),
        validation_token: cli.validation_token.clone(),
    })
    .into_diagnostic()?;

    let mut config = GatewayConfig::new(credentials)
        .with_test(!cli.live)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(url) = &cli.test_url {
        config = config.with_test_url(url).into_diagnostic()?;
    }
    if let Some(url) = &cli.live_url {
        config = config.with_live_url(url).into_diagnostic()?;
    }
    Ok(config)
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(path).into_diagnostic()?))
    }
}

fn print_response(response: &GatewayResponse) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, response).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}

async fn run_intents(
    gateway: &XenditGateway<HttpTransport>,
    call: IntentCall,
    input: &Path,
) -> Result<usize> {
    let reader = IntentReader::new(open_input(input)?);
    let mut failures = 0;

    for intent_result in reader.intents() {
        let intent = match intent_result {
            Ok(intent) => intent,
            Err(e) => {
                error!(error = %e, "Error reading intent");
                failures += 1;
                continue;
            }
        };

        let result = match call {
            IntentCall::Purchase => {
                gateway
                    .purchase(intent.amount, &intent.card, &intent.options)
                    .await
            }
            IntentCall::Authorize => {
                gateway
                    .authorize(intent.amount, &intent.card, &intent.options)
                    .await
            }
            IntentCall::Verify => gateway.verify(&intent.card, &intent.options).await,
        };

        match result {
            Ok(response) => print_response(&response)?,
            Err(e) => {
                error!(error = %e, "Error processing intent");
                failures += 1;
            }
        }
    }

    Ok(failures)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let gateway = XenditGateway::connect(config).into_diagnostic()?;

    let failures = match &cli.command {
        Command::Purchase { input } => run_intents(&gateway, IntentCall::Purchase, input).await?,
        Command::Authorize { input } => run_intents(&gateway, IntentCall::Authorize, input).await?,
        Command::Verify { input } => run_intents(&gateway, IntentCall::Verify, input).await?,
        Command::Capture { authorization } => {
            print_response(&gateway.capture(authorization).await.into_diagnostic()?)?;
            0
        }
        Command::Refund { authorization } => {
            print_response(&gateway.refund(authorization).await.into_diagnostic()?)?;
            0
        }
        Command::Void { authorization } => {
            print_response(&gateway.void(authorization).await.into_diagnostic()?)?;
            0
        }
    };

    if failures > 0 {
        bail!("{} intent(s) could not be processed", failures);
    }

    Ok(())
}
