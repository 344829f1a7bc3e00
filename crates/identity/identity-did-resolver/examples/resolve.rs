use clap::Parser;
use identity_did_resolver::{
    DIDResolverRegistry, config::ResolverConfigBuilder, errors::ResolverRegistryError,
};
use identity_did_web::Scheme;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// DID to resolve
    did: String,

    /// Timeout for did:web requests in milliseconds
    #[arg(short, long, default_value_t = 5000)]
    timeout: u32,

    /// Fetch did:web documents over plain HTTP (local testing)
    #[arg(long)]
    http: bool,

    /// Don't register the did:web resolver
    #[arg(long)]
    no_web: bool,
}

#[tokio::main]
async fn main() -> Result<(), ResolverRegistryError> {
    let args = Args::parse();

    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    let config = ResolverConfigBuilder::default()
        .with_web_timeout(args.timeout)
        .with_web_scheme(if args.http { Scheme::Http } else { Scheme::Https })
        .with_web(!args.no_web)
        .build();

    let resolver = DIDResolverRegistry::new(config, None)?;
    info!("registered methods: {:?}", resolver.list_methods());

    let result = resolver.resolve(&args.did).await;
    if let Some(error) = result.error_code() {
        info!("resolution of ({}) failed: {error}", args.did);
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("Couldn't serialize resolution result")
    );

    Ok(())
}
