use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use heb_graphql::config::{ENDPOINT_ENV, SESSION_COOKIE_ENV, USER_AGENT_ENV};
use heb_graphql::persist::{CATEGORY_RESPONSE_FILE, STORES_RESPONSE_FILE};
use heb_graphql::queries::{
    DEFAULT_ADDRESS, DEFAULT_CATEGORY_ID, DEFAULT_LIMIT, DEFAULT_RADIUS_MILES, DEFAULT_STORE_ID,
};
use heb_graphql::render::{CategoryReport, NoDataReport, StoresReport};
use heb_graphql::{
    save_envelope, CategoryBrowseParams, EndpointUrl, HebConfig, HebStorefront, Projected,
    SessionCookie, ShoppingContext, StoreSearchParams,
};

#[derive(Debug, Parser)]
#[command(name = "heb-graphql")]
#[command(about = "Search H-E-B stores and browse product categories")]
struct Cli {
    /// GraphQL endpoint URL.
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    endpoint: Option<String>,

    /// Session cookie string sent with every request.
    #[arg(long, global = true, env = SESSION_COOKIE_ENV, hide_env_values = true)]
    cookie: Option<String>,

    /// User-Agent header value.
    #[arg(long, global = true, env = USER_AGENT_ENV)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse one page of a product category.
    Category(CategoryArgs),
    /// Search for stores near an address.
    Stores(StoresArgs),
    /// Browse the default category, then search the default address.
    Demo,
}

#[derive(Debug, Args)]
struct CategoryArgs {
    #[arg(long, default_value = DEFAULT_CATEGORY_ID)]
    category_id: String,
    #[arg(long, default_value_t = DEFAULT_STORE_ID)]
    store_id: u32,
    #[arg(long, default_value_t = ShoppingContext::CurbsidePickup)]
    shopping_context: ShoppingContext,
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,
    /// Where to save the raw response.
    #[arg(long, default_value = CATEGORY_RESPONSE_FILE)]
    output: PathBuf,
}

#[derive(Debug, Args)]
struct StoresArgs {
    #[arg(long, default_value = DEFAULT_ADDRESS)]
    address: String,
    #[arg(long, default_value_t = DEFAULT_RADIUS_MILES)]
    radius_miles: u32,
    /// Fulfillment channel filter; repeat for several.
    #[arg(long = "channel")]
    channels: Vec<String>,
    /// Where to save the raw response.
    #[arg(long, default_value = STORES_RESPONSE_FILE)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let storefront = HebStorefront::new(build_config(&cli)?)?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Category(args) => {
            let params = CategoryBrowseParams::new(
                args.category_id,
                args.store_id,
                args.shopping_context,
                args.limit,
            )?;
            browse_category(&storefront, &params, &args.output).await
        }
        Command::Stores(args) => {
            let params = StoreSearchParams::new(args.address, args.radius_miles, args.channels)?;
            search_stores(&storefront, &params, &args.output).await
        }
        Command::Demo => {
            println!("\n===== BROWSING CATEGORY =====");
            browse_category(
                &storefront,
                &CategoryBrowseParams::default(),
                Path::new(CATEGORY_RESPONSE_FILE),
            )
            .await?;

            println!("\n\n===== SEARCHING STORES =====");
            search_stores(
                &storefront,
                &StoreSearchParams::default(),
                Path::new(STORES_RESPONSE_FILE),
            )
            .await
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<HebConfig> {
    let cookie = cli
        .cookie
        .clone()
        .with_context(|| format!("set {SESSION_COOKIE_ENV} or pass --cookie"))?;

    let mut builder = HebConfig::builder().session_cookie(SessionCookie::new(cookie)?);
    if let Some(endpoint) = &cli.endpoint {
        builder = builder.endpoint(EndpointUrl::new(endpoint.as_str())?);
    }
    if let Some(user_agent) = &cli.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    Ok(builder.build()?)
}

async fn browse_category(
    storefront: &HebStorefront,
    params: &CategoryBrowseParams,
    output: &Path,
) -> anyhow::Result<()> {
    let outcome = storefront.browse_category(params).await?;

    match &outcome.result {
        Projected::Found(page) => print!("{}", CategoryReport(page)),
        Projected::NoData { errors } => print!("{}", NoDataReport(errors)),
    }

    save_envelope(output, &outcome.envelope)?;
    println!("\nRaw category response saved to {}", output.display());
    Ok(())
}

async fn search_stores(
    storefront: &HebStorefront,
    params: &StoreSearchParams,
    output: &Path,
) -> anyhow::Result<()> {
    println!("Searching for stores near '{}'...", params.address());
    let outcome = storefront.search_stores(params).await?;

    match &outcome.result {
        Projected::Found(stores) => print!("{}", StoresReport(stores)),
        Projected::NoData { errors } => print!("{}", NoDataReport(errors)),
    }

    save_envelope(output, &outcome.envelope)?;
    println!("\nRaw stores response saved to {}", output.display());
    Ok(())
}
