//! Headless zoco client: exercises the full session/browse flow against a
//! running marketplace API and logs what a UI would render.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use zoco_app::{AppService, Credentials};
use zoco_core::Config;
use zoco_ui::{selectors, AdvertFilters};

#[derive(Parser, Debug)]
#[command(name = "zoco", about = "Headless marketplace client")]
struct Args {
    /// Login email. Without credentials the session is bootstrap-only.
    #[arg(long)]
    email: Option<String>,
    /// Login password.
    #[arg(long)]
    password: Option<String>,
    /// Persist the session across restarts.
    #[arg(long)]
    remember: bool,
    /// Filter: name substring.
    #[arg(long)]
    name: Option<String>,
    /// Filter: tag (repeatable; any match qualifies).
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Filter: sale (true) or wanted-to-buy (false) listings only.
    #[arg(long)]
    sale: Option<bool>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ZOCO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    info!("API base URL: {}", config.api_url);

    let mut app = AppService::new(&config);

    app.bootstrap_session();
    match app.session.op.error() {
        None => info!("Session restored, authenticated"),
        Some(msg) => info!("No prior session ({msg})"),
    }

    if let (Some(email), Some(password)) = (args.email, args.password) {
        app.login(Credentials {
            email,
            password,
            remember_me: args.remember,
        })
        .await;
        if let Some(msg) = app.session.op.error() {
            error!("{msg}");
        }
    }

    app.fetch_tags().await;
    if app.tags.op.is_succeeded() {
        info!(
            "Available tags: {}",
            selectors::sorted_tags(&app.tags.items).join(", ")
        );
    }

    app.set_filters(AdvertFilters {
        name: args.name,
        sale: args.sale,
        tags: (!args.tags.is_empty()).then_some(args.tags),
        ..Default::default()
    });

    app.fetch_adverts().await;
    if let Some(msg) = app.adverts.list_op.error() {
        error!("Failed to load adverts: {msg}");
        std::process::exit(1);
    }

    let items = &app.adverts.items;
    let filtered = selectors::filtered_adverts(items, &app.adverts.filters);
    info!(
        "{} adverts ({} after local filters, {} for sale / {} wanted)",
        items.len(),
        filtered.len(),
        selectors::sale_adverts(items).len(),
        selectors::buy_adverts(items).len(),
    );

    for advert in filtered.iter() {
        let kind = if advert.sale { "sell" } else { "buy" };
        info!(
            "  [{kind}] {} — {:.2} € ({}) {}",
            advert.name,
            advert.price,
            advert.tags.join(", "),
            advert.id,
        );
    }
}
