//! Prints the status of every realm of a region.
//!
//! usage: `realm_status <api key> [region] [locale]`
//! set `RUST_LOG=wowapi=debug` to see the requests.
use miette::{miette, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wowapi::{Explorer, Locale, Region};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let api_key = args
        .next()
        .ok_or_else(|| miette!("missing api key. usage: realm_status <api key> [region] [locale]"))?;
    let region: Region = args.next().as_deref().unwrap_or("us").parse()?;
    let locale: Locale = args.next().as_deref().unwrap_or("en_US").parse()?;

    let explorer = Explorer::new(region, locale, api_key);
    info!(?explorer, "fetching realm status");
    let realms = explorer
        .realms()
        .wrap_err_with(|| format!("failed to get realm status for {region}"))?;

    for realm in &realms {
        println!(
            "{:<24} {:<6} {:<8} {}",
            realm.name,
            realm.kind,
            realm.population,
            if realm.status { "up" } else { "down" }
        );
    }
    info!(count = realms.len(), "done");
    Ok(())
}
