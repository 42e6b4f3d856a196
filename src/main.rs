//! Demo: seeds a catalog, prints the stats panel, then scrolls the product table
//! to the bottom one viewport at a time.

use catalog_browser::config::CatalogConfig;
use catalog_browser::lifecycle::{setup_tracing, CatalogSystem};
use catalog_browser::presentation::{render_header, render_window, stats_summary};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CatalogConfig::from_env()?;
    info!(?config, "Starting catalog browser");

    let system = CatalogSystem::from_config(&config)?;

    let status = system.catalog_client.health_check().await?;
    info!(status = %status, "Health check");

    let stats = system.catalog_client.latest_stats().await?;
    for line in stats_summary(stats.as_ref()) {
        println!("{line}");
    }
    println!();

    let span = tracing::info_span!("table");
    async {
        let mut table = system.table();
        let viewport = table.config().viewport_height;

        table.initial_load();
        println!("{}", render_header());
        for line in render_window(&table) {
            println!("{line}");
        }

        let mut scroll = 0.0;
        loop {
            if let Some(Err(e)) = table.pump().await {
                error!(error = %e, "Giving up on the table");
                break;
            }
            for line in render_window(&table) {
                println!("{line}");
            }

            // scroll until the sentinel is on screen or there is nothing left to load
            while !table.on_scroll(scroll) && table.has_more() {
                scroll += viewport;
            }
            if !table.has_more() && !table.is_fetching_next() {
                break;
            }
        }

        info!(
            loaded = table.loaded_count(),
            pages = table.pages().len(),
            "Reached the end of the catalog"
        );
    }
    .instrument(span)
    .await;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
