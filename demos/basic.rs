use std::time::Duration;

use anyhow::Context;
use meteora_http::{dlmm::ListPoolsParams, ClientOptions, MeteoraClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = MeteoraClient::with_options(ClientOptions::from_env()?);

    let deadline = client.cancellation_token().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(30)).await;
        deadline.cancel();
    });

    let pools = client
        .dlmm
        .list_pools(Some(&ListPoolsParams {
            page: Some(1),
            page_size: Some(5),
            ..Default::default()
        }))
        .await
        .context("dlmm.list_pools")?;

    println!(
        "DLMM Pools (total: {}, showing {}):",
        pools.total,
        pools.data.len()
    );
    for pool in &pools.data {
        println!(
            "  {} ({}) - TVL: ${:.2}, 24h Vol: ${:.2}",
            pool.name, pool.address, pool.tvl, pool.volume.hour_24
        );
    }

    println!();
    let damm_pools = client
        .dammv2
        .list_pools(None)
        .await
        .context("dammv2.list_pools")?;
    println!("DAMM v2 Pools (total: {})", damm_pools.total);

    println!();
    let metrics = client
        .dammv1
        .get_pools_metrics()
        .await
        .context("dammv1.get_pools_metrics")?;
    println!("DAMM v1 Metrics:");
    println!("  Dynamic AMM TVL: ${:.2}", metrics.dynamic_amm_tvl);
    println!(
        "  Dynamic AMM Total Volume: ${:.2}",
        metrics.dynamic_amm_total_volume
    );

    println!();
    let analytics = client
        .stake2earn
        .get_analytics()
        .await
        .context("stake2earn.get_analytics")?;
    println!(
        "Stake2Earn: {} vaults, ${:.2} total staked",
        analytics.total_fee_vaults, analytics.total_staked_amount_usd
    );

    println!();
    let vaults = client
        .dynamic_vault
        .list_vault_info()
        .await
        .context("dynamic_vault.list_vault_info")?;
    println!("Dynamic Vaults: {} total", vaults.len());
    for vault in vaults.iter().take(5) {
        println!(
            "  {} - Virtual Price: {}, Closest APY: {:.2}%",
            vault.symbol, vault.virtual_price, vault.closest_apy
        );
    }
    if vaults.len() > 5 {
        println!("  ... and {} more", vaults.len() - 5);
    }

    Ok(())
}
