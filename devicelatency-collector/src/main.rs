mod config;
mod peer_discovery;
mod reflector;
mod scheduler;
mod sender;
mod submitter;
mod twamp;

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arc_swap::ArcSwap;
use clap::Parser;
use doublezero_controlplane_model::ledger::LedgerClient;
use doublezero_controlplane_model::{PrometheusMetricsSink, SolanaLedgerClient};
use metrics_exporter_prometheus::PrometheusBuilder;
use solana_sdk::signature::read_keypair_file;
use tokio_util::sync::CancellationToken;

use crate::config::{Args, Options};
use crate::peer_discovery::{PeerSet, SystemInterfaceEnumerator};
use crate::reflector::Reflector;
use crate::scheduler::{spawn_peer_loops, SchedulerConfig};
use crate::submitter::Submitter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = Options::new(args)?;

    PrometheusBuilder::new()
        .install()
        .map_err(|e| eyre::eyre!("installing prometheus metrics recorder: {e}"))?;

    let payer = read_keypair_file(&options.keypair_path)
        .map_err(|e| eyre::eyre!("reading collector keypair at {}: {e}", options.keypair_path))?;

    let ledger = Arc::new(SolanaLedgerClient::new(
        options.ledger_rpc_url.clone(),
        options.program_id,
        Some(payer),
    ));
    let metrics = Arc::new(PrometheusMetricsSink);
    let cancel = CancellationToken::new();

    let listen_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), options.twamp_listen_port);
    let reflector = Reflector::bind(listen_addr, Duration::from_secs(30)).await?;
    log::info!("twamp reflector listening on {listen_addr}");
    let reflector_task = {
        let cancel = cancel.clone();
        tokio::spawn(async move { reflector.run(cancel).await })
    };

    let initial_epoch = {
        let ledger = ledger.clone();
        tokio::task::spawn_blocking(move || ledger.get_current_epoch())
            .await
            .ok()
            .and_then(|r| r.ok())
            .unwrap_or_default()
    };
    let epoch = Arc::new(ArcSwap::from_pointee(initial_epoch));
    let buffer = Arc::new(Mutex::new(HashMap::new()));
    let scheduler_config = Arc::new(SchedulerConfig {
        probe_interval: options.probe_interval,
        sender_ttl: options.sender_ttl,
        max_consecutive_losses: options.max_consecutive_losses,
        ..SchedulerConfig::default()
    });

    let submitter = Arc::new(Submitter::new(ledger.clone(), metrics.clone()));
    let submitter_task = {
        let submitter = submitter.clone();
        let buffer = buffer.clone();
        let cancel = cancel.clone();
        let interval = options.submit_interval;
        tokio::spawn(async move { submitter.run(buffer, interval, cancel).await })
    };

    let discovery_task = {
        let ledger = ledger.clone();
        let metrics = metrics.clone();
        let buffer = buffer.clone();
        let epoch = epoch.clone();
        let scheduler_config = scheduler_config.clone();
        let cancel = cancel.clone();
        let device_pubkey = options.device_pubkey;
        let twamp_listen_port = options.twamp_listen_port;
        let peer_discovery_interval = options.peer_discovery_interval;
        tokio::spawn(async move {
            let mut current_peers = PeerSet::default();
            let mut peer_tasks: Vec<tokio::task::JoinHandle<()>> = Vec::new();
            let mut ticker = tokio::time::interval(peer_discovery_interval);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        for task in peer_tasks.drain(..) {
                            task.abort();
                        }
                        return;
                    }
                    _ = ticker.tick() => {}
                }

                let blocking_ledger = ledger.clone();
                if let Ok(Ok(current_epoch)) =
                    tokio::task::spawn_blocking(move || blocking_ledger.get_current_epoch()).await
                {
                    epoch.store(Arc::new(current_epoch));
                }

                let blocking_ledger = ledger.clone();
                let blocking_metrics = metrics.clone();
                let discovery_result = tokio::task::spawn_blocking(move || {
                    crate::peer_discovery::discover(
                        blocking_ledger.as_ref(),
                        &device_pubkey,
                        twamp_listen_port,
                        &SystemInterfaceEnumerator,
                        blocking_metrics.as_ref(),
                    )
                })
                .await;
                let Ok(Some(new_peers)) = discovery_result else {
                    continue;
                };

                if new_peers.peers == current_peers.peers {
                    continue;
                }
                log::info!("peer set changed: now tracking {} peers", new_peers.peers.len());

                for task in peer_tasks.drain(..) {
                    task.abort();
                }
                peer_tasks = spawn_peer_loops(
                    device_pubkey,
                    &new_peers,
                    epoch.clone(),
                    buffer.clone(),
                    metrics.clone(),
                    scheduler_config.clone(),
                    cancel.clone(),
                );
                current_peers = new_peers;
            }
        })
    };

    tokio::signal::ctrl_c().await.ok();
    log::info!("shutdown signal received");
    cancel.cancel();

    reflector_task.await.ok();
    discovery_task.await.ok();
    submitter_task.await.ok();
    Ok(())
}
