mod audit;
mod cache_refresher;
mod config;
mod grpc_service;
mod renderer;
mod rpc_handler;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use doublezero_controlplane_model::{PrometheusMetricsSink, SolanaLedgerClient};
use metrics_exporter_prometheus::PrometheusBuilder;
use solana_sdk::signature::read_keypair_file;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use crate::audit::InMemoryAuditSink;
use crate::cache_refresher::CacheRefresher;
use crate::config::{Args, Options};
use crate::grpc_service::{proto::controller_service_server::ControllerServiceServer, ControllerServiceImpl};
use crate::rpc_handler::RpcHandler;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = Options::new(args)?;

    PrometheusBuilder::new()
        .install()
        .map_err(|e| eyre::eyre!("installing prometheus metrics recorder: {e}"))?;

    let payer = std::env::var("DZ_CONTROLLER_KEYPAIR")
        .ok()
        .map(|path| {
            read_keypair_file(&path)
                .map_err(|e| eyre::eyre!("reading controller keypair at {path}: {e}"))
        })
        .transpose()?;
    if payer.is_none() {
        log::warn!("no DZ_CONTROLLER_KEYPAIR set; telemetry writes will be unavailable");
    }

    let ledger = Arc::new(SolanaLedgerClient::new(
        options.ledger_rpc_url.clone(),
        options.program_id,
        payer,
    ));
    let metrics = Arc::new(PrometheusMetricsSink);

    let refresher = Arc::new(CacheRefresher::new(ledger.clone(), metrics.clone()));
    let cache = refresher.cache();

    // Seed the cache before serving so the first RPC doesn't race an empty snapshot.
    if let Err(err) = refresher.refresh().await {
        log::warn!("initial state cache refresh failed, starting with an empty cache: {err}");
    }

    let cancel = CancellationToken::new();
    let refresher_task = {
        let refresher = refresher.clone();
        let cancel = cancel.clone();
        let interval = Duration::from_secs(options.refresh_interval_secs);
        tokio::spawn(async move { refresher.run(interval, cancel).await })
    };

    let handler = Arc::new(RpcHandler::new(
        cache,
        metrics,
        options.twamp_listen_port,
        options.no_hardware,
    ));
    let audit: Arc<dyn audit::AuditSink> = Arc::new(InMemoryAuditSink::default());
    let audit_flusher = {
        let audit = audit.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(10));
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = ticker.tick() => {
                        let flushed = audit.flush();
                        if !flushed.is_empty() {
                            log::info!("flushed {} audit records", flushed.len());
                        }
                    }
                }
            }
        })
    };

    let service = ControllerServiceImpl::new(handler, audit);

    log::info!("doublezero-controller listening on {}", options.listen_addr);
    let serve = Server::builder()
        .add_service(ControllerServiceServer::new(service))
        .serve_with_shutdown(options.listen_addr, async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("shutdown signal received");
            cancel.cancel();
        });

    serve.await.map_err(|e| eyre::eyre!("grpc server error: {e}"))?;
    refresher_task.await.ok();
    audit_flusher.await.ok();
    Ok(())
}
