//! Demo: route across two local TCP endpoints with connect probes.
//!
//! Run with `cargo run --example tcp_probe`. Spawns two throwaway TCP
//! listeners, registers them as targets, then routes a handful of requests
//! while killing and restoring one endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use target_router::{HealthCheckConfig, Probe, Target, TargetRouter};
use tokio::net::{TcpListener, TcpStream};

/// Liveness probe that attempts a TCP connect to the target's address.
struct TcpConnectProbe {
    addr: String,
}

#[async_trait]
impl Probe for TcpConnectProbe {
    async fn check_alive(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        TcpStream::connect(&self.addr).await?;
        Ok(true)
    }
}

async fn spawn_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    (listener, addr)
}

#[tokio::main]
async fn main() {
    target_router::observability::init_logging("target_router=info,tcp_probe=info");

    let (listener_a, addr_a) = spawn_listener().await;
    let (listener_b, addr_b) = spawn_listener().await;

    // Keep A accepting for the whole demo; B gets dropped halfway through.
    tokio::spawn(async move {
        loop {
            let _ = listener_a.accept().await;
        }
    });
    let b_task = tokio::spawn(async move {
        loop {
            let _ = listener_b.accept().await;
        }
    });

    let make_target = |id: &str, addr: &str| {
        let mut params = HashMap::new();
        params.insert("addr".to_string(), addr.to_string());
        Target::new(
            id,
            Arc::new(TcpConnectProbe {
                addr: addr.to_string(),
            }),
        )
        .with_params(params)
    };

    let config = HealthCheckConfig {
        probe_interval_ms: 500,
        probe_timeout_ms: 250,
        unhealthy_threshold: 1,
    };

    let router = TargetRouter::new(
        vec![make_target("a", &addr_a), make_target("b", &addr_b)],
        config,
    )
    .unwrap();
    router.start();

    for round in 0..3 {
        for _ in 0..4 {
            match router.route_request() {
                Ok(target) => {
                    let addr = &target.params["addr"];
                    tracing::info!(target_id = %target.id, %addr, "Routed request");
                    // The caller's own I/O would happen here, against `addr`.
                }
                Err(e) => tracing::warn!(error = %e, "Routing failed"),
            }
        }

        if round == 0 {
            tracing::info!("Dropping endpoint b");
            b_task.abort();
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    tracing::info!(healthy = ?router.healthy_ids(), "Final healthy set");
    router.shutdown();
}
