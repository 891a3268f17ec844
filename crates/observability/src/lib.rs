use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    context_requests_total: AtomicU64,
    route_hits_total: AtomicU64,
    rank_hits_total: AtomicU64,
    empty_contexts_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub context_requests_total: u64,
    pub route_hits_total: u64,
    pub rank_hits_total: u64,
    pub empty_contexts_total: u64,
    pub avg_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_context_request(&self) {
        self.context_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_route_hit(&self) {
        self.route_hits_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rank_hits(&self, hits: usize) {
        self.rank_hits_total
            .fetch_add(hits as u64, Ordering::Relaxed);
    }

    pub fn inc_empty_context(&self) {
        self.empty_contexts_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let requests = self.context_requests_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            context_requests_total: requests,
            route_hits_total: self.route_hits_total.load(Ordering::Relaxed),
            rank_hits_total: self.rank_hits_total.load(Ordering::Relaxed),
            empty_contexts_total: self.empty_contexts_total.load(Ordering::Relaxed),
            avg_latency_micros: if requests == 0 {
                0.0
            } else {
                latency as f64 / requests as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,mzansi_assembler=info,mzansi_knowledge=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
