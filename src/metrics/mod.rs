use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::domain::order::QueryError;

// ============================================================================
// Metrics Module - Prometheus metrics for order queries
// ============================================================================
//
// Tracks:
// - Queries executed, split by outcome (matched / rejected)
// - Rejections by validation error kind
// - Result set sizes and scan duration
//
// ============================================================================

pub struct QueryMetrics {
    registry: Registry,

    pub queries_total: IntCounterVec,
    pub rejections_total: IntCounterVec,
    pub matches: Histogram,
    pub duration: Histogram,
}

impl QueryMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let queries_total = IntCounterVec::new(
            Opts::new("order_queries_total", "Total order queries executed"),
            &["outcome"],
        )?;
        registry.register(Box::new(queries_total.clone()))?;

        let rejections_total = IntCounterVec::new(
            Opts::new("order_query_rejections_total", "Order queries rejected by validation"),
            &["reason"],
        )?;
        registry.register(Box::new(rejections_total.clone()))?;

        let matches = Histogram::with_opts(
            HistogramOpts::new("order_query_matches", "Orders returned per query")
                .buckets(vec![0.0, 1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0]),
        )?;
        registry.register(Box::new(matches.clone()))?;

        let duration = Histogram::with_opts(
            HistogramOpts::new("order_query_duration_seconds", "Order query scan duration")
                .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1, 1.0]),
        )?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            registry,
            queries_total,
            rejections_total,
            matches,
            duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_match(&self, matched: usize, duration_secs: f64) {
        self.queries_total.with_label_values(&["matched"]).inc();
        self.matches.observe(matched as f64);
        self.duration.observe(duration_secs);
    }

    pub fn record_rejection(&self, error: &QueryError) {
        self.queries_total.with_label_values(&["rejected"]).inc();
        self.rejections_total.with_label_values(&[error.kind()]).inc();
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for QueryMetrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
