//! Prometheus metrics for signal cycles and the HTTP surface

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub signal_cycles_total: IntCounter,
    pub signals_emitted_total: IntCounterVec,
    pub market_data_failures_total: IntCounter,
    pub notification_failures_total: IntCounter,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let signal_cycles_total =
            IntCounter::new("signal_cycles_total", "Completed signal evaluation cycles")?;
        let signals_emitted_total = IntCounterVec::new(
            Opts::new("signals_emitted_total", "Signals produced, by kind"),
            &["signal"],
        )?;
        let market_data_failures_total = IntCounter::new(
            "market_data_failures_total",
            "Cycles that got no prices from the market data provider",
        )?;
        let notification_failures_total = IntCounter::new(
            "notification_failures_total",
            "Signal notifications that could not be delivered",
        )?;
        let http_requests_total = IntCounter::new("http_requests_total", "HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(signal_cycles_total.clone()))?;
        registry.register(Box::new(signals_emitted_total.clone()))?;
        registry.register(Box::new(market_data_failures_total.clone()))?;
        registry.register(Box::new(notification_failures_total.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            signal_cycles_total,
            signals_emitted_total,
            market_data_failures_total,
            notification_failures_total,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Render every registered metric in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
