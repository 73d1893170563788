//! Yahoo Finance chart API payloads

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub indicators: Option<ChartIndicators>,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
pub struct Quote {
    /// Gaps in trading come back as `null`.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Closing prices of the first result, skipping gaps.
    pub fn into_closes(self) -> Vec<f64> {
        self.chart
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.indicators)
            .and_then(|indicators| indicators.quote.into_iter().next())
            .map(|quote| quote.close.into_iter().flatten().filter(|p| p.is_finite()).collect())
            .unwrap_or_default()
    }
}
