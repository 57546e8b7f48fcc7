use anyhow::Result;

use crate::{SearchBounds, WeatherReading};

/// Anything that can answer a bounded query for weather readings.
#[async_trait::async_trait]
pub trait ReadingSource: Send + Sync {
    async fn readings(&self, bounds: &SearchBounds) -> Result<Vec<WeatherReading>>;
}
