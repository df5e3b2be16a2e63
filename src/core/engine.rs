use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Drives a pipeline through extract, transform and load, logging progress
/// and (optionally) per-stage wall-clock timing.
pub struct SignalEngine<P: Pipeline> {
    pipeline: P,
    log_timing: bool,
}

impl<P: Pipeline> SignalEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            log_timing: false,
        }
    }

    pub fn new_with_timing(pipeline: P, log_timing: bool) -> Self {
        Self {
            pipeline,
            log_timing,
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting packet signal analysis...");

        let extract_started = Instant::now();
        let lines = self.pipeline.extract().await?;
        let extract_elapsed = extract_started.elapsed();
        tracing::info!("Extracted {} input lines", lines.len());

        let transform_started = Instant::now();
        let result = self.pipeline.transform(lines).await?;
        let transform_elapsed = transform_started.elapsed();
        tracing::info!(
            "Parsed {} packets into {} pairs",
            result.report.packet_count,
            result.report.pair_count
        );
        tracing::info!(
            "Ordered pair index sum: {}",
            result.report.ordered_pair_index_sum
        );
        tracing::info!(
            "Divider rank product: {}",
            result.report.divider_rank_product
        );

        let load_started = Instant::now();
        let output_path = self.pipeline.load(result).await?;
        let load_elapsed = load_started.elapsed();
        tracing::info!("Report saved to: {}", output_path);

        if self.log_timing {
            tracing::info!(
                "Stage timing: extract {:.2?}, transform {:.2?}, load {:.2?}",
                extract_elapsed,
                transform_elapsed,
                load_elapsed
            );
        }

        Ok(output_path)
    }
}
