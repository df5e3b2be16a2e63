use crate::core::{analysis, parser};
use crate::domain::model::{PacketPair, SignalReport, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, SignalError};
use chrono::Utc;

const JSON_REPORT_FILE: &str = "signal_report.json";
const TEXT_REPORT_FILE: &str = "signal_report.txt";

pub struct SimplePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SimplePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_text_report(report: &SignalReport) -> String {
        let mut lines = vec![
            "Packet signal analysis".to_string(),
            format!("generated at: {}", report.generated_at.to_rfc3339()),
            format!(
                "packets: {} ({} pairs)",
                report.packet_count, report.pair_count
            ),
            format!(
                "ordered pairs: {:?} (index sum {})",
                report.ordered_pair_indices, report.ordered_pair_index_sum
            ),
        ];

        for (divider, rank) in report.dividers.iter().zip(&report.divider_ranks) {
            lines.push(format!("divider {} rank: {}", divider, rank));
        }
        lines.push(format!(
            "divider rank product: {}",
            report.divider_rank_product
        ));
        lines.push(String::new());

        lines.join("\n")
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;

        let text = String::from_utf8(raw).map_err(|_| SignalError::ValidationError {
            message: format!("Input '{}' is not valid UTF-8", self.config.input_path()),
        })?;

        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        tracing::debug!("Read {} lines", lines.len());
        Ok(lines)
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let mut packets = Vec::new();

        for (line_no, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                // blank lines only separate pairs
                continue;
            }

            let packet = parser::parse_packet(trimmed).map_err(|e| match e {
                SignalError::ParseError { position, message } => SignalError::ParseError {
                    position,
                    message: format!("input line {}: {}", line_no + 1, message),
                },
                other => other,
            })?;
            packets.push(packet);
        }

        if packets.is_empty() {
            return Err(SignalError::ProcessingError {
                message: "The input contains no packets".to_string(),
            });
        }
        if packets.len() % 2 != 0 {
            return Err(SignalError::ProcessingError {
                message: format!(
                    "Expected an even number of packets to form pairs, found {}",
                    packets.len()
                ),
            });
        }

        let pairs: Vec<PacketPair> = packets
            .chunks_exact(2)
            .enumerate()
            .map(|(i, chunk)| PacketPair {
                index: i + 1,
                left: chunk[0].clone(),
                right: chunk[1].clone(),
            })
            .collect();

        let dividers = analysis::resolve_dividers(self.config.dividers())?;
        let divider_ranks = analysis::divider_ranks(&packets, &dividers);

        let report = SignalReport {
            generated_at: Utc::now(),
            packet_count: packets.len(),
            pair_count: pairs.len(),
            ordered_pair_indices: analysis::ordered_pair_indices(&pairs),
            ordered_pair_index_sum: analysis::ordered_pair_index_sum(&pairs),
            dividers: dividers.iter().map(|d| d.to_string()).collect(),
            divider_rank_product: divider_ranks.iter().product(),
            divider_ranks,
        };

        Ok(TransformResult {
            packets,
            pairs,
            report,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut primary_path = None;

        for format in self.config.output_formats() {
            let (file_name, bytes) = match format.as_str() {
                "json" => (
                    JSON_REPORT_FILE,
                    serde_json::to_vec_pretty(&result.report)?,
                ),
                "text" => (
                    TEXT_REPORT_FILE,
                    Self::render_text_report(&result.report).into_bytes(),
                ),
                other => {
                    return Err(SignalError::ValidationError {
                        message: format!("Unsupported output format: {}", other),
                    })
                }
            };

            let path = format!("{}/{}", self.config.output_path(), file_name);
            tracing::debug!("Writing {} report to: {}", format, path);
            self.storage.write_file(&path, &bytes).await?;

            primary_path.get_or_insert(path);
        }

        primary_path.ok_or_else(|| SignalError::ConfigError {
            message: "No output formats configured".to_string(),
        })
    }
}
