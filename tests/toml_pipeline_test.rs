use signal_sort::core::ConfigProvider;
use signal_sort::utils::validation::Validate;
use signal_sort::{LocalStorage, SignalEngine, SignalReport, SimplePipeline, TomlConfig};
use tempfile::TempDir;

const SAMPLE_INPUT: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[]
[3]
";

fn write_config(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("signal-config.toml");
    std::fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_toml_driven_pipeline_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();

    std::fs::write(temp_dir.path().join("packets.txt"), SAMPLE_INPUT).unwrap();

    let config_path = write_config(
        &temp_dir,
        r#"
[pipeline]
name = "pair-check"
description = "Small pair ordering run"
version = "1.0"

[source]
type = "file"
path = "packets.txt"

[analysis]
dividers = ["[[2]]", "[[6]]"]

[load]
output_path = "reports"
output_formats = ["json", "text"]

[monitoring]
enabled = true
stage_timing = true
"#,
    );

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();
    assert!(config.stage_timing());
    assert_eq!(config.input_path(), "packets.txt");

    let log_timing = config.stage_timing();
    let storage = LocalStorage::new(base);
    let pipeline = SimplePipeline::new(storage, config);
    let engine = SignalEngine::new_with_timing(pipeline, log_timing);

    let output_path = engine.run().await.unwrap();
    assert_eq!(output_path, "reports/signal_report.json");

    let report: SignalReport = serde_json::from_slice(
        &std::fs::read(temp_dir.path().join("reports/signal_report.json")).unwrap(),
    )
    .unwrap();

    // both pairs are in order: 1 + 2
    assert_eq!(report.pair_count, 2);
    assert_eq!(report.ordered_pair_index_sum, 3);
    // sorted: [] [1,1,3,1,1] [1,1,5,1,1] [[2]] [3] [[6]]
    assert_eq!(report.divider_ranks, vec![4, 6]);
    assert_eq!(report.divider_rank_product, 24);
}

#[tokio::test]
async fn test_invalid_toml_config_is_rejected_before_running() {
    let temp_dir = TempDir::new().unwrap();

    let config_path = write_config(
        &temp_dir,
        r#"
[pipeline]
name = "broken"
description = "Bad source type"
version = "1.0"

[source]
type = "api"
path = "packets.txt"

[load]
output_path = "reports"
output_formats = ["json"]
"#,
    );

    let config = TomlConfig::from_file(&config_path).unwrap();
    assert!(config.validate().is_err());
}
