use anyhow::Result;
use clap::Parser;
use gcd_check::{CheckEngine, CliConfig, FileSource, RunSummary};
use std::path::Path;
use tempfile::TempDir;

fn batch_config(path: &Path, extra: &[&str]) -> CliConfig {
    let mut args = vec!["gcd-check", "batch", path.to_str().unwrap()];
    args.extend_from_slice(extra);
    CliConfig::try_parse_from(args).unwrap()
}

fn run_batch(content: &str, extra: &[&str]) -> Result<(String, RunSummary)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("_results.csv");
    std::fs::write(&path, content)?;

    let engine = CheckEngine::new(batch_config(&path, extra));
    let mut out = Vec::new();
    let summary = engine.run(FileSource::open(&path)?, &mut out)?;
    Ok((String::from_utf8(out)?, summary))
}

#[test]
fn test_passing_record_prints_nothing() -> Result<()> {
    let (out, summary) = run_batch("6,12,18\n", &[])?;
    assert_eq!(out, "");
    assert_eq!(summary.passed, 1);
    Ok(())
}

#[test]
fn test_failing_record_prints_marker() -> Result<()> {
    let (out, summary) = run_batch("5,12,18\n", &[])?;
    assert_eq!(out, "wrong\n");
    assert_eq!(summary.failed, 1);
    Ok(())
}

#[test]
fn test_batch_continues_past_failures() -> Result<()> {
    let content = "5,12,18\n6,12,18\n2,3,5\n11,99,22\n";
    let (out, summary) = run_batch(content, &[])?;
    assert_eq!(out, "wrong\nwrong\n");
    assert_eq!(summary.checked, 4);
    assert!(!summary.halted_early);
    Ok(())
}

#[test]
fn test_omitted_operand_and_trailing_commas() -> Result<()> {
    // 兩個欄位的行代表模擬器省略了為零的運算元
    let content = "6,12\n6,12,18,\n,5,12,18,\n7,7\n";
    let (out, summary) = run_batch(content, &[])?;
    assert_eq!(out, "wrong\n");
    assert_eq!(summary.lines_read, 4);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.checked, 2);
    Ok(())
}

#[test]
fn test_malformed_lines_are_skipped() -> Result<()> {
    let content = "result,a,b\n6,12,eighteen\n\n1,2,3,4\n6,12,18\n";
    let (out, summary) = run_batch(content, &[])?;
    assert_eq!(out, "");
    assert_eq!(summary.skipped, 4);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.lines_read, summary.checked + summary.skipped);
    Ok(())
}

#[test]
fn test_negative_result_is_a_mismatch() -> Result<()> {
    let (out, _) = run_batch("-6,12,18\n6,-12,-18\n", &[])?;
    assert_eq!(out, "wrong\n");
    Ok(())
}

#[test]
fn test_bare_carriage_return_line_endings() -> Result<()> {
    let (out, summary) = run_batch("6,12,18\r5,12,18\r", &[])?;
    assert_eq!(out, "wrong\n");
    assert_eq!(summary.lines_read, 2);
    assert_eq!(summary.passed, 1);
    Ok(())
}

#[test]
fn test_crlf_and_invalid_utf8() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("_results.csv");
    std::fs::write(&path, b"5,12,18\r\n6,\xfe,18\r\n4,4,8\r\n")?;

    let engine = CheckEngine::new(batch_config(&path, &[]));
    let mut out = Vec::new();
    let summary = engine.run(FileSource::open(&path)?, &mut out)?;
    assert_eq!(String::from_utf8(out)?, "wrong\n");
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.passed, 1);
    Ok(())
}

#[test]
fn test_custom_marker_and_stop_on_failure() -> Result<()> {
    let content = "5,12,18\n1,4,8\n";
    let (out, summary) = run_batch(content, &["--marker", "MISMATCH", "--stop-on-failure"])?;
    assert_eq!(out, "MISMATCH\n");
    assert_eq!(summary.lines_read, 1);
    assert!(summary.halted_early);
    Ok(())
}

#[test]
fn test_rerun_is_identical() -> Result<()> {
    let content = "6,12,18\n5,12,18\n0,0,0\n3,-3,0\n";
    let first = run_batch(content, &[])?;
    let second = run_batch(content, &[])?;
    assert_eq!(first, second);
    assert_eq!(first.0, "wrong\n");
    Ok(())
}

#[test]
fn test_missing_results_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = FileSource::open(temp_dir.path().join("_results.csv")).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("_results.csv"));
}
