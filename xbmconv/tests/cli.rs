use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::process::Output;

const SKETCH: &str = "\
#include <Adafruit_SSD1306.h>

const unsigned char wifi_icon[] PROGMEM = {
  0x00, 0x00, 0x0f, 0xf0, 0x30, 0x0c, 0x40, 0x02, 0x07, 0xe0, 0x18, 0x18,
  0x20, 0x04, 0x03, 0xc0, 0x04, 0x20, 0x00, 0x00, 0x01, 0x80, 0x01, 0x80,
  0x00, 0x00, 0x00, 0x00
};

void drawStatus() {
  //display.drawBitmap(112, 0, wifi_icon, 16, 14, SSD1306_WHITE);
  display.display();
}
";

const CONVERTED: &str = "\
#include <Adafruit_SSD1306.h>

const unsigned char wifi_icon[] PROGMEM = {0x00, 0x00, 0xf0, 0x0f, 0x0c, 0x30, 0x02, 0x40, 0xe0, 0x07, 0x18, 0x18, \n\
0x04, 0x20, 0xc0, 0x03, 0x20, 0x04, 0x00, 0x00, 0x80, 0x01, 0x80, 0x01, \n\
0x00, 0x00, 0x00, 0x00};

void drawStatus() {
  display.setDrawColor(1); display.drawXBMP(112, 0, 16, 14, wifi_icon);
  display.display();
}
";

fn xbmconv(args: &[&str], file: &Path) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_xbmconv"))
        .args(args)
        .arg(file)
        .output()?)
}

fn write_sketch(dir: &tempfile::TempDir, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("sketch.ino");
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn converts_sketch_in_place() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_sketch(&dir, SKETCH)?;
    let out = xbmconv(&[], &path)?;
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(&path)?, CONVERTED);
    Ok(())
}

#[test]
fn second_run_only_flips_arrays_back() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_sketch(&dir, SKETCH)?;
    assert!(xbmconv(&[], &path)?.status.success());
    assert!(xbmconv(&[], &path)?.status.success());
    let twice = fs::read_to_string(&path)?;
    assert!(twice.contains("0x0f, 0xf0, 0x30, 0x0c"));
    assert!(twice.contains("display.setDrawColor(1); display.drawXBMP(112, 0, 16, 14, wifi_icon);"));
    assert!(!twice.contains("drawBitmap"));
    Ok(())
}

#[test]
fn stdout_mode_prints_and_keeps_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_sketch(&dir, SKETCH)?;
    let out = xbmconv(&["--stdout"], &path)?;
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout)?, CONVERTED);
    assert_eq!(fs::read_to_string(&path)?, SKETCH);
    Ok(())
}

#[test]
fn check_mode_fails_on_pending_changes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_sketch(&dir, SKETCH)?;
    let out = xbmconv(&["--check"], &path)?;
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(&path)?, SKETCH);

    let clean = write_sketch(&dir, "void setup() {}\n")?;
    assert!(xbmconv(&["--check"], &clean)?.status.success());
    Ok(())
}

#[test]
fn json_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_sketch(&dir, SKETCH)?;
    let out = xbmconv(&["--json", "--check-sizes"], &path)?;
    assert!(out.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&out.stdout)?;
    let report = &reports[0];
    assert_eq!(report["changed"], true);
    assert_eq!(report["arrays"][0]["name"], "wifi_icon");
    assert_eq!(report["arrays"][0]["len"], 28);
    assert_eq!(report["calls"][0]["bitmap"], "wifi_icon");
    assert_eq!(report["calls"][0]["color"], "SSD1306_WHITE");
    assert_eq!(report["discarded_colors"][0], "wifi_icon");
    assert_eq!(report["size_mismatches"].as_array().map(|a| a.len()), Some(0));
    Ok(())
}

#[test]
fn missing_file_fails_without_creating_it() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nope.ino");
    let out = xbmconv(&[], &path)?;
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.ino"));
    assert!(!path.exists());
    Ok(())
}
