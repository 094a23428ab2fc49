use anyhow::bail;
use anyhow::Result;
use argh::FromArgs;
use serde::Serialize;
use std::path::PathBuf;
use xbmconv::convert_file;
use xbmconv::Mode;
use xbmconv::Options;
use xbmconv::Report;

#[derive(FromArgs, PartialEq, Debug)]
/// Convert Adafruit GFX drawBitmap bitmaps in Arduino sketches to u8g2 drawXBMP
struct Args {
    #[argh(positional)]
    /// sketch files to convert in place
    paths: Vec<PathBuf>,
    #[argh(switch)]
    /// print the converted text instead of overwriting the files
    stdout: bool,
    #[argh(switch)]
    /// write nothing and fail if any file would change
    check: bool,
    #[argh(switch)]
    /// leave PROGMEM byte tables untouched
    no_arrays: bool,
    #[argh(switch)]
    /// leave commented-out drawBitmap calls untouched
    no_calls: bool,
    #[argh(switch)]
    /// pass the original color argument to setDrawColor() instead of 1
    keep_color: bool,
    #[argh(switch)]
    /// warn when a call's width and height do not match its table size
    check_sizes: bool,
    #[argh(switch)]
    /// print the conversion reports as JSON
    json: bool,
}
impl Args {
    fn options(&self) -> Options {
        Options {
            arrays: !self.no_arrays,
            calls: !self.no_calls,
            keep_color: self.keep_color,
            check_sizes: self.check_sizes,
        }
    }
    fn mode(&self) -> Result<Mode> {
        match (self.stdout, self.check) {
            (true, true) => bail!("--stdout and --check can not be used together"),
            (true, false) if self.json => bail!("--stdout and --json can not be used together"),
            (true, false) => Ok(Mode::Stdout),
            (false, true) => Ok(Mode::Check),
            (false, false) => Ok(Mode::InPlace),
        }
    }
}

#[derive(Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(flatten)]
    report: Report,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Args = argh::from_env();
    if args.paths.is_empty() {
        bail!("No input files. Run with --help for usage.");
    }
    let opts = args.options();
    let mode = args.mode()?;

    let mut reports = Vec::new();
    for path in &args.paths {
        let report = convert_file(path, &opts, mode)?;
        if mode != Mode::Stdout {
            let verb = match (mode, report.changed) {
                (Mode::Check, true) => "would convert",
                (_, true) => "converted",
                (_, false) => "unchanged",
            };
            eprintln!(
                "{}: {verb} ({} arrays, {} calls)",
                path.display(),
                report.arrays.len(),
                report.calls.len()
            );
        }
        reports.push(FileReport {
            path: path.clone(),
            report,
        });
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    if mode == Mode::Check {
        let pending = reports.iter().filter(|r| r.report.changed).count();
        if pending > 0 {
            bail!("{pending} file(s) would be changed");
        }
    }
    Ok(())
}
