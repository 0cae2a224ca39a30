use audioduration::{
    detect_format, duration, DurationReport, DurationResult, UnsupportedFormatError,
};
use std::env;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut json = false;
    let mut verbose = false;
    let mut paths = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            _ => paths.push(arg),
        }
    }

    let log_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if paths.is_empty() {
        eprintln!("Usage: audio-duration [--json] [-v] <file.mp3|file.m4a|...>...");
        return ExitCode::from(2);
    }

    let mut failed = false;
    for path in paths {
        match report_duration(&path).await {
            Ok(report) if json => match serde_json::to_string(&report) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    eprintln!("{}: {}", path, e);
                    failed = true;
                }
            },
            Ok(report) => println!("{}\t{}", report.path, report.duration_ms),
            Err(e) => {
                eprintln!("{}: {}", path, e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn report_duration(path: &str) -> DurationResult<DurationReport> {
    let format = detect_format(path).ok_or_else(|| {
        UnsupportedFormatError::new(format!("Unsupported content type: {}", path))
    })?;
    let duration_ms = duration(path).await?;
    Ok(DurationReport {
        path: path.to_string(),
        format,
        duration_ms,
    })
}
