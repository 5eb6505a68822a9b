//! Synthetic JSON access-log generator.
//!
//! Produces reproducible NDJSON corpora for exercising the analyzer:
//! weighted methods, paths and status codes, normally-distributed
//! response times, and RFC 3339 timestamps over a fixed window.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat};
use clap::Parser;

use logtally::record::LogRecord;

#[derive(Parser)]
#[command(name = "loggen")]
#[command(about = "Generate synthetic JSON access-log files for logtally")]
#[command(version)]
struct Cli {
    /// Output directory for log files
    #[arg(long = "output", default_value = "./logs")]
    output: PathBuf,

    /// Number of log files to generate
    #[arg(long = "files", default_value_t = 50)]
    files: usize,

    /// Lines per file (approximately 10MB at the default)
    #[arg(long = "lines", default_value_t = 67_000)]
    lines: usize,

    /// Random seed for reproducibility (random when omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Show progress during generation
    #[arg(long = "verbose")]
    verbose: bool,
}

const METHODS: [(&str, u32); 5] = [
    ("GET", 70),
    ("POST", 20),
    ("PUT", 5),
    ("DELETE", 3),
    ("PATCH", 2),
];

const STATUSES: [(u16, u32); 12] = [
    (200, 75),
    (201, 5),
    (204, 2),
    (301, 1),
    (302, 1),
    (400, 3),
    (401, 2),
    (403, 1),
    (404, 5),
    (500, 3),
    (502, 1),
    (503, 1),
];

const PATHS: [(&str, u32); 13] = [
    ("/api/users", 15),
    ("/api/users/{id}", 10),
    ("/api/products", 15),
    ("/api/products/{id}", 10),
    ("/api/orders", 10),
    ("/api/orders/{id}", 5),
    ("/api/auth/login", 8),
    ("/api/auth/logout", 3),
    ("/api/search", 7),
    ("/api/health", 5),
    ("/api/metrics", 2),
    ("/", 5),
    ("/static/{file}", 5),
];

const STATIC_FILES: [&str; 5] = ["app.js", "style.css", "logo.png", "favicon.ico", "bundle.js"];

// Timestamp window: 2025-01-10T00:00:00Z .. 2025-01-15T23:59:59Z
const WINDOW_START: i64 = 1_736_467_200;
const WINDOW_SECS: i64 = 6 * 24 * 60 * 60 - 1;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("loggen: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    println!("Generating log files...");
    let start = Instant::now();
    let mut total_bytes = 0u64;

    for i in 1..=cli.files {
        let path = cli.output.join(format!("access_{i:03}.log"));
        let size = generate_file(&path, cli.lines, &mut rng)?;
        total_bytes += size;

        if cli.verbose {
            println!(
                "  [{}/{}] access_{:03}.log ({} lines, {:.1}MB)",
                i,
                cli.files,
                i,
                cli.lines,
                size as f64 / (1024.0 * 1024.0)
            );
        }
    }

    println!(
        "\nDone! Generated {} files ({:.1}MB total) in {}ms",
        cli.files,
        total_bytes as f64 / (1024.0 * 1024.0),
        start.elapsed().as_millis()
    );

    Ok(())
}

fn generate_file(path: &Path, lines: usize, rng: &mut fastrand::Rng) -> Result<u64> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for _ in 0..lines {
        let record = generate_record(rng);
        serde_json::to_writer(&mut writer, &record)
            .with_context(|| format!("failed to write {}", path.display()))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(fs::metadata(path)?.len())
}

fn generate_record(rng: &mut fastrand::Rng) -> LogRecord {
    let status = weighted(&STATUSES, rng);
    LogRecord {
        timestamp: generate_timestamp(rng),
        method: weighted(&METHODS, rng).to_string(),
        path: generate_path(rng),
        status,
        response_time_ms: generate_response_time(rng),
        bytes: generate_bytes(status, rng),
        user_id: format!("user_{}", rng.u32(..1_000_000)),
        ip: generate_ip(rng),
    }
}

fn weighted<T: Copy>(table: &[(T, u32)], rng: &mut fastrand::Rng) -> T {
    let total: u32 = table.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.u32(..total);
    for (item, weight) in table {
        if roll < *weight {
            return *item;
        }
        roll -= weight;
    }
    table[table.len() - 1].0
}

fn generate_timestamp(rng: &mut fastrand::Rng) -> String {
    let secs = WINDOW_START + rng.i64(0..WINDOW_SECS);
    let millis = rng.u32(..1000);
    DateTime::from_timestamp(secs, millis * 1_000_000)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn generate_path(rng: &mut fastrand::Rng) -> String {
    match weighted(&PATHS, rng) {
        "/api/users/{id}" => format!("/api/users/{}", rng.u32(1..=1_000)),
        "/api/products/{id}" => format!("/api/products/{}", rng.u32(1..=5_000)),
        "/api/orders/{id}" => format!("/api/orders/{}", rng.u32(1..=10_000)),
        "/static/{file}" => format!("/static/{}", STATIC_FILES[rng.usize(..STATIC_FILES.len())]),
        fixed => fixed.to_string(),
    }
}

fn generate_response_time(rng: &mut fastrand::Rng) -> u64 {
    let mean = 100.0;
    let std_dev = 200.0;

    // Box-Muller transform for a normal distribution
    let u1 = rng.f64().max(f64::MIN_POSITIVE);
    let u2 = rng.f64();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();

    (mean + std_dev * z).clamp(1.0, 5000.0) as u64
}

fn generate_bytes(status: u16, rng: &mut fastrand::Rng) -> u64 {
    let (min, max) = match status {
        200 => (100, 50_000),
        201 => (50, 1_000),
        204 => return 0,
        301 | 302 => (0, 100),
        400..=499 => (50, 500),
        500..=599 => (100, 1_000),
        _ => (100, 10_000),
    };
    rng.u64(min..max)
}

fn generate_ip(rng: &mut fastrand::Rng) -> String {
    match rng.u8(..3) {
        0 => format!("10.{}.{}.{}", rng.u8(..), rng.u8(..), rng.u8(..)),
        1 => format!("172.{}.{}.{}", 16 + rng.u8(..16), rng.u8(..), rng.u8(..)),
        _ => format!("192.168.{}.{}", rng.u8(..), rng.u8(..)),
    }
}
