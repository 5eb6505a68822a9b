use std::fs;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use logtally::cli::Mode;
use logtally::config::Config;
use logtally::runner;

fn write_corpus(files: usize, lines: usize) -> (tempfile::TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("failed to create corpus dir");
    let mut paths = Vec::with_capacity(files);

    let mut rng = fastrand::Rng::with_seed(1);
    let statuses = [200u16, 200, 200, 201, 301, 400, 404, 500];

    for i in 0..files {
        let path = dir.path().join(format!("access_{i:03}.log"));
        let mut content = String::with_capacity(lines * 96);
        for n in 0..lines {
            let status = statuses[rng.usize(..statuses.len())];
            content.push_str(&format!(
                "{{\"timestamp\":\"2025-01-10T00:00:00.000Z\",\"method\":\"GET\",\"path\":\"/api/users\",\"status\":{status},\"response_time_ms\":42,\"bytes\":512,\"user_id\":\"user_{n}\",\"ip\":\"10.0.0.1\"}}\n"
            ));
        }
        fs::write(&path, content).expect("failed to write corpus file");
        paths.push(path);
    }

    (dir, paths)
}

fn bench_processing_modes(c: &mut Criterion) {
    let (_dir, files) = write_corpus(16, 2_000);

    for mode in [Mode::Sequential, Mode::Spawn, Mode::Pool] {
        let config = Config {
            mode,
            ..Config::default()
        };
        c.bench_function(&format!("analyze_{}", mode.as_str()), |b| {
            b.iter(|| {
                runner::run(
                    &config,
                    files.clone(),
                    Arc::new(AtomicBool::new(false)),
                )
                .expect("analysis failed")
            });
        });
    }
}

criterion_group!(benches, bench_processing_modes);
criterion_main!(benches);
