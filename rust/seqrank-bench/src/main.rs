//! Seqrank Benchmark Runner
//!
//! Standalone binary for running the array, concat and cycle workloads
//! with text/CSV/JSON output and peak memory tracking.

use serde::Serialize;
use std::fs;
use std::hint::black_box;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use seqrank_core::workload;

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub elements: u64,
    pub duration_ms: f64,
    pub throughput_elems_per_sec: f64,
    pub peak_rss_kb: Option<u64>,
    pub iterations: u32,
}

/// Output mode, decided before any measurement runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<OutputFormat> {
        match s {
            "text" => Some(OutputFormat::Text),
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Read peak RSS from /proc/self/status on Linux.
/// Returns None on non-Linux or if the file cannot be parsed.
pub fn peak_rss_kb() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        let status = fs::read_to_string("/proc/self/status").ok()?;
        for line in status.lines() {
            if line.starts_with("VmPeak:") || line.starts_with("VmHWM:") {
                // Format: "VmPeak:   123456 kB"
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() >= 2 {
                    return parts[1].parse::<u64>().ok();
                }
            }
        }
        None
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Run a single workload and produce a BenchResult.
fn run_bench(name: &str, elements: u64, bench_fn: &dyn Fn(), iterations: u32) -> BenchResult {
    // Warm up
    for _ in 0..3 {
        bench_fn();
    }

    // Measure
    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        bench_fn();
        total += start.elapsed();
    }
    let rss = peak_rss_kb();

    let avg_duration = total.as_secs_f64() / iterations as f64;

    BenchResult {
        name: name.to_string(),
        elements,
        duration_ms: avg_duration * 1000.0,
        throughput_elems_per_sec: elements as f64 / avg_duration,
        peak_rss_kb: rss,
        iterations,
    }
}

fn print_csv_header() {
    println!("name,elements,duration_ms,elems_per_sec,peak_rss_kb,iterations");
}

fn print_csv_row(r: &BenchResult) {
    println!(
        "{},{},{:.3},{:.0},{},{}",
        r.name,
        r.elements,
        r.duration_ms,
        r.throughput_elems_per_sec,
        r.peak_rss_kb.map_or("N/A".to_string(), |v| v.to_string()),
        r.iterations,
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let output_format = match args.get(1).map(|s| s.as_str()) {
        Some(s) => match OutputFormat::parse(s) {
            Some(f) => f,
            None => {
                eprintln!("invalid argument: unknown output format '{}'", s);
                return ExitCode::from(2);
            }
        },
        None => OutputFormat::Text,
    };

    let iterations: u32 = match args.get(2) {
        Some(s) => {
            let parsed = s
                .parse::<usize>()
                .ok()
                .and_then(|n| workload::validate_size(n).ok());
            match parsed {
                Some(n) => n as u32,
                None => {
                    eprintln!("invalid argument: iterations must be a positive integer");
                    return ExitCode::from(2);
                }
            }
        }
        None => 10,
    };

    // Cycle at the reference dimensions (10 x 32000 x 32000) takes minutes
    // per iteration; the runner sweeps a 100x smaller inner loop.
    let cycle_inner = workload::CYCLE_INNER / 100;

    let mut results: Vec<BenchResult> = Vec::new();

    results.push(run_bench(
        "array",
        workload::ARRAY_LEN as u64,
        &|| {
            black_box(workload::array(black_box(workload::ARRAY_LEN)));
        },
        iterations,
    ));

    results.push(run_bench(
        "concat",
        (workload::CONCAT_ROUNDS * workload::CONCAT_APPENDS) as u64,
        &|| {
            black_box(workload::concat(
                black_box(workload::CONCAT_ROUNDS),
                black_box(workload::CONCAT_APPENDS),
            ));
        },
        iterations,
    ));

    results.push(run_bench(
        "cycle",
        (workload::CYCLE_OUTER * workload::CYCLE_MID * cycle_inner) as u64,
        &|| {
            black_box(workload::cycle(
                black_box(workload::CYCLE_OUTER),
                black_box(workload::CYCLE_MID),
                black_box(cycle_inner),
            ));
        },
        iterations,
    ));

    match output_format {
        OutputFormat::Csv => {
            print_csv_header();
            for r in &results {
                print_csv_row(r);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&results) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("failed to serialize results: {}", e);
                return ExitCode::from(1);
            }
        },
        OutputFormat::Text => {
            println!("Seqrank Workload Benchmarks");
            println!("===========================");
            println!();
            for r in &results {
                println!(
                    "[{}] {:.3}ms avg ({} iters) | {:.0} elems/s | RSS: {}",
                    r.name,
                    r.duration_ms,
                    r.iterations,
                    r.throughput_elems_per_sec,
                    r.peak_rss_kb
                        .map_or("N/A".to_string(), |v| format!("{}kB", v)),
                );
            }
        }
    }

    ExitCode::SUCCESS
}
