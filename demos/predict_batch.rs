//! Example: Score many scenario files in parallel
//!
//! Usage:
//!   cargo run --release --example predict_batch -- --schema S --model M \
//!       [--jobs N] [--json] <scenario1.json> ...
//!
//! Each scenario file is a JSON object with any of the form fields, e.g.
//! `{"gdp_per_capita": 1.2, "region": "Western Europe"}`. Missing fields take
//! their standard defaults.
//!
//! Notes:
//! - The engine is loaded once and shared read-only by every worker.
//! - Default workers: available CPU threads minus one.

use happiness_predictor::{Engine, FormValues, PredictorConfig};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::fs;
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

#[derive(Serialize)]
struct ItemOut {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    explanations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn score_file(engine: &Engine<happiness_predictor::LinearModel>, path: &str) -> ItemOut {
    let form = fs::read_to_string(path)
        .map_err(|e| format!("read failed: {e}"))
        .and_then(|text| {
            serde_json::from_str::<FormValues>(&text).map_err(|e| format!("parse failed: {e}"))
        });

    let result = form.and_then(|form| {
        engine
            .predict(&form)
            .map_err(|e| format!("prediction failed: {e}"))
    });

    match result {
        Ok(scenario) => ItemOut {
            file: path.to_string(),
            score: Some(scenario.prediction),
            explanations: scenario.explanations.into_iter().map(|e| e.message).collect(),
            error: None,
        },
        Err(e) => ItemOut {
            file: path.to_string(),
            score: None,
            explanations: vec![],
            error: Some(e),
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut schema_path: Option<String> = None;
    let mut model_path: Option<String> = None;
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" | "--schema" | "--model" => {
                let v = args
                    .first()
                    .cloned()
                    .ok_or_else(|| format!("{} requires a value", a))?;
                args.remove(0);
                match a.as_str() {
                    "--jobs" => jobs = Some(std::cmp::max(1, v.parse::<usize>()?)),
                    "--schema" => schema_path = Some(v),
                    _ => model_path = Some(v),
                }
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: predict_batch --schema PATH --model PATH [--jobs N] [--json]\n\
                     \x20                    <file1> <file2> ...\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit one JSON object per line (JSONL)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    let (Some(schema_path), Some(model_path)) = (schema_path, model_path) else {
        eprintln!("ERROR: --schema and --model are required. Use --help for usage.");
        std::process::exit(2);
    };

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one scenario file. Use --help for usage.");
        std::process::exit(2);
    }

    let engine = Engine::from_artifacts(&schema_path, &model_path, PredictorConfig::default())?;
    let precision = engine.config().score_precision;

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<ItemOut> =
        pool.install(|| paths.par_iter().map(|path| score_file(&engine, path)).collect());

    for (idx, o) in outs.iter().enumerate() {
        if json {
            println!("{}", serde_json::to_string(o)?);
            continue;
        }
        match (o.score, &o.error) {
            (Some(score), _) => {
                println!(
                    "[{}/{}] {}: score={:.*}",
                    idx + 1,
                    outs.len(),
                    o.file,
                    precision,
                    score
                );
                for line in &o.explanations {
                    println!("    {}", line);
                }
            }
            (None, error) => println!(
                "[{}/{}] {}: ERROR: {}",
                idx + 1,
                outs.len(),
                o.file,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    let ok = outs.iter().filter(|o| o.score.is_some()).count();
    eprintln!(
        "Done: ok={}/{} wall={:.0}ms",
        ok,
        outs.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
