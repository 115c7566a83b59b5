//! Example: Predict or compare happiness scores from the command line
//!
//! Usage:
//!   cargo run --example predict -- --schema S --model M [--set field=value]...
//!   cargo run --example predict -- --schema S --model M --compare \
//!       [--a field=value]... [--b field=value]...
//!
//! `--help` lists every field with its label, range and step, plus `region`.
//! In compare mode Scenario A starts from the Sub-Saharan Africa preset.

use happiness_predictor::{Engine, FormValues, Mode, PredictorConfig, Request, SemanticField};
use std::env;

fn print_usage() {
    eprintln!(
        "Usage: predict --schema PATH --model PATH [--compare] [--json] [--precision N]\n\
         \x20              [--set field=value]... [--a field=value]... [--b field=value]...\n\
         \n\
         --compare      Compare Scenario A (--a) against Scenario B (--b)\n\
         --json         Emit the full result as JSON\n\
         --precision N  Decimal places for scores (default: 2)\n\
         --regions      List region choices and exit\n\n\
         Fields:"
    );
    for field in SemanticField::ALL {
        let spec = field.spec();
        eprintln!(
            "  {:<30} {} [{}, {}], step {}, default {}",
            field.column_name(),
            spec.label,
            spec.min,
            spec.max,
            spec.step,
            spec.default
        );
    }
    eprintln!("  {:<30} Region (see --regions)", "region");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut schema_path: Option<String> = None;
    let mut model_path: Option<String> = None;
    let mut mode = Mode::Single;
    let mut json = false;
    let mut list_regions = false;
    let mut config = PredictorConfig::default();
    let mut single = FormValues::default();
    let mut scenario_a = FormValues::default();
    let mut scenario_b = FormValues::default();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        let mut value = || -> Result<String, Box<dyn std::error::Error>> {
            if args.is_empty() {
                return Err(format!("{} requires a value", a).into());
            }
            Ok(args.remove(0))
        };
        match a.as_str() {
            "--schema" => schema_path = Some(value()?),
            "--model" => model_path = Some(value()?),
            "--compare" => mode = Mode::Compare,
            "--json" => json = true,
            "--regions" => list_regions = true,
            "--precision" => config.score_precision = value()?.parse()?,
            "--set" => single.apply_assignment(&value()?)?,
            "--a" => scenario_a.apply_assignment(&value()?)?,
            "--b" => scenario_b.apply_assignment(&value()?)?,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("ERROR: Unknown argument '{}'. Use --help for usage.", other);
                std::process::exit(2);
            }
        }
    }

    let (Some(schema_path), Some(model_path)) = (schema_path, model_path) else {
        eprintln!("ERROR: --schema and --model are required. Use --help for usage.");
        std::process::exit(2);
    };

    let engine = Engine::from_artifacts(&schema_path, &model_path, config)?;

    if list_regions {
        for region in engine.collector().region_choices() {
            println!("{}", region);
        }
        return Ok(());
    }

    let request = match mode {
        Mode::Single => Request::Predict { inputs: single },
        Mode::Compare => Request::Compare {
            a: scenario_a,
            b: scenario_b,
        },
    };

    let response = engine.handle(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        for line in engine.render(&response) {
            println!("{}", line);
        }
    }

    Ok(())
}
