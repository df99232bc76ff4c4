use std::env;
use std::process::ExitCode;

use log::error;

use ovpcurve::annotation::annotatedrow::AnnotatedCurve;
use ovpcurve::configuration::CurveConfiguration;

const USAGE: &str = "usage: ovpcurve <config.json> [--json]";

fn print_csv(curve: &AnnotatedCurve) {
    print!("{}", curve.to_csv());
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let Some(config_path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let config = match CurveConfiguration::from_path(config_path) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let curve = config.pipeline().annotate(config.control_points());
    if as_json {
        match serde_json::to_string_pretty(&curve) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_csv(&curve);
    }
    ExitCode::SUCCESS
}
