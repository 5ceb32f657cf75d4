mod debug_report;

use signalis::{Library, Options, detect_intent_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let library = Library::builtin();
    let options = Options { decision_threshold: config.threshold, ..Options::default() };
    let verbose = detect_intent_verbose_with(&config.input, &library, &options);

    if config.json {
        match serde_json::to_string_pretty(&verbose.report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize report: {err}");
                std::process::exit(1);
            }
        }
    } else {
        debug_report::print_run(&config.input, &verbose.report, &verbose.details, config.color);
    }
}

struct CliConfig {
    input: String,
    threshold: f64,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut threshold = 0.7;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("signalis {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--threshold" => {
                let value = args.next().ok_or_else(|| "error: --threshold expects a value".to_string())?;
                threshold = parse_threshold(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--threshold=") => {
                let value = arg.trim_start_matches("--threshold=");
                threshold = parse_threshold(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, threshold, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("error: invalid --threshold '{value}' (expected a number)"))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(format!("error: --threshold '{value}' out of range (expected 0.0..=1.0)"));
    }
    Ok(parsed)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "signalis {version}

Rule-based intent signal extraction CLI.

Usage:
  signalis [OPTIONS] [--] <input...>
  signalis [OPTIONS] --input <text>

Options:
  -i, --input <text>        Input text to scan. If omitted, reads remaining args
                            or stdin when no args are provided.
  --threshold <value>       Confidence threshold for the decisions partition.
                            Default: 0.7
  --json                    Print the report as JSON instead of the debug view.
  --color                   Force ANSI color output.
  --no-color                Disable ANSI color output.
  -h, --help                Show this help message.
  -V, --version             Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
