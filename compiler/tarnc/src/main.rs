//! Tarn CLI

use tarn_diagnostic::emitter::ColorMode;
use tarnc::commands::{check_file, eval_source, explain_error, parse_color_mode, run_file};

fn main() {
    tarnc::init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = parse_color_mode(value) else {
                eprintln!("error: unknown color mode '{value}' (expected auto, always or never)");
                std::process::exit(1);
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: tarn run <file.tarn>");
                std::process::exit(1);
            };
            run_file(path, color);
        }
        "check" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: tarn check <file.tarn>");
                std::process::exit(1);
            };
            check_file(path, color);
        }
        "eval" => {
            let Some(source) = args.get(1) else {
                eprintln!("Usage: tarn eval '<program>'");
                std::process::exit(1);
            };
            eval_source(source, color);
        }
        "explain" => {
            let Some(code) = args.get(1) else {
                eprintln!("Usage: tarn explain <error-code>");
                eprintln!("Example: tarn explain E2001");
                std::process::exit(1);
            };
            explain_error(code);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tarn {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // Allow `tarn file.tarn` as shorthand for `tarn run file.tarn`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tarn"))
            {
                run_file(command, color);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Tarn - a small statically typed s-expression language");
    println!();
    println!("Usage: tarn [--color=auto|always|never] <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  run <file>       Type-check and evaluate a program, print its value");
    println!("  check <file>     Type-check a program, print its type");
    println!("  eval <source>    Evaluate a program given inline, print value and type");
    println!("  explain <code>   Describe a diagnostic code");
    println!("  help             Show this message");
    println!("  version          Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tarn_types=trace) to see inference and");
    println!("evaluation traces on stderr.");
}
