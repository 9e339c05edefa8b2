//! The `explain` command: describe a diagnostic code.

use tarn_diagnostic::ErrorCode;

/// Print the description of `code_str`, or list every code when it is unknown.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.description());
        }
        std::process::exit(1);
    };

    let tier = if code.is_internal() {
        "internal error: a well-typed program reached an impossible state"
    } else if code.is_runtime() {
        "runtime error: raised while evaluating a well-typed program"
    } else {
        "static error: reported before the program runs"
    };
    println!("{code}: {}", code.description());
    println!("{tier}");
}
