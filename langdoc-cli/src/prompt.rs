use std::io::{self, BufRead, Write};

/// Asks a yes/no question and blocks on one line of stdin.
///
/// Only `y` / `yes` (case-insensitive) count as consent; everything else,
/// including a closed stdin, declines.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
