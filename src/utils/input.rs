use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask for a single line on stdin, showing `prompt` only when a user is typing
pub fn prompt_input(prompt: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        print!("{}", prompt);
        io::stdout().flush()?;
    }

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Join positional words into one request
pub fn join_request_words(words: &[String]) -> String {
    words.join(" ")
}
