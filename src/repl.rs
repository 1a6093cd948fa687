//! The read-eval-print driver.
//!
//! Generic over the input and output streams so the whole conversation can
//! be driven from memory in tests.

use crate::commands::{Assistant, Reply};
use std::io::{self, BufRead, Write};
use tracing::info;

pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the assistant until `exit`/`close` or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` are returned; command errors are
/// already part of the replies.
pub fn run<R, W>(assistant: &mut Assistant, input: R, output: &mut W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            // End of input behaves like `exit`
            writeln!(output)?;
            writeln!(output, "{}", crate::commands::handlers::FAREWELL)?;
            info!("Input closed");
            return Ok(());
        };

        let Some(reply) = assistant.handle_line(&line) else {
            continue;
        };

        for text in reply.lines() {
            writeln!(output, "{}", text)?;
        }

        if let Reply::Exit(_) = reply {
            info!("Exit requested");
            return Ok(());
        }
    }
}
