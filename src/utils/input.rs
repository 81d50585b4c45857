use crate::ui::style::Style;
use std::io::{self, BufRead, Write};

/// Why a prompted value could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Nothing but whitespace was entered, or input ended straight away.
    #[error("Value can't be empty")]
    Empty,

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Show `label` and read one trimmed line from `input`.
///
/// End of input after some text is accepted, so piping a value without a
/// trailing newline still works.
pub fn prompt_line<R, W>(
    input: &mut R,
    output: &mut W,
    style: &Style,
    label: &str,
) -> Result<String, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", style.render(label))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let value = line.trim();
    if value.is_empty() {
        return Err(PromptError::Empty);
    }
    Ok(value.to_string())
}
