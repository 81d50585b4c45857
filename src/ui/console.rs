use crate::ui::style::Style;
use crate::utils::input::{prompt_line, PromptError};
use std::io::{self, BufRead, Stdout, Write};

/// Where prompts are read from and messages go, plus the style they use.
pub struct Console<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio(style: Style) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), style)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn prompt_line(&mut self, label: &str) -> Result<String, PromptError> {
        prompt_line(&mut self.input, &mut self.output, &self.style, label)
    }

    /// Print one styled line.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", self.style.render(message))?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
