use std::io::{self, BufRead, Write};

use tracing::trace;

use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// The player-facing side of the game.
pub trait Terminal {
    /// Shows `text` and waits for a line of input, without its line ending.
    fn prompt(&mut self, text: &str) -> Result<String>;

    fn display(&mut self, lines: &[String]) -> Result<()>;

    fn say(&mut self, line: impl Into<String>) -> Result<()> {
        self.display(&[line.into()])
    }
}

/// Plain line-based terminal over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let line = line.trim_end_matches(['\r', '\n']).to_owned();
        trace!(%line);

        Ok(line)
    }

    fn display(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }

        self.output.flush()?;
        Ok(())
    }
}
