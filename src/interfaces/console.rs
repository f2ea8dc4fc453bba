use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::RwLock;

use crate::domain::ports::Console;
use crate::error::Result;

/// Console adapter over the process terminal.
///
/// Prompts are written without a trailing newline and flushed so the cursor
/// stays on the prompt line while the user types.
pub struct Terminal {
    input: BufReader<Stdin>,
    output: Stdout,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()),
            output: tokio::io::stdout(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for Terminal {
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn print(&mut self, line: &str) -> Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// An in-memory console fed from a fixed script of input lines.
///
/// Cloning shares the underlying state, so a test can hand one handle to the
/// driver and keep another to inspect everything that was printed. When the
/// script runs out, `prompt` reports closed input.
#[derive(Default, Clone)]
pub struct ScriptedConsole {
    inputs: Arc<RwLock<VecDeque<String>>>,
    output: Arc<RwLock<Vec<String>>>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: Arc::new(RwLock::new(lines.into_iter().map(Into::into).collect())),
            output: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Everything written so far, prompts included.
    pub async fn printed(&self) -> Vec<String> {
        self.output.read().await.clone()
    }

    /// True if any written line contains `needle`.
    pub async fn printed_contains(&self, needle: &str) -> bool {
        self.output
            .read()
            .await
            .iter()
            .any(|line| line.contains(needle))
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.output.write().await.push(text.to_string());
        Ok(self.inputs.write().await.pop_front())
    }

    async fn print(&mut self, line: &str) -> Result<()> {
        self.output.write().await.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_console_replays_inputs_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.prompt("> ").await.unwrap(), Some("first".into()));
        assert_eq!(console.prompt("> ").await.unwrap(), Some("second".into()));
        assert_eq!(console.prompt("> ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scripted_console_shares_output_across_clones() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        let mut handle = console.clone();
        handle.print("hello").await.unwrap();
        assert!(console.printed_contains("hello").await);
        assert_eq!(console.printed().await, vec!["hello".to_string()]);
    }
}
