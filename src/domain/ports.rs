use async_trait::async_trait;

use crate::error::Result;

pub type ConsoleBox = Box<dyn Console>;

/// Line-oriented console seam between the session driver and the user.
#[async_trait]
pub trait Console: Send {
    /// Writes `text` and reads one line of input; `None` once input is closed.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>>;

    /// Writes one line of output.
    async fn print(&mut self, line: &str) -> Result<()>;
}
