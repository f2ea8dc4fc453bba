use rust_decimal::Decimal;

use crate::domain::account::{Account, Amount, Pin};
use crate::domain::ports::ConsoleBox;
use crate::error::{Result, TellerError};

/// The fixed operation menu, re-shown before every selection.
const MENU: &str = "\
How would you like to proceed:
  1. Create PIN
  2. Deposit
  3. Withdraw
  4. Check balance
  5. Change PIN
  6. View transaction history
  7. Exit
> ";

enum Flow {
    Continue,
    Exit,
}

enum Selection {
    CreatePin,
    Deposit,
    Withdraw,
    CheckBalance,
    ChangePin,
    ViewHistory,
    Exit,
}

fn parse_selection(line: &str) -> Result<Selection> {
    let choice: u32 = line
        .trim()
        .parse()
        .map_err(|_| TellerError::InvalidInput(format!("not a menu number: {}", line.trim())))?;
    match choice {
        1 => Ok(Selection::CreatePin),
        2 => Ok(Selection::Deposit),
        3 => Ok(Selection::Withdraw),
        4 => Ok(Selection::CheckBalance),
        5 => Ok(Selection::ChangePin),
        6 => Ok(Selection::ViewHistory),
        7 => Ok(Selection::Exit),
        other => Err(TellerError::InvalidSelection(other.to_string())),
    }
}

/// Runs the interactive menu loop for one account session at a time.
///
/// The driver owns the console port and keeps the loop explicit: every
/// operation, valid or not, returns to the menu until exit is selected or
/// input closes. Only I/O failures escape; domain and input errors are
/// printed and the session carries on.
pub struct SessionDriver {
    console: ConsoleBox,
}

impl SessionDriver {
    pub fn new(console: ConsoleBox) -> Self {
        Self { console }
    }

    /// Runs the menu loop until the exit selection or closed input.
    pub async fn run(&mut self, account: &mut Account) -> Result<()> {
        self.console
            .print(&format!("Account session #{} opened", account.serial()))
            .await?;
        loop {
            match self.round(account).await? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }
        Ok(())
    }

    /// One menu round: read a selection, perform it, report the outcome.
    async fn round(&mut self, account: &mut Account) -> Result<Flow> {
        let Some(line) = self.console.prompt(MENU).await? else {
            return Ok(Flow::Exit);
        };
        let outcome = match parse_selection(&line) {
            Ok(Selection::CreatePin) => self.create_pin(account).await,
            Ok(Selection::Deposit) => self.deposit(account).await,
            Ok(Selection::Withdraw) => self.withdraw(account).await,
            Ok(Selection::CheckBalance) => self.check_balance(account).await,
            Ok(Selection::ChangePin) => self.change_pin(account).await,
            Ok(Selection::ViewHistory) => self.view_history(account).await,
            Ok(Selection::Exit) => {
                self.console.print("Exit!").await?;
                return Ok(Flow::Exit);
            }
            Err(err) => Err(err),
        };
        match outcome {
            Ok(()) => {}
            Err(err @ TellerError::Io(_)) => return Err(err),
            Err(err) => self.console.print(&err.to_string()).await?,
        }
        Ok(Flow::Continue)
    }

    /// Reads one line, treating closed input mid-operation as an I/O failure.
    async fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.console.prompt(prompt).await? {
            Some(line) => Ok(line),
            None => Err(TellerError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed mid-operation",
            ))),
        }
    }

    async fn read_pin(&mut self, prompt: &str) -> Result<Pin> {
        Ok(Pin::new(self.read_line(prompt).await?.trim()))
    }

    async fn read_amount(&mut self, prompt: &str) -> Result<Amount> {
        let line = self.read_line(prompt).await?;
        let value: Decimal = line
            .trim()
            .parse()
            .map_err(|_| TellerError::InvalidInput(format!("not a number: {}", line.trim())))?;
        Amount::new(value)
    }

    async fn create_pin(&mut self, account: &mut Account) -> Result<()> {
        let pin = self.read_pin("Enter your new PIN: ").await?;
        account.create_pin(pin);
        self.console.print("PIN set successfully").await
    }

    async fn deposit(&mut self, account: &mut Account) -> Result<()> {
        let pin = self.read_pin("Enter your PIN: ").await?;
        let amount = self
            .read_amount("Enter the amount you want to deposit: ")
            .await?;
        account.deposit(&pin, amount)?;
        self.console.print("Money successfully deposited").await
    }

    async fn withdraw(&mut self, account: &mut Account) -> Result<()> {
        let pin = self.read_pin("Enter your PIN: ").await?;
        let amount = self
            .read_amount("Enter the amount you want to withdraw: ")
            .await?;
        account.withdraw(&pin, amount)?;
        self.console
            .print(&format!("{amount} successfully withdrawn"))
            .await
    }

    async fn check_balance(&mut self, account: &mut Account) -> Result<()> {
        let pin = self.read_pin("Enter your PIN: ").await?;
        let balance = account.balance(&pin)?;
        self.console
            .print(&format!("The balance in your account is: {balance}"))
            .await
    }

    async fn change_pin(&mut self, account: &mut Account) -> Result<()> {
        let current = self.read_pin("Enter your current PIN: ").await?;
        let new_pin = self.read_pin("Enter your new PIN: ").await?;
        account.change_pin(&current, new_pin)?;
        self.console.print("PIN changed successfully").await
    }

    async fn view_history(&mut self, account: &mut Account) -> Result<()> {
        let pin = self.read_pin("Enter your PIN: ").await?;
        let lines: Vec<String> = account
            .history(&pin)?
            .iter()
            .map(ToString::to_string)
            .collect();
        self.console.print("Transaction History:").await?;
        for line in &lines {
            self.console.print(line).await?;
        }
        Ok(())
    }
}
