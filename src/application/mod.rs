//! Application layer orchestrating one interactive account session.
//!
//! This module defines the `SessionDriver` which renders the operation menu,
//! dispatches selections onto the account, and reports every outcome through
//! the console port. The menu is an explicit loop with a single terminal
//! transition on the exit selection.

pub mod driver;
