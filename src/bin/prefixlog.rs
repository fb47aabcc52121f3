//! Usage:
//!   prefixlog [--config PATH] [--console] [--level L] [--file PATH]
//!             [--file-level L] [--replicants] [-v] <NAME> <METHOD> <MESSAGE>...

use std::process::ExitCode;

fn main() -> ExitCode {
    prefixlog::cli::main()
}
