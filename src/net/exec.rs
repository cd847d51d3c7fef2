use anyhow::{Context, Result};
use std::process::Command;
use tracing::debug;

const NETWORKSETUP: &str = "networksetup";

/// Boundary between the reconciliation logic and the OS.
///
/// Queries always execute, dry-run or not, since they mutate nothing.
/// Mutations either run networksetup or, in dry-run mode, print the exact
/// shell-quoted command line and touch nothing.
pub struct Runner {
    dry_run: bool,
}

impl Runner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Run a read-only networksetup query, returning its stdout.
    ///
    /// A spawn failure or non-zero exit reads as "value absent" and returns
    /// None; some fields are legitimately missing for inactive services.
    pub fn query(&self, args: &[&str]) -> Option<String> {
        let output = match Command::new(NETWORKSETUP).args(args).output() {
            Ok(output) => output,
            Err(err) => {
                debug!("networksetup {} failed to spawn: {}", args[0], err);
                return None;
            }
        };
        if !output.status.success() {
            debug!("networksetup {} exited with {}", args[0], output.status);
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a mutating networksetup command, or echo it in dry-run mode.
    pub fn mutate(&self, args: &[&str]) -> Result<()> {
        if self.dry_run {
            println!("{}", format_command(args));
            return Ok(());
        }

        let status = Command::new(NETWORKSETUP)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run networksetup {}", args[0]))?;

        if !status.success() {
            anyhow::bail!("networksetup {} failed with {}", args[0], status);
        }
        Ok(())
    }
}

/// Shell-quoted rendition of a networksetup invocation, for dry-run echoes.
fn format_command(args: &[&str]) -> String {
    shell_words::join(std::iter::once(NETWORKSETUP).chain(args.iter().copied()))
}
