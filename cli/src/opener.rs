//! [`LinkHost`] that hands a `mailto:` URI to the operating system's URL
//! opener. There is no transient element to clean up, so `detach` only logs.

#[cfg(test)]
#[path = "opener_test.rs"]
mod opener_test;

use std::process::Command;

use inquiry::{LaunchError, LinkHost};

/// Launches links with a platform opener command.
pub struct OpenerHost {
    program: String,
    args: Vec<String>,
}

impl OpenerHost {
    /// Opener for the current platform.
    pub fn system() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Opener for a `std::env::consts::OS` name.
    ///
    /// Windows goes through the URL protocol handler directly: `cmd /C start`
    /// would split the URI at the `&` before `body=`.
    pub fn for_os(os: &str) -> Self {
        match os {
            "macos" => Self::new("open", &[]),
            "windows" => Self::new("rundll32", &["url.dll,FileProtocolHandler"]),
            _ => Self::new("xdg-open", &[]),
        }
    }

    pub fn new(program: &str, args: &[&str]) -> Self {
        Self { program: program.to_owned(), args: args.iter().map(|a| (*a).to_owned()).collect() }
    }

    fn command(&self, link: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(link);
        command
    }
}

impl LinkHost for OpenerHost {
    type Link = String;

    fn attach(&mut self, href: &str) -> Result<Self::Link, LaunchError> {
        Ok(href.to_owned())
    }

    fn activate(&mut self, link: &Self::Link) -> Result<(), LaunchError> {
        let status = self
            .command(link)
            .status()
            .map_err(|e| LaunchError::new(format!("{}: {e}", self.program)))?;
        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::new(format!("{} exited with {status}", self.program)))
        }
    }

    fn detach(&mut self, link: Self::Link) {
        tracing::debug!(bytes = link.len(), "mailto handed to opener");
    }
}
