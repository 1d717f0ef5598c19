use std::io;
use std::process::Command;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchStatus {
    code: Option<i32>,
}

impl LaunchStatus {
    pub fn exited(code: i32) -> Self {
        LaunchStatus { code: Some(code) }
    }

    pub fn terminated() -> Self {
        LaunchStatus { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

pub trait ProcessLauncher {
    fn launch(&self, command: &str, args: &[String]) -> io::Result<LaunchStatus>;
}

pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    // Child stdout/stderr are inherited so the encoder's own output reaches
    // the user directly; the call blocks until the child exits.
    fn launch(&self, command: &str, args: &[String]) -> io::Result<LaunchStatus> {
        let status = Command::new(command).args(args).status()?;
        Ok(match status.code() {
            Some(code) => LaunchStatus::exited(code),
            None => LaunchStatus::terminated(),
        })
    }
}
