use std::fmt;
use std::io;

/// A termination signal the process reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl-C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminated",
        })
    }
}

/// Signal handlers, installed up front so a signal that arrives before
/// [`recv`](Self::recv) is awaited is still delivered.
#[cfg(unix)]
pub struct ShutdownListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ShutdownListener {
    /// Install SIGINT and SIGTERM handlers.
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Wait until SIGINT or SIGTERM arrives.
    pub async fn recv(&mut self) -> io::Result<ShutdownSignal> {
        tokio::select! {
            _ = self.interrupt.recv() => Ok(ShutdownSignal::Interrupt),
            _ = self.terminate.recv() => Ok(ShutdownSignal::Terminate),
        }
    }
}

/// Ctrl-C listener.
#[cfg(not(unix))]
pub struct ShutdownListener;

#[cfg(not(unix))]
impl ShutdownListener {
    /// Nothing to install ahead of time.
    pub fn install() -> io::Result<Self> {
        Ok(Self)
    }

    /// Wait until Ctrl-C arrives.
    pub async fn recv(&mut self) -> io::Result<ShutdownSignal> {
        tokio::signal::ctrl_c().await?;
        Ok(ShutdownSignal::Interrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_conventional_signal_strings() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "terminated");
    }
}
