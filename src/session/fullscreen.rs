// src/session/fullscreen.rs  —  Fullscreen capability probing
//
// Hosts expose fullscreen under different names, if at all.  Probe a
// fixed ordered list and use the first provider that resolves — the
// caller falls back to a localized warning when none does.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};

pub trait FullscreenProvider {
    fn name(&self) -> &str;
    /// Whether this capability exists on the current host.
    fn available(&self) -> bool;
    /// Ask the host to put the active window into fullscreen.
    fn enter(&self) -> Result<()>;
}

/// Ordered probe over `providers`; first available wins.
pub fn detect<'a>(
    providers: &'a [Box<dyn FullscreenProvider>],
) -> Option<&'a dyn FullscreenProvider> {
    for p in providers {
        if p.available() {
            log::info!("fullscreen: using {}", p.name());
            return Some(p.as_ref());
        }
    }
    log::info!("fullscreen: no capability found on this host");
    None
}

/// A provider backed by an external window-control helper.
struct CommandFullscreen {
    name: &'static str,
    bin: &'static str,
    args: &'static [&'static str],
}

impl FullscreenProvider for CommandFullscreen {
    fn name(&self) -> &str {
        self.name
    }

    fn available(&self) -> bool {
        Command::new(self.bin)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn enter(&self) -> Result<()> {
        let status = Command::new(self.bin)
            .args(self.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("running {}", self.bin))?;
        anyhow::ensure!(status.success(), "{} exited with {status}", self.bin);
        Ok(())
    }
}

/// The host's provider list, in probe order.
pub fn host_providers() -> Vec<Box<dyn FullscreenProvider>> {
    vec![
        Box::new(CommandFullscreen {
            name: "wmctrl",
            bin: "wmctrl",
            args: &["-r", ":ACTIVE:", "-b", "add,fullscreen"],
        }),
        Box::new(CommandFullscreen {
            name: "xdotool",
            bin: "xdotool",
            args: &["key", "--clearmodifiers", "F11"],
        }),
    ]
}
