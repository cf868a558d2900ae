//! Production environment source.

use std::env;
use std::fs;
use std::thread;

use super::{Environment, Resolution};

/// Reads facts from the live process environment.
///
/// Holds the User-Agent the client sends on its own outbound requests, so
/// the reported agent and the transmitted one can never drift apart.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    user_agent: String,
}

impl SystemEnvironment {
    /// Creates a source reporting the given agent string.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

impl Environment for SystemEnvironment {
    fn platform(&self) -> Option<String> {
        Some(format!("{} {}", env::consts::OS, env::consts::ARCH))
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn language(&self) -> Option<String> {
        non_empty_var("LANG")
    }

    fn languages(&self) -> Vec<String> {
        // LANGUAGE holds a colon-separated priority list; LANG a single value
        match non_empty_var("LANGUAGE") {
            Some(list) => list
                .split(':')
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
            None => self.language().into_iter().collect(),
        }
    }

    fn timezone(&self) -> Option<String> {
        iana_time_zone::get_timezone().ok()
    }

    fn screen_resolution(&self) -> Option<Resolution> {
        // Pixel geometry of the controlling terminal; headless sessions and
        // terminals that don't report pixels answer zero
        let size = crossterm::terminal::window_size().ok()?;
        if size.width == 0 || size.height == 0 {
            return None;
        }
        Some(Resolution {
            width: u32::from(size.width),
            height: u32::from(size.height),
        })
    }

    fn window_resolution(&self) -> Option<Resolution> {
        let (columns, rows) = crossterm::terminal::size().ok()?;
        Some(Resolution {
            width: u32::from(columns),
            height: u32::from(rows),
        })
    }

    fn host(&self) -> Option<String> {
        non_empty_var("HOSTNAME").or_else(|| {
            fs::read_to_string("/etc/hostname")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
    }

    fn referer(&self) -> Option<String> {
        non_empty_var("HTTP_REFERER")
    }

    fn webdriver(&self) -> Option<bool> {
        // CI-style flags are the closest analog to an automation marker
        env::var_os("CI").map(|_| true)
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        thread::available_parallelism()
            .ok()
            .map(|n| n.get() as u32)
    }
}
