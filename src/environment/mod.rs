//! Local runtime facts.
//!
//! Everything the snapshot reports without touching the network: platform,
//! agent string, locale, timezone, terminal geometry, host identity and
//! hardware hints. Facts are read through the [`Environment`] trait so the
//! production source and test fixtures are interchangeable.

mod browser;
mod system;

pub use browser::detect_browser;
pub use system::SystemEnvironment;

use serde::Serialize;

use crate::config::DEVICE_MEMORY_UNAVAILABLE;

/// Pixel or cell dimensions, depending on what the environment can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

/// Read-only source of runtime facts.
///
/// Implementations answer from whatever they can actually see; returning
/// `None` anywhere is fine. Normalization of absent answers happens in
/// [`collect_local_facts`], not here, so fixtures stay trivial.
pub trait Environment: Send + Sync {
    /// Operating system / architecture identifier.
    fn platform(&self) -> Option<String>;
    /// The agent string this client presents.
    fn user_agent(&self) -> String;
    /// Preferred language.
    fn language(&self) -> Option<String>;
    /// Ordered language preference list.
    fn languages(&self) -> Vec<String>;
    /// IANA timezone name, resolved locally.
    fn timezone(&self) -> Option<String>;
    /// Display geometry in pixels, when the environment reports one.
    fn screen_resolution(&self) -> Option<Resolution>;
    /// Viewport geometry (terminal cell grid).
    fn window_resolution(&self) -> Option<Resolution>;
    /// Name of the host we are running on.
    fn host(&self) -> Option<String>;
    /// Referring URL, when one was handed to us.
    fn referer(&self) -> Option<String>;
    /// Automation marker; `None` when indeterminate.
    fn webdriver(&self) -> Option<bool>;
    /// Logical core count.
    fn hardware_concurrency(&self) -> Option<u32>;
}

/// Facts derived purely from the local runtime.
#[derive(Debug, Clone, Serialize)]
pub struct LocalFacts {
    /// Operating system / architecture identifier.
    pub platform: Option<String>,
    /// The agent string this client presents.
    pub user_agent: String,
    /// Browser name derived from the agent string.
    pub browser: String,
    /// Preferred language.
    pub language: Option<String>,
    /// Comma-joined ordered language preference list.
    pub accept_languages: Option<String>,
    /// IANA timezone name, resolved locally.
    pub timezone: Option<String>,
    /// Display geometry in pixels.
    pub screen_resolution: Option<Resolution>,
    /// Viewport geometry (terminal cell grid).
    pub window_resolution: Option<Resolution>,
    /// Name of the host we are running on.
    pub host: Option<String>,
    /// Referring URL.
    pub referer: Option<String>,
    /// Automation marker; absent answers normalize to `false`.
    pub webdriver: bool,
    /// Logical core count; absent answers normalize to `0`.
    pub hardware_concurrency: u32,
    /// Always the unavailable sentinel; see `DEVICE_MEMORY_UNAVAILABLE`.
    pub device_memory: &'static str,
}

/// Gathers every local fact in one synchronous pass.
///
/// Normalization is deliberately minimal: `webdriver` and
/// `hardware_concurrency` get defaults when the environment cannot answer,
/// `device_memory` is always the unavailable sentinel, and everything else
/// passes through verbatim.
pub fn collect_local_facts(env: &dyn Environment) -> LocalFacts {
    let user_agent = env.user_agent();
    let browser = detect_browser(&user_agent).to_string();
    let languages = env.languages();

    LocalFacts {
        platform: env.platform(),
        browser,
        language: env.language(),
        accept_languages: if languages.is_empty() {
            None
        } else {
            Some(languages.join(","))
        },
        timezone: env.timezone(),
        screen_resolution: env.screen_resolution(),
        window_resolution: env.window_resolution(),
        host: env.host(),
        referer: env.referer(),
        webdriver: env.webdriver().unwrap_or(false),
        hardware_concurrency: env.hardware_concurrency().unwrap_or(0),
        device_memory: DEVICE_MEMORY_UNAVAILABLE,
        user_agent,
    }
}
