// Shared test helpers: a canned environment fixture for snapshot tests.
//
// Integration tests must not depend on the machine they run on, so the
// production SystemEnvironment is swapped for this deterministic source.

use client_info::environment::{Environment, Resolution};

/// Deterministic environment for integration tests.
#[allow(dead_code)] // Used by other test files
pub struct FixtureEnvironment {
    pub user_agent: String,
    pub webdriver: Option<bool>,
    pub hardware_concurrency: Option<u32>,
}

#[allow(dead_code)] // Used by other test files
impl FixtureEnvironment {
    /// A Firefox-flavored fixture matching the worked end-to-end example.
    pub fn firefox() -> Self {
        FixtureEnvironment {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0"
                .to_string(),
            webdriver: None,
            hardware_concurrency: Some(8),
        }
    }
}

impl Environment for FixtureEnvironment {
    fn platform(&self) -> Option<String> {
        Some("linux x86_64".to_string())
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn language(&self) -> Option<String> {
        Some("en_US.UTF-8".to_string())
    }

    fn languages(&self) -> Vec<String> {
        vec!["en_US".to_string(), "en".to_string()]
    }

    fn timezone(&self) -> Option<String> {
        Some("America/Denver".to_string())
    }

    fn screen_resolution(&self) -> Option<Resolution> {
        Some(Resolution {
            width: 1920,
            height: 1080,
        })
    }

    fn window_resolution(&self) -> Option<Resolution> {
        Some(Resolution {
            width: 120,
            height: 40,
        })
    }

    fn host(&self) -> Option<String> {
        Some("workstation".to_string())
    }

    fn referer(&self) -> Option<String> {
        None
    }

    fn webdriver(&self) -> Option<bool> {
        self.webdriver
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.hardware_concurrency
    }
}
