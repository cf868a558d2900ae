//! Browser-name derivation from an agent string.

/// Ordered match rules, first match wins.
///
/// Chrome, Edge and Safari agent strings overlap as substrings (an Edge
/// agent contains "Chrome" and "Safari"; a Chrome agent contains "Safari"),
/// so the order here is load-bearing: reordering these changes answers.
const BROWSER_RULES: &[(fn(&str) -> bool, &str)] = &[
    (|ua| ua.contains("Chrome") && !ua.contains("Edg"), "Chrome"),
    (|ua| ua.contains("Firefox"), "Firefox"),
    (|ua| ua.contains("Safari") && !ua.contains("Chrome"), "Safari"),
    (|ua| ua.contains("Edg"), "Edge"),
    (|ua| ua.contains("Opera") || ua.contains("OPR"), "Opera"),
];

/// Derives a browser name from an agent string.
///
/// Evaluates the rules top to bottom and returns the first match, or
/// `"Unknown"` when no rule applies.
pub fn detect_browser(user_agent: &str) -> &'static str {
    BROWSER_RULES
        .iter()
        .find(|(matches, _)| matches(user_agent))
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}
