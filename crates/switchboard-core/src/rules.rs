//! Troubleshooting rule set — keyword-triggered response scripts
//!
//! Rules are evaluated in a fixed priority order against the lowercased
//! issue text; the first rule with a matching keyword wins and no further
//! rules are considered.

/// A keyword-triggered troubleshooting script. The response template may
/// reference `{product}`, interpolated at render time.
#[derive(Debug, Clone)]
pub struct TroubleshootRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl TroubleshootRule {
    /// Case-insensitive substring match against the issue text
    pub fn matches(&self, issue: &str) -> bool {
        let issue = issue.to_lowercase();
        self.keywords.iter().any(|keyword| issue.contains(keyword))
    }

    pub fn render(&self, product: &str) -> String {
        self.response.replace("{product}", product)
    }
}

/// The rule set, in priority order
pub const RULES: &[TroubleshootRule] = &[
    TroubleshootRule {
        name: "power",
        keywords: &["won't turn on", "power", "start"],
        response: "For {product} power issues, try: \
                   1) Check the power connection, \
                   2) Try a different outlet, \
                   3) Hold the power button for 10 seconds. \
                   Did any of these help?",
    },
    TroubleshootRule {
        name: "connectivity",
        keywords: &["connect", "wifi", "network", "internet"],
        response: "For connectivity issues: \
                   1) Restart your router, \
                   2) Forget and reconnect to the network, \
                   3) Check for firmware updates. \
                   Would you like more detailed steps?",
    },
    TroubleshootRule {
        name: "performance",
        keywords: &["slow", "performance", "lag"],
        response: "For performance issues: \
                   1) Close unused applications, \
                   2) Clear cache and temporary files, \
                   3) Restart the device. \
                   Should I create a ticket for further investigation?",
    },
];

/// First matching rule in priority order, if any
pub fn first_match(issue: &str) -> Option<&'static TroubleshootRule> {
    RULES.iter().find(|rule| rule.matches(issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_rule_matches_first() {
        let rule = first_match("it won't turn on").unwrap();
        assert_eq!(rule.name, "power");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rule = first_match("NO POWER at all").unwrap();
        assert_eq!(rule.name, "power");
    }

    #[test]
    fn test_connectivity_rule() {
        let rule = first_match("my wifi keeps dropping").unwrap();
        assert_eq!(rule.name, "connectivity");
    }

    #[test]
    fn test_performance_rule() {
        let rule = first_match("everything is slow").unwrap();
        assert_eq!(rule.name, "performance");
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "start" (power) and "slow" (performance) both present; power is
        // earlier in the rule set.
        let rule = first_match("slow to start").unwrap();
        assert_eq!(rule.name, "power");
    }

    #[test]
    fn test_no_match() {
        assert!(first_match("random issue").is_none());
    }

    #[test]
    fn test_render_interpolates_product() {
        let rule = first_match("power problem").unwrap();
        let rendered = rule.render("Widget Pro");
        assert!(rendered.contains("Widget Pro power issues"));
        assert!(!rendered.contains("{product}"));
    }
}
