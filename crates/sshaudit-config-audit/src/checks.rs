//! Built-in sshd directive rules

/// Accepted values for one sshd directive
///
/// Values are stored lowercase; comparison lowercases the configured value.
#[derive(Debug, Clone, Copy)]
pub struct DirectiveRule {
    /// Directive name, case-sensitive as written in sshd_config
    pub directive: &'static str,
    /// Values considered secure
    pub good: &'static [&'static str],
    /// Values considered risky
    pub warn: &'static [&'static str],
}

impl DirectiveRule {
    pub fn is_good(&self, normalized: &str) -> bool {
        self.good.contains(&normalized)
    }

    pub fn is_warn(&self, normalized: &str) -> bool {
        self.warn.contains(&normalized)
    }
}

/// Audited directives, in report order
pub static RULES: &[DirectiveRule] = &[
    DirectiveRule {
        directive: "PermitRootLogin",
        good: &["no", "prohibit-password"],
        warn: &["yes"],
    },
    DirectiveRule {
        directive: "PasswordAuthentication",
        good: &["no"],
        warn: &["yes"],
    },
    DirectiveRule {
        directive: "PermitEmptyPasswords",
        good: &["no"],
        warn: &["yes"],
    },
    DirectiveRule {
        directive: "ChallengeResponseAuthentication",
        good: &["no"],
        warn: &["yes"],
    },
    DirectiveRule {
        directive: "PubkeyAuthentication",
        good: &["yes"],
        warn: &["no"],
    },
    DirectiveRule {
        directive: "X11Forwarding",
        good: &["no"],
        warn: &["yes"],
    },
    // SSH1 is broken; anything that still allows it is a warning
    DirectiveRule {
        directive: "Protocol",
        good: &["2"],
        warn: &["1", "1,2"],
    },
];

/// Look up the rule for a directive name
pub fn rule_for(directive: &str) -> Option<&'static DirectiveRule> {
    RULES.iter().find(|r| r.directive == directive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.directive).collect();
        assert_eq!(
            names,
            vec![
                "PermitRootLogin",
                "PasswordAuthentication",
                "PermitEmptyPasswords",
                "ChallengeResponseAuthentication",
                "PubkeyAuthentication",
                "X11Forwarding",
                "Protocol",
            ]
        );
    }

    #[test]
    fn test_values_are_lowercase_and_disjoint() {
        for rule in RULES {
            for v in rule.good.iter().chain(rule.warn) {
                assert_eq!(*v, v.to_lowercase(), "{} has non-lowercase value", rule.directive);
            }
            let good: HashSet<_> = rule.good.iter().collect();
            assert!(rule.warn.iter().all(|v| !good.contains(v)));
        }
    }

    #[test]
    fn test_rule_lookup() {
        let rule = rule_for("Protocol").unwrap();
        assert!(rule.is_good("2"));
        assert!(rule.is_warn("1,2"));
        assert!(!rule.is_good("3") && !rule.is_warn("3"));
        assert!(rule_for("Port").is_none());
    }
}
