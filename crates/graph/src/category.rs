use serde::{Deserialize, Serialize};

/// Coarse architectural role of a source file, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Service,
    Utility,
    Config,
    Core,
    Component,
}

impl NodeCategory {
    /// Classify a repository-relative path by filename substring heuristics.
    ///
    /// Case-insensitive, first match wins, total over any string.
    pub fn classify(path: &str) -> Self {
        let lower = path.to_lowercase();
        if lower.contains("service") {
            NodeCategory::Service
        } else if lower.contains("util") || lower.contains("helper") {
            NodeCategory::Utility
        } else if lower.contains("config") {
            NodeCategory::Config
        } else if lower.contains("app") || lower.contains("main") || lower.contains("controller") {
            NodeCategory::Core
        } else {
            NodeCategory::Component
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Service => "service",
            NodeCategory::Utility => "utility",
            NodeCategory::Config => "config",
            NodeCategory::Core => "core",
            NodeCategory::Component => "component",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NodeCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_by_substring() {
        assert_eq!(
            NodeCategory::classify("src/AuthService.py"),
            NodeCategory::Service
        );
        assert_eq!(
            NodeCategory::classify("src/Utils.py"),
            NodeCategory::Utility
        );
        assert_eq!(
            NodeCategory::classify("lib/date_helper.ts"),
            NodeCategory::Utility
        );
        assert_eq!(
            NodeCategory::classify("config/settings.ts"),
            NodeCategory::Config
        );
        assert_eq!(NodeCategory::classify("src/main.rs"), NodeCategory::Core);
        assert_eq!(
            NodeCategory::classify("web/UserController.java"),
            NodeCategory::Core
        );
        assert_eq!(
            NodeCategory::classify("src/Button.tsx"),
            NodeCategory::Component
        );
    }

    #[test]
    fn first_match_wins() {
        // "service" outranks "util" and "main"
        assert_eq!(
            NodeCategory::classify("main/util/PaymentService.go"),
            NodeCategory::Service
        );
        // "util" outranks "config"
        assert_eq!(
            NodeCategory::classify("config/util.py"),
            NodeCategory::Utility
        );
    }

    #[test]
    fn ignores_case() {
        assert_eq!(
            NodeCategory::classify("SRC/AUTHSERVICE.PY"),
            NodeCategory::Service
        );
        assert_eq!(NodeCategory::classify("Main.kt"), NodeCategory::Core);
    }

    #[test]
    fn matches_anywhere_in_path() {
        // directory names participate, not just the basename
        assert_eq!(
            NodeCategory::classify("services/index.ts"),
            NodeCategory::Service
        );
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&NodeCategory::Utility).unwrap();
        assert_eq!(json, "\"utility\"");
    }
}
