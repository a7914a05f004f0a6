//! Record types and the [`Content`] bundle.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use termfolio_types::error::{Result, TermfolioError};

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Short unique name used by `open`.
    pub id: String,
    pub title: String,
    pub description: String,
    pub repo: String,
    pub demo: String,
}

/// A work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Community involvement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Involvement {
    pub org: String,
    pub role: String,
    pub details: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// An education entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Free-form about text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct About {
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    /// Source repository of the portfolio itself.
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

/// Everything the terminal can display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub involvement: Vec<Involvement>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub contact: Contact,
}

impl Content {
    /// Parse content from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let content: Self = toml::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse content from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(text)?;
        content.validate()?;
        Ok(content)
    }

    /// Load a content file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            Some("toml") => Self::from_toml_str(&text)?,
            other => {
                return Err(TermfolioError::Content(format!(
                    "unsupported content format: {}",
                    other.unwrap_or("<none>")
                )));
            },
        };
        log::info!(
            "Loaded content from {} ({} projects)",
            path.display(),
            content.projects.len()
        );
        Ok(content)
    }

    /// Project ids in declaration order.
    pub fn project_ids(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.id.as_str())
    }

    /// Case-insensitive exact lookup by project id.
    ///
    /// Case folding is Unicode-aware, so `ÉTÉ` finds `Été`.
    pub fn find_project(&self, id: &str) -> Option<&Project> {
        let id = id.to_lowercase();
        self.projects.iter().find(|p| p.id.to_lowercase() == id)
    }

    /// Project ids must be non-empty, whitespace-free and unique ignoring case.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.is_empty() || project.id.chars().any(char::is_whitespace) {
                return Err(TermfolioError::Content(format!(
                    "invalid project id: {:?}",
                    project.id
                )));
            }
            if !seen.insert(project.id.to_lowercase()) {
                return Err(TermfolioError::Content(format!(
                    "duplicate project id: {}",
                    project.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[projects]]
id = "alpha"
title = "Alpha"
description = "First"
repo = "https://example.com/alpha"
demo = "https://example.com/alpha/demo"

[[projects]]
id = "Beta"
title = "Beta"
description = "Second"
repo = "https://example.com/beta"
demo = "[DEMO PENDING]"

[[education]]
school = "Somewhere U"
degree = "B.S."
period = "2015 - 2019"

[about]
summary = "hello"
skills = ["Rust"]
"#;

    #[test]
    fn toml_parses_records() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        assert_eq!(c.projects.len(), 2);
        assert_eq!(c.education[0].notes, None);
        assert_eq!(c.about.skills, vec!["Rust"]);
        assert!(c.experiences.is_empty());
    }

    #[test]
    fn find_project_ignores_case() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        assert_eq!(c.find_project("ALPHA").unwrap().title, "Alpha");
        assert_eq!(c.find_project("beta").unwrap().title, "Beta");
        assert!(c.find_project("gamma").is_none());
    }

    #[test]
    fn find_project_requires_exact_match() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        assert!(c.find_project("alp").is_none());
        assert!(c.find_project("alpha2").is_none());
    }

    #[test]
    fn project_ids_keep_order() {
        let c = Content::from_toml_str(SAMPLE).unwrap();
        let ids: Vec<&str> = c.project_ids().collect();
        assert_eq!(ids, vec!["alpha", "Beta"]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let text = r#"
[[projects]]
id = "a"
title = "A"
description = ""
repo = ""
demo = ""
[[projects]]
id = "A"
title = "A again"
description = ""
repo = ""
demo = ""
"#;
        let err = Content::from_toml_str(text).unwrap_err();
        assert!(format!("{err}").contains("duplicate project id"));
    }

    #[test]
    fn find_project_folds_non_ascii_case() {
        let text = r#"{"projects":[{"id":"Été","title":"Summer","description":"","repo":"","demo":""}]}"#;
        let c = Content::from_json_str(text).unwrap();
        assert_eq!(c.find_project("été").unwrap().title, "Summer");
        assert_eq!(c.find_project("ÉTÉ").unwrap().title, "Summer");
        assert!(c.find_project("ete").is_none());
    }

    #[test]
    fn duplicate_ids_differing_in_non_ascii_case_rejected() {
        let text = r#"{"projects":[
            {"id":"Été","title":"","description":"","repo":"","demo":""},
            {"id":"été","title":"","description":"","repo":"","demo":""}
        ]}"#;
        let err = Content::from_json_str(text).unwrap_err();
        assert!(format!("{err}").contains("duplicate project id: été"));
    }

    #[test]
    fn id_with_space_rejected() {
        let text = r#"{"projects":[{"id":"a b","title":"","description":"","repo":"","demo":""}]}"#;
        let err = Content::from_json_str(text).unwrap_err();
        assert!(matches!(err, TermfolioError::Content(_)));
    }

    #[test]
    fn json_parses_optional_fields() {
        let text = r#"{"involvement":[{"org":"o","role":"r","details":"d","url":"https://x"}]}"#;
        let c = Content::from_json_str(text).unwrap();
        assert_eq!(c.involvement[0].url.as_deref(), Some("https://x"));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = std::env::temp_dir().join("termfolio-content-test.yaml");
        std::fs::write(&dir, "projects: []").unwrap();
        let err = Content::load(&dir).unwrap_err();
        assert!(format!("{err}").contains("unsupported content format"));
        let _ = std::fs::remove_file(&dir);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lookup_is_case_insensitive(id in "[a-z][a-z0-9_-]{0,12}") {
                let content = Content {
                    projects: vec![Project {
                        id: id.clone(),
                        title: "t".into(),
                        description: "d".into(),
                        repo: "r".into(),
                        demo: "m".into(),
                    }],
                    ..Content::default()
                };
                prop_assert!(content.find_project(&id.to_ascii_uppercase()).is_some());
            }
        }
    }
}
