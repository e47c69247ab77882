use serde::{Deserialize, Serialize};

/// Placeholder stored in `demoUrl` when a project has no live demo.
pub const DEMO_SENTINEL: &str = "#";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub demo_url: String,
    pub repo_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub stack: Vec<String>,
}

impl Project {
    pub fn new(
        title: &str,
        slug: &str,
        description: &str,
        demo_url: &str,
        repo_url: &str,
        kind: &str,
        stack: &[&str],
    ) -> Self {
        Project {
            title: title.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            demo_url: demo_url.to_string(),
            repo_url: repo_url.to_string(),
            kind: kind.to_string(),
            stack: stack.iter().map(|item| item.to_string()).collect(),
        }
    }

    pub fn has_demo(&self) -> bool {
        self.demo_url != DEMO_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
        Project::new(
            "F1 Analysis",
            "f1-analysis",
            "Race predictability.",
            "#",
            "https://github.com/mrtwolf7/projects/tree/main/f1_analysis",
            "dash",
            &["Dash", "Pandas"],
        )
    }

    #[test]
    fn serializes_with_frontend_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["demoUrl"], "#");
        assert_eq!(
            value["repoUrl"],
            "https://github.com/mrtwolf7/projects/tree/main/f1_analysis"
        );
        assert_eq!(value["type"], "dash");
        assert_eq!(value["stack"], serde_json::json!(["Dash", "Pandas"]));
        assert!(value.get("kind").is_none());
        assert!(value.get("demo_url").is_none());
    }

    #[test]
    fn deserializes_frontend_shape() {
        let json = r#"{
            "title": "Tennis predictability",
            "slug": "tennis-predictability",
            "description": "Ah, tennis nowadays is so predictable.",
            "demoUrl": "https://tennis-predictability.vercel.app/",
            "repoUrl": "https://github.com/mrtwolf7/projects/tree/main/tennis",
            "type": "svelte",
            "stack": ["Svelte", "D3", "Pandas"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.kind, "svelte");
        assert_eq!(project.stack, vec!["Svelte", "D3", "Pandas"]);
        assert!(project.has_demo());
    }

    #[test]
    fn sentinel_means_no_demo() {
        assert!(!sample().has_demo());
    }
}
