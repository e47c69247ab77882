use std::collections::HashMap;

use tracing::warn;
use url::Url;

use crate::core::data::Catalog;
use crate::core::error::{CatalogError, Issue, Result};
use crate::types::{Project, DEMO_SENTINEL};

/// Runs every data-quality check over the catalog and reports all defects at once.
pub fn validate(catalog: &Catalog) -> Result<()> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, project) in catalog.projects().iter().enumerate() {
        check_project(index, project, &mut issues);

        if let Some(first) = seen.get(project.slug.as_str()) {
            issues.push(issue(
                index,
                project,
                "slug",
                format!("duplicates the slug of entry {}", first),
            ));
        } else {
            seen.insert(project.slug.as_str(), index);
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        for issue in &issues {
            warn!("{}", issue);
        }
        Err(CatalogError::Invalid(issues))
    }
}

fn check_project(index: usize, project: &Project, issues: &mut Vec<Issue>) {
    for (field, value) in [
        ("title", &project.title),
        ("description", &project.description),
        ("demoUrl", &project.demo_url),
        ("repoUrl", &project.repo_url),
    ] {
        if value.trim().is_empty() {
            issues.push(issue(index, project, field, "must not be empty".to_string()));
        }
    }

    if !is_kebab_case(&project.slug) {
        issues.push(issue(
            index,
            project,
            "slug",
            "must be lowercase kebab-case".to_string(),
        ));
    }

    if project.stack.is_empty() {
        issues.push(issue(index, project, "stack", "must not be empty".to_string()));
    }
    if project.stack.iter().any(|item| item.trim().is_empty()) {
        issues.push(issue(
            index,
            project,
            "stack",
            "contains an empty entry".to_string(),
        ));
    }

    if !project.demo_url.trim().is_empty() && project.demo_url != DEMO_SENTINEL {
        if let Err(reason) = check_url(&project.demo_url) {
            issues.push(issue(index, project, "demoUrl", reason));
        }
    }
    if !project.repo_url.trim().is_empty() {
        if let Err(reason) = check_url(&project.repo_url) {
            issues.push(issue(index, project, "repoUrl", reason));
        }
    }
}

/// `Url::parse` recovers from many malformed inputs, so the raw text is checked too.
fn check_url(value: &str) -> std::result::Result<(), String> {
    if value.chars().any(|c| c.is_ascii_whitespace() || c == '\\') {
        return Err("URL contains whitespace or a backslash".to_string());
    }
    let url = Url::parse(value).map_err(|error| format!("invalid URL: {}", error))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(format!("unsupported URL scheme: {}", scheme)),
    }
    if !value.starts_with(&format!("{}://", url.scheme())) {
        return Err("URL must start with scheme://".to_string());
    }
    Ok(())
}

fn is_kebab_case(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn issue(index: usize, project: &Project, field: &'static str, reason: String) -> Issue {
    Issue {
        index,
        slug: project.slug.clone(),
        field,
        reason,
    }
}
