use anyhow::Result;
use colored::Colorize;
use folio::{validate_content, validate_site, Config, ContentIssue, SiteContent};

pub fn execute(config: &Config, content: &SiteContent) -> Result<()> {
    println!("{}", "Checking site...".green().bold());
    println!();

    let issues = collect_issues(config, content);
    if issues.is_empty() {
        println!("  {} No issues found", "✓".green());
        return Ok(());
    }

    for issue in &issues {
        println!("  {} {}", "✗".red(), issue);
    }
    println!();
    anyhow::bail!("{} issue(s) found", issues.len())
}

/// Site settings first, then page content
fn collect_issues(config: &Config, content: &SiteContent) -> Vec<ContentIssue> {
    validate_site(&config.site)
        .into_iter()
        .chain(validate_content(content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass() {
        assert!(collect_issues(&Config::default(), &SiteContent::builtin()).is_empty());
        assert!(execute(&Config::default(), &SiteContent::builtin()).is_ok());
    }

    #[test]
    fn test_issues_fail_the_check() {
        let mut config = Config::default();
        config.site.email = "nowhere".to_string();

        let mut content = SiteContent::builtin();
        content.project_a.sections[1].anchor = "background".to_string();

        let issues = collect_issues(&config, &content);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], ContentIssue::InvalidEmail(_)));
        assert!(matches!(issues[1], ContentIssue::DuplicateAnchor { .. }));

        let err = execute(&config, &content).unwrap_err();
        assert_eq!(err.to_string(), "2 issue(s) found");
    }
}
