use colored::Colorize;
use folio::{ContentSource, PageVariant, SiteContent};

pub fn execute(content: &SiteContent) {
    println!("{}", "Routes:".cyan().bold());
    for (path, variant, anchors) in route_table(content) {
        println!("  {} {} ({})", "→".green(), path, variant);
        if !anchors.is_empty() {
            println!("      #{}", anchors.join(" #").dimmed());
        }
    }
    println!("  {} anything else ({})", "→".yellow(), PageVariant::NotFound);
}

fn route_table(content: &SiteContent) -> Vec<(&'static str, PageVariant, Vec<&str>)> {
    PageVariant::ALL
        .iter()
        .filter_map(|&variant| {
            let path = variant.path()?;
            let anchors = content
                .sections(variant)
                .map(|sections| sections.iter().map(|s| s.anchor.as_str()).collect())
                .unwrap_or_default();
            Some((path, variant, anchors))
        })
        .collect()
}
