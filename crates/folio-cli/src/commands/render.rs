use anyhow::Result;
use folio::render;
use folio::{Config, PageAssembler, Route, SiteContent};
use tracing::info;

pub fn execute(config: &Config, content: &SiteContent, route: &str, json: bool) -> Result<()> {
    println!("{}", render_route(config, content, route, json)?);
    Ok(())
}

/// HTML document, or the assembled page as pretty JSON
pub fn render_route(config: &Config, content: &SiteContent, route: &str, json: bool) -> Result<String> {
    let route = Route::parse(route);
    let page = PageAssembler::new(content).assemble(&route);
    info!(route = %route, variant = %page.variant, "rendering");

    if json {
        Ok(serde_json::to_string_pretty(&page)?)
    } else {
        Ok(render::document(&config.site, &page).into_string())
    }
}
