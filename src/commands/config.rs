use anyhow::Result;
use serde_json::json;

use super::Output;
use crate::ui::context::UiContext;

pub fn cmd_show(ctx: &UiContext, out: &Output) -> Result<()> {
    let path = ctx.source.path().map(|p| p.display().to_string());

    if out.is_json() {
        out.payload(
            "config",
            json!({
                "source": ctx.source.label(),
                "path": path,
                "config": serde_json::to_value(&ctx.config)?,
            }),
        )?;
    } else {
        match &path {
            Some(path) => println!("# source: {} ({})", ctx.source.label(), path),
            None => println!("# source: {}", ctx.source.label()),
        }
        print!("{}", toml::to_string_pretty(&ctx.config)?);
    }
    out.complete(None)
}
