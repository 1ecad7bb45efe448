use anyhow::{Context as _, Result, bail};
use megacmd::MegaCmd;

use crate::Context;
use crate::ui;

pub fn cd(ctx: &Context, path: &str) -> Result<()> {
    let client = ctx.client()?;
    if !client.cd(path).context("Failed to change remote folder")? {
        bail!("No such remote folder: {path}");
    }
    if !ctx.quiet && !ctx.json {
        ui::success(&format!("Remote folder is now {}", client.pwd()?));
    }
    Ok(())
}

pub fn lcd(ctx: &Context, path: &str) -> Result<()> {
    // Relative paths resolve against our working directory; expand ~ and
    // make it absolute so the error names the folder MEGAcmd was given
    let absolute = std::path::absolute(crate::paths::expand(path))
        .with_context(|| format!("Invalid local path: {path}"))?;
    let client = ctx.client()?;
    if !client
        .lcd(&absolute.to_string_lossy())
        .context("Failed to change local folder")?
    {
        bail!("Not a valid local folder: {}", absolute.display());
    }
    if !ctx.quiet && !ctx.json {
        ui::success(&format!("Local folder is now {}", client.lpwd()?));
    }
    Ok(())
}

pub fn pwd(ctx: &Context) -> Result<()> {
    let dir = ctx.client()?.pwd().context("Failed to read remote folder")?;
    print_value(ctx, &dir)
}

pub fn lpwd(ctx: &Context) -> Result<()> {
    let dir = ctx.client()?.lpwd().context("Failed to read local folder")?;
    print_value(ctx, &dir)
}

fn print_value(ctx: &Context, value: &str) -> Result<()> {
    if ctx.json {
        return ui::json(value);
    }
    println!("{value}");
    Ok(())
}
