//! Transfer commands
//!
//! Commands:
//! - cat: Print remote files
//! - get: Download
//! - put: Upload
//! - import: Copy an exported link into the account

use anyhow::{Context as _, Result, bail};
use megacmd::{GetOptions, MegaCmd};
use std::io::{self, Write};

use crate::Context;
use crate::cli::GetArgs;
use crate::ui;

pub fn cat(ctx: &Context, paths: &[String]) -> Result<()> {
    let client = ctx.client()?;
    let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
    let content = client.cat(&paths).context("Failed to read remote file")?;

    if ctx.json {
        return ui::json(&content);
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{content}")?;
    Ok(())
}

pub fn get(ctx: &Context, args: GetArgs) -> Result<()> {
    let client = ctx.client()?;
    let options = GetOptions {
        local_path: args.local,
        password: args.password,
        merge: args.merge,
    };

    let pb = ui::spinner(&format!("Downloading {}", args.remote), ctx.quiet || ctx.json);
    let result = client.get(&args.remote, &options);
    pb.finish_and_clear();
    let finished = result.with_context(|| format!("Failed to download {}", args.remote))?;

    if ctx.json {
        return ui::json(&finished);
    }
    if finished {
        ui::success(&format!("Downloaded {}", args.remote));
    } else {
        ui::warn("MEGAcmd did not report a finished download");
    }
    Ok(())
}

pub fn put(ctx: &Context, local_paths: &[String], remote: Option<&str>) -> Result<()> {
    let client = ctx.client()?;
    let locals: Vec<&str> = local_paths.iter().map(String::as_str).collect();

    let label = match locals.as_slice() {
        [one] => (*one).to_string(),
        many => format!("{} items", many.len()),
    };
    let pb = ui::spinner(&format!("Uploading {label}"), ctx.quiet || ctx.json);
    let result = client.put(&locals, remote);
    pb.finish_and_clear();

    if !result.with_context(|| format!("Failed to upload {label}"))? {
        bail!("MEGAcmd refused to upload {label} (run with -v for details)");
    }
    if ctx.json {
        return ui::json(&true);
    }
    ui::success(&format!("Uploaded {label}"));
    Ok(())
}

pub fn import(
    ctx: &Context,
    link: &str,
    remote: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    let client = ctx.client()?;

    let pb = ui::spinner("Importing link", ctx.quiet || ctx.json);
    let result = client.import(link, remote, password);
    pb.finish_and_clear();
    let imported = result.context("Failed to import link")?;

    if ctx.json {
        return ui::json(&imported);
    }
    ui::success(&format!("Imported into {}", remote.unwrap_or("current folder")));
    Ok(())
}
