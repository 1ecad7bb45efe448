//! Login state commands

use anyhow::{Context as _, Result, bail};
use megacmd::{LoginMethod, MegaCmd};

use crate::Context;
use crate::cli::LoginArgs;
use crate::ui;

pub fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    let method = match (args.session, args.email, args.password) {
        (Some(session), _, _) => LoginMethod::Session(session),
        (None, Some(email), Some(password)) => LoginMethod::Credentials {
            email,
            password,
            auth_code: args.auth_code,
        },
        _ => bail!("Provide EMAIL and PASSWORD, or --session"),
    };

    let client = ctx.client()?;
    if !client.login(&method).context("Failed to log in")? {
        bail!("Login rejected by MEGA (run with -v for details)");
    }

    if ctx.json {
        return ui::json(&true);
    }
    match client.whoami()? {
        Some(email) => ui::success(&format!("Logged in as {email}")),
        None => ui::success("Logged in"),
    }
    Ok(())
}

pub fn logout(ctx: &Context, keep_session: bool) -> Result<()> {
    let outcome = ctx
        .client()?
        .logout(keep_session)
        .context("Failed to log out")?;

    if !outcome.success {
        bail!("Logout failed");
    }
    if ctx.json {
        return ui::json(&outcome);
    }

    ui::success("Logged out");
    if let Some(session) = &outcome.session {
        ui::kv("Session", session);
        ui::dim("Resume it with: megactl login --session <SESSION>");
    }
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    let email = ctx.client()?.whoami().context("Failed to query account")?;

    if ctx.json {
        return ui::json(&email);
    }
    match email {
        Some(email) => println!("{email}"),
        None => ui::warn("Not logged in"),
    }
    Ok(())
}

pub fn session(ctx: &Context) -> Result<()> {
    let session = ctx.client()?.session().context("Failed to query session")?;

    if ctx.json {
        return ui::json(&session);
    }
    match session {
        Some(session) => println!("{session}"),
        None => ui::warn("Not logged in"),
    }
    Ok(())
}

pub fn version(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let version = client.version().context("Failed to query MEGAcmd version")?;

    if ctx.json {
        return ui::json(&serde_json::json!({
            "binary": client.binary(),
            "version": version,
        }));
    }
    println!("{version}");
    if !ctx.quiet {
        ui::dim(&client.binary().display().to_string());
    }
    Ok(())
}
