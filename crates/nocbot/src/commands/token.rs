//! Token command - fetches a DNA Center session token.

use anyhow::Result;
use clap::Args;
use console::{style, Style};
use serde::Serialize;

use super::Context;
use crate::clients;

/// Arguments for the token command.
#[derive(Args, Debug)]
pub struct TokenArgs {}

/// Token response for JSON output.
#[derive(Debug, Serialize)]
struct TokenOutput {
    token: String,
}

/// Run the token command.
pub async fn run(_args: TokenArgs, ctx: &Context) -> Result<()> {
    let dnac = clients::dnac_client(&ctx.config)?;
    let token = dnac.auth().login().await?;

    if ctx.json_output {
        let output = TokenOutput {
            token: token.as_str().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let dim = Style::new().dim();

        println!();
        println!("{}", style("DNA Center Session Token").bold());
        println!("{}", dim.apply_to("─".repeat(40)));
        println!();
        println!("{}", token.as_str());
        println!();
    }

    Ok(())
}
