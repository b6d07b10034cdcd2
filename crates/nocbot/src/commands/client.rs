//! Client command - locates a wired client by IPv4 address.

use anyhow::Result;
use clap::Args;
use console::{style, Style};
use serde::Serialize;

use super::Context;
use crate::clients;

/// Arguments for the client command.
#[derive(Args, Debug)]
pub struct ClientArgs {
    /// IPv4 address of the client to locate
    pub ip: String,
}

/// Client location for JSON output.
#[derive(Debug, Serialize)]
struct ClientOutput {
    ip: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vlan_id: Option<String>,
}

/// Run the client command.
pub async fn run(args: ClientArgs, ctx: &Context) -> Result<()> {
    let dnac = clients::dnac_client(&ctx.config)?;
    let token = dnac.auth().login().await?;
    let location = dnac.hosts().locate(&token, &args.ip).await?;

    if ctx.json_output {
        let output = match &location {
            Some(loc) => ClientOutput {
                ip: args.ip.clone(),
                found: true,
                hostname: Some(loc.hostname.clone()),
                interface: loc.interface.clone(),
                vlan_id: loc.vlan_id.clone(),
            },
            None => ClientOutput {
                ip: args.ip.clone(),
                found: false,
                hostname: None,
                interface: None,
                vlan_id: None,
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let dim = Style::new().dim();

    println!();
    println!("{}", style("Client Lookup").bold());
    println!("{}", dim.apply_to("─".repeat(40)));
    println!();

    match location {
        Some(loc) => {
            let green = Style::new().green();
            println!("  {} {}", dim.apply_to("Client:"), args.ip);
            println!("  {} {}", dim.apply_to("Switch:"), green.apply_to(&loc.hostname));
            println!(
                "  {} {}",
                dim.apply_to("Port:"),
                loc.interface.as_deref().unwrap_or("(unknown)")
            );
            println!(
                "  {} {}",
                dim.apply_to("VLAN:"),
                loc.vlan_id.as_deref().unwrap_or("(unknown)")
            );
        }
        None => {
            let red = Style::new().red();
            println!(
                "  {} {}",
                dim.apply_to("Client:"),
                red.apply_to(format!("{} not found", args.ip))
            );
        }
    }

    println!();
    Ok(())
}
