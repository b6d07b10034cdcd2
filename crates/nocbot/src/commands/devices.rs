//! Devices command - shows the DNA Center device inventory.

use anyhow::Result;
use clap::Args;
use console::{style, Style};
use nocbot_dnac::Device;

use super::Context;
use crate::clients;

/// Arguments for the devices command.
#[derive(Args, Debug)]
pub struct DevicesArgs {}

/// Run the devices command.
pub async fn run(_args: DevicesArgs, ctx: &Context) -> Result<()> {
    let dnac = clients::dnac_client(&ctx.config)?;
    let token = dnac.auth().login().await?;
    let devices: Vec<Device> = dnac.devices().list(&token).await?;

    if ctx.json_output {
        println!("{}", serde_json::to_string_pretty(&devices)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    let green = Style::new().green();
    let red = Style::new().red();

    println!();
    println!("{}", style("DNA Center Device Inventory").bold());
    println!("{}", dim.apply_to("─".repeat(72)));
    println!();
    println!(
        "  {:<24} {:<16} {:<18} {}",
        dim.apply_to("Hostname"),
        dim.apply_to("Management IP"),
        dim.apply_to("Platform"),
        dim.apply_to("Reachability")
    );

    for device in &devices {
        let hostname = device.hostname.as_deref().unwrap_or("(unnamed)");
        let ip = device.management_ip_address.as_deref().unwrap_or("-");
        let platform = device.platform_id.as_deref().unwrap_or("-");
        let reachability = device.reachability_status.as_deref().unwrap_or("Unknown");
        let styled = if reachability == "Reachable" {
            green.apply_to(reachability)
        } else {
            red.apply_to(reachability)
        };
        println!("  {:<24} {:<16} {:<18} {}", hostname, ip, platform, styled);
        if ctx.verbose {
            println!(
                "  {:<24} {} {}  {} {}",
                "",
                dim.apply_to("serial:"),
                device.serial_number.as_deref().unwrap_or("-"),
                dim.apply_to("software:"),
                device.software_version.as_deref().unwrap_or("-")
            );
        }
    }

    println!();
    println!("  {} {} devices", dim.apply_to("Total:"), devices.len());
    println!();

    Ok(())
}
