//! Post command - posts a message to a Webex room.

use anyhow::Result;
use clap::Args;
use console::{style, Style};
use serde::Serialize;

use super::Context;
use crate::clients;

/// Arguments for the post command.
#[derive(Args, Debug)]
pub struct PostArgs {
    /// Room title to post to (default: [webex] room from config)
    #[arg(short, long)]
    pub room: Option<String>,

    /// Message text
    pub text: String,
}

/// Post response for JSON output.
#[derive(Debug, Serialize)]
struct PostOutput {
    room: String,
    message_id: String,
}

/// Run the post command.
pub async fn run(args: PostArgs, ctx: &Context) -> Result<()> {
    let room = clients::resolve_room(&ctx.config, args.room)?;
    let webex = clients::webex_client(&ctx.config)?;
    let message = webex.messages().post(&room, &args.text).await?;

    if ctx.json_output {
        let output = PostOutput {
            room: room.clone(),
            message_id: message.id,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let dim = Style::new().dim();
        let green = Style::new().green();

        println!();
        println!(
            "  {} {}",
            green.apply_to("✓"),
            style(format!("posted to '{}'", room)).bold()
        );
        println!("  {} {}", dim.apply_to("Message ID:"), message.id);
        println!();
    }

    Ok(())
}
