//! Output formatting for CLI commands.
//!
//! This module handles formatting output as either JSON or human-readable text.

use leave_extract::{Entities, ExtractionResult, MessageResponse};

/// Print extracted dates.
pub fn print_dates(result: &ExtractionResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    match (result.begin_date(), result.end_date(), result.stage()) {
        (Some(begin), Some(end), Some(stage)) => {
            println!("Begin: {}", begin);
            println!("End:   {}", end);
            println!("Stage: {:?}", stage);
        }
        _ => println!("No dates found."),
    }
    Ok(())
}

/// Print a processed message.
pub fn print_message(response: &MessageResponse, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    println!("Intent: {}", response.intent);
    if let Entities::Leave(leave) = &response.entities {
        println!("Leave type: {}", leave.leave_type);
        println!("Begin date: {}", leave.begin_date.as_deref().unwrap_or("-"));
        println!("End date:   {}", leave.end_date.as_deref().unwrap_or("-"));
        println!("Purpose:    {}", leave.purpose.as_deref().unwrap_or("-"));
        println!("Day type:   {}", leave.day_type);
    }
    if let Some(text) = &response.response {
        println!("{}", text);
    }
    Ok(())
}
