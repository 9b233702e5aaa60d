use colored::Colorize;
use neoquery::api::{CmdMessage, MessageLevel};
use neoquery::config::NeoConfig;
use neoquery::model::{LinkedApproach, NearEarthObject};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const TIME_WIDTH: usize = 16;
const HAZARD_MARKER: &str = "⚠";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_neo(neo: &NearEarthObject) {
    let line = neo.to_string();
    if neo.hazardous {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.bold());
    }
}

pub(super) fn print_approaches(approaches: &[LinkedApproach<'_>]) {
    for linked in approaches {
        println!("{}", format_approach_row(linked));
    }
}

/// One aligned row: time, object, distance, velocity and a hazard marker.
fn format_approach_row(linked: &LinkedApproach<'_>) -> String {
    let ca = linked.approach;
    let (who, hazardous) = match linked.neo {
        Some(neo) => (neo.fullname(), neo.hazardous),
        None => (ca.designation().to_string(), false),
    };
    let who = truncate_to_width(&who, NAME_WIDTH);
    let padding = NAME_WIDTH.saturating_sub(who.width());
    let marker = if hazardous {
        HAZARD_MARKER.red().to_string()
    } else {
        " ".to_string()
    };

    format!(
        "{:<tw$}  {}{}  {:>10.6} au  {:>7.2} km/s {}",
        ca.time_str().dimmed(),
        who,
        " ".repeat(padding),
        ca.distance,
        ca.velocity,
        marker,
        tw = TIME_WIDTH
    )
}

pub(super) fn print_config(config: &NeoConfig) {
    println!("neo_file = {}", config.neo_file.display());
    println!("cad_file = {}", config.cad_file.display());
    println!("output_dir = {}", config.output_dir.display());
    println!("display_limit = {}", config.display_limit);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
