use anyhow::Result;

use audiothek::{EpisodeRecord, Extraction};

use crate::OutputFormat;

pub fn print_extraction(extraction: &Extraction, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(extraction)?),
        OutputFormat::Urls => {
            for url in extraction.media_urls() {
                println!("{url}");
            }
        }
        OutputFormat::Text => match extraction {
            Extraction::Episode(ep) => print_episode(ep),
            Extraction::Playlist(pl) => {
                println!("Playlist: {}", pl.title.as_deref().unwrap_or("(untitled)"));
                if let Some(ref id) = pl.id {
                    println!("Id: {id}");
                }
                match pl.reported_count {
                    Some(n) => println!("Entries: {} of {n}", pl.entries.len()),
                    None => println!("Entries: {}", pl.entries.len()),
                }
                for ep in &pl.entries {
                    println!();
                    print_episode(ep);
                }
            }
        },
    }
    Ok(())
}

fn print_episode(ep: &EpisodeRecord) {
    println!("Title: {}", ep.title.as_deref().unwrap_or("(untitled)"));
    if let Some(ref id) = ep.id {
        println!("Id: {id}");
    }
    if let Some(ref series) = ep.series {
        println!("Series: {series}");
    }
    if let Some(ref channel) = ep.channel {
        println!("Channel: {channel}");
    }
    if let Some(dur) = ep.duration {
        println!("Duration: {}", format_duration(dur));
    }
    if let Some(date) = ep.upload_date {
        println!("Published: {}", date.format("%Y-%m-%d"));
    }
    println!("URL: {}", ep.url);
    if let Some(ref thumb) = ep.thumbnail {
        println!("Thumbnail: {thumb}");
    }
}

fn format_duration(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
    } else {
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}
