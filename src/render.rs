//! Human-readable rendering of a parsed release.

use scenename_parser::{Container, Edition, ReleaseRecord, Resolution, Source};
use std::io::{self, Write};

fn edition_label(edition: Edition) -> &'static str {
    match edition {
        Edition::None => "Standard",
        Edition::Extended => "Extended cut",
        Edition::DirectorsCut => "Directors cut",
    }
}

fn container_label(container: Container) -> &'static str {
    match container {
        Container::Unknown => "unknown",
        Container::H264 => "H.264 (AVC)",
        Container::H265 => "H.265 (HEVC)",
    }
}

fn source_label(source: Source) -> &'static str {
    match source {
        Source::Unknown => "unknown",
        Source::BluRay => "BluRay",
        Source::Web => "Web (Amazon/Netflix/etc)",
        Source::R5 => "Region5",
        Source::Telescreen => "Telescreen/CAM",
    }
}

fn resolution_label(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Unknown => "unknown",
        Resolution::_720p => "720p",
        Resolution::_1080p => "FullHD/1080p",
        Resolution::_2160p => "4K/UHD",
    }
}

/// Write the release as labelled lines.
pub fn render_text<W: Write>(out: &mut W, record: &ReleaseRecord) -> io::Result<()> {
    writeln!(out, "Name: {}", record.name)?;
    if let Some(year) = record.year {
        writeln!(out, "Release year: {}", year)?;
    }
    if let Some(show) = &record.show_info {
        if show.complete_season {
            writeln!(out, "Complete season {}", show.season)?;
        } else {
            writeln!(out, "Season {}, Episode {}", show.season, show.episode)?;
        }
    }
    writeln!(out, "Release group: {}", record.group)?;
    writeln!(out, "Release edition: {}", edition_label(record.edition))?;

    let media = &record.media_info;
    if let Some(language) = &media.language {
        writeln!(out, "Language: {}", language)?;
    }
    writeln!(out, "Container: {}", container_label(media.container))?;
    writeln!(out, "Source: {}", source_label(media.source))?;
    writeln!(out, "Resolution: {}", resolution_label(media.resolution))?;

    let features: Vec<&str> = media.features.iter().map(String::as_str).collect();
    writeln!(out, "Etc feature flags: {}", features.join(" "))
}

/// Write the release as pretty-printed JSON.
pub fn render_json<W: Write>(out: &mut W, record: &ReleaseRecord) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
