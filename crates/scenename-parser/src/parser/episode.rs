//! Season/episode marker detection.
//!
//! Recognises the `SxxEyy` (single episode) and `Sxx` (whole season)
//! notations, one or two digits each.

use std::collections::VecDeque;

use regex::Regex;

use crate::model::ShowInfo;

/// Compiled season/episode matchers, built once per [`crate::Parser`].
#[derive(Debug, Clone)]
pub(crate) struct EpisodeMatcher {
    season: Regex,
    episode: Regex,
}

impl EpisodeMatcher {
    pub(crate) fn new() -> Self {
        Self {
            season: Regex::new(r"^[Ss]([0-9]{1,2})").expect("season pattern is valid"),
            episode: Regex::new(r"[Ee]([0-9]{1,2})$").expect("episode pattern is valid"),
        }
    }

    /// Interpret a single token as a show marker.
    pub(crate) fn match_token(&self, token: &str) -> Option<ShowInfo> {
        let season = self.season.captures(token)?[1].parse::<u16>().ok()?;

        match self.episode.captures(token) {
            Some(caps) => {
                let episode = caps[1].parse::<u16>().ok()?;
                Some(ShowInfo::episode(season, episode))
            }
            None => Some(ShowInfo::season_pack(season)),
        }
    }

    /// Find the first show marker in `tokens` and remove it.
    ///
    /// Scanning stops at the first marker; later markers are left alone.
    pub(crate) fn detect(&self, tokens: &mut VecDeque<String>) -> Option<ShowInfo> {
        let (index, info) = tokens
            .iter()
            .enumerate()
            .find_map(|(i, token)| self.match_token(token).map(|info| (i, info)))?;

        let marker = tokens.remove(index)?;
        tokens.retain(|token| *token != marker);

        tracing::debug!(
            marker = %marker,
            season = info.season,
            episode = info.episode,
            complete_season = info.complete_season,
            "detected show marker"
        );
        Some(info)
    }
}

impl Default for EpisodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}
