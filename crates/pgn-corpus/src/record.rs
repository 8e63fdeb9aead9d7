//! Record parsing — lightweight regex-based header and movetext extraction.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// Metadata carried by every corpus record. All fields are required;
/// downstream consumers assume presence, so absence is an error rather
/// than a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub white_elo: String,
    pub black_elo: String,
    pub opening: String,
    pub time_control: String,
}

/// Split a raw record into its header block and movetext block.
pub fn split_record(raw: &str) -> (&str, &str) {
    match raw.split_once("\n\n") {
        Some((headers, movetext)) => (headers, movetext),
        None => (raw, ""),
    }
}

/// Parse the header block of a record into metadata.
pub fn parse_metadata(headers: &str) -> Result<GameMetadata, CorpusError> {
    let header_re = Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).unwrap();

    let mut white_elo = None;
    let mut black_elo = None;
    let mut opening = None;
    let mut time_control = None;

    for cap in header_re.captures_iter(headers) {
        let key = &cap[1];
        let value = cap[2].to_string();
        match key {
            "WhiteElo" => white_elo = Some(value),
            "BlackElo" => black_elo = Some(value),
            "Opening" => opening = Some(value),
            "TimeControl" => time_control = Some(value),
            _ => {}
        }
    }

    Ok(GameMetadata {
        white_elo: white_elo.ok_or(CorpusError::MissingHeader("WhiteElo"))?,
        black_elo: black_elo.ok_or(CorpusError::MissingHeader("BlackElo"))?,
        opening: opening.ok_or(CorpusError::MissingHeader("Opening"))?,
        time_control: time_control.ok_or(CorpusError::MissingHeader("TimeControl"))?,
    })
}

/// Extract SAN move tokens from movetext, in game order.
///
/// Comments are removed first, then variations innermost-first until none
/// remain; move numbers, results, NAGs and annotation glyphs never match
/// the move pattern, so what remains is the mainline.
pub fn movetext_tokens(movetext: &str) -> Vec<String> {
    let comment_re = Regex::new(r"\{[^}]*\}").unwrap();
    let no_comments = comment_re.replace_all(movetext, "");

    // Matches only parenthesis-free groups, so each pass peels one nesting
    // level and the loop shrinks the text until no variation is left.
    let variation_re = Regex::new(r"\([^()]*\)").unwrap();
    let mut stripped = no_comments.into_owned();
    while variation_re.is_match(&stripped) {
        stripped = variation_re.replace_all(&stripped, "").into_owned();
    }

    let move_re =
        Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|O-O-O|O-O").unwrap();

    move_re
        .find_iter(&stripped)
        .map(|m| m.as_str().to_string())
        .collect()
}
