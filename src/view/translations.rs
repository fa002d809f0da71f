//! Translation filter for server-rendered pages.
//!
//! Phrase keys resolve against a fixed table; the language comes from the
//! filter's `lang` argument and falls back to English. Unknown keys render
//! as the key itself so a missing phrase never breaks a page.

use std::collections::HashMap;

use tera::{Result, Tera, Value};

/// Default language when the filter gets no `lang` argument.
const DEFAULT_LANG: &str = "en";

/// Phrase table: key, English, German, French.
static PHRASES: &[(&str, &str, &str, &str)] = &[
    ("nav.home", "Leaderboard", "Bestenliste", "Classement"),
    ("nav.statistics", "Statistics", "Statistiken", "Statistiques"),
    ("nav.shop", "Shop", "Shop", "Boutique"),
    ("nav.clans", "Clans", "Clans", "Clans"),
    ("nav.tournaments", "Tournaments", "Turniere", "Tournois"),
    ("leaderboard.title", "Bedwars Leaderboard", "Bedwars Bestenliste", "Classement Bedwars"),
    ("leaderboard.rank", "Rank", "Rang", "Rang"),
    ("leaderboard.player", "Player", "Spieler", "Joueur"),
    ("leaderboard.kills", "Kills", "Kills", "Éliminations"),
    ("leaderboard.deaths", "Deaths", "Tode", "Morts"),
    ("leaderboard.beds", "Beds Broken", "Zerstörte Betten", "Lits détruits"),
    ("leaderboard.wins", "Wins", "Siege", "Victoires"),
    ("leaderboard.winstreak", "Winstreak", "Siegesserie", "Série de victoires"),
    ("statistics.title", "Site Statistics", "Statistiken", "Statistiques du site"),
    ("shop.title", "Item Shop", "Item-Shop", "Boutique d'objets"),
    ("shop.price", "Price", "Preis", "Prix"),
    ("clans.title", "Clans", "Clans", "Clans"),
    ("clans.members", "Members", "Mitglieder", "Membres"),
    ("tournaments.title", "Tournaments", "Turniere", "Tournois"),
    ("profile.achievements", "Achievements", "Erfolge", "Succès"),
    ("profile.badges", "Badges", "Abzeichen", "Badges"),
    ("profile.quests", "Active Quests", "Aktive Quests", "Quêtes actives"),
];

/// Registers the `t` translation filter on the engine.
///
/// # Arguments
/// - `tera` - Engine under construction
pub fn register_translation_filter(tera: &mut Tera) {
    tera.register_filter("t", translate);
}

/// The `t` filter: looks up a phrase key for the requested language.
fn translate(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let key = value.as_str().unwrap_or_default();
    let lang = args
        .get("lang")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LANG);

    Ok(Value::String(lookup(key, lang).to_string()))
}

/// Resolves a key for a language, falling back to English, then the key.
fn lookup<'a>(key: &'a str, lang: &str) -> &'a str {
    match PHRASES.iter().find(|(k, _, _, _)| *k == key) {
        Some((_, en, de, fr)) => match lang {
            "de" => de,
            "fr" => fr,
            _ => en,
        },
        None => key,
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    /// Tests English lookup with no lang argument.
    #[test]
    fn translates_to_english_by_default() {
        let result = translate(&json!("nav.home"), &HashMap::new()).unwrap();
        assert_eq!(result, json!("Leaderboard"));
    }

    /// Tests lookup with an explicit language argument.
    #[test]
    fn translates_to_requested_language() {
        let mut args = HashMap::new();
        args.insert("lang".to_string(), json!("de"));
        let result = translate(&json!("leaderboard.wins"), &args).unwrap();
        assert_eq!(result, json!("Siege"));
    }

    /// Tests that an unsupported language falls back to English.
    #[test]
    fn unsupported_language_falls_back_to_english() {
        let mut args = HashMap::new();
        args.insert("lang".to_string(), json!("pt"));
        let result = translate(&json!("nav.shop"), &args).unwrap();
        assert_eq!(result, json!("Shop"));
    }

    /// Tests that unknown keys render as themselves.
    #[test]
    fn unknown_key_renders_as_key() {
        let result = translate(&json!("nav.does_not_exist"), &HashMap::new()).unwrap();
        assert_eq!(result, json!("nav.does_not_exist"));
    }
}
