// src/directory/logo.rs
// =============================================================================
// Generated logos for entries that don't ship one.
//
// A default logo is an initials badge:
// - initials: first letter of each space-separated word, uppercased, max 2
// - color: an HSL hue derived from a hash of the name, so the same name
//   always gets the same colour
// =============================================================================

use crate::api::{Agent, InitialsLogo, Logo};

/// Builds the initials badge for a name
pub fn default_logo(name: &str) -> Logo {
    Logo::Initials(InitialsLogo {
        kind: "initials".to_string(),
        initials: initials(name),
        color: color_for(name),
    })
}

/// Gives the agent a default logo when it has none (or an empty URL)
pub fn ensure_logo(agent: &mut Agent) {
    let missing = match &agent.logo {
        None => true,
        Some(Logo::Url(url)) => url.trim().is_empty(),
        Some(Logo::Initials(_)) => false,
    };
    if missing {
        agent.logo = Some(default_logo(&agent.name));
    }
}

// "Model Context Protocol" -> "MC"
// Consecutive spaces produce empty words, which contribute nothing
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

// hash = unit + ((hash << 5) - hash) over UTF-16 code units, where the shift
// operates on the 32-bit truncation of the running hash. Kept in i64 so the
// subtraction never overflows.
pub fn color_for(name: &str) -> String {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = unit as i64 + (shifted - hash);
    }
    let hue = (hash % 360).abs();
    format!("hsl({}, 70%, 50%)", hue)
}
