//! Rule-based English lemmatizer reducing tokens to a dictionary base form.
//!
//! Approximates WordNet-style noun lemmatization with an irregular-form
//! table and ordered suffix rules. Every output is itself a fixpoint of
//! `lemmatize`, which keeps text normalization idempotent.

/// Irregular plural forms and their singular base.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Words ending in `s` that are already base forms and must not be clipped.
const S_FINAL_BASE: &[&str] = &[
    "always", "christmas", "news", "perhaps", "series", "species", "whereas",
];

/// Reduce one lowercase token to its base form.
pub fn lemmatize(token: &str) -> String {
    if let Some(base) = irregular(token) {
        return base.to_string();
    }
    if S_FINAL_BASE.contains(&token) {
        return token.to_string();
    }

    let stripped = apply_suffix_rules(token);
    // A stripped plural can land on an irregular key ("womens" -> "women"),
    // which must still collapse to its base form.
    if let Some(base) = irregular(&stripped) {
        return base.to_string();
    }
    stripped
}

fn irregular(token: &str) -> Option<&'static str> {
    IRREGULAR_FORMS
        .iter()
        .find(|(plural, _)| *plural == token)
        .map(|(_, base)| *base)
}

fn apply_suffix_rules(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    for suffix in ["xes", "ches", "shes"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            // drop the trailing "es", keeping the sibilant stem
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}
