// crates/profile/src/domain/value_objects/markup.rs

use std::borrow::Cow;
use std::sync::LazyLock;
use regex::Regex;

// Bloc <script>/<style> complet (ou non fermé) : le contenu part avec la balise
static EXECUTABLE_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\s*(script|style)\b[^>]*>.*?(</\s*(script|style)\s*>|$)").unwrap()
});

// Balise réelle uniquement : '<' collé à un nom commençant par une lettre, ou commentaire.
// "I <3 Rust" et "5 > 4" restent intacts.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|</?[A-Za-z][^<>]*>").unwrap()
});

/// Séquences SQL interdites dans les noms. L'apostrophe reste légale (O'Brien).
const SQL_META_SEQUENCES: [&str; 4] = [";", "--", "/*", "*/"];

/// Retire le balisage HTML d'un texte libre.
/// Renvoie `Cow::Borrowed` si le texte ne contenait aucune balise.
pub(crate) fn strip_markup(input: &str) -> Cow<'_, str> {
    if !input.contains('<') {
        return Cow::Borrowed(input);
    }

    let without_blocks = EXECUTABLE_BLOCK_REGEX.replace_all(input, "");
    match TAG_REGEX.replace_all(&without_blocks, "") {
        Cow::Borrowed(s) => Cow::Owned(s.to_string()),
        Cow::Owned(s) => Cow::Owned(s),
    }
}

pub(crate) fn find_sql_meta_sequence(input: &str) -> Option<&'static str> {
    SQL_META_SEQUENCES.iter().copied().find(|seq| input.contains(seq))
}
