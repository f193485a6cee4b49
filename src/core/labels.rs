/// Fold a free-text label into a comparison key.
///
/// Lowercases, strips Portuguese diacritics and collapses spaces and
/// underscores into hyphens, so `"Diário"`, `"diario"` and `" DIARIO "` all
/// compare equal, as do `"RevenueIncrease"`-style names once split.
pub fn fold_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            ' ' | '_' => '-',
            other => other,
        })
        .collect()
}

/// Split a PascalCase identifier into a hyphenated lowercase key
/// (`"MarginImprovement"` -> `"margin-improvement"`).
pub fn kebab_from_pascal(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    let mut prev: Option<char> = None;
    for c in label.trim().chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    fold_label(&out)
}
