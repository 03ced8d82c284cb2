use crate::{
    caption::numerals::native_range,
    overlay::program::StaticElements,
    passage::model::Group,
    titles::catalog::NameCatalog,
};

/// Build the four title lines for `group`, falling back to generated names when the catalog
/// has no entry.
pub fn static_elements(group: &Group, names: &NameCatalog) -> StaticElements {
    let surah = names.surah(group.surah);
    let surah_ar = surah
        .and_then(|n| n.arabic.clone())
        .unwrap_or_else(|| format!("سورة {}", group.surah));
    let surah_en = surah
        .and_then(|n| n.english.clone())
        .unwrap_or_else(|| format!("Surah {}", group.surah));

    let reciter = names.reciter(&group.reciter_name);
    let reciter_ar = reciter
        .and_then(|n| n.arabic.clone())
        .unwrap_or_else(|| group.reciter_name.clone());
    let reciter_en = reciter
        .and_then(|n| n.english.clone())
        .unwrap_or_else(|| title_case(&group.reciter_name));

    StaticElements {
        primary_title: format!(
            "{surah_ar} {}",
            native_range(group.ayah_start, group.ayah_end)
        ),
        primary_subtitle: reciter_ar,
        translation_title: verse_label(&surah_en, group.ayah_start, group.ayah_end),
        translation_subtitle: reciter_en,
    }
}

fn verse_label(surah: &str, start: u32, end: u32) -> String {
    if start == end {
        format!("{surah} | Verse {start}")
    } else {
        format!("{surah} | Verses {start}-{end}")
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/titles/header.rs"]
mod tests;
