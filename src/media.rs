use convert_case::{Case, Casing};
use indexmap::IndexSet;

const MEDIA_NAMES: [(&str, &str); 18] = [
    ("iso_a3_297x420mm", "A3"),
    ("iso_a4_210x297mm", "A4"),
    ("iso_a5_148x210mm", "A5"),
    ("iso_a6_105x148mm", "A6"),
    ("iso_b5_176x250mm", "B5"),
    ("jis_b5_182x257mm", "JIS B5"),
    ("na_letter_8.5x11in", "Letter"),
    ("na_legal_8.5x14in", "Legal"),
    ("na_ledger_11x17in", "Tabloid"),
    ("na_executive_7.25x10.5in", "Executive"),
    ("na_index-3x5_3x5in", "3x5 in"),
    ("na_index-4x6_4x6in", "4x6 in"),
    ("na_5x7_5x7in", "5x7 in"),
    ("na_govt-letter_8x10in", "8x10 in"),
    ("om_small-photo_100x150mm", "10x15 cm"),
    ("om_photo-89x127_89x127mm", "89x127 mm"),
    ("jpn_hagaki_100x148mm", "Hagaki"),
    ("na_number-10_4.125x9.5in", "Envelope #10"),
];

/// Display name of a single PWG media keyword.
pub fn media_name(keyword: &str) -> String {
    if let Some((_, name)) = MEDIA_NAMES.iter().find(|(known, _)| *known == keyword) {
        return name.to_string();
    }

    // Self-describing names look like `class_name_dimensions`.
    let parts: Vec<&str> = keyword.split('_').collect();
    match parts.as_slice() {
        [_, name, dimensions] if !name.is_empty() => {
            format!("{} ({dimensions})", name.to_case(Case::Title))
        }
        _ => keyword.to_string(),
    }
}

/// Display names of the media loaded in the printer, without duplicates.
pub fn media_ready_names<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|keyword| !keyword.trim().is_empty())
        .map(media_name)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
