//! Dart identifier derivation for asset file names.
//!
//! Names are not validated as identifiers: a file called `1.png` yields `1`,
//! which the Dart analyzer will reject. Rename the asset in that case.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Raw stem of a file name: everything before the first `.`.
///
/// `icon.png` -> `icon`, `logo.dark.png` -> `logo`
pub fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Stem for a file whose name already appeared elsewhere in the scan.
///
/// The directory prefix is folded into the name:
/// `("assets/my icons", "add")` -> `assets_my_icons_add`
pub fn disambiguate(prefix: &str, stem: &str) -> String {
    let stem = stem.trim().replace(' ', "_");
    let prefix = prefix.trim_matches('/').replace([' ', '/'], "_");
    format!("{prefix}_{stem}")
}

/// Turn a name stem into a Dart identifier.
///
/// Hyphens become underscores and combining marks are stripped after
/// canonical decomposition (`âĉéè` -> `acee`). Characters without a
/// decomposition (`ß`, `æ`, `÷`) are kept as they are.
pub fn to_identifier(name: &str) -> String {
    let name = name.replace('-', "_");
    if name.is_ascii() {
        return name;
    }

    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let mut parts = Vec::with_capacity(4);
        decompose_canonical(c, |d| parts.push(d));

        if parts.iter().any(|&d| is_combining_mark(d)) {
            out.extend(parts.into_iter().filter(|&d| !is_combining_mark(d)));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("icon.png"), "icon");
        assert_eq!(file_stem("logo.dark.png"), "logo");
        assert_eq!(file_stem("LICENSE"), "LICENSE");
    }

    #[test]
    fn test_disambiguate() {
        assert_eq!(disambiguate("icons", "a"), "icons_a");
        assert_eq!(disambiguate("assets/my icons", "add"), "assets_my_icons_add");
        assert_eq!(disambiguate("/images/", " big star "), "images_big_star");
    }

    #[test]
    fn test_to_identifier_hyphen() {
        assert_eq!(to_identifier("arrow-left"), "arrow_left");
        assert_eq!(to_identifier("plain_name"), "plain_name");
    }

    #[test]
    fn test_to_identifier_diacritics() {
        assert_eq!(to_identifier("âĉéè"), "acee");
        assert_eq!(to_identifier("café-menu"), "cafe_menu");
        assert_eq!(to_identifier("Ñandú"), "Nandu");
        assert_eq!(to_identifier("ệ"), "e");
        assert_eq!(to_identifier("ǎ"), "a");
    }

    #[test]
    fn test_to_identifier_keeps_undecomposable_chars() {
        assert_eq!(to_identifier("straße"), "straße");
        assert_eq!(to_identifier("Æon"), "Æon");
        assert_eq!(to_identifier("a÷b"), "a÷b");
        // Hangul decomposes into jamo, not marks
        assert_eq!(to_identifier("한글"), "한글");
    }

    #[test]
    fn test_to_identifier_keeps_leading_digit() {
        assert_eq!(to_identifier("2x-icon"), "2x_icon");
    }
}
