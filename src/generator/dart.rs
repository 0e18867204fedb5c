//! Dart source rendering.
//!
//! # Output Format
//!
//! ```dart
//! /// Generated by assetref on 2024/06/15
//! class Res {
//!   static const String logo = "assets/logo.png";
//!   static const String star = "icons/star.png";
//! }
//!
//! class Packages {
//!   static const String fancy_icons = "fancy_icons";
//! }
//! ```
//!
//! The `Packages` class is only written when a `packages/<name>/` asset is
//! declared. Its constants are used as the `package:` argument when loading.

use rustc_hash::FxHashSet;
use std::borrow::Cow;

use crate::asset::naming::{file_stem, to_identifier};
use crate::asset::{AssetDeclaration, ExcludeRules, NameMap, compare_ignore_case};
use crate::utils::DateUtc;

/// Class collecting one constant per external package.
const PACKAGES_CLASS: &str = "Packages";

/// Rendered Dart file plus counts for reporting.
#[derive(Debug)]
pub struct DartSource {
    pub text: String,
    pub constants: usize,
    pub packages: usize,
}

/// Render the generated Dart file.
pub fn render(
    class_name: &str,
    decls: &[AssetDeclaration],
    names: &NameMap,
    rules: &ExcludeRules,
    date: DateUtc,
) -> DartSource {
    let decls = rules.apply_for_source(decls.to_vec());

    let mut packages: Vec<&str> = Vec::new();
    let mut constants: Vec<String> = Vec::with_capacity(decls.len());

    for decl in &decls {
        if let Some(pkg) = decl.package()
            && !packages.contains(&pkg.name)
        {
            packages.push(pkg.name);
        }

        let ident = to_identifier(&identifier_stem(decl, names));
        constants.push(constant(&ident, decl.asset_value()));
    }

    constants.sort_by(|a, b| compare_ignore_case(a, b));
    let mut seen = FxHashSet::default();
    constants.retain(|c| seen.insert(c.clone()));

    let mut out = String::new();
    out.push_str(&format!(
        "/// Generated by assetref on {}\n",
        date.to_slash()
    ));
    push_class(&mut out, class_name, &constants);

    if !packages.is_empty() {
        let package_constants: Vec<String> = packages
            .iter()
            .map(|pkg| constant(pkg, pkg))
            .collect();
        out.push('\n');
        push_class(&mut out, PACKAGES_CLASS, &package_constants);
    }

    DartSource {
        text: out,
        constants: constants.len(),
        packages: packages.len(),
    }
}

/// Name stem from discovery, or the file name for entries the scan never saw
/// (package assets, preserved manifest lines).
fn identifier_stem(decl: &AssetDeclaration, names: &NameMap) -> String {
    match names.get(decl.line()) {
        Some(name) => name.clone(),
        None => file_stem(decl.file_name()).to_string(),
    }
}

fn constant(ident: &str, value: &str) -> String {
    format!("  static const String {ident} = \"{}\";", escape(value))
}

/// Escape a value for a double-quoted Dart string.
fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '"', '$']) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

fn push_class(out: &mut String, name: &str, lines: &[String]) {
    out.push_str(&format!("class {name} {{\n"));
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: DateUtc = DateUtc::from_ymd(2024, 6, 15);

    fn decls(paths: &[&str]) -> Vec<AssetDeclaration> {
        paths.iter().map(|p| AssetDeclaration::new(*p)).collect()
    }

    fn names(entries: &[(&str, &str)]) -> NameMap {
        entries
            .iter()
            .map(|(path, name)| {
                (
                    AssetDeclaration::new(*path).line().to_string(),
                    name.to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_render_single_asset() {
        let out = render(
            "Res",
            &decls(&["assets/img.png"]),
            &names(&[("assets/img.png", "img")]),
            &ExcludeRules::default(),
            DATE,
        )
        .text;
        assert_eq!(
            out,
            "/// Generated by assetref on 2024/06/15\n\
             class Res {\n  static const String img = \"assets/img.png\";\n}\n"
        );
    }

    #[test]
    fn test_constants_sorted_case_insensitively() {
        let out = render(
            "Res",
            &decls(&["assets/b.png", "assets/C.png", "assets/a.png"]),
            &NameMap::default(),
            &ExcludeRules::default(),
            DATE,
        )
        .text;
        let body: Vec<_> = out.lines().filter(|l| l.contains("static const")).collect();
        assert_eq!(
            body,
            [
                "  static const String a = \"assets/a.png\";",
                "  static const String b = \"assets/b.png\";",
                "  static const String C = \"assets/C.png\";",
            ]
        );
    }

    #[test]
    fn test_name_map_disambiguates() {
        let out = render(
            "Res",
            &decls(&["assets/icons/a.png", "assets/images/a.png"]),
            &names(&[
                ("assets/icons/a.png", "a"),
                ("assets/images/a.png", "assets_images_a"),
            ]),
            &ExcludeRules::default(),
            DATE,
        )
        .text;
        assert!(out.contains("  static const String a = \"assets/icons/a.png\";\n"));
        assert!(out.contains("  static const String assets_images_a = \"assets/images/a.png\";\n"));
    }

    #[test]
    fn test_identifier_rules_applied() {
        let out = render(
            "Res",
            &decls(&["assets/arrow-left.png", "assets/café.png"]),
            &NameMap::default(),
            &ExcludeRules::default(),
            DATE,
        )
        .text;
        assert!(out.contains("static const String arrow_left = \"assets/arrow-left.png\";"));
        assert!(out.contains("static const String cafe = \"assets/café.png\";"));
    }

    #[test]
    fn test_packages_class() {
        let mut input = decls(&["assets/logo.png"]);
        input.extend(AssetDeclaration::parse("  - packages/foo/icons/star.png"));
        input.extend(AssetDeclaration::parse("  - packages/bar/a.png"));
        input.extend(AssetDeclaration::parse("  - packages/foo/b.png"));

        let source = render("Res", &input, &NameMap::default(), &ExcludeRules::default(), DATE);
        assert_eq!(source.constants, 3);
        assert_eq!(source.packages, 2);
        let out = source.text;

        assert!(out.contains("  static const String star = \"icons/star.png\";\n"));
        assert!(out.contains("  static const String a = \"a.png\";\n"));
        assert!(out.ends_with(
            "}\n\nclass Packages {\n\
             \x20 static const String foo = \"foo\";\n\
             \x20 static const String bar = \"bar\";\n}\n"
        ));
    }

    #[test]
    fn test_no_packages_class_without_packages() {
        let out = render(
            "Res",
            &decls(&["assets/logo.png"]),
            &NameMap::default(),
            &ExcludeRules::default(),
            DATE,
        )
        .text;
        assert!(!out.contains("class Packages"));
    }

    #[test]
    fn test_excluded_lines_dropped_but_packages_kept() {
        let rules = ExcludeRules::new(["font"]);
        let mut input = decls(&["assets/font/a.ttf", "assets/img.png"]);
        input.extend(AssetDeclaration::parse("    - packages/font_kit/b.ttf"));

        let out = render("Res", &input, &NameMap::default(), &rules, DATE).text;
        assert!(!out.contains("assets/font/a.ttf"));
        assert!(out.contains("static const String b = \"b.ttf\";"));
        assert!(out.contains("static const String img = \"assets/img.png\";"));
        assert!(out.contains("static const String font_kit = \"font_kit\";"));
    }

    #[test]
    fn test_values_escaped_for_dart_strings() {
        let out = render(
            "Res",
            &decls(&["assets/a$b.png", "assets/x\"y.png", "assets/back\\slash.png"]),
            &NameMap::default(),
            &ExcludeRules::default(),
            DATE,
        )
        .text;
        assert!(out.contains(r#"static const String a$b = "assets/a\$b.png";"#));
        assert!(out.contains(r#"static const String x"y = "assets/x\"y.png";"#));
        assert!(out.contains(r#"= "assets/back\\slash.png";"#));
    }

    #[test]
    fn test_custom_class_name() {
        let out = render("Assets", &[], &NameMap::default(), &ExcludeRules::default(), DATE).text;
        assert_eq!(out, "/// Generated by assetref on 2024/06/15\nclass Assets {\n}\n");
    }
}
