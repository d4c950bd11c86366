//! Swift source renderer.
//!
//! Colours become `UIColor(dynamicProvider:)` constants that switch on the
//! trait collection's interface style; numbers become `CGFloat` constants.

use std::fmt::{self, Write};

use super::{ColorConstant, Declarations, NumberGroup, Renderer};
use crate::error::{Result, TokenError};
use crate::types::Colour;

const INDENT: &str = "    ";

/// Words that must be backtick-escaped when used as identifiers.
const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Self", "any", "as", "associatedtype", "break", "case", "catch", "class", "continue",
    "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough", "false",
    "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout", "internal", "is",
    "let", "nil", "open", "operator", "private", "protocol", "public", "repeat", "rethrows",
    "return", "self", "some", "static", "struct", "subscript", "super", "switch", "throw",
    "throws", "true", "try", "typealias", "var", "where", "while",
];

const HEADER: &str = "import SwiftUI

public extension UIColor {
    var swiftUI: Color {
        if #available(iOS 15, *) {
            Color(uiColor: self)
        } else {
            Color(self)
        }
    }
}
";

#[derive(Debug, Default, Clone, Copy)]
pub struct SwiftRenderer;

impl SwiftRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_colour(out: &mut impl Write, constant: &ColorConstant) -> fmt::Result {
        writeln!(
            out,
            "{INDENT}{INDENT}public static let {} = UIColor(dynamicProvider: {{ traitCollection in",
            constant.name
        )?;
        writeln!(
            out,
            "{INDENT}{INDENT}{INDENT}return traitCollection.userInterfaceStyle == .light"
        )?;
        writeln!(out, "{INDENT}{INDENT}{INDENT}{INDENT}? {}", UiColor(constant.light))?;
        writeln!(out, "{INDENT}{INDENT}{INDENT}{INDENT}: {}", UiColor(constant.dark))?;
        writeln!(out, "{INDENT}{INDENT}}})")
    }

    fn render_numbers(out: &mut impl Write, group: &NumberGroup) -> fmt::Result {
        writeln!(out, "public enum {} {{", group.name)?;
        for (i, constant) in group.constants.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{INDENT}/// {}pt", constant.value)?;
            writeln!(
                out,
                "{INDENT}public static let {} = CGFloat({:?})",
                constant.name, constant.value
            )?;
        }
        writeln!(out, "}}")
    }

    fn write_declarations(out: &mut impl Write, declarations: &Declarations) -> fmt::Result {
        writeln!(out, "{}", HEADER)?;
        writeln!(out, "public enum {} {{", declarations.colors)?;
        for (g, group) in declarations.color_groups.iter().enumerate() {
            if g > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{INDENT}public enum {} {{", group.name)?;
            for (i, constant) in group.constants.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                Self::render_colour(out, constant)?;
            }
            writeln!(out, "{INDENT}}}")?;
        }
        writeln!(out, "}}")?;

        writeln!(out)?;
        Self::render_numbers(out, &declarations.spacing)?;
        writeln!(out)?;
        Self::render_numbers(out, &declarations.radius)
    }
}

/// A `UIColor(red:green:blue:alpha:)` initializer.
struct UiColor(Colour);

impl fmt::Display for UiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UIColor(red: {:?}, green: {:?}, blue: {:?}, alpha: {:?})",
            self.0.red(),
            self.0.green(),
            self.0.blue(),
            self.0.alpha()
        )
    }
}

impl Renderer for SwiftRenderer {
    fn extension(&self) -> &'static str {
        "swift"
    }

    fn is_reserved(&self, ident: &str) -> bool {
        SWIFT_KEYWORDS.contains(&ident)
    }

    fn escape(&self, ident: &str) -> String {
        format!("`{}`", ident)
    }

    fn render(&self, declarations: &Declarations) -> Result<String> {
        let mut out = String::new();
        Self::write_declarations(&mut out, declarations).map_err(|e| TokenError::Emission {
            message: format!("failed to format Swift source: {}", e),
            help: None,
        })?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::{check_delimiters, ColorGroup, NumberConstant};

    fn numbers(name: &str, values: &[(&str, f64)]) -> NumberGroup {
        NumberGroup {
            name: name.to_string(),
            constants: values
                .iter()
                .map(|(n, v)| NumberConstant {
                    name: n.to_string(),
                    source: n.to_string(),
                    value: *v,
                })
                .collect(),
        }
    }

    fn sample() -> Declarations {
        Declarations {
            colors: "TokenColors".to_string(),
            color_groups: vec![ColorGroup {
                name: "Text".to_string(),
                source: "Text".to_string(),
                constants: vec![ColorConstant {
                    name: "primary".to_string(),
                    source: "--color-text-primary".to_string(),
                    light: Colour::rgb(255, 255, 255),
                    dark: Colour::from_bytes(0, 0, 0, 0),
                }],
            }],
            spacing: numbers("TokenSpacing", &[("_4", 4.0), ("_16", 16.0)]),
            radius: numbers("TokenRadius", &[("circle", 0.5)]),
        }
    }

    #[test]
    fn test_keywords() {
        let swift = SwiftRenderer::new();
        assert!(swift.is_reserved("default"));
        assert!(swift.is_reserved("Self"));
        assert!(!swift.is_reserved("primary"));
        assert_eq!(swift.escape("default"), "`default`");
        assert_eq!(swift.extension(), "swift");
    }

    #[test]
    fn test_identifier_rules() {
        let swift = SwiftRenderer::new();
        assert!(swift.is_valid_identifier("_16"));
        assert!(swift.is_valid_identifier("extraSmall"));
        assert!(!swift.is_valid_identifier("16"));
        assert!(!swift.is_valid_identifier("0.5"));
        assert!(!swift.is_valid_identifier(""));
    }

    #[test]
    fn test_render_number_group() {
        let mut out = String::new();
        SwiftRenderer::render_numbers(&mut out, &numbers("TokenSpacing", &[("_4", 4.0), ("half", 0.5)]))
            .unwrap();

        insta::assert_snapshot!(out.trim_end(), @r###"
        public enum TokenSpacing {
            /// 4pt
            public static let _4 = CGFloat(4.0)

            /// 0.5pt
            public static let half = CGFloat(0.5)
        }
        "###);
    }

    #[test]
    fn test_render_colour_constant() {
        let text = SwiftRenderer::new().render(&sample()).unwrap();

        assert!(text.starts_with("import SwiftUI\n"));
        assert!(text.contains("public enum TokenColors {\n    public enum Text {\n"));
        assert!(text.contains(
            "        public static let primary = UIColor(dynamicProvider: { traitCollection in\n"
        ));
        assert!(text.contains("? UIColor(red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0)"));
        assert!(text.contains(": UIColor(red: 0.0, green: 0.0, blue: 0.0, alpha: 0.0)"));
        assert!(text.contains("public static let circle = CGFloat(0.5)"));
    }

    #[test]
    fn test_rendered_output_is_balanced() {
        let text = SwiftRenderer::new().render(&sample()).unwrap();
        assert!(check_delimiters(&text).is_ok());
    }

    #[test]
    fn test_group_order_is_preserved() {
        let text = SwiftRenderer::new().render(&sample()).unwrap();

        let colours = text.find("public enum TokenColors").unwrap();
        let spacing = text.find("public enum TokenSpacing").unwrap();
        let radius = text.find("public enum TokenRadius").unwrap();
        assert!(colours < spacing && spacing < radius);

        let four = text.find("_4 =").unwrap();
        let sixteen = text.find("_16 =").unwrap();
        assert!(four < sixteen);
    }
}
