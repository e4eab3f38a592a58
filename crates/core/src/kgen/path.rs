//! Escaping of dotted Kotlin names

/// Kotlin hard keywords, which need backquotes when used as a name segment
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Backquote every keyword segment of a package path or qualified name.
///
/// Segments that are already backquoted are left alone, so escaping twice
/// is harmless.
pub fn escape_path(path: &str) -> String {
    path.split('.')
        .map(|segment| {
            if KOTLIN_KEYWORDS.contains(&segment) {
                format!("`{segment}`")
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_segments_are_escaped() {
        assert_eq!(
            escape_path("net.fabricmc.fabric.api.object.builder.v1.block.FabricBlockSettings"),
            "net.fabricmc.fabric.api.`object`.builder.v1.block.FabricBlockSettings"
        );
        assert_eq!(escape_path("my.mod.Chest"), "my.mod.Chest");
        assert_eq!(escape_path("my.`in`.Chest"), "my.`in`.Chest");
        assert_eq!(escape_path(&escape_path("my.is.Chest")), "my.`is`.Chest");
    }
}
