//! Markup, data and query language integration tests
//!
//! These languages have no function handler of their own; the tests focus
//! on documentation extraction through the comment style table.

use crate::common::TestRepo;
use repomind_scanner::{extract_documentation, scan_file, DocKind};

// =============================================================================
// HTML / MARKDOWN TESTS
// =============================================================================

mod html_tests {
    use super::*;

    #[test]
    fn test_html_comments() {
        let repo = TestRepo::new();
        repo.add_file(
            "site/index.html",
            r#"<!DOCTYPE html>
<html lang="en">
<!-- Page shell -->
<body>
  <!--
    Navigation goes here
  -->
  <nav></nav>
</body>
</html>
"#,
        );

        let record = repo.scan_file("site/index.html");
        assert_eq!(record.language, "HTML");
        assert!(record.functions.is_empty());

        let docs = &record.documentation;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].content, "Page shell");
        assert_eq!(docs[0].line, 3);
        assert_eq!(docs[1].content, "Navigation goes here");
        assert_eq!(docs[1].line, 7);
        assert!(docs.iter().all(|d| d.kind == DocKind::Multi));
    }

    #[test]
    fn test_markdown_hidden_comment() {
        let record = scan_file("README.md", "# Title\n\n<!-- generated -->\nBody text\n");
        assert_eq!(record.language, "Markdown");
        // Headings are not comments
        assert_eq!(record.documentation.len(), 1);
        assert_eq!(record.documentation[0].content, "generated");
    }
}

// =============================================================================
// CSS TESTS
// =============================================================================

mod css_tests {
    use super::*;

    #[test]
    fn test_css_block_comments_only() {
        let source = "/* Layout */\n.grid { display: grid; }\n// not a comment in css\n";
        let record = scan_file("styles/main.css", source);
        assert_eq!(record.language, "CSS");
        assert_eq!(record.documentation.len(), 1);
        assert_eq!(record.documentation[0].content, "Layout");
    }
}

// =============================================================================
// SQL / LUA / HASKELL TESTS
// =============================================================================

mod dash_comment_tests {
    use super::*;

    #[test]
    fn test_sql_comments() {
        let source = "-- users table\nCREATE TABLE users (id INT);\n/* seed */\n";
        let docs = extract_documentation(source, "SQL");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].kind, DocKind::Single);
        assert_eq!(docs[0].content, "users table");
        assert_eq!(docs[1].kind, DocKind::Multi);
        assert_eq!(docs[1].content, "seed");
    }

    #[test]
    fn test_lua_block_before_single() {
        let source = "--[[\nModule notes\n]]\n-- helper\nlocal x = 1\n";
        let docs = extract_documentation(source, "Lua");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].kind, DocKind::Multi);
        assert_eq!(docs[0].content, "Module notes");
        assert_eq!(docs[0].line, 3);
        assert_eq!(docs[1].kind, DocKind::Single);
        assert_eq!(docs[1].content, "helper");
    }

    #[test]
    fn test_haskell_nested_style_block() {
        let source = "{- Utilities -}\nmodule Util where\n-- | Doubles\ndouble x = x * 2\n";
        let docs = extract_documentation(source, "Haskell");
        assert_eq!(docs[0].content, "Utilities");
        assert_eq!(docs[1].content, "| Doubles");
    }
}

// =============================================================================
// UNKNOWN LANGUAGE TESTS
// =============================================================================

mod unknown_tests {
    use super::*;

    #[test]
    fn test_unknown_label_uses_c_style() {
        let source = "// one\n/* two */\n# three\n";
        let docs = extract_documentation(source, "Brainfuck++");
        let contents: Vec<_> = docs.iter().map(|d| d.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[test]
    fn test_yaml_hash_comments() {
        let record = scan_file("ci.yml", "# pipeline\nsteps: []\n");
        assert_eq!(record.language, "YAML");
        assert_eq!(record.documentation[0].content, "pipeline");
        assert!(record.functions.is_empty());
    }
}
