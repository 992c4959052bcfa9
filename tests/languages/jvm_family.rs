//! JVM language family integration tests
//!
//! Tests for Java (dedicated handler) and Kotlin (fallback handler).

use crate::common::{assert_function_exists, assert_well_formed, function_names, TestRepo};
use repomind_scanner::{scan_file, DocKind};

// =============================================================================
// JAVA TESTS
// =============================================================================

mod java_tests {
    use super::*;

    #[test]
    fn test_java_method_extraction() {
        let repo = TestRepo::new();
        repo.add_file(
            "src/main/java/com/example/User.java",
            r#"package com.example;

import java.util.List;

public class User {
    private final String name;

    public User(String name) {
        this.name = name;
    }

    public String getName() {
        return name;
    }

    public static List<String> parse(String raw) throws IllegalArgumentException {
        return List.of(raw.split(","));
    }
}
"#,
        );

        let record = repo.scan_file("src/main/java/com/example/User.java");
        assert_eq!(record.language, "Java");
        assert_well_formed(&record);
        assert_eq!(
            function_names(&record),
            vec!["User.User", "User.getName", "User.parse"]
        );

        let ctor = assert_function_exists(&record, "User.User");
        assert_eq!(ctor.start_line, 8);
        assert!(ctor.code.starts_with("public User"));

        let parse = assert_function_exists(&record, "User.parse");
        assert_eq!(parse.signature, "parse(String raw)");
        assert_eq!((parse.start_line, parse.end_line), (16, 18));
    }

    #[test]
    fn test_java_last_class_qualifies_all_methods() {
        let source = "class First {\n    void a() {\n    }\n}\n\nclass Second {\n    void b() {\n    }\n}\n";
        let record = scan_file("Pair.java", source);
        assert_eq!(function_names(&record), vec!["Second.a", "Second.b"]);
    }

    #[test]
    fn test_javadoc_fragment() {
        let source = "/**\n * Service entry.\n */\npublic class Service {\n    // fields\n}\n";
        let record = scan_file("Service.java", source);
        assert_eq!(record.documentation.len(), 2);
        assert_eq!(record.documentation[0].kind, DocKind::Multi);
        assert_eq!(record.documentation[0].content, "Service entry.");
        assert_eq!(record.documentation[1].kind, DocKind::Single);
        assert_eq!(record.documentation[1].line, 5);
    }
}

// =============================================================================
// KOTLIN TESTS
// =============================================================================

mod kotlin_tests {
    use super::*;

    #[test]
    fn test_kotlin_uses_fallback_patterns() {
        let source = "fun main() {\n    println(\"hi\")\n}\n";
        let record = scan_file("src/Main.kt", source);
        assert_eq!(record.language, "Kotlin");

        let main = assert_function_exists(&record, "main");
        assert_eq!((main.start_line, main.end_line), (1, 3));
    }
}
