//! Scripting language family integration tests
//!
//! Tests for Python and Ruby.

use crate::common::{
    assert_function_exists, assert_function_not_exists, assert_well_formed, function_names,
    TestRepo,
};
use repomind_scanner::{scan_file, DocKind};

// =============================================================================
// PYTHON TESTS
// =============================================================================

mod python_tests {
    use super::*;

    #[test]
    fn test_python_function_extraction() {
        let repo = TestRepo::new();
        repo.add_file(
            "src/utils.py",
            r#"def process_data(data):
    """Process incoming data."""
    return data.strip().upper()


def validate_input(value):
    """Validate input value."""
    if not value:
        raise ValueError("Value cannot be empty")
    return True


def transform(items):
    return [item.lower() for item in items]
"#,
        );

        let record = repo.scan_file("src/utils.py");
        assert_eq!(record.language, "Python");
        assert_well_formed(&record);
        assert_eq!(
            function_names(&record),
            vec!["process_data", "validate_input", "transform"]
        );

        let validate = assert_function_exists(&record, "validate_input");
        assert_eq!(validate.description, "Validate input value.");
        assert_eq!(validate.start_line, 6);
        assert_eq!(validate.end_line, 10);
        assert!(validate.code.ends_with("return True"));

        assert_eq!(assert_function_exists(&record, "transform").description, "");
    }

    #[test]
    fn test_python_class_methods_are_qualified() {
        let repo = TestRepo::new();
        repo.add_file(
            "src/models.py",
            r#"class User:
    """A user model."""

    def __init__(self, name: str, email: str):
        self.name = name
        self.email = email

    @property
    def greeting(self) -> str:
        return f"Hello, {self.name}!"


class Admin(User):
    def has_permission(self, permission: str, **context) -> bool:
        def check():
            return True
        return check()
"#,
        );

        let record = repo.scan_file("src/models.py");
        assert_eq!(
            function_names(&record),
            vec![
                "User.__init__",
                "User.greeting",
                "Admin.has_permission",
                "check"
            ]
        );

        let init = assert_function_exists(&record, "User.__init__");
        assert_eq!(init.signature, "def __init__(self, name, email)");

        let perm = assert_function_exists(&record, "Admin.has_permission");
        assert_eq!(perm.signature, "def has_permission(self, permission, **context)");
    }

    #[test]
    fn test_python_keyword_only_parameters_are_omitted() {
        let record = scan_file("api.py", "def fetch(url, /, timeout=3, *, retries, **kw):\n    pass\n");
        assert_eq!(record.functions[0].signature, "def fetch(url, timeout, **kw)");
    }

    #[test]
    fn test_python_module_docstring_fragment() {
        let record = scan_file("pkg/__init__.py", "\"\"\"Module doc.\"\"\"\n");
        assert_eq!(record.documentation.len(), 1);
        assert_eq!(record.documentation[0].kind, DocKind::Multi);
        assert_eq!(record.documentation[0].content, "Module doc.");
        assert_eq!(record.documentation[0].line, 1);
    }

    #[test]
    fn test_python_syntax_error_falls_back() {
        let source = "x = = 1\n\ndef also_ok(a) {\n  return a\n}\n";
        let record = scan_file("broken.py", source);
        assert_eq!(record.language, "Python");
        assert!(record.error.is_none());
        assert_well_formed(&record);
        assert_function_exists(&record, "also_ok");
    }

    #[test]
    fn test_python_comments_are_single_fragments() {
        let record = scan_file("cfg.py", "# settings\nDEBUG = True  # inline\n#\n");
        assert_eq!(record.documentation.len(), 1);
        assert_eq!(record.documentation[0].kind, DocKind::Single);
        assert_eq!(record.documentation[0].content, "settings");
    }
}

// =============================================================================
// RUBY TESTS
// =============================================================================

mod ruby_tests {
    use super::*;

    #[test]
    fn test_ruby_method_extraction() {
        let repo = TestRepo::new();
        repo.add_file(
            "lib/greeter.rb",
            r#"# Greets people
class Greeter
  def initialize(name)
    @name = name
  end

  def greet
    "Hello, #{@name}"
  end
end
"#,
        );

        let record = repo.scan_file("lib/greeter.rb");
        assert_eq!(record.language, "Ruby");
        assert_eq!(
            function_names(&record),
            vec!["Greeter.initialize", "Greeter.greet"]
        );

        let init = assert_function_exists(&record, "Greeter.initialize");
        assert_eq!(init.signature, "initialize(name)");
        assert_eq!(init.start_line, 3);
        assert_eq!(init.end_line, 5);

        assert_eq!(record.documentation[0].content, "Greets people");
    }

    #[test]
    fn test_ruby_nested_block_truncates_method() {
        let source = "def each_item(items)\n  items.each do |i|\n    puts i\n  end\n  nil\nend\n";
        let record = scan_file("iter.rb", source);
        let method = assert_function_exists(&record, "each_item");
        // The body stops at the block's `end`
        assert_eq!(method.end_line, 4);
    }

    #[test]
    fn test_ruby_block_comment() {
        let source = "=begin\nUsage notes\n=end\ndef run\nend\n";
        let record = scan_file("run.rb", source);
        assert_eq!(record.documentation[0].kind, DocKind::Multi);
        assert_eq!(record.documentation[0].content, "Usage notes");
        assert_function_not_exists(&record, "begin");
    }
}
