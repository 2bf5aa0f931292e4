//! Call-site validator: the two-tier explicit-argument policy.

mod common;

use message_template_cache::domain::diagnostics::DiagnosticKind;
use message_template_cache::domain::validator::{CallSiteValidator, ExplicitArgs, Invocation};

fn at_line_10(args: ExplicitArgs) -> Invocation {
    Invocation {
        file_path: "src/app.rs".into(),
        line: 10,
        enclosing_method: "greet".into(),
        explicit_args: args,
    }
}

fn full(file: &str, method: &str, line: u32) -> ExplicitArgs {
    ExplicitArgs::Full {
        file_path: file.into(),
        method_name: method.into(),
        line,
    }
}

#[test]
fn test_zero_arguments_never_flagged() {
    let validator = CallSiteValidator::new();
    assert!(validator.validate(&at_line_10(ExplicitArgs::None)).is_none());
}

#[test]
fn test_full_match_with_later_line_is_intentional_reference() {
    let validator = CallSiteValidator::new();
    // True call site at line 10; supplied line 50 points at a later
    // declaration on purpose.
    let inv = at_line_10(full("src/app.rs", "greet", 50));
    assert!(validator.validate(&inv).is_none());

    // Exactly the true line is also fine.
    let inv = at_line_10(full("src/app.rs", "greet", 10));
    assert!(validator.validate(&inv).is_none());
}

#[test]
fn test_line_before_true_position_is_flagged() {
    let validator = CallSiteValidator::new();
    let inv = at_line_10(full("src/app.rs", "greet", 5));
    let diag = validator.validate(&inv).unwrap();
    assert_eq!(diag.kind, DiagnosticKind::SuspiciousExplicitArguments);
    assert_eq!(diag.line, 10);
    assert!(diag.message.contains("line number (expected >= 10)"));
}

#[test]
fn test_wrong_file_flagged_with_expected_value() {
    let validator = CallSiteValidator::new();
    let inv = at_line_10(full("src/wrong.rs", "greet", 10));
    let diag = validator.validate(&inv).unwrap();
    assert!(diag.message.contains("file path (expected \"src/app.rs\")"));
}

#[test]
fn test_wrong_method_flagged_with_expected_value() {
    let validator = CallSiteValidator::new();
    let inv = at_line_10(full("src/app.rs", "other", 10));
    let diag = validator.validate(&inv).unwrap();
    assert!(diag.message.contains("method name (expected \"greet\")"));
}

#[test]
fn test_every_diverging_field_is_named() {
    let validator = CallSiteValidator::new();
    let inv = at_line_10(full("x.rs", "y", 1));
    let diag = validator.validate(&inv).unwrap();
    assert!(diag.message.contains("file path"));
    assert!(diag.message.contains("method name"));
    assert!(diag.message.contains("line number"));
}

#[test]
fn test_partial_arguments_flagged_even_when_correct() {
    let validator = CallSiteValidator::new();
    for count in [1, 2] {
        let diag = validator
            .validate(&at_line_10(ExplicitArgs::Partial(count)))
            .unwrap();
        assert_eq!(diag.kind, DiagnosticKind::SuspiciousExplicitArguments);
        assert!(diag.message.contains("no explicit identity arguments"));
    }
}

#[test]
fn test_validate_all_orders_by_file_then_line() {
    let validator = CallSiteValidator::new();
    let invocations = vec![
        Invocation {
            file_path: "b.rs".into(),
            line: 3,
            enclosing_method: "f".into(),
            explicit_args: ExplicitArgs::Partial(1),
        },
        Invocation {
            file_path: "a.rs".into(),
            line: 9,
            enclosing_method: "g".into(),
            explicit_args: ExplicitArgs::Partial(2),
        },
        Invocation {
            file_path: "a.rs".into(),
            line: 2,
            enclosing_method: "h".into(),
            explicit_args: ExplicitArgs::None,
        },
    ];

    let diagnostics = validator.validate_all(&invocations);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].file_path, "a.rs");
    assert_eq!(diagnostics[1].file_path, "b.rs");
}
