//! # Selftest Subcommand
//!
//! Runs the reference fixtures through the validator and prints one line
//! per fixture. Useful as a smoke test of a build or of a changed
//! validation policy.

use clap::Args;
use serde_json::{json, Value};

use bodycheck_schema::{ValidationOptions, Validator};

/// Arguments for the `bodycheck selftest` subcommand.
#[derive(Args, Debug, Default)]
pub struct SelftestArgs {
    /// Print only failing fixtures and the summary.
    #[arg(long)]
    pub quiet: bool,
}

/// A body, a schema and the verdict the validator must reach.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub description: &'static str,
    pub body: Value,
    pub schema: Value,
    pub expected: bool,
}

/// Outcome of running every fixture.
#[derive(Debug, Default)]
pub struct SelftestReport {
    pub passed: usize,
    pub failed: Vec<&'static str>,
}

impl SelftestReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed.len()
    }
}

/// Execute the selftest subcommand.
///
/// Returns exit code: 0 if every fixture reaches its expected verdict, 1 otherwise.
pub fn run_selftest(args: &SelftestArgs, options: ValidationOptions) -> u8 {
    let validator = Validator::new(options);
    let report = run_fixtures(&validator, &reference_fixtures(), args.quiet);

    println!("Fixtures: {}/{} passed", report.passed, report.total());
    if report.failed.is_empty() {
        0
    } else {
        1
    }
}

/// Runs fixtures, printing a PASS/FAIL line for each.
pub fn run_fixtures(validator: &Validator, fixtures: &[Fixture], quiet: bool) -> SelftestReport {
    let mut report = SelftestReport::default();
    for fixture in fixtures {
        let verdict = validator.validate(&fixture.body, &fixture.schema);
        if verdict == fixture.expected {
            report.passed += 1;
            if !quiet {
                println!("  PASS: {} — {}", fixture.name, fixture.description);
            }
        } else {
            tracing::warn!(
                fixture = fixture.name,
                expected = fixture.expected,
                verdict,
                "fixture verdict mismatch"
            );
            println!(
                "  FAIL: {} — {} (expected {}, got {})",
                fixture.name, fixture.description, fixture.expected, verdict
            );
            report.failed.push(fixture.name);
        }
    }
    report
}

fn company_schema() -> Value {
    json!({
        "name": {"type": "string", "required": true},
        "age": {"type": "number", "required": true},
        "founder": {"type": "boolean", "required": false},
        "company": {"type": "string", "required": true},
        "address": {
            "type": "object",
            "required": true,
            "description": {"type": "string", "required": true},
            "county": {"type": "string", "required": false},
            "country": {"type": "string", "required": false}
        }
    })
}

fn company_body(age: Option<Value>) -> Value {
    let mut body = json!({
        "name": "William Loopesko",
        "founder": true,
        "company": "Aclymate",
        "address": {
            "description": "2432 S. Downing St, Denver, CO 80210",
            "county": "Denver",
            "country": "USA"
        }
    });
    if let (Some(age), Some(fields)) = (age, body.as_object_mut()) {
        fields.insert("age".to_string(), age);
    }
    body
}

fn nested_schema() -> Value {
    json!({
        "test4": {
            "type": "object",
            "required": true,
            "test4_1": {
                "type": "object",
                "required": true,
                "test4_2": {
                    "type": "object",
                    "required": true,
                    "a": {"type": "number", "required": true},
                    "b": {"type": "string", "required": true}
                }
            }
        }
    })
}

fn union_schema() -> Value {
    json!({"test6": {"type": ["string", "number"], "required": true}})
}

/// The reference fixtures.
pub fn reference_fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "test1",
            description: "body meets schema",
            body: company_body(Some(json!(33))),
            schema: company_schema(),
            expected: true,
        },
        Fixture {
            name: "test2",
            description: "body lacks required field 'age'",
            body: company_body(None),
            schema: company_schema(),
            expected: false,
        },
        Fixture {
            name: "test3",
            description: "required field 'age' has wrong type",
            body: company_body(Some(json!("33"))),
            schema: company_schema(),
            expected: false,
        },
        Fixture {
            name: "test4",
            description: "double-nested object matches",
            body: json!({"test4": {"test4_1": {"test4_2": {"a": 3, "b": "hello"}}}}),
            schema: nested_schema(),
            expected: true,
        },
        Fixture {
            name: "test5",
            description: "double-nested object replaced by a string",
            body: json!({"test4": {"test4_1": {"test4_2": "hello"}}}),
            schema: nested_schema(),
            expected: false,
        },
        Fixture {
            name: "test6a",
            description: "type union accepts string",
            body: json!({"test6": "hello"}),
            schema: union_schema(),
            expected: true,
        },
        Fixture {
            name: "test6b",
            description: "type union accepts number",
            body: json!({"test6": 3}),
            schema: union_schema(),
            expected: true,
        },
        Fixture {
            name: "test6c",
            description: "type union rejects object",
            body: json!({"test6": {"value": "this is the incorrect type"}}),
            schema: union_schema(),
            expected: false,
        },
    ]
}
