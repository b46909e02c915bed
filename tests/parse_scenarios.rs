use unixopts::{parse, Handle, OptionType, ParseError, Parsed, Registry};

struct Sample {
    registry: Registry,
    bool0: Handle<bool>,
    bool1: Handle<bool>,
    bool2: Handle<bool>,
    int0: Handle<i32>,
    int1: Handle<i32>,
    string0: Handle<String>,
    string2: Handle<String>,
}

fn sample() -> Sample {
    let mut registry = Registry::new();
    let bool0 = registry.declare_boolean("bool0", "Sample boolean, should be false", false);
    let bool1 = registry.declare_boolean("bool1", "Sample boolean, defaults false", false);
    let bool2 = registry.declare_boolean("bool2", "Sample boolean, defaults true", true);
    let int0 = registry.declare_integer("int0", "Sample integer, should be 0", 0);
    let int1 = registry.declare_integer("int1", "Sample integer, defaults to 1", 1);
    let string0 = registry.declare_string("string0", "Sample string, should be empty", "");
    let string2 = registry.declare_string("string2", "Sample string, defaults to hello", "hello");
    Sample {
        registry,
        bool0,
        bool1,
        bool2,
        int0,
        int1,
        string0,
        string2,
    }
}

fn assert_value<T: OptionType + PartialEq + std::fmt::Debug>(
    parsed: &Parsed,
    handle: Handle<T>,
    expected: T,
    supplied: bool,
) {
    assert_eq!(parsed.value(handle), &expected);
    assert_eq!(parsed.supplied(handle), supplied);
}

#[test]
fn test_unreferenced_options_take_defaults() {
    let s = sample();
    let parsed = parse(&s.registry, ["--int0=4"]).unwrap();

    assert_value(&parsed, s.bool0, false, false);
    assert_value(&parsed, s.bool1, false, false);
    assert_value(&parsed, s.bool2, true, false);
    assert_value(&parsed, s.int0, 4, true);
    assert_value(&parsed, s.int1, 1, false);
    assert_value(&parsed, s.string0, String::new(), false);
    assert_value(&parsed, s.string2, "hello".to_string(), false);
}

#[test]
fn test_integer_default_round_trip() {
    let mut registry = Registry::new();
    let n = registry.declare_integer("n", "", 7);
    let parsed = parse(&registry, Vec::<String>::new()).unwrap();
    assert_value(&parsed, n, 7, false);
}

#[test]
fn test_bare_boolean_flag_is_true() {
    let s = sample();
    // Trailing, and followed by another flag.
    let parsed = parse(&s.registry, ["--bool0", "--bool1"]).unwrap();
    assert_value(&parsed, s.bool0, true, true);
    assert_value(&parsed, s.bool1, true, true);
}

#[test]
fn test_boolean_false_strings() {
    let s = sample();
    for text in ["false", "0", "no", "off", "disabled", "FALSE"] {
        let joined = format!("--bool2={}", text);
        let parsed = parse(&s.registry, [joined.as_str()]).unwrap();
        assert_value(&parsed, s.bool2, false, true);

        let parsed = parse(&s.registry, ["--bool2", text]).unwrap();
        assert_value(&parsed, s.bool2, false, true);
    }
}

#[test]
fn test_joined_and_split_forms_agree() {
    let s = sample();
    let cases = [
        ("int1", "+12"),
        ("string0", "some value"),
        ("string0", ""),
        ("bool1", "YES"),
        ("bool2", "nah"),
    ];
    for (name, value) in cases {
        let joined = format!("--{}={}", name, value);
        let split_flag = format!("--{}", name);
        let joined = parse(&s.registry, [joined.as_str()]).unwrap();
        let split = parse(&s.registry, [split_flag.as_str(), value]).unwrap();
        assert_eq!(joined.get(name), split.get(name), "{name}={value:?}");
        assert!(joined.get(name).unwrap().supplied);
    }
}

#[test]
fn test_dryrun_output_scenario() {
    let mut registry = Registry::new();
    let dryrun = registry.declare_boolean("dryrun", "Only report", true);
    let output = registry.declare_string("output", "Output folder", "");

    let parsed = parse(&registry, ["--output=results", "--dryrun"]).unwrap();
    assert_value(&parsed, output, "results".to_string(), true);
    assert_value(&parsed, dryrun, true, true);
}

#[test]
fn test_mixed_dash_styles() {
    let s = sample();
    let parsed = parse(&s.registry, ["-bool0", "-int0", "5", "---string0=x y"]).unwrap();

    assert_value(&parsed, s.bool0, true, true);
    assert_value(&parsed, s.int0, 5, true);
    assert_value(&parsed, s.string0, "x y".to_string(), true);
}

#[test]
fn test_negative_split_value_is_a_flag() {
    let s = sample();
    // `-3` starts with a dash, so it is read as a flag named "3".
    assert_eq!(
        parse(&s.registry, ["--int1", "-3"]).unwrap_err(),
        ParseError::UnknownOption {
            word: "3".to_string()
        }
    );
    let parsed = parse(&s.registry, ["--int1=-3"]).unwrap();
    assert_value(&parsed, s.int1, -3, true);
}

#[test]
fn test_help_request() {
    let s = sample();
    assert_eq!(
        parse(&s.registry, ["--int0", "3", "-?"]).unwrap_err(),
        ParseError::HelpRequested
    );
}

#[test]
fn test_invalid_integer_value() {
    let mut registry = Registry::new();
    registry.declare_integer("count", "", 0);
    assert_eq!(
        parse(&registry, ["--count", "notanumber"]).unwrap_err(),
        ParseError::InvalidIntegerValue {
            option: "count".to_string(),
            raw: "notanumber".to_string(),
        }
    );
}

#[test]
fn test_unknown_option() {
    let s = sample();
    assert_eq!(
        parse(&s.registry, ["--missing"]).unwrap_err(),
        ParseError::UnknownOption {
            word: "missing".to_string()
        }
    );
}

#[test]
fn test_bare_values_without_open_option_are_ignored() {
    let s = sample();
    let parsed = parse(&s.registry, ["first", "--int0", "2", "second"]).unwrap();
    assert_value(&parsed, s.int0, 2, true);
    assert_eq!(parsed.ignored(), ["first", "second"]);
}

#[test]
fn test_reparse_starts_clean() {
    let s = sample();
    let first = parse(&s.registry, ["--string2=bye", "--bool0"]).unwrap();
    let second = parse(&s.registry, ["--int1=9"]).unwrap();

    assert_value(&first, s.string2, "bye".to_string(), true);
    assert_value(&second, s.string2, "hello".to_string(), false);
    assert_value(&second, s.bool0, false, false);
    assert_value(&second, s.int1, 9, true);
}

#[test]
fn test_duplicate_declaration_first_wins() {
    let mut registry = Registry::new();
    let first = registry.declare_integer("a", "first", 0);
    let second = registry.declare_boolean("a", "second", false);

    let parsed = parse(&registry, ["--a=5"]).unwrap();
    assert_value(&parsed, first, 5, true);
    assert_value(&parsed, second, false, false);
}

#[test]
fn test_valueless_flags_take_defaults() {
    let mut registry = Registry::new();
    let s = registry.declare_string("s", "", "dflt");
    let n = registry.declare_integer("n", "", 9);

    // `--s` is closed by the next flag, `--n` by the end of the arguments.
    let parsed = parse(&registry, ["--s", "--n"]).unwrap();
    assert_value(&parsed, s, "dflt".to_string(), true);
    assert_value(&parsed, n, 9, true);
}
