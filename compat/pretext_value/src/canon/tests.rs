use pretty_assertions::assert_eq;

use super::*;

#[test]
fn scalars_render_canonically() {
    assert_eq!(repr(&Value::None), "None");
    assert_eq!(repr(&Value::Bool(true)), "True");
    assert_eq!(repr(&Value::Bool(false)), "False");
    assert_eq!(repr(&Value::int(42)), "42");
    assert_eq!(repr(&Value::int(-7)), "-7");
}

#[test]
fn floats_always_show_a_point() {
    assert_eq!(repr(&Value::float(1.0)), "1.0");
    assert_eq!(repr(&Value::float(-0.0)), "-0.0");
    assert_eq!(repr(&Value::float(2.5)), "2.5");
    assert_eq!(repr(&Value::float(f64::INFINITY)), "inf");
    assert_eq!(repr(&Value::float(f64::NEG_INFINITY)), "-inf");
    assert_eq!(repr(&Value::float(f64::NAN)), "nan");
}

#[test]
fn floats_use_exponent_form_at_host_thresholds() {
    assert_eq!(repr(&Value::float(1e300)), "1e+300");
    assert_eq!(repr(&Value::float(1e16)), "1e+16");
    assert_eq!(repr(&Value::float(1.5e16)), "1.5e+16");
    assert_eq!(repr(&Value::float(-1e16)), "-1e+16");
    assert_eq!(repr(&Value::float(1e-5)), "1e-05");
    assert_eq!(repr(&Value::float(-2.5e-10)), "-2.5e-10");
    // Just inside the thresholds: plain decimal form.
    assert_eq!(repr(&Value::float(1e15)), "1000000000000000.0");
    assert_eq!(repr(&Value::float(0.0001)), "0.0001");
    assert_eq!(repr(&Value::float(0.0)), "0.0");
}

#[test]
fn complex_drops_zero_real_part() {
    assert_eq!(repr(&Value::complex(0.0, 2.0)), "2j");
    assert_eq!(repr(&Value::complex(0.0, -2.0)), "-2j");
    assert_eq!(repr(&Value::complex(1.0, 2.0)), "(1+2j)");
    assert_eq!(repr(&Value::complex(1.0, -2.0)), "(1-2j)");
    assert_eq!(repr(&Value::complex(1.5, 2.0)), "(1.5+2j)");
    assert_eq!(repr(&Value::complex(-0.0, 2.0)), "(-0+2j)");
}

#[test]
fn complex_parts_keep_the_exponent_thresholds() {
    assert_eq!(repr(&Value::complex(1e300, 2.0)), "(1e+300+2j)");
    assert_eq!(repr(&Value::complex(0.0, 1e-5)), "1e-05j");
}

#[test]
fn bytes_carry_the_b_prefix() {
    assert_eq!(repr(&Value::bytes(b"".to_vec())), "b''");
    assert_eq!(repr(&Value::bytes(b"abc".to_vec())), "b'abc'");
    assert_eq!(repr(&Value::bytes(vec![0x00])), "b'\\x00'");
    assert_eq!(repr(&Value::bytes(vec![0xff])), "b'\\xff'");
}

#[test]
fn bytes_quote_selection_avoids_escaping() {
    // An apostrophe alone switches to double quotes.
    assert_eq!(repr(&Value::bytes(b"'".to_vec())), "b\"'\"");
    // Both quote kinds present: single quotes win, apostrophe escapes.
    assert_eq!(repr(&Value::bytes(b"'\"".to_vec())), "b'\\'\"'");
}

#[test]
fn bytes_escape_controls_and_backslash() {
    assert_eq!(
        repr(&Value::bytes(b"a\tb\nc\rd\\e".to_vec())),
        "b'a\\tb\\nc\\rd\\\\e'"
    );
}

#[test]
fn strings_are_bare_quoted() {
    assert_eq!(repr(&Value::string("")), "''");
    assert_eq!(repr(&Value::string("abc")), "'abc'");
    assert_eq!(repr(&Value::string("it's")), "\"it's\"");
    assert_eq!(repr(&Value::string("a\u{0}b")), "'a\\x00b'");
    // Non-ASCII text passes through literally.
    assert_eq!(repr(&Value::string("héllo")), "'héllo'");
}

#[test]
fn containers_recurse() {
    let v = Value::list(vec![Value::int(1), Value::string("x")]);
    assert_eq!(repr(&v), "[1, 'x']");

    assert_eq!(repr(&Value::tuple(vec![])), "()");
    assert_eq!(repr(&Value::tuple(vec![Value::int(1)])), "(1,)");
    assert_eq!(
        repr(&Value::tuple(vec![Value::int(1), Value::int(2)])),
        "(1, 2)"
    );

    assert_eq!(repr(&Value::set(vec![])), "set()");
    assert_eq!(repr(&Value::set(vec![Value::int(1)])), "{1}");

    assert_eq!(repr(&Value::dict(vec![])), "{}");
    assert_eq!(
        repr(&Value::dict(vec![(Value::string("k"), Value::int(1))])),
        "{'k': 1}"
    );
}

#[test]
fn nested_containers_render_depth_first() {
    let v = Value::list(vec![
        Value::dict(vec![(
            Value::string("k"),
            Value::tuple(vec![Value::bytes(b"b".to_vec()), Value::string("s")]),
        )]),
    ]);
    assert_eq!(repr(&v), "[{'k': (b'b', 's')}]");
}

#[test]
fn other_passes_through_verbatim() {
    assert_eq!(repr(&Value::other("<object at 0x1>")), "<object at 0x1>");
}
