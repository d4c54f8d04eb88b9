//! Text rendering for `print` and `str`.

use std::fmt::Write;

use super::Value;

/// Containers nested deeper than this render as `{ ... }` / `[ ... ]`.
const MAX_DEPTH: usize = 10;

/// Render a number the way scripts expect: integral values without a
/// fraction, `NaN` and `Infinity` spelled out, no negative zero.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        n.to_string()
    }
}

pub(super) fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 1);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::String(s) => out.push_str(s),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Object(props) => {
            if depth > MAX_DEPTH {
                out.push_str("{ ... }");
                return;
            }
            let indent = "  ".repeat(depth);
            out.push_str("{\n");
            for (key, value) in props.borrow().iter() {
                let _ = write!(out, "{indent}{key}: ");
                write_value(out, value, depth + 1);
                out.push_str(",\n");
            }
            out.push_str(&"  ".repeat(depth - 1));
            out.push('}');
        }
        Value::Array(items) => {
            if depth > MAX_DEPTH {
                out.push_str("[ ... ]");
                return;
            }
            out.push('[');
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, depth + 1);
            }
            out.push(']');
        }
        Value::Function(func) => {
            let _ = write!(out, "[function {}]", func.name());
        }
        Value::NativeFunction(_) => out.push_str("[native function]"),
    }
}
