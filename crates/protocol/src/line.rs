//! InfluxDB line protocol encoding
//!
//! ```text
//! mailchimplists,id=e2b0bdc419,list_name=Chimp\ list member_count=23u,open_rate=35.48
//! ```
//!
//! No timestamp is written; the receiving pipeline stamps arrival time.
//! Tags with an empty value are omitted and newlines are written as `\n`,
//! so a metric always encodes to exactly one line.

use crate::metric::{FieldValue, Metric};
use std::fmt::Write;

impl Metric {
    /// Encode as a single line-protocol line (without trailing newline)
    pub fn to_line_protocol(&self) -> String {
        let mut line = String::with_capacity(64 + self.fields().len() * 24);

        push_escaped(&mut line, self.name(), &[',', ' ']);

        for (key, value) in self.tags().iter().filter(|(_, v)| !v.is_empty()) {
            line.push(',');
            push_escaped(&mut line, key, &[',', '=', ' ']);
            line.push('=');
            push_escaped(&mut line, value, &[',', '=', ' ']);
        }

        for (i, (key, value)) in self.fields().iter().enumerate() {
            line.push(if i == 0 { ' ' } else { ',' });
            push_escaped(&mut line, key, &[',', '=', ' ']);
            line.push('=');
            push_field_value(&mut line, value);
        }

        line
    }
}

fn push_escaped(buf: &mut String, s: &str, special: &[char]) {
    for ch in s.chars() {
        if ch == '\n' {
            buf.push_str("\\n");
            continue;
        }
        if special.contains(&ch) {
            buf.push('\\');
        }
        buf.push(ch);
    }
}

fn push_field_value(buf: &mut String, value: &FieldValue) {
    match value {
        FieldValue::Unsigned(v) => {
            let _ = write!(buf, "{}u", v);
        }
        FieldValue::Integer(v) => {
            let _ = write!(buf, "{}i", v);
        }
        FieldValue::Float(v) => {
            let _ = write!(buf, "{}", v);
        }
        FieldValue::String(v) => {
            buf.push('"');
            for ch in v.chars() {
                match ch {
                    '"' | '\\' => {
                        buf.push('\\');
                        buf.push(ch);
                    }
                    '\n' => buf.push_str("\\n"),
                    _ => buf.push(ch),
                }
            }
            buf.push('"');
        }
    }
}
