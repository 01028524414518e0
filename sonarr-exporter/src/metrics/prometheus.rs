//! Prometheus text exposition.
//!
//! Encodes observations in the 0.0.4 text format.

use std::fmt::Write;

use super::descriptor::{MetricDesc, Observation};

/// Content type of the encoded output.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Encode `observations` grouped by family.
///
/// Families are written in `descs` order, each with a single HELP/TYPE header.
/// Families without samples are omitted. Observations whose family is not
/// listed in `descs` are ignored.
pub fn encode(descs: &[&'static MetricDesc], observations: &[Observation]) -> String {
    let mut output = String::new();

    for desc in descs {
        let mut samples = observations
            .iter()
            .filter(|obs| std::ptr::eq(obs.desc(), *desc))
            .peekable();
        if samples.peek().is_none() {
            continue;
        }

        write_header(&mut output, desc);
        for obs in samples {
            write_sample(&mut output, obs);
        }
    }

    output
}

fn write_header(output: &mut String, desc: &MetricDesc) {
    let _ = writeln!(output, "# HELP {} {}", desc.name, escape_help(desc.help));
    let _ = writeln!(output, "# TYPE {} {}", desc.name, desc.kind);
}

fn write_sample(output: &mut String, obs: &Observation) {
    output.push_str(obs.name());

    let labels_str = obs
        .labels()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label_value(v)))
        .collect::<Vec<_>>()
        .join(",");
    if !labels_str.is_empty() {
        let _ = write!(output, "{{{}}}", labels_str);
    }

    let _ = writeln!(output, " {}", format_value(obs.value()));
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        value.to_string()
    }
}
