//! Momentum panel text
//!
//! Formats readouts the way the demo panels print them: two decimals and a
//! `kg·m/s` unit, with a dash for values that do not exist yet.

use crate::demos::{MomentumReadout, Readout};
use crate::engine::Momentum;

pub const UNIT: &str = "kg·m/s";

pub fn format_momentum(p: f64) -> String {
    format!("{:.2} {}", p, UNIT)
}

/// Placeholder shown before the event happens
pub fn format_missing() -> String {
    format!("— {}", UNIT)
}

pub fn format_vector(p: &Momentum) -> String {
    format!(
        "px = {:.2}, py = {:.2}, |p| = {}",
        p.px,
        p.py,
        format_momentum(p.magnitude)
    )
}

/// Panel lines for a readout, one per value
///
/// `planar` switches body momenta from the x component to full vectors.
pub fn readout_lines(readout: &Readout, planar: bool) -> Vec<String> {
    match readout {
        Readout::Bodies(bodies) => body_lines(bodies, planar),
        Readout::Rocket(p) => vec![
            format!("rocket: {}", format_momentum(p.rocket)),
            format!("exhaust: {}", format_momentum(p.exhaust)),
            format!("total: {}", format_momentum(p.total)),
        ],
    }
}

fn body_lines(readout: &MomentumReadout, planar: bool) -> Vec<String> {
    let show = |p: &Momentum| {
        if planar {
            format_vector(p)
        } else {
            format_momentum(p.px)
        }
    };

    let mut lines = Vec::new();
    for (i, p) in readout.before.iter().enumerate() {
        lines.push(format!("p{} before: {}", i + 1, show(p)));
    }
    lines.push(format!("total before: {}", show(&readout.total_before())));

    match (&readout.after, readout.total_after()) {
        (Some(after), Some(total)) => {
            for (i, p) in after.iter().enumerate() {
                lines.push(format!("p{} after: {}", i + 1, show(p)));
            }
            lines.push(format!("total after: {}", show(&total)));
        }
        _ => lines.push(format!("total after: {}", format_missing())),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_momentum_two_decimals() {
        assert_eq!(format_momentum(4.0), "4.00 kg·m/s");
        assert_eq!(format_momentum(-1.0 / 3.0), "-0.33 kg·m/s");
    }

    #[test]
    fn test_missing_after_value_uses_dash() {
        let readout = Readout::Bodies(MomentumReadout::default());
        let lines = readout_lines(&readout, false);
        assert_eq!(lines.last().map(String::as_str), Some("total after: — kg·m/s"));
    }
}
