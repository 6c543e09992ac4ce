//! Text rendering of the battlefield

use crate::game::combatant::Combatant;
use crate::game::constants::{FIELD_MAX, FIELD_WIDTH};

/// Significant digits used when printing coordinates
const COORD_PRECISION: usize = 6;

const CASTLE_ART: [&str; 4] = ["  ^  ", " /#\\ ", "/###\\", "#####"];
const CASTLE_WIDTH: usize = 5;

/// Leftmost column of a castle standing at `position`
pub fn castle_column(position: f64) -> usize {
    let span = (FIELD_WIDTH - CASTLE_WIDTH) as f64;
    let column = (position / FIELD_MAX * span) as usize;
    column.min(FIELD_WIDTH - CASTLE_WIDTH)
}

/// Draw both castles, a ground line, and the health bar
///
/// Every line ends in `\n`.
pub fn render_battlefield(a: &Combatant, b: &Combatant) -> String {
    let col_a = castle_column(a.position);
    let col_b = castle_column(b.position);

    let mut out = String::new();
    for art in CASTLE_ART {
        let mut row = vec![' '; FIELD_WIDTH];
        for col in [col_a, col_b] {
            for (offset, ch) in art.chars().enumerate() {
                row[col + offset] = ch;
            }
        }
        out.extend(row);
        out.push('\n');
    }

    out.push_str(&"=".repeat(FIELD_WIDTH));
    out.push('\n');
    out.push_str(&status_line(a, b));
    out.push('\n');
    out
}

/// Format a coordinate with six significant digits, trailing zeros trimmed
///
/// Switches to exponent notation (`1.5e+07`) below 1e-4 or at 1e6 and above.
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Round first so the exponent reflects the rounded mantissa (999999.7 -> 1e+06)
    let sci = format!("{:.*e}", COORD_PRECISION - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exponent < -4 || exponent >= COORD_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (COORD_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn status_line(a: &Combatant, b: &Combatant) -> String {
    let left = format!("{} HP:{}", a.name, a.health);
    let right = format!("{} HP:{}", b.name, b.health);
    // Byte length, not char count: multi-byte names push the right label over
    let used = left.len() + right.len();
    let spacer = FIELD_WIDTH.saturating_sub(used).max(1);
    format!("{}{}{}", left, " ".repeat(spacer), right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_castles() -> (Combatant, Combatant) {
        (
            Combatant::new("Player 1", 0.0, 100),
            Combatant::new("Player 2", 100.0, 100),
        )
    }

    #[test]
    fn test_castle_columns_at_field_edges() {
        assert_eq!(castle_column(0.0), 0);
        assert_eq!(castle_column(100.0), 55);
        assert_eq!(castle_column(50.0), 27);
    }

    #[test]
    fn test_default_battlefield_layout() {
        let (a, b) = default_castles();
        let rendered = render_battlefield(&a, &b);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        for line in &lines[..5] {
            assert_eq!(line.chars().count(), FIELD_WIDTH);
        }
        assert_eq!(lines[0], format!("  ^  {}  ^  ", " ".repeat(50)));
        assert_eq!(lines[3], format!("#####{}#####", " ".repeat(50)));
        assert_eq!(lines[4], "=".repeat(60));
    }

    #[test]
    fn test_status_line_spacing() {
        let (a, mut b) = default_castles();
        b.health = 50;
        let rendered = render_battlefield(&a, &b);
        let status = rendered.lines().last().unwrap();

        // 60 - ("Player 1 HP:100" + "Player 2 HP:50") = 31 spaces
        assert_eq!(
            status,
            format!("Player 1 HP:100{}Player 2 HP:50", " ".repeat(31))
        );
    }

    #[test]
    fn test_status_line_keeps_one_space_for_long_names() {
        let a = Combatant::new("A".repeat(40), 0.0, 100);
        let b = Combatant::new("B".repeat(40), 100.0, -50);
        let status = status_line(&a, &b);
        assert!(status.contains("HP:100 BBBB"));
        assert!(status.ends_with("HP:-50"));
    }

    #[test]
    fn test_status_spacer_counts_bytes() {
        // "Château" is 7 chars but 8 bytes
        let a = Combatant::new("Château", 0.0, 100);
        let b = Combatant::new("Player 2", 100.0, 100);
        let status = status_line(&a, &b);
        // 60 - ("Château HP:100" 15 bytes + "Player 2 HP:100" 15 bytes) = 30
        assert_eq!(
            status,
            format!("Château HP:100{}Player 2 HP:100", " ".repeat(30))
        );
    }

    #[test]
    fn test_format_coordinate_six_significant_digits() {
        assert_eq!(format_coordinate(1600.0 / 9.81), "163.099");
        assert_eq!(format_coordinate(100.0 - 100.0 / 9.81), "89.8063");
        assert_eq!(format_coordinate(100.0 / 9.81), "10.1937");
        assert_eq!(format_coordinate(-40.5), "-40.5");
    }

    #[test]
    fn test_format_coordinate_trims_zeros() {
        assert_eq!(format_coordinate(0.0), "0");
        assert_eq!(format_coordinate(100.0), "100");
        assert_eq!(format_coordinate(2.5), "2.5");
    }

    #[test]
    fn test_format_coordinate_exponent_form() {
        assert_eq!(format_coordinate(1234567.0), "1.23457e+06");
        assert_eq!(format_coordinate(999999.7), "1e+06");
        assert_eq!(format_coordinate(0.00001234), "1.234e-05");
        assert_eq!(format_coordinate(0.0001), "0.0001");
    }
}
