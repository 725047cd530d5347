//! Duration formatting for the status line and reports.
//!
//! Templates use `d`, `h`, `m`, `s` tokens (repeat a letter to zero-pad,
//! e.g. `hh:mm:ss`) and `[...]` for literal text. Leading units that are zero
//! are dropped together with the text that follows them, so `h[h] m[m] s[s]`
//! renders 5 seconds as `5s` and 3725 seconds as `1h 2m 5s`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl Unit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Unit::Days),
            'h' => Some(Unit::Hours),
            'm' => Some(Unit::Minutes),
            's' => Some(Unit::Seconds),
            _ => None,
        }
    }

    fn secs(&self) -> u64 {
        match self {
            Unit::Days => 86_400,
            Unit::Hours => 3_600,
            Unit::Minutes => 60,
            Unit::Seconds => 1,
        }
    }
}

#[derive(Debug)]
struct Segment {
    unit: Unit,
    width: usize,
    suffix: String,
}

fn push_literal(segments: &mut [Segment], text: &str, prefix: &mut String) {
    match segments.last_mut() {
        Some(seg) => seg.suffix.push_str(text),
        None => prefix.push_str(text),
    }
}

/// Parsed form: leading literal text, then one segment per unit token.
fn parse_template(template: &str) -> (String, Vec<Segment>) {
    let mut prefix = String::new();
    let mut segments: Vec<Segment> = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '[' {
            let mut lit = String::new();
            for inner in chars.by_ref() {
                if inner == ']' {
                    break;
                }
                lit.push(inner);
            }
            push_literal(&mut segments, &lit, &mut prefix);
        } else if let Some(unit) = Unit::from_char(c) {
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            segments.push(Segment {
                unit,
                width,
                suffix: String::new(),
            });
        } else {
            push_literal(&mut segments, &c.to_string(), &mut prefix);
        }
    }

    (prefix, segments)
}

/// Render `total_secs` with a duration template.
pub fn format_duration(total_secs: u64, template: &str) -> String {
    let (prefix, segments) = parse_template(template);
    if segments.is_empty() {
        return prefix;
    }

    // Largest unit first; the largest present unit absorbs everything above it.
    let mut units: Vec<Unit> = segments.iter().map(|s| s.unit).collect();
    units.sort();
    units.dedup();
    units.reverse();

    let mut rest = total_secs;
    let mut values: Vec<(Unit, u64)> = Vec::with_capacity(units.len());
    for unit in units {
        values.push((unit, rest / unit.secs()));
        rest %= unit.secs();
    }
    let value_of = |unit: Unit| {
        values
            .iter()
            .find(|(u, _)| *u == unit)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    };

    let last = segments.len() - 1;
    let first_shown = segments
        .iter()
        .position(|s| value_of(s.unit) != 0)
        .unwrap_or(last);

    let mut out = prefix;
    for seg in &segments[first_shown..] {
        out.push_str(&format!(
            "{:0width$}{}",
            value_of(seg.unit),
            seg.suffix,
            width = seg.width
        ));
    }
    out
}

/// Two-decimals money string used by the rate report.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
