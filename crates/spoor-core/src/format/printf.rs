//! printf-style rendering of message templates
//!
//! Supports the `%v %s %d %f %F %e %E %g %G %t %q %x %X %o %c` verbs with the
//! `-`, `+`, space and `0` flags, a width and a precision. Mismatches never
//! fail: they render inline markers in the conventional printf-family shape.

use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

use crate::record::Arg;

/// Widths and precisions above this render `%!(BADWIDTH)` / `%!(BADPREC)`
const MAX_WIDTH: usize = 1_000_000;

/// Parsed flags, width and precision of one conversion
#[derive(Debug, Default)]
struct Conversion {
    minus: bool,
    plus: bool,
    space: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Substitute `args` positionally into the conversions of `template`
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut conv = Conversion::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => conv.minus = true,
                '+' => conv.plus = true,
                ' ' => conv.space = true,
                '0' => conv.zero = true,
                _ => break,
            }
            chars.next();
        }
        conv.width = match read_number(&mut chars) {
            Some(n) if n > MAX_WIDTH => {
                out.push_str("%!(BADWIDTH)");
                None
            }
            n => n,
        };
        if chars.peek() == Some(&'.') {
            chars.next();
            conv.precision = match read_number(&mut chars) {
                Some(n) if n > MAX_WIDTH => {
                    out.push_str("%!(BADPREC)");
                    None
                }
                n => Some(n.unwrap_or(0)),
            };
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                match convert(verb, &conv, arg) {
                    Some((body, numeric)) => pad(&mut out, &conv, &body, numeric),
                    None => {
                        let _ = write!(out, "%!{}({}={})", verb, arg.type_name(), arg);
                    }
                }
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", arg.type_name(), arg);
        }
        out.push(')');
    }

    out
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}

/// Render one argument; `None` means the verb does not apply to the argument
fn convert(verb: char, conv: &Conversion, arg: &Arg) -> Option<(String, bool)> {
    let rendered = match (verb, arg) {
        ('v', Arg::Str(s)) | ('s', Arg::Str(s)) => (truncate(s, conv.precision), false),
        ('v', Arg::Char(c)) | ('s', Arg::Char(c)) | ('c', Arg::Char(c)) => (c.to_string(), false),
        ('v', Arg::Bool(b)) | ('t', Arg::Bool(b)) => (b.to_string(), false),
        ('v', Arg::Int(n)) | ('d', Arg::Int(n)) => {
            (signed(conv, *n < 0, n.unsigned_abs().to_string()), true)
        }
        ('v', Arg::Uint(n)) | ('d', Arg::Uint(n)) => (signed(conv, false, n.to_string()), true),
        ('d', Arg::Char(c)) => (signed(conv, false, (*c as u32).to_string()), true),
        ('v' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G', Arg::Float(x)) => float(verb, conv, *x),
        ('q', Arg::Str(s)) => (format!("{:?}", s), false),
        ('q', Arg::Char(c)) => (format!("{:?}", c), false),
        ('x', Arg::Int(n)) => (signed(conv, *n < 0, format!("{:x}", n.unsigned_abs())), true),
        ('X', Arg::Int(n)) => (signed(conv, *n < 0, format!("{:X}", n.unsigned_abs())), true),
        ('o', Arg::Int(n)) => (signed(conv, *n < 0, format!("{:o}", n.unsigned_abs())), true),
        ('x', Arg::Uint(n)) => (format!("{:x}", n), true),
        ('X', Arg::Uint(n)) => (format!("{:X}", n), true),
        ('o', Arg::Uint(n)) => (format!("{:o}", n), true),
        ('x', Arg::Str(s)) => (s.bytes().map(|b| format!("{:02x}", b)).collect(), false),
        ('X', Arg::Str(s)) => (s.bytes().map(|b| format!("{:02X}", b)).collect(), false),
        ('c', Arg::Int(n)) => (char::from_u32(u32::try_from(*n).ok()?)?.to_string(), false),
        ('c', Arg::Uint(n)) => (char::from_u32(u32::try_from(*n).ok()?)?.to_string(), false),
        _ => return None,
    };
    Some(rendered)
}

fn float(verb: char, conv: &Conversion, x: f64) -> (String, bool) {
    if x.is_nan() {
        return ("NaN".to_string(), false);
    }
    if x.is_infinite() {
        let sign = if x < 0.0 { '-' } else { '+' };
        return (format!("{}Inf", sign), false);
    }

    let abs = x.abs();
    let digits = match verb {
        'f' | 'F' => format!("{:.*}", conv.precision.unwrap_or(6), abs),
        'e' => exponent(&format!("{:.*e}", conv.precision.unwrap_or(6), abs), false),
        'E' => exponent(&format!("{:.*e}", conv.precision.unwrap_or(6), abs), false).to_uppercase(),
        'G' => general(abs, conv.precision).to_uppercase(),
        _ => general(abs, conv.precision),
    };
    (signed(conv, x.is_sign_negative() && x != 0.0, digits), true)
}

/// `%g`: precision counts significant digits; exponent form when the
/// exponent is below -4 or at least the precision (6 for shortest)
fn general(abs: f64, precision: Option<usize>) -> String {
    match precision {
        None => {
            let shortest = format!("{:e}", abs);
            if use_exponent(&shortest, 6) {
                exponent(&shortest, true)
            } else {
                abs.to_string()
            }
        }
        Some(p) => {
            let p = p.max(1);
            let rounded = format!("{:.*e}", p - 1, abs);
            if use_exponent(&rounded, p) {
                exponent(&rounded, true)
            } else {
                let exp = split_exponent(&rounded).1;
                let decimals = (p as i32 - 1 - exp).max(0) as usize;
                trim_zeros(&format!("{:.*}", decimals, abs)).to_string()
            }
        }
    }
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn use_exponent(sci: &str, precision: usize) -> bool {
    let exp = split_exponent(sci).1;
    exp < -4 || exp >= precision as i32
}

/// Rewrite `1.5e7` as `1.5e+07`, optionally dropping trailing zeros
fn exponent(sci: &str, trim: bool) -> String {
    let (mantissa, exp) = split_exponent(sci);
    let mantissa = if trim { trim_zeros(mantissa) } else { mantissa };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_string(),
    }
}

fn signed(conv: &Conversion, negative: bool, digits: String) -> String {
    if negative {
        format!("-{}", digits)
    } else if conv.plus {
        format!("+{}", digits)
    } else if conv.space {
        format!(" {}", digits)
    } else {
        digits
    }
}

fn pad(out: &mut String, conv: &Conversion, body: &str, numeric: bool) {
    let len = body.chars().count();
    let width = match conv.width {
        Some(w) if w > len => w,
        _ => {
            out.push_str(body);
            return;
        }
    };
    let fill = width - len;

    if conv.minus {
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if conv.zero && numeric {
        let (sign, rest) = match body.chars().next() {
            Some(c @ ('-' | '+' | ' ')) => (Some(c), &body[1..]),
            _ => (None, body),
        };
        out.extend(sign);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(rest);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(body);
    }
}
