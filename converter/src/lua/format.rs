//! Serializer from [`LuaValue`] to Lua source text.
//!
//! Rules:
//! - tables list present entries in insertion order as `key = value,`;
//!   absent entries are left out
//! - keys matching `[A-Za-z_][A-Za-z_0-9]*` are written bare, anything else
//!   (and Lua keywords) as `['key']`; `true`, `false` and `null` become
//!   `[true]`, `[false]` and `[nil]`
//! - sequences are `{ a, b, }` with a trailing comma
//! - empty containers are always `{}`
//! - output starts with `return`

use once_cell::sync::Lazy;
use regex::Regex;

use super::value::{LuaTable, LuaValue};

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z_0-9]*$").expect("identifier pattern"));

/// Reserved words that cannot be used as bare table keys.
const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "until", "while",
];

// =============================================================================
// Options
// =============================================================================

/// String delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Indentation unit added per nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indent {
    /// Compact output: no whitespace or line breaks at all.
    None,
    /// `n` spaces per level.
    Spaces(usize),
    /// An arbitrary string per level, e.g. `"\t"`.
    Text(String),
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

impl Indent {
    /// The per-level unit, or `None` in compact mode. Zero spaces and an
    /// empty string both select compact mode.
    fn unit(&self) -> Option<String> {
        match self {
            Indent::None | Indent::Spaces(0) => None,
            Indent::Spaces(n) => Some(" ".repeat(*n)),
            Indent::Text(s) if s.is_empty() => None,
            Indent::Text(s) => Some(s.clone()),
        }
    }
}

/// Serializer options. Defaults: two spaces, single quotes, `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: Indent,
    pub quote: QuoteStyle,
    pub eol: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            quote: QuoteStyle::default(),
            eol: "\n".to_string(),
        }
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Render `value` as a Lua chunk returning it.
pub fn format(value: &LuaValue, options: &FormatOptions) -> String {
    let formatter = Formatter::new(options);
    let body = formatter.value(value, 0);
    if formatter.unit.is_some() {
        format!("return {body}")
    } else {
        format!("return{body}")
    }
}

/// Quote a string literal, escaping backslashes, the quote character and
/// line breaks.
pub fn format_string(s: &str, quote: QuoteStyle) -> String {
    let q = quote.as_char();
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Render a table key.
pub fn format_key(key: &str, quote: QuoteStyle) -> String {
    match key {
        "false" => "[false]".to_string(),
        "true" => "[true]".to_string(),
        "null" => "[nil]".to_string(),
        k if IDENTIFIER.is_match(k) && !LUA_KEYWORDS.contains(&k) => k.to_string(),
        k => format!("[{}]", format_string(k, quote)),
    }
}

// =============================================================================
// Formatter
// =============================================================================

struct Formatter<'a> {
    unit: Option<String>,
    quote: QuoteStyle,
    eol: &'a str,
}

impl<'a> Formatter<'a> {
    fn new(options: &'a FormatOptions) -> Self {
        Self {
            unit: options.indent.unit(),
            quote: options.quote,
            eol: &options.eol,
        }
    }

    fn value(&self, value: &LuaValue, depth: usize) -> String {
        match value {
            LuaValue::Nil => "nil".to_string(),
            LuaValue::Boolean(b) => b.to_string(),
            LuaValue::Integer(n) => n.to_string(),
            LuaValue::Float(f) => format_float(*f),
            LuaValue::String(s) => format_string(s, self.quote),
            LuaValue::Sequence(items) => self.sequence(items, depth),
            LuaValue::Table(table) => self.table(table, depth),
        }
    }

    fn sequence(&self, items: &[LuaValue], depth: usize) -> String {
        if items.is_empty() {
            return "{}".to_string();
        }
        match &self.unit {
            Some(unit) => {
                let pad = unit.repeat(depth + 1);
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| format!("{pad}{},", self.value(item, depth + 1)))
                    .collect();
                self.block(lines, unit, depth)
            }
            None => {
                let body: String = items
                    .iter()
                    .map(|item| format!("{},", self.value(item, depth + 1)))
                    .collect();
                format!("{{{body}}}")
            }
        }
    }

    fn table(&self, table: &LuaTable, depth: usize) -> String {
        if table.present().next().is_none() {
            return "{}".to_string();
        }
        let rendered = match &self.unit {
            Some(unit) => {
                let pad = unit.repeat(depth + 1);
                let lines: Vec<String> = table
                    .present()
                    .map(|(key, value)| {
                        format!(
                            "{pad}{} = {},",
                            format_key(key, self.quote),
                            self.value(value, depth + 1)
                        )
                    })
                    .collect();
                self.block(lines, unit, depth)
            }
            None => {
                let body: String = table
                    .present()
                    .map(|(key, value)| {
                        format!("{}={},", format_key(key, self.quote), self.value(value, depth + 1))
                    })
                    .collect();
                format!("{{{body}}}")
            }
        };
        collapse_blank_lines(rendered)
    }

    fn block(&self, lines: Vec<String>, unit: &str, depth: usize) -> String {
        let eol = self.eol;
        format!("{{{eol}{}{eol}{}}}", lines.join(eol), unit.repeat(depth))
    }
}

/// Collapse runs of blank lines down to a single line break.
fn collapse_blank_lines(mut text: String) -> String {
    while text.contains("\n\n") {
        text = text.replace("\n\n", "\n");
    }
    text
}

/// Integral floats print without a fractional part; non-finite values use
/// the Lua expressions that produce them.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "0/0".to_string()
    } else if f.is_infinite() {
        let huge = if f > 0.0 { "math.huge" } else { "-math.huge" };
        huge.to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
