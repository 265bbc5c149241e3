//! Markup to Unicode math text.
//!
//! [`typeset`] understands the subset of LaTeX this workspace produces:
//! `\frac`, `\binom`, `\sum`, `\prod`, scripts, `\left`/`\right`,
//! `\cdot`, `\times`, `\text`, `\mathrm` and the spacing commands. Anything
//! else is an error so the caller can fall back to [`degrade`].

use laguerre_model::RenderError;

use crate::display::wrap_typeset;

/// Longest plain-text fallback before truncation.
const DEGRADED_MAX_CHARS: usize = 500;

/// Heading drawn above degraded output.
pub const DEGRADED_NOTICE: &str = "Rendering failed, showing plain text:";

/// Convert markup to Unicode math text.
pub fn typeset(markup: &str) -> Result<String, RenderError> {
    let mut parser = Parser {
        src: markup,
        pos: 0,
    };
    let body = parser.sequence(None)?;
    Ok(tidy_spaces(&body))
}

/// Typeset formatted lines, keeping line breaks where the markup allows.
///
/// A line that does not open a new term (` + `/` - ` outside braces) is a
/// piece of a term cut for width, and is typeset together with the lines
/// before it. Such a joined group is wrapped again to the width of its
/// widest markup line.
pub fn typeset_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, RenderError> {
    let mut out = Vec::with_capacity(lines.len());
    let mut group = String::new();
    let mut group_lines = 0;
    let mut widest = 0;
    let mut depth: i64 = 0;

    for line in lines {
        let line = line.as_ref();
        let opens_term = line.starts_with(" + ") || line.starts_with(" - ");
        if group_lines > 0 && depth == 0 && opens_term {
            flush_group(&mut out, &group, group_lines, widest)?;
            group.clear();
            group_lines = 0;
            widest = 0;
        }
        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }
        group.push_str(line);
        group_lines += 1;
        widest = widest.max(line.chars().count());
    }
    if group_lines > 0 {
        flush_group(&mut out, &group, group_lines, widest)?;
    }
    Ok(out)
}

fn flush_group(
    out: &mut Vec<String>,
    group: &str,
    group_lines: usize,
    widest: usize,
) -> Result<(), RenderError> {
    let text = typeset(group)?;
    if group_lines == 1 {
        out.push(text);
    } else {
        out.extend(wrap_typeset(&text, widest));
    }
    Ok(())
}

/// Strip control characters from markup and truncate it.
///
/// Used when [`typeset`] fails; never fails itself.
pub fn degrade(markup: &str) -> String {
    let stripped: String = markup
        .chars()
        .filter(|c| !matches!(c, '\\' | '{' | '}' | '$'))
        .collect();
    let mut chars = stripped.chars();
    let mut out: String = chars.by_ref().take(DEGRADED_MAX_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

/// Marks spaces that came from `\text{..}` so tidying keeps them.
const KEPT_SPACE: char = '\u{E000}';

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Parse until end of input, or until the closing brace of a group
    /// opened at `open`.
    fn sequence(&mut self, open: Option<usize>) -> Result<String, RenderError> {
        let mut out = String::new();
        loop {
            let Some(ch) = self.bump() else {
                return match open {
                    Some(position) => Err(RenderError::UnbalancedBraces { position }),
                    None => Ok(out),
                };
            };
            match ch {
                '}' => {
                    return match open {
                        Some(_) => Ok(out),
                        None => Err(RenderError::UnbalancedBraces {
                            position: self.pos - 1,
                        }),
                    };
                }
                '{' => {
                    let start = self.pos - 1;
                    out.push_str(&self.sequence(Some(start))?);
                }
                '\\' => out.push_str(&self.command()?),
                '^' => {
                    let arg = self.argument("^")?;
                    out.push_str(&script(&arg, superscript_char, '^'));
                }
                '_' => {
                    let arg = self.argument("_")?;
                    out.push_str(&script(&arg, subscript_char, '_'));
                }
                '$' => {}
                c if c.is_whitespace() => out.push(' '),
                c => out.push(c),
            }
        }
    }

    /// One argument: a braced group, a command, or a single character.
    fn argument(&mut self, command: &str) -> Result<String, RenderError> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        let missing = || RenderError::MissingArgument {
            command: command.to_string(),
        };
        match self.bump().ok_or_else(missing)? {
            '{' => {
                let start = self.pos - 1;
                self.sequence(Some(start))
            }
            '\\' => self.command(),
            '}' => Err(missing()),
            c => Ok(c.to_string()),
        }
    }

    fn command(&mut self) -> Result<String, RenderError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.bump();
        }
        let name = &self.src[start..self.pos];
        if name.is_empty() {
            // Control symbol: \, \; \! \{ \} \\ ...
            return match self.bump() {
                Some(',' | ';' | ':' | ' ') => Ok(" ".to_string()),
                Some('!') => Ok(String::new()),
                Some('\\') => Ok(" ".to_string()),
                Some(c @ ('{' | '}' | '$' | '%' | '&' | '#' | '_')) => Ok(c.to_string()),
                Some(c) => Err(RenderError::UnsupportedCommand {
                    command: c.to_string(),
                }),
                None => Err(RenderError::MissingArgument {
                    command: "\\".to_string(),
                }),
            };
        }
        let name = name.to_string();
        let text = match name.as_str() {
            "frac" | "dfrac" | "tfrac" => {
                let numerator = self.argument(&name)?;
                let denominator = self.argument(&name)?;
                format!("{}/{}", operand(&numerator), operand(&denominator))
            }
            "binom" => {
                let top = self.argument(&name)?;
                let bottom = self.argument(&name)?;
                format!("C({}, {})", tidy_spaces(&top), tidy_spaces(&bottom))
            }
            "text" | "mathrm" | "operatorname" => {
                let body = self.argument(&name)?;
                body.replace(' ', &KEPT_SPACE.to_string())
            }
            "sum" => "Σ".to_string(),
            "prod" => "Π".to_string(),
            "cdot" => "·".to_string(),
            "times" => "×".to_string(),
            "infty" => "∞".to_string(),
            "pi" => "π".to_string(),
            "pm" => "±".to_string(),
            "ldots" | "cdots" | "dots" => "…".to_string(),
            "left" | "right" => String::new(),
            "quad" => "  ".to_string(),
            "qquad" => "    ".to_string(),
            _ => return Err(RenderError::UnsupportedCommand { command: name }),
        };
        Ok(text)
    }
}

/// Wrap a fraction operand in parentheses unless it is a single factor.
fn operand(raw: &str) -> String {
    let tidy = tidy_spaces(raw);
    let compound = tidy
        .chars()
        .any(|c| matches!(c, ' ' | '+' | '-' | '/' | '=') || c == KEPT_SPACE);
    if compound {
        format!("({tidy})")
    } else {
        tidy
    }
}

/// Render a script with Unicode super/subscripts when every character has
/// one, otherwise as `^(..)`.
fn script(arg: &str, map: fn(char) -> Option<char>, marker: char) -> String {
    let compact: String = arg.chars().filter(|c| !c.is_whitespace()).collect();
    let mapped: Option<String> = compact.chars().map(map).collect();
    match mapped {
        Some(s) if !s.is_empty() => s,
        _ if compact.chars().count() == 1 => format!("{marker}{compact}"),
        _ => format!("{marker}({compact})"),
    }
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'x' => 'ˣ',
        _ => return None,
    })
}

fn subscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'x' => 'ₓ',
        _ => return None,
    })
}

/// Math-mode spacing: a space survives only next to a binary operator,
/// `=`, or after a comma.
fn tidy_spaces(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != ' ' {
            out.push(if c == KEPT_SPACE { ' ' } else { c });
            i += 1;
            continue;
        }
        let mut j = i;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }
        let prev = out.chars().last();
        let next = chars.get(j).copied();
        let keeps = |c: Option<char>| matches!(c, Some('+' | '-' | '=' | '±' | '·' | '×'));
        if prev.is_some() && next.is_some() && (keeps(prev) || keeps(next) || prev == Some(','))
        {
            out.push(' ');
        }
        i = j;
    }
    out
}
