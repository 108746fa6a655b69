//! Format templates: parsing and line assembly.
//!
//! A template is literal text mixed with `{placeholder}` tokens:
//!
//! ```text
//! {title}: [{bar}] {pos}/{len} {percent} ({elapsed}, {eta})
//! ```
//!
//! Recognized placeholders are `title`, `bar`, `percent`, `pos`, `len`,
//! `elapsed`, `eta` and `rate`. A placeholder takes one optional
//! parameter after a colon: a column width (`{title:12}`, `{bar:30}`) or
//! a decimal precision (`{percent:.1}`, `{rate:.2}`). Literal braces are
//! written `{{` and `}}`.
//!
//! The bar is the elastic field: without an explicit width it receives
//! whatever columns remain after every other fragment is rendered, so
//! the assembled line fits the terminal. If the line still overflows —
//! even with the bar squeezed to nothing — it is truncated on a grapheme
//! boundary.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::components::{Components, RenderContext};
use crate::error::{Error, Result};

/// The default template used when none is configured.
pub const DEFAULT_FORMAT: &str = "{title}: [{bar}] {pos}/{len} {percent} ({elapsed})";

/// A placeholder's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Title,
    Bar,
    Percent,
    Pos,
    Len,
    Elapsed,
    Eta,
    Rate,
}

impl Key {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "bar" => Some(Self::Bar),
            "percent" => Some(Self::Percent),
            "pos" => Some(Self::Pos),
            "len" => Some(Self::Len),
            "elapsed" => Some(Self::Elapsed),
            "eta" => Some(Self::Eta),
            "rate" => Some(Self::Rate),
            _ => None,
        }
    }
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder {
        key: Key,
        width: Option<usize>,
        precision: Option<usize>,
    },
}

/// A parsed format template, cached by the façade until the format or a
/// bar mark changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `format` into segments, failing on an unclosed placeholder,
    /// an unknown placeholder name, or a malformed parameter.
    pub fn parse(format: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut token = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        token.push(c);
                    }
                    if !closed {
                        return Err(Error::Format(format!(
                            "unclosed placeholder '{{{}'",
                            token
                        )));
                    }
                    segments.push(parse_placeholder(&token)?);
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(Error::Format(
                            "unmatched '}' (write '}}' for a literal brace)".to_string(),
                        ));
                    }
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Assembles the output line for one render.
    ///
    /// Every non-bar fragment renders first; elastic bars split the
    /// remaining columns. The result never exceeds `available_width`.
    pub fn process(
        &self,
        components: &Components<'_>,
        ctx: &RenderContext,
        available_width: usize,
    ) -> String {
        enum Fragment {
            Text(String),
            Bar { width: Option<usize> },
        }

        let mut fragments = Vec::with_capacity(self.segments.len());
        let mut fixed_width = 0usize;
        let mut elastic_bars = 0usize;

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    fixed_width += UnicodeWidthStr::width(text.as_str());
                    fragments.push(Fragment::Text(text.clone()));
                }
                Segment::Placeholder {
                    key: Key::Bar,
                    width,
                    ..
                } => {
                    match width {
                        Some(width) => fixed_width += width,
                        None => elastic_bars += 1,
                    }
                    fragments.push(Fragment::Bar { width: *width });
                }
                Segment::Placeholder {
                    key,
                    width,
                    precision,
                } => {
                    let rendered = render_field(*key, components, ctx, *precision);
                    let rendered = match width {
                        Some(width) if *key == Key::Title => {
                            crate::components::title::fit_to_width(&rendered, *width)
                        }
                        Some(width) => pad_left(rendered, *width),
                        None => rendered,
                    };
                    fixed_width += UnicodeWidthStr::width(rendered.as_str());
                    fragments.push(Fragment::Text(rendered));
                }
            }
        }

        let spare = available_width.saturating_sub(fixed_width);
        let per_bar = if elastic_bars > 0 {
            spare / elastic_bars
        } else {
            0
        };

        let mut line = String::new();
        for fragment in fragments {
            match fragment {
                Fragment::Text(text) => line.push_str(&text),
                Fragment::Bar { width } => {
                    let width = width.unwrap_or(per_bar);
                    line.push_str(&components.bar.render(ctx, width));
                }
            }
        }

        if UnicodeWidthStr::width(line.as_str()) > available_width {
            line = truncate_to_width(&line, available_width);
        }
        line
    }
}

fn parse_placeholder(token: &str) -> Result<Segment> {
    let (name, param) = match token.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (token, None),
    };

    let key = Key::parse(name)
        .ok_or_else(|| Error::Format(format!("unknown placeholder '{{{}}}'", name)))?;

    let (width, precision) = match param {
        None => (None, None),
        Some("") => {
            return Err(Error::Format(format!(
                "empty parameter in '{{{}:}}'",
                name
            )))
        }
        Some(param) => match param.strip_prefix('.') {
            Some(digits) => {
                let precision = digits.parse::<usize>().map_err(|_| {
                    Error::Format(format!("bad precision in '{{{}:{}}}'", name, param))
                })?;
                (None, Some(precision))
            }
            None => {
                let width = param.parse::<usize>().map_err(|_| {
                    Error::Format(format!("bad width in '{{{}:{}}}'", name, param))
                })?;
                (Some(width), None)
            }
        },
    };

    Ok(Segment::Placeholder {
        key,
        width,
        precision,
    })
}

fn render_field(
    key: Key,
    components: &Components<'_>,
    ctx: &RenderContext,
    precision: Option<usize>,
) -> String {
    match key {
        Key::Title => components.title.render(None),
        Key::Percent => components.percentage.render(ctx, precision),
        Key::Pos => ctx.current.to_string(),
        Key::Len => match ctx.total {
            Some(total) => total.to_string(),
            None => "?".to_string(),
        },
        Key::Elapsed => components.time.render_elapsed(ctx),
        Key::Eta => components.time.render_estimated(ctx),
        Key::Rate => components.rate.render(ctx, precision),
        // Bar placeholders are sized and rendered by `process`.
        Key::Bar => String::new(),
    }
}

/// Right-aligns `text` in `width` columns; wider text is left untouched.
fn pad_left(text: String, width: usize) -> String {
    let visible = UnicodeWidthStr::width(text.as_str());
    if visible >= width {
        return text;
    }
    let mut out = String::with_capacity(text.len() + (width - visible));
    out.extend(std::iter::repeat(' ').take(width - visible));
    out.push_str(&text);
    out
}

/// Cuts `text` on a grapheme boundary so it occupies at most `width`
/// columns.
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out
}
