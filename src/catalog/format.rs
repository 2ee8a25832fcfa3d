//! Positional message templates.
//!
//! Templates use `{}` as the placeholder. Arguments are substituted left to
//! right. Formatting is permissive: a placeholder without an argument stays
//! literal and an argument without a placeholder is dropped from the text.
//!
//! `\{}` renders a literal `{}` without consuming an argument, and `\\{}`
//! renders a single backslash followed by the next argument.

use std::fmt::{self, Display, Write};

/// The positional placeholder token.
pub const PLACEHOLDER: &str = "{}";

const ESCAPE: u8 = b'\\';

/// Substitute `args` into the `{}` placeholders of `template`.
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut cursor = 0;
    let mut next_arg = 0;

    while next_arg < args.len() {
        let Some(offset) = template[cursor..].find(PLACEHOLDER) else {
            break;
        };
        let at = cursor + offset;

        if is_escaped(bytes, at) {
            if is_escaped(bytes, at - 1) {
                // `\\{}`: keep one backslash, substitute normally.
                out.push_str(&template[cursor..at - 1]);
                push_arg(&mut out, args[next_arg]);
                next_arg += 1;
                cursor = at + PLACEHOLDER.len();
            } else {
                // `\{}`: drop the backslash, emit the brace literally.
                out.push_str(&template[cursor..at - 1]);
                out.push('{');
                cursor = at + 1;
            }
        } else {
            out.push_str(&template[cursor..at]);
            push_arg(&mut out, args[next_arg]);
            next_arg += 1;
            cursor = at + PLACEHOLDER.len();
        }
    }

    out.push_str(&template[cursor..]);
    out
}

fn is_escaped(bytes: &[u8], at: usize) -> bool {
    at > 0 && bytes[at - 1] == ESCAPE
}

fn push_arg(out: &mut String, arg: &dyn Display) {
    // Writing into a String cannot fail, but a Display impl may; keep going.
    if write!(out, "{arg}").is_err() {
        out.push_str(PLACEHOLDER);
    }
}

/// Debug adapter listing arguments by their `Display` output.
pub struct DisplayArgs<'a>(pub &'a [&'a dyn Display]);

impl fmt::Debug for DisplayArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for arg in self.0 {
            list.entry(&format_args!("{arg}"));
        }
        list.finish()
    }
}
