//! Positional message formatting.
//!
//! Templates use `{N}` placeholders where `N` indexes into the argument list.
//! Literal braces are written doubled (`{{` and `}}`). Whitespace inside a
//! placeholder is ignored, so `{ 0 }` is the same as `{0}`.

use crate::error::FormatError;


/// Substitutes `args` into `template`.
pub fn format_message(template: &str, args: &[&str]) -> Result<String, FormatError> {
	if !template.contains(['{', '}']) {
		return Ok(template.to_owned());
	}

	let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
	let mut chars = template.char_indices().peekable();

	while let Some((offset, c)) = chars.next() {
		match c {
			'{' if chars.next_if(|&(_, c)| c == '{').is_some() => out.push('{'),
			'}' if chars.next_if(|&(_, c)| c == '}').is_some() => out.push('}'),
			'{' => {
				let start = offset + 1;
				let end = loop {
					match chars.next() {
						Some((i, '}')) => break i,
						Some((_, '{')) | None => return Err(FormatError::Unterminated { offset }),
						Some(_) => {}
					}
				};
				out.push_str(placeholder(&template[start..end], args)?);
			}
			'}' => return Err(FormatError::UnmatchedBrace { offset }),
			c => out.push(c),
		}
	}

	Ok(out)
}

fn placeholder<'a>(text: &str, args: &[&'a str]) -> Result<&'a str, FormatError> {
	let index: usize = text.trim().parse().map_err(|_| FormatError::InvalidIndex {
		text: text.to_owned(),
	})?;
	args.get(index).copied().ok_or(FormatError::MissingArgument {
		index,
		provided: args.len(),
	})
}
