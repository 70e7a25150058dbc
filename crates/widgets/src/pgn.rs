//! PGN helpers behind the "Copy as SAN" button.

/// Game termination markers
const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Strip `{...}` comments, `(...)` variations and `;` line comments.
fn strip_annotations(movetext: &str) -> String {
    let mut out = String::with_capacity(movetext.len());
    let mut in_brace = false;
    let mut in_line_comment = false;
    let mut depth = 0usize;

    for c in movetext.chars() {
        if in_line_comment {
            if c == '\n' {
                in_line_comment = false;
                out.push(' ');
            }
            continue;
        }
        if in_brace {
            if c == '}' {
                in_brace = false;
                out.push(' ');
            }
            continue;
        }
        match c {
            '{' => in_brace = true,
            ';' => in_line_comment = true,
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                out.push(' ');
            }
            _ if depth > 0 => {}
            _ => out.push(c),
        }
    }
    out
}

/// Drop a leading move number (`12.`, `12...`, `3.e4`). Tokens that start
/// with digits but no dots after them, like `0-0`, are kept whole.
fn strip_move_number(token: &str) -> &str {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == token.len() {
        return token;
    }
    let san = rest.trim_start_matches('.');
    if san.len() == rest.len() {
        token
    } else {
        san
    }
}

/// Extract the SAN moves of a PGN, in order.
///
/// Tag pairs, comments, variations, NAGs, move numbers and the result
/// marker are dropped.
pub fn san_moves(pgn: &str) -> Vec<String> {
    let movetext: String = pgn
        .lines()
        .filter(|line| !line.trim_start().starts_with('['))
        .collect::<Vec<_>>()
        .join("\n");

    strip_annotations(&movetext)
        .split_whitespace()
        .filter(|token| !RESULTS.contains(token) && !token.starts_with('$'))
        .map(strip_move_number)
        .filter(|san| !san.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format moves as a quoted list: `['e4', 'e5', 'Nf3']`.
pub fn format_san_list<S: AsRef<str>>(moves: &[S]) -> String {
    let quoted: Vec<String> = moves.iter().map(|m| format!("'{}'", m.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

/// What the "Copy as SAN" button puts on the clipboard.
pub fn copy_as_san(pgn: &str) -> String {
    format_san_list(&san_moves(pgn))
}

#[cfg(test)]
#[path = "pgn_tests.rs"]
mod tests;
