use std::io::BufRead;

use crate::input::InputError;

/// Numbers separated by whitespace, `,` or `;`. Blank lines and `#` comments
/// are skipped.
pub fn parse_text_scores<R: BufRead>(mut reader: R) -> Result<Vec<f64>, InputError> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token.parse().map_err(|_| {
                InputError::Parse(format!("line {line_no}: invalid score '{token}'"))
            })?;
            out.push(value);
        }
    }
    Ok(out)
}
