//! `SKILL.md` header parsing
//!
//! The header is a block of `key: value` lines between two `---` lines at the very
//! top of the file. It is read line by line, not as YAML; malformed input never
//! errors, it just yields no fields.

const DELIMITER: &str = "---";

/// How a marker file's contents split into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSplit<'a> {
    /// The first line is not `---`
    Missing,
    /// The opening `---` has no closing `---`
    Unclosed,
    /// A well-formed header block
    Present { header: Vec<&'a str>, body: String },
}

/// The two header fields a skill cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split `content` at the header delimiters.
pub fn split(content: &str) -> HeaderSplit<'_> {
    let lines: Vec<&str> = content.lines().collect();
    if !lines.first().is_some_and(|l| is_delimiter(l)) {
        return HeaderSplit::Missing;
    }

    let Some(end) = lines[1..].iter().position(|l| is_delimiter(l)) else {
        return HeaderSplit::Unclosed;
    };
    let end = end + 1;

    HeaderSplit::Present {
        header: lines[1..end].to_vec(),
        body: lines[end + 1..].join("\n"),
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Every `key: value` pair in header order. Keys are lowercased.
pub fn pairs<'a>(header: &[&'a str]) -> Vec<(String, &'a str)> {
    header
        .iter()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_lowercase(), unquote(value.trim())))
        })
        .collect()
}

/// Read `name` and `description` from a marker file. Later keys win.
pub fn parse(content: &str) -> Frontmatter {
    let HeaderSplit::Present { header, .. } = split(content) else {
        return Frontmatter::default();
    };

    let mut fm = Frontmatter::default();
    for (key, value) in pairs(&header) {
        match key.as_str() {
            "name" => fm.name = Some(value.to_string()),
            "description" => fm.description = Some(value.to_string()),
            _ => {}
        }
    }
    fm
}
