const INGREDIENT_HEADERS: [&str; 2] = ["ingredients", "ingredient"];
const INSTRUCTION_HEADERS: [&str; 4] = ["instructions", "instruction", "directions", "method"];

/// Lines longer than this are treated as prose when no instructions header exists.
const SENTENCE_MIN_CHARS: usize = 50;

/// Line ranges of the two recipe sections within the normalized lines.
///
/// `ingredients` is `ingredients_start..ingredients_end`, instructions run from
/// `instructions_start` to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub ingredients_start: usize,
    pub ingredients_end: usize,
    pub instructions_start: usize,
}

/// Trim whitespace and byte-order marks from both ends of a line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split input into trimmed, non-empty lines.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn is_ingredients_header(line: &str) -> bool {
    let lower = trim_line(line).to_lowercase();
    INGREDIENT_HEADERS.contains(&lower.as_str())
}

pub fn is_instructions_header(line: &str) -> bool {
    let lower = trim_line(line).to_lowercase();
    INSTRUCTION_HEADERS.contains(&lower.as_str())
}

/// A line that reads like prose rather than an ingredient.
pub fn is_sentence_like(line: &str) -> bool {
    if line.chars().count() > SENTENCE_MIN_CHARS {
        return true;
    }

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '.' && chars.peek().is_some_and(|next| next.is_whitespace()) {
            return true;
        }
    }
    false
}

/// Locate the ingredients and instructions sections.
pub fn detect_sections(lines: &[&str]) -> Sections {
    let mut ingredients_header = None;
    let mut instructions_header = None;

    for (i, line) in lines.iter().enumerate() {
        if ingredients_header.is_none() && is_ingredients_header(line) {
            ingredients_header = Some(i);
        } else if is_instructions_header(line) {
            instructions_header = Some(i);
            break;
        }
    }

    let ingredients_start = ingredients_header.map_or(0, |i| i + 1);

    match instructions_header {
        Some(header) => Sections {
            ingredients_start,
            // the header line itself belongs to neither section
            ingredients_end: header.max(ingredients_start),
            instructions_start: header + 1,
        },
        None => {
            let prose = lines
                .iter()
                .enumerate()
                .skip(ingredients_start)
                .find(|(_, line)| is_sentence_like(line))
                .map_or(lines.len(), |(i, _)| i);

            Sections {
                ingredients_start,
                ingredients_end: prose,
                instructions_start: prose,
            }
        }
    }
}
