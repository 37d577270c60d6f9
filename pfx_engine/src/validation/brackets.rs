//! Bracket-matching validation
//!
//! Used by the clause builder as a classifier: a value segment containing a
//! balanced, non-empty bracketed group is treated as a set-valued clause.
//! This is a heuristic over `( ) [ ] { }`, not a full grammar; malformed
//! non-bracketed input is not its concern.

/// Check that every bracket closes the most recently opened bracket of the
/// matching kind. Non-bracket characters are ignored.
pub fn is_balanced(text: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some(open) if open == expected => {}
                    _ => return false,
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Check whether the text contains at least one opening bracket
pub fn contains_bracket_pair(text: &str) -> bool {
    text.chars().any(|ch| matches!(ch, '(' | '[' | '{'))
}
