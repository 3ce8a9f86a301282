/// Caret that introduces every color code.
const CARET: char = '^';
/// Marker of the `^xRGB` form.
const HEX_MARKER: char = 'x';
const HEX_DIGITS: usize = 3;

/// Remove DarkPlaces color codes from `text`.
///
/// Two forms are recognized: `^N` with a single decimal digit and `^xRGB`
/// with exactly three hex digits. A caret that starts neither form is kept
/// as literal text.
///
/// # Example
///
/// ```
/// # use xsp::color::strip_colors;
/// #
/// assert_eq!(strip_colors("Pla^1yer^x123Two"), "PlayerTwo");
/// assert_eq!(strip_colors("^xZZZ"), "^xZZZ");
/// assert_eq!(strip_colors("100%^"), "100%^");
/// ```
pub fn strip_colors(text: &str) -> String {
    let chars = text.chars().collect::<Vec<_>>();
    let mut result = String::with_capacity(text.len());
    let mut idx = 0;

    while let Some(&current) = chars.get(idx) {
        if current != CARET {
            result.push(current);
            idx += 1;
            continue;
        }

        match chars.get(idx + 1) {
            // Trailing caret, nothing left to escape.
            None => {
                result.push(current);
                break;
            }
            Some(next) if next.is_ascii_digit() => idx += 2,
            Some(&HEX_MARKER) if is_hex_color(&chars, idx + 2) => idx += 2 + HEX_DIGITS,
            Some(_) => {
                result.push(current);
                idx += 1;
            }
        }
    }

    result
}

/// Check whether the three characters starting at `start` are all hex digits.
fn is_hex_color(chars: &[char], start: usize) -> bool {
    match chars.get(start..start + HEX_DIGITS) {
        Some(digits) => digits.iter().all(char::is_ascii_hexdigit),
        None => false,
    }
}
