// NOTE:
// The wording below is what the typing game was tuned against.
// Changing it changes the shape of every generated sample.

pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates sample text for typing games.";

/// User prompt asking for roughly `length` words about `category`.
pub fn sample_text_prompt(category: &str, length: u32) -> String {
    format!(
        "Generate a sample text of approximately {length} words for the category: \"{category}\". \n\
         The text should only contain alphanumeric characters and simple punctuation. \n\
         Do NOT use emdashes (\u{2014}), use hyphens (-) instead if needed.\n\
         Do not include any other text or explanation, just the sample text."
    )
}
