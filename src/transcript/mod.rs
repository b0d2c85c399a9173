pub mod document;
pub mod json;

pub use document::{save_document, CaptionDocument, CaptionParagraph, DocumentSink, PlainTextSink};
pub use json::{display_map, to_json_string};

/// Title-case a chapter name: uppercase the first letter of each alphabetic
/// run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
