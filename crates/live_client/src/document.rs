// Metadata extraction from the hosting document, tokenizer-level only: meta
// elements are void, so no tree is needed to find them.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::RefCell;

/// Collects `(name, content)` pairs from `<meta>` start tags.
#[derive(Default)]
struct MetaSink {
    metas: RefCell<Vec<(String, String)>>,
}

impl TokenSink for MetaSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(tag) = token {
            if tag.kind == TagKind::StartTag && tag.name.as_ref() == "meta" {
                let mut name = None;
                let mut content = None;
                for attribute in &tag.attrs {
                    match attribute.name.local.as_ref() {
                        "name" => name = Some(attribute.value.to_string()),
                        "content" => content = Some(attribute.value.to_string()),
                        _ => {}
                    }
                }
                if let (Some(name), Some(content)) = (name, content) {
                    self.metas.borrow_mut().push((name, content));
                }
            }
        }
        TokenSinkResult::Continue
    }
}

/// The `content` attribute of the first `<meta>` whose `name` matches
/// (ASCII case-insensitively), or `None` when the document has no such
/// element.
pub fn meta_content(html: &str, name: &str) -> Option<String> {
    let tokenizer = Tokenizer::new(MetaSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from(html));
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer
        .sink
        .metas
        .into_inner()
        .into_iter()
        .find(|(meta_name, _)| meta_name.eq_ignore_ascii_case(name))
        .map(|(_, content)| content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8"/>
    <meta name="CSRF-Token" content="abc123"/>
    <meta name="csrf-token" content="shadowed"/>
  </head>
  <body><p>hi</p></body>
</html>"#;

    #[test]
    fn first_matching_meta_wins_case_insensitively() {
        assert_eq!(meta_content(DOCUMENT, "csrf-token").as_deref(), Some("abc123"));
    }

    #[test]
    fn absent_meta_is_none() {
        assert_eq!(meta_content(DOCUMENT, "csp-token"), None);
        assert_eq!(meta_content("<p>no head</p>", "csrf-token"), None);
    }

    #[test]
    fn meta_without_content_is_skipped() {
        assert_eq!(meta_content(r#"<meta name="csrf-token">"#, "csrf-token"), None);
    }
}
