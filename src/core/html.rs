// src/core/html.rs
// Small helpers over `scraper` for "first match, trimmed text" style lookups.

use scraper::{ElementRef, Selector};

/// Build a selector from a trusted, compile-time pattern.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

/// Selector for "any element carrying this class".
pub fn class_selector(class: &str) -> Selector {
    selector(&format!(".{class}"))
}

/// All descendant text, concatenated and trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first match under `scope`, if any and non-empty.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let el = scope.select(sel).next()?;
    let text = element_text(el);
    (!text.is_empty()).then_some(text)
}

/// Attribute of the first match under `scope`.
pub fn first_attr(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    scope
        .select(sel)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|v| s!(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_spans_nested_tags() {
        let doc = Html::parse_fragment("<div><p>  Hello <b>there</b>\n</p></div>");
        let p = selector("p");
        assert_eq!(first_text(doc.root_element(), &p).as_deref(), Some("Hello there"));
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let doc = Html::parse_fragment("<div><span>   </span></div>");
        assert_eq!(first_text(doc.root_element(), &selector("span")), None);
        assert_eq!(first_text(doc.root_element(), &selector("h1")), None);
    }

    #[test]
    fn attr_of_first_match() {
        let doc = Html::parse_fragment(r#"<img alt="x"><img src="b.png">"#);
        let img = selector("img");
        assert_eq!(first_attr(doc.root_element(), &img, "src"), None);
        assert_eq!(first_attr(doc.root_element(), &img, "alt").as_deref(), Some("x"));
    }
}
