//! HTML rendering of banner cards.
//!
//! Used by the server-rendered listing page and by the API client, so both
//! produce identical, escaped markup.

use crate::domain::banner::Banner;

/// Image shown on every card.
pub const PLACEHOLDER_IMAGE: &str = "/assets/img/placeholder.jpeg";

/// Link target used when a banner carries a non-http(s) URL.
const FALLBACK_HREF: &str = "#";

fn escape(value: &str) -> String {
    ammonia::clean_text(value)
}

fn safe_href(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        escape(url)
    } else {
        FALLBACK_HREF.to_string()
    }
}

/// Markup of a single card. Every interpolated field is escaped.
pub fn banner_card(banner: &Banner) -> String {
    let title = escape(&banner.title);
    format!(
        r#"<div class="banner">
  <a href="{href}" title="{title}">
    <img src="{PLACEHOLDER_IMAGE}" alt="banner">
    <h1>{title}</h1>
    <p>{description}</p>
    <p>Author: {author}</p>
  </a>
</div>
"#,
        href = safe_href(&banner.url),
        description = escape(&banner.description),
        author = escape(&banner.author),
    )
}

/// Cards for every banner in order.
pub fn banner_cards(banners: &[Banner]) -> String {
    banners.iter().map(banner_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(title: &str, description: &str, author: &str, url: &str) -> Banner {
        Banner {
            title: title.to_string(),
            description: description.to_string(),
            author: author.to_string(),
            url: url.to_string(),
            ..Banner::default()
        }
    }

    #[test]
    fn card_contains_fields_and_placeholder() {
        let html = banner_card(&banner("Snake", "Classic", "alice", "https://snake.example"));
        assert!(html.contains("<h1>Snake</h1>"));
        assert!(html.contains("<p>Classic</p>"));
        assert!(html.contains("alice"));
        assert!(html.contains(PLACEHOLDER_IMAGE));
        assert!(html.contains("snake.example"));
    }

    #[test]
    fn markup_in_fields_is_escaped() {
        let html = banner_card(&banner(
            "<script>alert(1)</script>",
            "Tom & Jerry",
            "<b>mallory</b>",
            "https://example.com",
        ));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn attribute_breakout_is_escaped() {
        let html = banner_card(&banner(
            "x\" onmouseover=\"alert(1)",
            "",
            "a",
            "https://example.com/\"><script>",
        ));
        assert!(!html.contains("\" onmouseover"));
        assert!(!html.contains("\"><script>"));
    }

    #[test]
    fn non_http_urls_are_not_linked() {
        let html = banner_card(&banner("t", "d", "a", "javascript:alert(1)"));
        assert!(html.contains(r##"href="#""##));
        assert!(!html.contains("javascript"));
    }

    #[test]
    fn renders_one_card_per_banner() {
        let banners = vec![
            banner("one", "", "a", "https://1.example"),
            banner("two", "", "a", "https://2.example"),
            banner("three", "", "a", "https://3.example"),
        ];
        let html = banner_cards(&banners);
        assert_eq!(html.matches(r#"<div class="banner">"#).count(), 3);
        assert_eq!(banner_cards(&[]), "");
    }
}
