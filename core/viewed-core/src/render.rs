//! Markup for article tiles and heroes.
//!
//! Pure functions of `(item, is_viewed)`: no storage access, no state. The
//! viewed badge is identical in both components.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::content::ContentItem;

const VIEWED_BADGE: &str = concat!(
    r#"<div class="viewed-badge" aria-label="Viewed">"#,
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="white" class="h-4 w-4">"#,
    r#"<path fill-rule="evenodd" d="M16.704 4.153a.75.75 0 01.143 1.052l-8 10.5a.75.75 0 01-1.127.075l-4.5-4.5a.75.75 0 011.06-1.06l3.894 3.893 7.48-9.817a.75.75 0 011.05-.143z" clip-rule="evenodd"/>"#,
    r#"</svg></div>"#,
);

/// Hero layout switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroLayout {
    /// Image on the right instead of the left.
    pub reversed: bool,
    pub featured: bool,
}

/// Renders a grid tile linking to the item's page.
pub fn render_tile(item: &ContentItem, is_viewed: bool) -> String {
    let href = format!("/{}", item.slug.as_deref().unwrap_or_default());
    let mut html = format!(
        r#"<a class="article-tile" href="{}"><div class="article-tile__card">"#,
        encode_double_quoted_attribute(&href)
    );
    if is_viewed {
        html.push_str(VIEWED_BADGE);
    }
    // Description is only shown alongside a title
    if let Some(title) = &item.title {
        html.push_str(&format!(
            r#"<p class="article-tile__title">{}</p>"#,
            encode_text(title)
        ));
        if let Some(description) = &item.short_description {
            html.push_str(&format!(
                r#"<p class="article-tile__description">{}</p>"#,
                encode_text(description)
            ));
        }
    }
    html.push_str("</div></a>");
    html
}

/// Renders the detail-view hero.
pub fn render_hero(item: &ContentItem, is_viewed: bool, layout: HeroLayout) -> String {
    let direction = if layout.reversed {
        "article-hero--reversed"
    } else {
        "article-hero--default"
    };
    let mut html = format!(r#"<div class="article-hero {direction}">"#);
    if is_viewed {
        html.push_str(VIEWED_BADGE);
    }
    html.push_str(r#"<div class="article-hero__body">"#);
    if layout.featured {
        html.push_str(r#"<span class="article-hero__label">Featured</span>"#);
    }
    html.push_str(&format!(
        "<h1>{}</h1>",
        encode_text(item.title.as_deref().unwrap_or_default())
    ));
    if let Some(description) = &item.short_description {
        html.push_str(&format!(
            r#"<p class="article-hero__description">{}</p>"#,
            encode_text(description)
        ));
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> ContentItem {
        ContentItem::new("e1")
            .with_title("Rust & <Friends>")
            .with_slug("rust-friends")
            .with_short_description("Intro")
    }

    #[test]
    fn test_tile_badge_only_when_viewed() {
        assert!(render_tile(&item(), true).contains("viewed-badge"));
        assert!(!render_tile(&item(), false).contains("viewed-badge"));
    }

    #[test]
    fn test_tile_escapes_and_links() {
        let html = render_tile(&item(), false);
        assert!(html.contains(r#"href="/rust-friends""#));
        assert!(html.contains("Rust &amp; &lt;Friends&gt;"));
        assert!(html.contains("Intro"));
    }

    #[test]
    fn test_tile_without_title_omits_description() {
        let item = ContentItem::new("e1").with_short_description("Orphan");
        assert!(!render_tile(&item, false).contains("Orphan"));
    }

    #[test]
    fn test_tile_markup_depends_only_on_flag() {
        assert_eq!(render_tile(&item(), true), render_tile(&item(), true));
        assert_ne!(render_tile(&item(), true), render_tile(&item(), false));
    }

    #[test]
    fn test_hero_layout_and_badge() {
        let html = render_hero(
            &item(),
            true,
            HeroLayout {
                reversed: true,
                featured: true,
            },
        );
        assert!(html.contains("article-hero--reversed"));
        assert!(html.contains("Featured"));
        assert!(html.contains("viewed-badge"));
        assert!(html.contains("<h1>Rust &amp; &lt;Friends&gt;</h1>"));

        let plain = render_hero(&item(), false, HeroLayout::default());
        assert!(plain.contains("article-hero--default"));
        assert!(!plain.contains("viewed-badge"));
        assert!(!plain.contains("Featured"));
    }
}
