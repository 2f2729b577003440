//! Card and detail view-models.
//!
//! DESIGN
//! ======
//! Pure builders that turn an [`Article`] into the render data both views
//! consume: summary cards for the listing grid and the related strip, the
//! full article body for the detail view, and the SEO head fields. Keeping
//! these free of any transport concern lets the query layer be tested
//! without a router in sight.

use serde::Serialize;
use time::Date;
use time::macros::format_description;

use crate::catalog::Article;

/// Tags shown on a summary card.
const CARD_TAG_LIMIT: usize = 3;

// =============================================================================
// VIEW MODELS
// =============================================================================

/// Summary card, used identically by the listing grid and the related strip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    /// Styling hook for the category badge: "cloud", "web", "devops" or "".
    pub category_class: &'static str,
    /// Human-readable publish date, e.g. "Jan 5, 2025".
    pub date: String,
    pub tags: Vec<String>,
    pub author: String,
    pub read_time: String,
    pub image: String,
    /// Link target for the detail view, slug preferred over id.
    pub href: String,
}

/// Full article render data for the detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub category_class: &'static str,
    pub date: String,
    pub tags: Vec<String>,
    pub author: String,
    pub author_initial: String,
    pub read_time: String,
    pub image: String,
}

/// Head metadata for the detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoView {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
}

// =============================================================================
// BUILDERS
// =============================================================================

#[must_use]
pub fn card_view(article: &Article) -> CardView {
    CardView {
        id: article.id,
        slug: article.slug.clone(),
        title: article.title.clone(),
        excerpt: article.excerpt.clone(),
        category: article.category.clone(),
        category_class: category_class(&article.category),
        date: format_date(&article.date),
        tags: article.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
        author: article.author.clone(),
        read_time: article.read_time.clone(),
        image: article.image.clone(),
        href: detail_href(article),
    }
}

#[must_use]
pub fn article_view(article: &Article) -> ArticleView {
    ArticleView {
        id: article.id,
        slug: article.slug.clone(),
        title: article.title.clone(),
        excerpt: article.excerpt.clone(),
        content: article.content.clone(),
        category: article.category.clone(),
        category_class: category_class(&article.category),
        date: format_date(&article.date),
        tags: article.tags.clone(),
        author: article.author.clone(),
        author_initial: author_initial(&article.author),
        read_time: article.read_time.clone(),
        image: article.image.clone(),
    }
}

#[must_use]
pub fn seo_view(article: &Article, site_name: &str) -> SeoView {
    SeoView {
        title: format!("{} | {site_name} Blog", article.title),
        description: article.excerpt.clone(),
        keywords: article.tags.join(", "),
        og_title: article.title.clone(),
        og_description: article.excerpt.clone(),
        og_image: article.image.clone(),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Badge class for the fixed category set; unknown categories get none.
#[must_use]
pub fn category_class(category: &str) -> &'static str {
    match category {
        "Cloud" => "cloud",
        "Web Development" => "web",
        "DevOps" => "devops",
        _ => "",
    }
}

/// Format an ISO `YYYY-MM-DD` date as "Jan 5, 2025". A date that fails to
/// parse is passed through untouched.
#[must_use]
pub fn format_date(raw: &str) -> String {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|d| d.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// Detail-page link for an article: slug preferred, numeric id fallback.
#[must_use]
pub fn detail_href(article: &Article) -> String {
    match &article.slug {
        Some(slug) => format!("blog-detail.html?slug={slug}"),
        None => format!("blog-detail.html?slug={}", article.id),
    }
}

fn author_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "cards_test.rs"]
mod tests;
