use maud::{DOCTYPE, Markup, html};
use rehber::maud::generator;
use rehber::route::PageContext;

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "Mizan Yazılım Kurulum Rehberi".to_string(),
            description: Some("Yazarkasa ve POS kurulum rehberleri".to_string()),
            canonical_url: None,
        }
    }
}

impl SeoMeta {
    pub fn render(&self) -> Markup {
        let description = self
            .description
            .clone()
            .or_else(|| SeoMeta::default().description);

        html! {
            title { (self.title) }
            @if let Some(description) = &description {
                meta name="description" content=(description);
                meta property="og:description" content=(description);
            }

            meta property="og:title" content=(self.title);
            meta property="og:type" content="website";
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }
        }
    }
}

/// Wraps a page body in the shared document shell.
pub fn layout(main: Markup, ctx: &PageContext, seo: Option<SeoMeta>) -> Markup {
    let mut seo_data = seo.unwrap_or_default();
    if seo_data.canonical_url.is_none() {
        seo_data.canonical_url = ctx.canonical_url();
    }

    html! {
        (DOCTYPE)
        html lang="tr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                (seo_data.render())
                link rel="stylesheet" href="/styles.css";
            }
            body {
                (main)
            }
        }
    }
}
