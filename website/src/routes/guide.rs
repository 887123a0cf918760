use maud::{Markup, PreEscaped, html};
use rehber::errors::ContentError;
use rehber::route::prelude::*;

use crate::content::{GUIDE_IDS, resolve};
use crate::layout::{SeoMeta, layout};
use crate::routes::Index;

#[route("/rehber/[guide]")]
pub struct Guide;

impl Route for Guide {
    fn pages(&self, _ctx: &DynamicRouteContext) -> Vec<String> {
        GUIDE_IDS.iter().map(|id| id.to_string()).collect()
    }

    fn render(&self, ctx: &PageContext) -> impl Into<RenderResult> {
        render_guide(ctx)
    }
}

fn render_guide(ctx: &PageContext) -> Result<Markup, ContentError> {
    let guide = resolve(ctx.content, ctx.param().unwrap_or_default())?;
    let home = Index.url();

    let main = html! {
        main.container {
            nav.breadcrumb {
                a href=(home) { "🏠 Ana Sayfa" }
                span { "/" }
                span { (guide.content.title) }
            }

            header.guide-header {
                h1 { (guide.content.title) }
                p.description { (guide.content.description) }
                div.meta {
                    span.category { "📂 " (guide.content.category) }
                    span.last-update { "📅 Son güncelleme: " (guide.content.last_update) }
                }
            }

            article.guide-content data-guide=(guide.id) {
                (PreEscaped(guide.content.body))
            }

            footer.guide-footer {
                a.back-button href=(home) { "← Tüm Rehberlere Dön" }
            }
        }
    };

    Ok(layout(
        main,
        ctx,
        Some(SeoMeta {
            title: guide.page_title,
            description: Some(guide.content.description.to_string()),
            ..Default::default()
        }),
    ))
}
