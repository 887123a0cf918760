use maud::html;
use rehber::route::prelude::*;

use crate::layout::{SeoMeta, layout};
use crate::routes::Index;

#[route("/404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, ctx: &PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                main.container {
                    div.not-found {
                        h1 { "Sayfa Bulunamadı" }
                        p { "Aradığınız rehber mevcut değil veya taşınmış olabilir." }
                        a.back-button href=(Index.url()) { "← Tüm Rehberlere Dön" }
                    }
                }
            },
            ctx,
            Some(SeoMeta {
                title: "Sayfa Bulunamadı - Mizan Kurulum Rehberi".to_string(),
                ..Default::default()
            }),
        )
    }
}
