use maud::html;
use rehber::route::prelude::*;

use crate::content::GUIDE_GROUPS;
use crate::layout::layout;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &PageContext) -> impl Into<RenderResult> {
        layout(
            html! {
                main.container.wide {
                    header.header {
                        h1 { "📋 Mizan Yazılım Kurulum Rehberi" }
                        p { "Tüm kurulum işlemleri için detaylı rehberler" }
                    }

                    div.guides-grid {
                        @for group in &GUIDE_GROUPS {
                            div.guide-section id=(group.id) {
                                div.group-header {
                                    div.guide-icon { (group.icon) }
                                    div {
                                        h2 { (group.name) }
                                        p.guide-description { (group.description) }
                                    }
                                }

                                div.sub-guides {
                                    @for sub_guide in group.sub_guides {
                                        a.sub-guide-card href=(sub_guide.url) {
                                            h3 { (sub_guide.name) }
                                            p { (sub_guide.description) }
                                            div.arrow { "→" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    footer.footer {
                        p { "© 2025 Mizan Yazılım - Kurulum Rehberleri" }
                    }
                }
            },
            ctx,
            None,
        )
    }
}
