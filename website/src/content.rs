use rehber::content::{ContentEntry, ContentSources};
use rehber::content_sources;
use rehber::errors::ContentError;

/// Name of the content source holding every guide.
pub const GUIDES: &str = "guides";

/// Every guide that gets a page under `/rehber/`.
pub const GUIDE_IDS: [&str; 7] = [
    "inpos-kurulum",
    "inpos-esleme",
    "hugin-kurulum",
    "hugin-esleme",
    "pavo-kurulum",
    "mizan-hizli-satis",
    "kasa-kurulum",
];

const LAST_UPDATE: &str = "19 Eylül 2025";

#[derive(Debug, Clone, PartialEq)]
pub struct GuideContent {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub last_update: &'static str,
    /// Raw HTML, inserted into the page as-is.
    pub body: &'static str,
}

macro_rules! guide {
    ($id:literal, $title:literal, $description:literal, $category:literal) => {
        ContentEntry::new(
            $id,
            GuideContent {
                title: $title,
                description: $description,
                category: $category,
                last_update: LAST_UPDATE,
                body: include_str!(concat!("../content/rehber/", $id, ".html")),
            },
        )
    };
}

pub fn guide_entries() -> Vec<ContentEntry<GuideContent>> {
    vec![
        guide!(
            "inpos-kurulum",
            "Inpos Kurulum Rehberi",
            "Inpos yazarkasa kurulum ve ilk ayarlar rehberi",
            "Yazarkasa Kurulum"
        ),
        guide!(
            "inpos-esleme",
            "Inpos Eşleme Rehberi",
            "Inpos yazarkasa Mizan yazılım eşleme rehberi",
            "Yazarkasa Eşleme"
        ),
        guide!(
            "hugin-kurulum",
            "Hugin Kurulum Rehberi",
            "Hugin yazarkasa kurulum ve ilk ayarlar rehberi",
            "Yazarkasa Kurulum"
        ),
        guide!(
            "hugin-esleme",
            "Hugin Eşleme Rehberi",
            "Hugin yazarkasa Mizan yazılım eşleme rehberi",
            "Yazarkasa Eşleme"
        ),
        guide!(
            "pavo-kurulum",
            "Pavo Kurulum Rehberi",
            "Pavo yazarkasa kurulum ve ilk ayarlar rehberi",
            "Yazarkasa Kurulum"
        ),
        guide!(
            "mizan-hizli-satis",
            "Mizan Hızlı Satış Kurulum Rehberi",
            "Mizan hızlı satış yazılımı kurulum rehberi",
            "Yazılım Kurulum"
        ),
        guide!(
            "kasa-kurulum",
            "Kasa Kurulum Rehberi",
            "Genel yazarkasa kurulum ve temel ayarlar rehberi",
            "Genel Kurulum"
        ),
    ]
}

pub fn content_sources() -> ContentSources {
    content_sources![GUIDES => guide_entries()]
}

/// A guide ready to be rendered.
#[derive(Debug)]
pub struct GuidePage<'a> {
    pub id: &'a str,
    pub content: &'a GuideContent,
    pub page_title: String,
}

/// Looks up the guide with the given id.
///
/// Returns [`ContentError::EntryNotFound`] if there is no such guide.
pub fn resolve<'a>(content: &'a ContentSources, id: &str) -> Result<GuidePage<'a>, ContentError> {
    let entry = content.get_source::<GuideContent>(GUIDES)?.get_entry(id)?;

    Ok(GuidePage {
        id: &entry.id,
        content: &entry.data,
        page_title: format!("{} - Mizan Kurulum Rehberi", entry.data.title),
    })
}

/// A link on the index page to one guide.
pub struct SubGuide {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Page of the guide, e.g. `/rehber/inpos-kurulum/`.
    pub url: &'static str,
}

/// A brand or product on the index page, with links to its guides.
pub struct GuideGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub sub_guides: &'static [SubGuide],
}

pub const GUIDE_GROUPS: [GuideGroup; 4] = [
    GuideGroup {
        id: "inpos",
        name: "Inpos",
        description: "Inpos yazarkasa işlemleri",
        icon: "🖥️",
        sub_guides: &[
            SubGuide {
                id: "inpos-kurulum",
                name: "Kurulum",
                description: "Inpos yazarkasa kurulum rehberi",
                url: "/rehber/inpos-kurulum/",
            },
            SubGuide {
                id: "inpos-esleme",
                name: "Eşleme",
                description: "Inpos yazarkasa eşleme işlemleri",
                url: "/rehber/inpos-esleme/",
            },
        ],
    },
    GuideGroup {
        id: "hugin",
        name: "Hugin",
        description: "Hugin yazarkasa işlemleri",
        icon: "🔧",
        sub_guides: &[
            SubGuide {
                id: "hugin-kurulum",
                name: "Kurulum",
                description: "Hugin yazarkasa kurulum rehberi",
                url: "/rehber/hugin-kurulum/",
            },
            SubGuide {
                id: "hugin-esleme",
                name: "Eşleme",
                description: "Hugin yazarkasa eşleme işlemleri",
                url: "/rehber/hugin-esleme/",
            },
        ],
    },
    GuideGroup {
        id: "pavo",
        name: "Pavo",
        description: "Pavo yazarkasa işlemleri",
        icon: "⚙️",
        sub_guides: &[SubGuide {
            id: "pavo-kurulum",
            name: "Kurulum",
            description: "Pavo yazarkasa kurulum rehberi",
            url: "/rehber/pavo-kurulum/",
        }],
    },
    GuideGroup {
        id: "mizan",
        name: "Mizan Hızlı Satış",
        description: "Mizan yazılım kurulum işlemleri",
        icon: "🚀",
        sub_guides: &[
            SubGuide {
                id: "mizan-hizli-satis",
                name: "Hızlı Satış Kurulum",
                description: "Mizan hızlı satış yazılımı kurulum",
                url: "/rehber/mizan-hizli-satis/",
            },
            SubGuide {
                id: "kasa-kurulum",
                name: "Kasa Kurulum",
                description: "Genel kasa kurulum işlemleri",
                url: "/rehber/kasa-kurulum/",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> ContentSources {
        let mut sources = content_sources();
        for source in sources.sources_mut() {
            source.init().unwrap();
        }
        sources
    }

    #[test]
    fn every_listed_guide_resolves() {
        let sources = initialized();

        for id in GUIDE_IDS {
            let page = resolve(&sources, id).unwrap();
            assert_eq!(page.id, id);
            assert!(!page.content.title.is_empty());
            assert!(!page.content.description.is_empty());
            assert!(!page.content.category.is_empty());
            assert!(!page.content.last_update.is_empty());
            assert!(!page.content.body.is_empty());
        }
    }

    #[test]
    fn registry_matches_listed_ids() {
        let entries = guide_entries();

        assert_eq!(entries.len(), GUIDE_IDS.len());
        for (entry, id) in entries.iter().zip(GUIDE_IDS) {
            assert_eq!(entry.id, id);
        }
    }

    #[test]
    fn resolves_installation_guides() {
        let sources = initialized();

        let inpos = resolve(&sources, "inpos-kurulum").unwrap();
        assert_eq!(inpos.content.title, "Inpos Kurulum Rehberi");
        assert_eq!(inpos.content.category, "Yazarkasa Kurulum");
        assert_eq!(inpos.page_title, "Inpos Kurulum Rehberi - Mizan Kurulum Rehberi");

        let kasa = resolve(&sources, "kasa-kurulum").unwrap();
        assert_eq!(kasa.content.title, "Kasa Kurulum Rehberi");
        assert_eq!(kasa.content.category, "Genel Kurulum");
    }

    #[test]
    fn unknown_guides_are_not_found() {
        let sources = initialized();

        for id in ["nonexistent-guide", "", "INPOS-KURULUM", "inpos"] {
            assert!(matches!(
                resolve(&sources, id),
                Err(ContentError::EntryNotFound { id: ref missing, .. }) if missing == id
            ));
        }
    }

    #[test]
    fn lookup_is_idempotent() {
        let sources = initialized();

        let first = resolve(&sources, "hugin-kurulum").unwrap();
        let second = resolve(&sources, "hugin-kurulum").unwrap();
        assert_eq!(first.content, second.content);
        assert_eq!(first.page_title, second.page_title);
    }

    #[test]
    fn body_markup_is_balanced() {
        for entry in guide_entries() {
            for tag in ["h1", "h2", "h3", "p", "strong", "div"] {
                let opened = entry.data.body.matches(&format!("<{}>", tag)).count()
                    + entry.data.body.matches(&format!("<{} ", tag)).count();
                let closed = entry.data.body.matches(&format!("</{}>", tag)).count();
                assert_eq!(opened, closed, "unbalanced <{}> in {}", tag, entry.id);
            }
        }
    }

    #[test]
    fn index_lists_four_groups_of_existing_guides() {
        let sources = initialized();

        assert_eq!(GUIDE_GROUPS.len(), 4);
        let names: Vec<_> = GUIDE_GROUPS.iter().map(|group| group.name).collect();
        assert_eq!(names, ["Inpos", "Hugin", "Pavo", "Mizan Hızlı Satış"]);

        for group in &GUIDE_GROUPS {
            assert!(!group.sub_guides.is_empty(), "{} has no guides", group.id);
            for sub_guide in group.sub_guides {
                assert!(resolve(&sources, sub_guide.id).is_ok());
                assert_eq!(sub_guide.url, format!("/rehber/{}/", sub_guide.id));
            }
        }
    }
}
