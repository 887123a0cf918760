use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::{
    BuildOptions, BuildOutput,
    build::metadata::{PageOutput, StaticAssetOutput},
    content::ContentSources,
    errors::BuildError,
    logging::{banner, elapsed},
    route::{DynamicRouteContext, FullRoute, PageContext, RenderResult},
};

pub mod metadata;
pub mod options;

/// A page to render: its route, and the parameter value on parameter routes.
type PageJob<'r> = (&'r dyn FullRoute, Option<String>);

pub fn execute_build(
    routes: &[&dyn FullRoute],
    content_sources: &mut ContentSources,
    options: &BuildOptions,
) -> Result<BuildOutput, Box<dyn Error>> {
    let mut output = BuildOutput::new(Instant::now());

    if options.clean_output_dir && options.output_dir.exists() {
        debug!(target: "build", "removing {}", options.output_dir.display());
        fs::remove_dir_all(&options.output_dir)?;
    }

    banner("loading content");
    for source in content_sources.sources_mut() {
        let started = Instant::now();
        source.init()?;
        info!(target: "content", "{} ({} entries) {}", source.get_name(), source.len(), elapsed(started.elapsed()));
    }

    banner("rendering pages");
    let started = Instant::now();
    let content: &ContentSources = content_sources;

    output.pages = list_pages(routes, content)
        .par_iter()
        .map(|(route, param)| render_page(*route, param.as_deref(), content, options))
        .collect::<Result<Vec<_>, BuildError>>()?;

    info!(target: "pages", "{}", format!("{} pages in {}", output.pages.len(), elapsed(started.elapsed())).bold());

    if options.static_dir.is_dir() {
        banner("copying static files");
        copy_dir(&options.static_dir, &options.output_dir, &mut output.static_files)?;
        info!(target: "static", "{} files", output.static_files.len());
    } else {
        warn!(target: "static", "{} is not a directory, no static files copied", options.static_dir.display());
    }

    info!(target: "build", "{}", format!("done in {}", elapsed(output.start_time.elapsed())).bold());

    Ok(output)
}

fn list_pages<'r>(routes: &[&'r dyn FullRoute], content: &ContentSources) -> Vec<PageJob<'r>> {
    let mut jobs = Vec::new();

    for &route in routes {
        let pattern = route.pattern();
        if !pattern.is_dynamic() {
            jobs.push((route, None));
            continue;
        }

        let values = route.pages_internal(&DynamicRouteContext { content });
        if values.is_empty() {
            warn!(target: "pages", "{} has no pages to generate", pattern.raw().bold());
        }
        jobs.extend(values.into_iter().map(|value| (route, Some(value))));
    }

    jobs
}

fn render_page(
    route: &dyn FullRoute,
    param: Option<&str>,
    content: &ContentSources,
    options: &BuildOptions,
) -> Result<PageOutput, BuildError> {
    let started = Instant::now();
    let pattern = route.pattern();

    if let Some(value) = param
        && !is_path_segment(value)
    {
        return Err(BuildError::InvalidParam {
            route: pattern.raw(),
            value: value.to_string(),
        });
    }

    let url = param.map_or_else(|| route.url(), |value| route.page_url(value));
    let file_path = pattern.file_path(param, &options.output_dir);
    let ctx = PageContext::new(content, &url, options.base_url.as_deref(), param);

    let html = match route.render_internal(&ctx) {
        RenderResult::Text(html) => html,
        RenderResult::Err(err) => {
            return Err(BuildError::RenderFailed {
                route: pattern.raw(),
                url,
                message: err.to_string(),
            });
        }
    };

    write_page(&file_path, &html).map_err(|source| BuildError::WriteFailed {
        path: file_path.clone(),
        source,
    })?;

    info!(target: "pages", "{} {} {}", url, file_path.display().to_string().dimmed(), elapsed(started.elapsed()));

    Ok(PageOutput {
        route: pattern.raw(),
        url,
        file_path,
        param: param.map(str::to_string),
    })
}

/// Parameter values become directory names, so they must stay inside their route's directory.
fn is_path_segment(value: &str) -> bool {
    !value.is_empty() && value != "." && value != ".." && !value.contains(['/', '\\'])
}

fn write_page(file_path: &Path, html: &str) -> io::Result<()> {
    if let Some(dir) = file_path.parent() {
        fs::create_dir_all(dir)?;
    }

    fs::write(file_path, html)
}

fn copy_dir(from: &Path, to: &Path, copied: &mut Vec<StaticAssetOutput>) -> io::Result<()> {
    fs::create_dir_all(to)?;

    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let destination = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &destination, copied)?;
        } else {
            fs::copy(entry.path(), &destination)?;
            copied.push(StaticAssetOutput {
                source: entry.path(),
                destination,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::ContentEntry,
        content_sources,
        errors::ContentError,
        route::{Route, prelude::route},
    };
    use tempfile::tempdir;

    #[route("/")]
    struct Home;

    impl Route for Home {
        fn render(&self, _ctx: &PageContext) -> impl Into<RenderResult> {
            "<h1>Rehberler</h1>"
        }
    }

    #[route("/404.html")]
    struct Missing;

    impl Route for Missing {
        fn render(&self, _ctx: &PageContext) -> impl Into<RenderResult> {
            "<h1>404</h1>"
        }
    }

    #[route("/rehber/[guide]")]
    struct Guide {
        ids: Vec<&'static str>,
    }

    impl Route for Guide {
        fn pages(&self, _ctx: &DynamicRouteContext) -> Vec<String> {
            self.ids.iter().map(|id| id.to_string()).collect()
        }

        fn render(&self, ctx: &PageContext) -> impl Into<RenderResult> {
            ctx.content
                .get_source::<&'static str>("guides")
                .and_then(|source| source.get_entry(ctx.param().unwrap_or_default()))
                .map(|entry| format!("<h1>{}</h1>", entry.data))
        }
    }

    fn guides() -> ContentSources {
        content_sources![
            "guides" => vec![
                ContentEntry::new("inpos-kurulum", "Inpos Kurulum Rehberi"),
                ContentEntry::new("kasa-kurulum", "Kasa Kurulum Rehberi")
            ]
        ]
    }

    fn options(output_dir: &Path) -> BuildOptions {
        BuildOptions {
            output_dir: output_dir.to_path_buf(),
            static_dir: output_dir.join("does-not-exist"),
            ..Default::default()
        }
    }

    #[test]
    fn builds_static_and_parameter_routes() {
        let dist = tempdir().unwrap();
        let guide = Guide {
            ids: vec!["inpos-kurulum", "kasa-kurulum"],
        };

        let output = execute_build(&[&Home, &guide, &Missing], &mut guides(), &options(dist.path())).unwrap();

        let urls: Vec<_> = output.pages.iter().map(|page| page.url.as_str()).collect();
        assert_eq!(urls, ["/", "/rehber/inpos-kurulum/", "/rehber/kasa-kurulum/", "/404.html"]);
        assert_eq!(
            fs::read_to_string(dist.path().join("rehber/kasa-kurulum/index.html")).unwrap(),
            "<h1>Kasa Kurulum Rehberi</h1>"
        );
        assert!(dist.path().join("index.html").exists());
        assert!(dist.path().join("404.html").exists());

        let page = output.resolve("/rehber/inpos-kurulum").unwrap();
        assert_eq!(page.route, "/rehber/[guide]");
        assert_eq!(page.param.as_deref(), Some("inpos-kurulum"));
        assert!(output.resolve("/rehber/nonexistent-guide").is_err());
    }

    #[test]
    fn missing_entries_fail_the_build() {
        let dist = tempdir().unwrap();
        let guide = Guide {
            ids: vec!["inpos-kurulum", "nonexistent-guide"],
        };

        let err = execute_build(&[&guide], &mut guides(), &options(dist.path())).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("/rehber/nonexistent-guide/"), "{}", message);
        assert!(message.contains("Entry `nonexistent-guide` not found"), "{}", message);
    }

    #[test]
    fn params_must_be_single_segments() {
        for id in ["", "..", "kasa/kurulum"] {
            let dist = tempdir().unwrap();
            let guide = Guide { ids: vec![id] };

            let err = execute_build(&[&guide], &mut guides(), &options(dist.path())).unwrap_err();

            assert!(
                matches!(err.downcast_ref::<BuildError>(), Some(BuildError::InvalidParam { value, .. }) if value == id),
                "{id:?} was accepted"
            );
        }
    }

    #[test]
    fn duplicate_entries_fail_before_rendering() {
        let dist = tempdir().unwrap();
        let mut sources = content_sources![
            "guides" => vec![
                ContentEntry::new("pavo-kurulum", "Pavo"),
                ContentEntry::new("pavo-kurulum", "Pavo")
            ]
        ];

        let err = execute_build(&[&Home], &mut sources, &options(dist.path())).unwrap_err();

        assert!(matches!(err.downcast_ref::<ContentError>(), Some(ContentError::DuplicateEntry { .. })));
        assert!(!dist.path().join("index.html").exists());
    }

    #[test]
    fn parameter_route_without_pages_generates_nothing() {
        let dist = tempdir().unwrap();
        let guide = Guide { ids: vec![] };

        let output = execute_build(&[&guide], &mut guides(), &options(dist.path())).unwrap();

        assert!(output.pages.is_empty());
    }

    #[test]
    fn copies_static_files() {
        let dist = tempdir().unwrap();
        let static_dir = tempdir().unwrap();
        fs::create_dir_all(static_dir.path().join("css")).unwrap();
        fs::write(static_dir.path().join("css/styles.css"), "body{}").unwrap();

        let output = execute_build(
            &[&Home],
            &mut guides(),
            &BuildOptions {
                static_dir: static_dir.path().to_path_buf(),
                ..options(dist.path())
            },
        )
        .unwrap();

        assert_eq!(
            output.static_files,
            [StaticAssetOutput {
                source: static_dir.path().join("css/styles.css"),
                destination: dist.path().join("css/styles.css"),
            }]
        );
        assert_eq!(fs::read_to_string(dist.path().join("css/styles.css")).unwrap(), "body{}");
    }

    #[test]
    fn cleans_output_directory() {
        let dist = tempdir().unwrap();
        fs::write(dist.path().join("stale.html"), "old").unwrap();

        execute_build(&[&Home], &mut guides(), &options(dist.path())).unwrap();

        assert!(!dist.path().join("stale.html").exists());
        assert!(dist.path().join("index.html").exists());
    }

    #[test]
    fn source_not_found_is_reported() {
        let dist = tempdir().unwrap();
        let guide = Guide {
            ids: vec!["kasa-kurulum"],
        };

        let err = execute_build(&[&guide], &mut content_sources![], &options(dist.path())).unwrap_err();

        assert!(err.to_string().contains("Content source `guides` does not exist"));
    }
}
