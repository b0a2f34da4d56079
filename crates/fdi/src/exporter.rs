//! Static site export.
//!
//! Writes every route as `<route>/index.html` so any static file host can
//! serve the guide with the same URLs as `fdi serve`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fdi_site::{CurrentRoute, Navigator, RouteMatch, Site, render_layout};

/// Error returned by the static exporter.
#[derive(Debug, thiserror::Error)]
pub(crate) enum BuildError {
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Missing embedded asset: {0}")]
    MissingAsset(String),
}

/// Writes the rendered site to a directory.
pub(crate) struct StaticExporter {
    site: Arc<Site>,
}

impl StaticExporter {
    pub(crate) fn new(site: Arc<Site>) -> Self {
        Self { site }
    }

    /// Export all routes, the fallback page and the embedded assets.
    ///
    /// Returns the written paths relative to `output_dir`.
    pub(crate) fn export(&self, output_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let mut written = Vec::new();
        let mut navigator = Navigator::new(Arc::clone(&self.site));

        for entry in self.site.navigation().entries() {
            navigator.navigate(&entry.path);
            let view = navigator.render();
            let relative = route_file(&entry.path);
            write_file(output_dir, &relative, view.html.as_bytes())?;
            written.push(relative);
        }

        let not_found_route = CurrentRoute::new("/404.html");
        let not_found = render_layout(
            self.site.info(),
            &self.site.navigation().sidebar(&not_found_route),
            RouteMatch::NotFound,
        );
        let relative = PathBuf::from("404.html");
        write_file(output_dir, &relative, not_found.as_bytes())?;
        written.push(relative);

        for asset in fdi_assets::iter() {
            let relative = Path::new("assets").join(&*asset);
            let content = fdi_assets::get(&asset)
                .ok_or_else(|| BuildError::MissingAsset(asset.into_owned()))?;
            write_file(output_dir, &relative, &content)?;
            written.push(relative);
        }

        tracing::info!(
            output_dir = %output_dir.display(),
            files = written.len(),
            "Static export complete"
        );
        Ok(written)
    }
}

/// Output file for a route: `/` is `index.html`, `/x` is `x/index.html`.
fn route_file(route: &str) -> PathBuf {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

fn write_file(output_dir: &Path, relative: &Path, content: &[u8]) -> Result<(), BuildError> {
    let path = output_dir.join(relative);
    let io_error = |source| BuildError::Io {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(&path, content).map_err(io_error)?;
    tracing::debug!(path = %relative.display(), "Wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use fdi_site::SiteInfo;
    use pretty_assertions::assert_eq;

    use super::*;

    fn export_to_temp() -> (tempfile::TempDir, Vec<PathBuf>) {
        let temp_dir = tempfile::tempdir().unwrap();
        let site = Arc::new(Site::guide(SiteInfo::default()).unwrap());
        let written = StaticExporter::new(site).export(temp_dir.path()).unwrap();
        (temp_dir, written)
    }

    #[test]
    fn test_route_file() {
        assert_eq!(route_file("/"), PathBuf::from("index.html"));
        assert_eq!(
            route_file("/api-security"),
            PathBuf::from("api-security/index.html")
        );
    }

    #[test]
    fn test_export_writes_one_file_per_route() {
        let (temp_dir, written) = export_to_temp();

        for route in [
            "index.html",
            "decision-framework/index.html",
            "secure-architecture/index.html",
            "input-validation/index.html",
            "api-security/index.html",
            "data-pipeline/index.html",
            "monitoring-systems/index.html",
            "summary/index.html",
        ] {
            assert!(temp_dir.path().join(route).is_file(), "missing {route}");
        }
        // 8 routes, 404 page, stylesheet, diagram
        assert_eq!(written.len(), 11);
    }

    #[test]
    fn test_export_highlights_each_route() {
        let (temp_dir, _) = export_to_temp();

        let html = fs::read_to_string(temp_dir.path().join("input-validation/index.html")).unwrap();

        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains(r#"<a href="/input-validation" class="nav-link active""#));
        assert!(html.contains("language-typescript"));
    }

    #[test]
    fn test_export_writes_fallback_page() {
        let (temp_dir, _) = export_to_temp();

        let html = fs::read_to_string(temp_dir.path().join("404.html")).unwrap();

        assert!(html.contains("Page not found"));
        assert!(!html.contains("nav-link active"));
    }

    #[test]
    fn test_export_writes_assets() {
        let (temp_dir, _) = export_to_temp();

        assert!(temp_dir.path().join("assets/styles.css").is_file());
        assert!(
            temp_dir
                .path()
                .join("assets/images/microservices-logical.svg")
                .is_file()
        );
    }

    #[test]
    fn test_export_reports_unwritable_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let site = Arc::new(Site::guide(SiteInfo::default()).unwrap());

        let err = StaticExporter::new(site).export(&blocker).unwrap_err();

        assert!(matches!(err, BuildError::Io { .. }));
    }
}
