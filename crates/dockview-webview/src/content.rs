//! Panel documents served from disk under `dockview://localhost/`.
//!
//! `--assets <dir>` points the app at a directory of panel pages. Every
//! wrapper webview can load them by URL, so an iframe or web-view panel can
//! show a bundled page without a local HTTP server.

use std::io;
use std::path::{Path, PathBuf};

/// Scheme of the custom protocol.
pub const SCHEME: &str = "dockview";

/// URL prefixes a panel request can arrive with. WebView2 rewrites custom
/// schemes to `http://<scheme>.localhost/`.
const ORIGINS: &[&str] = &["dockview://localhost/", "http://dockview.localhost/"];

/// Served when a request names the root.
const INDEX: &str = "index.html";

const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("svg", "image/svg+xml"),
    ("png", "image/png"),
    ("wasm", "application/wasm"),
];

/// One served document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub mime: &'static str,
    pub body: Vec<u8>,
}

/// Why a panel request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The URI is not a `dockview://localhost/` request.
    ForeignOrigin,
    /// The path leaves the asset root.
    OutsideRoot,
    NotFound,
}

impl AssetError {
    pub fn status(&self) -> u16 {
        match self {
            Self::ForeignOrigin | Self::OutsideRoot => 403,
            Self::NotFound => 404,
        }
    }
}

/// The directory panel pages are served from. The root is canonical, so
/// every lookup can be checked against it.
#[derive(Debug, Clone)]
pub struct PanelAssets {
    root: PathBuf,
}

impl PanelAssets {
    /// Fails when `dir` does not exist.
    pub fn open(dir: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            root: std::fs::canonicalize(dir)?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The URL a panel loads to show `path` from the asset root.
    pub fn url(path: &str) -> String {
        format!("{SCHEME}://localhost/{}", path.trim_start_matches('/'))
    }

    /// Answer a request `uri` with the file it names.
    pub fn lookup(&self, uri: &str) -> Result<Asset, AssetError> {
        let relative = relative_path(uri).ok_or(AssetError::ForeignOrigin)?;
        let requested = self.root.join(relative);
        let file = std::fs::canonicalize(&requested).map_err(|_| AssetError::NotFound)?;
        if !file.starts_with(&self.root) {
            return Err(AssetError::OutsideRoot);
        }
        let body = std::fs::read(&file).map_err(|_| AssetError::NotFound)?;
        Ok(Asset {
            mime: mime_of(&file),
            body,
        })
    }
}

/// The path of `uri` below the asset root, without query or fragment.
fn relative_path(uri: &str) -> Option<&str> {
    let rest = ORIGINS.iter().find_map(|origin| uri.strip_prefix(origin))?;
    let path = rest.split(['?', '#']).next().unwrap_or_default();
    Some(if path.is_empty() { INDEX } else { path })
}

fn mime_of(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    MIME_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or("application/octet-stream", |&(_, mime)| mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("site/docs")).unwrap();
        std::fs::write(dir.path().join("site/index.html"), "<p>home</p>").unwrap();
        std::fs::write(dir.path().join("site/docs/app.JS"), "run()").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "x").unwrap();
        dir
    }

    #[test]
    fn serves_panel_page_with_mime() {
        let dir = site();
        let assets = PanelAssets::open(dir.path().join("site")).unwrap();

        let page = assets
            .lookup("dockview://localhost/index.html?tab=2#top")
            .unwrap();
        assert_eq!(page.mime, "text/html");
        assert_eq!(page.body, b"<p>home</p>");

        let script = assets
            .lookup("http://dockview.localhost/docs/app.JS")
            .unwrap();
        assert_eq!(script.mime, "application/javascript");
    }

    #[test]
    fn root_request_serves_index() {
        let dir = site();
        let assets = PanelAssets::open(dir.path().join("site")).unwrap();
        assert_eq!(
            assets.lookup("dockview://localhost/").unwrap().body,
            b"<p>home</p>"
        );
    }

    #[test]
    fn refuses_paths_outside_root() {
        let dir = site();
        let assets = PanelAssets::open(dir.path().join("site")).unwrap();
        assert_eq!(
            assets.lookup("dockview://localhost/../secret.txt"),
            Err(AssetError::OutsideRoot)
        );
        assert_eq!(
            assets.lookup("dockview://localhost/docs/../../secret.txt"),
            Err(AssetError::OutsideRoot)
        );
    }

    #[test]
    fn refuses_other_origins_and_missing_files() {
        let dir = site();
        let assets = PanelAssets::open(dir.path().join("site")).unwrap();
        let foreign = assets.lookup("https://elsewhere/index.html").unwrap_err();
        assert_eq!(foreign, AssetError::ForeignOrigin);
        assert_eq!(foreign.status(), 403);
        let missing = assets.lookup("dockview://localhost/nope.html").unwrap_err();
        assert_eq!(missing.status(), 404);
    }

    #[test]
    fn open_fails_for_missing_directory() {
        let dir = site();
        assert!(PanelAssets::open(dir.path().join("absent")).is_err());
    }

    #[test]
    fn url_points_into_the_scheme() {
        assert_eq!(PanelAssets::url("index.html"), "dockview://localhost/index.html");
        assert_eq!(PanelAssets::url("/docs/a.html"), "dockview://localhost/docs/a.html");
        assert_eq!(mime_of(Path::new("data.bin")), "application/octet-stream");
    }
}
