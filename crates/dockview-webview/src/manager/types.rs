/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Page shown until the wrapper sets content.
    pub initial_html: String,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Dockview/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
            autoplay: false,
            initial_html: "<html><body></body></html>".to_string(),
        }
    }
}

impl WebViewConfig {
    /// A transparent surface with no page chrome, used for drag previews.
    pub fn overlay() -> Self {
        Self {
            transparent: true,
            devtools: false,
            clipboard: false,
            ..Default::default()
        }
    }

    pub fn with_initial_html(mut self, html: impl Into<String>) -> Self {
        self.initial_html = html.into();
        self
    }
}
