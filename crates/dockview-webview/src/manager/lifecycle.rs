use std::borrow::Cow;
use std::sync::Arc;

use dockview_common::{PanelId, Rect};
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{PanelAssets, SCHEME};
use crate::ipc::IPC_INIT_SCRIPT;

use super::bounds::to_wry_rect;
use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a hidden child WebView of `window` for `panel`, positioned at
    /// `bounds` relative to the window's content area.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        panel: PanelId,
        window: &W,
        bounds: Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(&bounds))
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_visible(false)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_html(&config.initial_html);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), panel);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), panel);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events), panel);
        builder = self.attach_custom_protocol(builder);

        let webview = builder.build_as_child(window)?;
        debug!(%panel, "webview created");

        Ok(WebViewHandle { webview, panel })
    }

    /// Serve `dockview://` requests from `assets`.
    pub fn set_assets(&mut self, assets: PanelAssets) {
        self.assets = Some(Arc::new(assets));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(assets) = &self.assets else {
            return builder;
        };
        let assets = Arc::clone(assets);
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            protocol_response(&assets, &request.uri().to_string())
        })
    }
}

/// Answer one custom-protocol request.
pub(crate) fn protocol_response(
    assets: &PanelAssets,
    uri: &str,
) -> Response<Cow<'static, [u8]>> {
    let response = match assets.lookup(uri) {
        Ok(asset) => Response::builder()
            .status(200)
            .header("Content-Type", asset.mime)
            .header("Access-Control-Allow-Origin", "dockview://localhost")
            .body(Cow::from(asset.body)),
        Err(e) => {
            warn!(%uri, status = e.status(), "panel asset refused: {e:?}");
            Response::builder()
                .status(e.status())
                .body(Cow::from(Vec::new()))
        }
    };
    response.unwrap_or_else(|e| {
        warn!(error = %e, "custom protocol: bad response");
        let mut fallback = Response::new(Cow::from(Vec::new()));
        *fallback.status_mut() = wry::http::StatusCode::INTERNAL_SERVER_ERROR;
        fallback
    })
}
