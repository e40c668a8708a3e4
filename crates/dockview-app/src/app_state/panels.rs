//! Panel creation and the docker-to-wrapper event pump.

use dockview_common::{PanelHost, PanelId, PanelKind, Rect};
use dockview_layout::{PanelOptions, Placement};
use dockview_webview::{
    AbsoluteContainer, Content, EmbeddedContent, FrameRequest, IFrameContainer, WebViewConfig,
    WebViewContainer, WebViewHandle,
};

use super::core::DockviewApp;

impl DockviewApp {
    /// Add a panel to the docker and give it embedded content of `kind`.
    pub(super) fn open_panel(
        &mut self,
        kind: PanelKind,
        options: PanelOptions,
        placement: Placement,
        content: Content,
    ) -> Option<PanelId> {
        let title = options.title.clone();
        let panel = match self.docker.add_panel(kind, options, placement) {
            Ok(panel) => panel,
            Err(e) => {
                tracing::warn!(%title, error = %e, "failed to add panel");
                return None;
            }
        };
        self.create_wrapper(panel, kind, content);
        self.pump_docker_events();
        Some(panel)
    }

    fn create_wrapper(&mut self, panel: PanelId, kind: PanelKind, content: Content) {
        let (Some(window), Some(manager)) = (&self.window, &self.webviews) else {
            tracing::warn!(%panel, "no window yet, panel has no content");
            return;
        };
        let bounds = self
            .docker
            .container_bounds(panel)
            .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        let handle = match manager.create(panel, window.as_ref(), bounds, WebViewConfig::default())
        {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(%panel, error = %e, "failed to create webview");
                return;
            }
        };

        let docker = &self.docker;
        self.frames.insert_with(panel, |bus, listener| {
            build_wrapper(kind, content, panel, handle, bus, listener, docker)
        });
    }

    /// Deliver queued docker events to the wrappers and act on what they
    /// ask for.
    pub(super) fn pump_docker_events(&mut self) {
        // A focus request changes the layout, which queues more events.
        for _ in 0..4 {
            let events = self.docker.drain_events();
            if events.is_empty() {
                return;
            }
            let requests = self.frames.dispatch_all(&self.docker, events);
            self.apply_requests(requests);
        }
    }

    pub(super) fn apply_requests(&mut self, requests: Vec<FrameRequest>) {
        for request in requests {
            if let FrameRequest::Focus(frame) = request {
                if let Err(e) = self.docker.focus_frame(frame) {
                    tracing::debug!(%frame, error = %e, "focus request dropped");
                }
            }
        }
    }

    /// Close the focused panel, if it allows closing.
    pub(super) fn close_focused_panel(&mut self) {
        let Some(panel) = self.docker.focused_panel() else {
            return;
        };
        match self.docker.close_panel(panel) {
            Ok(()) => self.pump_docker_events(),
            Err(e) => tracing::info!(%panel, error = %e, "panel not closed"),
        }
    }

    /// Open or close every drawer panel.
    pub(super) fn toggle_drawers(&mut self) {
        let drawers: Vec<PanelId> = self
            .docker
            .panel_ids()
            .into_iter()
            .filter(|&id| self.docker.panel(id).is_some_and(|p| p.options.persistent))
            .collect();
        for panel in drawers {
            if let Err(e) = self.docker.toggle_persistent(panel) {
                tracing::debug!(%panel, error = %e, "drawer toggle failed");
            }
        }
        self.pump_docker_events();
    }
}

fn build_wrapper(
    kind: PanelKind,
    content: Content,
    panel: PanelId,
    handle: WebViewHandle,
    bus: &mut dockview_common::PanelEventBus,
    listener: dockview_common::ListenerId,
    host: &dyn PanelHost,
) -> Box<dyn EmbeddedContent<WebViewHandle>> {
    match kind {
        PanelKind::Absolute => {
            let mut wrapper = AbsoluteContainer::new(panel, handle, bus, listener);
            let markup = match content {
                Content::Html(html) => html,
                Content::Url(url) => {
                    tracing::warn!(%panel, %url, "absolute panels take markup, showing the URL");
                    format!("<pre>{url}</pre>")
                }
            };
            wrapper.set_content(markup, host);
            Box::new(wrapper)
        }
        PanelKind::IFrame => {
            let mut wrapper = IFrameContainer::new(panel, handle, bus, listener);
            match content {
                Content::Url(url) => wrapper.open_url(url, host),
                Content::Html(html) => wrapper.open_html(html, host),
            }
            Box::new(wrapper)
        }
        PanelKind::WebView => {
            let mut wrapper = WebViewContainer::new(panel, handle, bus, listener);
            wrapper.on_before_append(|handle: &mut WebViewHandle| {
                tracing::debug!(panel = %handle.panel(), "loading web view content");
            });
            wrapper.on_loaded(move |url| {
                tracing::info!(%panel, %url, "web view loaded");
            });
            match content {
                Content::Url(url) => wrapper.open_url(url, host),
                Content::Html(html) => wrapper.open_html(html, host),
            }
            Box::new(wrapper)
        }
    }
}
