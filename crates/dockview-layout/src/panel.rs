use dockview_common::{PanelId, PanelKind, Size};

/// Per-panel docking options.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOptions {
    pub title: String,
    /// Size the panel takes when torn off into a floating window.
    pub detach_size: Option<Size>,
    pub moveable: bool,
    pub closeable: bool,
    /// Whether the panel may be dropped outside every frame.
    pub floatable: bool,
    /// A drawer that opens and closes instead of staying visible.
    pub persistent: bool,
}

impl PanelOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detach_size: None,
            moveable: true,
            closeable: true,
            floatable: true,
            persistent: false,
        }
    }

    pub fn detach_size(mut self, size: Size) -> Self {
        self.detach_size = Some(size);
        self
    }

    pub fn pinned(mut self) -> Self {
        self.moveable = false;
        self
    }

    pub fn docked_only(mut self) -> Self {
        self.floatable = false;
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub id: PanelId,
    pub kind: PanelKind,
    pub options: PanelOptions,
}

impl Panel {
    pub fn new(id: PanelId, kind: PanelKind, options: PanelOptions) -> Self {
        Self { id, kind, options }
    }

    pub fn title(&self) -> &str {
        &self.options.title
    }
}
