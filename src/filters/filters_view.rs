use crate::filters::{
    FilterEdit, FilterState, FilterStateSynchronizer, QueryString, ResizeListeners,
    ResizeSubscription, ViewportClass,
};
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

/// Container the filters panel is rendered in.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FiltersPresentation {
    /// Panel next to the listings (wide viewports).
    Inline,
    /// Dismissible overlay (narrow viewports).
    Overlay { open: bool },
}

impl From<ViewportClass> for FiltersPresentation {
    fn from(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Wide => FiltersPresentation::Inline,
            ViewportClass::Narrow => FiltersPresentation::Overlay { open: false },
        }
    }
}

/// Filters panel: one synchronizer instance hosted in a viewport-dependent container.
#[derive(Debug)]
pub struct FiltersView {
    synchronizer: FilterStateSynchronizer,
    viewport: ViewportClass,
    presentation: FiltersPresentation,
}

impl FiltersView {
    pub fn new(query: QueryString, viewport: ViewportClass) -> Self {
        Self {
            synchronizer: FilterStateSynchronizer::new(query),
            viewport,
            presentation: viewport.into(),
        }
    }

    /// Subscribes the view to viewport resizes. The view stops receiving updates once the returned
    /// handle is dropped.
    pub fn mount(view: Rc<RefCell<Self>>, listeners: &ResizeListeners) -> MountedFiltersView {
        let subscription = {
            let view = view.clone();
            listeners.subscribe(move |width| view.borrow_mut().resize(width))
        };

        MountedFiltersView {
            view,
            _subscription: subscription,
        }
    }

    /// Re-classifies the viewport, crossing the threshold swaps the container but keeps filters.
    pub fn resize(&mut self, width: u32) {
        let viewport = ViewportClass::from_width(width);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.presentation = viewport.into();
        }
    }

    pub fn open_overlay(&mut self) {
        if let FiltersPresentation::Overlay { open } = &mut self.presentation {
            *open = true;
        }
    }

    pub fn close_overlay(&mut self) {
        if let FiltersPresentation::Overlay { open } = &mut self.presentation {
            *open = false;
        }
    }

    pub fn edit(&mut self, edit: FilterEdit) {
        self.synchronizer.edit(edit);
    }

    /// Commits pending filters, on narrow viewports the overlay closes afterwards.
    pub fn apply(&mut self) -> QueryString {
        let query = self.synchronizer.apply().clone();
        if self.viewport == ViewportClass::Narrow {
            self.close_overlay();
        }
        query
    }

    pub fn reset(&mut self) -> QueryString {
        self.synchronizer.reset().clone()
    }

    pub fn navigate(&mut self, query: QueryString) {
        self.synchronizer.navigate(query);
    }

    pub fn filters(&self) -> &FilterState {
        self.synchronizer.pending()
    }

    pub fn query(&self) -> &QueryString {
        self.synchronizer.committed()
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn presentation(&self) -> FiltersPresentation {
        self.presentation
    }
}

/// Filters view subscribed to viewport resizes.
pub struct MountedFiltersView {
    view: Rc<RefCell<FiltersView>>,
    _subscription: ResizeSubscription,
}

impl MountedFiltersView {
    pub fn view(&self) -> &Rc<RefCell<FiltersView>> {
        &self.view
    }
}
