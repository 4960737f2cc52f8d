//! Record-to-view shaping for portal containers.
//!
//! ARCHITECTURE
//! ============
//! Rendering is split in two. This module turns records into plain view-models
//! held in named `Container`s (pure, natively testable). The Leptos components
//! in `pages` are a thin adapter that draws those view-models, always as text
//! nodes, so profile or fixture text can never inject markup.
//!
//! Visibility is a flag on each rendered item. Filtering and search flip flags
//! and never drop items.


pub mod views;

/// A record shape that can be drawn into a container.
pub trait Render {
    type View: Clone + PartialEq;

    /// Stable key for keyed list rendering.
    fn key(&self) -> String;

    fn to_view(&self) -> Self::View;

    /// Text the search box matches against. Empty for non-searchable shapes.
    fn search_text(&self) -> String {
        String::new()
    }
}

impl<R: Render + ?Sized> Render for &R {
    type View = R::View;

    fn key(&self) -> String {
        (**self).key()
    }

    fn to_view(&self) -> Self::View {
        (**self).to_view()
    }

    fn search_text(&self) -> String {
        (**self).search_text()
    }
}

/// One drawn record.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedItem<V> {
    pub key: String,
    pub view: V,
    /// Lowercased search text.
    pub search_text: String,
    pub visible: bool,
}

/// Named, ordered list of rendered items.
#[derive(Clone, Debug, PartialEq)]
pub struct Container<V> {
    name: &'static str,
    items: Vec<RenderedItem<V>>,
}

impl<V> Container<V> {
    pub fn new(name: &'static str) -> Self {
        Self { name, items: Vec::new() }
    }

    /// DOM id the adapter gives this container.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replace all content with `records`, in order, all visible.
    pub fn render<I>(&mut self, records: I)
    where
        I: IntoIterator,
        I::Item: Render<View = V>,
    {
        self.items.clear();
        self.items.extend(records.into_iter().map(|record| RenderedItem {
            key: record.key(),
            view: record.to_view(),
            search_text: record.search_text().to_lowercase(),
            visible: true,
        }));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[RenderedItem<V>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }

    /// Views of the currently visible items, in order.
    pub fn visible(&self) -> impl Iterator<Item = &V> {
        self.items.iter().filter(|item| item.visible).map(|item| &item.view)
    }

    /// Owned snapshot of the visible items, for keyed list rendering.
    pub fn visible_items(&self) -> Vec<RenderedItem<V>>
    where
        V: Clone,
    {
        self.items.iter().filter(|item| item.visible).cloned().collect()
    }

    /// Re-evaluate every item's visibility with `keep`.
    pub fn set_visibility(&mut self, keep: impl Fn(&RenderedItem<V>) -> bool) {
        for item in &mut self.items {
            item.visible = keep(item);
        }
    }

    /// Case-insensitive substring match on search text. Empty query shows all.
    pub fn apply_search(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.set_visibility(|item| needle.is_empty() || item.search_text.contains(&needle));
    }

    pub fn show_all(&mut self) {
        self.set_visibility(|_| true);
    }
}
