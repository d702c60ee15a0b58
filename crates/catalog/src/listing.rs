//! Product listing: loader + search term + injected transport.

use vitrine_core::{Product, ProductKey};

use crate::label::count_label;
use crate::loader::{CatalogLoader, CatalogState};
use crate::search::{SearchFilter, matches};
use crate::transport::Transport;

/// Shown in place of the list when the catalog could not be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Problemas ao carregar a lista!";

/// One product display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    pub key: ProductKey,
    pub product: &'a Product,
}

/// Everything the UI needs to draw the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView<'a> {
    /// Load not settled yet; nothing is shown.
    Pending,
    /// Load failed; only the message is shown.
    Failed { message: &'static str },
    Products {
        cards: Vec<ProductCard<'a>>,
        count_label: String,
    },
}

impl ListingView<'_> {
    pub fn cards(&self) -> &[ProductCard<'_>] {
        match self {
            ListingView::Products { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn count_label(&self) -> Option<&str> {
        match self {
            ListingView::Products { count_label, .. } => Some(count_label.as_str()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            ListingView::Failed { message } => Some(*message),
            _ => None,
        }
    }
}

/// Derive the view from the catalog state and the submitted term.
pub fn derive_view<'a>(state: &'a CatalogState, term: &str) -> ListingView<'a> {
    match state {
        CatalogState::Idle | CatalogState::Loading => ListingView::Pending,
        CatalogState::Failed(_) => ListingView::Failed {
            message: FETCH_ERROR_MESSAGE,
        },
        CatalogState::Loaded(products) => {
            // Keys come from the position in the full catalog so they survive filtering.
            let cards: Vec<ProductCard<'a>> = products
                .iter()
                .enumerate()
                .filter(|(_, product)| matches(product, term))
                .map(|(position, product)| ProductCard {
                    key: product.key(position),
                    product,
                })
                .collect();
            let count_label = count_label(cards.len());

            ListingView::Products { cards, count_label }
        }
    }
}

/// The composed feature.
///
/// Mounting performs the one catalog read; submitting a term only re-derives.
pub struct ProductListing<T> {
    transport: T,
    loader: CatalogLoader,
    search: SearchFilter,
}

impl<T: Transport> ProductListing<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            loader: CatalogLoader::new(),
            search: SearchFilter::new(),
        }
    }

    /// Load the catalog (at most once per listing) and return the settled state.
    pub async fn mount(&mut self) -> &CatalogState {
        self.loader.load(&self.transport).await
    }

    pub fn unmount(&mut self) {
        self.loader.unmount();
    }

    /// Replace the search term. Never touches the transport.
    pub fn submit(&mut self, term: impl Into<String>) {
        self.search.submit(term);
    }

    pub fn state(&self) -> &CatalogState {
        self.loader.state()
    }

    pub fn term(&self) -> &str {
        self.search.term()
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.search.visible(self.loader.state())
    }

    /// Count label for the visible set; `None` unless the catalog is loaded.
    pub fn count_label(&self) -> Option<String> {
        self.state()
            .is_loaded()
            .then(|| count_label(self.visible().len()))
    }

    pub fn view(&self) -> ListingView<'_> {
        derive_view(self.loader.state(), self.search.term())
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
