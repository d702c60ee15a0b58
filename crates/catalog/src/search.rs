//! Search filter over the loaded catalog.

use vitrine_core::Product;

use crate::loader::CatalogState;

/// Whether `product` is visible under `term`.
///
/// Literal, case-sensitive substring match on the title. The empty term
/// matches everything.
pub fn matches(product: &Product, term: &str) -> bool {
    product.title().contains(term)
}

/// Products visible under `term`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, term)).collect()
}

/// The submitted search term.
///
/// The term changes only through [`SearchFilter::submit`]; the visible set is
/// recomputed from it on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// True when a non-empty term narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    /// Replace the term verbatim. An empty string clears the filter.
    pub fn submit(&mut self, term: impl Into<String>) {
        self.term = term.into();
        tracing::debug!(term = %self.term, "search term submitted");
    }

    /// Visible products for `state`; empty unless the catalog is loaded.
    pub fn visible<'a>(&self, state: &'a CatalogState) -> Vec<&'a Product> {
        filter_products(state.products(), &self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{catalog_with, generated_products, watch_overrides};
    use proptest::prelude::*;
    use vitrine_core::FetchFailure;

    fn shown_titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn watch_term_finds_both_overrides() {
        let state = CatalogState::Loaded(catalog_with(10, &watch_overrides()));
        assert_eq!(state.products().len(), 12);

        let mut filter = SearchFilter::new();
        filter.submit("Watch");
        assert_eq!(
            shown_titles(&filter.visible(&state)),
            vec!["Best Watch Ever", "Second Best Watch Ever"]
        );
    }

    #[test]
    fn clearing_the_term_restores_generated_plus_override() {
        let state = CatalogState::Loaded(catalog_with(10, &watch_overrides()[..1]));
        let mut filter = SearchFilter::new();

        filter.submit("Watch");
        assert_eq!(filter.visible(&state).len(), 1);

        filter.submit("");
        assert!(!filter.is_active());
        assert_eq!(filter.visible(&state).len(), 11);
    }

    #[test]
    fn match_is_case_sensitive_and_literal() {
        let products = vec![
            Product::new("Best Watch Ever"),
            Product::new("stopwatch"),
            Product::new("Watch  Strap"),
        ];

        assert_eq!(shown_titles(&filter_products(&products, "watch")), vec!["stopwatch"]);
        assert_eq!(
            shown_titles(&filter_products(&products, "Watch ")),
            vec!["Best Watch Ever", "Watch  Strap"]
        );
        assert_eq!(shown_titles(&filter_products(&products, "Watch  ")), vec!["Watch  Strap"]);
        assert!(filter_products(&products, ".*").is_empty());
    }

    #[test]
    fn non_loaded_states_show_nothing() {
        let mut filter = SearchFilter::new();
        assert!(filter.visible(&CatalogState::Idle).is_empty());
        assert!(filter.visible(&CatalogState::Loading).is_empty());

        filter.submit("Product");
        let failed = CatalogState::Failed(FetchFailure::new("boom"));
        assert!(filter.visible(&failed).is_empty());
    }

    #[test]
    fn submit_replaces_rather_than_appends() {
        let state = CatalogState::Loaded(generated_products(12));
        let mut filter = SearchFilter::new();

        filter.submit("Product 1");
        assert_eq!(filter.visible(&state).len(), 3); // 1, 10, 11
        filter.submit("Product 2");
        assert_eq!(shown_titles(&filter.visible(&state)), vec!["Product 2"]);
        assert_eq!(filter.term(), "Product 2");
    }

    fn arb_titles() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-cA-C ]{0,8}", 0..20)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the empty term is the identity filter.
        #[test]
        fn empty_term_keeps_everything_in_order(titles in arb_titles()) {
            let products: Vec<Product> = titles.iter().map(Product::new).collect();
            let visible = filter_products(&products, "");

            prop_assert_eq!(visible.len(), products.len());
            for (shown, original) in visible.iter().zip(products.iter()) {
                prop_assert!(std::ptr::eq(*shown, original));
            }
        }

        /// Property: membership iff the term is a substring of the title, and
        /// the result is an order-preserving subsequence of the catalog.
        #[test]
        fn membership_iff_substring(titles in arb_titles(), term in "[a-cA-C ]{0,3}") {
            let products: Vec<Product> = titles.iter().map(Product::new).collect();
            let visible = filter_products(&products, &term);

            let expected: Vec<&Product> =
                products.iter().filter(|p| p.title.contains(term.as_str())).collect();
            prop_assert_eq!(visible.len(), expected.len());
            for (got, want) in visible.iter().zip(expected.iter()) {
                prop_assert!(std::ptr::eq(*got, *want));
            }
        }

        /// Property: clearing after any term restores the full catalog.
        #[test]
        fn clearing_restores_full_set(titles in arb_titles(), term in "[a-cA-C ]{1,3}") {
            let state = CatalogState::Loaded(titles.iter().map(Product::new).collect());
            let mut filter = SearchFilter::new();

            filter.submit(term);
            filter.submit("");
            prop_assert_eq!(filter.visible(&state).len(), state.products().len());
        }
    }
}
