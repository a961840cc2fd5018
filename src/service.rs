//! Query pipeline: resolve, aggregate, summarize.
//!
//! The command surface classifies raw user text into an [`ItemQuery`] and
//! calls [`MarketService::lookup`]; the service owns the rest of the
//! pipeline and hands back everything the presentation side needs. A miss is
//! a plain [`LookupOutcome::NotFound`], never an error - the caller decides
//! whether to consult its external text-search fallback.

use log::debug;

use crate::aggregator::PriceAggregator;
use crate::models::{CatalogEntry, PriceReport};
use crate::resolver::{Resolution, TextResolver};
use crate::summary::{summarize, ReportSummary};

/// A query as classified by the command surface.
///
/// The service never parses user text itself.
#[derive(Clone, Debug)]
pub enum ItemQuery {
    /// Free text to resolve against the catalog
    Text(String),

    /// A catalog id, aggregated directly
    Id(u32),
}

/// Everything the presentation collaborator needs to render one lookup.
#[derive(Clone, Debug)]
pub struct ItemMarketView {
    /// Resolved catalog entry; `None` for id queries the catalog does not
    /// know (degraded catalog included)
    pub entry: Option<CatalogEntry>,

    pub report: PriceReport,

    pub summary: ReportSummary,

    /// Up to ten alternate matches, best first
    pub alternates: Vec<CatalogEntry>,
}

/// Outcome of a lookup.
#[derive(Clone, Debug)]
pub enum LookupOutcome {
    Found(Box<ItemMarketView>),
    NotFound,
}

/// Front door of the pipeline: resolver plus aggregator.
pub struct MarketService {
    resolver: TextResolver,
    aggregator: PriceAggregator,
}

impl MarketService {
    pub fn new(resolver: TextResolver, aggregator: PriceAggregator) -> Self {
        Self {
            resolver,
            aggregator,
        }
    }

    /// Run the full pipeline for one query.
    ///
    /// Resolution completes before aggregation starts; aggregation needs the
    /// resolved id. Aggregation itself always yields a report, so once an id
    /// is known the outcome is always `Found`.
    pub async fn lookup(&self, query: ItemQuery) -> LookupOutcome {
        let (entry, alternates, item_id) = match query {
            ItemQuery::Text(text) => {
                let Resolution { primary, alternates } = self.resolver.resolve(&text);
                match primary {
                    Some(entry) => {
                        let id = entry.id;
                        (Some(entry), alternates, id)
                    }
                    None => {
                        debug!("No catalog match for {:?}", text);
                        return LookupOutcome::NotFound;
                    }
                }
            }
            ItemQuery::Id(id) => (self.resolver.entry_by_id(id), Vec::new(), id),
        };

        let report = self.aggregator.fetch_report(item_id).await;
        let summary = summarize(&report);

        LookupOutcome::Found(Box::new(ItemMarketView {
            entry,
            report,
            summary,
            alternates,
        }))
    }
}
