//! Card materialization plan
//!
//! Every item index gets a slot so the strip keeps its full scroll width.
//! Indices near the visible window become full cards; all others become
//! placeholders of the same flow width.

use marquee_model::{ImageBase, Item, ItemId, PosterSize, PosterSource};
use serde::Serialize;

use super::types::VisibleRange;

/// Display fields of a materialized card, with absent data already degraded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFace {
    pub title: String,
    /// One-decimal rating such as `"7.8"`; `None` hides the badge.
    pub rating_label: Option<String>,
    pub year: Option<i32>,
    pub poster: PosterSource,
}

impl CardFace {
    pub fn from_item(item: &Item, images: &ImageBase, size: PosterSize) -> Self {
        Self {
            title: item.title().to_string(),
            rating_label: item.rating().map(|r| format!("{r:.1}")),
            year: item.year(),
            poster: images.poster(item.image(), size),
        }
    }
}

/// A fully rendered card. Keyed by item identity so per-card visual state
/// follows the item when the list is reordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlan<'a> {
    pub key: ItemId,
    pub index: usize,
    pub item: &'a Item,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardSlot<'a> {
    Card(CardPlan<'a>),
    /// Dimensionless stand-in occupying `width` pixels of flow.
    Placeholder { index: usize, width: f32 },
}

impl CardSlot<'_> {
    pub fn index(&self) -> usize {
        match self {
            CardSlot::Card(plan) => plan.index,
            CardSlot::Placeholder { index, .. } => *index,
        }
    }

    pub fn is_card(&self) -> bool {
        matches!(self, CardSlot::Card(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CardRenderer {
    buffer: usize,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(crate::constants::layout::RENDER_BUFFER_ITEMS)
    }
}

impl CardRenderer {
    /// `buffer` items beyond each edge of the window are materialized too.
    pub fn new(buffer: usize) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Indices to materialize for `window` over a list of `item_count`.
    pub fn materialized(&self, window: VisibleRange, item_count: usize) -> Option<VisibleRange> {
        window.expand(self.buffer).clamp_to(item_count)
    }

    /// One slot per item, in list order.
    pub fn plan<'a>(
        &self,
        window: VisibleRange,
        items: &'a [Item],
        card_width: f32,
    ) -> Vec<CardSlot<'a>> {
        let live = self.materialized(window, items.len());
        items
            .iter()
            .enumerate()
            .map(|(index, item)| match live {
                Some(range) if range.contains(index) => CardSlot::Card(CardPlan {
                    key: item.id(),
                    index,
                    item,
                }),
                _ => CardSlot::Placeholder {
                    index,
                    width: card_width,
                },
            })
            .collect()
    }

    /// Only the materialized cards, without walking the whole list.
    pub fn cards<'a>(&self, window: VisibleRange, items: &'a [Item]) -> Vec<CardPlan<'a>> {
        let Some(live) = self.materialized(window, items.len()) else {
            return Vec::new();
        };
        live.indices()
            .map(|index| {
                let item = &items[index];
                CardPlan {
                    key: item.id(),
                    index,
                    item,
                }
            })
            .collect()
    }
}
