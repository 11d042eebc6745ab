//! # View Models
//!
//! Everything a component renders, derived from the store and the card
//! registry on each read. Components format nothing themselves, so the card,
//! the group footer and the drawer always agree on dates and totals.
//!
//! ## Component Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DrawerView  (badge, "Subtotal (N items)", total, footer when N > 0)    │
//! │    └── CartView                                                         │
//! │          └── GroupView  (header image + name, "N reservations",         │
//! │                │          footer subtotal only when N > 1)              │
//! │                └── CardView  (draft while editing, record otherwise)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use crate::card::CartCard;
use crate::dates::{format_display_date, format_display_range};
use crate::drawer::DrawerState;
use crate::money::Money;
use crate::registry::CardRegistry;
use crate::store::RoomStore;
use crate::types::RoomRecord;

// =============================================================================
// Button
// =============================================================================

/// Visual variants of the shared app button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Tertiary,
    Action,
    Danger,
    Outline,
    Edit,
    Delete,
}

impl ButtonVariant {
    fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Tertiary => "tertiary",
            ButtonVariant::Action => "action",
            ButtonVariant::Danger => "danger",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Edit => "edit",
            ButtonVariant::Delete => "delete",
        }
    }

    /// Class list of the rendered `<button>`.
    ///
    /// ## Example
    /// ```rust
    /// use hotelcart_core::views::ButtonVariant;
    ///
    /// assert_eq!(ButtonVariant::Edit.class_list(true), "btn btn-edit btn-square");
    /// assert_eq!(ButtonVariant::Primary.class_list(false), "btn btn-primary");
    /// ```
    pub fn class_list(self, square: bool) -> String {
        let mut classes = format!("btn btn-{}", self.as_str());
        if square {
            classes.push_str(" btn-square");
        }
        classes
    }
}

// =============================================================================
// Card
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    /// Hidden inside a group, where the header already shows it.
    pub hotel_name: Option<String>,
    /// Hidden inside a group.
    pub image_url: Option<String>,
    pub room_type: String,
    pub adults: u32,
    pub nights: u32,
    #[ts(as = "String")]
    pub check_in: NaiveDate,
    #[ts(as = "String")]
    pub check_out: NaiveDate,
    pub check_in_label: String,
    pub check_out_label: String,
    /// "10 March – 14 March"
    pub date_range_label: String,
    pub price: Money,
    pub price_label: String,
    pub is_grouped: bool,
    pub is_editing: bool,
    pub is_confirming_delete: bool,
    /// `primary` (save) while editing, `edit` otherwise.
    pub edit_button: ButtonVariant,
}

impl CardView {
    /// Renders `item` as seen through `card` (its draft while editing).
    pub fn build(item: &RoomRecord, card: Option<&CartCard>, grouped: bool, currency: &str) -> Self {
        let shown = card.map_or(item, |c| c.displayed(item));
        let is_editing = card.is_some_and(CartCard::is_editing);

        CardView {
            id: shown.id.clone(),
            hotel_name: (!grouped).then(|| shown.hotel_name.clone()),
            image_url: (!grouped).then(|| shown.image_url.clone()),
            room_type: shown.room_type.clone(),
            adults: shown.adults,
            nights: shown.nights(),
            check_in: shown.check_in,
            check_out: shown.check_out,
            check_in_label: format_display_date(shown.check_in),
            check_out_label: format_display_date(shown.check_out),
            date_range_label: format_display_range(shown.check_in, shown.check_out),
            price: shown.price,
            price_label: shown.price.format_with(currency),
            is_grouped: grouped,
            is_editing,
            is_confirming_delete: card.is_some_and(CartCard::is_confirming_delete),
            edit_button: if is_editing {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Edit
            },
        }
    }
}

// =============================================================================
// Group
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub hotel_name: String,
    pub image_url: String,
    pub reservation_count: usize,
    /// "1 reservation" / "2 reservations"
    pub reservation_label: String,
    pub cards: Vec<CardView>,
    pub subtotal: Money,
    pub subtotal_label: String,
    /// The "Hotel Subtotal" footer only appears for multi-room groups.
    pub show_footer: bool,
}

/// "1 reservation", "3 reservations".
pub fn reservation_label(count: usize) -> String {
    if count == 1 {
        "1 reservation".to_string()
    } else {
        format!("{count} reservations")
    }
}

// =============================================================================
// Cart
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub groups: Vec<GroupView>,
    pub item_count: usize,
    pub subtotal: Money,
    pub subtotal_label: String,
}

impl CartView {
    /// Groups the store by hotel and renders every card inside its group.
    pub fn build(store: &RoomStore, registry: &CardRegistry, currency: &str) -> Self {
        let groups = store
            .groups()
            .into_iter()
            .filter_map(|group| {
                let first = group.first()?;
                let subtotal = group.subtotal();
                Some(GroupView {
                    hotel_name: group.hotel_name.to_string(),
                    image_url: first.image_url.clone(),
                    reservation_count: group.len(),
                    reservation_label: reservation_label(group.len()),
                    cards: group
                        .rooms
                        .iter()
                        .map(|room| CardView::build(room, registry.get(&room.id), true, currency))
                        .collect(),
                    subtotal,
                    subtotal_label: subtotal.format_with(currency),
                    show_footer: group.len() > 1,
                })
            })
            .collect();

        let subtotal = store.subtotal();
        CartView {
            groups,
            item_count: store.len(),
            subtotal,
            subtotal_label: subtotal.format_with(currency),
        }
    }
}

// =============================================================================
// Drawer
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DrawerView {
    pub is_open: bool,
    /// Badge next to "Your Cart".
    pub item_count: usize,
    /// "Subtotal (6 items)"
    pub subtotal_row_label: String,
    pub subtotal: Money,
    pub subtotal_label: String,
    /// Taxes are calculated at checkout, so the total equals the subtotal.
    pub total: Money,
    pub total_label: String,
    /// Summary and checkout button are only shown for a non-empty cart.
    pub show_footer: bool,
}

impl DrawerView {
    /// Recomputes the summary from the current store contents.
    pub fn build(drawer: &DrawerState, store: &RoomStore, currency: &str) -> Self {
        let subtotal = store.subtotal();
        let count = store.len();
        DrawerView {
            is_open: drawer.is_open(),
            item_count: count,
            subtotal_row_label: format!("Subtotal ({count} items)"),
            subtotal,
            subtotal_label: subtotal.format_with(currency),
            total: subtotal,
            total_label: subtotal.format_with(currency),
            show_footer: count > 0,
        }
    }
}
