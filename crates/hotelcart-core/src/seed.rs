//! # Seed Data
//!
//! The six reservations the cart starts with.
//!
//! ```text
//! ┌──────────────────────────┬────────────────┬──────────────────────────┐
//! │ Hotel                    │ Rooms          │ Price / night            │
//! ├──────────────────────────┼────────────────┼──────────────────────────┤
//! │ Grand Palace Hotel       │ 1, 2           │ 420, 260                 │
//! │ Ocean Breeze Resort      │ 3              │ 290                      │
//! │ City Central Inn         │ 4              │ 340                      │
//! │ Forest Valley Lodge      │ 5, 6           │ 390, 240                 │
//! ├──────────────────────────┴────────────────┼──────────────────────────┤
//! │ Subtotal                                  │ 1940                     │
//! └───────────────────────────────────────────┴──────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::RoomRecord;

struct SeedRow {
    id: &'static str,
    hotel_name: &'static str,
    room_type: &'static str,
    image_url: &'static str,
    adults: u32,
    check_in: (i32, u32, u32),
    check_out: (i32, u32, u32),
    price: i64,
}

const SEED: [SeedRow; 6] = [
    SeedRow {
        id: "1",
        hotel_name: "Grand Palace Hotel",
        room_type: "Royal Suite",
        image_url: "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?auto=format&fit=crop&w=900&q=80",
        adults: 2,
        check_in: (2026, 3, 10),
        check_out: (2026, 3, 14),
        price: 420,
    },
    SeedRow {
        id: "2",
        hotel_name: "Grand Palace Hotel",
        room_type: "Deluxe Room",
        image_url: "https://images.unsplash.com/photo-1566665797739-1674de7a421a?auto=format&fit=crop&w=900&q=80",
        adults: 2,
        check_in: (2026, 3, 10),
        check_out: (2026, 3, 14),
        price: 260,
    },
    SeedRow {
        id: "3",
        hotel_name: "Ocean Breeze Resort",
        room_type: "Standard Room",
        image_url: "https://images.unsplash.com/photo-1598928636135-d146006ff4be?auto=format&fit=crop&w=900&q=80",
        adults: 2,
        check_in: (2026, 4, 2),
        check_out: (2026, 4, 6),
        price: 290,
    },
    SeedRow {
        id: "4",
        hotel_name: "City Central Inn",
        room_type: "Business Suite",
        image_url: "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?auto=format&fit=crop&w=900&q=80",
        adults: 1,
        check_in: (2026, 5, 12),
        check_out: (2026, 5, 15),
        price: 340,
    },
    SeedRow {
        id: "5",
        hotel_name: "Forest Valley Lodge",
        room_type: "Woodland Suite",
        image_url: "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?auto=format&fit=crop&w=900&q=80",
        adults: 2,
        check_in: (2026, 6, 1),
        check_out: (2026, 6, 5),
        price: 390,
    },
    SeedRow {
        id: "6",
        hotel_name: "Forest Valley Lodge",
        room_type: "Garden Room",
        image_url: "https://images.unsplash.com/photo-1560448075-bb485b067938?auto=format&fit=crop&w=900&q=80",
        adults: 2,
        check_in: (2026, 6, 1),
        check_out: (2026, 6, 5),
        price: 240,
    },
];

/// Returns the seed reservations in display order.
pub fn seed_rooms() -> Vec<RoomRecord> {
    SEED.iter()
        .filter_map(|row| {
            Some(RoomRecord {
                id: row.id.to_string(),
                hotel_name: row.hotel_name.to_string(),
                room_type: row.room_type.to_string(),
                image_url: row.image_url.to_string(),
                adults: row.adults,
                check_in: ymd(row.check_in)?,
                check_out: ymd(row.check_out)?,
                price: Money::from_whole(row.price),
            })
        })
        .collect()
}

fn ymd((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}
