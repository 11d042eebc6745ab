//! End-to-end flows through the command layer.

use chrono::NaiveDate;
use hotelcart_core::theme::MemoryPreferences;
use hotelcart_core::{CardView, CartView, DateField, Money, RoomStore, Theme};
use hotelcart_session::commands::{card, cart, drawer, picker, theme};
use hotelcart_session::config::SessionConfig;
use hotelcart_session::prefs::{JsonFilePreferences, SessionPreferences};
use hotelcart_session::state::PickerCommand;
use hotelcart_session::{CartSession, ErrorCode, SessionState};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn memory_state() -> SessionState {
    SessionState::new(
        CartSession::new(
            SessionConfig::default(),
            RoomStore::seeded(),
            SessionPreferences::Memory(MemoryPreferences::new()),
        )
        .with_today(today),
    )
}

fn file_state(path: &std::path::Path) -> SessionState {
    let config = SessionConfig {
        prefs_path: Some(path.to_path_buf()),
        ..SessionConfig::default()
    };
    let prefs = SessionPreferences::from_config(&config);
    SessionState::new(CartSession::new(config, RoomStore::seeded(), prefs))
}

fn find<'a>(view: &'a CartView, id: &str) -> Option<&'a CardView> {
    view.groups
        .iter()
        .flat_map(|g| g.cards.iter())
        .find(|c| c.id == id)
}

#[test]
fn test_seed_cart_renders_four_groups() {
    let state = memory_state();
    let view = cart::get_cart(&state);

    assert_eq!(view.item_count, 6);
    assert_eq!(view.subtotal_label, "$1940");

    let names: Vec<_> = view.groups.iter().map(|g| g.hotel_name.as_str()).collect();
    assert_eq!(names.len(), 4);
    assert_eq!(names[0], "Grand Palace Hotel");

    let first = &view.groups[0];
    assert_eq!(first.reservation_count, 2);
    assert!(first.show_footer);
    assert_eq!(find(&view, "1").unwrap().nights, 4);
    assert_eq!(find(&view, "1").unwrap().date_range_label, "10 March – 14 March");
}

#[test]
fn test_full_edit_session() {
    let state = memory_state();

    card::toggle_edit(&state, "1").unwrap();
    picker::advance_time(&state, 50);
    let attached = picker::drain_picker_commands(&state);
    assert_eq!(attached.len(), 2);
    assert!(attached.iter().all(|c| matches!(
        c,
        PickerCommand::Attach { min_date, .. } if *min_date == today()
    )));

    // pushing check-in past check-out moves the check-out picker too
    card::set_date(&state, "1", DateField::CheckIn, "2026-03-15").unwrap();
    let moved = picker::drain_picker_commands(&state);
    assert!(matches!(
        moved.as_slice(),
        [PickerCommand::SetDate { field: DateField::CheckOut, date, .. }]
            if *date == NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    ));

    card::change_adults(&state, "1", -1).unwrap();
    card::change_adults(&state, "1", -1).unwrap();
    let view = card::save_edit(&state, "1").unwrap();

    let saved = find(&view, "1").unwrap();
    assert_eq!(saved.adults, 1);
    assert_eq!(saved.nights, 1);
    assert_eq!(saved.check_in_label, "15 March");
    assert!(!saved.is_editing);
    assert_eq!(picker::drain_picker_commands(&state).len(), 2);
}

#[test]
fn test_delete_through_overlay_updates_drawer() {
    let state = memory_state();
    drawer::open_drawer(&state);

    card::request_delete(&state, "3").unwrap();
    card::confirm_delete(&state, "3").unwrap();

    let view = drawer::get_drawer(&state);
    assert!(view.is_open);
    assert_eq!(view.item_count, 5);
    assert_eq!(view.subtotal_row_label, "Subtotal (5 items)");
    assert_eq!(cart::get_cart(&state).groups.len(), 3);

    // the card is gone along with its record
    let err = card::request_delete(&state, "3").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(cart::delete_room(&state, "3").item_count, 5);
}

#[test]
fn test_deleting_while_pickers_pending_is_harmless() {
    let state = memory_state();
    card::toggle_edit(&state, "4").unwrap();
    cart::delete_room(&state, "4");

    assert_eq!(picker::advance_time(&state, 500).tasks_run, 0);
    assert!(picker::drain_picker_commands(&state).is_empty());
}

#[test]
fn test_emptying_the_cart() {
    let state = memory_state();
    for id in ["1", "2", "3", "4", "5", "6"] {
        cart::delete_room(&state, id);
    }

    let view = drawer::get_drawer(&state);
    assert_eq!(view.item_count, 0);
    assert!(!view.show_footer);
    assert!(cart::get_cart(&state).groups.is_empty());
}

#[test]
fn test_theme_survives_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let first = file_state(&path);
    assert_eq!(theme::get_theme(&first).data_theme, None);
    assert_eq!(theme::toggle_theme(&first).theme, Theme::Dark);

    let stored = JsonFilePreferences::new(&path);
    let contents = std::fs::read_to_string(stored.path()).unwrap();
    assert!(contents.contains("\"theme\": \"dark\""));

    let second = file_state(&path);
    let view = theme::get_theme(&second);
    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.data_theme, Some(Theme::Dark));
}

#[test]
fn test_unwritable_preferences_keep_toggled_theme() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the file should be makes every write fail
    let path = dir.path().join("prefs");
    std::fs::create_dir(&path).unwrap();

    let state = file_state(&path);
    let view = theme::toggle_theme(&state);
    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.data_theme, Some(Theme::Dark));
}

#[test]
fn test_extreme_price_and_clock_keep_session_usable() {
    let state = memory_state();
    let room = state.with_session(|s| s.store().rooms()[0].clone());

    let view = cart::update_room(&state, room.with_price(Money::from_cents(i64::MAX)));
    assert_eq!(view.subtotal.cents(), i64::MAX);
    assert_eq!(drawer::get_drawer(&state).total.cents(), i64::MAX);

    for _ in 0..2000 {
        picker::advance_time(&state, u64::MAX);
    }
    assert_eq!(cart::get_cart(&state).item_count, 6);
}
