//! End-to-end flows through the public API against a file-backed store.

use shared::{ContactForm, Product};
use skyway_backend::io::Payload;
use skyway_backend::{Action, CartConfig, CartSession, Dispatcher, FileStore, KeyValueStore, TextRenderer};
use tempfile::TempDir;

fn open(dir: &TempDir) -> CartSession<FileStore, TextRenderer> {
    let store = FileStore::new(dir.path()).expect("Failed to open file store");
    CartSession::open(CartConfig::default(), store, TextRenderer::new())
}

#[test]
fn test_booking_flow_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = Dispatcher::new();

    {
        let mut session = open(&temp_dir);
        let bali = Product::new("p1", "Bali Escape", 1000.0);
        dispatcher.dispatch(&mut session, Action::add_item(bali.clone())).unwrap();
        dispatcher.dispatch(&mut session, Action::add_item(bali)).unwrap();
        dispatcher.dispatch(&mut session, Action::apply_discount("Sky10")).unwrap();
        assert!(session.renderer().last().contains("Total: ₹1,800.00"));
    }

    let mut session = open(&temp_dir);
    assert_eq!(session.state().item_count(), 2);
    assert_eq!(session.totals().total, 1800.0);

    let outcome = dispatcher.dispatch(&mut session, Action::checkout()).unwrap();
    assert_eq!(
        outcome.notification.unwrap().message,
        "Booking confirmed! Total: ₹1,800.00 (demo)."
    );

    let reloaded = open(&temp_dir);
    assert!(reloaded.state().is_empty());
    assert_eq!(reloaded.state().discount().code, None);
}

#[test]
fn test_corrupt_files_load_as_empty_cart() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path()).unwrap();
    store.set("skyway_travels_cart_v1", "[{\"id\":").unwrap();
    store.set("skyway_travels_discount_v1", "null").unwrap();

    let session = open(&temp_dir);
    assert!(session.state().is_empty());
    assert_eq!(session.totals().total, 0.0);
    assert!(session.renderer().last().contains("Your cart is empty."));
}

#[test]
fn test_contact_form_by_action_name() {
    let temp_dir = TempDir::new().unwrap();
    let dispatcher = Dispatcher::new();
    let mut session = open(&temp_dir);

    let form = ContactForm {
        name: "Meera".to_string(),
        email: "meera@travel.co".to_string(),
        message: "Do you run Kerala houseboat tours?".to_string(),
    };
    let outcome = dispatcher
        .dispatch_named(&mut session, "contact.submit", Payload::Contact(form))
        .unwrap();

    let artifact = outcome.artifact.unwrap();
    assert!(artifact.content.contains("Name: Meera"));
    assert!(artifact.content.contains("Do you run Kerala houseboat tours?"));
}
