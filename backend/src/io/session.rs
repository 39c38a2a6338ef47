//! # Cart Session
//!
//! Owns the cart store together with its persistence and projection, and runs
//! every operation in a fixed order:
//!
//! ```text
//! mutate store → save to storage → render view
//! ```
//!
//! A failed save is logged and otherwise ignored; the in-memory store stays
//! authoritative. Operations that change nothing skip both steps.

use chrono::{DateTime, Local};
use log::{error, info};
use shared::{
    CartView, CheckoutReceipt, ContactArtifact, ContactForm, DiscountFeedback, Notification,
    NotificationKind, Product,
};

use super::mappers::CartMapper;
use super::render::CartRenderer;
use crate::config::CartConfig;
use crate::domain::currency::format_currency;
use crate::domain::models::{DiscountTable, Totals};
use crate::domain::{complete_checkout, CartError, CartStore, ContactService, NotificationCenter, QuantityChange};
use crate::storage::{CartRepository, KeyValueStore};

/// What the UI should do after an operation, besides re-rendering the view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActionOutcome {
    /// Toast to show
    pub notification: Option<Notification>,
    /// Inline message for the discount field
    pub discount_feedback: Option<DiscountFeedback>,
    /// File to offer for download
    pub artifact: Option<ContactArtifact>,
    pub receipt: Option<CheckoutReceipt>,
    /// The submitted form should be cleared
    pub reset_form: bool,
    /// State was mutated, persisted and re-rendered
    pub committed: bool,
}

pub struct CartSession<S: KeyValueStore, R: CartRenderer> {
    store: CartStore,
    repository: CartRepository<S>,
    renderer: R,
    discounts: DiscountTable,
    contact: ContactService,
    notifications: NotificationCenter,
    config: CartConfig,
}

impl<S: KeyValueStore, R: CartRenderer> CartSession<S, R> {
    /// Restore state from `backend` and draw it once
    pub fn open(config: CartConfig, backend: S, renderer: R) -> Self {
        let repository = CartRepository::new(backend, config.storage.clone());
        let store = repository.load();
        info!("Cart session opened with {} lines", store.items().len());

        let mut session = Self {
            store,
            repository,
            renderer,
            discounts: config.discount_table(),
            contact: ContactService::new(config.brand_name.clone()),
            notifications: NotificationCenter::new(),
            config,
        };
        session.render();
        session
    }

    pub fn state(&self) -> &CartStore {
        &self.store
    }

    pub fn totals(&self) -> Totals {
        self.store.totals()
    }

    pub fn view(&self) -> CartView {
        CartMapper::to_view(&self.store)
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn backend(&self) -> &S {
        self.repository.backend()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// Hide the toast if `ticket` is still the latest; called by the UI's
    /// auto-dismiss timer
    pub fn dismiss_notification(&mut self, ticket: u64) -> bool {
        self.notifications.dismiss(ticket)
    }

    pub fn add_item(&mut self, product: Product) -> ActionOutcome {
        let message = format!("{} added to cart", product.name);
        self.store.add_item(product);
        self.commit();
        ActionOutcome {
            notification: Some(self.notifications.show(message, NotificationKind::Success)),
            committed: true,
            ..Default::default()
        }
    }

    pub fn remove_item(&mut self, id: &str) -> ActionOutcome {
        if self.store.remove_item(id).is_none() {
            return ActionOutcome::default();
        }
        self.commit();
        ActionOutcome {
            notification: Some(self.notifications.show("Item removed from cart", NotificationKind::Info)),
            committed: true,
            ..Default::default()
        }
    }

    pub fn change_quantity(&mut self, id: &str, delta: i64) -> ActionOutcome {
        match self.store.change_quantity(id, delta) {
            QuantityChange::NotFound => ActionOutcome::default(),
            QuantityChange::Updated(_) | QuantityChange::Removed => {
                self.commit();
                ActionOutcome {
                    committed: true,
                    ..Default::default()
                }
            }
        }
    }

    pub fn apply_discount(&mut self, input: &str) -> ActionOutcome {
        match self.store.set_discount(input, &self.discounts) {
            Ok(percentage) => {
                self.commit();
                ActionOutcome {
                    discount_feedback: Some(feedback(
                        format!("Discount applied: {}% off.", percentage),
                        NotificationKind::Success,
                    )),
                    committed: true,
                    ..Default::default()
                }
            }
            Err(CartError::EmptyDiscountCode) => ActionOutcome {
                discount_feedback: Some(feedback(
                    CartError::EmptyDiscountCode.to_string(),
                    NotificationKind::Error,
                )),
                ..Default::default()
            },
            Err(e) => {
                // The store already reset the discount; persist that
                self.commit();
                ActionOutcome {
                    discount_feedback: Some(feedback(e.to_string(), NotificationKind::Error)),
                    committed: true,
                    ..Default::default()
                }
            }
        }
    }

    pub fn remove_discount(&mut self) -> ActionOutcome {
        self.store.clear_discount();
        self.commit();
        ActionOutcome {
            discount_feedback: Some(discount_removed()),
            committed: true,
            ..Default::default()
        }
    }

    pub fn checkout(&mut self) -> ActionOutcome {
        match complete_checkout(&mut self.store) {
            Ok(receipt) => {
                self.commit();
                let message = format!("Booking confirmed! Total: {} (demo).", format_currency(receipt.total));
                ActionOutcome {
                    notification: Some(self.notifications.show(message, NotificationKind::Success)),
                    discount_feedback: Some(discount_removed()),
                    receipt: Some(receipt),
                    reset_form: true,
                    committed: true,
                    ..Default::default()
                }
            }
            Err(e) => ActionOutcome {
                notification: Some(self.notifications.show(e.to_string(), NotificationKind::Error)),
                ..Default::default()
            },
        }
    }

    pub fn submit_contact(&mut self, form: &ContactForm) -> ActionOutcome {
        self.submit_contact_at(form, Local::now())
    }

    /// Contact submission with an explicit clock, so the artifact name and
    /// timestamp are predictable
    pub fn submit_contact_at(&mut self, form: &ContactForm, now: DateTime<Local>) -> ActionOutcome {
        match self.contact.submit(form, now) {
            Ok(artifact) => ActionOutcome {
                notification: Some(self.notifications.show(
                    "Message saved! Check your downloads folder.",
                    NotificationKind::Success,
                )),
                artifact: Some(artifact),
                reset_form: true,
                ..Default::default()
            },
            Err(e) => ActionOutcome {
                notification: Some(self.notifications.show(e.to_string(), NotificationKind::Error)),
                ..Default::default()
            },
        }
    }

    fn commit(&mut self) {
        if let Err(e) = self.repository.save(self.store.items(), self.store.discount()) {
            error!("Failed to save cart to storage: {}", e);
        }
        self.render();
    }

    fn render(&mut self) {
        let view = CartMapper::to_view(&self.store);
        self.renderer.render(&view);
    }
}

fn feedback(message: String, kind: NotificationKind) -> DiscountFeedback {
    DiscountFeedback { message, kind }
}

fn discount_removed() -> DiscountFeedback {
    feedback("Discount removed.".to_string(), NotificationKind::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::render::TextRenderer;
    use crate::storage::MemoryStore;

    fn session() -> (CartSession<MemoryStore, TextRenderer>, MemoryStore) {
        let backend = MemoryStore::new();
        let session = CartSession::open(CartConfig::default(), backend.clone(), TextRenderer::new());
        (session, backend)
    }

    fn bali() -> Product {
        Product::new("p1", "Bali Escape", 1000.0)
    }

    #[test]
    fn test_open_renders_once() {
        let (session, backend) = session();
        assert_eq!(session.renderer().render_count(), 1);
        assert!(session.state().is_empty());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_add_persists_and_renders() {
        let (mut session, backend) = session();
        let outcome = session.add_item(bali());

        assert!(outcome.committed);
        assert_eq!(outcome.notification.unwrap().message, "Bali Escape added to cart");
        assert_eq!(session.renderer().render_count(), 2);
        assert!(session.renderer().last().contains("Bali Escape"));

        let stored = backend.get("skyway_travels_cart_v1").unwrap().unwrap();
        assert!(stored.contains(r#""quantity":1"#));
    }

    #[test]
    fn test_noop_operations_do_not_commit() {
        let (mut session, backend) = session();
        assert_eq!(session.remove_item("ghost"), ActionOutcome::default());
        assert_eq!(session.change_quantity("ghost", 1), ActionOutcome::default());
        assert_eq!(session.renderer().render_count(), 1);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let (mut session, _) = session();
        session.add_item(bali());
        let outcome = session.change_quantity("p1", -1);
        assert!(outcome.committed);
        assert!(session.state().find("p1").is_none());
    }

    #[test]
    fn test_discount_feedback_messages() {
        let (mut session, _) = session();
        session.add_item(bali());

        let blank = session.apply_discount("  ");
        assert!(!blank.committed);
        assert_eq!(blank.discount_feedback.unwrap().message, "Enter a discount code to apply.");

        let applied = session.apply_discount("sky10");
        let applied_feedback = applied.discount_feedback.unwrap();
        assert_eq!(applied_feedback.message, "Discount applied: 10% off.");
        assert_eq!(applied_feedback.kind, NotificationKind::Success);

        let invalid = session.apply_discount("NOPE");
        assert!(invalid.committed);
        assert_eq!(
            invalid.discount_feedback.unwrap().message,
            "This code is not valid for this demo checkout."
        );
        assert_eq!(session.state().discount().code, None);

        let removed = session.remove_discount();
        assert_eq!(removed.discount_feedback.unwrap().message, "Discount removed.");
    }

    #[test]
    fn test_empty_checkout_is_rejected() {
        let (mut session, backend) = session();
        let outcome = session.checkout();

        let toast = outcome.notification.unwrap();
        assert_eq!(toast.message, "Add at least one trip before completing booking.");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert!(!outcome.committed);
        assert!(session.state().is_empty());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_checkout_confirms_and_clears() {
        let (mut session, backend) = session();
        session.add_item(bali());
        session.add_item(bali());
        session.apply_discount("SKY10");

        let outcome = session.checkout();
        assert_eq!(
            outcome.notification.unwrap().message,
            "Booking confirmed! Total: ₹1,800.00 (demo)."
        );
        assert_eq!(outcome.receipt.unwrap().total, 1800.0);
        assert!(outcome.reset_form);
        assert!(session.state().is_empty());
        assert_eq!(session.state().discount().code, None);
        assert_eq!(backend.get("skyway_travels_cart_v1").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let (mut session, backend) = session();
        backend.set_fail_writes(true);

        let outcome = session.add_item(bali());
        assert!(outcome.committed);
        assert_eq!(session.state().item_count(), 1);
        assert_eq!(session.renderer().render_count(), 2);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_contact_submission() {
        let (mut session, _) = session();
        let form = ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Hello".to_string(),
        };

        let outcome = session.submit_contact(&form);
        assert!(outcome.reset_form);
        assert!(outcome.artifact.unwrap().file_name.starts_with("skyway-contact-"));
        assert_eq!(
            outcome.notification.unwrap().message,
            "Message saved! Check your downloads folder."
        );

        let bad = session.submit_contact(&ContactForm::default());
        assert!(bad.artifact.is_none());
        assert!(!bad.reset_form);
        assert_eq!(bad.notification.unwrap().message, "Please fill in all fields");
    }

    #[test]
    fn test_toast_dismissal_follows_latest_ticket() {
        let (mut session, _) = session();
        let first = session.add_item(bali()).notification.unwrap();
        let second = session.remove_item("p1").notification.unwrap();

        assert!(!session.dismiss_notification(first.ticket));
        assert!(session.current_notification().is_some());
        assert!(session.dismiss_notification(second.ticket));
        assert!(session.current_notification().is_none());
    }

    #[test]
    fn test_reopen_restores_state() {
        let (mut session, backend) = session();
        session.add_item(bali());
        session.apply_discount("WELCOME20");
        drop(session);

        let reopened = CartSession::open(CartConfig::default(), backend, TextRenderer::new());
        assert_eq!(reopened.state().item_count(), 1);
        assert_eq!(reopened.state().discount().code.as_deref(), Some("WELCOME20"));
        assert_eq!(reopened.totals().total, 800.0);
    }

    fn reopen(backend: MemoryStore) -> CartSession<MemoryStore, TextRenderer> {
        CartSession::open(CartConfig::default(), backend, TextRenderer::new())
    }

    #[test]
    fn test_rejected_code_persists_cleared_discount() {
        let (mut session, backend) = session();
        session.add_item(bali());
        session.apply_discount("SKY10");
        session.apply_discount("NOPE");
        drop(session);

        assert_eq!(
            backend.get("skyway_travels_discount_v1").unwrap().as_deref(),
            Some(r#"{"code":null,"percentage":0.0}"#)
        );
        let reopened = reopen(backend);
        assert_eq!(reopened.state().discount().code, None);
        assert_eq!(reopened.totals().total, 1000.0);
    }

    #[test]
    fn test_quantity_changes_survive_reopen() {
        let (mut session, backend) = session();
        session.add_item(bali());
        session.add_item(Product::new("p2", "Kyoto Blossoms", 1500.0));
        session.change_quantity("p2", 2);
        session.change_quantity("p1", -1);
        drop(session);

        let reopened = reopen(backend);
        assert!(reopened.state().find("p1").is_none());
        assert_eq!(reopened.state().find("p2").unwrap().quantity, 3);
    }

    #[test]
    fn test_removed_line_stays_removed_after_reopen() {
        let (mut session, backend) = session();
        session.add_item(bali());
        session.add_item(Product::new("p2", "Kyoto Blossoms", 1500.0));
        session.remove_item("p1");
        drop(session);

        let reopened = reopen(backend);
        assert!(reopened.state().find("p1").is_none());
        assert_eq!(reopened.state().item_count(), 1);
    }

    #[test]
    fn test_removed_discount_stays_removed_after_reopen() {
        let (mut session, backend) = session();
        session.add_item(bali());
        session.apply_discount("WELCOME20");
        session.remove_discount();
        drop(session);

        let reopened = reopen(backend);
        assert_eq!(reopened.state().discount().code, None);
        assert_eq!(reopened.totals().total, 1000.0);
    }

    #[test]
    fn test_open_with_huge_stored_quantities() {
        let backend = MemoryStore::new();
        backend
            .set(
                "skyway_travels_cart_v1",
                r#"[{"id":"a","name":"Bali Escape","price":1000.0,"quantity":4294967295},
                    {"id":"b","name":"Kyoto Blossoms","price":1500.0,"quantity":2}]"#,
            )
            .unwrap();

        let session = reopen(backend);
        assert_eq!(session.state().items().len(), 2);
        assert_eq!(session.view().item_count, u32::MAX);
        assert_eq!(session.renderer().render_count(), 1);
    }
}
