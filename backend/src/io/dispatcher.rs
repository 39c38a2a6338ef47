//! # Action Dispatch
//!
//! Explicit table from action identifiers to handlers. User interfaces turn
//! clicks and form submissions into an [`Action`] and hand it to
//! [`Dispatcher::dispatch`]; each handler can also be exercised on its own.
//!
//! | Identifier        | Payload    | Handler                         |
//! |-------------------|------------|---------------------------------|
//! | `cart.add`        | `Product`  | add one unit                    |
//! | `cart.increase`   | `ItemId`   | quantity + 1                    |
//! | `cart.decrease`   | `ItemId`   | quantity − 1, removes at zero   |
//! | `cart.remove`     | `ItemId`   | drop the line                   |
//! | `discount.apply`  | `Code`     | look up and apply a code        |
//! | `discount.remove` | none       | clear the discount              |
//! | `checkout.submit` | none       | simulated booking               |
//! | `contact.submit`  | `Contact`  | validate, produce the text file |

use log::{debug, warn};
use shared::{ContactForm, Product};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::render::CartRenderer;
use super::session::{ActionOutcome, CartSession};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    AddItem,
    IncreaseQuantity,
    DecreaseQuantity,
    RemoveItem,
    ApplyDiscount,
    RemoveDiscount,
    Checkout,
    SubmitContact,
}

impl ActionId {
    pub const ALL: [ActionId; 8] = [
        ActionId::AddItem,
        ActionId::IncreaseQuantity,
        ActionId::DecreaseQuantity,
        ActionId::RemoveItem,
        ActionId::ApplyDiscount,
        ActionId::RemoveDiscount,
        ActionId::Checkout,
        ActionId::SubmitContact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::AddItem => "cart.add",
            ActionId::IncreaseQuantity => "cart.increase",
            ActionId::DecreaseQuantity => "cart.decrease",
            ActionId::RemoveItem => "cart.remove",
            ActionId::ApplyDiscount => "discount.apply",
            ActionId::RemoveDiscount => "discount.remove",
            ActionId::Checkout => "checkout.submit",
            ActionId::SubmitContact => "contact.submit",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionId {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownAction(s.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error("unknown action identifier: {0}")]
    UnknownAction(String),
    #[error("no handler registered for {0}")]
    NoHandler(ActionId),
    #[error("{action} requires a {expected} payload")]
    MissingPayload { action: ActionId, expected: &'static str },
}

/// Data carried by an action, as read from the triggering element or form
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    None,
    ItemId(String),
    Product(Product),
    Code(String),
    Contact(ContactForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub id: ActionId,
    pub payload: Payload,
}

impl Action {
    pub fn new(id: ActionId, payload: Payload) -> Self {
        Self { id, payload }
    }

    pub fn add_item(product: Product) -> Self {
        Self::new(ActionId::AddItem, Payload::Product(product))
    }

    pub fn increase(id: impl Into<String>) -> Self {
        Self::new(ActionId::IncreaseQuantity, Payload::ItemId(id.into()))
    }

    pub fn decrease(id: impl Into<String>) -> Self {
        Self::new(ActionId::DecreaseQuantity, Payload::ItemId(id.into()))
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::new(ActionId::RemoveItem, Payload::ItemId(id.into()))
    }

    pub fn apply_discount(code: impl Into<String>) -> Self {
        Self::new(ActionId::ApplyDiscount, Payload::Code(code.into()))
    }

    pub fn remove_discount() -> Self {
        Self::new(ActionId::RemoveDiscount, Payload::None)
    }

    pub fn checkout() -> Self {
        Self::new(ActionId::Checkout, Payload::None)
    }

    pub fn submit_contact(form: ContactForm) -> Self {
        Self::new(ActionId::SubmitContact, Payload::Contact(form))
    }
}

pub type Handler<S, R> = fn(&mut CartSession<S, R>, Payload) -> Result<ActionOutcome, DispatchError>;

pub struct Dispatcher<S: KeyValueStore, R: CartRenderer> {
    handlers: HashMap<ActionId, Handler<S, R>>,
}

impl<S: KeyValueStore, R: CartRenderer> Dispatcher<S, R> {
    /// A dispatcher with the built-in handler for every action
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.register(ActionId::AddItem, handle_add_item::<S, R>);
        dispatcher.register(ActionId::IncreaseQuantity, handle_increase::<S, R>);
        dispatcher.register(ActionId::DecreaseQuantity, handle_decrease::<S, R>);
        dispatcher.register(ActionId::RemoveItem, handle_remove_item::<S, R>);
        dispatcher.register(ActionId::ApplyDiscount, handle_apply_discount::<S, R>);
        dispatcher.register(ActionId::RemoveDiscount, handle_remove_discount::<S, R>);
        dispatcher.register(ActionId::Checkout, handle_checkout::<S, R>);
        dispatcher.register(ActionId::SubmitContact, handle_submit_contact::<S, R>);
        dispatcher
    }

    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Install `handler` for `id`, returning the one it replaces
    pub fn register(&mut self, id: ActionId, handler: Handler<S, R>) -> Option<Handler<S, R>> {
        self.handlers.insert(id, handler)
    }

    pub fn handles(&self, id: ActionId) -> bool {
        self.handlers.contains_key(&id)
    }

    pub fn dispatch(&self, session: &mut CartSession<S, R>, action: Action) -> Result<ActionOutcome, DispatchError> {
        let handler = self.handlers.get(&action.id).ok_or(DispatchError::NoHandler(action.id))?;
        debug!("Dispatching {}", action.id);
        handler(session, action.payload).map_err(|e| {
            warn!("Action {} ignored: {}", action.id, e);
            e
        })
    }

    /// Dispatch by textual identifier, e.g. a `data-action` attribute
    pub fn dispatch_named(
        &self,
        session: &mut CartSession<S, R>,
        name: &str,
        payload: Payload,
    ) -> Result<ActionOutcome, DispatchError> {
        let id = name.parse::<ActionId>()?;
        self.dispatch(session, Action::new(id, payload))
    }
}

impl<S: KeyValueStore, R: CartRenderer> Default for Dispatcher<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank ids count as missing, like an element without `data-id`
fn item_id(action: ActionId, payload: Payload) -> Result<String, DispatchError> {
    match payload {
        Payload::ItemId(id) if !id.is_empty() => Ok(id),
        _ => Err(DispatchError::MissingPayload {
            action,
            expected: "item id",
        }),
    }
}

fn handle_add_item<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    match payload {
        Payload::Product(product) if !product.id.is_empty() => Ok(session.add_item(product)),
        _ => Err(DispatchError::MissingPayload {
            action: ActionId::AddItem,
            expected: "product",
        }),
    }
}

fn handle_increase<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    let id = item_id(ActionId::IncreaseQuantity, payload)?;
    Ok(session.change_quantity(&id, 1))
}

fn handle_decrease<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    let id = item_id(ActionId::DecreaseQuantity, payload)?;
    Ok(session.change_quantity(&id, -1))
}

fn handle_remove_item<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    let id = item_id(ActionId::RemoveItem, payload)?;
    Ok(session.remove_item(&id))
}

fn handle_apply_discount<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    match payload {
        Payload::Code(code) => Ok(session.apply_discount(&code)),
        // An empty field submits no code at all
        Payload::None => Ok(session.apply_discount("")),
        _ => Err(DispatchError::MissingPayload {
            action: ActionId::ApplyDiscount,
            expected: "discount code",
        }),
    }
}

fn handle_remove_discount<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    _payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    Ok(session.remove_discount())
}

fn handle_checkout<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    _payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    Ok(session.checkout())
}

fn handle_submit_contact<S: KeyValueStore, R: CartRenderer>(
    session: &mut CartSession<S, R>,
    payload: Payload,
) -> Result<ActionOutcome, DispatchError> {
    match payload {
        Payload::Contact(form) => Ok(session.submit_contact(&form)),
        _ => Err(DispatchError::MissingPayload {
            action: ActionId::SubmitContact,
            expected: "contact form",
        }),
    }
}
