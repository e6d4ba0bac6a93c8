//! Orders
//!
//! Order records, the closed menu choices they are built from, and the
//! forwarding wrappers that decorate an order with a display name or a user.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    users::User,
    uuids::TypedUuid,
    weeks::WeekIdentifier,
};

/// Identifies an [`Order`].
pub type OrderUuid = TypedUuid<Order>;

/// Identifies a [`RecurringOrder`].
pub type RecurringOrderUuid = TypedUuid<RecurringOrder>;

/// Identifies a [`RecurringOrderException`].
pub type RecurringOrderExceptionUuid = TypedUuid<RecurringOrderException>;

/// A choice name that is not part of the menu.
#[derive(Debug, Error)]
#[error("unknown {choice} name {value:?}")]
pub struct UnknownChoiceError {
    choice: &'static str,
    value: String,
}

/// The filling of a cob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filling {
    /// Bacon.
    Bacon,

    /// Pork sausage.
    Sausage,

    /// Fried egg.
    Egg,

    /// Plant-based sausage. Wire name `vegan_sausage`.
    VeganSausage,
}

impl Filling {
    /// Returns the wire name of the filling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bacon => "bacon",
            Self::Sausage => "sausage",
            Self::Egg => "egg",
            Self::VeganSausage => "vegan_sausage",
        }
    }
}

impl fmt::Display for Filling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filling {
    type Err = UnknownChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "bacon" => Ok(Self::Bacon),
            "sausage" => Ok(Self::Sausage),
            "egg" => Ok(Self::Egg),
            "vegan_sausage" => Ok(Self::VeganSausage),
            _ => Err(UnknownChoiceError {
                choice: "filling",
                value: value.to_owned(),
            }),
        }
    }
}

/// The bread of a cob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bread {
    /// White cob.
    White,

    /// Brown cob.
    Brown,
}

impl Bread {
    /// Returns the wire name of the bread.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Brown => "brown",
        }
    }
}

impl fmt::Display for Bread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bread {
    type Err = UnknownChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "white" => Ok(Self::White),
            "brown" => Ok(Self::Brown),
            _ => Err(UnknownChoiceError {
                choice: "bread",
                value: value.to_owned(),
            }),
        }
    }
}

/// The sauce on a cob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sauce {
    /// Tomato ketchup.
    Red,

    /// Brown sauce.
    Brown,
}

impl Sauce {
    /// Returns the wire name of the sauce.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Brown => "brown",
        }
    }
}

impl fmt::Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sauce {
    type Err = UnknownChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "red" => Ok(Self::Red),
            "brown" => Ok(Self::Brown),
            _ => Err(UnknownChoiceError {
                choice: "sauce",
                value: value.to_owned(),
            }),
        }
    }
}

/// Whether an order was placed once or materialized from a recurring template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    /// Placed once, for one week.
    Single,

    /// Materialized from a recurring template.
    Recurring,
}

impl OrderKind {
    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Recurring => "recurring",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = UnknownChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" => Ok(Self::Single),
            "recurring" => Ok(Self::Recurring),
            _ => Err(UnknownChoiceError {
                choice: "order kind",
                value: value.to_owned(),
            }),
        }
    }
}

/// The contents of one cob. All three selections are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderDetail {
    /// The filling selection.
    pub filling: Filling,

    /// The bread selection.
    pub bread: Bread,

    /// The sauce selection.
    pub sauce: Sauce,
}

/// One placed order.
///
/// `id` is stable for the lifetime of the record. `updated_at` never
/// precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    /// The order identifier.
    pub id: OrderUuid,

    /// When the order was placed.
    pub created_at: Timestamp,

    /// When the order was last changed.
    pub updated_at: Timestamp,

    /// What was ordered.
    pub detail: OrderDetail,

    /// Whether the order is a one-off or came from a recurring template.
    pub kind: OrderKind,
}

/// A recurring template, materialized into every week from `start_week`
/// onward until an exception says otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecurringOrder {
    /// The template identifier.
    pub id: RecurringOrderUuid,

    /// The first week the template applies to.
    pub start_week: WeekIdentifier,

    /// What the template orders each week.
    pub detail: OrderDetail,
}

/// Marks a week in which a recurring order does not apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecurringOrderException {
    /// The exception identifier.
    pub id: RecurringOrderExceptionUuid,

    /// When the exception was recorded.
    pub created_at: Timestamp,

    /// The user the exception belongs to, when known.
    pub user: Option<User>,

    /// The week the exception skips, when known.
    pub week: Option<WeekIdentifier>,
}

/// An [`Order`] decorated with a display name.
///
/// A pure projection: every order field is read through the wrapped value,
/// never copied, so the wrapper cannot diverge from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociatedName {
    #[serde(flatten)]
    order: Order,
    name: String,
}

impl AssociatedName {
    /// Decorates `order` with a display name.
    pub fn new(order: Order, name: impl Into<String>) -> Self {
        Self {
            order,
            name: name.into(),
        }
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped order.
    pub const fn order(&self) -> &Order {
        &self.order
    }

    /// The wrapped order's identifier.
    pub const fn id(&self) -> OrderUuid {
        self.order.id
    }

    /// When the wrapped order was placed.
    pub const fn created_at(&self) -> Timestamp {
        self.order.created_at
    }

    /// When the wrapped order was last changed.
    pub const fn updated_at(&self) -> Timestamp {
        self.order.updated_at
    }

    /// What the wrapped order contains.
    pub const fn detail(&self) -> OrderDetail {
        self.order.detail
    }

    /// The wrapped order's kind.
    pub const fn kind(&self) -> OrderKind {
        self.order.kind
    }
}

/// An [`Order`] decorated with the [`User`] who placed it.
///
/// Same forwarding shape as [`AssociatedName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociatedUser {
    #[serde(flatten)]
    order: Order,
    user: User,
}

impl AssociatedUser {
    /// Decorates `order` with the user who placed it.
    pub const fn new(order: Order, user: User) -> Self {
        Self { order, user }
    }

    /// The user who placed the order.
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// The wrapped order.
    pub const fn order(&self) -> &Order {
        &self.order
    }

    /// The wrapped order's identifier.
    pub const fn id(&self) -> OrderUuid {
        self.order.id
    }

    /// When the wrapped order was placed.
    pub const fn created_at(&self) -> Timestamp {
        self.order.created_at
    }

    /// When the wrapped order was last changed.
    pub const fn updated_at(&self) -> Timestamp {
        self.order.updated_at
    }

    /// What the wrapped order contains.
    pub const fn detail(&self) -> OrderDetail {
        self.order.detail
    }

    /// The wrapped order's kind.
    pub const fn kind(&self) -> OrderKind {
        self.order.kind
    }
}
