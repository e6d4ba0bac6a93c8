//! Schedule cells
//!
//! The three-way variant occupying one week of a rendered schedule, and
//! the projections that build it from order records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    orders::{
        Order, OrderDetail, OrderUuid, RecurringOrder, RecurringOrderException,
        RecurringOrderExceptionUuid, RecurringOrderUuid,
    },
    weeks::WeekIdentifier,
};

/// What occupies one week of the schedule.
///
/// Every case carries a caller-supplied identity, including [`Exception`]:
/// an exception cell must trace back to the
/// [`RecurringOrderException`] record it came from, so this crate never
/// generates an id on a caller's behalf.
///
/// [`Exception`]: OrderVariant::Exception
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderVariant {
    /// A one-off order placed for this week.
    Single {
        /// The order's identifier.
        id: OrderUuid,

        /// What was ordered.
        detail: OrderDetail,
    },

    /// An instance of a recurring order materialized into this week.
    Recurring {
        /// The recurring template's identifier.
        id: RecurringOrderUuid,

        /// What the template orders.
        detail: OrderDetail,
    },

    /// A recurring order explicitly skipped for this week. Carries no
    /// detail: it marks an absence, not an order.
    Exception {
        /// The identifier of the exception record the cell traces to.
        id: RecurringOrderExceptionUuid,
    },
}

impl OrderVariant {
    /// The carried order detail, or `None` for an exception cell.
    pub const fn detail(&self) -> Option<OrderDetail> {
        match self {
            Self::Single { detail, .. } | Self::Recurring { detail, .. } => Some(*detail),
            Self::Exception { .. } => None,
        }
    }

    /// The identity of whichever record the cell traces to, erased to a
    /// plain [`Uuid`].
    pub fn id(&self) -> Uuid {
        match self {
            Self::Single { id, .. } => (*id).into(),
            Self::Recurring { id, .. } => (*id).into(),
            Self::Exception { id } => (*id).into(),
        }
    }
}

/// One schedule cell: a week paired with what occupies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekOrderVariant {
    /// The week the cell belongs to.
    pub week: WeekIdentifier,

    /// What occupies the cell.
    pub order: OrderVariant,
}

impl Order {
    /// Projects this order into a schedule cell for `week`.
    #[must_use]
    pub const fn for_week(&self, week: WeekIdentifier) -> WeekOrderVariant {
        WeekOrderVariant {
            week,
            order: OrderVariant::Single {
                id: self.id,
                detail: self.detail,
            },
        }
    }
}

impl RecurringOrder {
    /// Projects this template into a schedule cell for `week`.
    #[must_use]
    pub const fn for_week(&self, week: WeekIdentifier) -> WeekOrderVariant {
        WeekOrderVariant {
            week,
            order: OrderVariant::Recurring {
                id: self.id,
                detail: self.detail,
            },
        }
    }
}

impl RecurringOrderException {
    /// Marks `week` as skipped, with a cell identity tracing back to this
    /// exception record.
    #[must_use]
    pub const fn for_week(&self, week: WeekIdentifier) -> WeekOrderVariant {
        WeekOrderVariant {
            week,
            order: OrderVariant::Exception { id: self.id },
        }
    }
}
