//! Enumerated string fields
//!
//! Each set is matched case-sensitively against its wire spelling. The
//! declaration order of the variants is the order used in validation
//! messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed set of string values
pub trait Enumerated: Sized + Copy + 'static {
    /// Every value, in declaration order
    const ALL: &'static [Self];

    /// Wire spelling
    fn as_str(self) -> &'static str;

    /// Exact (case-sensitive) lookup
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == value)
    }

    /// `"a, b, c"` in declaration order
    fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Stored text that is not a member of the expected set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl Enumerated for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownVariant;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <Self as Enumerated>::parse(&value).ok_or(UnknownVariant { kind: $kind, value })
            }
        }
    };
}

string_enum! {
    /// Dining room section a table belongs to
    Section as "section" {
        MainDining => "Main Dining",
        Patio => "Patio",
        BarArea => "Bar Area",
        PrivateRoom => "Private Room",
    }
}

string_enum! {
    /// Occupancy state of a table
    TableStatus as "table status" {
        Available => "available",
        Occupied => "occupied",
        Reserved => "reserved",
        Cleaning => "cleaning",
    }
}

string_enum! {
    /// Menu category
    MenuCategory as "category" {
        Appetizer => "Appetizer",
        MainCourse => "Main Course",
        Dessert => "Dessert",
        Beverage => "Beverage",
        Side => "Side",
    }
}

string_enum! {
    /// Kitchen workflow of an order
    ///
    /// received → preparing → ready → served, or cancelled at any point.
    /// The workflow is descriptive only; any value may follow any other.
    OrderStatus as "order status" {
        Received => "received",
        Preparing => "preparing",
        Ready => "ready",
        Served => "served",
        Cancelled => "cancelled",
    }
}
