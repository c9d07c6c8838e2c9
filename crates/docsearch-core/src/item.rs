#![forbid(unsafe_code)]

//! Searchable catalog items.
//!
//! A [`Catalog`] is the fixed, once-loaded sequence of [`Item`]s that every
//! query is matched against. Items are immutable after loading and the
//! catalog preserves source order, which the ranker relies on for stable
//! tie-breaking between indistinguishable results.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Missing `name` | Decodes as empty; never matches a non-empty query |
//! | Missing or empty `docs` | [`Item::docs`] returns `None` |
//! | Unknown `type` string | Kept verbatim as [`ItemType::Other`] |

use core::fmt;

/// Kind of documentation entity an item describes.
///
/// Serialized as its lowercase wire name. Type strings this build does not
/// know are kept verbatim in [`ItemType::Other`] so the badge text survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum ItemType {
    Application,
    Command,
    Event,
    Timeout,
    Aggregate,
    Process,
    Projection,
    Integration,
    /// Any other type string, as sent.
    Other(String),
}

/// Presentation family of an [`ItemType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// Message roles: command, event, timeout.
    Role,
    /// Message handlers: aggregate, process, projection, integration.
    HandlerType,
    /// Everything else (applications, unknown types).
    Unclassified,
}

impl ItemType {
    /// Every known type, in declaration order.
    pub const ALL: [ItemType; 8] = [
        Self::Application,
        Self::Command,
        Self::Event,
        Self::Timeout,
        Self::Aggregate,
        Self::Process,
        Self::Projection,
        Self::Integration,
    ];

    /// Wire name of the type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Application => "application",
            Self::Command => "command",
            Self::Event => "event",
            Self::Timeout => "timeout",
            Self::Aggregate => "aggregate",
            Self::Process => "process",
            Self::Projection => "projection",
            Self::Integration => "integration",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a wire name. Unknown names are kept in [`ItemType::Other`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .unwrap_or_else(|| Self::Other(s.to_owned()))
    }

    /// Presentation family used to pick a badge style.
    #[must_use]
    pub const fn family(&self) -> TypeFamily {
        match self {
            Self::Command | Self::Event | Self::Timeout => TypeFamily::Role,
            Self::Aggregate | Self::Process | Self::Projection | Self::Integration => {
                TypeFamily::HandlerType
            }
            Self::Application | Self::Other(_) => TypeFamily::Unclassified,
        }
    }

    /// Badge class for the renderer, e.g. `role-command` or
    /// `handlertype-aggregate`. `None` for unclassified types.
    #[must_use]
    pub fn css_class(&self) -> Option<String> {
        match self.family() {
            TypeFamily::Role => Some(format!("role-{}", self.as_str())),
            TypeFamily::HandlerType => Some(format!("handlertype-{}", self.as_str())),
            TypeFamily::Unclassified => None,
        }
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        match Self::parse(&s) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<ItemType> for String {
    fn from(kind: ItemType) -> Self {
        match kind {
            ItemType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single searchable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display name; the only field the matcher looks at.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Link target activated when the result is submitted.
    pub uri: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ItemType,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub docs: Option<String>,
}

impl Item {
    /// Create an item without documentation.
    #[must_use]
    pub fn new(name: impl Into<String>, uri: impl Into<String>, kind: ItemType) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
            kind,
            docs: None,
        }
    }

    /// Attach documentation text.
    #[must_use]
    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    /// Documentation text, treating an empty string as absent.
    #[must_use]
    pub fn docs(&self) -> Option<&str> {
        self.docs.as_deref().filter(|d| !d.is_empty())
    }
}

/// Ordered, immutable set of searchable items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a catalog from items in source order.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a catalog position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Items in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
