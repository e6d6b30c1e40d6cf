use serde::{Deserialize, Serialize};

use stockring_core::{Handle, WarehouseError, WarehouseResult, ensure_positive_quantity};

/// One inventory line: an immutable name plus a mutable stock count.
///
/// Items are never removed from the registry; issuing stock only decrements
/// `quantity`, which may reach exactly zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: u32,
}

impl Item {
    fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Arena slot: the stored item plus its successor in the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ItemNode {
    item: Item,
    next: Handle,
}

/// Circular singly-linked list of inventory items.
///
/// Nodes live in an arena (`nodes`) and link to each other by [`Handle`];
/// the tail's successor is always the head, so a full traversal is "visit,
/// advance, stop when back at head". A single-node registry is self-linked.
/// Duplicate names are permitted and kept as distinct nodes; lookups stop at
/// the first match from the head.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemRegistry {
    nodes: Vec<ItemNode>,
    /// `(head, tail)` of the ring; `None` while the registry is empty.
    ends: Option<(Handle, Handle)>,
}

/// Snapshot produced by [`ItemRegistry::display_items`].
///
/// An empty registry yields the `NoItems` sentinel rather than an empty
/// sequence, so renderers can distinguish "nothing stocked" explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemListing {
    NoItems,
    Items(Vec<Item>),
}

impl ItemListing {
    pub fn as_items(&self) -> Option<&[Item]> {
        match self {
            ItemListing::NoItems => None,
            ItemListing::Items(items) => Some(items),
        }
    }
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of item nodes (not units of stock).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    /// Stock a new item line at the tail of the ring.
    ///
    /// No duplicate detection: adding the same name twice yields two
    /// independent nodes.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: u32) -> WarehouseResult<()> {
        ensure_positive_quantity(quantity)?;

        let handle = Handle::new(self.nodes.len());
        match self.ends {
            None => {
                // First node points at itself in a ring of one.
                self.nodes.push(ItemNode {
                    item: Item::new(name, quantity),
                    next: handle,
                });
                self.ends = Some((handle, handle));
            }
            Some((head, tail)) => {
                self.nodes.push(ItemNode {
                    item: Item::new(name, quantity),
                    next: head,
                });
                self.nodes[tail.index()].next = handle;
                self.ends = Some((head, handle));
            }
        }
        Ok(())
    }

    /// Dump every item in insertion order.
    pub fn display_items(&self) -> ItemListing {
        let Some((head, _)) = self.ends else {
            return ItemListing::NoItems;
        };

        let mut items = Vec::with_capacity(self.nodes.len());
        let mut current = head;
        loop {
            let node = &self.nodes[current.index()];
            items.push(node.item.clone());
            current = node.next;
            if current == head {
                break;
            }
        }
        ItemListing::Items(items)
    }

    /// Linear-scan lookup: stock held by the first item matching `name`.
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        let (head, _) = self.ends?;
        let mut current = head;
        loop {
            let node = &self.nodes[current.index()];
            if node.item.name == name {
                return Some(node.item.quantity);
            }
            current = node.next;
            if current == head {
                return None;
            }
        }
    }

    /// Issue `quantity` units of the first item matching `name`, returning
    /// the stock remaining on that line.
    ///
    /// The node stays in the ring even when its quantity reaches zero; no
    /// deletion primitive exists. On any error no state changes.
    pub fn remove_item(&mut self, name: &str, quantity: u32) -> WarehouseResult<u32> {
        let Some((head, _)) = self.ends else {
            return Err(WarehouseError::EmptyRegistry);
        };

        let mut current = head;
        loop {
            let node = &mut self.nodes[current.index()];
            if node.item.name == name {
                if node.item.quantity < quantity {
                    return Err(WarehouseError::insufficient(
                        name,
                        quantity,
                        node.item.quantity,
                    ));
                }
                node.item.quantity -= quantity;
                return Ok(node.item.quantity);
            }
            current = node.next;
            if current == head {
                return Err(WarehouseError::not_found(name));
            }
        }
    }
}
