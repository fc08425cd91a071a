//! Storage interface for marketplace records
//!
//! The service layer never touches a backend directly. It asks a
//! [`MarketStore`] for either a read snapshot ([`ReadTx`]) or an exclusive
//! write transaction ([`WriteTx`]). Writes staged on a transaction become
//! visible only when it is committed; dropping an uncommitted transaction
//! discards them.
//!
//! Stores behave like a relational schema: they enforce per-role email
//! uniqueness and every foreign key when a record is staged.

use crate::core::entity::{Actor, Entity};
use crate::entities::{Group, Order, Product, Review, Supplier, Vendor};
use async_trait::async_trait;
use indexmap::IndexMap;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity_type}.{field} must be unique, '{value}' is already used")]
    UniqueViolation {
        entity_type: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity_type}.{field} references missing {target} '{id}'")]
    ForeignKeyViolation {
        entity_type: &'static str,
        field: &'static str,
        target: &'static str,
        id: Uuid,
    },

    #[error("store is closed")]
    Closed,
}

/// Insertion-ordered collection of one entity type keyed by id
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: IndexMap<Uuid, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }
}

impl<T: Entity> Table<T> {
    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.rows.contains_key(id)
    }

    /// Rows in creation order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.rows.values().find(|row| predicate(*row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn put(&mut self, row: T) -> Option<T> {
        self.rows.insert(row.id(), row)
    }

    pub(crate) fn remove(&mut self, id: &Uuid) -> Option<T> {
        self.rows.shift_remove(id)
    }
}

impl<T: Actor> Table<T> {
    /// Look an actor up by (already normalized) email
    pub fn by_email(&self, email: &str) -> Option<&T> {
        self.find(|row| row.email() == email)
    }
}

macro_rules! define_records {
    ($($variant:ident => $table:ident),+ $(,)?) => {
        /// A single record of any entity type, as staged on a write transaction
        #[derive(Debug, Clone)]
        pub enum Record {
            $($variant($variant),)+
        }

        /// Entity type of a [`Record`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum RecordKind {
            $($variant,)+
        }

        impl Record {
            pub fn id(&self) -> Uuid {
                match self {
                    $(Record::$variant(row) => row.id(),)+
                }
            }

            pub fn kind(&self) -> RecordKind {
                match self {
                    $(Record::$variant(_) => RecordKind::$variant,)+
                }
            }
        }

        impl RecordKind {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RecordKind::$variant => $variant::resource_name_singular(),)+
                }
            }
        }

        $(
            impl From<$variant> for Record {
                fn from(row: $variant) -> Self {
                    Record::$variant(row)
                }
            }
        )+

        /// All marketplace tables
        #[derive(Debug, Clone, Default)]
        pub struct Tables {
            $(pub $table: Table<$variant>,)+
        }

        impl Tables {
            /// Insert or replace a record, returning the previous version
            pub(crate) fn put(&mut self, record: Record) -> Option<Record> {
                match record {
                    $(Record::$variant(row) => self.$table.put(row).map(Record::$variant),)+
                }
            }

            pub(crate) fn remove(&mut self, kind: RecordKind, id: &Uuid) -> Option<Record> {
                match kind {
                    $(RecordKind::$variant => self.$table.remove(id).map(Record::$variant),)+
                }
            }
        }
    };
}

define_records! {
    Vendor => vendors,
    Supplier => suppliers,
    Product => products,
    Group => groups,
    Order => orders,
    Review => reviews,
}

impl Tables {
    /// Check the unique and foreign key constraints a record must satisfy
    /// before it can be staged.
    pub fn check_integrity(&self, record: &Record) -> Result<(), StoreError> {
        match record {
            Record::Vendor(vendor) => unique_email(&self.vendors, vendor),
            Record::Supplier(supplier) => unique_email(&self.suppliers, supplier),
            Record::Product(product) => {
                references(&self.suppliers, "product", "supplier_id", product.supplier_id)
            }
            Record::Group(group) => {
                references(&self.products, "group", "product_id", group.product_id)?;
                references(&self.vendors, "group", "created_by", group.created_by)
            }
            Record::Order(order) => {
                references(&self.vendors, "order", "vendor_id", order.vendor_id)?;
                references(&self.groups, "order", "group_id", order.group_id)
            }
            Record::Review(review) => {
                references(&self.vendors, "review", "vendor_id", review.vendor_id)?;
                references(&self.suppliers, "review", "supplier_id", review.supplier_id)
            }
        }
    }
}

fn unique_email<T: Actor>(table: &Table<T>, row: &T) -> Result<(), StoreError> {
    match table.by_email(row.email()) {
        Some(existing) if existing.id() != row.id() => Err(StoreError::UniqueViolation {
            entity_type: T::resource_name_singular(),
            field: "email",
            value: row.email().to_string(),
        }),
        _ => Ok(()),
    }
}

fn references<T: Entity>(
    table: &Table<T>,
    entity_type: &'static str,
    field: &'static str,
    id: Uuid,
) -> Result<(), StoreError> {
    if table.contains(&id) {
        Ok(())
    } else {
        Err(StoreError::ForeignKeyViolation {
            entity_type,
            field,
            target: T::resource_name_singular(),
            id,
        })
    }
}

/// Consistent read-only view of every table
pub trait ReadTx: Send + Sync {
    fn tables(&self) -> &Tables;
}

/// Exclusive transaction; concurrent write transactions are serialized
pub trait WriteTx: ReadTx {
    /// Stage an insert (or replacement) after checking integrity constraints.
    /// Staged records are visible to later reads on this transaction.
    fn put(&mut self, record: Record) -> Result<(), StoreError>;

    /// Make every staged write durable and visible to other transactions
    fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

/// Storage backend for marketplace records
#[async_trait]
pub trait MarketStore: Send + Sync {
    /// Open a read snapshot
    async fn read(&self) -> Result<Box<dyn ReadTx>, StoreError>;

    /// Open a write transaction, waiting for any other writer to finish
    async fn write(&self) -> Result<Box<dyn WriteTx>, StoreError>;

    /// Stop accepting transactions. Called once on shutdown.
    async fn close(&self);
}
