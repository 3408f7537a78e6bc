//! First-match-wins lookup across prioritized reference sources.

use crate::views::{CustomerRecord, ProductRecord};
use billpress_records::{RawRecord, RecordError, load_records};
use billpress_types::Ident;
use log::debug;
use std::fmt;
use std::path::Path;

/// The kinds of reference entities the engine resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Customer,
    Product,
}

impl RefKind {
    /// The record field holding this kind's identifier.
    pub fn id_field(self) -> &'static str {
        match self {
            RefKind::Customer => "customer_id",
            RefKind::Product => "product_id",
        }
    }

    /// The file stem reference files use for this kind.
    pub fn file_stem(self) -> &'static str {
        match self {
            RefKind::Customer => "customer",
            RefKind::Product => "product",
        }
    }
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// One loaded candidate source, kept in priority position.
#[derive(Debug, Clone)]
struct ReferenceBatch {
    origin: String,
    records: Vec<RawRecord>,
}

/// An ordered list of candidate sources for one reference kind.
///
/// Order is behavior: lookups scan batches in the order they were pushed and
/// return the first record whose id field stringifies equal to the requested
/// identifier. A later batch never shadows an earlier one, even when its
/// record is more complete.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    kind: RefKind,
    batches: Vec<ReferenceBatch>,
}

impl ReferenceSet {
    pub fn new(kind: RefKind) -> Self {
        Self {
            kind,
            batches: Vec::new(),
        }
    }

    /// Appends a candidate source at the lowest priority position.
    pub fn push_batch(&mut self, origin: impl Into<String>, records: Vec<RawRecord>) {
        self.batches.push(ReferenceBatch {
            origin: origin.into(),
            records,
        });
    }

    /// Returns the first record matching `id`, or `None` when no candidate
    /// source has one. A miss is a value, not an error.
    pub fn resolve(&self, id: &Ident) -> Option<&RawRecord> {
        let field = self.kind.id_field();
        for batch in &self.batches {
            if let Some(record) = batch
                .records
                .iter()
                .find(|record| record.ident(field).as_ref() == Some(id))
            {
                debug!("Resolved {} '{}' from '{}'", self.kind, id, batch.origin);
                return Some(record);
            }
        }
        None
    }

    /// Total number of candidate records across all batches.
    pub fn len(&self) -> usize {
        self.batches.iter().map(|b| b.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.iter().all(|b| b.records.is_empty())
    }
}

/// Resolves customers and products against their candidate sources.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    customers: ReferenceSet,
    products: ReferenceSet,
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceResolver {
    /// Creates an empty resolver; every lookup misses until sources are added.
    pub fn new() -> Self {
        Self {
            customers: ReferenceSet::new(RefKind::Customer),
            products: ReferenceSet::new(RefKind::Product),
        }
    }

    /// Loads reference sources from a data directory.
    ///
    /// For each kind, `<stem>.csv` is loaded before `<stem>.json`, so flat
    /// sources always win ties. Missing files are skipped; sources are read
    /// exactly once and reused for every lookup of the run.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Result<Self, RecordError> {
        let dir = dir.as_ref();
        let mut resolver = Self::new();
        for kind in [RefKind::Customer, RefKind::Product] {
            for file_name in [
                format!("{}.csv", kind.file_stem()),
                format!("{}.json", kind.file_stem()),
            ] {
                let path = dir.join(&file_name);
                if path.exists() {
                    let records = load_records(&path)?;
                    debug!(
                        "Loaded {} {} reference records from '{}'",
                        records.len(),
                        kind,
                        path.display()
                    );
                    resolver.set_mut(kind).push_batch(path.display().to_string(), records);
                }
            }
        }
        Ok(resolver)
    }

    /// Appends a candidate source for `kind` at the lowest priority position.
    pub fn push_source(
        &mut self,
        kind: RefKind,
        origin: impl Into<String>,
        records: Vec<RawRecord>,
    ) {
        self.set_mut(kind).push_batch(origin, records);
    }

    /// Looks up a reference record of the given kind.
    pub fn resolve(&self, kind: RefKind, id: &Ident) -> Option<&RawRecord> {
        self.set(kind).resolve(id)
    }

    /// Resolves a customer into its typed view.
    pub fn customer(&self, id: &Ident) -> Option<CustomerRecord> {
        self.resolve(RefKind::Customer, id).map(CustomerRecord::from_record)
    }

    /// Resolves a product into its typed view.
    pub fn product(&self, id: &Ident) -> Option<ProductRecord> {
        self.resolve(RefKind::Product, id).map(ProductRecord::from_record)
    }

    fn set(&self, kind: RefKind) -> &ReferenceSet {
        match kind {
            RefKind::Customer => &self.customers,
            RefKind::Product => &self.products,
        }
    }

    fn set_mut(&mut self, kind: RefKind) -> &mut ReferenceSet {
        match kind {
            RefKind::Customer => &mut self.customers,
            RefKind::Product => &mut self.products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billpress_records::RawRecord;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::from_value(&value).unwrap()
    }

    #[test]
    fn test_resolve_miss_on_empty_resolver() {
        let resolver = ReferenceResolver::new();
        assert!(resolver.resolve(RefKind::Customer, &Ident::new("9")).is_none());
    }

    #[test]
    fn test_first_batch_wins() {
        let mut resolver = ReferenceResolver::new();
        resolver.push_source(
            RefKind::Customer,
            "customer.csv",
            vec![record(json!({ "customer_id": "9", "name": "Flat Co" }))],
        );
        resolver.push_source(
            RefKind::Customer,
            "customer.json",
            vec![record(json!({
                "customer_id": 9,
                "name": "Structured Co",
                "email": "more@complete.example"
            }))],
        );

        let hit = resolver.resolve(RefKind::Customer, &Ident::new("9")).unwrap();
        // The earlier (flat) source wins even though the later record is
        // more complete.
        assert_eq!(hit.display("name"), "Flat Co");
    }

    #[test]
    fn test_cross_type_id_match() {
        let mut resolver = ReferenceResolver::new();
        resolver.push_source(
            RefKind::Product,
            "product.json",
            vec![record(json!({ "product_id": 7, "name": "Widget", "price": 10.0 }))],
        );

        let hit = resolver.resolve(RefKind::Product, &Ident::new("7"));
        assert!(hit.is_some());
    }

    #[test]
    fn test_kinds_do_not_leak() {
        let mut resolver = ReferenceResolver::new();
        resolver.push_source(
            RefKind::Product,
            "product.csv",
            vec![record(json!({ "product_id": "A", "price": "10.00" }))],
        );

        assert!(resolver.resolve(RefKind::Customer, &Ident::new("A")).is_none());
        assert!(resolver.resolve(RefKind::Product, &Ident::new("A")).is_some());
    }

    #[test]
    fn test_scan_falls_through_to_later_batches() {
        let mut resolver = ReferenceResolver::new();
        resolver.push_source(
            RefKind::Customer,
            "customer.csv",
            vec![record(json!({ "customer_id": "1", "name": "First" }))],
        );
        resolver.push_source(
            RefKind::Customer,
            "customer.json",
            vec![record(json!({ "customer_id": "2", "name": "Second" }))],
        );

        let hit = resolver.resolve(RefKind::Customer, &Ident::new("2")).unwrap();
        assert_eq!(hit.display("name"), "Second");
    }

    #[test]
    fn test_from_data_dir_prefers_csv() {
        use std::fs;
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("customer.csv"),
            "customer_id,name\n9,Flat Co\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("customer.json"),
            r#"[{"customer_id": "9", "name": "Structured Co"}]"#,
        )
        .unwrap();

        let resolver = ReferenceResolver::from_data_dir(dir.path()).unwrap();
        let customer = resolver.customer(&Ident::new("9")).unwrap();
        assert_eq!(customer.name, "Flat Co");
    }

    #[test]
    fn test_from_data_dir_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ReferenceResolver::from_data_dir(dir.path()).unwrap();
        assert!(resolver.customer(&Ident::new("9")).is_none());
    }
}
