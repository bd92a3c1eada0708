/// CSV export of derived tables.
pub mod export;
