//! # Repository Module
//!
//! Database-backed implementations of the core storage ports.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Paginator / RecordUpdater / RecordLookup                              │
//! │       │                                                                 │
//! │       │  Arc<dyn RepositoryStore>                                       │
//! │       ▼                                                                 │
//! │  SqliteRepositoryStore                                                 │
//! │  ├── count_records()                                                   │
//! │  ├── fetch_slice(offset, limit)                                        │
//! │  ├── fetch_by_id(id)                                                   │
//! │  ├── update_record(id, changes)                                        │
//! │  └── insert(record)            fixtures and seeding only               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite `repository` table                                             │
//! │                                                                         │
//! │  Tests swap in InMemoryRepositoryStore or a mock behind the same port. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod records;
