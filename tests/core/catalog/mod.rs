//! Catalog layer tests
//!
//! Loading catalogs from disk and reading them back through the store.

mod test_loader;
