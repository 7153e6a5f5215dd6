use sled::Db;
use std::str::FromStr;

const TREE_NAME: &str = "session";
const SESSION_COST_KEY: &str = "session_cost";
const SUMMARY_COUNT_KEY: &str = "summary_count";

/// Running totals for the current session. Only ever grow, except through
/// [`SessionStore::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionTotals {
    pub total_cost: f64,
    pub summary_count: u64,
}

#[derive(Clone)]
pub struct SessionStore {
    tree: sled::Tree,
}

impl SessionStore {
    pub fn new(db: &Db) -> sled::Result<Self> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { tree })
    }

    /// Missing or unparseable values fall back to zero.
    pub fn load(&self) -> SessionTotals {
        SessionTotals {
            total_cost: self.read_value(SESSION_COST_KEY),
            summary_count: self.read_value(SUMMARY_COUNT_KEY),
        }
    }

    pub fn save(&self, totals: &SessionTotals) -> sled::Result<()> {
        self.tree
            .insert(SESSION_COST_KEY, totals.total_cost.to_string().as_bytes())?;
        self.tree.insert(
            SUMMARY_COUNT_KEY,
            totals.summary_count.to_string().as_bytes(),
        )?;
        // Flush so a short-lived process cannot lose the update.
        self.tree.flush()?;
        Ok(())
    }

    /// Record one successful summarization: add its estimated cost and bump
    /// the count together.
    pub fn add(&self, cost: f64) -> sled::Result<SessionTotals> {
        let mut totals = self.load();
        totals.total_cost += cost;
        totals.summary_count += 1;
        self.save(&totals)?;
        Ok(totals)
    }

    pub fn clear(&self) -> sled::Result<()> {
        self.save(&SessionTotals::default())
    }

    fn read_value<T: FromStr + Default>(&self, key: &str) -> T {
        self.tree
            .get(key)
            .ok()
            .flatten()
            .and_then(|value| String::from_utf8(value.to_vec()).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (SessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db = sled::open(temp_dir.path()).unwrap();
        let store = SessionStore::new(&db).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_fresh_store_loads_zeros() {
        let (store, _temp) = create_test_store();

        assert_eq!(store.load(), SessionTotals::default());
    }

    #[test]
    fn test_add_accumulates_cost_and_count() {
        let (store, _temp) = create_test_store();

        store.add(0.0002775).unwrap();
        let totals = store.add(0.0001995).unwrap();

        assert_eq!(totals.summary_count, 2);
        assert!((totals.total_cost - 0.000477).abs() < 1e-9);
        assert_eq!(store.load(), totals);
    }

    #[test]
    fn test_clear_resets_and_persists() {
        let (store, _temp) = create_test_store();

        store.add(0.5).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load(), SessionTotals::default());
    }

    #[test]
    fn test_totals_survive_reopening_the_database() {
        let temp_dir = TempDir::new().unwrap();

        {
            let db = sled::open(temp_dir.path()).unwrap();
            let store = SessionStore::new(&db).unwrap();
            store.add(0.25).unwrap();
        }

        let db = sled::open(temp_dir.path()).unwrap();
        let store = SessionStore::new(&db).unwrap();
        let totals = store.load();

        assert_eq!(totals.summary_count, 1);
        assert!((totals.total_cost - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_unparseable_values_load_as_zeros() {
        let (store, _temp) = create_test_store();

        store.tree.insert(SESSION_COST_KEY, b"not a number").unwrap();
        store.tree.insert(SUMMARY_COUNT_KEY, b"-3").unwrap();

        assert_eq!(store.load(), SessionTotals::default());
    }
}
