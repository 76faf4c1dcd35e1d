#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vrata::libs::data_storage::DataStorage;
    use vrata::libs::task::TaskFrequency;
    use vrata::store::tasks::{TaskStore, STATE_FILE_NAME};

    struct StorageTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_seed_on_first_launch(_ctx: &mut StorageTestContext) {
        let store = TaskStore::new().unwrap();

        let titles: Vec<&str> = store.all().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Deep Work Session (2h)", "Review Weekly Metrics", "Pay Server Bill"]);

        let review = &store.all()[1];
        assert!(review.completed);
        assert!(review.completed_at.is_none());
        assert_eq!(review.frequency, TaskFrequency::Weekly);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_seed_on_corrupt_state_file(_ctx: &mut StorageTestContext) {
        let path = DataStorage::new().get_path(STATE_FILE_NAME).unwrap();
        fs::write(&path, "{ not json at all").unwrap();

        let store = TaskStore::new().unwrap();
        assert_eq!(store.all().len(), 3);
        assert_eq!(store.all()[0].title, "Deep Work Session (2h)");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_load_round_trip(_ctx: &mut StorageTestContext) {
        let mut store = TaskStore::new().unwrap();
        store.create("Ship release", TaskFrequency::Monthly).unwrap();
        let id = store.all()[0].id.clone();
        store.toggle(&id).unwrap();
        let saved = store.all().to_vec();
        drop(store);

        let reopened = TaskStore::new().unwrap();
        assert_eq!(reopened.all(), saved.as_slice());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_every_mutation_is_persisted(_ctx: &mut StorageTestContext) {
        let mut store = TaskStore::new().unwrap();
        let seeded = store.all().len();

        let id = store.create("Evening review", TaskFrequency::Daily).unwrap().unwrap().id.clone();
        assert_eq!(TaskStore::new().unwrap().all().len(), seeded + 1);

        store.toggle(&id).unwrap();
        assert!(TaskStore::new().unwrap().get(&id).unwrap().completed);

        store.delete(&id).unwrap();
        assert!(TaskStore::new().unwrap().get(&id).is_none());
    }
}
