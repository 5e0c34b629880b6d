#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tock::db::tasks::Tasks;
    use tock::libs::error::TrackError;
    use tock::libs::task::Task;

    // Tests in this binary share the process environment, so the home
    // override is serialized.
    static HOME_LOCK: Mutex<()> = Mutex::new(());

    struct TaskTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("TOCK_HOME", temp_dir.path());
            TaskTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_assigns_sequential_ids(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create("Test", Some("Test")).unwrap();
        tasks.create("Wat", Some("blank")).unwrap();

        let all = tasks.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].name, "Test");
        assert_eq!(all[0].description.as_deref(), Some("Test"));
        assert_eq!(all[1].id, 2);
        assert_eq!(all[1].name, "Wat");
        assert_eq!(all[1].description.as_deref(), Some("blank"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_created_task_round_trips_by_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let created = tasks.create("Nonsense", Some("What's this")).unwrap();

        let fetched = tasks.by_id(created.id).unwrap();
        assert_eq!(fetched, created);

        let without_description = tasks.create("Bare", None).unwrap();
        let fetched = tasks.by_id(without_description.id).unwrap();
        assert_eq!(fetched.name, "Bare");
        assert_eq!(fetched.description, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_by_id_unknown_is_not_found(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.by_id(9).unwrap_err();
        assert!(matches!(err, TrackError::TaskNotFound(9)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_by_name_matches_substring(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create("Test", Some("Test")).unwrap();
        tasks.create("Wat", Some("blank")).unwrap();

        let found = tasks.by_name("at").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Wat");

        assert!(tasks.by_name("missing").unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_is_persisted(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let mut task = tasks.create("Original name", Some("Original description")).unwrap();

        task.name = "Not test".to_string();
        task.description = Some("descr".to_string());
        tasks.update(&task).unwrap();

        let in_db = tasks.by_id(task.id).unwrap();
        assert_eq!(in_db.name, "Not test");
        assert_eq!(in_db.description.as_deref(), Some("descr"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_id_is_silent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let ghost = Task {
            id: 42,
            name: "Ghost".to_string(),
            description: None,
        };
        tasks.update(&ghost).unwrap();
        assert!(tasks.all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_schema_init_is_idempotent(_ctx: &mut TaskTestContext) {
        let mut first = Tasks::new().unwrap();
        first.create("Test", None).unwrap();

        let mut second = Tasks::new().unwrap();
        assert_eq!(second.all().unwrap().len(), 1);
    }
}
