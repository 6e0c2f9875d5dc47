#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::storage::TaskStore;
    use tudu::libs::task::Priority;
    use tudu::libs::task_list::TaskList;

    struct ListTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ListTestContext {
        fn setup() -> Self {
            ListTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ListTestContext {
        fn list(&self) -> TaskList {
            TaskList::with_store(TaskStore::with_path(self.temp_dir.path().join("tasks.json")))
        }
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_assigns_next_number(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        list.add("Buy milk", Priority::Low, None).unwrap();
        let task = list.add("Walk dog", Priority::High, None).unwrap();

        assert_eq!(task.number, 2);
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert_eq!(task.category, "general");
        assert!(task.due_date.is_none());
        assert_eq!(list.len(), 2);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_trims_text(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let task = list.add("  Buy milk  ", Priority::Medium, None).unwrap();
        assert_eq!(task.text, "Buy milk");
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_rejects_empty_text(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        assert!(list.add("", Priority::High, None).is_none());
        assert!(list.add("   ", Priority::High, None).is_none());
        assert_eq!(list.len(), 0);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_with_category(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let task = list.add("Pay rent", Priority::Medium, Some("bills")).unwrap();
        assert_eq!(task.category, "bills");

        // Blank category falls back to the default
        let task = list.add("Buy milk", Priority::Medium, Some("  ")).unwrap();
        assert_eq!(task.category, "general");
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_delete_renumbers(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        for name in ["one", "two", "three"] {
            list.add(name, Priority::Medium, None).unwrap();
        }
        let id = list.by_number(2).unwrap().id;

        assert!(list.delete(id));
        assert_eq!(list.len(), 2);
        let numbers: Vec<usize> = list.tasks().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(list.by_number(2).unwrap().text, "three");
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_delete_unknown_id_is_noop(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        list.add("one", Priority::Medium, None).unwrap();
        assert!(!list.delete(uuid::Uuid::new_v4()));
        assert_eq!(list.len(), 1);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_toggle_complete_is_its_own_inverse(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let id = list.add("one", Priority::Medium, None).unwrap().id;
        let created_at = list.get(id).unwrap().created_at;

        assert_eq!(list.toggle_complete(id), Some(true));
        assert!(list.get(id).unwrap().completed);
        assert!(list.get(id).unwrap().updated_at >= created_at);

        assert_eq!(list.toggle_complete(id), Some(false));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_toggle_complete_unknown_id(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        assert_eq!(list.toggle_complete(uuid::Uuid::new_v4()), None);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_edit_session_commits_trimmed_draft(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let id = list.add("one", Priority::Medium, None).unwrap().id;

        assert!(list.start_edit(id));
        assert_eq!(list.editing().unwrap().text, "one");
        assert_eq!(list.editing().unwrap().priority, Priority::Medium);

        list.update_draft(Some("  updated text  "), Some(Priority::High));
        // Committed task is untouched while the draft is open
        assert_eq!(list.get(id).unwrap().text, "one");

        assert!(list.save_edit(id));
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "updated text");
        assert_eq!(task.priority, Priority::High);
        assert!(list.editing().is_none());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_edit_session_allows_empty_commit(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let id = list.add("one", Priority::Medium, None).unwrap().id;
        list.start_edit(id);
        list.update_draft(Some("   "), None);

        assert!(list.save_edit(id));
        assert_eq!(list.get(id).unwrap().text, "");
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_start_edit_last_start_wins(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let first = list.add("one", Priority::Medium, None).unwrap().id;
        let second = list.add("two", Priority::Medium, None).unwrap().id;

        list.start_edit(first);
        list.update_draft(Some("unsaved"), None);
        list.start_edit(second);

        // The first draft is discarded, not committed
        assert_eq!(list.editing().unwrap().id, second);
        assert_eq!(list.editing().unwrap().text, "two");
        assert_eq!(list.get(first).unwrap().text, "one");

        // Saving under the stale id is a no-op
        assert!(!list.save_edit(first));
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_start_edit_unknown_id(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        assert!(!list.start_edit(uuid::Uuid::new_v4()));
        assert!(list.editing().is_none());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_delete_clears_edit_session(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        let id = list.add("one", Priority::Medium, None).unwrap().id;
        list.start_edit(id);

        assert!(list.delete(id));
        assert!(list.editing().is_none());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_reorder_shifts_and_renumbers(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        list.add("Buy milk", Priority::Low, None).unwrap();
        list.add("Walk dog", Priority::High, None).unwrap();

        assert!(list.reorder(0, 1));
        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Walk dog", "Buy milk"]);
        assert_eq!(list.by_number(1).unwrap().text, "Walk dog");

        // Deleting the moved task leaves the remainder renumbered from 1
        let id = list.by_number(1).unwrap().id;
        assert!(list.delete(id));
        assert_eq!(list.len(), 1);
        assert_eq!(list.by_number(1).unwrap().text, "Buy milk");
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_reorder_rejects_bad_indices(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        list.add("one", Priority::Medium, None).unwrap();
        list.add("two", Priority::Medium, None).unwrap();

        assert!(!list.reorder(0, 0));
        assert!(!list.reorder(0, 2));
        assert!(!list.reorder(5, 0));

        let texts: Vec<&str> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_numbers_always_form_a_full_range(ctx: &mut ListTestContext) {
        let mut list = ctx.list();

        for i in 0..5 {
            list.add(&format!("task {}", i), Priority::Medium, None).unwrap();
        }
        list.reorder(4, 0);
        let id = list.by_number(3).unwrap().id;
        list.delete(id);
        list.reorder(1, 3);

        let numbers: Vec<usize> = list.tasks().iter().map(|t| t.number).collect();
        assert_eq!(numbers, (1..=list.len()).collect::<Vec<usize>>());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_transitions_persist_across_reopen(ctx: &mut ListTestContext) {
        let path = ctx.temp_dir.path().join("tasks.json");

        let mut list = TaskList::with_store(TaskStore::with_path(path.clone()));
        list.add("one", Priority::Low, None).unwrap();
        list.add("two", Priority::High, None).unwrap();
        let id = list.by_number(1).unwrap().id;
        list.toggle_complete(id).unwrap();
        list.reorder(0, 1);

        let reopened = TaskList::with_store(TaskStore::with_path(path));
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.by_number(1).unwrap().text, "two");
        assert_eq!(reopened.by_number(2).unwrap().text, "one");
        assert!(reopened.by_number(2).unwrap().completed);
    }
}
