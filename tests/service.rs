#[cfg(test)]
mod tests {
    use tydo::libs::service::{ResolveError, TaskService};
    use tydo::libs::sort::SortMode;
    use tydo::storage::MemoryStore;

    fn service() -> TaskService {
        TaskService::new(MemoryStore::new())
    }

    #[test]
    fn test_add_task_returns_trimmed_payload() {
        let mut service = service();

        let outcome = service.add_task("  Buy milk  ", "  two liters  ", false);

        assert!(outcome.success);
        let task = outcome.task.unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "two liters");
        assert!(outcome.message.contains(&task.short_id()));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_add_task_validation_failure() {
        let mut service = service();

        let outcome = service.add_task("   ", "description", false);

        assert!(!outcome.success);
        assert!(outcome.task.is_none());
        assert_eq!(outcome.message, "Title cannot be empty");
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_duplicate_title_blocks_unless_forced() {
        let mut service = service();
        assert!(service.add_task("A", "", false).success);

        // Same title again without force: distinguished duplicate outcome,
        // nothing created.
        let duplicate = service.add_task("A", "", false);
        assert!(!duplicate.success);
        assert!(duplicate.task.is_none());
        assert!(duplicate.message.contains("already exists"));
        assert_eq!(service.count(), 1);

        // Forced: created alongside the original.
        let forced = service.add_task("A", "", true);
        assert!(forced.success);
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_duplicate_check_ignores_case_and_whitespace() {
        let mut service = service();
        service.add_task("Buy Milk", "", false);

        assert!(service.check_duplicate_title("buy milk "));
    }

    #[test]
    fn test_resolve_prefix_single_match() {
        let mut service = service();
        let id = service.add_task("Only", "", false).task.unwrap().id;

        let prefix = &id.to_string()[..8];
        assert_eq!(service.resolve_id_prefix(prefix).unwrap(), id);
        // The full id resolves too.
        assert_eq!(service.resolve_id_prefix(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_resolve_prefix_not_found() {
        let service = service();

        let err = service.resolve_id_prefix("deadbeef").unwrap_err();
        assert_eq!(err, ResolveError::NotFound("deadbeef".to_string()));
        assert_eq!(err.to_string(), "Task not found: deadbeef");
    }

    #[test]
    fn test_empty_prefix_is_ambiguous_with_multiple_tasks() {
        let mut service = service();
        let first = service.add_task("First", "", false).task.unwrap();
        let second = service.add_task("Second", "", false).task.unwrap();

        let err = service.resolve_id_prefix("").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Ambiguous ID prefix ''"));
        assert!(message.contains(&first.short_id()));
        assert!(message.contains(&second.short_id()));
    }

    #[test]
    fn test_empty_prefix_resolves_with_a_single_task() {
        let mut service = service();
        let id = service.add_task("Only", "", false).task.unwrap().id;

        assert_eq!(service.resolve_id_prefix("").unwrap(), id);
    }

    #[test]
    fn test_get_task_surfaces_resolution_errors() {
        let service = service();

        let outcome = service.get_task("deadbeef");
        assert!(!outcome.success);
        assert_eq!(outcome.message, ResolveError::NotFound("deadbeef".to_string()).to_string());
    }

    #[test]
    fn test_update_task_via_prefix() {
        let mut service = service();
        let task = service.add_task("Original", "old", false).task.unwrap();

        let outcome = service.update_task(&task.short_id(), Some("Renamed"), None);
        assert!(outcome.success);

        let fetched = service.get_task(&task.short_id()).task.unwrap();
        assert_eq!(fetched.title, "Renamed");
        assert_eq!(fetched.description, "old");
    }

    #[test]
    fn test_update_task_requires_a_field() {
        let mut service = service();
        let task = service.add_task("Original", "", false).task.unwrap();

        let outcome = service.update_task(&task.short_id(), None, None);
        assert!(!outcome.success);
        assert_eq!(outcome.message, "At least one field must be provided for update");
    }

    #[test]
    fn test_update_task_rejects_empty_title() {
        let mut service = service();
        let task = service.add_task("Original", "", false).task.unwrap();

        let outcome = service.update_task(&task.short_id(), Some("   "), None);
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Title cannot be empty");
        assert_eq!(service.get_task(&task.short_id()).task.unwrap().title, "Original");
    }

    #[test]
    fn test_delete_task_via_prefix() {
        let mut service = service();
        let task = service.add_task("Doomed", "", false).task.unwrap();

        let outcome = service.delete_task(&task.short_id());
        assert!(outcome.success);
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_delete_nonexistent_leaves_store_unchanged() {
        let mut service = service();
        service.add_task("Survivor", "", false);

        let outcome = service.delete_task("deadbeef");
        assert!(!outcome.success);
        assert!(outcome.message.contains("deadbeef"));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_toggle_task_roundtrip() {
        let mut service = service();
        let task = service.add_task("Flip me", "", false).task.unwrap();

        let first = service.toggle_task(&task.short_id());
        assert!(first.success);
        assert!(first.task.unwrap().completed);
        assert!(first.message.contains("complete"));

        let second = service.toggle_task(&task.short_id());
        assert!(second.success);
        assert!(!second.task.unwrap().completed);
        assert!(second.message.contains("incomplete"));
    }

    #[test]
    fn test_list_tasks_default_mode_groups_incomplete_first() {
        let mut service = service();
        for title in ["One", "Two", "Three", "Four"] {
            service.add_task(title, "", false);
        }
        let ids: Vec<_> = service.list_tasks(SortMode::Insertion).iter().map(|t| t.id.to_string()).collect();
        service.toggle_task(&ids[0]);
        service.toggle_task(&ids[2]);

        let listed = service.list_tasks(SortMode::IncompleteFirst);
        let first_completed = listed.iter().position(|t| t.completed).unwrap();
        assert!(listed[..first_completed].iter().all(|t| !t.completed));
        assert!(listed[first_completed..].iter().all(|t| t.completed));
        for group in [&listed[..first_completed], &listed[first_completed..]] {
            assert!(group.windows(2).all(|pair| pair[0].created_at <= pair[1].created_at));
        }
    }

    #[test]
    fn test_list_tasks_newest_first_reverses_oldest_first() {
        let mut service = service();
        for title in ["One", "Two", "Three"] {
            service.add_task(title, "", false);
            // Keep creation timestamps strictly increasing.
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let mut oldest_first = service.list_tasks(SortMode::CreatedAsc);
        let newest_first = service.list_tasks(SortMode::CreatedDesc);
        oldest_first.reverse();
        let lhs: Vec<_> = oldest_first.iter().map(|t| t.id).collect();
        let rhs: Vec<_> = newest_first.iter().map(|t| t.id).collect();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_outcome_serializes_for_request_boundaries() {
        let mut service = service();
        let outcome = service.add_task("Exported", "", false);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["task"]["title"], "Exported");

        let failure = service.delete_task("deadbeef");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["success"], false);
        // Absent payloads are omitted, not null.
        assert!(json.get("task").is_none());
    }
}
