use taskmgr_core::{
    CompactFormatter, DetailedFormatter, InMemoryStorage, JsonFileStorage, Priority, ServiceError,
    Task, TaskFormatter, TaskService, TaskStorage, TaskUpdate, NO_TASKS_MESSAGE,
};

fn fixtures() -> Vec<Task> {
    vec![
        Task::new("Write documentation")
            .unwrap()
            .with_description("API docs")
            .with_priority(Priority::High),
        Task::new("Fix bug").unwrap().with_priority(Priority::Low),
        Task::new("Update docs").unwrap(),
        Task::new("Plan sprint").unwrap(),
    ]
}

fn run_crud_scenario<S: TaskStorage>(storage: S, tasks: &[Task]) -> Vec<Task> {
    let mut service = TaskService::new(storage);
    assert!(service.get_all().unwrap().is_empty());

    for task in tasks {
        service.add(task.clone()).unwrap();
    }
    service.complete(0).unwrap();
    service
        .update(
            1,
            TaskUpdate {
                title: Some("Fix login bug".into()),
                priority: Some(Priority::Medium),
                ..TaskUpdate::default()
            },
        )
        .unwrap();
    service.delete(2).unwrap();
    assert!(service.delete(9).is_err());
    assert_eq!(service.search("doc").unwrap().len(), 1);
    service.get_all().unwrap()
}

#[test]
fn storages_are_interchangeable_for_full_crud_scenario() {
    let tasks = fixtures();
    let dir = tempfile::tempdir().unwrap();
    let mut file = JsonFileStorage::new(dir.path().join("tasks.json"));

    let from_memory = run_crud_scenario(InMemoryStorage::new(), &tasks);
    let from_file = run_crud_scenario(&mut file, &tasks);

    assert_eq!(from_memory, from_file);
    assert_eq!(from_memory.len(), 3);
    assert!(from_memory[0].completed);
    assert_eq!(from_memory[1].title, "Fix login bug");
    assert_eq!(from_memory[2].title, "Plan sprint");

    // The durable store keeps the result after the service is gone.
    assert_eq!(file.load().unwrap(), from_file);
    assert_eq!(
        JsonFileStorage::new(dir.path().join("tasks.json"))
            .load()
            .unwrap(),
        from_file
    );
}

fn add_blanked_task_then_continue<S: TaskStorage>(storage: S) -> Vec<Task> {
    let mut service = TaskService::new(storage);
    let mut blanked = Task::new("placeholder").unwrap();
    blanked.title = String::new();

    assert!(matches!(
        service.add(blanked),
        Err(ServiceError::Validation(_))
    ));
    service.add(Task::new("still usable").unwrap()).unwrap();

    let tasks = service.get_all().unwrap();
    assert_eq!(service.storage().load().unwrap(), tasks);
    tasks
}

#[test]
fn blank_title_is_refused_by_both_storages_and_store_stays_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");

    let from_memory = add_blanked_task_then_continue(InMemoryStorage::new());
    let from_file = add_blanked_task_then_continue(JsonFileStorage::new(&path));

    let titles = |tasks: &[Task]| tasks.iter().map(|t| t.title.clone()).collect::<Vec<_>>();
    assert_eq!(titles(&from_memory), ["still usable"]);
    assert_eq!(titles(&from_file), ["still usable"]);
    assert_eq!(JsonFileStorage::new(&path).load().unwrap(), from_file);
}

#[test]
fn formatters_are_interchangeable() {
    let tasks = fixtures();
    let formatters: [&dyn TaskFormatter; 2] = [&CompactFormatter, &DetailedFormatter];

    for formatter in formatters {
        assert_eq!(formatter.format_tasks(&[]), NO_TASKS_MESSAGE);
        let text = formatter.format_tasks(&tasks);
        for task in &tasks {
            assert!(text.contains(&task.title));
        }
    }
}
