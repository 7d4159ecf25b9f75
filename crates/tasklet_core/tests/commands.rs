use tasklet_core::{add_task, delete_task, toggle_task, Task};
use uuid::Uuid;

#[test]
fn add_appends_one_open_task_with_trimmed_text() {
    let list = sample_list();

    let next = add_task(&list, "  write tests  ");

    assert_eq!(next.len(), list.len() + 1);
    let added = next.last().unwrap();
    assert_eq!(added.text, "write tests");
    assert!(!added.completed);
}

#[test]
fn add_preserves_existing_tasks_and_order() {
    let list = sample_list();

    let next = add_task(&list, "new entry");

    assert_eq!(&next[..list.len()], &list[..]);
}

#[test]
fn add_generates_an_id_unseen_in_the_list() {
    let list = sample_list();

    let next = add_task(&list, "fresh");

    let added = next.last().unwrap();
    assert!(list.iter().all(|task| task.id != added.id));
    assert!(!added.id.is_nil());
}

#[test]
fn add_with_whitespace_only_input_is_a_noop() {
    let list = sample_list();

    for input in ["", "   ", "\t\n"] {
        let next = add_task(&list, input);
        assert_eq!(next, list, "input {input:?} should leave the list unchanged");
    }
}

#[test]
fn toggle_flips_only_the_matching_task() {
    let list = sample_list();
    let target = list[1].id;

    let next = toggle_task(&list, target);

    assert_eq!(next.len(), list.len());
    for (before, after) in list.iter().zip(&next) {
        assert_eq!(after.id, before.id, "id order must be preserved");
        assert_eq!(after.text, before.text);
        if before.id == target {
            assert_eq!(after.completed, !before.completed);
        } else {
            assert_eq!(after.completed, before.completed);
        }
    }
}

#[test]
fn toggle_twice_restores_the_original_list() {
    let list = sample_list();
    let target = list[0].id;

    let once = toggle_task(&list, target);
    let twice = toggle_task(&once, target);

    assert_eq!(twice, list);
}

#[test]
fn toggle_with_unknown_id_is_a_noop() {
    let list = sample_list();

    let next = toggle_task(&list, unknown_id());

    assert_eq!(next, list);
}

#[test]
fn delete_removes_only_the_matching_task_and_keeps_order() {
    let list = sample_list();
    let target = list[1].id;

    let next = delete_task(&list, target);

    assert_eq!(next.len(), list.len() - 1);
    assert!(next.iter().all(|task| task.id != target));
    assert_eq!(next[0], list[0]);
    assert_eq!(next[1], list[2]);
}

#[test]
fn delete_with_unknown_id_is_a_noop() {
    let list = sample_list();

    let next = delete_task(&list, unknown_id());

    assert_eq!(next, list);
}

#[test]
fn handlers_compose_into_a_full_lifecycle() {
    let empty: Vec<Task> = Vec::new();

    let with_task = add_task(&empty, "buy milk");
    assert_eq!(with_task.len(), 1);
    assert_eq!(with_task[0].text, "buy milk");
    assert!(!with_task[0].completed);

    let id = with_task[0].id;
    let done = toggle_task(&with_task, id);
    assert!(done[0].completed);

    let cleared = delete_task(&done, id);
    assert!(cleared.is_empty());
}

fn sample_list() -> Vec<Task> {
    vec![
        task_with_fixed_id("00000000-0000-4000-8000-000000000001", "first"),
        task_with_fixed_id("00000000-0000-4000-8000-000000000002", "second"),
        task_with_fixed_id("00000000-0000-4000-8000-000000000003", "third"),
    ]
}

fn task_with_fixed_id(id: &str, text: &str) -> Task {
    Task::with_id(Uuid::parse_str(id).unwrap(), text)
}

fn unknown_id() -> Uuid {
    Uuid::parse_str("ffffffff-ffff-4fff-8fff-ffffffffffff").unwrap()
}
