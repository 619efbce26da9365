//! Frontend Models
//!
//! Task records matching the remote collection resource.

use serde::{Deserialize, Serialize};

/// A single to-do record (matches the server entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub is_completed: bool,
}

// ========================
// Collection Transforms
// ========================
// Views rebuild the full collection locally after each mutation and push it
// into the cache; server-assigned order is preserved throughout.

/// Collection with `created` appended at the end
pub fn append_todo(todos: &[Todo], created: Todo) -> Vec<Todo> {
    let mut next = todos.to_vec();
    next.push(created);
    next
}

/// Collection with the entry matching `updated.id` replaced, others untouched
pub fn replace_todo(todos: &[Todo], updated: Todo) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == updated.id {
                updated.clone()
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Collection without the entry matching `id`
pub fn remove_todo(todos: &[Todo], id: u32) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str, is_completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            is_completed,
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let todos = vec![make_todo(1, "a", true), make_todo(2, "b", false)];
        let next = append_todo(&todos, make_todo(3, "Buy milk", false));

        assert_eq!(next.len(), 3);
        assert_eq!(next[0].id, 1);
        assert_eq!(next[1].id, 2);
        assert_eq!(next[2].id, 3);
        assert_eq!(next[2].title, "Buy milk");
        assert!(!next[2].is_completed);
        // input untouched
        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn test_replace_touches_only_matching_id() {
        let todos = vec![
            make_todo(1, "a", false),
            make_todo(2, "b", false),
            make_todo(3, "c", true),
        ];
        let next = replace_todo(&todos, make_todo(2, "b", true));

        assert_eq!(next.len(), 3);
        assert!(!next[0].is_completed);
        assert!(next[1].is_completed);
        assert_eq!(next[1].title, "b");
        assert!(next[2].is_completed);
    }

    #[test]
    fn test_replace_title_keeps_id_and_completion() {
        let todos = vec![make_todo(7, "A", true)];
        let next = replace_todo(&todos, make_todo(7, "B", true));

        assert_eq!(next[0].id, 7);
        assert_eq!(next[0].title, "B");
        assert!(next[0].is_completed);
    }

    #[test]
    fn test_replace_twice_restores_completion() {
        let todos = vec![make_todo(1, "a", false), make_todo(2, "b", false)];

        let toggled = replace_todo(&todos, make_todo(1, "a", true));
        assert!(toggled[0].is_completed);

        let toggled_back = replace_todo(&toggled, make_todo(1, "a", false));
        assert_eq!(toggled_back, todos);
    }

    #[test]
    fn test_remove_drops_exactly_one() {
        let todos = vec![
            make_todo(1, "a", false),
            make_todo(5, "b", true),
            make_todo(9, "c", false),
        ];
        let next = remove_todo(&todos, 5);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, 1);
        assert_eq!(next[1].id, 9);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let todos = vec![make_todo(1, "a", false)];
        assert_eq!(remove_todo(&todos, 42), todos);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let value = serde_json::to_value(make_todo(3, "Buy milk", false)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 3, "title": "Buy milk", "isCompleted": false})
        );
    }

    #[test]
    fn test_list_response_deserializes() {
        let body = r#"[{"id":1,"title":"a","isCompleted":false},{"id":2,"title":"b","isCompleted":true}]"#;
        let todos: Vec<Todo> = serde_json::from_str(body).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0], make_todo(1, "a", false));
        assert_eq!(todos[1], make_todo(2, "b", true));
    }
}
