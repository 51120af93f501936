/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Creation-time derived identifier (milliseconds since the epoch)
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Ordered task list plus the id of the task currently in focus
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    pub tasks: Vec<Task>,
    pub active_task_id: Option<i64>,
    last_id: Option<i64>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task created at `now_millis`.
    /// Returns the new id, or None when the trimmed text is empty.
    pub fn add(&mut self, text: &str, now_millis: i64) -> Option<i64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id(now_millis);
        self.tasks.push(Task::new(id, text.to_string()));

        if self.active_task_id.is_none() {
            self.set_active(id);
        }

        Some(id)
    }

    /// Two tasks created within the same millisecond still get distinct ids
    fn next_id(&mut self, now_millis: i64) -> i64 {
        let id = match self.last_id {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_id = Some(id);
        id
    }

    /// Flip the completed flag; unknown ids are ignored
    pub fn toggle_completion(&mut self, id: i64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task. The active reference is cleared if it names `id`,
    /// even when no such task exists.
    pub fn delete(&mut self, id: i64) -> Option<Task> {
        if self.active_task_id == Some(id) {
            self.active_task_id = None;
        }

        let position = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(position))
    }

    pub fn set_active(&mut self, id: i64) {
        self.active_task_id = Some(id);
    }

    /// First task whose id matches the active reference
    pub fn active_task(&self) -> Option<&Task> {
        let active_id = self.active_task_id?;
        self.tasks.iter().find(|t| t.id == active_id)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_ignores_blank_text() {
        let mut list = TaskList::new();
        assert_eq!(list.add("", 1_000), None);
        assert_eq!(list.add("   ", 1_000), None);
        assert!(list.is_empty());
        assert!(list.active_task_id.is_none());
    }

    #[test]
    fn test_add_first_task_becomes_active() {
        let mut list = TaskList::new();
        let id = list.add("buy milk", 1_000).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks[0], Task::new(id, "buy milk".to_string()));
        assert_eq!(list.active_task_id, Some(id));
    }

    #[test]
    fn test_add_trims_text_and_keeps_active() {
        let mut list = TaskList::new();
        let first = list.add("first", 1_000).unwrap();
        let second = list.add("  second  ", 2_000).unwrap();

        assert_eq!(list.tasks[1].text, "second");
        assert_eq!(second, 2_000);
        assert_eq!(list.active_task_id, Some(first));
    }

    #[test]
    fn test_ids_stay_unique_within_same_millisecond() {
        let mut list = TaskList::new();
        let a = list.add("a", 5_000).unwrap();
        let b = list.add("b", 5_000).unwrap();
        let c = list.add("c", 4_999).unwrap();

        assert_eq!(a, 5_000);
        assert_eq!(b, 5_001);
        assert_eq!(c, 5_002);
    }

    #[test]
    fn test_duplicate_text_is_allowed() {
        let mut list = TaskList::new();
        list.add("same", 1).unwrap();
        list.add("same", 2).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_toggle_completion() {
        let mut list = TaskList::new();
        let id = list.add("write report", 1_000).unwrap();

        assert!(list.toggle_completion(id));
        assert!(list.tasks[0].completed);
        assert_eq!(list.completed_count(), 1);

        assert!(list.toggle_completion(id));
        assert!(!list.tasks[0].completed);

        // Unknown id is a no-op
        assert!(!list.toggle_completion(42));
        assert!(!list.tasks[0].completed);
    }

    #[test]
    fn test_delete_active_clears_reference() {
        let mut list = TaskList::new();
        let id = list.add("only", 1_000).unwrap();

        let removed = list.delete(id).unwrap();
        assert_eq!(removed.text, "only");
        assert!(list.is_empty());
        assert!(list.active_task_id.is_none());
        assert!(list.active_task().is_none());
    }

    #[test]
    fn test_delete_other_keeps_active() {
        let mut list = TaskList::new();
        let active = list.add("focus", 1_000).unwrap();
        let other = list.add("later", 2_000).unwrap();

        list.delete(other);
        assert_eq!(list.active_task_id, Some(active));
        assert_eq!(list.active_task().unwrap().text, "focus");
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut list = TaskList::new();
        list.add("focus", 1_000).unwrap();
        assert!(list.delete(7).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_dangling_active_id_clears_it() {
        let mut list = TaskList::new();
        list.add("focus", 1_000).unwrap();
        list.set_active(99);

        assert!(list.delete(99).is_none());
        assert_eq!(list.active_task_id, None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_active_without_existence_check() {
        let mut list = TaskList::new();
        list.add("a", 1_000).unwrap();
        let b = list.add("b", 2_000).unwrap();

        list.set_active(b);
        assert_eq!(list.active_task().unwrap().text, "b");

        // Dangling ids are accepted but resolve to nothing
        list.set_active(99);
        assert_eq!(list.active_task_id, Some(99));
        assert!(list.active_task().is_none());
    }
}
