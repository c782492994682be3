use std::collections::HashMap;

/// Maps a project file name to the solutions that reference it.
///
/// Memberships are kept as one display string per project, solution names
/// joined by `", "` in the order the solution files were scanned.
#[derive(Debug, Clone, Default)]
pub struct SolutionMembership {
    entries: HashMap<String, String>,
}

impl SolutionMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, project_file_name: &str, solution_name: &str) {
        match self.entries.get_mut(project_file_name) {
            Some(existing) => {
                existing.push_str(", ");
                existing.push_str(solution_name);
            }
            None => {
                self.entries
                    .insert(project_file_name.to_string(), solution_name.to_string());
            }
        }
    }

    /// The membership display string for a project file name
    pub fn solutions_for(&self, project_file_name: &str) -> Option<&str> {
        self.entries.get(project_file_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
