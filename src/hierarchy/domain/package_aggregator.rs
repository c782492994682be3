use super::{Project, Solution};
use std::collections::HashMap;

/// Solution key used for projects no solution file references
pub const UNATTRIBUTED_SOLUTION: &str = "N/A";

/// Accumulates, per solution key, the distinct packages of its projects.
///
/// A solution key is a project's membership display string, so a project
/// shared by two solutions contributes to the combined key
/// (e.g. `"Shop.sln, Admin.sln"`) rather than to each solution.
#[derive(Debug, Clone, Default)]
pub struct PackageAggregator {
    solutions: Vec<Solution>,
    index: HashMap<String, usize>,
}

impl PackageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, solution_key: &str, package_name: &str) {
        let position = match self.index.get(solution_key) {
            Some(&position) => position,
            None => {
                self.solutions.push(Solution::new(solution_key));
                self.index
                    .insert(solution_key.to_string(), self.solutions.len() - 1);
                self.solutions.len() - 1
            }
        };
        self.solutions[position].add_package(package_name);
    }

    pub fn solution(&self, solution_key: &str) -> Option<&Solution> {
        self.index.get(solution_key).map(|&i| &self.solutions[i])
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Builds the package/version matrix of `projects` for one solution key.
    ///
    /// Columns are the solution's packages sorted case-insensitively; a cell
    /// is the project's last-seen version of that package, if any.
    pub fn matrix(&self, solution_key: &str, projects: &[&Project]) -> PackageMatrix {
        let mut columns: Vec<String> = self
            .solution(solution_key)
            .map(|s| s.packages().to_vec())
            .unwrap_or_default();
        columns.sort_by_key(|name| name.to_lowercase());

        let rows = projects
            .iter()
            .map(|project| PackageMatrixRow {
                project: project.display_name().to_string(),
                versions: columns
                    .iter()
                    .map(|column| project.package_version(column).map(String::from))
                    .collect(),
            })
            .collect();

        PackageMatrix { columns, rows }
    }
}

/// Cross-project package/version table of one solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMatrix {
    pub columns: Vec<String>,
    pub rows: Vec<PackageMatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMatrixRow {
    pub project: String,
    /// One entry per column; `None` renders as a blank cell
    pub versions: Vec<Option<String>>,
}
