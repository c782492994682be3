use super::{PackageReference, Project, ProjectId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default descriptor suffix for project files
pub const DEFAULT_PROJECT_EXTENSION: &str = ".csproj";

/// A project reference as written inside a descriptor: the directory part
/// (possibly empty, using either separator) and the referenced file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReference {
    pub directory: String,
    pub file_name: String,
}

impl ProjectReference {
    pub fn new(directory: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Resolves the reference against the referencing project's directory
    pub fn resolve(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        for component in self.directory.split(['\\', '/']).filter(|c| !c.is_empty()) {
            path.push(component);
        }
        path.push(&self.file_name);
        path
    }
}

/// ProjectGraph aggregate holding every project record of a run.
///
/// Records live in an arena and are addressed by [`ProjectId`]; the display
/// name index guarantees one record per descriptor base name. The same record
/// may be a child of several parents, so this is a directed graph and may
/// contain cycles.
#[derive(Debug, Clone)]
pub struct ProjectGraph {
    projects: Vec<Project>,
    by_name: HashMap<String, ProjectId>,
    project_extension: String,
}

impl Default for ProjectGraph {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_EXTENSION)
    }
}

impl ProjectGraph {
    pub fn new(project_extension: impl Into<String>) -> Self {
        Self {
            projects: Vec::new(),
            by_name: HashMap::new(),
            project_extension: project_extension.into(),
        }
    }

    pub fn project_extension(&self) -> &str {
        &self.project_extension
    }

    /// Returns the record for `display_name`, creating an empty one if needed
    pub fn get_or_create(&mut self, display_name: &str) -> ProjectId {
        self.get_or_insert(display_name).0
    }

    /// Like [`Self::get_or_create`], also reporting whether the record is new
    pub(crate) fn get_or_insert(&mut self, display_name: &str) -> (ProjectId, bool) {
        if let Some(&id) = self.by_name.get(display_name) {
            return (id, false);
        }
        let id = ProjectId::new(self.projects.len());
        self.projects.push(Project::new(id, display_name));
        self.by_name.insert(display_name.to_string(), id);
        (id, true)
    }

    /// Wires `parent -> child` for a reference found in the parent's descriptor.
    ///
    /// The child's root path and file path are only set when the child record
    /// is created here. The edge is skipped if the parent already lists the
    /// same record.
    pub fn add_sub_project_reference(
        &mut self,
        parent: ProjectId,
        root_path_hint: &Path,
        reference: &ProjectReference,
    ) -> ProjectId {
        let (child, created) = self.get_or_insert(&reference.file_name);
        if created {
            let project = &mut self.projects[child.index()];
            project.set_root_path(root_path_hint.to_path_buf());
            project.set_file_path(reference.resolve(root_path_hint));
        }
        self.projects[parent.index()].push_sub_project(child);
        child
    }

    pub fn find(&self, display_name: &str) -> Option<ProjectId> {
        self.by_name.get(display_name).copied()
    }

    pub fn project(&self, id: ProjectId) -> &Project {
        &self.projects[id.index()]
    }

    pub(crate) fn project_mut(&mut self, id: ProjectId) -> &mut Project {
        &mut self.projects[id.index()]
    }

    pub(crate) fn add_package(&mut self, id: ProjectId, package: PackageReference) {
        self.project_mut(id).add_package(package);
    }

    /// Projects in creation order
    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn sub_projects(&self, id: ProjectId) -> impl Iterator<Item = &Project> {
        self.project(id)
            .sub_projects()
            .iter()
            .map(move |&child| self.project(child))
    }

    /// Display name with the project extension removed
    pub fn short_name(&self, id: ProjectId) -> &str {
        let name = self.project(id).display_name();
        name.strip_suffix(self.project_extension.as_str())
            .unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.projects.iter().map(|p| p.sub_projects().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_returns_same_record() {
        let mut graph = ProjectGraph::default();
        let first = graph.get_or_create("Core.csproj");
        let second = graph.get_or_create("Core.csproj");

        assert_eq!(first, second);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive_keys() {
        let mut graph = ProjectGraph::default();
        let lower = graph.get_or_create("core.csproj");
        let upper = graph.get_or_create("Core.csproj");

        assert_ne!(lower, upper);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_add_sub_project_reference_creates_child_with_hint() {
        let mut graph = ProjectGraph::default();
        let app = graph.get_or_create("App.csproj");
        let reference = ProjectReference::new(r"..\Core", "Core.csproj");

        let core = graph.add_sub_project_reference(app, Path::new("src/App"), &reference);

        let child = graph.project(core);
        assert_eq!(child.display_name(), "Core.csproj");
        assert_eq!(child.root_path(), Path::new("src/App"));
        assert_eq!(child.file_path(), Path::new("src/App/../Core/Core.csproj"));
        assert_eq!(graph.project(app).sub_projects(), &[core]);
    }

    #[test]
    fn test_add_sub_project_reference_keeps_existing_root_path() {
        let mut graph = ProjectGraph::default();
        let app = graph.get_or_create("App.csproj");
        let core = graph.get_or_create("Core.csproj");
        let reference = ProjectReference::new("../Core", "Core.csproj");

        let child = graph.add_sub_project_reference(app, Path::new("src/App"), &reference);

        assert_eq!(child, core);
        assert_eq!(graph.project(core).root_path(), Path::new(""));
    }

    #[test]
    fn test_duplicate_reference_is_suppressed() {
        let mut graph = ProjectGraph::default();
        let app = graph.get_or_create("App.csproj");
        let reference = ProjectReference::new("..", "Core.csproj");

        graph.add_sub_project_reference(app, Path::new("src"), &reference);
        graph.add_sub_project_reference(app, Path::new("src"), &reference);

        assert_eq!(graph.project(app).sub_projects().len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_shared_child_is_one_record() {
        let mut graph = ProjectGraph::default();
        let web = graph.get_or_create("Web.csproj");
        let api = graph.get_or_create("Api.csproj");
        let reference = ProjectReference::new("..", "Core.csproj");

        let from_web = graph.add_sub_project_reference(web, Path::new("web"), &reference);
        let from_api = graph.add_sub_project_reference(api, Path::new("api"), &reference);

        assert_eq!(from_web, from_api);
        assert_eq!(graph.project(from_web).root_path(), Path::new("web"));
    }

    #[test]
    fn test_short_name_strips_extension() {
        let mut graph = ProjectGraph::default();
        let id = graph.get_or_create("Company.Web.csproj");
        assert_eq!(graph.short_name(id), "Company.Web");

        let mut vb = ProjectGraph::new(".vbproj");
        let id = vb.get_or_create("Legacy.vbproj");
        assert_eq!(vb.short_name(id), "Legacy");
    }

    #[test]
    fn test_resolve_reference_without_directory() {
        let reference = ProjectReference::new("", "Core.csproj");
        assert_eq!(
            reference.resolve(Path::new("src")),
            PathBuf::from("src/Core.csproj")
        );
    }
}
