use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Stable handle of a project record inside a [`super::ProjectGraph`].
///
/// Two handles are equal only when they point at the same record, which is
/// what sub-project de-duplication compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(usize);

impl ProjectId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A package reference fact as it appeared on one descriptor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    name: String,
    version: String,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.name, self.version)
    }
}

/// Project entity representing one build unit (one project descriptor)
#[derive(Debug, Clone)]
pub struct Project {
    id: ProjectId,
    display_name: String,
    file_path: PathBuf,
    root_path: PathBuf,
    sub_projects: Vec<ProjectId>,
    target_framework: String,
    root_namespace: String,
    packages: Vec<PackageReference>,
    package_versions: HashMap<String, String>,
    descriptor_read: bool,
}

impl Project {
    pub(crate) fn new(id: ProjectId, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            id,
            file_path: PathBuf::from(&display_name),
            display_name,
            root_path: PathBuf::new(),
            sub_projects: Vec::new(),
            target_framework: String::new(),
            root_namespace: String::new(),
            packages: Vec::new(),
            package_versions: HashMap::new(),
            descriptor_read: false,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Base file name of the descriptor; unique across the whole graph
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Directory of the project that first referenced this one.
    /// Empty for projects discovered by the scan itself.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn sub_projects(&self) -> &[ProjectId] {
        &self.sub_projects
    }

    pub fn target_framework(&self) -> &str {
        &self.target_framework
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// Every package line matched, in file order, duplicates included
    pub fn packages(&self) -> &[PackageReference] {
        &self.packages
    }

    /// Last version seen for `package_name` in this project
    pub fn package_version(&self, package_name: &str) -> Option<&str> {
        self.package_versions.get(package_name).map(String::as_str)
    }

    /// Whether this project's own descriptor was parsed, as opposed to the
    /// record only being synthesized from another project's reference
    pub fn descriptor_read(&self) -> bool {
        self.descriptor_read
    }

    /// The declared root namespace, or the descriptor file stem when none was declared
    pub fn effective_root_namespace(&self) -> String {
        if !self.root_namespace.is_empty() {
            return self.root_namespace.clone();
        }
        Path::new(&self.display_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display_name.clone())
    }

    /// Directory containing the descriptor file
    pub fn directory(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }

    pub(crate) fn set_file_path(&mut self, path: PathBuf) {
        self.file_path = path;
    }

    pub(crate) fn set_root_path(&mut self, path: PathBuf) {
        self.root_path = path;
    }

    pub(crate) fn set_target_framework(&mut self, value: impl Into<String>) {
        self.target_framework = value.into();
    }

    pub(crate) fn set_root_namespace(&mut self, value: impl Into<String>) {
        self.root_namespace = value.into();
    }

    pub(crate) fn mark_descriptor_read(&mut self) {
        self.descriptor_read = true;
    }

    pub(crate) fn add_package(&mut self, package: PackageReference) {
        self.package_versions
            .insert(package.name.clone(), package.version.clone());
        self.packages.push(package);
    }

    /// Appends `child` unless it is already listed. Returns whether it was added.
    pub(crate) fn push_sub_project(&mut self, child: ProjectId) -> bool {
        if self.sub_projects.contains(&child) {
            return false;
        }
        self.sub_projects.push(child);
        true
    }
}
