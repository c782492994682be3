/// Domain layer: project records, the project graph and the solution-side indexes
pub mod membership;
pub mod package_aggregator;
pub mod project;
pub mod project_graph;
pub mod solution;

pub use membership::SolutionMembership;
pub use package_aggregator::{
    PackageAggregator, PackageMatrix, PackageMatrixRow, UNATTRIBUTED_SOLUTION,
};
pub use project::{PackageReference, Project, ProjectId};
pub use project_graph::{ProjectGraph, ProjectReference, DEFAULT_PROJECT_EXTENSION};
pub use solution::Solution;
