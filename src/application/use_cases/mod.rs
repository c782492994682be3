/// Use cases module containing application business logic orchestration
mod generate_reports;

pub use generate_reports::GenerateReportsUseCase;
