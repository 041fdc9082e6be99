pub mod dashboard;
pub mod export;
pub mod import;
pub mod interpretation;

pub use dashboard::{interpret_all, CategoryTrend, FleetSummary, RespondentInterpretation};
pub use export::ExportError;
pub use import::{ResponseSet, SurveyImportError, SurveyImporter};
pub use interpretation::{InterpretationError, SurveyInterpretation, SurveyInterpreter};
