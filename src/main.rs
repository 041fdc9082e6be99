use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use survey_insight::config::AppConfig;
use survey_insight::error::AppError;
use survey_insight::survey::export;
use survey_insight::survey::interpretation::{QuestionRef, SurveyInterpretation};
use survey_insight::survey::{
    interpret_all, FleetSummary, ResponseSet, SurveyImporter, SurveyInterpreter,
};
use survey_insight::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Survey Insight",
    about = "Interpret psychosocial wellbeing survey responses from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret one respondent's answers
    Analyze(AnalyzeArgs),
    /// Aggregate every respondent into a fleet dashboard
    Dashboard(DashboardArgs),
    /// Write one summary row per respondent as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Question layout CSV (Question ID, Display Order)
    #[arg(long)]
    questions: PathBuf,
    /// Responses CSV (Respondent ID, Question ID, Answer)
    #[arg(long)]
    responses: PathBuf,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Respondent to interpret
    #[arg(long)]
    respondent: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct DashboardArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Destination file (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    let interpreter = SurveyInterpreter::new(config.scoring.domain_model()?);
    info!(?config.environment, "survey interpreter ready");

    match cli.command {
        Command::Analyze(args) => run_analyze(&interpreter, args),
        Command::Dashboard(args) => run_dashboard(&interpreter, args),
        Command::Export(args) => run_export(&interpreter, args),
    }
}

fn load_input(input: &InputArgs) -> Result<(Vec<QuestionRef>, Vec<ResponseSet>), AppError> {
    let questions = SurveyImporter::questions_from_path(&input.questions)?;
    let responses = SurveyImporter::responses_from_path(&input.responses)?;
    Ok((questions, responses))
}

fn select_respondent<'a>(
    sets: &'a [ResponseSet],
    respondent: &str,
) -> Result<&'a ResponseSet, AppError> {
    sets.iter()
        .find(|set| set.respondent_id == respondent)
        .ok_or_else(|| AppError::UnknownRespondent(respondent.to_string()))
}

fn run_analyze(interpreter: &SurveyInterpreter, args: AnalyzeArgs) -> Result<(), AppError> {
    let (questions, responses) = load_input(&args.input)?;
    let set = select_respondent(&responses, &args.respondent)?;
    let interpretation = interpreter.analyze(&set.answers, &questions)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&interpretation)?),
        OutputFormat::Text => render_interpretation(&set.respondent_id, &interpretation),
    }
    Ok(())
}

fn run_dashboard(interpreter: &SurveyInterpreter, args: DashboardArgs) -> Result<(), AppError> {
    let (questions, responses) = load_input(&args.input)?;
    let results = interpret_all(interpreter, &responses, &questions)?;
    let summary = FleetSummary::from_interpretations(&results);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => render_dashboard(&summary),
    }
    Ok(())
}

fn run_export(interpreter: &SurveyInterpreter, args: ExportArgs) -> Result<(), AppError> {
    let (questions, responses) = load_input(&args.input)?;
    let results = interpret_all(interpreter, &responses, &questions)?;

    match args.output {
        Some(path) => export::export_to_path(path, &results)?,
        None => export::write_summaries(std::io::stdout().lock(), &results)?,
    }
    Ok(())
}

fn render_interpretation(respondent: &str, result: &SurveyInterpretation) {
    println!("Survey interpretation for {respondent}");
    println!(
        "Overall index {:.2} ({}), raw average {:.2}",
        result.overall_index, result.overall_level_label, result.overall_score
    );
    println!("{}", result.overall_interpretation);

    println!("\nCategories");
    for score in &result.categories {
        println!(
            "- {} {}: {:.2} (weighted {:.2}, {} answered) {}",
            score.icon,
            score.label,
            score.average_score,
            score.weighted_score,
            score.answered,
            score.level_label
        );
        println!("  {}", score.analysis);
    }

    if let Some(diagnosis) = &result.combined_diagnosis {
        println!(
            "\nDiagnosis: {} {} [{}]",
            diagnosis.icon,
            diagnosis.label,
            diagnosis.severity.label()
        );
        println!("{}", diagnosis.recommendation);
    }

    if result.early_warnings.is_empty() {
        println!("\nEarly warnings: none");
    } else {
        println!("\nEarly warnings");
        for warning in &result.early_warnings {
            println!("- [{}] {}", warning.severity.label(), warning.message);
        }
    }

    println!(
        "\nCompliance: {} ({})",
        result.compliance.rating_label, result.compliance.notes
    );
    println!(
        "Social rating: {} (composite {:.2})",
        result.social.rating.label(),
        result.social.composite
    );
    println!("Recommendation: {}", result.recommendation.label());
}

fn render_dashboard(summary: &FleetSummary) {
    println!("Fleet wellbeing dashboard");
    println!(
        "{} respondents, mean index {:.2} ({})",
        summary.respondents,
        summary.mean_overall_index,
        summary.mean_overall_level.label()
    );

    println!("\nOverall levels");
    for (level, count) in summary.overall_levels.iter().rev() {
        println!("- {}: {}", level.label(), count);
    }

    println!("\nRecommendation tiers");
    for (tier, count) in &summary.recommendation_tiers {
        println!("- {}: {}", tier.label(), count);
    }

    println!("\nCompliance ratings");
    for (rating, count) in &summary.compliance_ratings {
        println!("- {}: {}", rating.label(), count);
    }

    println!("\nSocial ratings");
    for (rating, count) in &summary.social_ratings {
        println!("- {}: {}", rating.label(), count);
    }

    println!("\nCategory trends");
    for trend in &summary.categories {
        println!(
            "- {}: {:.2} ({})",
            trend.label, trend.mean_score, trend.level_label
        );
    }

    if summary.critical_respondents.is_empty() {
        println!("\nCritical warnings: none");
    } else {
        println!(
            "\nCritical warnings: {}",
            summary.critical_respondents.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_insight::survey::interpretation::Answer;

    fn sets() -> Vec<ResponseSet> {
        vec![
            ResponseSet {
                respondent_id: "r1".to_string(),
                answers: vec![Answer::new("q1", "4")],
            },
            ResponseSet {
                respondent_id: "r2".to_string(),
                answers: vec![Answer::new("q1", "2")],
            },
        ]
    }

    #[test]
    fn select_respondent_finds_by_id() {
        let sets = sets();
        let set = select_respondent(&sets, "r2").expect("respondent present");
        assert_eq!(set.answers, vec![Answer::new("q1", "2")]);
    }

    #[test]
    fn select_respondent_reports_unknown_id() {
        let sets = sets();
        match select_respondent(&sets, "r9") {
            Err(AppError::UnknownRespondent(id)) => assert_eq!(id, "r9"),
            other => panic!("expected unknown respondent, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_export_without_output() {
        let cli = Cli::try_parse_from([
            "survey-insight",
            "export",
            "--questions",
            "questions.csv",
            "--responses",
            "responses.csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Export(args) => {
                assert!(args.output.is_none());
                assert_eq!(args.input.questions, PathBuf::from("questions.csv"));
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }

    #[test]
    fn cli_parses_json_format() {
        let cli = Cli::try_parse_from([
            "survey-insight",
            "dashboard",
            "--questions",
            "q.csv",
            "--responses",
            "r.csv",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Dashboard(args) => assert_eq!(args.format, OutputFormat::Json),
            other => panic!("expected dashboard command, got {other:?}"),
        }
    }
}
