use crate::infra::InMemorySessionRepository;
use clap::Args;
use fitscope::assessment::{
    AssessmentReport, AssessmentService, CsvResponseImporter, QuestionCatalog, ResponseValue,
    SectionCategory, SessionRepository,
};
use fitscope::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export of responses (question_id,value)
    #[arg(long)]
    pub(crate) responses_csv: PathBuf,
    /// Print the raw report JSON instead of the rendered summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Likert agreement used for every statement in the walkthrough (1-5)
    #[arg(long, default_value_t = 4)]
    pub(crate) agreement: u8,
    /// Number of technical questions answered correctly (0-5)
    #[arg(long, default_value_t = 4)]
    pub(crate) correct_answers: usize,
    /// Print the catalog summary and skip the session walkthrough
    #[arg(long)]
    pub(crate) skip_session: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let responses = CsvResponseImporter::from_path(&args.responses_csv)?;

    let repository = Arc::new(InMemorySessionRepository::default());
    let service = AssessmentService::new(repository, QuestionCatalog::standard());
    let report = service.score_snapshot(&responses);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Report serialization failed: {err}"),
        }
    } else {
        println!("Scored {} response(s)", responses.len());
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        agreement,
        correct_answers,
        skip_session,
    } = args;

    let agreement = agreement.clamp(1, 5);
    let correct_answers = correct_answers.min(5);

    let catalog = QuestionCatalog::standard();
    println!("Career-fit assessment demo");
    println!(
        "Catalog: {} questions ({} psychometric, {} technical, {} WISCAR)",
        catalog.len(),
        catalog.section(SectionCategory::Psychometric).count(),
        catalog.section(SectionCategory::Technical).count(),
        catalog.section(SectionCategory::Wiscar).count(),
    );

    if skip_session {
        return Ok(());
    }

    println!(
        "\nWalkthrough: every statement rated {agreement}, {correct_answers} technical answer(s) correct"
    );

    let repository = Arc::new(InMemorySessionRepository::default());
    let service = AssessmentService::new(repository.clone(), QuestionCatalog::standard());

    let record = match service.start() {
        Ok(record) => record,
        Err(err) => {
            println!("  Session could not be started: {err}");
            return Ok(());
        }
    };
    println!("- Opened session {}", record.session_id);

    let answers = walkthrough_answers(&catalog, agreement, correct_answers);
    let mut latest = record;
    for (question_id, value) in answers {
        latest = match service.record_response(&latest.session_id, question_id, value) {
            Ok(record) => record,
            Err(err) => {
                println!("  Answer rejected: {err}");
                return Ok(());
            }
        };
    }

    let progress = latest.progress(service.catalog());
    println!(
        "- Answered {}/{} questions ({}%)",
        progress.answered, progress.total, progress.percent
    );

    let report = match service.finalize(&latest.session_id) {
        Ok(report) => report,
        Err(err) => {
            println!("  Report unavailable: {err}");
            return Ok(());
        }
    };
    render_report(&report);

    let stored_view = match repository.fetch(&latest.session_id) {
        Ok(Some(record)) => record.status_view(service.catalog()),
        Ok(None) => {
            println!("  Repository lookup returned no record");
            return Ok(());
        }
        Err(err) => {
            println!("  Repository unavailable: {err}");
            return Ok(());
        }
    };
    match serde_json::to_string_pretty(&stored_view) {
        Ok(json) => println!("\nPublic session payload:\n{json}"),
        Err(err) => println!("Public session payload unavailable: {err}"),
    }

    Ok(())
}

fn walkthrough_answers(
    catalog: &QuestionCatalog,
    agreement: u8,
    correct_answers: usize,
) -> Vec<(fitscope::assessment::QuestionId, ResponseValue)> {
    let mut answers = Vec::new();

    for question in catalog.section(SectionCategory::Psychometric) {
        answers.push((question.id.clone(), ResponseValue::Scale(agreement)));
    }
    for question in catalog.section(SectionCategory::Wiscar) {
        answers.push((question.id.clone(), ResponseValue::Scale(agreement)));
    }
    for (index, question) in catalog.section(SectionCategory::Technical).enumerate() {
        let answer = match catalog.correct_answer(&question.id) {
            Some(correct) if index < correct_answers => correct.to_string(),
            Some(correct) => question
                .options
                .iter()
                .find(|option| option.as_str() != correct)
                .cloned()
                .unwrap_or_else(|| correct.to_string()),
            None => continue,
        };
        answers.push((question.id.clone(), ResponseValue::Choice(answer)));
    }

    answers
}

fn render_report(report: &AssessmentReport) {
    println!(
        "\nRecommendation: {} (confidence {}%)",
        report.recommendation.label(),
        report.confidence
    );
    println!("Overall score: {}/100", report.overall_score);

    println!("\nSections");
    for section in &report.sections {
        println!(
            "- {}: {}/{} ({})",
            section.name, section.score, section.max_score, section.interpretation
        );
    }

    println!("\nWISCAR dimensions");
    for (dimension, score) in report.wiscar.iter() {
        println!("- {}: {}/100", dimension.label(), score);
    }

    println!("\nNext steps");
    for step in &report.next_steps {
        println!("- {step}");
    }

    println!("\nCareer paths");
    for path in &report.career_paths {
        println!("- {path}");
    }
}
