use eyre::{Result, WrapErr};
use tracing::warn;

use anamnesis_assist::generate::{
    generate_differential_diagnosis, generate_history_summary, generate_hop_questions,
};
use anamnesis_assist::model::BedrockModel;
use anamnesis_assist::prompts;
use anamnesis_cli::aws;
use anamnesis_cli::config::{self, AnamnesisConfig, CredentialSource};
use anamnesis_cli::record::{load_record, save_record};
use anamnesis_core::models::patient::PatientHistory;
use anamnesis_export::render::ReportContext;
use anamnesis_export::styles::DocumentStyles;
use anamnesis_scoring::duration::{parse_count, sanitize_digits};
use anamnesis_scoring::{EducationLevel, OccupationLevel, kuppuswamy};

use crate::cli::{ClassifyArgs, Command, ConfigCommand, ExportArgs, InitArgs, NewArgs, RecordArgs};

pub(crate) async fn run(command: Command) -> Result<()> {
    match command {
        Command::New(args) => new_record(args),
        Command::Classify(args) => classify(args),
        Command::Show(args) => show(args),
        Command::Questions(args) => questions(args).await,
        Command::Summary(args) => summary(args).await,
        Command::Diagnose(args) => diagnose(args).await,
        Command::Export(args) => export(args).await,
        Command::Config {
            command: ConfigCommand::Show,
        } => config_show(),
        Command::Config {
            command: ConfigCommand::Init(args),
        } => config_init(args),
    }
}

async fn bedrock_model() -> Result<BedrockModel> {
    let config = config::load_config()?;
    let sdk_config = aws::build_aws_config(&config.region, &config.credentials).await;
    Ok(BedrockModel::new(&sdk_config, config.model_id))
}

fn new_record(args: NewArgs) -> Result<()> {
    save_record(&args.file, &PatientHistory::default(), args.force)?;
    println!("Created {}", args.file.display());
    Ok(())
}

fn classify(args: ClassifyArgs) -> Result<()> {
    let education = EducationLevel::from_label(&args.education);
    let occupation = OccupationLevel::from_label(&args.occupation);
    let income = parse_count(&sanitize_digits(&args.income));
    let score = kuppuswamy::score(education, occupation, income);

    println!("Education:  {:>2}  ({})", score.education, label_or_unset(education.label()));
    println!("Occupation: {:>2}  ({})", score.occupation, label_or_unset(occupation.label()));
    println!("Income:     {:>2}  (₹{income})", score.income);
    println!("Total:      {:>2}", score.total);
    println!("Socio-economic status: {}", score.tier);
    Ok(())
}

fn label_or_unset(label: &str) -> &str {
    if label.is_empty() { "not set" } else { label }
}

fn show(args: RecordArgs) -> Result<()> {
    let history = load_record(&args.file)?;

    let score = history.demographics.socio_economic_score();
    println!(
        "Kuppuswamy score: {} + {} + {} = {} ({})",
        score.education, score.occupation, score.income, score.total, score.tier
    );
    println!();
    print!("{}", prompts::summary_message(&history));
    Ok(())
}

async fn questions(args: RecordArgs) -> Result<()> {
    let history = load_record(&args.file)?;
    let model = bedrock_model().await?;
    let generation = generate_hop_questions(&model, &history.chief_complaints).await?;

    if generation.output.is_empty() {
        println!("No questions: enter at least one chief complaint first.");
    }
    for (i, question) in generation.output.iter().enumerate() {
        println!("{}. {question}", i + 1);
    }
    Ok(())
}

async fn summary(args: RecordArgs) -> Result<()> {
    let history = load_record(&args.file)?;
    let model = bedrock_model().await?;
    let generation = generate_history_summary(&model, &history).await?;
    println!("{}", generation.output);
    Ok(())
}

async fn diagnose(args: RecordArgs) -> Result<()> {
    let history = load_record(&args.file)?;
    let model = bedrock_model().await?;
    let generation = generate_differential_diagnosis(&model, &history.chief_complaints).await?;

    if generation.output.is_empty() {
        println!("No diagnoses: enter at least one chief complaint first.");
    }
    for (i, item) in generation.output.iter().enumerate() {
        println!("{}. {}", i + 1, item.diagnosis);
        println!("   {}", item.rationale);
    }
    Ok(())
}

async fn export(args: ExportArgs) -> Result<()> {
    let history = load_record(&args.file)?;
    let template = match &args.template {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read template {}", path.display()))?,
        ),
        None => None,
    };

    let mut context = ReportContext::new(&history, jiff::Zoned::now().date());

    if args.ai {
        let model = bedrock_model().await?;
        let (summary, diagnoses, questions) = tokio::join!(
            generate_history_summary(&model, &history),
            generate_differential_diagnosis(&model, &history.chief_complaints),
            generate_hop_questions(&model, &history.chief_complaints),
        );
        // A failed section is left out of the report.
        match summary {
            Ok(generation) => context = context.with_summary(generation.output),
            Err(failure) => warn!("{failure}"),
        }
        match diagnoses {
            Ok(generation) => context = context.with_diagnoses(generation.output),
            Err(failure) => warn!("{failure}"),
        }
        match questions {
            Ok(generation) => context = context.with_questions(generation.output),
            Err(failure) => warn!("{failure}"),
        }
    }

    let bytes = anamnesis_export::export_docx(
        &context,
        template.as_deref(),
        &DocumentStyles::default(),
    )
    .wrap_err("Failed to export the report")?;
    std::fs::write(&args.out, &bytes)
        .wrap_err_with(|| format!("failed to write {}", args.out.display()))?;

    println!("Wrote {}", args.out.display());
    Ok(())
}

fn config_show() -> Result<()> {
    let path = config::config_path()?;
    let config = config::load_config()?;
    let info = config::config_info(&config, &path);
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn config_init(args: InitArgs) -> Result<()> {
    let path = config::config_path()?;
    if path.exists() && !args.force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to replace it)",
            path.display()
        ));
    }

    let defaults = AnamnesisConfig::default();
    let config = AnamnesisConfig {
        region: args.region.unwrap_or(defaults.region),
        model_id: args.model_id.unwrap_or(defaults.model_id),
        credentials: match args.profile {
            Some(profile_name) => CredentialSource::Profile { profile_name },
            None => CredentialSource::DefaultChain,
        },
        ..defaults
    };
    let path = config::save_config(&config)?;
    println!("Wrote {}", path.display());
    Ok(())
}
