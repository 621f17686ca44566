use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "anamnesis",
    about = "Clinical history intake: socio-economic scoring, complaint ordering and AI-assisted review",
    version
)]
pub(crate) struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub(crate) json: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create an empty patient record
    New(NewArgs),
    /// Score a head of family on the Kuppuswamy scale
    Classify(ClassifyArgs),
    /// Print a record with its derived tier and ordered complaints
    Show(RecordArgs),
    /// Suggest History of Presenting Complaint questions
    Questions(RecordArgs),
    /// Write a narrative summary of a record
    Summary(RecordArgs),
    /// List differential diagnoses for the chief complaints
    Diagnose(RecordArgs),
    /// Export a record as a DOCX report
    Export(ExportArgs),
    /// Inspect or create the user config
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a config file
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub(crate) struct NewArgs {
    /// Path of the record to create
    pub(crate) file: PathBuf,
    /// Replace an existing file
    #[arg(long)]
    pub(crate) force: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Education label, e.g. "High School"
    #[arg(long, default_value = "")]
    pub(crate) education: String,
    /// Occupation label, e.g. "Skilled Worker"
    #[arg(long, default_value = "")]
    pub(crate) occupation: String,
    /// Total monthly family income in rupees
    #[arg(long, default_value = "")]
    pub(crate) income: String,
}

#[derive(Args, Debug)]
pub(crate) struct RecordArgs {
    /// Path of a patient record (JSON)
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Path of a patient record (JSON)
    pub(crate) file: PathBuf,
    /// Output DOCX path
    #[arg(long)]
    pub(crate) out: PathBuf,
    /// Include generated summary, diagnoses and questions
    #[arg(long)]
    pub(crate) ai: bool,
    /// Tera template to use instead of the built-in report
    #[arg(long)]
    pub(crate) template: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct InitArgs {
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Bedrock model or inference profile id
    #[arg(long)]
    pub(crate) model_id: Option<String>,
    /// Named AWS profile; the default credential chain is used otherwise
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Replace an existing config
    #[arg(long)]
    pub(crate) force: bool,
}
