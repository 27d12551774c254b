use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for moodtasker
#[derive(Parser)]
#[command(
    name = "moodtasker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log employee moods from camera frames or text, get task suggestions and stress alerts",
    long_about = None
)]
pub struct Cli {
    /// Override history file path (useful for tests or shared folders)
    #[arg(global = true, long = "history")]
    pub history: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty history file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Capture camera frames, classify them and record the moods
    Capture {
        /// Employee identifier (prompted when omitted)
        #[arg(long, short)]
        employee: Option<String>,

        /// Directory of frames to read instead of the configured camera
        #[arg(long, value_name = "DIR")]
        source: Option<String>,

        /// Classifier command (frame path appended as last argument)
        #[arg(long, value_name = "CMD")]
        classifier: Option<String>,

        /// Skip the classifier and record this mood for every frame
        #[arg(long, conflicts_with = "classifier")]
        mood: Option<String>,

        /// Stop after N frames
        #[arg(long = "max-frames", value_name = "N")]
        max_frames: Option<usize>,

        /// Do not wait for the quit key between frames
        #[arg(long = "no-prompt")]
        no_prompt: bool,

        /// Do not print the mood chart at the end
        #[arg(long = "no-chart")]
        no_chart: bool,

        /// Stress alert threshold (defaults to the configured value)
        #[arg(long)]
        threshold: Option<usize>,
    },

    /// Score free text and record the resulting mood
    Text {
        #[arg(long, short)]
        employee: Option<String>,

        #[arg(long)]
        threshold: Option<usize>,

        /// Text to analyze
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Record a mood by hand
    Record {
        #[arg(long, short)]
        employee: Option<String>,

        /// Mood label (happy, sad, angry, neutral, stressed, fear, surprise, disgust)
        #[arg(long, short)]
        mood: String,

        #[arg(long)]
        threshold: Option<usize>,
    },

    /// Print the task suggestion for a mood
    Recommend {
        mood: String,

        #[arg(long, help = "Print every suggestion for the mood")]
        all: bool,

        #[arg(long, conflicts_with = "all", help = "Pick a random suggestion")]
        random: bool,
    },

    /// Check the stress alert for an employee
    Stress {
        #[arg(long, short)]
        employee: Option<String>,

        #[arg(long)]
        threshold: Option<usize>,
    },

    /// List recorded moods
    List {
        #[arg(long, short)]
        employee: Option<String>,

        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - ranges start:end in the same format (e.g. "2025-06:2025-08")
        /// - all
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Show the mood distribution chart
    Chart {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        /// Also write the chart to a PDF file
        #[arg(long, value_name = "FILE")]
        pdf: Option<String>,
    },

    /// Export the mood history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the history file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
