//! Developer-facing demo binary: runs the pipeline against a JSON fixture
//! and prints the resulting segments. Stands in for the out-of-scope
//! transcript-formatting collaborator so the library is runnable without
//! pulling in ASR/diarization inference.

use clap::Parser;
use turnmerge::{merge_results, AsrResult, DiarizationResult, PipelineError};

#[derive(Parser, Debug)]
#[command(about = "Run the speaker-attribution pipeline against a JSON fixture")]
struct Args {
    /// Path to a JSON file containing an AsrResult (see turnmerge::AsrResult).
    asr_path: String,

    /// Path to a JSON file containing a DiarizationResult, if diarization
    /// should be applied.
    #[arg(long)]
    diarization_path: Option<String>,

    /// Remove filler words (um, uh, ...) before attribution.
    #[arg(long, default_value_t = false)]
    remove_fillers: bool,

    /// Print segments as pretty JSON instead of `[MM:SS]` plain text lines.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let asr: AsrResult = read_json(&args.asr_path)?;
    let diarization: Option<DiarizationResult> = args
        .diarization_path
        .as_deref()
        .map(read_json)
        .transpose()?;

    let segments = merge_results(&asr, diarization.as_ref(), args.remove_fillers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        for seg in &segments {
            let label = seg
                .speaker
                .as_ref()
                .map(|s| format!(" {}:", s))
                .unwrap_or_default();
            println!("[{}]{} {}", mmss(seg.start), label, seg.text);
        }
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> turnmerge::Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| PipelineError::Json {
        path: path.to_string(),
        source,
    })
}

fn mmss(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
