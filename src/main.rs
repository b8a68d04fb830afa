use anyhow::{Context, Result};
use clap::Parser;
use carbon_footprint::{
    cli::{Cli, OutputFormat},
    config::{self, ValidationConfig},
    csv_output::CsvOutput,
    json_output::JsonOutput,
    normalize::Notice,
    profile::{CarbonProfile, Field},
    session::{Session, Step},
    text_output,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Apply command-line answers step by step, in questionnaire order
fn answer_questionnaire(session: &mut Session, answers: &[(Field, f64)]) -> Result<()> {
    loop {
        let step = session.step();
        for (field, raw) in answers.iter().filter(|(field, _)| field.step() == step) {
            session
                .set(*field, *raw)
                .with_context(|| format!("Invalid value '{}' for {}", raw, field))?;
        }
        if step == Step::Food {
            return Ok(());
        }
        session.next();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let validation = ValidationConfig {
        percentage_policy: args.percentage_policy,
        strict_bounds: args.strict_bounds,
    };

    // Profile file first, flags on top
    let (profile, mut notices): (CarbonProfile, Vec<Notice>) = match &args.profile {
        Some(path) => {
            let loaded = config::load_profile(path, &validation)
                .with_context(|| format!("Failed to load profile {}", path.display()))?;
            (loaded.profile, loaded.notices)
        }
        None => (CarbonProfile::default(), Vec::new()),
    };

    let mut session = Session::with_profile(validation, profile);
    answer_questionnaire(&mut session, &args.field_values())?;
    notices.extend_from_slice(session.notices());

    for notice in &notices {
        eprintln!("⚠️  {}", notice);
    }

    let result = session.calculate().context("Cannot calculate footprint")?;

    let output = match args.format {
        OutputFormat::Text => text_output::render(&result),
        OutputFormat::Json => {
            let mut json = JsonOutput::new(*session.profile(), result);
            for notice in notices {
                json.add_notice(notice);
            }
            json.to_json()?
        }
        OutputFormat::Csv => CsvOutput::from_result(&result, true).to_csv(),
    };
    print!("{}", output);
    if matches!(args.format, OutputFormat::Json) {
        println!();
    }

    Ok(())
}
