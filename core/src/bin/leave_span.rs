use clap::Parser;
use leavedesk_core::{
    config::Config,
    models::LeaveCategory,
    services::LeaveForm,
    utils::time::{format_iso_date, today_local},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Computes the working-day span of a leave request and checks it against
/// the submission rules.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Leave category (daily, sick, hajj, marriage, study, motherhood, birth)
    #[arg(short, long, default_value = "daily")]
    category: LeaveCategory,

    /// First day of leave as YYYY-MM-DD (defaults to today in APP_TIMEZONE)
    #[arg(short, long)]
    start: Option<String>,

    /// Last day of leave as YYYY-MM-DD (ignored for fixed-duration categories)
    #[arg(short, long)]
    end: Option<String>,

    /// Free-text note attached to the request
    #[arg(short, long, default_value = "")]
    note: String,

    /// Print the validated submission payload, or the error body, as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leavedesk_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let config = Config::load()?;
    tracing::debug!(
        time_zone = %config.time_zone,
        marriage_days = config.leave_policy.marriage_days.get(),
        birth_days = config.leave_policy.birth_days.get(),
        motherhood_days = config.leave_policy.motherhood_days.get(),
        "Loaded configuration from environment/.env"
    );

    let mut form = LeaveForm::new(args.category);
    form.start_date = args
        .start
        .unwrap_or_else(|| format_iso_date(today_local(&config.time_zone)));
    form.end_date = args.end.unwrap_or_default();
    form.note = args.note;
    form.set_category(args.category);

    let view = form.evaluate(&config.leave_policy);
    if view.offline_filing_required {
        println!(
            "Study leave longer than the self-service limit must be filed with the administration office."
        );
    }

    let payload = match form.to_payload(&config.leave_policy) {
        Ok(payload) => payload,
        Err(err) if args.json => {
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            std::process::exit(1);
        }
        Err(err) => anyhow::bail!("{} ({})", err, err.code()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{} leave from {} to {}: {} working days",
            payload.category,
            format_iso_date(payload.start_date),
            format_iso_date(payload.end_date),
            payload.working_days
        );
    }

    Ok(())
}
