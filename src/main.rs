// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use symcheck::{
    append_symptom, common_symptoms, suggest, CheckReport, CheckerConfig, History, ProfileSource,
    ProfileUpdate, Session, SessionError, SymptomChecker, UserProfile, Vitals,
};

mod cli;
use cli::display::{self, BOLD, DIM};
use cli::{Cli, Commands, ProfileAction};

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CheckerConfig::new(cli.data_dir, cli.knowledge_base)
        .context("invalid configuration")?;

    match cli.command {
        Commands::Check {
            symptoms,
            reuse,
            temp,
            hr,
            spo2,
            json,
            delay_ms,
        } => {
            let vitals = Vitals { temp, hr, spo2 };
            run_check(&config, symptoms, reuse, vitals, json, delay_ms)
        }
        Commands::History { clear, json } => run_history(&config, clear, json),
        Commands::Diseases { json } => run_diseases(&config, json),
        Commands::Symptoms {
            prefix,
            limit,
            append_to,
        } => run_symptoms(prefix.as_deref(), limit, append_to.as_deref()),
        Commands::Login { user_id, email } => run_login(&config, &user_id, &email),
        Commands::Logout => run_logout(&config),
        Commands::Profile { action } => match action {
            ProfileAction::Show { json } => run_profile_show(&config, json),
            ProfileAction::Edit(args) => run_profile_edit(&config, &args.into()),
        },
    }
}

fn active_session(config: &CheckerConfig) -> Result<Session> {
    match config.session_store().load() {
        Ok(session) => Ok(session),
        Err(SessionError::NotAuthenticated) => {
            bail!("not logged in (run `symcheck login --user-id <ID> --email <EMAIL>`)")
        }
        Err(e) => Err(e).context("failed to load session"),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CHECK
// ═══════════════════════════════════════════════════════════════════════════

fn run_check(
    config: &CheckerConfig,
    symptoms: Option<String>,
    reuse: Option<usize>,
    vitals: Vitals,
    json: bool,
    delay_ms: u64,
) -> Result<()> {
    let session = active_session(config)?;
    let history_store = config.history_store();

    let text = match reuse {
        Some(index) => match history_store.load().get(index) {
            Some(record) => record.symptoms.clone(),
            None => bail!("no recent search at position {}", index),
        },
        None => symptoms.unwrap_or_default(),
    };

    let checker = SymptomChecker::new(
        config
            .load_knowledge_base()
            .context("failed to load knowledge base")?,
    );

    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }

    let Some(report) = checker.check(&session, &text, &vitals)? else {
        eprintln!("Enter at least one symptom.");
        return Ok(());
    };

    history_store.record_best_effort(&text, report.result_count());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&text, &vitals, &report);
    }
    Ok(())
}

fn print_report(text: &str, vitals: &Vitals, report: &CheckReport) {
    println!();
    display::title("SYMPTOM CHECK");
    println!();

    display::section_top("INPUT");
    display::row(&format!(
        " {}",
        display::truncate(text.trim(), display::BOX_WIDTH - 2)
    ));
    let summary = vitals.summary();
    if !summary.is_empty() {
        display::row(&format!(" {}", display::styled(&[DIM], &summary)));
    }

    display::section_mid("POSSIBLE CONDITIONS");
    if report.predictions.is_empty() {
        display::row(" No matching conditions found.");
    }
    for (i, result) in report.predictions.iter().enumerate() {
        let name = display::pad_right(&display::styled(&[BOLD], &result.disease), 28);
        display::row(&format!(
            " {}. {} {}",
            i + 1,
            name,
            display::percentage_bar(result.percentage)
        ));
        let matched = result.matched_symptoms.join(", ");
        display::row(&format!(
            "    {}",
            display::styled(&[DIM], &display::truncate(&matched, display::BOX_WIDTH - 5))
        ));
    }

    display::section_mid("TRIAGE");
    display::row(&format!(" {}", display::triage_badge(report.triage.level)));
    for note in &report.triage.notes {
        display::row(&format!("   {}", note));
    }
    display::row(&format!(" {}", display::styled(&[DIM], &report.triage.disclaimer)));
    display::section_bot();
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════
// HISTORY / KNOWLEDGE BASE / VOCABULARY
// ═══════════════════════════════════════════════════════════════════════════

fn run_history(config: &CheckerConfig, clear: bool, json: bool) -> Result<()> {
    let store = config.history_store();
    if clear {
        store.clear().context("failed to clear history")?;
        eprintln!("✓ History cleared");
        return Ok(());
    }

    let history = store.load();
    if json {
        println!("{}", serde_json::to_string_pretty(&history.to_vec())?);
    } else {
        print_history(&history);
    }
    Ok(())
}

fn print_history(history: &History) {
    if history.is_empty() {
        println!("No recent searches.");
        return;
    }
    display::section_top("RECENT SEARCHES");
    for (i, record) in history.iter().enumerate() {
        let when = record.timestamp.format("%Y-%m-%d %H:%M");
        let plural = if record.results == 1 { "" } else { "s" };
        let label = format!("{} result{}", record.results, plural);
        display::row(&format!(
            " {} {} {}  {}",
            i,
            display::styled(&[DIM], &when.to_string()),
            display::pad_right(&display::truncate(&record.symptoms, 36), 36),
            label
        ));
    }
    display::section_bot();
}

fn run_diseases(config: &CheckerConfig, json: bool) -> Result<()> {
    let kb = config
        .load_knowledge_base()
        .context("failed to load knowledge base")?;
    if json {
        println!("{}", serde_json::to_string_pretty(kb.records())?);
        return Ok(());
    }
    display::section_top("DISEASES");
    for record in &kb {
        display::row(&format!(
            " {} {}",
            display::pad_right(&display::styled(&[BOLD], &record.name), 24),
            display::styled(
                &[DIM],
                &display::truncate(&record.reference_symptoms.join(", "), display::BOX_WIDTH - 26)
            )
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_symptoms(prefix: Option<&str>, limit: usize, append_to: Option<&str>) -> Result<()> {
    let symptoms = match prefix {
        Some(prefix) => suggest(prefix, limit),
        None => common_symptoms(limit).to_vec(),
    };

    if let Some(text) = append_to {
        let Some(first) = symptoms.first() else {
            bail!("no symptom matches '{}'", prefix.unwrap_or_default());
        };
        println!("{}", append_symptom(text, first));
        return Ok(());
    }

    for symptom in symptoms {
        println!("{}", symptom);
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SESSION / PROFILE
// ═══════════════════════════════════════════════════════════════════════════

fn run_login(config: &CheckerConfig, user_id: &str, email: &str) -> Result<()> {
    let session = Session::login(user_id, email)?;
    config
        .session_store()
        .save(&session)
        .context("failed to save session")?;
    let profile = config
        .profile_source()
        .fetch_or_create(&session)
        .context("failed to load profile")?;
    eprintln!("✓ Logged in as {}", profile.display_name());
    Ok(())
}

fn run_logout(config: &CheckerConfig) -> Result<()> {
    match config.session_store().clear()? {
        Some(session) => eprintln!("✓ Logged out {}", session.user_id()),
        None => eprintln!("No active session."),
    }
    Ok(())
}

fn run_profile_show(config: &CheckerConfig, json: bool) -> Result<()> {
    let session = active_session(config)?;
    let profile = config.profile_source().fetch(&session)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }
    Ok(())
}

fn run_profile_edit(config: &CheckerConfig, update: &ProfileUpdate) -> Result<()> {
    if update.is_empty() {
        bail!("nothing to change (pass at least one of --first-name, --last-name, --phone, --address, --city)");
    }
    let session = active_session(config)?;
    let profile = config.profile_source().update(&session, update)?;
    eprintln!("✓ Profile updated");
    print_profile(&profile);
    Ok(())
}

fn print_profile(profile: &UserProfile) {
    let field = |label: &str, value: Option<&str>| {
        display::row(&format!(
            " {} {}",
            display::pad_right(&display::styled(&[DIM], label), 12),
            value.unwrap_or("-")
        ));
    };
    let name = profile.full_name();
    let since = profile.created_at.format("%Y-%m-%d").to_string();
    display::section_top("PROFILE");
    field("name", (!name.is_empty()).then_some(name.as_str()));
    field("email", Some(profile.email.as_str()));
    field("phone", profile.phone.as_deref());
    field("address", profile.address.as_deref());
    field("city", profile.city.as_deref());
    field("verified", Some(if profile.is_verified { "yes" } else { "no" }));
    field("member since", Some(since.as_str()));
    display::section_bot();
}
