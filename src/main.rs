//! liftlog - Bilingual gym plan tracker

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use liftlog::db::Database;
use liftlog::exercises::{Category, Language, all_exercises, by_category, find_exercise};
use liftlog::logs::{LogEntry, LogStore, Scope};
use liftlog::matcher::match_exercise;
use liftlog::plan::{Plan, collect_media_ids, enrich_plan, matching_stats};
use liftlog::progression::{WeightTrend, build_series, compute_stats};
use liftlog::tui::App;

const DB_PATH: &str = "liftlog.db";

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(author, version, about = "Gym plan tracker: catalog matching and weight progression")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "LIFTLOG_DB", default_value = DB_PATH)]
    db: String,

    /// User scope for logs (guest when unset)
    #[arg(long, global = true, env = "LIFTLOG_USER")]
    user: Option<String>,

    /// Exercise name language: es or en
    #[arg(long, global = true, env = "LIFTLOG_LANG", default_value = "es")]
    lang: Language,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog exercises
    Catalog {
        /// Filter by muscle group (chest, back, quads, ...)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Resolve a free-text exercise name against the catalog
    Match {
        name: String,
    },

    /// Attach catalog media ids to a plan file
    Enrich {
        plan: PathBuf,

        /// Write the enriched plan here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show catalog coverage of a plan without modifying it
    Coverage {
        plan: PathBuf,
    },

    /// Log a set for an exercise
    Log {
        /// Exercise id (e.g., "hack_squat")
        exercise: String,

        #[arg(short, long, default_value = "")]
        weight: String,

        #[arg(short, long, default_value = "")]
        reps: String,

        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Show log history with progression stats
    History {
        exercise: String,
    },

    /// Remove one log entry by its position in `history`
    Remove {
        exercise: String,
        index: usize,
    },

    /// Open a terminal chart of an exercise's weight progression
    Chart {
        exercise: String,
    },
}

fn exercise_title(id: &str, lang: Language) -> String {
    find_exercise(id)
        .map(|e| e.name(lang).to_string())
        .unwrap_or_else(|| id.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let lang = cli.lang;
    let scope = Scope::from_user(cli.user.as_deref());

    match cli.command {
        Commands::Catalog { category } => {
            let entries = match category {
                Some(c) => by_category(c),
                None => all_exercises().iter().collect(),
            };
            for e in entries {
                println!(
                    "{:28} | {:40} | {:12} | media {}",
                    e.id,
                    e.name(lang),
                    e.category.name(lang),
                    e.external_media_id
                );
            }
        }

        Commands::Match { name } => match match_exercise(&name, lang) {
            Some(e) => println!("{} -> {} ({}, media {})", name, e.name(lang), e.id, e.external_media_id),
            None => println!("{} -> no match", name),
        },

        Commands::Enrich { plan, output } => {
            let loaded = Plan::load(&plan)
                .with_context(|| format!("loading plan {}", plan.display()))?;
            let enriched = enrich_plan(&loaded, lang);
            let target = output.unwrap_or(plan);
            enriched
                .save(&target)
                .with_context(|| format!("writing plan {}", target.display()))?;

            let stats = matching_stats(&enriched);
            info!("Enriched plan written to {}", target.display());
            println!(
                "Matched {}/{} exercises ({:.0}%)",
                stats.matched,
                stats.total,
                stats.match_rate * 100.0
            );
        }

        Commands::Coverage { plan } => {
            let loaded = Plan::load(&plan)
                .with_context(|| format!("loading plan {}", plan.display()))?;
            let stats = matching_stats(&loaded);
            println!("Total: {}", stats.total);
            println!("Matched: {}", stats.matched);
            println!("Unmatched: {}", stats.unmatched);
            println!("Match rate: {:.0}%", stats.match_rate * 100.0);

            let ids: Vec<_> = collect_media_ids(&loaded).into_iter().collect();
            println!("Media ids: {}", ids.join(", "));
        }

        Commands::Log { exercise, weight, reps, notes } => {
            if weight.trim().is_empty() && reps.trim().is_empty() {
                bail!("nothing to log: pass --weight and/or --reps");
            }
            let store = LogStore::new(Database::open(&cli.db)?);
            let entry = LogEntry::new(&weight, &reps, &notes);
            store
                .add_entry(&scope, &exercise, entry)
                .await
                .context("log entry was NOT saved")?;
            println!("Logged: {} - {} kg x {} ({})", exercise_title(&exercise, lang), weight, reps, scope);
        }

        Commands::History { exercise } => {
            let store = LogStore::new(Database::open(&cli.db)?);
            let entries = store.history(&scope, &exercise).await;

            println!("{}", exercise_title(&exercise, lang));
            println!("{:-<60}", "");
            for (i, (e, point)) in entries.iter().zip(build_series(&entries)).enumerate() {
                println!("{:3} | {} | {:>6} kg | {:>4} reps | {}", i, point.date, e.weight, e.reps, e.notes);
            }

            match compute_stats(&entries) {
                Some(s) => println!("Actual: {} kg | Máx: {} kg | Mín: {} kg", s.current, s.max, s.min),
                None => println!("Sin datos suficientes"),
            }
            if let Some(trend) = WeightTrend::fit(&entries) {
                println!("{}", trend.format());
            }
        }

        Commands::Remove { exercise, index } => {
            let store = LogStore::new(Database::open(&cli.db)?);
            match store.remove_entry(&scope, &exercise, index).await? {
                Some(e) => println!("Removed: {} {} kg x {}", e.date, e.weight, e.reps),
                None => println!("No entry {} for {}", index, exercise),
            }
        }

        Commands::Chart { exercise } => {
            let store = LogStore::new(Database::open(&cli.db)?);
            let entries = store.history(&scope, &exercise).await;
            let mut app = App::new(exercise_title(&exercise, lang), entries);
            app.run()?;
        }
    }

    Ok(())
}
