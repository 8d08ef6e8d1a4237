#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use horaire::{
    catalog::Catalog,
    grid::{Day, Slot},
    io,
    policy::{export_policy_json, load_policy_from_file, Policy},
    report::{ReportRenderer, TextReport},
    scheduler::{detect_conflicts, Scheduler},
    storage::{JsonStorage, Storage},
    timetable::Timetable,
};
use rand::Rng;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de génération d'emplois du temps (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'emploi du temps
    #[arg(long, global = true, default_value = "timetable.json")]
    timetable: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer un emploi du temps
    Generate {
        /// Catalogue JSON (enseignants, matières, salles)
        #[arg(long, conflicts_with_all = ["teachers", "subjects", "classrooms"])]
        catalog: Option<String>,
        /// CSV `name,subjects,max_periods_per_day`
        #[arg(long)]
        teachers: Option<String>,
        /// CSV `name,weekly_periods,requires_lab`
        #[arg(long)]
        subjects: Option<String>,
        /// CSV `label,is_lab,capacity`
        #[arg(long)]
        classrooms: Option<String>,
        /// Politique JSON (défaut : politique de référence)
        #[arg(long)]
        policy: Option<String>,
        /// Graine ; tirée au hasard si absente
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Afficher la semaine, jour par jour
    Show,

    /// Vérifier les conflits
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Exporter l'emploi du temps
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_catalog: Option<String>,
    },

    /// Écrire la politique de référence dans un fichier JSON
    Policy {
        #[arg(long)]
        out: String,
    },

    /// Écrire le bilan de génération
    Report {
        /// Fichier de sortie (texte brut) ; stdout si absent
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.timetable)?;

    let code = match cli.cmd {
        Commands::Generate {
            catalog,
            teachers,
            subjects,
            classrooms,
            policy,
            seed,
        } => {
            let catalog = match catalog {
                Some(path) => io::load_catalog_json(path)?,
                None => load_catalog_csv(teachers, subjects, classrooms)?,
            };
            let policy = match policy {
                Some(path) => load_policy_from_file(path)?,
                None => Policy::default(),
            };
            let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());

            let mut scheduler = Scheduler::seeded(policy.clone(), seed)?;
            let generation = scheduler.generate(&catalog)?;
            let timetable = Timetable::new(seed, policy, catalog, generation);
            storage.save(&timetable)?;

            print!("{}", TextReport.render(&timetable));
            // Code 2 = WARNING/INCOMPLETE
            if timetable.shortfalls().is_empty() {
                0
            } else {
                2
            }
        }
        Commands::Show => {
            let timetable = load(&storage)?;
            print_week(&timetable);
            0
        }
        Commands::Check { report } => {
            let timetable = load(&storage)?;
            let conflicts =
                detect_conflicts(&timetable.schedule, &timetable.catalog, &timetable.policy);
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["day", "period", "subject", "kind"])?;
                    for c in &conflicts {
                        w.write_record([
                            c.slot.day.as_str(),
                            c.slot.period.to_string().as_str(),
                            c.subject.as_str(),
                            c.kind.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                2
            }
        }
        Commands::Export {
            out_json,
            out_csv,
            out_catalog,
        } => {
            let timetable = load(&storage)?;
            if let Some(path) = out_json {
                io::export_timetable_json(path, &timetable)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &timetable)?;
            }
            if let Some(path) = out_catalog {
                io::export_catalog_json(path, &timetable.catalog)?;
            }
            0
        }
        Commands::Policy { out } => {
            export_policy_json(&out, &Policy::default())?;
            println!("Default policy written to {out}");
            0
        }
        Commands::Report { out } => {
            let timetable = load(&storage)?;
            let content = TextReport.render(&timetable);
            match out {
                Some(path) => std::fs::write(&path, content)?,
                None => print!("{content}"),
            }
            0
        }
    };

    std::process::exit(code);
}

fn load(storage: &JsonStorage) -> Result<Timetable> {
    storage.load().with_context(|| {
        format!(
            "no timetable at {} (run `generate` first)",
            storage.path().display()
        )
    })
}

fn load_catalog_csv(
    teachers: Option<String>,
    subjects: Option<String>,
    classrooms: Option<String>,
) -> Result<Catalog> {
    let (Some(t), Some(s), Some(c)) = (teachers, subjects, classrooms) else {
        bail!("either --catalog or all of --teachers, --subjects, --classrooms are required");
    };
    Ok(Catalog::new(
        io::import_teachers_csv(t)?,
        io::import_subjects_csv(s)?,
        io::import_classrooms_csv(c)?,
    ))
}

// impression compacte : la pause est un libellé fixe, jamais lue dans le schedule
fn print_week(timetable: &Timetable) {
    let policy = &timetable.policy;
    for day in Day::ALL {
        println!("{day}");
        for period in 1..=policy.periods_per_day {
            let label = policy.period_label(period);
            if period == policy.break_period {
                println!("  {period} | {label}");
                continue;
            }
            match timetable.schedule.entry_at(Slot::new(day, period)) {
                Some(a) => println!(
                    "  {period} | {label} | {} | {} | {}",
                    a.subject, a.teacher, a.classroom
                ),
                None => println!("  {period} | {label} | -"),
            }
        }
    }
}
