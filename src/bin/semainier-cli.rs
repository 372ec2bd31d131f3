#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use semainier::{
    io,
    report::{ScheduleRenderer, TextReport},
    scheduler::Scheduler,
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du registre
    #[arg(long, global = true, default_value = "roster.json")]
    roster: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un employé au registre
    AddEmployee {
        #[arg(long)]
        name: String,
    },

    /// Déclarer une préférence (jour, créneau, priorité)
    AddPreference {
        #[arg(long)]
        name: String,
        /// Jour anglais, complet ou abrégé (Monday, mon, ...)
        #[arg(long)]
        day: String,
        /// Morning, Afternoon ou Evening
        #[arg(long)]
        shift: String,
        /// Entier, plus haut = plus préféré
        #[arg(long)]
        priority: i32,
    },

    /// Importer des préférences depuis un CSV `name,day,shift,priority`
    ImportPreferences {
        #[arg(long)]
        csv: String,
    },

    /// Lister les employés du registre
    List,

    /// Générer le planning de la semaine et l'afficher
    Generate {
        /// Export JSON du registre (optionnel)
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV du planning (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
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

    let storage = JsonStorage::open(&cli.roster)?;
    let mut scheduler = match storage.load() {
        Ok(r) => {
            let mut s = Scheduler::new();
            *s.roster_mut() = r;
            s
        }
        Err(_) => Scheduler::new(),
    };

    let code = match cli.cmd {
        Commands::AddEmployee { name } => {
            scheduler.add_employee(&name);
            storage.save(scheduler.roster())?;
            0
        }
        Commands::AddPreference {
            name,
            day,
            shift,
            priority,
        } => {
            let day = io::parse_day(&day)?;
            let shift = shift.parse().map_err(anyhow::Error::msg)?;
            scheduler.add_preference(&name, day, shift, priority)?;
            storage.save(scheduler.roster())?;
            0
        }
        Commands::ImportPreferences { csv } => {
            let employees = io::import_preferences_csv(csv)?;
            scheduler.add_employees(employees);
            storage.save(scheduler.roster())?;
            0
        }
        Commands::List => {
            for e in &scheduler.roster().employees {
                let prefs: usize = semainier::DAYS
                    .iter()
                    .map(|&d| e.preferences_for_day(d).len())
                    .sum();
                println!("{} | {} | {} preference(s)", e.id.as_str(), e.name, prefs);
            }
            0
        }
        Commands::Generate { out_json, out_csv } => {
            let shortages = scheduler.generate_schedule();

            let renderer = TextReport;
            print!(
                "{}",
                renderer.render(scheduler.roster(), scheduler.grid(), &shortages)
            );

            if let Some(path) = out_json {
                io::export_roster_json(path, scheduler.roster())?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, scheduler.roster(), scheduler.grid())?;
            }

            if shortages.is_empty() {
                0
            } else {
                for s in &shortages {
                    eprintln!("Warning: unable to meet minimum staffing for {s}");
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
