use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use shiftnote_core::{compose, ShiftRecord, ShiftType};

#[derive(Parser)]
#[command(name = "shiftnote")]
#[command(about = "Shift-note composition CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a shift note from a record file (JSON or YAML)
    Compose {
        /// Path to the shift record file
        input: PathBuf,
        /// Write the note to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the reference vocabulary
    Vocab,
    /// Print the half-hour slot labels for a shift
    Slots {
        /// Shift type: morning or afternoon
        shift: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compose { input, output }) => match read_record(&input) {
            Ok(record) => {
                let note = compose(&record);
                match output {
                    Some(path) => {
                        std::fs::write(&path, &note)?;
                        println!("Wrote note to {}", path.display());
                    }
                    None => println!("{}", note),
                }
            }
            Err(e) => eprintln!("Error reading record: {}", e),
        },
        Some(Commands::Vocab) => {
            let vocabulary = shiftnote_vocab::vocabulary();
            print_list("ADL options", vocabulary.adl_options);
            print_list("Visitor types", vocabulary.visitor_types);
            print_list("Intake levels", vocabulary.intake_levels);
            print_list("Engagement levels", vocabulary.engagement_levels);
            print_list("Receptiveness", vocabulary.receptiveness);
            print_list("Assistance levels", vocabulary.assistance_levels);
            print_list("ADL time levels", vocabulary.adl_time_levels);
            print_list("Meal assistance", vocabulary.meal_assistance_options);
            println!("Behaviour taxonomy:");
            for category in &vocabulary.behaviour_taxonomy {
                println!("  {}:", category.category);
                for manifestation in category.manifestations {
                    println!("    - {}", manifestation);
                }
            }
            print_list("Modifiable triggers", vocabulary.modifiable_triggers);
            print_list("Fixed triggers", vocabulary.fixed_triggers);
            print_list("Preventative strategies", vocabulary.preventative_strategies);
            print_list("Interventions", vocabulary.intervention_options);
        }
        Some(Commands::Slots { shift }) => match parse_shift(&shift) {
            Some(shift) => {
                for slot in shiftnote_vocab::slots::shift_slots(shift) {
                    println!("{}", slot);
                }
            }
            None => eprintln!("Unknown shift '{}': expected morning or afternoon", shift),
        },
        None => {
            println!("Use 'shiftnote --help' for commands");
        }
    }

    Ok(())
}

fn read_record(path: &Path) -> Result<ShiftRecord, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let record = if is_yaml {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    Ok(record)
}

fn parse_shift(value: &str) -> Option<ShiftType> {
    match value.to_lowercase().as_str() {
        "morning" => Some(ShiftType::Morning),
        "afternoon" => Some(ShiftType::Afternoon),
        _ => None,
    }
}

fn print_list(heading: &str, items: &[&str]) {
    println!("{}:", heading);
    for item in items {
        println!("  - {}", item);
    }
}
